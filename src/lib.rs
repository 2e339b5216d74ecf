#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set takes a point on the complex plane and
//! repeatedly multiplies it by itself, measuring how quickly that
//! number goes to infinity.  This "velocity", the count of
//! iterations before the magnitude crosses the bailout radius, is
//! the number used to render the image: each pixel of the frame maps
//! to a point, the point's escape count maps to a color, and the
//! color lands at that pixel's offset in a flat RGB byte buffer.
//!
//! Because escape counts vary wildly across the plane (points near
//! the set's boundary run all the way to the iteration cap, points
//! far outside escape in a step or two), the renderer hands out rows
//! one at a time from a shared queue rather than pre-splitting the
//! frame into equal stripes.  Workers that finish fast rows come
//! back for more, and the whole frame finishes together.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate image;
extern crate itertools;
extern crate num;
extern crate num_cpus;

pub mod error;
pub mod escape;
pub mod frame;
pub mod palette;
pub mod render;

pub use error::RenderError;
pub use frame::{Frame, Indexing, Pixel};
pub use render::{EscapeRenderer, DEFAULT_DEPTH};
