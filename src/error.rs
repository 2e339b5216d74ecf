// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can be rejected is rejected here, before any pixel
//! work starts.  Once a frame and a renderer have been constructed
//! and a render call has passed its thread-count check, the
//! computation itself has no failure paths: the offset map is total
//! over the validated domain and complex arithmetic cannot fail.

/// Configuration errors raised while validating a frame or a render
/// call.  A render call that returns one of these has not touched the
/// output buffer.
#[derive(Debug, Fail, PartialEq)]
pub enum RenderError {
    /// A render was requested with zero workers.  The row queue would
    /// never drain, so this is refused outright rather than clamped;
    /// a silent clamp would corrupt timing comparisons between runs.
    #[fail(display = "thread count must be at least 1")]
    InvalidThreadCount,

    /// A negative iteration cap.  Zero is fine (nothing escapes
    /// within zero iterations); less than zero has no meaning.
    #[fail(display = "depth must be non-negative, got {}", _0)]
    InvalidDepth(i64),

    /// The two complex-plane corners do not describe a rectangle with
    /// the left-lower corner below and to the left of the right-upper
    /// corner.
    #[fail(display = "the left lower corner is not below and to the left of the right upper corner")]
    MisshapenPlane,

    /// Transposed indexing swaps row and column in the offset
    /// calculation, which only permutes the buffer when the frame is
    /// square.  Anything else would collide or write out of bounds.
    #[fail(display = "transposed indexing requires a square frame, got {}x{}", _0, _1)]
    NonSquareFrame(usize, usize),
}
