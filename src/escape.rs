// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The per-pixel evaluation: how many iterations of `z = z * z + c`
//! does a point survive before its magnitude crosses the bailout
//! radius of 2?  This is the only arithmetic in the renderer, and it
//! is a pure function of the point and the iteration cap.

use num::Complex;

/// Count the iterations of `z = z * z + c`, starting from zero,
/// before `|z|` exceeds the bailout radius.  A point that escapes on
/// the very first iteration reports 0; a point still inside the
/// circle when the cap is reached reports `depth` itself, which is
/// how callers recognize interior points.  A depth of zero therefore
/// reports 0 for every point.
pub fn escape_time(c: Complex<f64>, depth: usize) -> usize {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    for i in 0..depth {
        z = z * z + c;
        if z.norm_sqr() >= 4.0 {
            return i;
        }
    }
    depth
}
