// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Maps escape counts to colors.  Interior points, the ones that
//! never left the bailout circle, are drawn black; everything else
//! rides a polynomial ramp from deep blue near the set's boundary
//! out through orange to white for points that escape instantly.

use num::clamp;

/// An interleaved red, green, blue triple, one byte per channel.
pub type Rgb = (u8, u8, u8);

/// Color of points inside the set, and of every point at depth zero.
const INTERIOR: Rgb = (0, 0, 0);

/// Map an escape count to a color.  `count == depth` marks an
/// interior point and comes back black; smaller counts are normalized
/// against the depth and run through a fixed cubic ramp per channel.
/// The mapping is a pure function of its arguments, so a frame
/// rendered twice at the same depth shades identically.
pub fn shade(count: usize, depth: usize) -> Rgb {
    if count >= depth {
        return INTERIOR;
    }
    let t = (count as f64) / (depth as f64);
    let r = 9.0 * (1.0 - t) * t * t * t;
    let g = 15.0 * (1.0 - t) * (1.0 - t) * t * t;
    let b = 8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t;
    (channel(r), channel(g), channel(b))
}

fn channel(weight: f64) -> u8 {
    clamp(weight * 255.0, 0.0, 255.0) as u8
}
