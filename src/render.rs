// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The renderer proper.  A fixed crew of workers shares one queue of
//! row indices; each worker claims the next row, shades its columns
//! left to right, and comes back for another until the queue is dry.
//! Claiming one row at a time is deliberate: escape counts are wildly
//! uneven across the plane, and pre-assigned stripes would leave most
//! workers idle while one of them grinds through the set's boundary.
//!
//! The output buffer needs no locks.  Every pixel owns a distinct
//! three-byte span, so concurrent writers can never collide; the only
//! synchronized object is the row queue itself.

extern crate crossbeam;

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use num::Complex;

use error::RenderError;
use escape::escape_time;
use frame::{Frame, Pixel};
use palette::{shade, Rgb};

/// The iteration cap used when nothing chooses one explicitly.  Deep
/// enough to resolve the set's boundary at ordinary zoom levels
/// without making interior pixels unbearably slow.
pub const DEFAULT_DEPTH: i64 = 1000;

// A raw view of the output buffer that every worker holds at once.
// The borrow checker cannot see that the offset map gives each pixel
// its own three bytes, so the disjointness lives here as a contract
// instead of in the types.
struct SharedSpans {
    base: *mut u8,
    len: usize,
}

// SAFETY: SharedSpans may be shared across worker threads because
// every write lands at the offset of a distinct pixel, and the offset
// map is injective over the frame: no two workers ever touch the
// same byte.
unsafe impl Sync for SharedSpans {}

impl SharedSpans {
    fn new(buffer: &mut [u8]) -> SharedSpans {
        SharedSpans {
            base: buffer.as_mut_ptr(),
            len: buffer.len(),
        }
    }

    // Callers must pass an offset produced by Frame::pixel_to_offset
    // for a pixel inside the frame this buffer was sized against.
    unsafe fn write_rgb(&self, offset: usize, rgb: Rgb) {
        debug_assert!(offset + 2 < self.len);
        let span = self.base.add(offset);
        *span = rgb.0;
        *span.add(1) = rgb.1;
        *span.add(2) = rgb.2;
    }
}

/// Renders the escape-time picture of a frame into a flat RGB byte
/// buffer.  The frame and the iteration cap are fixed at
/// construction; the worker count is chosen per call and changes
/// nothing but the wall-clock time.
#[derive(Debug)]
pub struct EscapeRenderer {
    frame: Frame,
    depth: usize,
}

impl EscapeRenderer {
    /// Requires the frame to draw and the iteration cap.  The cap is
    /// taken as a signed integer so that a negative value can be
    /// refused here, before any buffer is allocated or worker
    /// spawned; zero is a legitimate cap under which nothing escapes.
    pub fn new(frame: Frame, depth: i64) -> Result<EscapeRenderer, RenderError> {
        if depth < 0 {
            return Err(RenderError::InvalidDepth(depth));
        }
        Ok(EscapeRenderer {
            frame,
            depth: depth as usize,
        })
    }

    /// The frame this renderer draws.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Render into a freshly allocated buffer and return it.
    pub fn render(&self, threads: usize) -> Result<Vec<u8>, RenderError> {
        let mut buffer = vec![0 as u8; self.frame.byte_len()];
        self.render_into(&mut buffer, threads)?;
        Ok(buffer)
    }

    /// Render into a caller-owned buffer, overwriting all of it.  The
    /// buffer must be exactly `Frame::byte_len` bytes.  On a
    /// validation error the buffer has not been touched.
    pub fn render_into(&self, buffer: &mut [u8], threads: usize) -> Result<(), RenderError> {
        let frame = &self.frame;
        let depth = self.depth;
        self.render_with(
            buffer,
            threads,
            &|pixel| frame.pixel_to_point(pixel),
            &|count| shade(count, depth),
        )
    }

    /// The full render loop with the two per-pixel collaborators
    /// supplied by the caller: `scale` maps a pixel to the complex
    /// point it samples, `color` maps an escape count to its RGB
    /// triple.  Both must be pure; the renderer calls them from every
    /// worker and assumes equal pixels give equal bytes.
    pub fn render_with<S, C>(
        &self,
        buffer: &mut [u8],
        threads: usize,
        scale: &S,
        color: &C,
    ) -> Result<(), RenderError>
    where
        S: Fn(Pixel) -> Complex<f64> + Sync,
        C: Fn(usize) -> Rgb + Sync,
    {
        if threads == 0 {
            return Err(RenderError::InvalidThreadCount);
        }
        assert!(buffer.len() == self.frame.byte_len());

        let spans = SharedSpans::new(buffer);

        // One worker needs no queue and no scope; the claim order
        // degenerates to plain row order either way.
        if threads == 1 {
            for row in 0..self.frame.height() {
                self.shade_row(&spans, row, scale, color);
            }
            return Ok(());
        }

        let rows = Arc::new(Mutex::new(0..self.frame.height()));
        let spans = &spans;
        crossbeam::scope(|spawner| {
            for _ in 0..threads {
                let rows = rows.clone();
                spawner.spawn(move |_| loop {
                    let row = { rows.lock().unwrap().next() };
                    match row {
                        Some(row) => self.shade_row(spans, row, scale, color),
                        None => {
                            break;
                        }
                    }
                });
            }
        })
        .unwrap();
        Ok(())
    }

    /// Wall-clock duration of one complete render with `threads`
    /// workers, taken on the monotonic clock around nothing but the
    /// render call itself.
    pub fn measure(&self, threads: usize) -> Result<Duration, RenderError> {
        let mut buffer = vec![0 as u8; self.frame.byte_len()];
        let start = Instant::now();
        self.render_into(&mut buffer, threads)?;
        Ok(start.elapsed())
    }

    // One claimed unit of work: every column of one row, in order.
    // Row granularity amortizes the queue lock; anything finer and
    // the lock would cost more than the pixels.
    fn shade_row<S, C>(&self, spans: &SharedSpans, row: usize, scale: &S, color: &C)
    where
        S: Fn(Pixel) -> Complex<f64> + Sync,
        C: Fn(usize) -> Rgb + Sync,
    {
        for column in 0..self.frame.width() {
            let pixel = Pixel(row, column);
            let count = escape_time(scale(pixel), self.depth);
            let offset = self.frame.pixel_to_offset(pixel);
            unsafe {
                spans.write_rgb(offset, color(count));
            }
        }
    }
}
