// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the Frame struct, which ties together the three spaces a
//! renderer has to move between: the integral pixel grid with its
//! origin at the upper left, the rectangle of the complex plane being
//! drawn, and the flat RGB byte buffer the result lands in.  A Frame
//! answers exactly two questions about a pixel: which complex point
//! does it sample, and at which buffer offset do its three bytes live.

use num::Complex;

use error::RenderError;

/// The row and column of a pixel in the frame, with (0, 0) at the
/// upper left.  Row first: this is the order the render loops run in.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// How a pixel's row and column combine into a byte offset in the
/// interleaved RGB output buffer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Indexing {
    /// `offset = 3 * (column * width + row)`.  Row and column trade
    /// places relative to the usual scanline layout, so the stored
    /// image comes out mirrored across the main diagonal.  Kept as
    /// the default because existing outputs use it; only a
    /// permutation of the buffer when the frame is square, which
    /// `Frame::new` enforces.
    Transposed,
    /// `offset = 3 * (row * width + column)`, the conventional
    /// row-major scanline layout.  Valid for any frame shape.
    RowMajor,
}

/// Describes one renderable frame: the pixel grid's dimensions, the
/// complex-plane rectangle it covers, and the buffer layout.  All
/// fields are fixed at construction; a Frame is never mutated.
#[derive(Debug)]
pub struct Frame {
    width: usize,
    height: usize,
    leftlower: Complex<f64>,
    // Multipliers from complex-plane spans to grid spans, width and
    // height respectively.  Dividing a pixel coordinate by these maps
    // it back into the plane.
    grid_factors: (f64, f64),
    indexing: Indexing,
}

impl Frame {
    /// Constructor.  Takes the grid dimensions in pixels (width is
    /// the column count, height the row count), the left-lower and
    /// right-upper corners of the complex plane, and the buffer
    /// layout.  Rejects corner pairs that do not describe a
    /// rectangle, and rejects `Indexing::Transposed` for non-square
    /// grids, where its offset formula stops being a permutation.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
        indexing: Indexing,
    ) -> Result<Frame, RenderError> {
        if rightupper.re < leftlower.re || rightupper.im < leftlower.im {
            return Err(RenderError::MisshapenPlane);
        }
        if indexing == Indexing::Transposed && width != height {
            return Err(RenderError::NonSquareFrame(width, height));
        }

        let region_width = rightupper.re - leftlower.re;
        let region_height = rightupper.im - leftlower.im;

        Ok(Frame {
            width,
            height,
            leftlower,
            grid_factors: (
                (width as f64) / region_width,
                (height as f64) / region_height,
            ),
            indexing,
        })
    }

    /// Column count of the grid.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Row count of the grid.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The total number of pixels in the frame.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Whether the frame contains no pixels at all.  Rendering an
    /// empty frame is a no-op, not an error.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The number of bytes an output buffer for this frame must hold:
    /// three channels per pixel.
    pub fn byte_len(&self) -> usize {
        3 * self.len()
    }

    /// The buffer layout this frame was built with.
    pub fn indexing(&self) -> Indexing {
        self.indexing
    }

    /// Given a pixel, return the complex number it samples.  Columns
    /// run along the real axis, rows along the imaginary axis, both
    /// linearly from the left-lower corner.
    pub fn pixel_to_point(&self, pixel: Pixel) -> Complex<f64> {
        let Pixel(row, column) = pixel;
        Complex::new(
            self.leftlower.re + (column as f64) / self.grid_factors.0,
            self.leftlower.im + (row as f64) / self.grid_factors.1,
        )
    }

    /// Given a pixel, return the byte offset of its red channel in
    /// the output buffer; green and blue follow at the next two
    /// offsets.  Over the whole grid this map hits every multiple of
    /// three in `[0, byte_len())` exactly once, which is what lets
    /// the renderer write rows concurrently without locks.
    pub fn pixel_to_offset(&self, pixel: Pixel) -> usize {
        let Pixel(row, column) = pixel;
        match self.indexing {
            Indexing::Transposed => 3 * (column * self.width + row),
            Indexing::RowMajor => 3 * (row * self.width + column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;
    use std::collections::BTreeSet;

    #[test]
    fn frame_fails_on_bad_shape() {
        let f = Frame::new(
            4,
            4,
            Complex::new(-1.0, 1.0),
            Complex::new(1.0, -1.0),
            Indexing::Transposed,
        );
        assert_eq!(f.unwrap_err(), RenderError::MisshapenPlane);
    }

    #[test]
    fn frame_passes_on_good_shape() {
        let f = Frame::new(
            4,
            4,
            Complex::new(-1.0, -1.0),
            Complex::new(1.0, 1.0),
            Indexing::Transposed,
        );
        assert!(f.is_ok());
    }

    #[test]
    fn transposed_requires_square() {
        let f = Frame::new(
            5,
            4,
            Complex::new(-1.0, -1.0),
            Complex::new(1.0, 1.0),
            Indexing::Transposed,
        );
        assert_eq!(f.unwrap_err(), RenderError::NonSquareFrame(5, 4));

        let f = Frame::new(
            5,
            4,
            Complex::new(-1.0, -1.0),
            Complex::new(1.0, 1.0),
            Indexing::RowMajor,
        );
        assert!(f.is_ok());
    }

    #[test]
    fn pixel_to_point_on_positive_plane() {
        let f = Frame::new(
            5,
            5,
            Complex::new(0.0, 0.0),
            Complex::new(5.0, 5.0),
            Indexing::Transposed,
        )
        .unwrap();
        assert_eq!(f.pixel_to_point(Pixel(0, 0)), Complex::new(0.0, 0.0));
        assert_eq!(f.pixel_to_point(Pixel(2, 3)), Complex::new(3.0, 2.0));
        assert_eq!(f.pixel_to_point(Pixel(4, 4)), Complex::new(4.0, 4.0));
    }

    #[test]
    fn pixel_to_point_on_mixed_plane() {
        let f = Frame::new(
            4,
            4,
            Complex::new(-2.0, -2.0),
            Complex::new(2.0, 2.0),
            Indexing::Transposed,
        )
        .unwrap();
        assert_eq!(f.pixel_to_point(Pixel(2, 2)), Complex::new(0.0, 0.0));
        assert_eq!(f.pixel_to_point(Pixel(0, 0)), Complex::new(-2.0, -2.0));
        assert_eq!(f.pixel_to_point(Pixel(0, 3)), Complex::new(1.0, -2.0));
    }

    #[test]
    fn transposed_offsets_permute_a_square_frame() {
        let f = Frame::new(
            5,
            5,
            Complex::new(-1.0, -1.0),
            Complex::new(1.0, 1.0),
            Indexing::Transposed,
        )
        .unwrap();
        let offsets: BTreeSet<usize> = iproduct!(0..5, 0..5)
            .map(|(row, column)| f.pixel_to_offset(Pixel(row, column)))
            .collect();
        let expected: BTreeSet<usize> = (0..25).map(|k| 3 * k).collect();
        assert_eq!(offsets, expected);
    }

    #[test]
    fn row_major_offsets_permute_any_frame() {
        let f = Frame::new(
            5,
            4,
            Complex::new(-1.0, -1.0),
            Complex::new(1.0, 1.0),
            Indexing::RowMajor,
        )
        .unwrap();
        let offsets: BTreeSet<usize> = iproduct!(0..4, 0..5)
            .map(|(row, column)| f.pixel_to_offset(Pixel(row, column)))
            .collect();
        let expected: BTreeSet<usize> = (0..20).map(|k| 3 * k).collect();
        assert_eq!(offsets, expected);
    }

    #[test]
    fn transposed_offset_swaps_row_and_column() {
        let f = Frame::new(
            8,
            8,
            Complex::new(-1.0, -1.0),
            Complex::new(1.0, 1.0),
            Indexing::Transposed,
        )
        .unwrap();
        assert_eq!(f.pixel_to_offset(Pixel(2, 5)), 3 * (5 * 8 + 2));

        let f = Frame::new(
            8,
            8,
            Complex::new(-1.0, -1.0),
            Complex::new(1.0, 1.0),
            Indexing::RowMajor,
        )
        .unwrap();
        assert_eq!(f.pixel_to_offset(Pixel(2, 5)), 3 * (2 * 8 + 5));
    }
}
