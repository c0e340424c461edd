//! Bit-packed monochrome raster and PBM (P4) serialization.

use std::io::{self, Write};

/// A monochrome raster storing one bit per pixel, MSB-first within each
/// byte, row-major with rows padded to a byte boundary.
///
/// The layout matches the binary PBM ("P4") pixel packing exactly, so
/// serialization is a header write followed by the raw buffer. For widths
/// that are a multiple of 8 — every curve order above 1 — pixel
/// `(row, col)` lands on bit `row * width + col` of the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryImage {
    /// Packed pixel storage, zero-initialized (all white).
    data: Vec<u8>,
    /// Image width in pixels.
    n_cols: u32,
    /// Image height in pixels.
    n_rows: u32,
    /// Bytes per row (`ceil(n_cols / 8)`).
    stride: usize,
}

impl BinaryImage {
    /// Allocate a zeroed canvas of the given dimensions.
    pub fn new(n_cols: u32, n_rows: u32) -> Self {
        let stride = (n_cols as usize).div_ceil(8);
        Self {
            data: vec![0; stride * n_rows as usize],
            n_cols,
            n_rows,
            stride,
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.n_cols
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.n_rows
    }

    /// Byte size of the pixel buffer.
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// Set the pixel at `(row, col)` to black.
    ///
    /// The caller guarantees `row < height` and `col < width`; coordinates
    /// are checked with debug assertions only.
    pub fn set_pixel(&mut self, row: u32, col: u32) {
        debug_assert!(row < self.n_rows, "row {row} out of range");
        debug_assert!(col < self.n_cols, "col {col} out of range");
        let byte = row as usize * self.stride + (col as usize >> 3);
        self.data[byte] |= 0x80 >> (col & 0x7);
    }

    /// Whether the pixel at `(row, col)` is set.
    pub fn get_pixel(&self, row: u32, col: u32) -> bool {
        debug_assert!(row < self.n_rows, "row {row} out of range");
        debug_assert!(col < self.n_cols, "col {col} out of range");
        let byte = row as usize * self.stride + (col as usize >> 3);
        self.data[byte] & (0x80 >> (col & 0x7)) != 0
    }

    /// Serialize the image in binary PBM ("P4") format: a text header with
    /// the magic and dimensions, then the raw packed rows.
    pub fn write_pbm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "P4\n{} {}\n", self.n_cols, self.n_rows)?;
        out.write_all(&self.data)
    }
}
