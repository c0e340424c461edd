//! Hilbert curve generation and bit-packed monochrome rasterization.
//!
//! The crate is a straight pipeline: [`curve::HilbertCurve::generate`]
//! produces a packed sequence of unit moves tracing the curve of a given
//! order, [`raster::draw_curve`] walks that sequence into a
//! [`bitmap::BinaryImage`], and [`bitmap::BinaryImage::write_pbm`]
//! serializes the canvas as a binary PBM ("P4") file.

/// Bit-packed monochrome raster and PBM (P4) serialization.
pub mod bitmap;
/// Hilbert curve generation over a packed step buffer.
pub mod curve;
/// Error types used across the crate.
pub mod error;
/// Internal bit operations shared by the curve state machine.
#[doc(hidden)]
pub mod ops;
/// Walks a generated curve into a raster canvas.
pub mod raster;
