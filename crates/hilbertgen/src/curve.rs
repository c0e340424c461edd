//! 2D Hilbert curve generation.
//!
//! [`curve_point`] and [`curve_index`] implement the canonical index ↔
//! coordinate mappings via a 2-bit Gray-code/rotation state machine.
//! [`HilbertCurve::generate`] materializes the whole traversal as a packed
//! buffer of 2-bit unit moves, which [`HilbertCurve::points`] decodes back
//! into coordinates lazily.

use crate::{
    error::{Error, Result},
    ops::{gray2, rot2},
};

/// Smallest supported curve order.
pub const MIN_ORDER: u32 = 1;

/// Largest supported curve order. Beyond this the doubled raster
/// coordinates leave practical 32-bit pixel addressing.
pub const MAX_ORDER: u32 = 13;

/// Number of discrete steps in a curve of the given order (`4^order`).
pub fn curve_length(order: u32) -> u32 {
    1u32 << (2 * order)
}

/// Decode a curve offset into `(x, y)` grid coordinates.
///
/// At each of the `order` recursion levels the next 2-bit digit of `index`
/// selects a quadrant; the entry/direction state tracks the rotation and
/// reflection of the sub-curve inside it. Order 1 traces
/// (0,0), (1,0), (1,1), (0,1).
pub fn curve_point(order: u32, index: u32) -> (u32, u32) {
    let hwidth = order * 2;
    let mut entry_state = 0;
    let mut direction_state = 0;
    let mut x_coord: u32 = 0;
    let mut y_coord: u32 = 0;
    for step in 0..order {
        // Extract 2 bits from the index
        let word = (index >> (hwidth - (step * 2) - 2)) & 3;

        let label = match direction_state {
            0 => rot2(gray2(word)) ^ entry_state,
            _ => gray2(word) ^ entry_state,
        };

        let bit_mask: u32 = 1 << (order - step - 1);

        if (label & 2) != 0 {
            x_coord |= bit_mask;
        }
        if (label & 1) != 0 {
            y_coord |= bit_mask;
        }

        if word == 3 {
            entry_state = 3 - entry_state;
        }
        if word == 0 || word == 3 {
            direction_state ^= 1;
        }
    }
    (x_coord, y_coord)
}

/// Recover the curve offset of a grid point. Inverse of [`curve_point`].
pub fn curve_index(order: u32, x: u32, y: u32) -> u32 {
    let mut index_acc = 0;
    let mut entry_state = 0;
    let mut direction_state = 0;
    for step in 0..order {
        let bit_offset = order - step - 1;
        let a_bit = (y >> bit_offset) & 1;
        let b_bit = (x >> bit_offset) & 1;
        let label: u32 = (a_bit | b_bit << 1) ^ entry_state;
        let word = match direction_state {
            0 => gray2(rot2(label)),
            _ => gray2(label),
        };
        if word == 3 {
            entry_state = 3 - entry_state;
        }
        index_acc = (index_acc << 2) | word;
        if word == 0 || word == 3 {
            direction_state ^= 1;
        }
    }
    index_acc
}

/// A unit move between consecutive curve points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// `x + 1`
    East,
    /// `y + 1`
    North,
    /// `x - 1`
    West,
    /// `y - 1`
    South,
}

impl Step {
    /// Decode a 2-bit step code.
    fn from_code(code: u8) -> Self {
        match code & 3 {
            0 => Self::East,
            1 => Self::North,
            2 => Self::West,
            _ => Self::South,
        }
    }

    /// The 2-bit code for this step.
    fn code(self) -> u8 {
        match self {
            Self::East => 0,
            Self::North => 1,
            Self::West => 2,
            Self::South => 3,
        }
    }

    /// The unit move from `(from_x, from_y)` to an adjacent point.
    fn between(from_x: u32, from_y: u32, to_x: u32, to_y: u32) -> Self {
        match (to_x as i64 - from_x as i64, to_y as i64 - from_y as i64) {
            (1, 0) => Self::East,
            (0, 1) => Self::North,
            (-1, 0) => Self::West,
            (0, -1) => Self::South,
            (dx, dy) => unreachable!("non-adjacent curve points: dx={dx} dy={dy}"),
        }
    }

    /// Move a cursor by one grid cell.
    fn apply(self, x: &mut u32, y: &mut u32) {
        match self {
            Self::East => *x += 1,
            Self::North => *y += 1,
            Self::West => *x -= 1,
            Self::South => *y -= 1,
        }
    }
}

/// Packed buffer of 2-bit step codes, four per byte.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StepBuffer {
    /// Packed storage, LSB-first within each byte.
    data: Vec<u8>,
    /// Number of step slots.
    len: u32,
}

impl StepBuffer {
    /// Allocate a zeroed buffer with `len` slots. Byte size is ceiling
    /// division so lengths not divisible by four are never under-allocated.
    fn zeroed(len: u32) -> Self {
        Self {
            data: vec![0; (len as usize).div_ceil(4)],
            len,
        }
    }

    /// Store the step code at `slot`. Slots start zeroed, so each slot is
    /// written at most once.
    fn set(&mut self, slot: u32, step: Step) {
        debug_assert!(slot < self.len, "step slot out of range");
        let shift = (slot & 3) * 2;
        self.data[(slot >> 2) as usize] |= step.code() << shift;
    }

    /// Read the step code at `slot`.
    fn get(&self, slot: u32) -> Step {
        debug_assert!(slot < self.len, "step slot out of range");
        let shift = (slot & 3) * 2;
        Step::from_code(self.data[(slot >> 2) as usize] >> shift)
    }
}

/// A fully generated Hilbert curve of a fixed order.
///
/// The traversal is stored as one 2-bit unit move per curve offset: slot
/// `i` (for `i >= 1`) holds the move that arrives at point `i`, and slot 0
/// is zero and unused so slots align with curve offsets. The buffer is
/// immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HilbertCurve {
    /// The order of the curve.
    order: u32,
    /// Packed unit moves tracing the curve from the origin.
    steps: StepBuffer,
}

impl HilbertCurve {
    /// Generate the curve of the given order.
    ///
    /// Returns [`Error::Order`] when `order` is outside
    /// [`MIN_ORDER`]`..=`[`MAX_ORDER`].
    pub fn generate(order: u32) -> Result<Self> {
        if !(MIN_ORDER..=MAX_ORDER).contains(&order) {
            return Err(Error::Order(order));
        }

        let length = curve_length(order);
        let mut steps = StepBuffer::zeroed(length);
        let (mut prev_x, mut prev_y) = curve_point(order, 0);
        for offset in 1..length {
            let (x, y) = curve_point(order, offset);
            steps.set(offset, Step::between(prev_x, prev_y, x, y));
            (prev_x, prev_y) = (x, y);
        }

        Ok(Self { order, steps })
    }

    /// The order of the curve.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Number of points on the curve (`4^order`).
    pub fn length(&self) -> u32 {
        self.steps.len
    }

    /// Side length of the grid the curve fills (`2^order`).
    pub fn side(&self) -> u32 {
        1 << self.order
    }

    /// Byte size of the packed step buffer.
    pub fn packed_len(&self) -> usize {
        self.steps.data.len()
    }

    /// Iterate over the `(x, y)` points of the curve in traversal order.
    pub fn points(&self) -> Points<'_> {
        Points {
            steps: &self.steps,
            offset: 0,
            x: 0,
            y: 0,
        }
    }
}

/// Lazy forward iterator over the points of a [`HilbertCurve`].
#[derive(Debug)]
pub struct Points<'a> {
    /// Packed moves being decoded.
    steps: &'a StepBuffer,
    /// Next curve offset to yield.
    offset: u32,
    /// Current cursor x.
    x: u32,
    /// Current cursor y.
    y: u32,
}

impl Iterator for Points<'_> {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<(u32, u32)> {
        if self.offset >= self.steps.len {
            return None;
        }
        if self.offset > 0 {
            self.steps.get(self.offset).apply(&mut self.x, &mut self.y);
        }
        self.offset += 1;
        Some((self.x, self.y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps.len - self.offset) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Points<'_> {}
