//! Byte layout of a single cell.
//!
//! The low nibble holds the age being finalized by the current generation.
//! The high nibble holds the age as of the last completed generation and is
//! only meaningful while [`super::AutomatonGrid::step`] runs: neighbours are
//! counted from it so that cells already rewritten in the same pass still
//! report their pre-step state.

pub const AGE_MASK: u8 = 0x0F;
pub const PREV_MASK: u8 = 0xF0;

/// Age of a freshly born cell.
pub const NEWBORN: u8 = 1;
/// Ages saturate here; a cell never dies of old age.
pub const MAX_AGE: u8 = 15;

#[inline]
pub fn age(cell: u8) -> u8 {
    cell & AGE_MASK
}

/// Copies the current age into the high nibble, keeping the low nibble.
#[inline]
pub fn snapshot(cell: u8) -> u8 {
    (cell << 4) | (cell & AGE_MASK)
}

#[inline]
pub fn was_alive(cell: u8) -> bool {
    cell & PREV_MASK != 0
}

/// B3/S23 with a saturating age counter.
#[inline]
pub fn next_age(age: u8, neighbours: u8) -> u8 {
    match (age, neighbours) {
        (0, 3) => NEWBORN,
        (0, _) => 0,
        (MAX_AGE, 2 | 3) => MAX_AGE,
        (_, 2 | 3) => age + 1,
        _ => 0,
    }
}
