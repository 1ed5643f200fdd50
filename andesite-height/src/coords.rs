//! Conversions between block coordinates, section coordinates and positions
//! within a section.
//!
//! These are shifts and masks rather than division and remainder so that
//! negative coordinates round toward negative infinity: block -1 lies in
//! section -1, at local position 15.

use num_traits::PrimInt;

/// Converts a block coordinate to the coordinate of the section containing it.
#[inline]
pub fn block_to_section<T>(coord: T) -> T
where
    T: PrimInt,
{
    coord >> 4
}

/// Converts a section coordinate to the block coordinate of its lowest block.
#[inline]
pub fn section_to_block<T>(coord: T) -> T
where
    T: PrimInt,
{
    coord << 4
}

/// Position of a block coordinate within its section, always in `0..=15`.
#[must_use]
pub const fn block_to_local(coord: i32) -> i32 {
    coord & 15
}
