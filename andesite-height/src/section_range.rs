//! Section and block ranges derived from a world's vertical extent.
//!
//! Two parallel ranges matter: the sections that store block data, and the
//! sections that store light data. The light range is exactly one section
//! wider on each side, light falloff at the world boundary needs the layer
//! adjacent to the top and bottom of the block range.

use std::ops::RangeInclusive;

use crate::height::HeightAccessor;

/// Coordinate of the lowest section that stores block data.
#[inline]
pub fn min_section<W: HeightAccessor + ?Sized>(world: &W) -> i32 {
    world.minimum_section()
}

/// Coordinate of the highest section that stores block data, inclusive.
#[inline]
pub fn max_section<W: HeightAccessor + ?Sized>(world: &W) -> i32 {
    world.maximum_section() - 1
}

/// Coordinate of the lowest section that stores light data, one below the
/// block range.
#[inline]
pub fn min_light_section<W: HeightAccessor + ?Sized>(world: &W) -> i32 {
    min_section(world) - 1
}

/// Coordinate of the highest section that stores light data, one above the
/// block range.
#[inline]
pub fn max_light_section<W: HeightAccessor + ?Sized>(world: &W) -> i32 {
    max_section(world) + 1
}

/// Number of sections that store block data.
#[inline]
pub fn total_sections<W: HeightAccessor + ?Sized>(world: &W) -> i32 {
    max_section(world) - min_section(world) + 1
}

/// Number of sections that store light data, always [`total_sections`] + 2.
#[inline]
pub fn total_light_sections<W: HeightAccessor + ?Sized>(world: &W) -> i32 {
    max_light_section(world) - min_light_section(world) + 1
}

/// Y coordinate of the lowest block in the world.
#[inline]
pub fn min_block_y<W: HeightAccessor + ?Sized>(world: &W) -> i32 {
    min_section(world) << 4
}

/// Y coordinate of the highest block in the world.
#[inline]
pub fn max_block_y<W: HeightAccessor + ?Sized>(world: &W) -> i32 {
    (max_section(world) << 4) | 15
}

/// All sections that store block data, bottom to top.
pub fn sections<W: HeightAccessor + ?Sized>(world: &W) -> RangeInclusive<i32> {
    min_section(world)..=max_section(world)
}

/// All sections that store light data, bottom to top.
pub fn light_sections<W: HeightAccessor + ?Sized>(world: &W) -> RangeInclusive<i32> {
    min_light_section(world)..=max_light_section(world)
}

/// Index of `section` into a per-section light array that starts at
/// [`min_light_section`].
#[inline]
pub fn light_section_index<W: HeightAccessor + ?Sized>(world: &W, section: i32) -> i32 {
    section - min_light_section(world)
}
