//! Vertical-extent math for worlds addressed in 16-block chunk sections.
//!
//! Everything here is derived from two values a world exposes through
//! [`HeightAccessor`]: the coordinate of its lowest section and how many
//! sections it spans. [`section_range`] computes the block-data and
//! light-data section ranges from them, [`coords`] converts between block,
//! section and in-section coordinates.

pub mod coords;
pub mod height;
pub mod section_range;

pub use height::{HeightAccessor, WorldHeight, WorldHeightError};

/// Edge length of a chunk section, in blocks.
pub const SECTION_HEIGHT: usize = 16;
pub const SECTION_AREA: usize = SECTION_HEIGHT * SECTION_HEIGHT;
/// Number of blocks stored in one section.
pub const SECTION_VOLUME: usize = SECTION_AREA * SECTION_HEIGHT;
