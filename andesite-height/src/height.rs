use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coords;

/// Read-only view of a world's vertical extent, measured in chunk sections.
///
/// Implementors only supply the two raw values; everything else is derived.
/// The arithmetic in this crate assumes `section_count() >= 1` (a world
/// spans at least one section) and does not check it anywhere, so whoever
/// builds the accessor is responsible for that invariant. [`WorldHeight`]
/// enforces it at construction.
pub trait HeightAccessor {
    /// Coordinate of the lowest section that stores block data. May be
    /// negative.
    fn minimum_section(&self) -> i32;

    /// Number of sections between the lowest and one past the highest.
    fn section_count(&self) -> i32;

    /// One past the coordinate of the highest section that stores block data.
    fn maximum_section(&self) -> i32 {
        self.minimum_section() + self.section_count()
    }

    /// World height in blocks.
    fn height(&self) -> i32 {
        coords::section_to_block(self.section_count())
    }

    /// Y coordinate of the lowest block in the world.
    fn min_build_height(&self) -> i32 {
        coords::section_to_block(self.minimum_section())
    }

    /// One above the Y coordinate of the highest block in the world.
    fn max_build_height(&self) -> i32 {
        self.min_build_height() + self.height()
    }

    fn is_outside_build_height(&self, y: i32) -> bool {
        y < self.min_build_height() || y >= self.max_build_height()
    }

    /// Index of the section containing block `y` into a per-section array
    /// that starts at the minimum section. Out-of-range `y` yields an
    /// out-of-range index, callers bounds-check before indexing.
    fn section_index(&self, y: i32) -> i32 {
        self.section_index_from_section(coords::block_to_section(y))
    }

    fn section_index_from_section(&self, section: i32) -> i32 {
        section - self.minimum_section()
    }

    fn section_from_index(&self, index: i32) -> i32 {
        index + self.minimum_section()
    }
}

/// Plain [`HeightAccessor`] holding the extent as data, for worlds and
/// settings that are not themselves height-aware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldHeight {
    min_section: i32,
    section_count: i32,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldHeightError {
    #[error("world must span at least one section, got {0}")]
    NoSections(i32),
    #[error("minimum build height {0} is not on a section boundary")]
    MisalignedMinY(i32),
    #[error("world height {0} is not a whole number of sections")]
    MisalignedHeight(i32),
}

impl WorldHeight {
    /// Vertical extent of a vanilla overworld: sections -4 up to and
    /// including 19, block Y -64 up to and including 319.
    pub const OVERWORLD: WorldHeight = WorldHeight {
        min_section: -4,
        section_count: 24,
    };

    pub fn new(min_section: i32, section_count: i32) -> Result<Self, WorldHeightError> {
        if section_count < 1 {
            return Err(WorldHeightError::NoSections(section_count));
        }
        Ok(Self {
            min_section,
            section_count,
        })
    }

    /// Builds the extent from block units, the way dimension settings
    /// express it: the Y of the lowest block and the height in blocks.
    /// Both must be multiples of 16.
    pub fn from_block_range(min_y: i32, height: i32) -> Result<Self, WorldHeightError> {
        if coords::block_to_local(min_y) != 0 {
            return Err(WorldHeightError::MisalignedMinY(min_y));
        }
        if coords::block_to_local(height) != 0 {
            return Err(WorldHeightError::MisalignedHeight(height));
        }
        Self::new(
            coords::block_to_section(min_y),
            coords::block_to_section(height),
        )
    }
}

impl HeightAccessor for WorldHeight {
    fn minimum_section(&self) -> i32 {
        self.min_section
    }

    fn section_count(&self) -> i32 {
        self.section_count
    }
}

#[cfg(test)]
mod test {
    use super::{HeightAccessor, WorldHeight, WorldHeightError};

    #[test]
    fn overworld_build_heights() {
        let world = WorldHeight::OVERWORLD;
        assert_eq!(world.minimum_section(), -4);
        assert_eq!(world.maximum_section(), 20);
        assert_eq!(world.height(), 384);
        assert_eq!(world.min_build_height(), -64);
        assert_eq!(world.max_build_height(), 320);
    }

    #[test]
    fn build_height_bounds_are_exclusive_at_the_top() {
        let world = WorldHeight::OVERWORLD;
        assert!(!world.is_outside_build_height(-64));
        assert!(!world.is_outside_build_height(319));
        assert!(world.is_outside_build_height(-65));
        assert!(world.is_outside_build_height(320));
    }

    #[test]
    fn section_index_spans_the_section_array() {
        let world = WorldHeight::OVERWORLD;
        assert_eq!(world.section_index(world.min_build_height()), 0);
        assert_eq!(
            world.section_index(world.max_build_height() - 1),
            world.section_count() - 1
        );
        // One block past either end lands one index past either end.
        assert_eq!(world.section_index(world.min_build_height() - 1), -1);
        assert_eq!(
            world.section_index(world.max_build_height()),
            world.section_count()
        );
    }

    #[test]
    fn section_index_round_trips_through_section() {
        let world = WorldHeight::new(-8, 5).unwrap();
        for index in 0..world.section_count() {
            let section = world.section_from_index(index);
            assert_eq!(world.section_index_from_section(section), index);
        }
    }

    #[test]
    fn construction_rejects_empty_worlds() {
        assert_eq!(
            WorldHeight::new(0, 0),
            Err(WorldHeightError::NoSections(0))
        );
        assert_eq!(
            WorldHeight::new(3, -2),
            Err(WorldHeightError::NoSections(-2))
        );
    }

    #[test]
    fn block_range_must_be_section_aligned() {
        assert_eq!(
            WorldHeight::from_block_range(-60, 384),
            Err(WorldHeightError::MisalignedMinY(-60))
        );
        assert_eq!(
            WorldHeight::from_block_range(-64, 100),
            Err(WorldHeightError::MisalignedHeight(100))
        );
        assert_eq!(
            WorldHeight::from_block_range(-64, 0),
            Err(WorldHeightError::NoSections(0))
        );
        assert_eq!(
            WorldHeight::from_block_range(-64, 384),
            Ok(WorldHeight::OVERWORLD)
        );
    }

    #[test]
    fn serde_round_trip() {
        let world = WorldHeight::OVERWORLD;
        let json = serde_json::to_string(&world).unwrap();
        assert_eq!(json, r#"{"min_section":-4,"section_count":24}"#);
        assert_eq!(serde_json::from_str::<WorldHeight>(&json).unwrap(), world);
    }
}
