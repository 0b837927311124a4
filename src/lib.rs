pub mod direction;
pub mod map_types;
pub mod partition;
pub mod sampling;
pub mod topology;
pub mod walk;
pub mod walls;

use fnv::FnvHashSet;
use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::walls::WallLayer;

/// Set of open grid cells. Grows by unioning during a generation pass and
/// never shrinks; re-adding a cell is a no-op.
pub type CellSet = FnvHashSet<IVec2>;

/// Implement this to let the map types write finished layouts into your
/// tilemap. Tile selection from the neighbour masks is the painter's problem.
pub trait TilePainter {
    /// Called once per pass with the complete floor set.
    fn paint_floor_tiles(&mut self, floor: &CellSet);

    /// `neighbours` is a 4-bit cardinal occupancy mask; the first direction
    /// in the catalog occupies bit 3.
    fn paint_basic_wall(&mut self, position: IVec2, neighbours: u8);

    /// `neighbours` is an 8-bit occupancy mask over the combined direction
    /// list; the first direction in the catalog occupies bit 7.
    fn paint_corner_wall(&mut self, position: IVec2, neighbours: u8);
}

/// One finished generation pass: the floor cells plus the wall layer derived
/// from them after the floor was finalized.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DungeonLayout {
    pub floor: CellSet,
    pub walls: WallLayer,
}

/// Common entry point shared by all map types. A pass either runs to
/// completion or is not started; there is no retry or rollback.
pub trait MapGenerator {
    fn generate<R: Rng, P: TilePainter>(
        &self,
        start: IVec2,
        rng: &mut R,
        painter: &mut P,
    ) -> DungeonLayout;
}

/// Parameter validation failures, reported when a spec value is constructed.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum SpecError {
    #[error("room share {0} is outside [0, 1]")]
    RoomShareOutOfRange(f32),
}
