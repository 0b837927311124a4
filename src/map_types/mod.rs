pub mod corridor_first;
pub mod room_first;
pub mod simple_walk;

use crate::{walls, CellSet, DungeonLayout, TilePainter};

/// Shared tail of every map type: the floor is final at this point, so
/// derive the walls, paint both layers, and package the result.
pub(crate) fn finish_layout(floor: CellSet, painter: &mut impl TilePainter) -> DungeonLayout {
    painter.paint_floor_tiles(&floor);
    let walls = walls::derive_walls(&floor);
    walls::paint_walls(&walls, painter);

    DungeonLayout { floor, walls }
}
