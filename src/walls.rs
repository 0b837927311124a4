use crate::{direction, CellSet, TilePainter};

use fnv::FnvHashMap;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Derived wall cells keyed by position. `basic` masks cover the cardinal
/// list, `corner` masks the combined list; a cell bordered both ways shows up
/// in both maps and gets both paint calls.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct WallLayer {
    pub basic: FnvHashMap<IVec2, u8>,
    pub corner: FnvHashMap<IVec2, u8>,
}

/// Cells reachable from the floor along `directions` that are not floor
/// themselves.
pub fn wall_cells(floor: &CellSet, directions: &[IVec2]) -> CellSet {
    let mut walls = CellSet::default();
    for &cell in floor {
        for &offset in directions {
            let neighbour = cell + offset;
            if !floor.contains(&neighbour) {
                walls.insert(neighbour);
            }
        }
    }

    walls
}

/// Occupancy bitfield over `directions`: the first direction lands in the
/// most significant used bit, so the value reads like the direction list.
pub fn neighbour_mask(floor: &CellSet, cell: IVec2, directions: &[IVec2]) -> u8 {
    let mut mask = 0;
    for &offset in directions {
        mask <<= 1;
        if floor.contains(&(cell + offset)) {
            mask |= 1;
        }
    }

    mask
}

/// Computes the wall layer for a finished floor set. Wall cells are by
/// construction never floor cells.
pub fn derive_walls(floor: &CellSet) -> WallLayer {
    let basic = wall_cells(floor, &direction::CARDINAL)
        .into_iter()
        .map(|cell| (cell, neighbour_mask(floor, cell, &direction::CARDINAL)))
        .collect();
    let corner = wall_cells(floor, &direction::DIAGONAL)
        .into_iter()
        .map(|cell| (cell, neighbour_mask(floor, cell, &direction::EIGHT_WAY)))
        .collect();
    let layer = WallLayer { basic, corner };
    log::debug!(
        "Derived {} basic and {} corner wall cells",
        layer.basic.len(),
        layer.corner.len()
    );

    layer
}

/// Hands every wall cell to the painter, masks attached.
pub fn paint_walls(walls: &WallLayer, painter: &mut impl TilePainter) {
    for (&position, &mask) in &walls.basic {
        painter.paint_basic_wall(position, mask);
    }
    for (&position, &mask) in &walls.corner {
        painter.paint_corner_wall(position, mask);
    }
}
