use crate::{direction, CellSet};

use glam::IVec2;

/// Counts the cardinal neighbours of `cell` present in `floor`.
pub fn cardinal_neighbour_count(floor: &CellSet, cell: IVec2) -> usize {
    direction::CARDINAL
        .iter()
        .filter(|offset| floor.contains(&(cell + **offset)))
        .count()
}

/// A dead end is a floor cell with exactly one cardinal floor neighbour.
/// Recomputed from scratch on every call. A lone cell has zero neighbours
/// and does not qualify.
pub fn find_dead_ends(floor: &CellSet) -> Vec<IVec2> {
    floor
        .iter()
        .copied()
        .filter(|cell| cardinal_neighbour_count(floor, *cell) == 1)
        .collect()
}

/// Linear scan by Euclidean distance; the first minimum encountered wins, so
/// the result is deterministic for a given candidate order.
pub fn closest_point(target: IVec2, candidates: &[IVec2]) -> Option<IVec2> {
    let mut closest = None;
    let mut best = i32::MAX;
    for &candidate in candidates {
        let distance = (candidate - target).length_squared();
        if distance < best {
            best = distance;
            closest = Some(candidate);
        }
    }

    closest
}

/// Carves an L-shaped path from `from` to `to`: vertical until the y
/// coordinates match, then horizontal. Every intermediate cell is included;
/// the path is never diagonal.
pub fn straight_corridor(from: IVec2, to: IVec2) -> CellSet {
    let mut corridor = CellSet::default();
    let mut position = from;
    corridor.insert(position);
    while position.y != to.y {
        position.y += (to.y - position.y).signum();
        corridor.insert(position);
    }
    while position.x != to.x {
        position.x += (to.x - position.x).signum();
        corridor.insert(position);
    }

    corridor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_of(cells: &[(i32, i32)]) -> CellSet {
        cells.iter().map(|&(x, y)| IVec2::new(x, y)).collect()
    }

    #[test]
    fn corridor_endpoints_are_dead_ends() {
        let floor = floor_of(&[(0, 0), (1, 0), (2, 0)]);
        let mut dead_ends = find_dead_ends(&floor);
        dead_ends.sort_by_key(|cell| (cell.x, cell.y));
        assert_eq!(dead_ends, vec![IVec2::new(0, 0), IVec2::new(2, 0)]);
    }

    #[test]
    fn a_lone_cell_is_not_a_dead_end() {
        let floor = floor_of(&[(0, 0)]);
        assert!(find_dead_ends(&floor).is_empty());
    }

    #[test]
    fn junction_cells_are_not_dead_ends() {
        // Plus shape: the center has 4 neighbours, each arm tip has 1.
        let floor = floor_of(&[(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)]);
        let dead_ends = find_dead_ends(&floor);
        assert_eq!(dead_ends.len(), 4);
        assert!(!dead_ends.contains(&IVec2::ZERO));
    }

    #[test]
    fn closest_point_breaks_ties_by_scan_order() {
        let candidates = [IVec2::new(1, 0), IVec2::new(0, 1), IVec2::new(2, 0)];
        assert_eq!(
            closest_point(IVec2::ZERO, &candidates),
            Some(IVec2::new(1, 0))
        );
        assert_eq!(closest_point(IVec2::ZERO, &[]), None);
    }

    #[test]
    fn straight_corridor_goes_vertical_then_horizontal() {
        let corridor = straight_corridor(IVec2::new(0, 0), IVec2::new(2, 3));
        let expected = floor_of(&[(0, 0), (0, 1), (0, 2), (0, 3), (1, 3), (2, 3)]);
        assert_eq!(corridor, expected);
    }

    #[test]
    fn straight_corridor_handles_negative_directions() {
        let corridor = straight_corridor(IVec2::new(2, 3), IVec2::new(0, 0));
        let expected = floor_of(&[(2, 3), (2, 2), (2, 1), (2, 0), (1, 0), (0, 0)]);
        assert_eq!(corridor, expected);
    }

    #[test]
    fn degenerate_corridor_is_a_single_cell() {
        let corridor = straight_corridor(IVec2::new(5, 5), IVec2::new(5, 5));
        assert_eq!(corridor, floor_of(&[(5, 5)]));
    }
}
