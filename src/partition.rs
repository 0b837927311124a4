use crate::sampling;

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Axis-aligned cell rectangle with exclusive `max = min + size`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GridRect {
    pub min: IVec2,
    pub size: IVec2,
}

impl GridRect {
    pub fn new(min: IVec2, size: IVec2) -> Self {
        GridRect { min, size }
    }

    pub fn max(&self) -> IVec2 {
        self.min + self.size
    }

    pub fn center(&self) -> IVec2 {
        self.min + self.size / 2
    }

    pub fn contains(&self, cell: IVec2) -> bool {
        cell.x >= self.min.x
            && cell.x < self.max().x
            && cell.y >= self.min.y
            && cell.y < self.max().y
    }
}

/// Splits `space` into leaf rectangles, breadth first. Each dequeued
/// rectangle flips a coin for its preferred split axis; an axis is eligible
/// when the rectangle spans at least twice the minimum along it, and a
/// rectangle with no eligible axis is emitted as a leaf. A dequeued rectangle
/// below the minimum in either dimension yields nothing, so undersized
/// `space` produces no rooms at all.
pub fn binary_space_partition(
    space: GridRect,
    min_width: u32,
    min_height: u32,
    rng: &mut impl Rng,
) -> Vec<GridRect> {
    // A zero minimum would admit 1-wide rectangles that can never split.
    let min_width = (min_width.max(1)) as i32;
    let min_height = (min_height.max(1)) as i32;

    let mut queue = VecDeque::new();
    let mut rooms = Vec::new();
    queue.push_back(space);
    while let Some(rect) = queue.pop_front() {
        if rect.size.x < min_width || rect.size.y < min_height {
            continue;
        }
        if rng.gen_bool(0.5) {
            if rect.size.y >= min_height * 2 {
                split_horizontally(rect, &mut queue, rng);
            } else if rect.size.x >= min_width * 2 {
                split_vertically(rect, &mut queue, rng);
            } else {
                rooms.push(rect);
            }
        } else if rect.size.x >= min_width * 2 {
            split_vertically(rect, &mut queue, rng);
        } else if rect.size.y >= min_height * 2 {
            split_horizontally(rect, &mut queue, rng);
        } else {
            rooms.push(rect);
        }
    }

    rooms
}

fn split_vertically(rect: GridRect, queue: &mut VecDeque<GridRect>, rng: &mut impl Rng) {
    let x_split = sampling::split_coordinate(rect.size.x, rng);
    queue.push_back(GridRect::new(rect.min, IVec2::new(x_split, rect.size.y)));
    queue.push_back(GridRect::new(
        IVec2::new(rect.min.x + x_split, rect.min.y),
        IVec2::new(rect.size.x - x_split, rect.size.y),
    ));
}

fn split_horizontally(rect: GridRect, queue: &mut VecDeque<GridRect>, rng: &mut impl Rng) {
    let y_split = sampling::split_coordinate(rect.size.y, rng);
    queue.push_back(GridRect::new(rect.min, IVec2::new(rect.size.x, y_split)));
    queue.push_back(GridRect::new(
        IVec2::new(rect.min.x, rect.min.y + y_split),
        IVec2::new(rect.size.x, rect.size.y - y_split),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::small_rng;
    use proptest::prelude::*;

    fn overlaps(a: &GridRect, b: &GridRect) -> bool {
        a.min.x < b.max().x && b.min.x < a.max().x && a.min.y < b.max().y && b.min.y < a.max().y
    }

    #[test]
    fn rect_center_and_containment() {
        let rect = GridRect::new(IVec2::new(2, 3), IVec2::new(4, 6));
        assert_eq!(rect.max(), IVec2::new(6, 9));
        assert_eq!(rect.center(), IVec2::new(4, 6));
        assert!(rect.contains(IVec2::new(2, 3)));
        assert!(rect.contains(IVec2::new(5, 8)));
        assert!(!rect.contains(IVec2::new(6, 3)));
        assert!(!rect.contains(IVec2::new(2, 9)));
    }

    #[test]
    fn undersized_bounds_yield_no_rooms() {
        let mut rng = small_rng([1, 1, 1, 1]);
        let space = GridRect::new(IVec2::ZERO, IVec2::new(3, 3));
        assert!(binary_space_partition(space, 4, 4, &mut rng).is_empty());
    }

    #[test]
    fn unsplittable_space_is_one_leaf() {
        // Big enough to survive, too small to cut along either axis.
        let mut rng = small_rng([2, 2, 2, 2]);
        let space = GridRect::new(IVec2::new(-3, -3), IVec2::new(5, 5));
        let rooms = binary_space_partition(space, 4, 4, &mut rng);
        assert_eq!(rooms, vec![space]);
    }

    proptest! {
        #[test]
        fn leaves_meet_minimums_and_stay_disjoint_inside_the_bounds(
            seed in any::<[u32; 4]>(),
            width in 1_i32..40,
            height in 1_i32..40,
            min_width in 1_u32..8,
            min_height in 1_u32..8,
        ) {
            let mut rng = small_rng(seed);
            let space = GridRect::new(IVec2::new(-5, 7), IVec2::new(width, height));
            let rooms = binary_space_partition(space, min_width, min_height, &mut rng);
            for room in &rooms {
                prop_assert!(room.size.x >= min_width as i32);
                prop_assert!(room.size.y >= min_height as i32);
                prop_assert!(room.min.x >= space.min.x && room.max().x <= space.max().x);
                prop_assert!(room.min.y >= space.min.y && room.max().y <= space.max().y);
            }
            for (i, a) in rooms.iter().enumerate() {
                for b in rooms.iter().skip(i + 1) {
                    prop_assert!(!overlaps(a, b));
                }
            }
        }
    }
}
