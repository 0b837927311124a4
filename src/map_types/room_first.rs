use crate::{
    map_types::finish_layout,
    partition::{self, GridRect},
    sampling, topology,
    walk::{self, WalkSpec},
    CellSet, DungeonLayout, MapGenerator, TilePainter,
};

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Room-first map type: binary space partitioning cuts the bounding box into
/// room rectangles, each rectangle is filled (or grown organically), and the
/// room centers are connected by L-shaped corridors.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RoomFirstMapSpec {
    pub seed: [u32; 4],
    pub min_room_width: u32,
    pub min_room_height: u32,
    pub dungeon_width: u32,
    pub dungeon_height: u32,
    /// Cells kept clear between a room's floor and its rectangle bounds.
    pub offset: u32,
    /// Grow rooms with clipped random walks instead of rectangular fills.
    pub random_walk_rooms: bool,
    pub room_walk: WalkSpec,
}

impl Default for RoomFirstMapSpec {
    fn default() -> Self {
        RoomFirstMapSpec {
            seed: [0; 4],
            min_room_width: 4,
            min_room_height: 4,
            dungeon_width: 20,
            dungeon_height: 20,
            offset: 1,
            random_walk_rooms: false,
            room_walk: WalkSpec::default(),
        }
    }
}

impl RoomFirstMapSpec {
    /// Runs `generate` on a generator built from this spec's own seed.
    pub fn generate_seeded(&self, start: IVec2, painter: &mut impl TilePainter) -> DungeonLayout {
        self.generate(start, &mut sampling::small_rng(self.seed), painter)
    }

    fn fill_rooms(&self, rooms: &[GridRect]) -> CellSet {
        let offset = self.offset as i32;
        let mut floor = CellSet::default();
        for room in rooms {
            for column in offset..=room.size.x - offset {
                for row in offset..=room.size.y - offset {
                    floor.insert(room.min + IVec2::new(column, row));
                }
            }
        }

        floor
    }

    /// Walks from each rectangle's center and keeps only the cells that land
    /// inside the offset-inset bounds. A walk that never enters the inset
    /// region leaves that room empty; the corridor pass still reaches its
    /// center.
    fn grow_rooms(&self, rooms: &[GridRect], rng: &mut impl Rng) -> CellSet {
        let offset = self.offset as i32;
        let mut floor = CellSet::default();
        for room in rooms {
            let room_floor = walk::iterated_walk(&self.room_walk, room.center(), rng);
            let max = room.max();
            for position in room_floor {
                if position.x >= room.min.x + offset
                    && position.x <= max.x - offset
                    && position.y >= room.min.y + offset
                    && position.y <= max.y - offset
                {
                    floor.insert(position);
                }
            }
        }

        floor
    }
}

/// Greedy nearest-neighbour chain over the room centers, starting from a
/// uniformly picked one. Each hop carves an L-shaped corridor; the total
/// corridor length is not minimal and is not meant to be.
fn connect_rooms(mut centers: Vec<IVec2>, rng: &mut impl Rng) -> CellSet {
    let mut corridors = CellSet::default();
    if centers.is_empty() {
        return corridors;
    }
    let mut current = centers.remove(rng.gen_range(0, centers.len()));
    while !centers.is_empty() {
        let closest =
            topology::closest_point(current, &centers).expect("centers is non-empty here");
        let index = centers
            .iter()
            .position(|&center| center == closest)
            .expect("closest center comes from the list");
        centers.remove(index);
        corridors.extend(topology::straight_corridor(current, closest));
        current = closest;
    }

    corridors
}

impl MapGenerator for RoomFirstMapSpec {
    fn generate<R: Rng, P: TilePainter>(
        &self,
        start: IVec2,
        rng: &mut R,
        painter: &mut P,
    ) -> DungeonLayout {
        log::debug!("Generating room first map from {:?}", start);

        let bounds = GridRect::new(
            start,
            IVec2::new(self.dungeon_width as i32, self.dungeon_height as i32),
        );
        let rooms = partition::binary_space_partition(
            bounds,
            self.min_room_width,
            self.min_room_height,
            rng,
        );
        log::debug!("Partitioned the bounds into {} rooms", rooms.len());

        let mut floor = if self.random_walk_rooms {
            self.grow_rooms(&rooms, rng)
        } else {
            self.fill_rooms(&rooms)
        };
        log::debug!("Placed {} room cells", floor.len());

        let centers: Vec<IVec2> = rooms.iter().map(|room| room.center()).collect();
        floor.extend(connect_rooms(centers, rng));

        finish_layout(floor, painter)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map_types::test_support::RecordingPainter;
    use crate::sampling::small_rng;
    use proptest::prelude::*;

    #[test]
    fn simple_rooms_stay_inside_the_bounds() {
        let spec = RoomFirstMapSpec::default();
        let bounds = GridRect::new(IVec2::ZERO, IVec2::new(20, 20));
        let mut painter = RecordingPainter::default();
        let layout = spec.generate(IVec2::ZERO, &mut small_rng([1, 2, 3, 4]), &mut painter);
        assert!(!layout.floor.is_empty());
        assert!(layout.floor.iter().all(|cell| bounds.contains(*cell)));
    }

    #[test]
    fn organic_rooms_also_produce_a_layout() {
        let spec = RoomFirstMapSpec {
            random_walk_rooms: true,
            ..RoomFirstMapSpec::default()
        };
        let mut painter = RecordingPainter::default();
        let layout = spec.generate(IVec2::ZERO, &mut small_rng([5, 5, 5, 5]), &mut painter);
        assert!(!layout.floor.is_empty());
    }

    #[test]
    fn corridors_touch_every_room_center() {
        let spec = RoomFirstMapSpec::default();
        let bounds = GridRect::new(IVec2::ZERO, IVec2::new(20, 20));
        let mut rng = small_rng([7, 7, 7, 7]);
        let rooms = partition::binary_space_partition(
            bounds,
            spec.min_room_width,
            spec.min_room_height,
            &mut rng,
        );
        let centers: Vec<IVec2> = rooms.iter().map(|room| room.center()).collect();
        let corridors = connect_rooms(centers.clone(), &mut rng);
        if centers.len() > 1 {
            assert!(centers.iter().all(|center| corridors.contains(center)));
        } else {
            assert!(corridors.is_empty());
        }
    }

    #[test]
    fn connecting_no_rooms_carves_nothing() {
        let mut rng = small_rng([1, 0, 0, 1]);
        assert!(connect_rooms(Vec::new(), &mut rng).is_empty());
    }

    #[test]
    fn generation_is_deterministic_for_a_seed() {
        let spec = RoomFirstMapSpec {
            seed: [2, 4, 6, 8],
            random_walk_rooms: true,
            ..RoomFirstMapSpec::default()
        };
        let mut first = RecordingPainter::default();
        let mut second = RecordingPainter::default();
        let a = spec.generate_seeded(IVec2::new(-4, -4), &mut first);
        let b = spec.generate_seeded(IVec2::new(-4, -4), &mut second);
        assert_eq!(a.floor, b.floor);
        assert_eq!(a.walls, b.walls);
    }

    proptest! {
        #[test]
        fn walls_and_floor_never_intersect(
            seed in any::<[u32; 4]>(),
            organic in any::<bool>(),
        ) {
            let spec = RoomFirstMapSpec {
                random_walk_rooms: organic,
                ..RoomFirstMapSpec::default()
            };
            let mut painter = RecordingPainter::default();
            let layout = spec.generate(IVec2::ZERO, &mut small_rng(seed), &mut painter);
            prop_assert!(layout.walls.basic.keys().all(|cell| !layout.floor.contains(cell)));
            prop_assert!(layout.walls.corner.keys().all(|cell| !layout.floor.contains(cell)));
        }
    }
}
