use glam::IVec2;
use rand::seq::SliceRandom;
use rand::Rng;

/// The four cardinal unit offsets, clockwise from up. This order fixes the
/// bit positions of basic wall masks.
pub const CARDINAL: [IVec2; 4] = [
    IVec2::new(0, 1),  // up
    IVec2::new(1, 0),  // right
    IVec2::new(0, -1), // down
    IVec2::new(-1, 0), // left
];

/// The four diagonal unit offsets, clockwise from up-right.
pub const DIAGONAL: [IVec2; 4] = [
    IVec2::new(1, 1),
    IVec2::new(1, -1),
    IVec2::new(-1, -1),
    IVec2::new(-1, 1),
];

/// Cardinal and diagonal offsets interleaved, clockwise from up. This order
/// fixes the bit positions of corner wall masks and must not be reordered.
pub const EIGHT_WAY: [IVec2; 8] = [
    IVec2::new(0, 1),
    IVec2::new(1, 1),
    IVec2::new(1, 0),
    IVec2::new(1, -1),
    IVec2::new(0, -1),
    IVec2::new(-1, -1),
    IVec2::new(-1, 0),
    IVec2::new(-1, 1),
];

/// Uniform pick of one cardinal offset.
pub fn random_cardinal(rng: &mut impl Rng) -> IVec2 {
    *CARDINAL.choose(rng).expect("catalog is never empty")
}
