//! Direction classification and pursuit movement
//!
//! Screen coordinates: origin at the top-left corner, Y grows downward.
//! Every direction here is measured on the vector `pet - pointer`, so the
//! label names the compass point the pointer lies in as seen from the pet.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Where the cat is drawn, in host pixels
pub type PetPosition = DVec2;

/// Last pointer sample, in host pixels
pub type PointerPosition = DVec2;

/// Compass direction, named in screen terms (N is up)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    E,
    SE,
    S,
    SW,
    W,
    NW,
    N,
    NE,
}

/// Upper sector bounds for the 8-way split, walked in order.
/// A boundary angle belongs to the first sector that reaches it.
const OCTANT_SECTORS: [(f64, Direction); 9] = [
    (-PI * 7.0 / 8.0, Direction::E),
    (-PI * 5.0 / 8.0, Direction::SE),
    (-PI * 3.0 / 8.0, Direction::S),
    (-PI * 1.0 / 8.0, Direction::SW),
    (PI * 1.0 / 8.0, Direction::W),
    (PI * 3.0 / 8.0, Direction::NW),
    (PI * 5.0 / 8.0, Direction::N),
    (PI * 7.0 / 8.0, Direction::NE),
    (PI, Direction::E),
];

/// Upper sector bounds for the 4-way split
const QUADRANT_SECTORS: [(f64, Direction); 5] = [
    (-PI * 3.0 / 4.0, Direction::E),
    (-PI * 1.0 / 4.0, Direction::S),
    (PI * 1.0 / 4.0, Direction::W),
    (PI * 3.0 / 4.0, Direction::N),
    (PI, Direction::E),
];

impl Direction {
    #[cfg(test)]
    pub const ALL: [Direction; 8] = [
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
        Direction::N,
        Direction::NE,
    ];

    /// Classify an `atan2` angle in [-π, π] into one of 8 sectors
    pub fn from_octant_angle(alpha: f64) -> Self {
        sector(&OCTANT_SECTORS, alpha)
    }

    /// Classify an `atan2` angle in [-π, π] into one of the 4 major sectors
    pub fn from_quadrant_angle(alpha: f64) -> Self {
        sector(&QUADRANT_SECTORS, alpha)
    }

    /// True for N, E, S and W
    pub fn is_major(self) -> bool {
        matches!(self, Direction::N | Direction::E | Direction::S | Direction::W)
    }
}

// atan2 never leaves [-π, π]; a NaN angle matches nothing and lands on E.
fn sector(table: &[(f64, Direction)], alpha: f64) -> Direction {
    table
        .iter()
        .find(|(upper, _)| alpha <= *upper)
        .map(|(_, dir)| *dir)
        .unwrap_or(Direction::E)
}

/// 8-way direction of `delta = pet - pointer`
#[inline]
pub fn classify_octant(delta: DVec2) -> Direction {
    Direction::from_octant_angle(delta.y.atan2(delta.x))
}

/// 4-way direction of `delta = pet - pointer`
#[inline]
pub fn classify_quadrant(delta: DVec2) -> Direction {
    Direction::from_quadrant_angle(delta.y.atan2(delta.x))
}

/// 8-way direction of the pointer as seen from the pet
#[inline]
pub fn octant_between(pet: PetPosition, pointer: PointerPosition) -> Direction {
    classify_octant(pet - pointer)
}

/// 4-way direction of the pointer as seen from the pet
#[inline]
pub fn quadrant_between(pet: PetPosition, pointer: PointerPosition) -> Direction {
    classify_quadrant(pet - pointer)
}

/// Euclidean distance
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Inclusive proximity test
#[inline]
pub fn is_within(a: DVec2, b: DVec2, radius: f64) -> bool {
    distance(a, b) <= radius
}

/// Move `from` exactly `step_size` along the line toward `to`.
///
/// Coincident points return `from` unchanged. The step is not clamped to the
/// remaining distance, so a step longer than the gap crosses over the target.
pub fn step_toward(from: DVec2, to: DVec2, step_size: f64) -> DVec2 {
    let d = distance(from, to);
    if d > 0.0 {
        let scale = step_size / d;
        from - (from - to) * scale
    } else {
        from
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn octant(x: f64, y: f64, mx: f64, my: f64) -> Direction {
        octant_between(DVec2::new(x, y), DVec2::new(mx, my))
    }

    fn quadrant(x: f64, y: f64, mx: f64, my: f64) -> Direction {
        quadrant_between(DVec2::new(x, y), DVec2::new(mx, my))
    }

    #[test]
    fn test_octant_compass_points() {
        assert_eq!(octant(0.0, 0.0, 0.0, 1.0), Direction::S);
        assert_eq!(octant(0.0, 0.0, 1.0, 1.0), Direction::SE);
        assert_eq!(octant(0.0, 0.0, 1.0, 0.0), Direction::E);
        assert_eq!(octant(0.0, 0.0, 1.0, -1.0), Direction::NE);
        assert_eq!(octant(0.0, 0.0, 0.0, -1.0), Direction::N);
        assert_eq!(octant(0.0, 0.0, -1.0, -1.0), Direction::NW);
        assert_eq!(octant(0.0, 0.0, -1.0, 0.0), Direction::W);
        assert_eq!(octant(0.0, 0.0, -1.0, 1.0), Direction::SW);
    }

    #[test]
    fn test_octant_east_on_both_sides_of_wrap() {
        // Pointer slightly below and slightly above due east
        assert_eq!(octant(0.0, 0.0, 1.0, 0.1), Direction::E);
        assert_eq!(octant(0.0, 0.0, 1.0, -0.1), Direction::E);
        assert_eq!(Direction::from_octant_angle(-PI), Direction::E);
        assert_eq!(Direction::from_octant_angle(PI), Direction::E);
    }

    #[test]
    fn test_quadrant_splits_diagonals() {
        assert_eq!(quadrant(0.0, 0.0, 0.0, 1.0), Direction::S);
        assert_eq!(quadrant(0.0, 0.0, 1.1, 1.0), Direction::E);
        assert_eq!(quadrant(0.0, 0.0, 1.0, 1.1), Direction::S);
        assert_eq!(quadrant(0.0, 0.0, 1.0, 0.0), Direction::E);
        assert_eq!(quadrant(0.0, 0.0, 1.0, 0.1), Direction::E);
        assert_eq!(quadrant(0.0, 0.0, 1.0, -0.1), Direction::E);
        assert_eq!(quadrant(0.0, 0.0, 1.1, -1.0), Direction::E);
        assert_eq!(quadrant(0.0, 0.0, 1.0, -1.1), Direction::N);
        assert_eq!(quadrant(0.0, 0.0, 0.0, -1.0), Direction::N);
        assert_eq!(quadrant(0.0, 0.0, -1.1, -1.0), Direction::W);
        assert_eq!(quadrant(0.0, 0.0, -1.0, -1.1), Direction::N);
        assert_eq!(quadrant(0.0, 0.0, -1.0, 0.0), Direction::W);
        assert_eq!(quadrant(0.0, 0.0, -1.1, 1.0), Direction::W);
        assert_eq!(quadrant(0.0, 0.0, -1.0, 1.1), Direction::S);
    }

    #[test]
    fn test_boundaries_go_to_lower_sector() {
        assert_eq!(Direction::from_octant_angle(PI / 8.0), Direction::W);
        assert_eq!(Direction::from_octant_angle(-PI / 8.0), Direction::SW);
        assert_eq!(Direction::from_quadrant_angle(PI / 4.0), Direction::W);
        assert_eq!(Direction::from_quadrant_angle(-PI / 4.0), Direction::S);
    }

    #[test]
    fn test_coincident_points_are_defined() {
        let p = DVec2::new(5.0, -3.0);
        assert_eq!(octant_between(p, p), Direction::W);
        assert_eq!(quadrant_between(p, p), Direction::W);
        assert_eq!(step_toward(p, p, 15.0), p);
    }

    #[test]
    fn test_octant_covers_circle() {
        let mut seen = std::collections::HashSet::new();
        for i in 0..1000 {
            let alpha = -PI + 2.0 * PI * i as f64 / 999.0;
            seen.insert(Direction::from_octant_angle(alpha));
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_quadrant_only_yields_major_directions() {
        for i in 0..1000 {
            let alpha = -PI + 2.0 * PI * i as f64 / 999.0;
            assert!(Direction::from_quadrant_angle(alpha).is_major());
        }
    }

    #[test]
    fn test_proximity_is_inclusive() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(3.0, 4.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-12);
        assert!(is_within(a, b, 5.0));
        assert!(!is_within(a, b, 4.999));
    }

    #[test]
    fn test_step_toward_moves_fixed_amount() {
        let next = step_toward(DVec2::new(0.0, 0.0), DVec2::new(6.0, 8.0), 5.0);
        assert!((next - DVec2::new(3.0, 4.0)).length() < 1e-9);
    }

    #[test]
    fn test_step_toward_overshoots() {
        let next = step_toward(DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0), 3.0);
        assert!((next - DVec2::new(3.0, 0.0)).length() < 1e-9);
    }

    proptest! {
        #[test]
        fn step_length_matches_step_size(
            x in -1000.0f64..1000.0, y in -1000.0f64..1000.0,
            mx in -1000.0f64..1000.0, my in -1000.0f64..1000.0,
            step in 0.0f64..50.0,
        ) {
            let from = DVec2::new(x, y);
            let to = DVec2::new(mx, my);
            prop_assume!(distance(from, to) > 1e-6);
            let next = step_toward(from, to, step);
            prop_assert!((distance(from, next) - step).abs() < 1e-6);
        }

        #[test]
        fn quadrant_agrees_with_octant_on_major_points(
            x in -1000.0f64..1000.0, y in -1000.0f64..1000.0,
            mx in -1000.0f64..1000.0, my in -1000.0f64..1000.0,
        ) {
            let pet = DVec2::new(x, y);
            let pointer = DVec2::new(mx, my);
            let oct = octant_between(pet, pointer);
            if oct.is_major() {
                prop_assert_eq!(quadrant_between(pet, pointer), oct);
            }
        }
    }
}
