//! Rotations and translations on the plateau grid.
//!
//! Both are total over valid inputs and never look at the plateau bounds.

use crate::types::{Direction, Position};

/// Rotates a heading 90 degrees counter-clockwise.
pub fn rotate_left(direction: Direction) -> Direction {
    match direction {
        Direction::North => Direction::West,
        Direction::East => Direction::North,
        Direction::South => Direction::East,
        Direction::West => Direction::South,
    }
}

/// Rotates a heading 90 degrees clockwise.
pub fn rotate_right(direction: Direction) -> Direction {
    match direction {
        Direction::North => Direction::East,
        Direction::East => Direction::South,
        Direction::South => Direction::West,
        Direction::West => Direction::North,
    }
}

/// Moves `position` forward by `steps` grid points towards `direction`.
///
/// North and east are the positive axes. The result may lie outside the
/// plateau; callers decide what that means. Coordinates wrap around at the
/// `i32` limits, so the function never panics and stays invertible.
pub fn translate(position: Position, direction: Direction, steps: u32) -> Position {
    let Position { x, y } = position;
    match direction {
        Direction::North => Position::new(x, y.wrapping_add_unsigned(steps)),
        Direction::East => Position::new(x.wrapping_add_unsigned(steps), y),
        Direction::South => Position::new(x, y.wrapping_sub_unsigned(steps)),
        Direction::West => Position::new(x.wrapping_sub_unsigned(steps), y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    #[test]
    fn right_follows_clockwise_order() {
        let mut heading = Direction::North;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(heading);
            heading = rotate_right(heading);
        }
        assert_eq!(seen, Direction::ALL.to_vec());
        assert_eq!(heading, Direction::North);
    }

    #[test]
    fn translate_moves_along_axes() {
        let origin = Position::new(2, 2);
        assert_eq!(translate(origin, Direction::North, 1), Position::new(2, 3));
        assert_eq!(translate(origin, Direction::East, 1), Position::new(3, 2));
        assert_eq!(translate(origin, Direction::South, 1), Position::new(2, 1));
        assert_eq!(translate(origin, Direction::West, 1), Position::new(1, 2));
        assert_eq!(translate(origin, Direction::West, 0), origin);
    }

    #[test]
    fn translate_ignores_plateau_edges() {
        let corner = Position::new(0, 0);
        assert_eq!(translate(corner, Direction::South, 3), Position::new(0, -3));
        assert_eq!(translate(corner, Direction::West, 1), Position::new(-1, 0));
    }

    #[test]
    fn translate_wraps_at_the_integer_limits() {
        let east_edge = Position::new(i32::MAX, 0);
        let moved = translate(east_edge, Direction::East, 1);
        assert_eq!(moved, Position::new(i32::MIN, 0));
        assert_eq!(translate(moved, Direction::West, 1), east_edge);

        let south_edge = Position::new(0, i32::MIN);
        let moved = translate(south_edge, Direction::South, 1);
        assert_eq!(moved, Position::new(0, i32::MAX));
        assert_eq!(translate(moved, Direction::North, 1), south_edge);
    }

    #[test]
    fn large_step_counts_keep_their_direction() {
        let moved = translate(Position::new(0, i32::MIN), Direction::North, 3_000_000_000);
        assert_eq!(moved, Position::new(0, 852_516_352));
        assert!(moved.y > 0);

        let full = translate(Position::new(0, i32::MIN), Direction::North, u32::MAX);
        assert_eq!(full, Position::new(0, i32::MAX));
    }

    proptest! {
        #[test]
        fn left_undoes_right(d in arb_direction()) {
            prop_assert_eq!(rotate_left(rotate_right(d)), d);
            prop_assert_eq!(rotate_right(rotate_left(d)), d);
        }

        #[test]
        fn four_turns_are_identity(d in arb_direction()) {
            let left = (0..4).fold(d, |acc, _| rotate_left(acc));
            let right = (0..4).fold(d, |acc, _| rotate_right(acc));
            prop_assert_eq!(left, d);
            prop_assert_eq!(right, d);
        }

        #[test]
        fn translation_is_invertible(
            x in any::<i32>(),
            y in any::<i32>(),
            d in arb_direction(),
            n in any::<u32>(),
        ) {
            let p = Position::new(x, y);
            let moved = translate(p, d, n);
            prop_assert_eq!(translate(moved, d.opposite(), n), p);
        }
    }
}
