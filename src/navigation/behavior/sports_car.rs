//! Sports car behavior implementation

use super::VehicleBehavior;
use crate::navigation::Navigator;

/// Fast, long-stride behavior for the vehicle
///
/// A move covers two cells, and every turn rolls one cell forward after the
/// rotation completes.
#[derive(Debug, Default)]
pub struct SportsCarBehavior;

impl VehicleBehavior for SportsCarBehavior {
    fn new() -> Self {
        SportsCarBehavior
    }

    fn move_forward(&self, state: &mut Navigator) {
        state.move_forward();
        state.move_forward();
    }

    fn turn_left(&self, state: &mut Navigator) {
        state.turn_left();
        state.move_forward();
    }

    fn turn_right(&self, state: &mut Navigator) {
        state.turn_right();
        state.move_forward();
    }

    fn execute_turn_round(&self, state: &mut Navigator) {
        // Single-step primitives: a turn-round covers one cell even though
        // this behavior's plain move covers two.
        state.turn_left();
        state.move_forward();
        state.turn_left();
    }

    fn name(&self) -> &str {
        "SportsCarBehavior"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::common::types::{Heading, Position};

    fn drive(commands: &str) -> Navigator {
        let mut navigator = Navigator::with_behavior(
            Position::new(0, 0),
            Heading::North,
            Arc::new(SportsCarBehavior::new()),
        );
        navigator.execute_commands(commands);
        navigator
    }

    #[test]
    fn test_move_covers_two_cells() {
        let navigator = drive("M");
        assert_eq!(navigator.position(), Position::new(0, 2));
        assert_eq!(navigator.heading(), Heading::North);
    }

    #[test]
    fn test_turns_roll_forward_after_rotating() {
        let navigator = drive("L");
        assert_eq!(navigator.position(), Position::new(-1, 0));
        assert_eq!(navigator.heading(), Heading::West);

        let navigator = drive("R");
        assert_eq!(navigator.position(), Position::new(1, 0));
        assert_eq!(navigator.heading(), Heading::East);
    }

    #[test]
    fn test_turn_round_covers_one_cell() {
        let navigator = drive("TR");
        assert_eq!(navigator.position(), Position::new(-1, 0));
        assert_eq!(navigator.heading(), Heading::South);
    }

    #[test]
    fn test_mode_toggles_do_not_reach_the_behavior() {
        let navigator = drive("FM");
        assert_eq!(navigator.position(), Position::new(0, 2));

        let navigator = drive("BM");
        assert_eq!(navigator.position(), Position::new(0, 2));
    }
}
