//! Bus behavior implementation

use super::VehicleBehavior;
use crate::navigation::Navigator;

/// Long-body behavior for the vehicle
///
/// The long frame has to pull one cell forward before a rotation can
/// complete, so turns move first and rotate second. Plain moves cover a
/// single cell.
#[derive(Debug, Default)]
pub struct BusBehavior;

impl VehicleBehavior for BusBehavior {
    fn new() -> Self {
        BusBehavior
    }

    fn move_forward(&self, state: &mut Navigator) {
        state.move_forward();
    }

    fn turn_left(&self, state: &mut Navigator) {
        state.move_forward();
        state.turn_left();
    }

    fn turn_right(&self, state: &mut Navigator) {
        state.move_forward();
        state.turn_right();
    }

    fn execute_turn_round(&self, state: &mut Navigator) {
        state.turn_left();
        state.move_forward();
        state.turn_left();
    }

    fn name(&self) -> &str {
        "BusBehavior"
    }
}
