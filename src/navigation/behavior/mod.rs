//! Vehicle behavior module with swappable movement implementations
//!
//! A behavior replaces the navigator's built-in movement and turn dispatch
//! with vehicle-specific interpretations of the same commands. Behaviors are
//! stateless: every operation mutates the navigator it is handed, so a single
//! instance can drive any number of navigators.
//!
//! The accelerating and reversing flags keep toggling while a behavior is
//! attached, but behavior-driven movement never consults them. The flags are
//! driver-initiated modes that only the built-in command table reads;
//! behaviors encode the vehicle's own movement characteristics. That
//! decoupling is intentional and relied upon by callers.

use std::fmt::Debug;

use crate::navigation::Navigator;

/// Trait for vehicle movement behaviors
pub trait VehicleBehavior: Debug + Send + Sync {
    /// Create a new instance of this behavior
    fn new() -> Self
    where
        Self: Sized;

    /// Carry out a move command on the given navigator
    fn move_forward(&self, state: &mut Navigator);

    /// Carry out a left-turn command on the given navigator
    fn turn_left(&self, state: &mut Navigator);

    /// Carry out a right-turn command on the given navigator
    fn turn_right(&self, state: &mut Navigator);

    /// Carry out a turn-round sequence on the given navigator
    fn execute_turn_round(&self, state: &mut Navigator);

    /// Get the name of this behavior
    fn name(&self) -> &str;
}

// Re-export specific implementations
pub mod bus;
pub mod sports_car;

pub use bus::BusBehavior;
pub use sports_car::SportsCarBehavior;
