//! Core functionality for the Hermes grid vehicle
//!
//! Hermes models a single vehicle on an infinite integer grid. The vehicle
//! interprets a flat character command stream: `M` moves, `L` and `R` turn,
//! `F` and `B` toggle the accelerating and reversing driver modes, and the
//! two-character sequence `TR` turns the vehicle round. What a command does
//! depends on the active modes and on whether a vehicle behavior is
//! attached; an attached [`VehicleBehavior`] takes over movement and turn
//! dispatch entirely, while the mode flags keep toggling unread.
//!
//! ```
//! use hermes_core::Navigator;
//!
//! let mut navigator = Navigator::new();
//! navigator.execute_commands("MRM");
//!
//! let status = navigator.status();
//! assert_eq!((status.position.x, status.position.y), (1, 1));
//! ```

pub mod common;
pub mod error;
pub mod navigation;

// Re-export commonly used types
pub use common::types::{Heading, Position, Status};
pub use error::{Error, Result};
pub use navigation::behavior::{BusBehavior, SportsCarBehavior, VehicleBehavior};
pub use navigation::Navigator;
