//! Navigation module for the Hermes vehicle
//!
//! The [`Navigator`] interprets a character command stream against its own
//! pose. Interpretation is modal: the `F` and `B` commands toggle the
//! accelerating and reversing flags, and the effect of `M`, `L` and `R`
//! depends on which flags are set. A whole sequence is tokenized first so
//! that the literal pair `TR` dispatches as one composite turn-round command.
//! Attaching a [`VehicleBehavior`] replaces the movement and turn dispatch
//! wholesale; the flags keep toggling but are not consulted until the
//! behavior is detached.
pub mod behavior;
pub mod commands;

use std::sync::Arc;

use log::{debug, trace};

use self::behavior::VehicleBehavior;
use self::commands::{Command, CommandTokenizer};
use crate::common::types::{Heading, Position, Status};

/// Grid navigator for the vehicle
///
/// Owns the pose (position and heading), the two modal driver flags, and an
/// optionally attached vehicle behavior. All mutation goes through the
/// command-execution entry points or the public movement primitives.
#[derive(Debug)]
pub struct Navigator {
    position: Position,
    heading: Heading,
    // Driver-toggled modal flags; only the default dispatch consults them
    accelerating: bool,
    reversing: bool,
    // Optional behavior override; None selects the built-in command table
    behavior: Option<Arc<dyn VehicleBehavior>>,
}

impl Navigator {
    /// Create a navigator at the origin, facing north
    pub fn new() -> Self {
        Navigator::with_pose(Position::new(0, 0), Heading::North)
    }

    /// Create a navigator with an explicit starting pose
    pub fn with_pose(position: Position, heading: Heading) -> Self {
        Navigator {
            position,
            heading,
            accelerating: false,
            reversing: false,
            behavior: None,
        }
    }

    /// Create a navigator with a starting pose and an attached behavior
    pub fn with_behavior(
        position: Position,
        heading: Heading,
        behavior: Arc<dyn VehicleBehavior>,
    ) -> Self {
        let mut navigator = Navigator::with_pose(position, heading);
        navigator.set_behavior(behavior);
        navigator
    }

    /// Attach or replace the vehicle behavior; takes effect on the next command
    pub fn set_behavior(&mut self, behavior: Arc<dyn VehicleBehavior>) {
        debug!("Attaching behavior: {}", behavior.name());
        self.behavior = Some(behavior);
    }

    /// Detach the behavior and fall back to the built-in command table
    pub fn clear_behavior(&mut self) {
        if let Some(behavior) = self.behavior.take() {
            debug!("Detaching behavior: {}", behavior.name());
        }
    }

    /// Get the name of the attached behavior, if any
    pub fn behavior_name(&self) -> Option<&str> {
        self.behavior.as_deref().map(VehicleBehavior::name)
    }

    /// Get the current position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Get the current heading
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Whether the accelerating flag is set
    pub fn is_accelerating(&self) -> bool {
        self.accelerating
    }

    /// Whether the reversing flag is set
    pub fn is_reversing(&self) -> bool {
        self.reversing
    }

    /// Get the full pose snapshot
    pub fn status(&self) -> Status {
        Status {
            position: self.position,
            heading: self.heading,
        }
    }

    /// Advance one cell along the current heading.
    ///
    /// Single-step primitive: the modal flags are not consulted. Behaviors
    /// compose their movement out of these.
    pub fn move_forward(&mut self) {
        self.position += self.heading.unit_delta();
    }

    /// Back up one cell against the current heading
    pub fn move_backward(&mut self) {
        self.position -= self.heading.unit_delta();
    }

    /// Rotate to the counter-clockwise successor heading; position unchanged
    pub fn turn_left(&mut self) {
        self.heading = self.heading.left();
    }

    /// Rotate to the clockwise successor heading; position unchanged
    pub fn turn_right(&mut self) {
        self.heading = self.heading.right();
    }

    /// Execute a single command symbol.
    ///
    /// Recognized symbols are `M`, `L`, `R`, `F` and `B`; anything else is
    /// silently ignored. The turn-round sequence only exists during
    /// whole-sequence execution, so a lone `T` does nothing here and `R` is
    /// always a plain right-turn command.
    pub fn execute_command(&mut self, symbol: char) {
        self.apply(Command::from_symbol(symbol));
    }

    /// Execute a command sequence left to right.
    ///
    /// The sequence is tokenized with one character of lookahead so that the
    /// literal pair `TR` dispatches as a single turn-round command.
    pub fn execute_commands(&mut self, commands: &str) {
        for command in CommandTokenizer::new(commands) {
            self.apply(command);
        }
    }

    /// Dispatch one token against the attached behavior or the built-in table
    fn apply(&mut self, command: Command) {
        trace!("Executing {:?} at {}", command, self.status());
        match command {
            Command::Accelerate => {
                self.accelerating = !self.accelerating;
                debug!("Accelerating flag now {}", self.accelerating);
            }
            Command::Reverse => {
                self.reversing = !self.reversing;
                debug!("Reversing flag now {}", self.reversing);
            }
            Command::Unrecognized(symbol) => {
                trace!("Ignoring unrecognized command '{}'", symbol);
            }
            Command::Move => match self.behavior.clone() {
                Some(behavior) => behavior.move_forward(self),
                None => self.default_move(),
            },
            Command::TurnLeft => match self.behavior.clone() {
                Some(behavior) => behavior.turn_left(self),
                None => self.default_turn_left(),
            },
            Command::TurnRight => match self.behavior.clone() {
                Some(behavior) => behavior.turn_right(self),
                None => self.default_turn_right(),
            },
            Command::TurnRound => match self.behavior.clone() {
                Some(behavior) => behavior.execute_turn_round(self),
                None => self.default_turn_round(),
            },
        }
    }

    /// Built-in `M`: step count and direction come from the modal flags
    fn default_move(&mut self) {
        match (self.accelerating, self.reversing) {
            (false, false) => self.move_forward(),
            (true, false) => {
                self.move_forward();
                self.move_forward();
            }
            (false, true) => self.move_backward(),
            (true, true) => {
                self.move_backward();
                self.move_backward();
            }
        }
    }

    /// Built-in `L`: reversing alone swaps the turn sense; accelerating
    /// prepends a single step and keeps the plain sense
    fn default_turn_left(&mut self) {
        match (self.accelerating, self.reversing) {
            (false, false) => self.turn_left(),
            (true, false) => {
                self.move_forward();
                self.turn_left();
            }
            (false, true) => self.turn_right(),
            (true, true) => {
                self.move_backward();
                self.turn_left();
            }
        }
    }

    /// Built-in `R`: mirror of the left-turn table
    fn default_turn_right(&mut self) {
        match (self.accelerating, self.reversing) {
            (false, false) => self.turn_right(),
            (true, false) => {
                self.move_forward();
                self.turn_right();
            }
            (false, true) => self.turn_left(),
            (true, true) => {
                self.move_backward();
                self.turn_right();
            }
        }
    }

    /// Built-in turn-round: two left quarter-turns around a single forward
    /// step, with an extra leading step when accelerating. The reversing
    /// flag has no effect here.
    fn default_turn_round(&mut self) {
        if self.accelerating {
            self.move_forward();
        }
        self.turn_left();
        self.move_forward();
        self.turn_left();
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new()
    }
}
