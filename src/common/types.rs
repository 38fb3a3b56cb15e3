//! Shared domain types: grid positions, cardinal headings, pose snapshots

use std::fmt;

use nalgebra::Vector2;

use crate::error::Error;

/// A position on the infinite integer grid
pub type Position = Vector2<i32>;

/// One of the four cardinal directions the vehicle can face
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Counter-clockwise successor: N -> W -> S -> E -> N
    pub fn left(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Clockwise successor: N -> E -> S -> W -> N
    pub fn right(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// The opposite direction (two quarter-turns either way)
    pub fn opposite(self) -> Heading {
        self.right().right()
    }

    /// Unit grid step along this heading
    ///
    /// North is +y, South is -y, East is +x, West is -x.
    pub fn unit_delta(self) -> Vector2<i32> {
        match self {
            Heading::North => Vector2::new(0, 1),
            Heading::South => Vector2::new(0, -1),
            Heading::East => Vector2::new(1, 0),
            Heading::West => Vector2::new(-1, 0),
        }
    }

    /// Single-letter symbol for this heading, the inverse of `TryFrom<char>`
    pub fn as_char(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl TryFrom<char> for Heading {
    type Error = Error;

    /// Parse a heading symbol, rejecting anything outside N/E/S/W
    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            other => Err(Error::InvalidHeading(other)),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Full pose snapshot of a navigator
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Status {
    pub position: Position,
    pub heading: Heading,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) facing {}",
            self.position.x, self.position.y, self.heading
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_HEADINGS: [Heading; 4] =
        [Heading::North, Heading::East, Heading::South, Heading::West];

    #[test]
    fn test_left_cycle() {
        let mut heading = Heading::North;
        let expected = [Heading::West, Heading::South, Heading::East, Heading::North];
        for want in expected {
            heading = heading.left();
            assert_eq!(heading, want);
        }
    }

    #[test]
    fn test_right_cycle() {
        let mut heading = Heading::North;
        let expected = [Heading::East, Heading::South, Heading::West, Heading::North];
        for want in expected {
            heading = heading.right();
            assert_eq!(heading, want);
        }
    }

    #[test]
    fn test_left_and_right_are_inverses() {
        for heading in ALL_HEADINGS {
            assert_eq!(heading.left().right(), heading);
            assert_eq!(heading.right().left(), heading);
        }
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Heading::North.opposite(), Heading::South);
        assert_eq!(Heading::East.opposite(), Heading::West);
        assert_eq!(Heading::South.opposite(), Heading::North);
        assert_eq!(Heading::West.opposite(), Heading::East);
    }

    #[test]
    fn test_unit_deltas_cancel_out() {
        let total: Vector2<i32> = ALL_HEADINGS.iter().map(|h| h.unit_delta()).sum();
        assert_eq!(total, Vector2::new(0, 0));
    }

    #[test]
    fn test_symbol_round_trip() {
        for heading in ALL_HEADINGS {
            assert_eq!(Heading::try_from(heading.as_char()).unwrap(), heading);
        }
    }

    #[test]
    fn test_invalid_symbol_rejected() {
        for symbol in ['X', 'n', ' ', '7'] {
            assert!(matches!(
                Heading::try_from(symbol),
                Err(Error::InvalidHeading(found)) if found == symbol
            ));
        }
    }

    #[test]
    fn test_status_display() {
        let status = Status {
            position: Position::new(3, -4),
            heading: Heading::West,
        };
        assert_eq!(status.to_string(), "(3, -4) facing W");
    }
}
