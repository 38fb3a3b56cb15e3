//! Command stream tokenization
//!
//! Commands arrive as a flat character stream. Every symbol maps to a
//! single-character command except the literal pair `TR`, which is one
//! composite turn-round command when a whole sequence is scanned. The
//! tokenizer owns that lookahead so the dispatch table only ever sees
//! complete tokens.

use std::iter::Peekable;
use std::str::Chars;

/// One token of the command stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `M`: move one stretch (length and direction depend on the active modes)
    Move,
    /// `L`: turn toward the counter-clockwise successor heading
    TurnLeft,
    /// `R`: turn toward the clockwise successor heading
    TurnRight,
    /// `F`: toggle the accelerating flag
    Accelerate,
    /// `B`: toggle the reversing flag
    Reverse,
    /// The two-character sequence `TR`: reverse heading via two quarter-turns
    TurnRound,
    /// Any other symbol; executing it is a no-op
    Unrecognized(char),
}

impl Command {
    /// Map a single symbol to its command.
    ///
    /// `TurnRound` is never produced here: a lone `T` is unrecognized, so
    /// single-symbol submission cannot trigger a turn-round.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            'M' => Command::Move,
            'L' => Command::TurnLeft,
            'R' => Command::TurnRight,
            'F' => Command::Accelerate,
            'B' => Command::Reverse,
            other => Command::Unrecognized(other),
        }
    }
}

/// Iterator over the tokens of a command sequence.
///
/// Scans left to right with one character of lookahead: the literal pair
/// `TR` becomes a single [`Command::TurnRound`]; everything else maps
/// through [`Command::from_symbol`].
pub struct CommandTokenizer<'a> {
    symbols: Peekable<Chars<'a>>,
}

impl<'a> CommandTokenizer<'a> {
    /// Create a tokenizer over a command sequence
    pub fn new(commands: &'a str) -> Self {
        CommandTokenizer {
            symbols: commands.chars().peekable(),
        }
    }
}

impl Iterator for CommandTokenizer<'_> {
    type Item = Command;

    fn next(&mut self) -> Option<Command> {
        let symbol = self.symbols.next()?;
        if symbol == 'T' && self.symbols.peek() == Some(&'R') {
            self.symbols.next();
            return Some(Command::TurnRound);
        }
        Some(Command::from_symbol(symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(commands: &str) -> Vec<Command> {
        CommandTokenizer::new(commands).collect()
    }

    #[test]
    fn test_single_symbols() {
        assert_eq!(
            tokens("MLRFB"),
            vec![
                Command::Move,
                Command::TurnLeft,
                Command::TurnRight,
                Command::Accelerate,
                Command::Reverse,
            ]
        );
    }

    #[test]
    fn test_turn_round_pair_is_one_token() {
        assert_eq!(tokens("TR"), vec![Command::TurnRound]);
        assert_eq!(
            tokens("MTRM"),
            vec![Command::Move, Command::TurnRound, Command::Move]
        );
    }

    #[test]
    fn test_lone_t_is_unrecognized() {
        assert_eq!(tokens("T"), vec![Command::Unrecognized('T')]);
        assert_eq!(
            tokens("TM"),
            vec![Command::Unrecognized('T'), Command::Move]
        );
    }

    #[test]
    fn test_scan_consumes_pair_before_rescanning() {
        // The first T pairs with nothing; the second T pairs with the R.
        assert_eq!(
            tokens("TTR"),
            vec![Command::Unrecognized('T'), Command::TurnRound]
        );
        // The R that completed a pair is not available as a turn command.
        assert_eq!(
            tokens("TRR"),
            vec![Command::TurnRound, Command::TurnRight]
        );
    }

    #[test]
    fn test_unknown_symbols_pass_through() {
        assert_eq!(
            tokens("mX R"),
            vec![
                Command::Unrecognized('m'),
                Command::Unrecognized('X'),
                Command::Unrecognized(' '),
                Command::TurnRight,
            ]
        );
    }

    #[test]
    fn test_empty_sequence() {
        assert!(tokens("").is_empty());
    }

    #[test]
    fn test_from_symbol_never_yields_turn_round() {
        assert_eq!(Command::from_symbol('T'), Command::Unrecognized('T'));
        assert_eq!(Command::from_symbol('R'), Command::TurnRight);
    }
}
