//! # Path Interpreter
//!
//! Converts one path's `d` attribute into a point sequence.
//!
//! Only straight-segment commands are understood: `M`/`m`, `L`/`l`,
//! `H`/`h`, `V`/`v` and `Z`/`z`. Curves and arcs must be flattened by the
//! design tool before upload.
//!
//! ## Model
//!
//! The interpreter is a small state machine. [`PathState`] holds the running
//! cursor and the start of the current subpath; [`PathState::step`] consumes
//! one [`Token`] and returns the next state.
//!
//! Subpaths are concatenated into a single sequence. Once any close command
//! is seen the result is a closed region.
//!
//! # Example
//!
//! ```rust
//! use stamp_svg::path::interpret;
//! use stamp_svg::RawPrimitive;
//!
//! let prim = interpret("M0 0 h10 v10 h-10 Z").unwrap().unwrap();
//! assert!(matches!(prim, RawPrimitive::ClosedRegion(ref pts) if pts.len() == 4));
//! ```

use glam::DVec2;

use crate::error::SvgError;
use crate::primitive::RawPrimitive;

#[cfg(test)]
mod tests;

// =============================================================================
// TOKENS
// =============================================================================

/// Lexical unit of path data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A command letter (validated later)
    Letter(char),
    /// A coordinate or length
    Number(f64),
}

/// Splits path data into command letters and numbers.
///
/// Whitespace and commas separate tokens. A sign or a second decimal point
/// starts a new number, so `10-5` and `0.5.5` each yield two numbers.
///
/// ## Errors
///
/// Returns `InvalidInput` for characters that cannot appear in path data.
pub fn tokenize(data: &str) -> Result<Vec<Token>, SvgError> {
    let bytes = data.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        if c.is_ascii_whitespace() || c == b',' {
            i += 1;
        } else if c.is_ascii_alphabetic() {
            tokens.push(Token::Letter(c as char));
            i += 1;
        } else if c.is_ascii_digit() || matches!(c, b'+' | b'-' | b'.') {
            let end = scan_number(bytes, i);
            let text = &data[i..end];
            let value = text
                .parse::<f64>()
                .map_err(|_| SvgError::invalid_input(format!("malformed number '{text}' in path data")))?;
            tokens.push(Token::Number(value));
            i = end;
        } else {
            let ch = data[i..].chars().next().unwrap_or('?');
            return Err(SvgError::invalid_input(format!(
                "unexpected character '{ch}' in path data"
            )));
        }
    }

    Ok(tokens)
}

/// Returns the end offset of the number starting at `start`.
fn scan_number(bytes: &[u8], start: usize) -> usize {
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut i = start;
    if matches!(bytes.get(i), Some(b'+' | b'-')) {
        i += 1;
    }
    i = digits_from(i);
    if bytes.get(i) == Some(&b'.') {
        i = digits_from(i + 1);
    }

    // Exponent only when digits follow, so "5e" leaves the `e` as a letter.
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        if bytes.get(j).is_some_and(u8::is_ascii_digit) {
            i = digits_from(j);
        }
    }
    i
}

// =============================================================================
// COMMANDS
// =============================================================================

/// A supported path command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { relative: bool },
    Line { relative: bool },
    Horizontal { relative: bool },
    Vertical { relative: bool },
    Close,
}

impl Command {
    /// Parses a command letter.
    ///
    /// ## Errors
    ///
    /// Returns `UnsupportedPathCommand` for curves, arcs and any other letter.
    pub fn from_letter(letter: char) -> Result<Self, SvgError> {
        let relative = letter.is_ascii_lowercase();
        match letter.to_ascii_uppercase() {
            'M' => Ok(Self::Move { relative }),
            'L' => Ok(Self::Line { relative }),
            'H' => Ok(Self::Horizontal { relative }),
            'V' => Ok(Self::Vertical { relative }),
            'Z' => Ok(Self::Close),
            _ => Err(SvgError::UnsupportedPathCommand { command: letter }),
        }
    }
}

// =============================================================================
// STATE MACHINE
// =============================================================================

/// Interpreter state between tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathState {
    cursor: DVec2,
    subpath_start: Option<DVec2>,
    command: Option<Command>,
    /// First half of a coordinate pair
    pending: Option<f64>,
    /// A command letter was read but none of its arguments yet
    awaiting_args: bool,
    points: Vec<DVec2>,
    closed: bool,
}

impl PathState {
    /// Advances the state by one token.
    pub fn step(self, token: Token) -> Result<Self, SvgError> {
        match token {
            Token::Letter(letter) => self.begin(Command::from_letter(letter)?),
            Token::Number(value) => self.argument(value),
        }
    }

    fn begin(mut self, command: Command) -> Result<Self, SvgError> {
        if self.pending.is_some() || self.awaiting_args {
            return Err(SvgError::invalid_input("path command is missing coordinates"));
        }

        if command == Command::Close {
            if let Some(start) = self.subpath_start {
                self.points.push(start);
                self.cursor = start;
            }
            self.closed = true;
        } else {
            self.awaiting_args = true;
        }
        self.command = Some(command);
        Ok(self)
    }

    fn argument(mut self, value: f64) -> Result<Self, SvgError> {
        match self.command {
            None => Err(SvgError::invalid_input("path has numbers before any command")),
            Some(Command::Close) => Err(SvgError::invalid_input(
                "path has numbers after a close command",
            )),
            Some(Command::Horizontal { relative }) => {
                self.cursor.x = if relative { self.cursor.x + value } else { value };
                self.emit();
                Ok(self)
            }
            Some(Command::Vertical { relative }) => {
                self.cursor.y = if relative { self.cursor.y + value } else { value };
                self.emit();
                Ok(self)
            }
            Some(command @ (Command::Move { relative } | Command::Line { relative })) => {
                let Some(x) = self.pending.take() else {
                    self.pending = Some(value);
                    return Ok(self);
                };
                let target = DVec2::new(x, value);
                self.cursor = if relative { self.cursor + target } else { target };
                if matches!(command, Command::Move { .. }) {
                    self.subpath_start = Some(self.cursor);
                    // Further pairs after a move are line-to.
                    self.command = Some(Command::Line { relative });
                }
                self.emit();
                Ok(self)
            }
        }
    }

    fn emit(&mut self) {
        self.points.push(self.cursor);
        self.awaiting_args = false;
    }

    /// Finishes interpretation.
    ///
    /// Returns `None` when fewer than three points were produced.
    pub fn finish(self) -> Result<Option<RawPrimitive>, SvgError> {
        if self.pending.is_some() || self.awaiting_args {
            return Err(SvgError::invalid_input("path data ends inside a command"));
        }
        Ok(if self.closed {
            RawPrimitive::closed(self.points)
        } else {
            RawPrimitive::open(self.points)
        })
    }
}

/// Interprets a path's `d` attribute.
///
/// ## Errors
///
/// - `UnsupportedPathCommand` for any command other than M/L/H/V/Z
/// - `InvalidInput` for malformed or truncated path data
pub fn interpret(data: &str) -> Result<Option<RawPrimitive>, SvgError> {
    tokenize(data)?
        .into_iter()
        .try_fold(PathState::default(), PathState::step)?
        .finish()
}
