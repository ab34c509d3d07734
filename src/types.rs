//! # Rover Types Module
//!
//! Core value types shared by the whole simulator: the cardinal [`Direction`]
//! a rover faces, the [`Command`] symbols it obeys and the [`Position`] it
//! occupies on the plateau grid.
//!
//! Every `Direction` and `Command` has a single-character external code.
//! Decoding goes through fixed tables, so an unknown code is always an error
//! and never falls back to a default variant.

use std::fmt;
use std::str::FromStr;

use crate::error::RoverError;

/// NOTE - Cardinal compass points, declared in clockwise order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North, // NOTE - Code "N", +y
    East,  // NOTE - Code "E", +x
    South, // NOTE - Code "S", -y
    West,  // NOTE - Code "W", -x
}

impl Direction {
    /// All headings, clockwise starting from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Single-character external code of this heading.
    pub fn code(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    /// Decodes a heading from its external code.
    ///
    /// The code must be exactly one of `N`, `E`, `S`, `W`; anything else,
    /// including lowercase letters and multi-character strings, yields
    /// [`RoverError::InvalidDirectionCode`].
    pub fn from_code(code: &str) -> Result<Self, RoverError> {
        Self::ALL
            .into_iter()
            .find(|direction| {
                let mut chars = code.chars();
                chars.next() == Some(direction.code()) && chars.next().is_none()
            })
            .ok_or_else(|| RoverError::InvalidDirectionCode(code.to_string()))
    }

    /// The heading pointing the other way.
    pub fn opposite(self) -> Self {
        crate::geometry::rotate_right(crate::geometry::rotate_right(self))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Direction {
    type Err = RoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// NOTE - Control symbols a rover understands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    RotateLeft,  // NOTE - Code "L", 90 degrees counter-clockwise
    RotateRight, // NOTE - Code "R", 90 degrees clockwise
    MoveForward, // NOTE - Code "M", one grid point along the heading
}

impl Command {
    pub const ALL: [Command; 3] = [
        Command::RotateLeft,
        Command::RotateRight,
        Command::MoveForward,
    ];

    pub fn code(self) -> char {
        match self {
            Command::RotateLeft => 'L',
            Command::RotateRight => 'R',
            Command::MoveForward => 'M',
        }
    }

    /// Decodes a single command character.
    pub fn from_code(code: char) -> Result<Self, RoverError> {
        Self::ALL
            .into_iter()
            .find(|command| command.code() == code)
            .ok_or(RoverError::InvalidCommandCode(code))
    }

    /// Decodes a whole command string, failing on the first unknown symbol.
    ///
    /// An empty string decodes to an empty command list.
    pub fn parse_sequence(codes: &str) -> Result<Vec<Self>, RoverError> {
        codes.chars().map(Self::from_code).collect()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// NOTE - Grid coordinates; never clamped to the plateau
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
