#![forbid(unsafe_code)]

//! Tooltip directions.

use std::fmt;
use std::str::FromStr;

/// Side of the trigger the tooltip is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
}

/// Axis a direction extends along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Position {
    /// Every direction, in tie-break order.
    ///
    /// When several directions leave the same amount of room, the one listed
    /// first here is chosen.
    pub const ALL: [Position; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Lower-case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Top | Self::Bottom => Axis::Vertical,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            _ => Err(ParsePositionError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Error returned when a string names no [`Position`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePositionError {
    input: String,
}

impl ParsePositionError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown tooltip position {:?} (expected left, right, top or bottom)",
            self.input
        )
    }
}

impl std::error::Error for ParsePositionError {}
