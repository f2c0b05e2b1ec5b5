use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::error::LandingError;

/// A rocket's requested square on the landing grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// True when `other` is this square or one of its eight neighbours
    pub fn is_adjacent_to(&self, other: &Position) -> bool {
        self.x.abs_diff(other.x) < 2 && self.y.abs_diff(other.y) < 2
    }
}

impl From<(u8, u8)> for Position {
    fn from((x, y): (u8, u8)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `X,Y`, e.g. `10,12` or `10, 12`
impl FromStr for Position {
    type Err = LandingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| LandingError::InvalidPosition {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| invalid("expected X,Y"))?;
        let x = x
            .trim()
            .parse::<u8>()
            .map_err(|e| invalid(&format!("bad x coordinate: {}", e)))?;
        let y = y
            .trim()
            .parse::<u8>()
            .map_err(|e| invalid(&format!("bad y coordinate: {}", e)))?;

        Ok(Self { x, y })
    }
}
