//! Slide directions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::GameError;

/// Direction the tiles slide toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in the order the lose check tries them.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Whether this direction runs along columns rather than rows.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Whether tiles move toward the high-index end of each line.
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    /// Parse a direction name, case-insensitively.
    ///
    /// ```
    /// use rust_2048::core::Direction;
    ///
    /// assert_eq!("Up".parse::<Direction>().unwrap(), Direction::Up);
    /// assert!("sideways".parse::<Direction>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GameError::InvalidDirection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("left".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("RIGHT".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!(" down ".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!(
            "diagonal".parse::<Direction>(),
            Err(GameError::InvalidDirection("diagonal".into()))
        );
    }

    #[test]
    fn test_display_roundtrip() {
        for d in Direction::ALL {
            assert_eq!(d.to_string().parse::<Direction>(), Ok(d));
        }
    }

    #[test]
    fn test_orientation_flags() {
        assert!(!Direction::Left.is_vertical());
        assert!(!Direction::Left.is_reversed());
        assert!(Direction::Down.is_vertical());
        assert!(Direction::Down.is_reversed());
        assert!(Direction::Up.is_vertical());
        assert!(Direction::Right.is_reversed());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Direction::Up).unwrap();
        assert_eq!(json, "\"up\"");
        let back: Direction = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(back, Direction::Left);
    }
}
