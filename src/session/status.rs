//! Session lifecycle status.

use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
///
/// `Win` and `Lose` are terminal: only `restart` leaves them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Created, no tiles placed yet.
    #[default]
    Idle,
    /// Moves are accepted.
    Playing,
    /// A tile reached the target value.
    Win,
    /// The board is full and nothing can slide.
    Lose,
}

impl Status {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::Win | Status::Lose)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Playing => "playing",
            Status::Win => "win",
            Status::Lose => "lose",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal() {
        assert!(!Status::Idle.is_terminal());
        assert!(!Status::Playing.is_terminal());
        assert!(Status::Win.is_terminal());
        assert!(Status::Lose.is_terminal());
        assert_eq!(Status::default(), Status::Idle);
    }

    #[test]
    fn test_serde_names() {
        for status in [Status::Idle, Status::Playing, Status::Win, Status::Lose] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
            let back: Status = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }
}
