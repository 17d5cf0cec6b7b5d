use serde::{Deserialize, Serialize};

use super::Floor;

/// Travel direction of a car or a call
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction of travel from `from` to `to`, `None` when both are the same floor.
    pub fn between(from: Floor, to: Floor) -> Option<Self> {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Some(Direction::Up),
            std::cmp::Ordering::Less => Some(Direction::Down),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn from_up(up: bool) -> Self {
        if up {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn is_up(self) -> bool {
        matches!(self, Direction::Up)
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Whether a car at `position` moving this way has not yet passed `floor`.
    pub fn approaches(self, position: Floor, floor: Floor) -> bool {
        match self {
            Direction::Up => position <= floor,
            Direction::Down => position >= floor,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_between() {
        assert_eq!(Direction::between(3, 10), Some(Direction::Up));
        assert_eq!(Direction::between(10, 3), Some(Direction::Down));
        assert_eq!(Direction::between(-1, -4), Some(Direction::Down));
        assert_eq!(Direction::between(5, 5), None);
    }

    #[test]
    fn test_approaches() {
        assert!(Direction::Up.approaches(2, 5));
        assert!(Direction::Up.approaches(5, 5));
        assert!(!Direction::Up.approaches(6, 5));
        assert!(Direction::Down.approaches(9, 5));
        assert!(!Direction::Down.approaches(4, 5));
    }

    #[test]
    fn test_direction_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Up).unwrap(), "\"up\"");
        let parsed: Direction = serde_json::from_str("\"down\"").unwrap();
        assert_eq!(parsed, Direction::Down);
        assert_eq!(Direction::from_up(false).opposite(), Direction::Up);
    }
}
