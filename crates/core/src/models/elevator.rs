use serde::{Deserialize, Serialize};

use super::{Direction, ElevatorId, Floor};

/// Arrival notification reported by a car
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Arrival {
    pub floor: Floor,
    pub direction: Direction,
}

/// Dispatch state of a serviced car
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CarState {
    #[default]
    Idle,
    Assigned,
}

/// Registry record for one car serviced by a controller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElevatorEntry {
    pub id: ElevatorId,
    /// Set between an arrival notification and the decision that consumes it.
    pub has_arrived: bool,
    /// Most recent arrival; kept after consumption as the last known position.
    pub last_arrival: Option<Arrival>,
}

impl ElevatorEntry {
    pub fn new(id: ElevatorId) -> Self {
        Self {
            id,
            has_arrived: false,
            last_arrival: None,
        }
    }

    pub fn arrival_floor(&self) -> Option<Floor> {
        self.last_arrival.map(|arrival| arrival.floor)
    }

    pub fn arrival_direction(&self) -> Option<Direction> {
        self.last_arrival.map(|arrival| arrival.direction)
    }

    pub fn record_arrival(&mut self, floor: Floor, direction: Direction) {
        self.has_arrived = true;
        self.last_arrival = Some(Arrival { floor, direction });
    }

    /// Clears the pending flag and hands back the arrival it covered.
    pub fn consume_arrival(&mut self) -> Option<Arrival> {
        if !self.has_arrived {
            return None;
        }
        self.has_arrived = false;
        self.last_arrival
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_has_no_arrival() {
        let entry = ElevatorEntry::new(3);
        assert!(!entry.has_arrived);
        assert_eq!(entry.arrival_floor(), None);
        assert_eq!(entry.arrival_direction(), None);
    }

    #[test]
    fn test_arrival_last_write_wins() {
        let mut entry = ElevatorEntry::new(1);
        entry.record_arrival(4, Direction::Up);
        entry.record_arrival(6, Direction::Down);

        assert!(entry.has_arrived);
        assert_eq!(entry.arrival_floor(), Some(6));
        assert_eq!(entry.arrival_direction(), Some(Direction::Down));
    }

    #[test]
    fn test_consume_arrival_keeps_position() {
        let mut entry = ElevatorEntry::new(1);
        entry.record_arrival(8, Direction::Up);

        let consumed = entry.consume_arrival();
        assert_eq!(
            consumed,
            Some(Arrival {
                floor: 8,
                direction: Direction::Up
            })
        );
        assert!(!entry.has_arrived);
        assert_eq!(entry.arrival_floor(), Some(8));
        assert_eq!(entry.consume_arrival(), None);
    }
}
