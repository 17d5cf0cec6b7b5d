use serde::{Deserialize, Serialize};

use elevator_errors::{DispatchError, DispatchResult};

use super::{Direction, Floor};

/// Destination dispatch request: a passenger going from one floor to another
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Request {
    pub starting_floor: Floor,
    pub destination_floor: Floor,
}

impl Request {
    pub fn new(starting_floor: Floor, destination_floor: Floor) -> DispatchResult<Self> {
        if starting_floor == destination_floor {
            return Err(DispatchError::invalid_request(
                starting_floor,
                destination_floor,
                "starting and destination floors are equal",
            ));
        }
        Ok(Self {
            starting_floor,
            destination_floor,
        })
    }

    pub fn direction(&self) -> Direction {
        Direction::from_up(self.destination_floor > self.starting_floor)
    }

    pub fn matches(&self, starting_floor: Floor, destination_floor: Floor) -> bool {
        self.starting_floor == starting_floor && self.destination_floor == destination_floor
    }

    /// The hall call a car has to answer to pick this passenger up.
    pub fn pickup_call(&self) -> HallCall {
        HallCall::new(self.starting_floor, self.direction())
    }
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.starting_floor, self.destination_floor)
    }
}

/// Conventional floor call: an up or down button pressed on a floor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct HallCall {
    pub floor: Floor,
    pub direction: Direction,
}

impl HallCall {
    pub fn new(floor: Floor, direction: Direction) -> Self {
        Self { floor, direction }
    }
}

impl std::fmt::Display for HallCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "floor {} {}", self.floor, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_rejects_equal_floors() {
        let err = Request::new(4, 4).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidRequest { .. }));
    }

    #[test]
    fn test_request_direction() {
        assert_eq!(Request::new(3, 10).unwrap().direction(), Direction::Up);
        assert_eq!(Request::new(10, 3).unwrap().direction(), Direction::Down);
        assert_eq!(
            Request::new(-2, 0).unwrap().pickup_call(),
            HallCall::new(-2, Direction::Up)
        );
    }

    #[test]
    fn test_request_matches() {
        let request = Request::new(1, 7).unwrap();
        assert!(request.matches(1, 7));
        assert!(!request.matches(7, 1));
        assert_eq!(request.to_string(), "1 -> 7");
    }
}
