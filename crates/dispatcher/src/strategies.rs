use tracing::debug;

use elevator_core::{CarState, Direction, ElevatorId, Floor, HallCall};
use elevator_errors::{DispatchError, DispatchResult};

/// Snapshot of one car as seen by a selection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarCandidate {
    pub id: ElevatorId,
    /// Position of the car in the registry, in insertion order.
    pub index: usize,
    pub position: Option<Floor>,
    pub direction: Option<Direction>,
    pub state: CarState,
}

impl CarCandidate {
    pub fn distance_to(&self, floor: Floor) -> Option<Floor> {
        self.position
            .map(|position| Floor::try_from(position.abs_diff(floor)).unwrap_or(Floor::MAX))
    }

    /// Moving toward `call` in the call's direction without having passed it.
    fn is_heading_to(&self, call: &HallCall) -> bool {
        match (self.position, self.direction) {
            (Some(position), Some(direction)) => {
                direction == call.direction && direction.approaches(position, call.floor)
            }
            _ => false,
        }
    }
}

/// Picks one car among candidates that already passed range and exclusion checks.
pub trait SelectionStrategy: Send + Sync {
    fn select(&self, call: &HallCall, candidates: &[CarCandidate]) -> Option<ElevatorId>;

    fn name(&self) -> &str;
}

/// Sort key shared by both strategies: known distance first, then id.
fn distance_key(candidate: &CarCandidate, floor: Floor) -> (bool, Floor, ElevatorId) {
    match candidate.distance_to(floor) {
        Some(distance) => (false, distance, candidate.id),
        None => (true, 0, candidate.id),
    }
}

/// Nearest idle car, ignoring travel direction.
pub struct ClosestElevatorStrategy;

impl ClosestElevatorStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClosestElevatorStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStrategy for ClosestElevatorStrategy {
    fn select(&self, call: &HallCall, candidates: &[CarCandidate]) -> Option<ElevatorId> {
        let selected = candidates
            .iter()
            .filter(|candidate| candidate.state == CarState::Idle)
            .min_by_key(|candidate| distance_key(candidate, call.floor))?;

        debug!(
            elevator.id = selected.id,
            floor = call.floor,
            "closest strategy selected elevator"
        );
        Some(selected.id)
    }

    fn name(&self) -> &str {
        "closest"
    }
}

/// Prefers a car already travelling toward the caller in the call's direction.
///
/// Ranking, best first:
/// 1. assigned car moving the call's way and not yet past the call floor
/// 2. idle car whose last travel matches the call and has not passed it
/// 3. any other idle car
///
/// Assigned cars heading elsewhere are never picked. Ties go to the nearest
/// car, then the lowest id.
pub struct DirectionalStrategy;

impl DirectionalStrategy {
    pub fn new() -> Self {
        Self
    }

    fn tier(candidate: &CarCandidate, call: &HallCall) -> Option<u8> {
        match (candidate.state, candidate.is_heading_to(call)) {
            (CarState::Assigned, true) => Some(0),
            (CarState::Assigned, false) => None,
            (CarState::Idle, true) => Some(1),
            (CarState::Idle, false) => Some(2),
        }
    }
}

impl Default for DirectionalStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStrategy for DirectionalStrategy {
    fn select(&self, call: &HallCall, candidates: &[CarCandidate]) -> Option<ElevatorId> {
        let (tier, selected) = candidates
            .iter()
            .filter_map(|candidate| Self::tier(candidate, call).map(|tier| (tier, candidate)))
            .min_by_key(|(tier, candidate)| (*tier, distance_key(candidate, call.floor)))?;

        debug!(
            elevator.id = selected.id,
            floor = call.floor,
            direction = %call.direction,
            tier,
            "directional strategy selected elevator"
        );
        Some(selected.id)
    }

    fn name(&self) -> &str {
        "directional"
    }
}

pub fn strategy_from_name(name: &str) -> DispatchResult<Box<dyn SelectionStrategy>> {
    match name {
        "directional" => Ok(Box::new(DirectionalStrategy::new())),
        "closest" => Ok(Box::new(ClosestElevatorStrategy::new())),
        other => Err(DispatchError::config_error(format!(
            "unknown selection strategy: {other}"
        ))),
    }
}
