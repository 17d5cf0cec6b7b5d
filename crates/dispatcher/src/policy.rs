use tracing::debug;

use elevator_config::RangeMode;
use elevator_core::{ElevatorId, HallCall};

use crate::strategies::{CarCandidate, SelectionStrategy};

/// Closest-car selection bounded by the controller's elevator range.
pub struct AssignmentPolicy {
    elevator_range: i32,
    range_mode: RangeMode,
    strategy: Box<dyn SelectionStrategy>,
}

impl AssignmentPolicy {
    pub fn new(
        elevator_range: i32,
        range_mode: RangeMode,
        strategy: Box<dyn SelectionStrategy>,
    ) -> Self {
        Self {
            elevator_range,
            range_mode,
            strategy,
        }
    }

    pub fn elevator_range(&self) -> i32 {
        self.elevator_range
    }

    pub fn range_mode(&self) -> RangeMode {
        self.range_mode
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// A car whose position is unknown is kept in floor mode; the strategy
    /// ranks it after every car with a known position.
    pub fn in_range(&self, candidate: &CarCandidate, call: &HallCall) -> bool {
        match self.range_mode {
            RangeMode::Floors => candidate
                .distance_to(call.floor)
                .map_or(true, |distance| distance <= self.elevator_range),
            RangeMode::CarIndex => {
                usize::try_from(self.elevator_range).map_or(false, |span| candidate.index < span)
            }
        }
    }

    /// Best car for `call`, or `None` when no car qualifies.
    pub fn find_closest_elevator(
        &self,
        call: &HallCall,
        candidates: &[CarCandidate],
        exclude: &[ElevatorId],
    ) -> Option<ElevatorId> {
        let eligible: Vec<CarCandidate> = candidates
            .iter()
            .filter(|candidate| !exclude.contains(&candidate.id))
            .filter(|candidate| self.in_range(candidate, call))
            .copied()
            .collect();

        if eligible.is_empty() {
            debug!(
                floor = call.floor,
                range = self.elevator_range,
                "no elevator within range"
            );
            return None;
        }
        self.strategy.select(call, &eligible)
    }
}

impl std::fmt::Debug for AssignmentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssignmentPolicy")
            .field("elevator_range", &self.elevator_range)
            .field("range_mode", &self.range_mode)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
