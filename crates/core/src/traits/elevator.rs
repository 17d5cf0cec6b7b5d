use crate::models::{Direction, ElevatorId, Floor};
use crate::DispatchResult;

/// Command channel to the cars.
///
/// `command` is fire-and-forget: the car later reports back through the
/// controller's arrival notification. Returning an error means the car
/// refused the command and the controller may try another one.
pub trait ElevatorCommander: Send + Sync {
    fn command(
        &self,
        id: ElevatorId,
        destination_floor: Floor,
        direction: Direction,
    ) -> DispatchResult<()>;

    /// Current floor of a car, if the car can tell.
    fn query_position(&self, _id: ElevatorId) -> Option<Floor> {
        None
    }

    /// Current travel direction of a car, if the car can tell.
    fn query_direction(&self, _id: ElevatorId) -> Option<Direction> {
        None
    }
}
