use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Invalid request from floor {starting_floor} to floor {destination_floor}: {reason}")]
    InvalidRequest {
        starting_floor: i32,
        destination_floor: i32,
        reason: String,
    },
    #[error("Elevator {id} is already serviced by this controller")]
    DuplicateElevator { id: i32 },
    #[error("Elevator {id} is not serviced by this controller")]
    UnknownElevator { id: i32 },
    #[error("No elevator available for floor {floor}")]
    NoElevatorAvailable { floor: i32 },
    #[error("Elevator {id} rejected command to floor {floor}: {reason}")]
    CommandRejected { id: i32, floor: i32, reason: String },
    #[error("No queued route from floor {starting_floor} to floor {destination_floor}")]
    RouteNotFound {
        starting_floor: i32,
        destination_floor: i32,
    },
    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type DispatchResult<T> = Result<T, DispatchError>;

impl DispatchError {
    pub fn invalid_request<S: Into<String>>(
        starting_floor: i32,
        destination_floor: i32,
        reason: S,
    ) -> Self {
        Self::InvalidRequest {
            starting_floor,
            destination_floor,
            reason: reason.into(),
        }
    }
    pub fn duplicate_elevator(id: i32) -> Self {
        Self::DuplicateElevator { id }
    }
    pub fn unknown_elevator(id: i32) -> Self {
        Self::UnknownElevator { id }
    }
    pub fn no_elevator_available(floor: i32) -> Self {
        Self::NoElevatorAvailable { floor }
    }
    pub fn command_rejected<S: Into<String>>(id: i32, floor: i32, reason: S) -> Self {
        Self::CommandRejected {
            id,
            floor,
            reason: reason.into(),
        }
    }
    pub fn route_not_found(starting_floor: i32, destination_floor: i32) -> Self {
        Self::RouteNotFound {
            starting_floor,
            destination_floor,
        }
    }
    pub fn config_error<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    /// Transient conditions that a later tick or event may resolve.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DispatchError::NoElevatorAvailable { .. } | DispatchError::CommandRejected { .. }
        )
    }

    pub fn is_registry_misuse(&self) -> bool {
        matches!(
            self,
            DispatchError::DuplicateElevator { .. } | DispatchError::UnknownElevator { .. }
        )
    }
}

#[cfg(test)]
mod tests;
