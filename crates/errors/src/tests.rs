#[cfg(test)]
mod error_tests {
    use crate::*;

    #[test]
    fn test_dispatch_error_display() {
        let invalid = DispatchError::invalid_request(4, 4, "starting and destination floors are equal");
        assert_eq!(
            invalid.to_string(),
            "Invalid request from floor 4 to floor 4: starting and destination floors are equal"
        );

        let duplicate = DispatchError::duplicate_elevator(2);
        assert_eq!(
            duplicate.to_string(),
            "Elevator 2 is already serviced by this controller"
        );

        let unknown = DispatchError::unknown_elevator(9);
        assert_eq!(unknown.to_string(), "Elevator 9 is not serviced by this controller");

        let unavailable = DispatchError::no_elevator_available(20);
        assert_eq!(unavailable.to_string(), "No elevator available for floor 20");

        let rejected = DispatchError::command_rejected(1, 10, "out of service");
        assert_eq!(
            rejected.to_string(),
            "Elevator 1 rejected command to floor 10: out of service"
        );

        let missing = DispatchError::route_not_found(3, 10);
        assert_eq!(missing.to_string(), "No queued route from floor 3 to floor 10");
    }

    #[test]
    fn test_retryable_errors() {
        assert!(DispatchError::no_elevator_available(1).is_retryable());
        assert!(DispatchError::command_rejected(1, 2, "busy").is_retryable());
        assert!(!DispatchError::unknown_elevator(1).is_retryable());
        assert!(!DispatchError::invalid_request(1, 1, "equal").is_retryable());
        assert!(!DispatchError::config_error("bad").is_retryable());
    }

    #[test]
    fn test_registry_misuse_errors() {
        assert!(DispatchError::duplicate_elevator(1).is_registry_misuse());
        assert!(DispatchError::unknown_elevator(1).is_registry_misuse());
        assert!(!DispatchError::no_elevator_available(1).is_registry_misuse());
    }
}
