#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use tokio::sync::{broadcast, Mutex};

    use elevator_core::DispatchError;
    use elevator_dispatcher::controller::DispatchController;
    use elevator_dispatcher::scheduler::*;
    use elevator_testing_utils::{ControllerConfigBuilder, TestContext};

    fn destination_controller(test: &TestContext) -> DispatchController {
        let config = ControllerConfigBuilder::new()
            .with_elevators(&[1, 2])
            .destination_dispatch()
            .build();
        DispatchController::new(&config, test.context.clone()).unwrap()
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = TickScheduler::new(ManualClock::new(), Duration::ZERO);
        assert!(matches!(result, Err(DispatchError::Configuration(_))));
    }

    #[test]
    fn test_poll_runs_once_per_interval() {
        let clock = ManualClock::new();
        let mut scheduler = TickScheduler::new(clock.clone(), Duration::from_millis(100)).unwrap();
        let mut runs = 0;

        assert!(!scheduler.poll(|| runs += 1));
        clock.advance(Duration::from_millis(99));
        assert!(!scheduler.is_due());
        assert_eq!(scheduler.time_until_next(), Duration::from_millis(1));

        clock.advance(Duration::from_millis(1));
        assert!(scheduler.poll(|| runs += 1));
        assert!(!scheduler.poll(|| runs += 1));

        assert_eq!(runs, 1);
        assert_eq!(scheduler.ticks(), 1);
    }

    #[test]
    fn test_missed_intervals_collapse_into_one_tick() {
        let clock = ManualClock::new();
        let mut scheduler = TickScheduler::new(clock.clone(), Duration::from_millis(100)).unwrap();
        let mut runs = 0;

        clock.advance(Duration::from_millis(350));
        assert!(scheduler.poll(|| runs += 1));
        assert!(!scheduler.poll(|| runs += 1));
        assert_eq!(scheduler.time_until_next(), Duration::from_millis(50));

        clock.advance(Duration::from_millis(50));
        assert!(scheduler.poll(|| runs += 1));
        assert_eq!(runs, 2);
    }

    #[test]
    fn test_manual_clock_keeps_sub_millisecond_steps() {
        let clock = ManualClock::new();
        let scheduler = TickScheduler::new(clock.clone(), Duration::from_millis(1)).unwrap();

        clock.advance(Duration::from_micros(600));
        assert!(!scheduler.is_due());
        clock.advance(Duration::from_micros(600));

        assert!(scheduler.is_due());
        assert_eq!(clock.now(), Duration::from_micros(1200));
    }

    #[test]
    fn test_drive_ticks_controller_when_due() {
        let test = TestContext::new();
        let mut controller = destination_controller(&test);
        let clock = ManualClock::new();
        let mut scheduler = TickScheduler::new(clock.clone(), Duration::from_millis(100)).unwrap();
        controller.request_route(3, 10).unwrap();

        assert!(scheduler.drive(&mut controller).is_none());
        assert!(test.commander.commands().is_empty());

        clock.advance(Duration::from_millis(100));
        let report = scheduler.drive(&mut controller).unwrap();

        assert_eq!(report.assigned.len(), 1);
        assert_eq!(test.commander.commands().len(), 1);
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock::new();
        let first = clock.now();
        assert!(clock.now() >= first);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_driver_runs_until_shutdown() {
        let test = TestContext::new();
        let controller = Arc::new(Mutex::new(destination_controller(&test)));
        controller.lock().await.request_route(3, 10).unwrap();
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

        let handle = TickDriver::spawn(controller.clone(), Duration::from_millis(100), shutdown_rx);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(test.commander.commands().is_empty());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(test.commander.commands().len(), 1);
        assert!(controller.lock().await.pending_requests().is_empty());

        shutdown_tx.send(()).unwrap();
        handle.await.unwrap();
    }
}
