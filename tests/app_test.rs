#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use elevator_config::{AppConfig, LogConfig};
    use elevator_dispatch::{init_logging, DispatchApp, RouteOutcome};
    use elevator_testing_utils::{ControllerConfigBuilder, MockElevatorCommander};

    fn destination_config() -> AppConfig {
        AppConfig {
            controller: ControllerConfigBuilder::new()
                .with_elevators(&[1, 2])
                .with_tick_interval_ms(100)
                .destination_dispatch()
                .build(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_app_rejects_invalid_building() {
        let mut config = destination_config();
        config.building.bottom_floor = 10;
        config.building.top_floor = 2;

        let result = DispatchApp::new(config, Arc::new(MockElevatorCommander::new()));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_app_validates_floors_against_building() {
        let mut config = destination_config();
        config.building.bottom_floor = -2;
        config.building.top_floor = 12;
        let app = DispatchApp::new(config, Arc::new(MockElevatorCommander::new())).unwrap();

        let controller = app.controller();
        let mut controller = controller.lock().await;
        assert_eq!(controller.request_route(-2, 5).unwrap(), RouteOutcome::Queued);
        assert!(controller.request_route(0, 13).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_app_runs_ticks_until_shutdown() {
        let commander = MockElevatorCommander::new();
        let app = Arc::new(
            DispatchApp::new(destination_config(), Arc::new(commander.clone())).unwrap(),
        );
        app.controller()
            .lock()
            .await
            .request_route(3, 10)
            .unwrap();

        let runner = {
            let app = Arc::clone(&app);
            tokio::spawn(async move { app.run().await })
        };

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(commander.commands().len(), 1);
        assert_eq!(commander.commands()[0].floor, 10);

        app.shutdown_manager().shutdown().await;
        runner.await.unwrap().unwrap();
        assert!(app.shutdown_manager().is_shutdown().await);
    }

    #[test]
    fn test_init_logging_installs_once() {
        assert!(init_logging(&LogConfig::default()).is_ok());
        assert!(init_logging(&LogConfig::default()).is_err());
    }
}
