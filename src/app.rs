use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Mutex;
use tracing::{error, info};

use elevator_config::{AppConfig, ConfigValidator};
use elevator_core::{BoundedFloorRange, ControllerContext, ElevatorCommander, TracingReporter};
use elevator_dispatcher::{DispatchController, TickDriver};

use crate::shutdown::ShutdownManager;

/// Composition root: one controller driven by a tick task.
pub struct DispatchApp {
    config: AppConfig,
    controller: Arc<Mutex<DispatchController>>,
    shutdown: ShutdownManager,
}

impl DispatchApp {
    pub fn new(config: AppConfig, commander: Arc<dyn ElevatorCommander>) -> Result<Self> {
        config.validate().context("invalid dispatch configuration")?;

        let floors = BoundedFloorRange::new(config.building.bottom_floor, config.building.top_floor);
        let reporter = TracingReporter::new(format!("controller-{}", config.controller.number));
        let context = ControllerContext::new(commander, Arc::new(floors), Arc::new(reporter));

        let controller = DispatchController::new(&config.controller, context)
            .context("failed to create dispatch controller")?;
        info!(
            controller.number = config.controller.number,
            bottom_floor = config.building.bottom_floor,
            top_floor = config.building.top_floor,
            "dispatch application initialized"
        );

        Ok(Self {
            config,
            controller: Arc::new(Mutex::new(controller)),
            shutdown: ShutdownManager::new(),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shared handle for call stations and elevator callbacks.
    pub fn controller(&self) -> Arc<Mutex<DispatchController>> {
        Arc::clone(&self.controller)
    }

    pub fn shutdown_manager(&self) -> ShutdownManager {
        self.shutdown.clone()
    }

    /// Ticks the controller until shutdown is triggered.
    pub async fn run(&self) -> Result<()> {
        let shutdown_rx = self.shutdown.subscribe().await;
        let interval = self.config.controller.tick_interval();
        info!(interval_ms = self.config.controller.tick_interval_ms, "starting dispatch loop");

        let handle = TickDriver::spawn(self.controller(), interval, shutdown_rx);
        handle.await.context("tick driver task failed")?;

        info!("dispatch loop stopped");
        Ok(())
    }

    /// Like `run`, but also shuts down on Ctrl+C.
    pub async fn run_until_ctrl_c(&self) -> Result<()> {
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("received Ctrl+C"),
                Err(e) => error!("failed to listen for Ctrl+C: {e}"),
            }
            shutdown.shutdown().await;
        });
        self.run().await
    }
}
