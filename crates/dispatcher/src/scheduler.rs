use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use elevator_errors::{DispatchError, DispatchResult};

use crate::controller::{DispatchController, TickReport};

/// Monotonic time source, measured from an arbitrary origin.
pub trait Clock: Send + Sync {
    fn now(&self) -> Duration;
}

#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        let _ = self
            .nanos
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                Some(current.saturating_add(nanos))
            });
    }

    pub fn set(&self, at: Duration) {
        let nanos = u64::try_from(at.as_nanos()).unwrap_or(u64::MAX);
        self.nanos.store(nanos, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
    }
}

/// Fixed-interval tick source polled by the host loop.
///
/// Each poll runs at most one tick. When the host falls behind by several
/// intervals the missed ticks collapse into one and the schedule keeps its
/// original phase.
#[derive(Debug)]
pub struct TickScheduler<C: Clock> {
    clock: C,
    interval: Duration,
    next_due: Duration,
    ticks: u64,
}

impl<C: Clock> TickScheduler<C> {
    pub fn new(clock: C, interval: Duration) -> DispatchResult<Self> {
        if interval.is_zero() {
            return Err(DispatchError::config_error(
                "tick interval must be greater than zero",
            ));
        }
        let next_due = clock.now() + interval;
        Ok(Self {
            clock,
            interval,
            next_due,
            ticks: 0,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_due(&self) -> bool {
        self.clock.now() >= self.next_due
    }

    /// Time left until the next tick, zero when one is already due.
    pub fn time_until_next(&self) -> Duration {
        self.next_due.saturating_sub(self.clock.now())
    }

    /// Runs `on_tick` if an interval has elapsed. Returns whether it ran.
    pub fn poll<F: FnOnce()>(&mut self, on_tick: F) -> bool {
        let now = self.clock.now();
        if now < self.next_due {
            return false;
        }

        let behind = (now - self.next_due).as_nanos();
        let interval = self.interval.as_nanos();
        let skipped = behind / interval;
        if skipped > 0 {
            debug!(
                skipped = u64::try_from(skipped).unwrap_or(u64::MAX),
                "collapsing missed ticks"
            );
        }
        let into_interval = u64::try_from(behind % interval).unwrap_or(0);
        self.next_due = now + self.interval - Duration::from_nanos(into_interval);
        self.ticks += 1;

        on_tick();
        true
    }

    /// Polls and, when due, runs one controller tick.
    pub fn drive(&mut self, controller: &mut DispatchController) -> Option<TickReport> {
        let mut report = None;
        self.poll(|| report = Some(controller.tick()));
        report
    }
}

/// Runs controller ticks on the tokio runtime until shutdown.
pub struct TickDriver;

impl TickDriver {
    /// The mutex serializes ticks with every other caller of the controller.
    pub fn spawn(
        controller: Arc<Mutex<DispatchController>>,
        interval: Duration,
        mut shutdown_rx: broadcast::Receiver<()>,
    ) -> JoinHandle<()> {
        let interval = interval.max(Duration::from_millis(1));
        tokio::spawn(async move {
            let start = tokio::time::Instant::now() + interval;
            let mut ticker = tokio::time::interval_at(start, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            info!(interval_ms = interval.as_millis() as u64, "tick driver started");

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let report = controller.lock().await.tick();
                        if !report.is_empty() {
                            debug!(
                                assigned = report.assigned.len(),
                                deferred = report.deferred.len(),
                                "tick completed"
                            );
                        }
                    }
                    _ = shutdown_rx.recv() => {
                        info!("tick driver received shutdown signal");
                        break;
                    }
                }
            }
        })
    }
}
