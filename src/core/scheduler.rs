//! Periodic expiry checks.
//!
//! A tick purges stale records, reloads the inventory, aggregates reminders
//! and hands them to the configured sink. Ticks run one at a time inside
//! [`Scheduler::run`]; callers on other tasks or threads ask for an extra
//! tick or a stop through a [`SchedulerControl`].

use crate::core::clock::{Clock, SystemClock};
use crate::core::inventory::Inventory;
use crate::core::notify::build_notification;
use crate::core::sink::{ConsoleSink, FnSink, NotificationSink};
use crate::core::store::InventoryStore;
use crate::models::{FreshnessState, InventoryItem};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, watch};
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, warn};

/// Outcome of a single tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Ids removed by the stale purge.
    pub purged: Vec<i64>,
    /// Remaining records with their freshness at tick time.
    pub classified: Vec<(InventoryItem, FreshnessState)>,
    /// The aggregated message, if one was built.
    pub message: Option<String>,
    /// Whether the sink accepted the message.
    pub delivered: bool,
    /// False when the store could not be read; nothing else happened.
    pub scanned: bool,
}

/// Handle used to stop the loop or request an immediate tick.
#[derive(Clone)]
pub struct SchedulerControl {
    stop_tx: Arc<watch::Sender<bool>>,
    refresh: Arc<Notify>,
}

impl SchedulerControl {
    pub fn stop(&self) {
        // receivers may already be dropped
        let _ = self.stop_tx.send(true);
    }

    /// Ask for an extra tick as soon as the current one (if any) is done.
    pub fn refresh(&self) {
        self.refresh.notify_one();
    }

    pub fn is_stopped(&self) -> bool {
        *self.stop_tx.borrow()
    }
}

pub struct Scheduler<S> {
    inventory: Inventory<S>,
    sink: Box<dyn NotificationSink>,
    clock: Box<dyn Clock>,
    interval: Duration,
    initial_delay: Duration,
    stop_tx: Arc<watch::Sender<bool>>,
    stop_rx: watch::Receiver<bool>,
    refresh: Arc<Notify>,
}

impl<S: InventoryStore> Scheduler<S> {
    /// Console sink, system clock, daily interval, no initial delay.
    pub fn new(store: S) -> Self {
        let (stop_tx, stop_rx) = watch::channel(false);
        Self {
            inventory: Inventory::new(store),
            sink: Box::new(ConsoleSink),
            clock: Box::new(SystemClock),
            interval: Duration::from_secs(24 * 60 * 60),
            initial_delay: Duration::ZERO,
            stop_tx: Arc::new(stop_tx),
            stop_rx,
            refresh: Arc::new(Notify::new()),
        }
    }

    pub fn with_sink(mut self, sink: impl NotificationSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Route notifications to a plain callback.
    pub fn configure_sink<F>(self, f: F) -> Self
    where
        F: Fn(&str) + Send + 'static,
    {
        self.with_sink(FnSink(f))
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        // tokio panics on a zero period
        self.interval = interval.max(Duration::from_millis(1));
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn control(&self) -> SchedulerControl {
        SchedulerControl {
            stop_tx: Arc::clone(&self.stop_tx),
            refresh: Arc::clone(&self.refresh),
        }
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory<S> {
        &mut self.inventory
    }

    /// Run one full cycle. Never fails: store and sink errors are logged and
    /// the next tick starts from scratch.
    pub fn tick(&mut self) -> TickReport {
        let today = self.clock.today();
        let mut report = TickReport::default();
        debug!(%today, "tick started");

        let items = match self.inventory.purge_and_load(today) {
            Ok((purged, items)) => {
                report.purged = purged;
                items
            }
            Err(e) => {
                warn!(error = %e, "inventory scan failed, skipping this tick");
                return report;
            }
        };
        report.scanned = true;

        report.message = build_notification(&items, today);
        report.classified = items
            .into_iter()
            .map(|item| {
                let state = FreshnessState::classify(item.expiry_date, today);
                (item, state)
            })
            .collect();

        if let Some(message) = &report.message {
            match self.sink.deliver(message) {
                Ok(()) => report.delivered = true,
                Err(e) => warn!(error = %e, "notification delivery failed"),
            }
        }

        debug!(
            purged = report.purged.len(),
            items = report.classified.len(),
            notified = report.delivered,
            "tick finished"
        );
        report
    }

    /// Tick on the configured interval until [`SchedulerControl::stop`] is
    /// called. The first tick fires after the initial delay.
    pub async fn run(&mut self) {
        let mut stop = self.stop_rx.clone();
        let refresh = Arc::clone(&self.refresh);
        let mut ticker = interval_at(Instant::now() + self.initial_delay, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(interval = ?self.interval, "expiry scheduler started");

        loop {
            if *stop.borrow() {
                break;
            }

            tokio::select! {
                changed = stop.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    self.tick();
                }
                _ = refresh.notified() => {
                    debug!("on-demand refresh");
                    self.tick();
                }
            }
        }

        info!("expiry scheduler stopped");
    }
}
