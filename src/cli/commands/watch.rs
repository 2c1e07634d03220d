use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Scheduler, SchedulerControl};
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::io::BufRead;
use std::time::Duration;
use tracing::warn;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { interval, delay } = cmd {
        let minutes = interval.unwrap_or(cfg.notify_interval_minutes).max(1);
        let delay = delay.unwrap_or(cfg.startup_delay_secs);

        let mut scheduler = Scheduler::new(SqliteStore::open(&cfg.database)?)
            .with_interval(Duration::from_secs(minutes * 60))
            .with_initial_delay(Duration::from_secs(delay));
        let control = scheduler.control();

        info(format!(
            "Checking every {} minute(s). Press Enter to check now, Ctrl+C to stop.",
            minutes
        ));

        spawn_stdin_refresh(control.clone());

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        rt.block_on(async {
            let stopper = control.clone();
            tokio::spawn(async move {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => stopper.stop(),
                    Err(e) => warn!(error = %e, "cannot listen for Ctrl+C"),
                }
            });
            scheduler.run().await;
        });

        info("Stopped.");
    }

    Ok(())
}

/// Each line on stdin asks for an immediate check; EOF just ends the reader.
fn spawn_stdin_refresh(control: SchedulerControl) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            if line.is_err() || control.is_stopped() {
                break;
            }
            control.refresh();
        }
    });
}
