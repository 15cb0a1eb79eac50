use crate::sample_window::SampleWindow;
use crate::surface::{DisplaySurface, Severity};
use shared::measurement::Measurement;
use shared::settings::DeviceSettings;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// where measurements come from - the poller never sees reqwest directly
#[allow(async_fn_in_trait)]
pub trait MeasurementSource {
    async fn fetch_measurement(&self) -> Result<Measurement, String>;
}

/// outcome of one poll cycle, decides whether the loop keeps running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// sample stored, chart surface refreshed
    Updated,
    /// device reports the sensor missing, retry next cycle
    DeviceAbsent,
    /// payload had no reading field, retry next cycle
    MissingReading,
    /// transport or parse failure - the loop halts until the watcher
    /// is restarted
    Failed,
}

/// Drives the live view: fetch one measurement, classify it, feed the
/// sample window and the display surface, sleep, repeat.
///
/// Scheduling is self-rescheduling without drift correction, so the actual
/// period is `refresh_rate` plus the fetch latency of the previous cycle.
pub struct Poller {
    window: SampleWindow,
    set_point: f64,
    refresh: Duration,
    stop: Arc<AtomicBool>,
}

impl Poller {
    pub fn new(settings: &DeviceSettings, stop: Arc<AtomicBool>) -> Self {
        Poller {
            window: SampleWindow::new(settings.graph_points as usize),
            set_point: settings.set_point as f64,
            refresh: Duration::from_secs(settings.refresh_rate as u64),
            stop,
        }
    }

    pub fn window(&self) -> &SampleWindow {
        &self.window
    }

    pub async fn run<A, S>(&mut self, source: &A, surface: &S)
    where
        A: MeasurementSource,
        S: DisplaySurface,
    {
        info!(
            "Entering live data loop, polling every {}",
            humantime::format_duration(self.refresh)
        );
        loop {
            let outcome = self.poll_once(source, surface).await;
            if outcome == CycleOutcome::Failed {
                warn!("Live data loop halted, restart the watcher to resume");
                break;
            }
            // stop flag is honored before every reschedule
            if self.stop.load(Ordering::Relaxed) {
                info!("Stop requested, leaving live data loop");
                break;
            }
            tokio::time::sleep(self.refresh).await;
            if self.stop.load(Ordering::Relaxed) {
                info!("Stop requested, leaving live data loop");
                break;
            }
        }
    }

    pub async fn poll_once<A, S>(&mut self, source: &A, surface: &S) -> CycleOutcome
    where
        A: MeasurementSource,
        S: DisplaySurface,
    {
        let measurement = match source.fetch_measurement().await {
            Err(e) => {
                error!("Fetching measurement failed - {e}");
                surface.report_status("failed to get data!", Severity::Danger);
                return CycleOutcome::Failed;
            }
            Ok(measurement) => measurement,
        };

        let severity = measurement
            .color
            .as_deref()
            .map(Severity::from_color)
            .unwrap_or(Severity::Info);
        for line in measurement.message_lines() {
            surface.report_status(line, severity);
        }

        if measurement.device_absent() {
            debug!("Device reports the sensor absent, skipping sample");
            return CycleOutcome::DeviceAbsent;
        }

        if !measurement.timestamp.is_empty() {
            debug!("Device time {}", measurement.timestamp);
        }

        let Some(tension) = measurement.tension else {
            error!("Measurement payload has no reading field [tension]");
            return CycleOutcome::MissingReading;
        };

        let percent = percent_of_setpoint(tension, self.set_point);
        info!(
            "Tension {tension} / {} {} ({percent}%)",
            self.set_point, measurement.units
        );
        surface.update_progress(percent);

        self.window
            .push(measurement.time_of_day().to_string(), tension, self.set_point);
        if self.window.capacity() > 0 {
            let (timestamps, values, setpoints) = self.window.series();
            surface.push_series(&timestamps, &values, &setpoints);
        }

        CycleOutcome::Updated
    }
}

/// reading expressed against the configured setpoint, clamped to 0..=100
pub fn percent_of_setpoint(reading: f64, set_point: f64) -> u8 {
    if set_point <= 0.0 {
        return 0;
    }
    (reading / set_point * 100.0).round().clamp(0.0, 100.0) as u8
}
