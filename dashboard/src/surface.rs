use tracing::{debug, error, info, warn};

/// How urgent a status line is. The words mirror the color vocabulary the
/// device uses in its measurement payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

impl Severity {
    /// unknown color words downgrade to Info rather than failing the cycle
    pub fn from_color(color: &str) -> Self {
        match color {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "danger" => Severity::Danger,
            _ => Severity::Info,
        }
    }
}

/// Styling band of the load gauge. Low fill warns (the logger is idle or
/// the sensor barely loaded), high fill is the healthy operating range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Warning,
    Primary,
    Success,
}

impl Band {
    pub fn from_percent(percent: u8) -> Self {
        if percent < 33 {
            Band::Warning
        } else if percent < 66 {
            Band::Primary
        } else {
            Band::Success
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Warning => "warning",
            Band::Primary => "primary",
            Band::Success => "success",
        }
    }
}

/// Rendering boundary of the live view. The poller only ever talks to the
/// screen through this trait, never to a concrete rendering technology.
pub trait DisplaySurface {
    fn report_status(&self, text: &str, severity: Severity);
    fn update_progress(&self, percent: u8);
    fn push_series(&self, timestamps: &[String], values: &[f64], setpoints: &[f64]);
}

/// default surface for the headless client: renders into the log stream
pub struct LogSurface;

impl DisplaySurface for LogSurface {
    fn report_status(&self, text: &str, severity: Severity) {
        match severity {
            Severity::Danger => error!("device status: {text}"),
            Severity::Warning => warn!("device status: {text}"),
            Severity::Success | Severity::Info => info!("device status: {text}"),
        }
    }

    fn update_progress(&self, percent: u8) {
        info!(
            "load {percent}% [{}]",
            Band::from_percent(percent).as_str()
        );
    }

    fn push_series(&self, timestamps: &[String], values: &[f64], setpoints: &[f64]) {
        debug_assert_eq!(timestamps.len(), values.len());
        debug_assert_eq!(values.len(), setpoints.len());
        let latest = timestamps
            .last()
            .zip(values.last())
            .map(|(t, v)| format!("{t} -> {v}"))
            .unwrap_or_else(|| "empty".to_string());
        debug!("chart refresh, {} point(s), latest {latest}", values.len());
    }
}
