use serde::{Deserialize, Serialize};

/// One reading as served by `GET /measurement`.
///
/// `tension` stays optional so that a payload missing the reading field can
/// be told apart from a reading of zero - firmware revisions without the
/// sensor driver omit the field entirely.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Measurement {
    pub tension: Option<f64>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub units: String,
    pub present: Option<bool>,
    pub message: Option<String>,
    pub color: Option<String>,
}

impl Measurement {
    /// chart label: "2020-03-01 13:37:05" -> "13:37:05"
    pub fn time_of_day(&self) -> &str {
        self.timestamp
            .split_whitespace()
            .nth(1)
            .unwrap_or(&self.timestamp)
    }

    /// the device flags a missing sensor with `present: false`,
    /// older firmware omits the field which counts as present
    pub fn device_absent(&self) -> bool {
        self.present == Some(false)
    }

    /// Device status messages are comma separated with a trailing separator,
    /// so the token after the last comma is padding and gets dropped.
    pub fn message_lines(&self) -> Vec<&str> {
        let Some(message) = self.message.as_deref() else {
            return Vec::new();
        };
        let mut lines: Vec<&str> = message.split(',').collect();
        lines.pop();
        lines
    }
}
