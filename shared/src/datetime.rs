use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// minute precision, the device clock does not expose seconds over this resource
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// `GET`/`POST /datetime` - both directions use the same single-field shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeviceDateTime {
    pub datetime: String,
}

impl DeviceDateTime {
    /// Accepts both the device's own format and the HTML datetime-local
    /// variant with a `T` separator.
    pub fn new(value: &str) -> Self {
        DeviceDateTime {
            datetime: value.trim().replace('T', " "),
        }
    }

    pub fn from_local_now() -> Self {
        DeviceDateTime {
            datetime: Local::now().format(DATETIME_FORMAT).to_string(),
        }
    }

    pub fn parse(&self) -> Result<NaiveDateTime, String> {
        NaiveDateTime::parse_from_str(&self.datetime, DATETIME_FORMAT).map_err(|e| {
            format!(
                "'{}' is not a valid device datetime ({DATETIME_FORMAT}) - {e}",
                self.datetime
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn should_parse_device_format() {
        let datetime = DeviceDateTime::new("2020-03-01 13:37");
        let parsed = datetime.parse().unwrap();

        assert_eq!(2020, parsed.year());
        assert_eq!(3, parsed.month());
        assert_eq!(1, parsed.day());
        assert_eq!(13, parsed.hour());
        assert_eq!(37, parsed.minute());
    }

    #[test]
    fn should_normalize_html_input_separator() {
        let datetime = DeviceDateTime::new("2020-03-01T13:37");

        assert_eq!("2020-03-01 13:37", datetime.datetime);
        assert!(datetime.parse().is_ok());
    }

    #[test]
    fn should_reject_seconds_precision() {
        let datetime = DeviceDateTime::new("2020-03-01 13:37:05");

        assert!(datetime.parse().is_err());
    }

    #[test]
    fn should_format_local_now_in_device_format() {
        let now = DeviceDateTime::from_local_now();

        assert!(now.parse().is_ok());
    }

    #[test]
    fn should_roundtrip_json() {
        let datetime = DeviceDateTime::new("2020-03-01 13:37");
        let json = serde_json::to_string(&datetime).unwrap();

        assert_eq!(r#"{"datetime":"2020-03-01 13:37"}"#, json);
        let back: DeviceDateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(datetime, back);
    }
}
