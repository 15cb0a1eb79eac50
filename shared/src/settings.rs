use serde::{Deserialize, Serialize};

/// bounds the device enforces on its configuration values
pub const GRAPH_POINTS_RANGE: (u32, u32) = (0, 100);
pub const REFRESH_RATE_RANGE: (u32, u32) = (1, 1800);
pub const LOG_INTERVAL_RANGE: (u32, u32) = (1, 1800);

/// `GET`/`POST /settings.json` - the device persists these to flash.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeviceSettings {
    /// live chart capacity, 0 disables the chart
    pub graph_points: u32,
    /// seconds between two poll cycles
    pub refresh_rate: u32,
    /// reference value readings are expressed against
    pub set_point: u32,
    /// seconds between two SD card log entries
    pub interval: u32,
}

/// used when the settings resource is unreachable: the chart stays disabled
/// and polling falls back to a conservative pace
impl Default for DeviceSettings {
    fn default() -> Self {
        DeviceSettings {
            graph_points: 0,
            refresh_rate: 10,
            set_point: 0,
            interval: 60,
        }
    }
}

impl DeviceSettings {
    pub fn validate(&self) -> Result<(), String> {
        check_range("graph_points", self.graph_points, GRAPH_POINTS_RANGE)?;
        check_range("refresh_rate", self.refresh_rate, REFRESH_RATE_RANGE)?;
        check_range("interval", self.interval, LOG_INTERVAL_RANGE)?;
        Ok(())
    }
}

fn check_range(name: &str, value: u32, (min, max): (u32, u32)) -> Result<(), String> {
    if value < min || value > max {
        return Err(format!("{name} must be between {min} and {max}, got {value}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> DeviceSettings {
        DeviceSettings {
            graph_points: 50,
            refresh_rate: 5,
            set_point: 100,
            interval: 60,
        }
    }

    #[test]
    fn should_accept_values_in_range() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn should_accept_range_boundaries() {
        let settings = DeviceSettings {
            graph_points: 100,
            refresh_rate: 1800,
            set_point: 0,
            interval: 1,
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn should_reject_too_many_graph_points() {
        let settings = DeviceSettings {
            graph_points: 101,
            ..valid()
        };
        let error = settings.validate().unwrap_err();
        assert!(error.contains("graph_points"));
    }

    #[test]
    fn should_reject_zero_refresh_rate() {
        let settings = DeviceSettings {
            refresh_rate: 0,
            ..valid()
        };
        let error = settings.validate().unwrap_err();
        assert!(error.contains("refresh_rate"));
    }

    #[test]
    fn should_reject_out_of_range_log_interval() {
        let settings = DeviceSettings {
            interval: 1801,
            ..valid()
        };
        let error = settings.validate().unwrap_err();
        assert!(error.contains("interval"));
    }

    #[test]
    fn should_disable_chart_by_default() {
        let settings = DeviceSettings::default();
        assert_eq!(0, settings.graph_points);
        assert_eq!(0, settings.set_point);
    }

    #[test]
    fn should_roundtrip_json() {
        let settings = valid();
        let json = serde_json::to_string(&settings).unwrap();
        let back: DeviceSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, back);
    }
}
