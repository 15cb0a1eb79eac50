use crate::api::DeviceApi;
use shared::settings::DeviceSettings;
use std::time::Duration;
use tracing::info;

/// the device persists to flash before the new values can be read back
const SETTLE_DELAY_MS: u64 = 250;

/// partial update from the command line, merged onto the device's current
/// settings so untouched values survive the round trip
#[derive(Debug, Default, Clone)]
pub struct SettingsUpdate {
    pub graph_points: Option<u32>,
    pub refresh_rate: Option<u32>,
    pub set_point: Option<u32>,
    pub interval: Option<u32>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.graph_points.is_none()
            && self.refresh_rate.is_none()
            && self.set_point.is_none()
            && self.interval.is_none()
    }

    pub fn merged_onto(&self, current: &DeviceSettings) -> DeviceSettings {
        DeviceSettings {
            graph_points: self.graph_points.unwrap_or(current.graph_points),
            refresh_rate: self.refresh_rate.unwrap_or(current.refresh_rate),
            set_point: self.set_point.unwrap_or(current.set_point),
            interval: self.interval.unwrap_or(current.interval),
        }
    }
}

pub async fn show(api: &DeviceApi) -> Result<(), String> {
    let (settings, device) = futures::join!(api.settings(), api.info());
    let settings =
        settings.map_err(|e| format!("Failed to get settings from the device - {e}"))?;
    let device = device.map_err(|e| format!("Failed to get device info - {e}"))?;

    info!("Graph points  {}", settings.graph_points);
    info!(
        "Refresh rate  {}",
        humantime::format_duration(Duration::from_secs(settings.refresh_rate as u64))
    );
    info!("Set point     {}", settings.set_point);
    info!(
        "Log interval  {}",
        humantime::format_duration(Duration::from_secs(settings.interval as u64))
    );
    info!("Version       {}", device.version);
    info!("Coincell      {} V", device.coincell);
    info!("Temperature   {} C", device.temperature);
    Ok(())
}

/// validate, post, let the device settle, read back and confirm
pub async fn apply(api: &DeviceApi, update: SettingsUpdate) -> Result<(), String> {
    if update.is_empty() {
        return Err("Nothing to update - provide at least one setting".to_string());
    }

    let current = api
        .settings()
        .await
        .map_err(|e| format!("Failed to get settings from the device - {e}"))?;
    let desired = update.merged_onto(&current);
    desired.validate()?;

    api.update_settings(&desired)
        .await
        .map_err(|e| format!("Failed to send settings - {e}"))?;
    tokio::time::sleep(Duration::from_millis(SETTLE_DELAY_MS)).await;

    let confirmed = api
        .settings()
        .await
        .map_err(|e| format!("Failed to read settings back - {e}"))?;
    if confirmed == desired {
        info!("Device confirmed the new settings");
        Ok(())
    } else {
        Err(format!(
            "Device did not accept the update - it reports {confirmed:?}"
        ))
    }
}
