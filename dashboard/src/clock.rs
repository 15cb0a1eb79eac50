use crate::api::DeviceApi;
use shared::datetime::DeviceDateTime;
use tracing::info;

pub async fn show(api: &DeviceApi) -> Result<(), String> {
    let datetime = api
        .datetime()
        .await
        .map_err(|e| format!("Failed to get the datetime from the device - {e}"))?;
    info!("Device clock {}", datetime.datetime);
    Ok(())
}

/// set the device clock and read it back to confirm
pub async fn set(api: &DeviceApi, value: Option<String>) -> Result<(), String> {
    let desired = match value {
        Some(value) => DeviceDateTime::new(&value),
        None => DeviceDateTime::from_local_now(),
    };
    // reject malformed input before any network call
    desired.parse()?;

    api.set_datetime(&desired)
        .await
        .map_err(|e| format!("Failed to set the datetime - {e}"))?;

    let confirmed = api
        .datetime()
        .await
        .map_err(|e| format!("Failed to read the datetime back - {e}"))?;
    info!("Device clock now {}", confirmed.datetime);
    Ok(())
}
