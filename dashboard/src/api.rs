use crate::config::Config;
use crate::poller::MeasurementSource;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::datetime::DeviceDateTime;
use shared::endpoint::DeviceEndpoint;
use shared::file_entry::FileEntry;
use shared::info::DeviceInfo;
use shared::measurement::Measurement;
use shared::memory::MemoryCard;
use shared::settings::DeviceSettings;
use std::time::Duration;

/// Thin typed layer over the device's JSON resources.
///
/// Transport and parse failures collapse into the `Err` sentinel the
/// callers report on; no retrying happens at this level.
pub struct DeviceApi {
    client: Client,
    base: String,
}

impl DeviceApi {
    pub fn new(config: &Config) -> Result<Self, String> {
        let mut builder = Client::builder();
        if let Some(ms) = config.request_timeout_in_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder
            .build()
            .map_err(|e| format!("Failed to build HTTP client - {e}"))?;

        Ok(DeviceApi {
            client,
            base: config.device_url.clone(),
        })
    }

    pub async fn measurement(&self) -> Result<Measurement, String> {
        self.get_json(DeviceEndpoint::Measurement).await
    }

    pub async fn settings(&self) -> Result<DeviceSettings, String> {
        self.get_json(DeviceEndpoint::Settings).await
    }

    pub async fn update_settings(&self, settings: &DeviceSettings) -> Result<(), String> {
        self.post_json(DeviceEndpoint::Settings, settings).await
    }

    pub async fn info(&self) -> Result<DeviceInfo, String> {
        self.get_json(DeviceEndpoint::Info).await
    }

    pub async fn datetime(&self) -> Result<DeviceDateTime, String> {
        self.get_json(DeviceEndpoint::DateTime).await
    }

    pub async fn set_datetime(&self, datetime: &DeviceDateTime) -> Result<(), String> {
        self.post_json(DeviceEndpoint::DateTime, datetime).await
    }

    pub async fn memory(&self) -> Result<MemoryCard, String> {
        self.get_json(DeviceEndpoint::Memory).await
    }

    pub async fn list_dir(&self) -> Result<Vec<FileEntry>, String> {
        self.get_json(DeviceEndpoint::ListDir).await
    }

    pub async fn delete_file(&self, file_name: &str) -> Result<(), String> {
        let uri = DeviceEndpoint::file_uri(&self.base, file_name);
        let response = self
            .client
            .delete(&uri)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(format!("HTTP-Error: {}", response.status()))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: DeviceEndpoint) -> Result<T, String> {
        self.client
            .get(endpoint.to_uri(&self.base))
            .send()
            .await
            .map_err(|e| e.to_string())?
            .json()
            .await
            .map_err(|e| e.to_string())
    }

    async fn post_json<T: serde::Serialize>(
        &self,
        endpoint: DeviceEndpoint,
        body: &T,
    ) -> Result<(), String> {
        let response = self
            .client
            .post(endpoint.to_uri(&self.base))
            .json(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(format!("HTTP-Error: {}", response.status()))
        }
    }
}

impl MeasurementSource for DeviceApi {
    async fn fetch_measurement(&self) -> Result<Measurement, String> {
        self.measurement().await
    }
}
