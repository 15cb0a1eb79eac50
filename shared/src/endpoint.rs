pub enum DeviceEndpoint {
    Measurement,
    Settings,
    Info,
    DateTime,
    Memory,
    ListDir,
    /// stored log files, DELETE to remove / GET to download
    File,
}

impl DeviceEndpoint {
    pub fn to_uri(&self, base: &str) -> String {
        format!("{base}{}", self.to_str())
    }

    pub fn to_str(&self) -> &str {
        match self {
            DeviceEndpoint::Measurement => "/measurement",
            DeviceEndpoint::Settings => "/settings.json",
            DeviceEndpoint::Info => "/info",
            DeviceEndpoint::DateTime => "/datetime",
            DeviceEndpoint::Memory => "/memory",
            DeviceEndpoint::ListDir => "/listdir",
            DeviceEndpoint::File => "/sdcard/{name}",
        }
    }

    /// resolves the `{name}` placeholder of [`DeviceEndpoint::File`]
    pub fn file_uri(base: &str, file_name: &str) -> String {
        DeviceEndpoint::File
            .to_uri(base)
            .replace("{name}", file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DeviceEndpoint::*;

    const ALL_ENDPOINTS: [DeviceEndpoint; 7] =
        [Measurement, Settings, Info, DateTime, Memory, ListDir, File];

    #[test]
    fn should_build_uris() {
        ALL_ENDPOINTS.into_iter().for_each(|endpoint| {
            let actual = endpoint.to_uri("http://192.168.4.1");
            match endpoint {
                Measurement => assert_eq!("http://192.168.4.1/measurement", actual),
                Settings => assert_eq!("http://192.168.4.1/settings.json", actual),
                Info => assert_eq!("http://192.168.4.1/info", actual),
                DateTime => assert_eq!("http://192.168.4.1/datetime", actual),
                Memory => assert_eq!("http://192.168.4.1/memory", actual),
                ListDir => assert_eq!("http://192.168.4.1/listdir", actual),
                File => assert_eq!("http://192.168.4.1/sdcard/{name}", actual),
            }
        })
    }

    #[test]
    fn should_resolve_file_uri() {
        assert_eq!(
            "http://192.168.4.1/sdcard/LOG_0042.CSV",
            DeviceEndpoint::file_uri("http://192.168.4.1", "LOG_0042.CSV")
        );
    }
}
