use serde::de::{Error, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Formatter;

/// `GET /info` - firmware version plus board health figures.
///
/// The firmware formats `coincell` with snprintf and ships it as a JSON
/// string while `temperature` arrives as a number, so both fields accept
/// either representation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeviceInfo {
    pub version: String,
    /// backup battery voltage in V
    #[serde(deserialize_with = "lenient_f64")]
    pub coincell: f64,
    /// board temperature in degrees C
    #[serde(deserialize_with = "lenient_f64")]
    pub temperature: f64,
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientF64;

    impl Visitor<'_> for LenientF64 {
        type Value = f64;

        fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
            formatter.write_str("a number or a numeric string")
        }

        fn visit_f64<E: Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: Error>(self, v: &str) -> Result<f64, E> {
            v.trim().parse().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(LenientF64)
}
