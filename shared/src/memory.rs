use serde::de::{Error, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Formatter;

/// `GET /memory` - SD card state.
///
/// The firmware prints the byte counters with snprintf into JSON strings
/// ("totalmem": "31166976"), so the counters accept both strings and plain
/// numbers. Values are kilobytes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MemoryCard {
    pub present: bool,
    pub cardtype: String,
    #[serde(deserialize_with = "lenient_u64")]
    pub totalmem: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub freemem: u64,
}

/// used/free split of a mounted card, feeds the usage display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskUsage {
    pub used_kb: u64,
    pub total_kb: u64,
}

impl From<&MemoryCard> for DiskUsage {
    fn from(card: &MemoryCard) -> Self {
        DiskUsage {
            used_kb: card.totalmem.saturating_sub(card.freemem),
            total_kb: card.totalmem,
        }
    }
}

impl DiskUsage {
    pub fn percent_used(&self) -> f64 {
        if self.total_kb == 0 {
            return 0.0;
        }
        self.used_kb as f64 / self.total_kb as f64 * 100.0
    }

    pub fn format_total(&self) -> String {
        format_kb(self.total_kb)
    }

    pub fn format_used(&self) -> String {
        format!("{} ({:.1}%)", format_kb(self.used_kb), self.percent_used())
    }
}

/// kilobytes rendered as "x.xx MB", flipping to GB above 1024 MB
pub fn format_kb(kb: u64) -> String {
    let mb = kb as f64 / 1024.0;
    if mb > 1024.0 {
        format!("{:.2} GB", mb / 1024.0)
    } else {
        format!("{mb:.2} MB")
    }
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientU64;

    impl Visitor<'_> for LenientU64 {
        type Value = u64;

        fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
            formatter.write_str("an unsigned integer or a numeric string")
        }

        fn visit_u64<E: Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: Error>(self, v: i64) -> Result<u64, E> {
            u64::try_from(v).map_err(E::custom)
        }

        fn visit_str<E: Error>(self, v: &str) -> Result<u64, E> {
            v.trim().parse().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(LenientU64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_stringly_counters() {
        let json = r#"{
            "present": true,
            "cardtype": "SDHC",
            "totalmem": "31166976",
            "freemem": "30543872"
        }"#;
        let card: MemoryCard = serde_json::from_str(json).unwrap();

        assert!(card.present);
        assert_eq!("SDHC", card.cardtype);
        assert_eq!(31_166_976, card.totalmem);
        assert_eq!(30_543_872, card.freemem);
    }

    #[test]
    fn should_deserialize_numeric_counters() {
        let json = r#"{ "present": false, "cardtype": "not found", "totalmem": 0, "freemem": 0 }"#;
        let card: MemoryCard = serde_json::from_str(json).unwrap();

        assert!(!card.present);
        assert_eq!(0, card.totalmem);
    }

    #[test]
    fn should_compute_usage_split() {
        let card = MemoryCard {
            present: true,
            cardtype: "SDHC".to_string(),
            totalmem: 1000,
            freemem: 250,
        };
        let usage = DiskUsage::from(&card);

        assert_eq!(750, usage.used_kb);
        assert_eq!(1000, usage.total_kb);
        assert_eq!(75.0, usage.percent_used());
    }

    #[test]
    fn should_not_underflow_when_free_exceeds_total() {
        let card = MemoryCard {
            present: true,
            cardtype: "SDHC".to_string(),
            totalmem: 100,
            freemem: 200,
        };
        let usage = DiskUsage::from(&card);

        assert_eq!(0, usage.used_kb);
    }

    #[test]
    fn should_report_zero_percent_for_empty_card_info() {
        let usage = DiskUsage {
            used_kb: 0,
            total_kb: 0,
        };

        assert_eq!(0.0, usage.percent_used());
    }

    #[test]
    fn should_format_megabytes() {
        assert_eq!("500.00 MB", format_kb(512_000));
    }

    #[test]
    fn should_format_gigabytes_above_threshold() {
        assert_eq!("2.00 GB", format_kb(2 * 1024 * 1024));
    }

    #[test]
    fn should_format_usage_with_percent() {
        let usage = DiskUsage {
            used_kb: 512_000,
            total_kb: 1_024_000,
        };

        assert_eq!("500.00 MB (50.0%)", usage.format_used());
    }
}
