use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// timestamp format of `GET /listdir` entries
pub const FILE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// one stored log file on the SD card
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FileEntry {
    pub name: String,
    /// last write, eg. "2020-03-01T13:37:05"
    pub date: String,
    /// bytes
    pub size: u64,
}

impl FileEntry {
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.date, FILE_DATE_FORMAT).ok()
    }

    pub fn display_date(&self) -> String {
        self.date.replace('T', " ")
    }

    /// bytes rendered as "x.xx MB", flipping to GB above 1024 MB
    pub fn display_size(&self) -> String {
        let mb = self.size as f64 / (1024.0 * 1024.0);
        if mb > 1024.0 {
            format!("{:.2} GB", mb / 1024.0)
        } else {
            format!("{mb:.2} MB")
        }
    }
}

/// listing order of the storage view, entries with unparseable dates sink to the end
pub fn sort_newest_first(entries: &mut [FileEntry]) {
    entries.sort_by(|a, b| match (a.parsed_date(), b.parsed_date()) {
        (Some(a_date), Some(b_date)) => b_date.cmp(&a_date),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.name.cmp(&b.name),
    });
}
