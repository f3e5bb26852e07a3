use chrono::NaiveDate;

use serde::Deserialize;
use serde::Serialize;

use std::sync::Arc;

/// One row of the screen time export: what a single app did on a single day.
/// Field renames bind the exact column headers the export uses. An app usually
/// appears once per date, but nothing guarantees that, so consumers must group
/// rather than assume uniqueness.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone)]
pub struct AppUsageEntity {
    #[serde(rename = "Date", with = "date_ser")]
    pub date: NaiveDate,
    #[serde(rename = "App")]
    pub app: Arc<str>,
    #[serde(rename = "Usage")]
    pub usage_minutes: u32,
    #[serde(rename = "Times opened")]
    pub times_opened: u32,
    #[serde(rename = "Notifications")]
    pub notifications: u32,
}

mod date_ser {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    // Exports in the wild disagree on the date column. First matching format
    // wins, so iso dates can never be mistaken for day-first ones.
    const KNOWN_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"];

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        KNOWN_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(s.trim(), format).ok())
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized date \"{s}\"")))
    }
}
