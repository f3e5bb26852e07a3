pub mod csv_source;
pub mod entities;

use std::{future::Future, ops::Deref};

use anyhow::Result;
use chrono::NaiveDate;

use entities::AppUsageEntity;

/// Interface for abstracting where the dataset comes from.
pub trait DatasetSource {
    /// Reads the whole export into memory. Called once per invocation, the
    /// returned dataset is never reloaded or mutated afterwards.
    fn load(&self) -> impl Future<Output = Result<Dataset>> + Send;
}

impl<T: Deref> DatasetSource for T
where
    T::Target: DatasetSource,
{
    fn load(&self) -> impl Future<Output = Result<Dataset>> + Send {
        self.deref().load()
    }
}

/// The loaded screen time log. Read-only handle, all queries return views or
/// copies of the rows.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<AppUsageEntity>,
}

impl Dataset {
    pub fn new(rows: Vec<AppUsageEntity>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[AppUsageEntity] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The newest date present in the export. Used as the default selection
    /// when the user doesn't pick a date.
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.rows.iter().map(|row| row.date).max()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::Dataset;
    use crate::dataset::entities::AppUsageEntity;

    fn row(date: (i32, u32, u32), app: &str) -> AppUsageEntity {
        AppUsageEntity {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            app: app.into(),
            usage_minutes: 30,
            times_opened: 10,
            notifications: 5,
        }
    }

    #[test]
    fn latest_date_picks_maximum() {
        let dataset = Dataset::new(vec![
            row((2022, 8, 26), "Instagram"),
            row((2022, 8, 28), "Whatsapp"),
            row((2022, 8, 27), "Safari"),
        ]);
        assert_eq!(dataset.latest_date(), NaiveDate::from_ymd_opt(2022, 8, 28));
    }

    #[test]
    fn latest_date_is_none_for_empty_export() {
        assert_eq!(Dataset::new(vec![]).latest_date(), None);
    }
}
