use chrono::NaiveDate;

use crate::dataset::entities::AppUsageEntity;

/// Rows recorded on the selected day, in the order the export lists them.
/// An empty result means there is no data for that day, which is a normal
/// outcome for a tracker that wasn't running.
pub fn filter_by_date(rows: &[AppUsageEntity], selected: NaiveDate) -> Vec<AppUsageEntity> {
    rows.iter()
        .filter(|row| row.date == selected)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::filter_by_date;
    use crate::dataset::entities::AppUsageEntity;

    const SELECTED: NaiveDate = NaiveDate::from_ymd_opt(2022, 8, 28).unwrap();
    const OTHER: NaiveDate = NaiveDate::from_ymd_opt(2022, 8, 27).unwrap();

    fn row(date: NaiveDate, app: &str) -> AppUsageEntity {
        AppUsageEntity {
            date,
            app: app.into(),
            usage_minutes: 10,
            times_opened: 3,
            notifications: 1,
        }
    }

    #[test]
    fn keeps_only_matching_rows_in_order() {
        let rows = vec![
            row(SELECTED, "Instagram"),
            row(OTHER, "Whatsapp"),
            row(SELECTED, "Safari"),
            row(SELECTED, "Instagram"),
        ];

        let subset = filter_by_date(&rows, SELECTED);
        let apps: Vec<&str> = subset.iter().map(|r| &*r.app).collect();
        assert_eq!(apps, vec!["Instagram", "Safari", "Instagram"]);
    }

    #[test]
    fn no_matches_is_an_empty_subset() {
        let rows = vec![row(OTHER, "Instagram")];
        assert!(filter_by_date(&rows, SELECTED).is_empty());
    }

    #[test]
    fn input_is_left_untouched() {
        let rows = vec![row(SELECTED, "Instagram"), row(OTHER, "Whatsapp")];
        let before = rows.clone();
        let _ = filter_by_date(&rows, SELECTED);
        let _ = filter_by_date(&rows, OTHER);
        assert_eq!(rows, before);
    }
}
