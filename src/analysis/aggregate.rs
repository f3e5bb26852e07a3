use std::{collections::HashMap, sync::Arc};

use serde::Serialize;

use crate::dataset::entities::AppUsageEntity;

/// Summary statistics for one day of usage. Everything the charts and the
/// advice rules need is derived here in a single pass over the subset.
#[derive(Debug, Clone, Serialize)]
pub struct DayAggregate {
    /// Minutes per app. Apps can appear in several rows for one day, the map
    /// carries the sum.
    pub usage_by_app: HashMap<Arc<str>, u32>,
    /// The subset ordered by open count, most opened first. The sort is
    /// stable, rows with equal counts keep their export order.
    pub ranked_by_opens: Vec<AppUsageEntity>,
    pub total_usage: u32,
    pub total_notifications: u32,
    /// The single most opened row. `None` when the day has no data, ties go
    /// to the earlier row.
    pub top_opened: Option<AppUsageEntity>,
}

pub fn aggregate(subset: &[AppUsageEntity]) -> DayAggregate {
    let mut usage_by_app = HashMap::<Arc<str>, u32>::new();
    let mut total_usage = 0u32;
    let mut total_notifications = 0u32;

    for row in subset {
        *usage_by_app.entry(row.app.clone()).or_insert(0) += row.usage_minutes;
        total_usage += row.usage_minutes;
        total_notifications += row.notifications;
    }

    let mut ranked_by_opens = subset.to_vec();
    ranked_by_opens.sort_by(|a, b| b.times_opened.cmp(&a.times_opened));
    let top_opened = ranked_by_opens.first().cloned();

    DayAggregate {
        usage_by_app,
        ranked_by_opens,
        total_usage,
        total_notifications,
        top_opened,
    }
}
