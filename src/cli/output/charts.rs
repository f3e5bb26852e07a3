use std::{fmt::Write, sync::Arc};

use crate::{
    analysis::aggregate::DayAggregate,
    utils::percentage::{minutes_share, Percentage},
};

const BAR_WIDTH: usize = 30;

/// Display options shared by the chart sections.
#[derive(Debug, Clone, Copy)]
pub struct ChartOptions {
    /// Apps at or below this share of the day are hidden from the charts.
    pub min_share: Percentage,
    /// Show only the first n apps of each section.
    pub top: Option<usize>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            min_share: Percentage::new_opt(0.).unwrap(),
            top: None,
        }
    }
}

/// Apps with their summed minutes, biggest first. Equal apps sort by name so
/// the output doesn't depend on map iteration order.
pub(super) fn ranked_app_minutes(
    aggregate: &DayAggregate,
    options: ChartOptions,
) -> Vec<(Arc<str>, u32)> {
    let mut entries: Vec<(Arc<str>, u32)> = aggregate
        .usage_by_app
        .iter()
        .map(|(app, minutes)| (app.clone(), *minutes))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.retain(|(_, minutes)| {
        *minutes_share(*minutes, aggregate.total_usage) > *options.min_share
    });
    if let Some(top) = options.top {
        entries.truncate(top);
    }
    entries
}

/// How the day splits between apps. The terminal stand-in for a pie chart,
/// every bar is scaled to the app's share of the whole day.
pub fn usage_share_section(aggregate: &DayAggregate, options: ChartOptions) -> String {
    let entries = ranked_app_minutes(aggregate, options);
    let name_width = entries.iter().map(|(app, _)| app.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (app, minutes) in entries {
        let share = minutes_share(minutes, aggregate.total_usage);
        let filled = ((*share / 100. * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
        let _ = writeln!(
            out,
            "{:>width$}  {} {:>5.1}%",
            app,
            bar(filled),
            *share,
            width = name_width
        );
    }
    out
}

/// Minutes per app, scaled against the day's biggest app.
pub fn top_usage_section(aggregate: &DayAggregate, options: ChartOptions) -> String {
    let entries = ranked_app_minutes(aggregate, options);
    let Some(max_minutes) = entries.first().map(|(_, minutes)| *minutes) else {
        return String::new();
    };
    let name_width = entries.iter().map(|(app, _)| app.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (app, minutes) in entries {
        let filled =
            ((minutes as f64 / max_minutes as f64 * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
        let _ = writeln!(
            out,
            "{:>width$}  {} {:>6}",
            app,
            bar(filled),
            format_minutes(minutes),
            width = name_width
        );
    }
    out
}

/// One line per row, most opened first.
pub fn most_opened_section(aggregate: &DayAggregate, options: ChartOptions) -> String {
    let limit = options.top.unwrap_or(aggregate.ranked_by_opens.len());

    let mut out = String::new();
    for row in aggregate.ranked_by_opens.iter().take(limit) {
        let _ = writeln!(out, "{} was opened {} times.", row.app, row.times_opened);
    }
    out
}

/// Open count against minutes spent, per app. Stands in for the scatter plot
/// that answers whether opening an app more means using it longer.
pub fn opens_vs_usage_section(aggregate: &DayAggregate, options: ChartOptions) -> String {
    let limit = options.top.unwrap_or(aggregate.ranked_by_opens.len());

    let mut out = String::new();
    let _ = writeln!(out, "{:>6}  {:>7}  app", "opened", "minutes");
    for row in aggregate.ranked_by_opens.iter().take(limit) {
        let _ = writeln!(
            out,
            "{:>6}  {:>7}  {}",
            row.times_opened, row.usage_minutes, row.app
        );
    }
    out
}

pub fn format_minutes(minutes: u32) -> String {
    if minutes >= 60 {
        format!("{}h{}m", minutes / 60, minutes % 60)
    } else {
        format!("{}m", minutes)
    }
}

fn bar(filled: usize) -> String {
    "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled)
}
