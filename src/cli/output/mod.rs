pub mod charts;

use std::fmt::Write;

use ansi_term::{Colour, Style};
use chrono::NaiveDate;

use crate::{
    analysis::{
        aggregate::DayAggregate,
        insights::{Advice, Severity},
    },
    utils::percentage::minutes_share,
};

use charts::{format_minutes, ChartOptions};

/// The full dashboard: every chart section plus the advice, assembled into a
/// single string so the caller decides where it goes.
pub fn render_dashboard(
    selected: NaiveDate,
    aggregate: &DayAggregate,
    advice: &[Advice],
    options: ChartOptions,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        Style::new().bold().paint(format!("Screen time for {selected}"))
    );
    out.push('\n');

    if aggregate.ranked_by_opens.is_empty() {
        out.push_str("No usage recorded for this date.\n\n");
    } else {
        push_section(
            &mut out,
            "Usage share by app",
            charts::usage_share_section(aggregate, options),
        );
        push_section(
            &mut out,
            "Top apps by usage",
            charts::top_usage_section(aggregate, options),
        );
        push_section(
            &mut out,
            "Most frequently opened",
            charts::most_opened_section(aggregate, options),
        );
        push_section(
            &mut out,
            "Opened against minutes spent",
            charts::opens_vs_usage_section(aggregate, options),
        );
    }

    push_section(&mut out, "Advice", render_advice(advice));
    out
}

/// Day totals in the same tab separated shape the charts use, one app per
/// line. Intended to stay grep friendly.
pub fn render_summary(selected: NaiveDate, aggregate: &DayAggregate) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{selected}\t{} apps\t{}\t{} notifications",
        aggregate.usage_by_app.len(),
        format_minutes(aggregate.total_usage),
        aggregate.total_notifications
    );

    for (app, minutes) in charts::ranked_app_minutes(aggregate, ChartOptions::default()) {
        let share = minutes_share(minutes, aggregate.total_usage);
        let _ = writeln!(out, "{}\t{}%\t{}", format_minutes(minutes), *share as i32, app);
    }
    out
}

pub fn render_advice(advice: &[Advice]) -> String {
    let mut out = String::new();
    for item in advice {
        let _ = writeln!(out, "{}", severity_colour(item.severity).paint(item.text.as_str()));
    }
    out
}

fn severity_colour(severity: Severity) -> Colour {
    match severity {
        Severity::Warning => Colour::Yellow,
        Severity::Info => Colour::Cyan,
        Severity::Success => Colour::Green,
    }
}

fn push_section(out: &mut String, title: &str, body: String) {
    if body.is_empty() {
        return;
    }
    let _ = writeln!(out, "{}", Style::new().bold().paint(title));
    out.push_str(&body);
    out.push('\n');
}
