use std::{fmt::Display, path::PathBuf};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use chrono_english::parse_date_string;
use clap::{CommandFactory, Parser, ValueEnum};
use tracing::debug;

use crate::{
    analysis::{
        aggregate::{aggregate, DayAggregate},
        filter::filter_by_date,
        insights::{generate_insights, Advice},
    },
    dataset::{csv_source::CsvDatasetSource, Dataset, DatasetSource},
    utils::percentage::Percentage,
};

use super::{
    output::{self, charts::ChartOptions},
    Args,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DateStyle {
    Uk,
    Us,
}

impl From<DateStyle> for chrono_english::Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

#[derive(Debug, Parser)]
pub struct DashboardCommand {
    #[arg(
        help = "Date to inspect. Examples are \"yesterday\", \"28/08/2022\". Defaults to the newest date in the export"
    )]
    date: Option<String>,
    #[arg(long = "data", short, help = "Path to the screen time csv export")]
    data: PathBuf,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
    #[arg(
        short = 'p',
        long = "percentage",
        help = "Hide apps at or below the specified share of the day from charts",
        default_value_t = Percentage::new_opt(0.).unwrap()
    )]
    min_percentage: Percentage,
    #[arg(short = 'n', long = "top", help = "Limit charts to the first n apps")]
    top: Option<usize>,
}

/// Everything one date selection produces. Each invocation recomputes the
/// whole view from the immutable dataset.
struct DayView {
    date: NaiveDate,
    aggregate: DayAggregate,
    advice: Vec<Advice>,
    options: ChartOptions,
}

pub async fn process_show_command(command: DashboardCommand) -> Result<()> {
    let source = CsvDatasetSource::new(command.data.clone());
    let view = prepare_day_view(source, &command).await?;
    print!(
        "{}",
        output::render_dashboard(view.date, &view.aggregate, &view.advice, view.options)
    );
    Ok(())
}

pub async fn process_advise_command(command: DashboardCommand, json: bool) -> Result<()> {
    let source = CsvDatasetSource::new(command.data.clone());
    let view = prepare_day_view(source, &command).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&view.advice)?);
    } else {
        print!("{}", output::render_advice(&view.advice));
    }
    Ok(())
}

pub async fn process_summary_command(command: DashboardCommand, json: bool) -> Result<()> {
    let source = CsvDatasetSource::new(command.data.clone());
    let view = prepare_day_view(source, &command).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&view.aggregate)?);
    } else {
        print!("{}", output::render_summary(view.date, &view.aggregate));
    }
    Ok(())
}

async fn prepare_day_view(source: impl DatasetSource, command: &DashboardCommand) -> Result<DayView> {
    let dataset = source.load().await?;
    let date = resolve_selected_date(&dataset, command.date.as_deref(), command.date_style)?;
    debug!("Selected {date} out of {} rows", dataset.len());

    let subset = filter_by_date(dataset.rows(), date);
    let aggregate = aggregate(&subset);
    let advice = generate_insights(&subset, &aggregate);

    Ok(DayView {
        date,
        aggregate,
        advice,
        options: ChartOptions {
            min_share: command.min_percentage,
            top: command.top,
        },
    })
}

/// An explicit date wins, otherwise the newest date in the export is used.
fn resolve_selected_date(
    dataset: &Dataset,
    requested: Option<&str>,
    date_style: DateStyle,
) -> Result<NaiveDate> {
    match requested {
        Some(expression) => {
            match parse_date_string(expression, Local::now(), date_style.into()) {
                Ok(v) => Ok(v.date_naive()),
                Err(e) => Err(Args::command()
                    .error(
                        clap::error::ErrorKind::ValueValidation,
                        format!("Failed to parse date {expression} {e}"),
                    )
                    .into()),
            }
        }
        None => match dataset.latest_date() {
            Some(latest) => Ok(latest),
            None => Err(Args::command()
                .error(
                    clap::error::ErrorKind::ValueValidation,
                    "The export has no rows, so there is no date to default to",
                )
                .into()),
        },
    }
}
