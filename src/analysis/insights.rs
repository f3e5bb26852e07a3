use serde::Serialize;

use crate::dataset::entities::AppUsageEntity;

use super::aggregate::DayAggregate;

// Advice thresholds. These are policy, not tunables, which is why they don't
// appear anywhere in the cli.
pub const HIGH_DAY_MINUTES: u32 = 300;
pub const MODERATE_DAY_MINUTES: u32 = 180;
pub const FREQUENT_OPENS: u32 = 50;
pub const APP_OVERUSE_MINUTES: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
}

/// A single piece of advice. How and where it gets displayed is up to the
/// caller, the rules only produce these records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub severity: Severity,
    pub text: String,
}

impl Advice {
    fn warning(text: String) -> Self {
        Self {
            severity: Severity::Warning,
            text,
        }
    }
}

/// Evaluates the advice rules against one day of usage. Rule order is part of
/// the contract, the messages are displayed in the order produced here:
/// the day total verdict first, then the most opened app, then per-app
/// interruption warnings, then per-app overuse warnings. Later rules add to
/// the earlier ones, they never replace them.
pub fn generate_insights(subset: &[AppUsageEntity], aggregate: &DayAggregate) -> Vec<Advice> {
    let mut advice = vec![day_total_verdict(aggregate.total_usage)];

    // No rows means nothing to point at. The day verdict above still fired
    // with a zero total.
    if let Some(top) = &aggregate.top_opened {
        advice.push(Advice::warning(format!(
            "You opened {} {} times today. Is it necessary?",
            top.app, top.times_opened
        )));
    }

    for row in subset {
        if row.times_opened > FREQUENT_OPENS {
            advice.push(Advice::warning(format!(
                "{} was opened {} times today. Consider reducing interruptions.",
                row.app, row.times_opened
            )));
        }
    }

    for row in subset {
        if row.usage_minutes > APP_OVERUSE_MINUTES {
            advice.push(Advice::warning(format!(
                "You spent {} min on {}. Try taking breaks.",
                row.usage_minutes, row.app
            )));
        }
    }

    advice
}

/// Exactly one of the three tiers fires for any total.
fn day_total_verdict(total_usage: u32) -> Advice {
    if total_usage > HIGH_DAY_MINUTES {
        Advice {
            severity: Severity::Warning,
            text: format!(
                "High screen time. You spent {total_usage} minutes on your phone today."
            ),
        }
    } else if total_usage > MODERATE_DAY_MINUTES {
        Advice {
            severity: Severity::Info,
            text: format!("Moderate usage ({total_usage} min). Consider taking short breaks."),
        }
    } else {
        Advice {
            severity: Severity::Success,
            text: format!("Low screen time ({total_usage} min). Keep up the balance."),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{day_total_verdict, generate_insights, Severity};
    use crate::{analysis::aggregate::aggregate, dataset::entities::AppUsageEntity};

    const TEST_DATE: NaiveDate = NaiveDate::from_ymd_opt(2022, 8, 28).unwrap();

    fn row(app: &str, usage_minutes: u32, times_opened: u32, notifications: u32) -> AppUsageEntity {
        AppUsageEntity {
            date: TEST_DATE,
            app: app.into(),
            usage_minutes,
            times_opened,
            notifications,
        }
    }

    #[test]
    fn day_verdict_tiers() {
        assert_eq!(day_total_verdict(0).severity, Severity::Success);
        assert_eq!(day_total_verdict(180).severity, Severity::Success);
        assert_eq!(day_total_verdict(181).severity, Severity::Info);
        assert_eq!(day_total_verdict(300).severity, Severity::Info);
        assert_eq!(day_total_verdict(301).severity, Severity::Warning);
    }

    #[test]
    fn empty_day_produces_only_the_success_verdict() {
        let advice = generate_insights(&[], &aggregate(&[]));

        assert_eq!(advice.len(), 1);
        assert_eq!(advice[0].severity, Severity::Success);
        assert!(advice[0].text.contains("0 min"));
    }

    #[test]
    fn heavy_single_app_day() {
        // 350 minutes total but only 10 opens: the day verdict escalates and
        // the overuse rule fires, the interruption rule stays quiet.
        let subset = vec![row("Instagram", 350, 10, 5)];
        let advice = generate_insights(&subset, &aggregate(&subset));

        assert_eq!(advice[0].severity, Severity::Warning);
        assert!(advice[0].text.contains("350"));
        assert!(advice[1].text.starts_with("You opened Instagram"));
        assert_eq!(advice.len(), 3);
        assert!(advice[2].text.contains("350 min on Instagram"));
    }

    #[test]
    fn one_row_can_trigger_both_per_app_rules() {
        let subset = vec![row("Instagram", 70, 60, 5), row("Whatsapp", 20, 5, 0)];
        let advice = generate_insights(&subset, &aggregate(&subset));

        let texts: Vec<&str> = advice.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts.len(), 4);
        assert!(texts[0].starts_with("Low screen time (90 min)"));
        assert!(texts[1].starts_with("You opened Instagram 60 times"));
        assert!(texts[2].contains("Instagram was opened 60 times"));
        assert!(texts[3].contains("70 min on Instagram"));
        assert!(!texts.iter().any(|t| t.contains("Whatsapp")));
    }

    #[test]
    fn per_app_warnings_follow_export_order() {
        let subset = vec![
            row("Safari", 70, 60, 0),
            row("Instagram", 90, 55, 5),
            row("Whatsapp", 80, 10, 0),
        ];
        let advice = generate_insights(&subset, &aggregate(&subset));

        let texts: Vec<&str> = advice.iter().map(|a| a.text.as_str()).collect();
        // All interruption warnings come before any overuse warning, each
        // group in export order.
        assert!(texts[2].contains("Safari was opened"));
        assert!(texts[3].contains("Instagram was opened"));
        assert!(texts[4].contains("70 min on Safari"));
        assert!(texts[5].contains("90 min on Instagram"));
        assert!(texts[6].contains("80 min on Whatsapp"));
    }

    #[test]
    fn insights_are_idempotent() {
        let subset = vec![row("Instagram", 70, 60, 5)];
        let result = aggregate(&subset);
        assert_eq!(
            generate_insights(&subset, &result),
            generate_insights(&subset, &result)
        );
    }
}
