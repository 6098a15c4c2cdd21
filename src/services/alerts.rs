//! Alert generation
//!
//! Combines aggregation, budget lookup and ratio classification into the
//! ordered alert list shown to the user: the overall-budget alert first (if
//! any), then one alert per category in first-occurrence order, skipping
//! categories that are comfortably within budget.
//!
//! Message text is matched on downstream, so the wording, the `₹` glyph and
//! the decimal places are fixed.

use crate::models::{Alert, Budget, Expense, Money, Severity, RUPEE};

use super::aggregation::{aggregate, Aggregation};
use super::budget_index::{lookup_budget, total_budget};
use super::classifier::{classify, Classification, Tier};

/// Everything derived from one expense list and one budget list
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingAnalysis {
    pub aggregation: Aggregation,
    pub total_budget: Money,
    pub alerts: Vec<Alert>,
}

impl SpendingAnalysis {
    /// Run the full analysis
    pub fn new(expenses: &[Expense], budgets: &[Budget]) -> Self {
        let aggregation = aggregate(expenses);
        let total_budget = total_budget(budgets);

        let mut alerts = Vec::new();
        alerts.extend(overall_alert(aggregation.overall_total, total_budget));
        for entry in &aggregation.per_category {
            alerts.extend(category_alert(&entry.category, entry.amount, budgets));
        }

        log::debug!(
            "{} expenses, {} budgets -> {} alerts (spent {}, budgeted {})",
            expenses.len(),
            budgets.len(),
            alerts.len(),
            aggregation.overall_total,
            total_budget
        );

        Self {
            aggregation,
            total_budget,
            alerts,
        }
    }

    pub fn overall_total(&self) -> Money {
        self.aggregation.overall_total
    }
}

/// Generate the ordered alert list for the given records
pub fn generate_alerts(expenses: &[Expense], budgets: &[Budget]) -> Vec<Alert> {
    SpendingAnalysis::new(expenses, budgets).alerts
}

/// The overall alert. The total budget is always present here (possibly
/// zero), and the danger wording is the same whether or not the total
/// budget has actually been exceeded.
fn overall_alert(overall_total: Money, total_budget: Money) -> Option<Alert> {
    let Classification::Tiered { ratio, tier, .. } = classify(overall_total, Some(total_budget))
    else {
        return None;
    };

    match tier {
        Tier::Danger => Some(Alert::overall(
            Severity::Danger,
            format!(
                "Overall expenses ({}) have exceeded 90% of total budget ({})",
                rupees(overall_total),
                rupees(total_budget)
            ),
        )),
        Tier::Warning => Some(Alert::overall(
            Severity::Warning,
            format!(
                "Overall expenses ({}) have reached {}% of total budget",
                rupees(overall_total),
                percent(ratio)
            ),
        )),
        Tier::None => None,
    }
}

fn category_alert(category: &str, spent: Money, budgets: &[Budget]) -> Option<Alert> {
    match classify(spent, lookup_budget(budgets, category)) {
        Classification::NoBudget => Some(Alert::for_category(
            Severity::Warning,
            category,
            format!(
                "No budget set for {} (Current expenses: {})",
                category,
                rupees(spent)
            ),
        )),
        Classification::Tiered {
            over_budget_by: Some(over_by),
            ..
        } => Some(Alert::for_category(
            Severity::Danger,
            category,
            format!(
                "{} expenses ({}) have exceeded budget by {}",
                category,
                rupees(spent),
                rupees(over_by)
            ),
        )),
        Classification::Tiered { ratio, tier, .. } => {
            let severity = tier.severity()?;
            Some(Alert::for_category(
                severity,
                category,
                format!(
                    "{} expenses ({}) have reached {}% of budget",
                    category,
                    rupees(spent),
                    percent(ratio)
                ),
            ))
        }
    }
}

/// `₹` followed by the amount with two decimals
fn rupees(amount: Money) -> String {
    format!("{}{}", RUPEE, amount.to_decimal_string())
}

/// `ratio * 100` with one decimal.
///
/// Rounds the exact binary value of the product, so `75.05` (stored as
/// `75.04999...`) prints as `75.0`. A value sitting exactly halfway between
/// two tenths can only end in `.25` or `.75`; those round away from zero,
/// where `{:.1}` alone would round to even.
fn percent(ratio: f64) -> String {
    let value = ratio * 100.0;
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(category: &str, major: i64) -> Expense {
        Expense::new(
            category,
            Money::from_major(major),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        )
    }

    fn budget(category: &str, major: i64) -> Budget {
        Budget::new(category, Money::from_major(major))
    }

    #[test]
    fn test_empty_inputs() {
        assert!(generate_alerts(&[], &[]).is_empty());
    }

    #[test]
    fn test_budgets_without_expenses() {
        assert!(generate_alerts(&[], &[budget("Food", 1000)]).is_empty());
    }

    #[test]
    fn test_approaching_category_limit() {
        let alerts = generate_alerts(&[expense("Food", 950)], &[budget("Food", 1000)]);

        assert_eq!(
            alerts,
            vec![
                Alert::overall(
                    Severity::Danger,
                    "Overall expenses (₹950.00) have exceeded 90% of total budget (₹1000.00)"
                ),
                Alert::for_category(
                    Severity::Danger,
                    "Food",
                    "Food expenses (₹950.00) have reached 95.0% of budget"
                ),
            ]
        );
    }

    #[test]
    fn test_zero_total_budget_always_exceeded() {
        let alerts = generate_alerts(&[expense("Transportation", 500)], &[]);

        assert_eq!(
            alerts,
            vec![
                Alert::overall(
                    Severity::Danger,
                    "Overall expenses (₹500.00) have exceeded 90% of total budget (₹0.00)"
                ),
                Alert::for_category(
                    Severity::Warning,
                    "Transportation",
                    "No budget set for Transportation (Current expenses: ₹500.00)"
                ),
            ]
        );
    }

    #[test]
    fn test_category_over_budget() {
        let alerts = generate_alerts(&[expense("Housing", 1200)], &[budget("Housing", 1000)]);

        let category_alert = alerts.last().unwrap();
        assert_eq!(category_alert.severity, Severity::Danger);
        assert_eq!(category_alert.category.as_deref(), Some("Housing"));
        assert_eq!(
            category_alert.message,
            "Housing expenses (₹1200.00) have exceeded budget by ₹200.00"
        );

        // The overall alert keeps its fixed wording even when over budget
        assert_eq!(
            alerts[0].message,
            "Overall expenses (₹1200.00) have exceeded 90% of total budget (₹1000.00)"
        );
    }

    #[test]
    fn test_overall_warning() {
        let alerts = generate_alerts(
            &[expense("Food", 400), expense("Housing", 400)],
            &[budget("Food", 500), budget("Housing", 500)],
        );

        assert_eq!(
            alerts,
            vec![
                Alert::overall(
                    Severity::Warning,
                    "Overall expenses (₹800.00) have reached 80.0% of total budget"
                ),
                Alert::for_category(
                    Severity::Warning,
                    "Food",
                    "Food expenses (₹400.00) have reached 80.0% of budget"
                ),
                Alert::for_category(
                    Severity::Warning,
                    "Housing",
                    "Housing expenses (₹400.00) have reached 80.0% of budget"
                ),
            ]
        );
    }

    #[test]
    fn test_exact_threshold_emits_nothing() {
        assert!(generate_alerts(&[expense("Food", 75)], &[budget("Food", 100)]).is_empty());
    }

    #[test]
    fn test_exact_limit_is_danger_without_over_by() {
        let alerts = generate_alerts(&[expense("Food", 100)], &[budget("Food", 100)]);
        assert_eq!(
            alerts[1].message,
            "Food expenses (₹100.00) have reached 100.0% of budget"
        );
        assert_eq!(alerts[1].severity, Severity::Danger);
    }

    #[test]
    fn test_zero_category_budget() {
        let alerts = generate_alerts(
            &[expense("Food", 50)],
            &[budget("Food", 0), budget("Housing", 10000)],
        );

        assert_eq!(alerts.len(), 1);
        assert_eq!(
            alerts[0].message,
            "Food expenses (₹50.00) have exceeded budget by ₹50.00"
        );
    }

    #[test]
    fn test_overall_alert_precedes_categories_in_first_occurrence_order() {
        let expenses = vec![
            expense("Other", 10),
            expense("Food", 990),
            expense("Other", 10),
            expense("Housing", 900),
        ];
        let budgets = vec![budget("Housing", 1000), budget("Food", 1000)];

        let alerts = generate_alerts(&expenses, &budgets);
        let categories: Vec<Option<&str>> =
            alerts.iter().map(|a| a.category.as_deref()).collect();
        assert_eq!(
            categories,
            vec![None, Some("Other"), Some("Food"), Some("Housing")]
        );
        // Housing sits at exactly 90%: warning, not danger
        assert_eq!(alerts[3].severity, Severity::Warning);
        assert_eq!(
            alerts[3].message,
            "Housing expenses (₹900.00) have reached 90.0% of budget"
        );
    }

    #[test]
    fn test_duplicate_budget_first_wins() {
        let alerts = generate_alerts(
            &[expense("Food", 80)],
            &[budget("Food", 100), budget("Food", 10000)],
        );
        let food = alerts.iter().find(|a| a.category.is_some()).unwrap();
        assert_eq!(food.message, "Food expenses (₹80.00) have reached 80.0% of budget");
    }

    #[test]
    fn test_permuting_budgets_does_not_change_alerts() {
        let expenses = vec![
            expense("Food", 950),
            expense("Housing", 1200),
            expense("Utilities", 10),
        ];
        let budgets = vec![
            budget("Food", 1000),
            budget("Housing", 1000),
            budget("Utilities", 2000),
        ];
        let mut reversed = budgets.clone();
        reversed.reverse();

        assert_eq!(
            generate_alerts(&expenses, &budgets),
            generate_alerts(&expenses, &reversed)
        );
    }

    #[test]
    fn test_permuting_expenses_tracks_first_occurrence() {
        let expenses = vec![expense("Food", 950), expense("Housing", 1200)];
        let budgets = vec![budget("Food", 1000), budget("Housing", 1000)];
        let mut reversed = expenses.clone();
        reversed.reverse();

        let forward = generate_alerts(&expenses, &budgets);
        let backward = generate_alerts(&reversed, &budgets);

        assert_eq!(forward[0], backward[0]);
        assert_eq!(forward[1], backward[2]);
        assert_eq!(forward[2], backward[1]);
    }

    #[test]
    fn test_idempotent() {
        let expenses = vec![expense("Food", 950), expense("Other", 5)];
        let budgets = vec![budget("Food", 1000)];
        assert_eq!(
            SpendingAnalysis::new(&expenses, &budgets),
            SpendingAnalysis::new(&expenses, &budgets)
        );
    }

    #[test]
    fn test_negative_amounts_in_messages() {
        let alerts = generate_alerts(&[expense("Refunds", -5)], &[]);
        assert_eq!(
            alerts,
            vec![Alert::for_category(
                Severity::Warning,
                "Refunds",
                "No budget set for Refunds (Current expenses: ₹-5.00)"
            )]
        );
    }

    #[test]
    fn test_analysis_totals() {
        let analysis = SpendingAnalysis::new(
            &[expense("Food", 300), expense("Housing", 700)],
            &[budget("Food", 500), budget("Housing", 1500)],
        );
        assert_eq!(analysis.overall_total(), Money::from_major(1000));
        assert_eq!(analysis.total_budget, Money::from_major(2000));
        assert_eq!(analysis.aggregation.per_category.len(), 2);
        assert!(analysis.alerts.is_empty());
    }

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent(0.95), "95.0");
        assert_eq!(percent(0.8), "80.0");
        assert_eq!(percent(0.76543), "76.5");
        assert_eq!(percent(2.0 / 3.0), "66.7");

        // Binary value sits just below the written half
        assert_eq!(percent(7505.0 / 10000.0), "75.0");
        assert_eq!(percent(7655.0 / 10000.0), "76.5");

        // Exact halves go up
        assert_eq!(percent(0.8125), "81.3");
        assert_eq!(percent(0.8175), "81.8");
        assert_eq!(percent(0.0025), "0.3");
    }

    #[test]
    fn test_category_percent_uses_binary_value() {
        let budgets = vec![budget("Food", 100)];

        let alerts = generate_alerts(
            &[Expense::new(
                "Food",
                Money::from_cents(7505),
                NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            )],
            &budgets,
        );
        assert_eq!(
            alerts.last().unwrap().message,
            "Food expenses (₹75.05) have reached 75.0% of budget"
        );

        let alerts = generate_alerts(
            &[Expense::new(
                "Food",
                Money::from_cents(7655),
                NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            )],
            &budgets,
        );
        assert_eq!(
            alerts.last().unwrap().message,
            "Food expenses (₹76.55) have reached 76.5% of budget"
        );

        let alerts = generate_alerts(&[expense("Food", 950)], &[budget("Food", 1000)]);
        assert_eq!(
            alerts.last().unwrap().message,
            "Food expenses (₹950.00) have reached 95.0% of budget"
        );
    }

    #[test]
    fn test_huge_totals_saturate() {
        let huge = Money::from_cents(5_000_000_000_000_000_000);
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let expenses = vec![
            Expense::new("Food", huge, date),
            Expense::new("Food", huge, date),
        ];

        let analysis = SpendingAnalysis::new(&expenses, &[budget("Food", 1000)]);
        assert_eq!(analysis.overall_total(), Money::from_cents(i64::MAX));
        assert_eq!(analysis.alerts.len(), 2);
        assert_eq!(analysis.alerts[0].severity, Severity::Danger);
        assert!(analysis.alerts[1].message.contains("have exceeded budget by"));
    }
}
