//! Budget evaluation
//!
//! Turns a raw [`BudgetRecord`] into totals, a balance and a list of
//! rule-of-thumb advisories. Evaluation is pure: no I/O, no shared state.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;
use crate::models::{Budget, BudgetField, BudgetRecord, Expenses, Money, MoneyParseError};

/// Largest amount accepted for a single field (10^27)
///
/// Eight such expenses still sum, and subtract from income, without leaving
/// the range of `Decimal`.
pub fn max_amount() -> Money {
    Money::from_decimal(Decimal::from_i128_with_scale(
        1_000_000_000_000_000_000_000_000_000,
        0,
    ))
}

/// Share-of-income limits, in basis points (1/100 of a percent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryThresholds {
    /// Rent above this share of income triggers an advisory
    #[serde(default = "default_rent_bps")]
    pub rent_bps: u32,
    /// Food above this share of income triggers an advisory
    #[serde(default = "default_food_bps")]
    pub food_bps: u32,
}

fn default_rent_bps() -> u32 {
    3000
}

fn default_food_bps() -> u32 {
    1500
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        Self {
            rent_bps: default_rent_bps(),
            food_bps: default_food_bps(),
        }
    }
}

/// A budgeting suggestion triggered by a threshold rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// Rent is more than `limit_bps` of income
    RentTooHigh { limit_bps: u32 },
    /// Food is more than `limit_bps` of income
    FoodTooHigh { limit_bps: u32 },
    /// Expenses exceed income
    Deficit,
}

impl Advisory {
    /// The suggestion shown to the user
    pub fn message(&self) -> String {
        match self {
            Self::RentTooHigh { limit_bps } => format!(
                "Consider reducing rent expenses (should be less than {}% of income).",
                format_bps(*limit_bps)
            ),
            Self::FoodTooHigh { limit_bps } => format!(
                "Consider reducing food expenses (should be less than {}% of income).",
                format_bps(*limit_bps)
            ),
            Self::Deficit => {
                "You are in deficit! Try to cut down on non-essential expenses.".to_string()
            }
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

fn format_bps(bps: u32) -> String {
    format!("{}", f64::from(bps) / 100.0)
}

/// Totals, balance and advisories for a valid budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSummary {
    pub total_expenses: Money,
    pub balance: Money,
    pub advisories: Vec<Advisory>,
}

impl BudgetSummary {
    /// Whether expenses exceed income
    pub fn is_deficit(&self) -> bool {
        self.balance.is_negative()
    }
}

/// How an evaluated budget is presented
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Balance is zero or positive
    Surplus(BudgetSummary),
    /// Balance is negative
    Deficit(BudgetSummary),
}

impl Outcome {
    /// Classify a summary by the sign of its balance
    pub fn from_summary(summary: BudgetSummary) -> Self {
        if summary.is_deficit() {
            Self::Deficit(summary)
        } else {
            Self::Surplus(summary)
        }
    }

    /// The underlying summary
    pub fn summary(&self) -> &BudgetSummary {
        match self {
            Self::Surplus(summary) | Self::Deficit(summary) => summary,
        }
    }

    pub fn is_deficit(&self) -> bool {
        matches!(self, Self::Deficit(_))
    }

    /// Headline shown above the totals
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Surplus(_) => "Surplus!",
            Self::Deficit(_) => "Deficit!",
        }
    }
}

/// Evaluate a record with the default thresholds
pub fn evaluate(record: &BudgetRecord) -> Result<BudgetSummary, ValidationError> {
    evaluate_with(record, &AdvisoryThresholds::default())
}

/// Evaluate a record with explicit thresholds
///
/// Fails without a partial result if any of the nine values is not a
/// non-negative amount. Percentage advisories are skipped when income is
/// zero.
pub fn evaluate_with(
    record: &BudgetRecord,
    thresholds: &AdvisoryThresholds,
) -> Result<BudgetSummary, ValidationError> {
    let budget = parse_record(record).inspect_err(|err| {
        debug!(field = %err.field(), "budget record rejected: {:?}", err);
    })?;
    let summary = summarize(&budget, thresholds);

    debug!(
        total_expenses = %summary.total_expenses.as_decimal(),
        balance = %summary.balance.as_decimal(),
        advisories = summary.advisories.len(),
        "budget evaluated"
    );

    Ok(summary)
}

/// Validate every field of a record
pub fn parse_record(record: &BudgetRecord) -> Result<Budget, ValidationError> {
    let amount = |field: BudgetField| parse_amount(field, record.get(field));

    Ok(Budget {
        income: amount(BudgetField::Income)?,
        expenses: Expenses {
            rent: amount(BudgetField::Rent)?,
            food: amount(BudgetField::Food)?,
            utilities: amount(BudgetField::Utilities)?,
            transportation: amount(BudgetField::Transportation)?,
            entertainment: amount(BudgetField::Entertainment)?,
            health: amount(BudgetField::Health)?,
            education: amount(BudgetField::Education)?,
            miscellaneous: amount(BudgetField::Miscellaneous)?,
        },
    })
}

fn parse_amount(field: BudgetField, raw: &str) -> Result<Money, ValidationError> {
    let amount = Money::parse(raw).map_err(|err| match err {
        MoneyParseError::InvalidFormat(_) => ValidationError::NotANumber { field },
        MoneyParseError::Overflow(_) => ValidationError::OutOfRange { field },
    })?;

    if amount.is_negative() || amount > max_amount() {
        return Err(ValidationError::OutOfRange { field });
    }

    Ok(amount)
}

/// Compute totals and advisories for an already validated budget
pub fn summarize(budget: &Budget, thresholds: &AdvisoryThresholds) -> BudgetSummary {
    let total_expenses = budget.expenses.total();
    let balance = budget.income - total_expenses;

    let mut advisories = Vec::new();
    if budget
        .expenses
        .rent
        .share_exceeds(budget.income, thresholds.rent_bps)
    {
        advisories.push(Advisory::RentTooHigh {
            limit_bps: thresholds.rent_bps,
        });
    }
    if budget
        .expenses
        .food
        .share_exceeds(budget.income, thresholds.food_bps)
    {
        advisories.push(Advisory::FoodTooHigh {
            limit_bps: thresholds.food_bps,
        });
    }
    if balance.is_negative() {
        advisories.push(Advisory::Deficit);
    }

    BudgetSummary {
        total_expenses,
        balance,
        advisories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(values: [&str; 9]) -> BudgetRecord {
        BudgetRecord::from_values(values)
    }

    #[test]
    fn test_surplus_with_rent_advisory() {
        let summary =
            evaluate(&record(["1000", "400", "100", "50", "50", "0", "0", "0", "0"])).unwrap();

        assert_eq!(summary.total_expenses.to_string(), "$600.00");
        assert_eq!(summary.balance.to_string(), "$400.00");
        assert_eq!(summary.advisories, vec![Advisory::RentTooHigh { limit_bps: 3000 }]);

        let outcome = Outcome::from_summary(summary);
        assert!(!outcome.is_deficit());
        assert_eq!(outcome.headline(), "Surplus!");
    }

    #[test]
    fn test_deficit_scenario() {
        let summary = evaluate(&record(["2000", "300", "300", "300", "300", "300", "300", "300", "300"]))
            .unwrap();

        assert_eq!(summary.total_expenses, Money::from_cents(240_000));
        assert_eq!(summary.balance, Money::from_cents(-40_000));
        // 15% rent and exactly 15% food do not trip the share rules
        assert_eq!(summary.advisories, vec![Advisory::Deficit]);
        assert!(Outcome::from_summary(summary).is_deficit());
    }

    #[test]
    fn test_non_numeric_field_rejected() {
        let err = evaluate(&record(["1000", "400", "abc", "0", "0", "0", "0", "0", "0"]))
            .unwrap_err();
        assert_eq!(err, ValidationError::NotANumber { field: BudgetField::Food });
        assert_eq!(err.to_string(), "Please enter valid numbers!");
    }

    #[test]
    fn test_empty_field_rejected() {
        let err = evaluate(&record(["1000", "", "0", "0", "0", "0", "0", "0", "0"])).unwrap_err();
        assert_eq!(err, ValidationError::NotANumber { field: BudgetField::Rent });
    }

    #[test]
    fn test_first_invalid_field_reported() {
        let err = evaluate(&record(["x", "0", "0", "0", "0", "0", "0", "0", "y"])).unwrap_err();
        assert_eq!(err.field(), BudgetField::Income);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = evaluate(&record(["1000", "0", "0", "-5", "0", "0", "0", "0", "0"])).unwrap_err();
        assert_eq!(err, ValidationError::OutOfRange { field: BudgetField::Utilities });
    }

    #[test]
    fn test_huge_amount_rejected() {
        let err = evaluate(&record([
            "1000",
            "0",
            "0",
            "0",
            "0",
            "0",
            "0",
            "0",
            "2e27",
        ]))
        .unwrap_err();
        assert_eq!(err, ValidationError::OutOfRange { field: BudgetField::Miscellaneous });
    }

    #[test]
    fn test_large_amounts_within_range() {
        let summary = evaluate(&record([
            "1e27", "1e27", "1e27", "1e27", "1e27", "1e27", "1e27", "1e27", "1e27",
        ]))
        .unwrap();
        assert_eq!(
            summary.balance.as_decimal(),
            Decimal::from_i128_with_scale(-7_000_000_000_000_000_000_000_000_000, 0)
        );
        assert!(Outcome::from_summary(summary).is_deficit());
    }

    #[test]
    fn test_exponent_notation_accepted() {
        let summary =
            evaluate(&record(["1e3", "2.5E2", "0", "0", "0", "0", "0", "0", "0"])).unwrap();
        assert_eq!(summary.total_expenses, Money::from_cents(25_000));
        assert_eq!(summary.balance, Money::from_cents(75_000));
        assert!(summary.advisories.is_empty());
    }

    #[test]
    fn test_fractional_cents_are_not_rounded_before_evaluation() {
        let summary = evaluate(&record([
            "1", "0.004", "0.004", "0.004", "0.004", "0.004", "0.004", "0.004", "0.004",
        ]))
        .unwrap();
        assert_eq!(summary.total_expenses.as_decimal(), Decimal::new(32, 3));
        assert_eq!(summary.total_expenses.to_string(), "$0.03");
        assert_eq!(summary.balance.as_decimal(), Decimal::new(968, 3));
        assert_eq!(summary.balance.to_string(), "$0.97");
    }

    #[test]
    fn test_fractional_cent_share_boundary() {
        let over = evaluate(&record(["1", "0.304", "0", "0", "0", "0", "0", "0", "0"])).unwrap();
        assert_eq!(over.advisories, vec![Advisory::RentTooHigh { limit_bps: 3000 }]);

        let food_over =
            evaluate(&record(["10", "0", "1.5001", "0", "0", "0", "0", "0", "0"])).unwrap();
        assert_eq!(food_over.advisories, vec![Advisory::FoodTooHigh { limit_bps: 1500 }]);

        let at_limit =
            evaluate(&record(["1", "0.3000", "0.15", "0", "0", "0", "0", "0", "0"])).unwrap();
        assert!(at_limit.advisories.is_empty());
    }

    #[test]
    fn test_rent_boundary_is_strict() {
        let at_limit = evaluate(&record(["1000", "300", "0", "0", "0", "0", "0", "0", "0"])).unwrap();
        assert!(at_limit.advisories.is_empty());

        let just_over =
            evaluate(&record(["1000", "300.01", "0", "0", "0", "0", "0", "0", "0"])).unwrap();
        assert_eq!(just_over.advisories, vec![Advisory::RentTooHigh { limit_bps: 3000 }]);
    }

    #[test]
    fn test_food_boundary_is_strict() {
        let at_limit = evaluate(&record(["1000", "0", "150", "0", "0", "0", "0", "0", "0"])).unwrap();
        assert!(at_limit.advisories.is_empty());

        let over = evaluate(&record(["1000", "0", "150.01", "0", "0", "0", "0", "0", "0"])).unwrap();
        assert_eq!(over.advisories, vec![Advisory::FoodTooHigh { limit_bps: 1500 }]);
    }

    #[test]
    fn test_advisory_order() {
        let summary =
            evaluate(&record(["1000", "800", "400", "0", "0", "0", "0", "0", "0"])).unwrap();
        assert_eq!(
            summary.advisories,
            vec![
                Advisory::RentTooHigh { limit_bps: 3000 },
                Advisory::FoodTooHigh { limit_bps: 1500 },
                Advisory::Deficit,
            ]
        );
    }

    #[test]
    fn test_zero_income_skips_share_rules() {
        let summary = evaluate(&record(["0", "400", "100", "0", "0", "0", "0", "0", "0"])).unwrap();
        assert_eq!(summary.balance, Money::from_cents(-50_000));
        assert_eq!(summary.advisories, vec![Advisory::Deficit]);

        let empty = evaluate(&record(["0", "0", "0", "0", "0", "0", "0", "0", "0"])).unwrap();
        assert!(empty.advisories.is_empty());
        assert!(!Outcome::from_summary(empty).is_deficit());
    }

    #[test]
    fn test_total_independent_of_order() {
        let values = ["12.34", "0.01", "99.99", "1000", "0.5", "7", "250.25", "3.33"];
        let mut forward = vec!["5000"];
        forward.extend(values);
        let mut reversed = vec!["5000"];
        reversed.extend(values.iter().rev());

        let to_array = |v: Vec<&'static str>| -> [&'static str; 9] { v.try_into().unwrap() };
        let a = evaluate(&record(to_array(forward))).unwrap();
        let b = evaluate(&record(to_array(reversed))).unwrap();

        assert_eq!(a.total_expenses, b.total_expenses);
        assert_eq!(a.total_expenses, Money::from_cents(137_342));
        assert_eq!(a.balance, Money::from_cents(500_000) - a.total_expenses);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = AdvisoryThresholds {
            rent_bps: 4500,
            food_bps: 1250,
        };
        let summary = evaluate_with(
            &record(["1000", "400", "130", "0", "0", "0", "0", "0", "0"]),
            &thresholds,
        )
        .unwrap();
        assert_eq!(summary.advisories, vec![Advisory::FoodTooHigh { limit_bps: 1250 }]);
        assert_eq!(
            summary.advisories[0].message(),
            "Consider reducing food expenses (should be less than 12.5% of income)."
        );
    }

    #[test]
    fn test_advisory_messages() {
        assert_eq!(
            Advisory::RentTooHigh { limit_bps: 3000 }.to_string(),
            "Consider reducing rent expenses (should be less than 30% of income)."
        );
        assert_eq!(
            Advisory::FoodTooHigh { limit_bps: 1500 }.to_string(),
            "Consider reducing food expenses (should be less than 15% of income)."
        );
        assert_eq!(
            Advisory::Deficit.to_string(),
            "You are in deficit! Try to cut down on non-essential expenses."
        );
    }
}
