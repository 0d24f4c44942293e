//! Budget summary formatting for terminal output

use crate::models::Budget;
use crate::services::{BudgetSummary, Outcome};

/// Width of the breakdown table
const TABLE_WIDTH: usize = 52;

/// Width of the share-of-income bar
const BAR_WIDTH: usize = 16;

/// The two lines with total expenses and balance
pub fn format_totals(summary: &BudgetSummary, symbol: &str) -> String {
    format!(
        "Total Expenses: {}\nBalance: {}",
        summary.total_expenses.format_with_symbol(symbol),
        summary.balance.format_with_symbol(symbol)
    )
}

/// Full summary: headline, totals and, for a deficit, the tips
pub fn format_outcome(outcome: &Outcome, symbol: &str) -> String {
    let summary = outcome.summary();
    let mut output = String::new();

    output.push_str(outcome.headline());
    output.push_str("\n\n");
    output.push_str(&format_totals(summary, symbol));
    output.push('\n');

    if outcome.is_deficit() {
        output.push_str("\nTips:\n");
        for advisory in &summary.advisories {
            output.push_str(&format!("  - {}\n", advisory));
        }
    }

    output
}

/// Per-category table with each expense's share of income
pub fn format_breakdown(budget: &Budget, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<16} {:>14} {:>7}  {}\n",
        "Category", "Amount", "Share", "of income"
    ));
    output.push_str(&separator(TABLE_WIDTH));
    output.push('\n');

    for (field, amount) in budget.expenses.iter() {
        let share = amount.percent_of(budget.income);
        let (pct, bar) = match share {
            Some(pct) => (format_percentage(pct), format_bar(pct, 100.0, BAR_WIDTH)),
            None => ("-".to_string(), " ".repeat(BAR_WIDTH)),
        };
        output.push_str(&format!(
            "{:<16} {:>14} {:>7}  {}\n",
            field.label(),
            amount.format_with_symbol(symbol),
            pct,
            bar
        ));
    }

    output.push_str(&separator(TABLE_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<16} {:>14}\n",
        "Income",
        budget.income.format_with_symbol(symbol)
    ));

    output
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
