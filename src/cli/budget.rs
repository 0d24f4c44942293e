//! Budget CLI commands
//!
//! One-shot equivalents of the form's actions: calculate, save and show a
//! saved budget.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Settings;
use crate::display::{format_breakdown, format_outcome};
use crate::error::BudgetResult;
use crate::models::BudgetRecord;
use crate::services::{evaluate_with, parse_record, Outcome};
use crate::storage::{load_record, save_record};

/// The nine budget values, taken verbatim from the command line
#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    /// Monthly income
    #[arg(long, allow_hyphen_values = true)]
    pub income: String,
    /// Rent or mortgage
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub rent: String,
    /// Groceries and eating out
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub food: String,
    /// Electricity, water, internet, phone
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub utilities: String,
    /// Fuel, fares, car costs
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub transportation: String,
    /// Going out, subscriptions, hobbies
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub entertainment: String,
    /// Insurance, medicine, doctor visits
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub health: String,
    /// Tuition, courses, books
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub education: String,
    /// Anything else
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub miscellaneous: String,
}

impl RecordArgs {
    /// Build the record exactly as given
    pub fn to_record(&self) -> BudgetRecord {
        BudgetRecord {
            income: self.income.clone(),
            rent: self.rent.clone(),
            food: self.food.clone(),
            utilities: self.utilities.clone(),
            transportation: self.transportation.clone(),
            entertainment: self.entertainment.clone(),
            health: self.health.clone(),
            education: self.education.clone(),
            miscellaneous: self.miscellaneous.clone(),
        }
    }
}

/// Evaluate a record and format the summary, plus the breakdown if asked
pub fn render_report(
    settings: &Settings,
    record: &BudgetRecord,
    breakdown: bool,
) -> BudgetResult<String> {
    let summary = evaluate_with(record, &settings.thresholds)?;
    let mut output = format_outcome(&Outcome::from_summary(summary), &settings.currency_symbol);

    if breakdown {
        let budget = parse_record(record)?;
        output.push('\n');
        output.push_str(&format_breakdown(&budget, &settings.currency_symbol));
    }

    Ok(output)
}

/// Handle `budget calc`
pub fn handle_calc(settings: &Settings, args: &RecordArgs, breakdown: bool) -> BudgetResult<()> {
    print!("{}", render_report(settings, &args.to_record(), breakdown)?);
    Ok(())
}

/// Handle `budget save`
pub fn handle_save(
    settings: &Settings,
    args: &RecordArgs,
    output: Option<PathBuf>,
) -> BudgetResult<()> {
    let path = output.unwrap_or_else(|| settings.save_path.clone());
    save_record(&args.to_record(), &path)?;
    println!("Budget saved to {}", path.display());
    Ok(())
}

/// Handle `budget show`
pub fn handle_show(settings: &Settings, file: Option<&Path>, breakdown: bool) -> BudgetResult<()> {
    let path = file.unwrap_or(settings.save_path.as_path());
    let record = load_record(path)?;
    print!("{}", render_report(settings, &record, breakdown)?);
    Ok(())
}
