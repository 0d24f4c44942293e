//! Business logic layer
//!
//! Services sit between the presentation layers (CLI and TUI) and the data
//! models. The evaluator is the only service: it validates a record and
//! derives totals, balance and advisories from it.

pub mod evaluator;

pub use evaluator::{
    evaluate, evaluate_with, parse_record, summarize, Advisory, AdvisoryThresholds,
    BudgetSummary, Outcome,
};
