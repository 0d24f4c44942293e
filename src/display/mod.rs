//! Display formatting for terminal output
//!
//! Renders evaluation outcomes and expense breakdowns as plain text for the
//! one-shot CLI commands.

pub mod summary;

pub use summary::{format_breakdown, format_outcome, format_totals};
