//! Dialog rendering
//!
//! Modal boxes drawn over the form: the calculation summary, the input
//! error, and the key help.

pub mod help;
pub mod summary;
