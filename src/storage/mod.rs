//! Flat-file storage for a single budget record
//!
//! There is no database: the planner holds one record at a time and saves it
//! as a two-row CSV file on request.

pub mod record_file;

pub use record_file::{load_record, read_record, save_record, write_record, DEFAULT_FILE_NAME};
