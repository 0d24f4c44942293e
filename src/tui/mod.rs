//! Terminal User Interface module
//!
//! The interactive budget form, built with ratatui: nine input fields, action
//! shortcuts, a summary dialog and a light/dark theme.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod theme;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
