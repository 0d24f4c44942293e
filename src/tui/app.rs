//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::{Settings, ThemeMode};
use crate::services::{evaluate_with, Outcome};
use crate::storage::{load_record, save_record};

use super::theme::Palette;
use super::views::form::BudgetFormState;
use super::widgets::Notification;

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Result of a successful calculation
    Summary(Outcome),
    /// Calculation was attempted with invalid input
    InputError,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Where the budget is saved and loaded from
    pub save_path: PathBuf,

    /// Current colour scheme
    pub theme: ThemeMode,

    /// The nine input fields
    pub form: BudgetFormState,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Transient message shown after save or load
    pub notification: Option<Notification>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, save_path: PathBuf, theme: ThemeMode) -> Self {
        Self {
            settings,
            save_path,
            theme,
            form: BudgetFormState::new(),
            active_dialog: ActiveDialog::default(),
            notification: None,
            should_quit: false,
        }
    }

    /// Palette for the current theme
    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.theme)
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Switch between light and dark mode
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!(theme = %self.theme, "theme toggled");
    }

    /// Evaluate the form and show the result
    pub fn calculate(&mut self) {
        let record = self.form.record();
        let dialog = match evaluate_with(&record, &self.settings.thresholds) {
            Ok(summary) => ActiveDialog::Summary(Outcome::from_summary(summary)),
            Err(_) => ActiveDialog::InputError,
        };
        self.open_dialog(dialog);
    }

    /// Save the raw form contents, valid or not
    pub fn save(&mut self) {
        let record = self.form.record();
        self.notification = Some(match save_record(&record, &self.save_path) {
            Ok(()) => Notification::success(format!(
                "Budget saved to {}",
                self.save_path.display()
            )),
            Err(err) => Notification::error(format!("An error occurred: {}", err)),
        });
    }

    /// Replace the form contents with the saved budget
    pub fn load(&mut self) {
        self.notification = Some(match load_record(&self.save_path) {
            Ok(record) => {
                self.form.load(&record);
                Notification::success(format!(
                    "Budget loaded from {}",
                    self.save_path.display()
                ))
            }
            Err(err) => Notification::error(format!("An error occurred: {}", err)),
        });
    }

    /// Empty every field
    pub fn clear_form(&mut self) {
        self.form.clear();
        info!("form cleared");
    }

    /// Drop the notification once its time is up
    pub fn expire_notification(&mut self) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired()) {
            self.notification = None;
        }
    }
}
