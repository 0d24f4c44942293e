//! TUI Views module
//!
//! Contains the title banner, input form, action column and status bar, and
//! draws the active dialog and notification on top.

pub mod actions;
pub mod form;
pub mod status_bar;

use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::NotificationWidget;

/// Window title
pub const TITLE: &str = "Personal Budget Planner";

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.palette();
    let layout = AppLayout::new(frame.area());

    // Paint the window background for the current theme
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    render_title(frame, app, layout.title);
    form::render(frame, app, layout.form);
    actions::render(frame, app, layout.actions);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = &app.notification {
        let width = 44.min(frame.area().width);
        let area = Rect::new(
            frame.area().width.saturating_sub(width),
            layout.status_bar.y.saturating_sub(4),
            width,
            4.min(layout.status_bar.y),
        );
        frame.render_widget(NotificationWidget::new(notification, &palette), area);
    }

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(palette.base().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(palette.muted()),
        );
    frame.render_widget(title, area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Summary(outcome) => {
            dialogs::summary::render_outcome(frame, app, outcome);
        }
        ActiveDialog::InputError => {
            dialogs::summary::render_input_error(frame, app);
        }
        ActiveDialog::Help => {
            dialogs::help::render(frame, app);
        }
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, ThemeMode};
    use crate::models::BudgetRecord;
    use crate::tui::widgets::Notification;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        screen_text(&terminal)
    }

    #[test]
    fn test_render_form() {
        let settings = Settings::default();
        let mut app = App::new(&settings, PathBuf::from("budget.csv"), ThemeMode::Light);
        app.form
            .load(&BudgetRecord::from_values(["1000", "400", "", "", "", "", "", "", ""]));

        let screen = draw(&app);
        assert!(screen.contains(TITLE));
        assert!(screen.contains("Transportation"));
        assert!(screen.contains("Miscellaneous"));
        assert!(screen.contains("1000"));
        assert!(screen.contains("Calculate Budget"));
        assert!(screen.contains("light mode"));
    }

    #[test]
    fn test_render_summary_dialog() {
        let settings = Settings::default();
        let mut app = App::new(&settings, PathBuf::from("budget.csv"), ThemeMode::Dark);
        app.form.load(&BudgetRecord::from_values([
            "2000", "300", "300", "300", "300", "300", "300", "300", "300",
        ]));
        app.calculate();

        let screen = draw(&app);
        assert!(screen.contains("Budget Summary"));
        assert!(screen.contains("Deficit!"));
        assert!(screen.contains("Total Expenses: $2400.00"));
        assert!(screen.contains("Balance: -$400.00"));
        assert!(screen.contains("Tips:"));
    }

    #[test]
    fn test_render_surplus_dialog_without_tips() {
        let settings = Settings::default();
        let mut app = App::new(&settings, PathBuf::from("budget.csv"), ThemeMode::Light);
        app.form.load(&BudgetRecord::from_values([
            "1000", "400", "100", "50", "50", "0", "0", "0", "0",
        ]));
        app.calculate();

        let screen = draw(&app);
        assert!(screen.contains("Surplus!"));
        assert!(screen.contains("Balance: $400.00"));
        assert!(!screen.contains("Tips:"));
        assert!(!screen.contains("Consider reducing rent"));
    }

    #[test]
    fn test_render_input_error_and_notification() {
        let settings = Settings::default();
        let mut app = App::new(&settings, PathBuf::from("budget.csv"), ThemeMode::Light);
        app.calculate();
        app.notification = Some(Notification::success("Budget saved to budget.csv"));

        let screen = draw(&app);
        assert!(screen.contains("Input Error"));
        assert!(screen.contains("Please enter valid numbers!"));
        assert!(screen.contains("Budget saved to budget.csv"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let settings = Settings::default();
        let mut app = App::new(&settings, PathBuf::from("budget.csv"), ThemeMode::Light);
        app.open_dialog(ActiveDialog::Help);
        app.notification = Some(Notification::error("An error occurred"));

        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
    }
}
