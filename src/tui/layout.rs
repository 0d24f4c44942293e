//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: title, input form, action buttons
//! and status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the action button column
const ACTIONS_WIDTH: u16 = 30;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title banner at the top
    pub title: Rect,
    /// Input fields on the left
    pub form: Rect,
    /// Action buttons on the right
    pub actions: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(5),    // Form and actions
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(30),               // Form
                Constraint::Length(ACTIONS_WIDTH), // Actions
            ])
            .split(vertical[1]);

        Self {
            title: vertical[0],
            form: horizontal[0],
            actions: horizontal[1],
            status_bar: vertical[2],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_regions() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30));

        assert_eq!(layout.title.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.actions.width, ACTIONS_WIDTH);
        assert_eq!(layout.form.width, 100 - ACTIONS_WIDTH);
        assert_eq!(layout.form.y, 3);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect_fixed(60, 6, area);
        assert_eq!(rect, Rect::new(0, 2, 40, 6));
    }
}
