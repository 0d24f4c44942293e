//! Action buttons
//!
//! The right-hand column listing what each shortcut does.

use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::ThemeMode;
use crate::tui::app::App;

/// One button: caption and the key that triggers it
pub struct Action {
    pub caption: &'static str,
    pub key: &'static str,
}

/// Buttons in display order; the theme caption depends on the current mode
pub fn actions(theme: ThemeMode) -> [Action; 5] {
    [
        Action {
            caption: "Calculate Budget",
            key: "Enter",
        },
        Action {
            caption: "Save Budget",
            key: "Ctrl-S",
        },
        Action {
            caption: "Load Budget",
            key: "Ctrl-O",
        },
        Action {
            caption: match theme {
                ThemeMode::Light => "Dark Mode",
                ThemeMode::Dark => "Light Mode",
            },
            key: "Ctrl-T",
        },
        Action {
            caption: "Clear Form",
            key: "Ctrl-R",
        },
    ]
}

/// Render the action column
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let block = Block::default()
        .title(" Actions ")
        .title_style(palette.base().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(palette.focus_border())
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (i, action) in actions(app.theme).iter().enumerate() {
        // Each button is one line tall with a blank line below it
        let y = inner.y + 1 + i as u16 * 3;
        if y + 1 >= inner.y + inner.height {
            break;
        }
        let button_area = Rect::new(inner.x + 2, y, inner.width.saturating_sub(4), 1);
        let hint_area = Rect::new(inner.x + 2, y + 1, inner.width.saturating_sub(4), 1);

        frame.render_widget(
            Paragraph::new(Line::from(action.caption))
                .alignment(Alignment::Center)
                .style(palette.button()),
            button_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(action.key))
                .alignment(Alignment::Center)
                .style(palette.muted()),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_caption_flips() {
        assert_eq!(actions(ThemeMode::Light)[3].caption, "Dark Mode");
        assert_eq!(actions(ThemeMode::Dark)[3].caption, "Light Mode");
    }
}
