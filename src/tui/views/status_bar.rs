//! Status bar view
//!
//! Shows the save location, the current theme and key hints

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Key hints shown on the right
const HINTS: &str = " F1:Help  Esc:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let mut spans = vec![
        Span::styled(" File: ", palette.muted()),
        Span::styled(app.save_path.display().to_string(), palette.base()),
        Span::styled(" │ ", palette.muted()),
        Span::styled(
            format!("{} mode", app.theme),
            palette.base().add_modifier(Modifier::BOLD),
        ),
    ];

    // Calculate padding
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + HINTS.len());
    spans.push(Span::styled(" ".repeat(padding_len.max(1)), palette.base()));
    spans.push(Span::styled(HINTS, palette.button()));

    frame.render_widget(Paragraph::new(Line::from(spans)).style(palette.base()), area);
}
