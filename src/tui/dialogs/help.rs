//! Help dialog
//!
//! Lists the keyboard shortcuts

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::theme::Palette;

/// Shortcut and description pairs, in display order
pub const KEYS: [(&str, &str); 12] = [
    ("Up/Down", "Previous/next field"),
    ("Tab/Shift-Tab", "Next/previous field"),
    ("Left/Right", "Move the cursor"),
    ("Home/End", "Start/end of the field"),
    ("Enter", "Calculate budget"),
    ("Ctrl-S", "Save budget"),
    ("Ctrl-O", "Load saved budget"),
    ("Ctrl-T", "Toggle dark mode"),
    ("Ctrl-R", "Clear all fields"),
    ("F1", "Show/hide help"),
    ("Esc", "Close dialog, or quit"),
    ("Ctrl-Q", "Quit"),
];

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.palette();
    let area = centered_rect_fixed(52, KEYS.len() as u16 + 6, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(palette.focus_border())
        .style(palette.base());

    let mut lines = vec![
        Line::from(Span::styled(
            "Keys",
            palette.base().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(KEYS.iter().map(|&(key, desc)| key_line(&palette, key, desc)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Saving to {}", app.save_path.display()),
        palette.muted(),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn key_line(palette: &Palette, key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<16}", key),
            Style::default().fg(palette.accent).bg(palette.background),
        ),
        Span::styled(desc, palette.base()),
    ])
}
