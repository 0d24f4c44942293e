//! Budget summary and input error dialogs

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::error::INVALID_INPUT_MESSAGE;
use crate::services::{Advisory, Outcome};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::theme::Palette;

const DIALOG_WIDTH: u16 = 64;

/// Render the result of a calculation
pub fn render_outcome(frame: &mut Frame, app: &App, outcome: &Outcome) {
    let palette = app.palette();
    let symbol = app.settings.currency_symbol.as_str();
    let summary = outcome.summary();

    let accent = if outcome.is_deficit() {
        palette.warning
    } else {
        palette.positive
    };
    let balance_color = if summary.balance.is_negative() {
        palette.negative
    } else {
        palette.positive
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            outcome.headline(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Total Expenses: ", palette.base()),
            Span::styled(
                summary.total_expenses.format_with_symbol(symbol),
                palette.base().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Balance: ", palette.base()),
            Span::styled(
                summary.balance.format_with_symbol(symbol),
                Style::default()
                    .fg(balance_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    // Tips accompany the deficit warning only
    let tips: &[Advisory] = if outcome.is_deficit() {
        summary.advisories.as_slice()
    } else {
        &[]
    };
    if !tips.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Tips:",
            palette.base().add_modifier(Modifier::BOLD),
        )));
        for advisory in tips {
            lines.push(Line::from(Span::styled(
                format!("• {}", advisory),
                palette.base(),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(close_hint(&palette));

    // Advisories are long enough to wrap onto a second line
    let height = if tips.is_empty() {
        9
    } else {
        11 + 2 * tips.len() as u16
    };
    render_box(frame, &palette, " Budget Summary ", accent, lines, height);
}

/// Render the generic validation failure
pub fn render_input_error(frame: &mut Frame, app: &App) {
    let palette = app.palette();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(INVALID_INPUT_MESSAGE, palette.base())),
        Line::from(""),
        close_hint(&palette),
    ];
    render_box(frame, &palette, " Input Error ", palette.negative, lines, 7);
}

fn close_hint(palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(palette.accent)),
        Span::styled(" or ", palette.muted()),
        Span::styled("[Esc]", Style::default().fg(palette.accent)),
        Span::styled(" Close", palette.muted()),
    ])
}

fn render_box(
    frame: &mut Frame,
    palette: &Palette,
    title: &'static str,
    color: ratatui::style::Color,
    lines: Vec<Line<'_>>,
    height: u16,
) {
    let area = centered_rect_fixed(DIALOG_WIDTH, height, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).bg(palette.background))
        .style(palette.base());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
