//! Budget input form
//!
//! Nine labelled text fields: income followed by the expense categories.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{BudgetField, BudgetRecord};
use crate::tui::app::App;
use crate::tui::widgets::{TextInput, TextInputWidget};

/// Width reserved for field labels
const LABEL_WIDTH: u16 = 17;

/// Editable contents of the form, one input per field
#[derive(Debug, Clone)]
pub struct BudgetFormState {
    inputs: [TextInput; 9],
    /// Field receiving keystrokes
    pub focused: BudgetField,
}

impl BudgetFormState {
    /// Create an empty form focused on income
    pub fn new() -> Self {
        Self {
            inputs: std::array::from_fn(|_| TextInput::new()),
            focused: BudgetField::Income,
        }
    }

    /// The input for a field
    pub fn input(&self, field: BudgetField) -> &TextInput {
        &self.inputs[field.index()]
    }

    /// The input for the focused field
    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        &mut self.inputs[self.focused.index()]
    }

    /// Move focus to a specific field
    pub fn set_focus(&mut self, field: BudgetField) {
        self.focused = field;
    }

    /// Move focus to the next field
    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    /// Move focus to the previous field
    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Current text of every field
    pub fn record(&self) -> BudgetRecord {
        let mut record = BudgetRecord::new();
        for field in BudgetField::ALL {
            record.set(field, self.input(field).value());
        }
        record
    }

    /// Fill every field from a record
    pub fn load(&mut self, record: &BudgetRecord) {
        for (field, value) in record.values() {
            self.inputs[field.index()].set_content(value);
        }
    }

    /// Empty every field and focus income
    pub fn clear(&mut self) {
        for input in &mut self.inputs {
            input.clear();
        }
        self.focused = BudgetField::Income;
    }
}

impl Default for BudgetFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();

    let block = Block::default()
        .title(" Monthly Budget ")
        .title_style(palette.base().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(palette.focus_border())
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Leave a blank line between fields when there is room
    let row_height = if inner.height >= (BudgetField::ALL.len() * 2) as u16 {
        2
    } else {
        1
    };

    for (i, field) in BudgetField::ALL.into_iter().enumerate() {
        let y = inner.y + i as u16 * row_height;
        if y >= inner.y + inner.height {
            break;
        }
        let focused = field == app.form.focused;

        let label_style = if focused {
            Style::default()
                .fg(palette.accent)
                .bg(palette.background)
                .add_modifier(Modifier::BOLD)
        } else {
            palette.base()
        };
        let marker = if focused { "› " } else { "  " };
        let label = Paragraph::new(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(field.label(), label_style),
        ]));
        frame.render_widget(label, Rect::new(inner.x, y, LABEL_WIDTH.min(inner.width), 1));

        let input_x = inner.x + LABEL_WIDTH;
        if input_x < inner.x + inner.width {
            let input_area = Rect::new(input_x, y, inner.x + inner.width - input_x - 1, 1);
            let widget = TextInputWidget::new(app.form.input(field))
                .focused(focused)
                .style(palette.input())
                .cursor_style(palette.button());
            frame.render_widget(widget, input_area);
        }
    }
}
