//! Text input widget
//!
//! A single-line text field with a character-based cursor

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

/// Editable text with a cursor position counted in characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
}

impl TextInput {
    /// Create an empty text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input holding `content` with the cursor at the end
    pub fn with_content(content: impl Into<String>) -> Self {
        let mut input = Self::new();
        input.set_content(content);
        input
    }

    /// Replace the content and move the cursor to the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Byte offset of the character at `cursor`
    fn byte_offset(&self, cursor: usize) -> usize {
        self.content
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor);
        self.content.insert(offset, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let offset = self.byte_offset(self.cursor);
            self.content.remove(offset);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

/// Renders a [`TextInput`] into one line
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    focused: bool,
    style: Style,
    cursor_style: Style,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            focused: false,
            style: Style::default(),
            cursor_style: Style::default(),
        }
    }

    /// Show the cursor
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Style for the field text and background
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Style for the character under the cursor
    pub fn cursor_style(mut self, style: Style) -> Self {
        self.cursor_style = style;
        self
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Fill the whole field so the background shows
        buf.set_style(Rect::new(area.x, area.y, area.width, 1), self.style);

        // Scroll horizontally so the cursor stays visible
        let width = area.width as usize;
        let skip = (self.input.cursor + 1).saturating_sub(width);
        let visible: String = self.input.content.chars().skip(skip).take(width).collect();
        buf.set_stringn(area.x, area.y, &visible, width, self.style);

        if self.focused {
            let cursor_col = (self.input.cursor - skip) as u16;
            if cursor_col < area.width {
                let cursor_char = self
                    .input
                    .content
                    .chars()
                    .nth(self.input.cursor)
                    .unwrap_or(' ');
                buf.set_string(
                    area.x + cursor_col,
                    area.y,
                    cursor_char.to_string(),
                    self.cursor_style,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "120".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "120");
        input.backspace();
        assert_eq!(input.value(), "12");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_cursor_editing_in_middle() {
        let mut input = TextInput::with_content("1000");
        input.move_start();
        input.move_right();
        input.insert('.');
        assert_eq!(input.value(), "1.000");
        input.delete();
        assert_eq!(input.value(), "1.00");
        input.move_end();
        input.move_right();
        assert_eq!(input.cursor, 4);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::with_content("€5");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "5");
        input.insert('£');
        assert_eq!(input.value(), "£5");
        input.move_end();
        input.backspace();
        input.backspace();
        assert_eq!(input.value(), "");
        input.backspace();
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let input = TextInput::with_content("123456789");
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        TextInputWidget::new(&input).focused(true).render(area, &mut buf);

        let rendered: String = buf.content.iter().map(|cell| cell.symbol()).collect();
        assert_eq!(rendered, "6789 ");
    }
}
