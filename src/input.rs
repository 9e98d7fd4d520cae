use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "> ";
const CHAR_LIMIT: usize = 156;
const WIDTH: usize = 30;

/// Single-line text field. `cursor` counts chars, not bytes.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    placeholder: String,
    char_limit: usize,
    width: usize,
}

impl TextInput {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            placeholder: placeholder.into(),
            char_limit: CHAR_LIMIT,
            width: WIDTH,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn insert(&mut self, c: char) {
        if self.len() >= self.char_limit {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn remove_range(&mut self, start: usize, end: usize) {
        let (start, end) = (self.byte_index(start), self.byte_index(end));
        self.value.replace_range(start..end, "");
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('a') => self.cursor = 0,
                KeyCode::Char('e') => self.cursor = self.len(),
                KeyCode::Char('u') => {
                    self.remove_range(0, self.cursor);
                    self.cursor = 0;
                }
                KeyCode::Char('k') => self.remove_range(self.cursor, self.len()),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace if self.cursor > 0 => {
                self.remove_range(self.cursor - 1, self.cursor);
                self.cursor -= 1;
            }
            KeyCode::Delete if self.cursor < self.len() => {
                self.remove_range(self.cursor, self.cursor + 1);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.len(),
            _ => {}
        }
    }

    /// First visible char, chosen so the cursor stays inside the field.
    fn scroll(&self) -> usize {
        (self.cursor + 1).saturating_sub(self.width)
    }

    /// Display columns from the start of the field to the cursor.
    fn cursor_column(&self) -> usize {
        let before: String = self
            .value
            .chars()
            .skip(self.scroll())
            .take(self.cursor - self.scroll())
            .collect();
        PROMPT.width() + before.width()
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let field = if self.value.is_empty() {
            Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            let visible: String = self
                .value
                .chars()
                .skip(self.scroll())
                .take(self.width)
                .collect();
            Span::raw(visible)
        };
        let line = Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(Color::Cyan)),
            field,
        ]);
        f.render_widget(Paragraph::new(line), area);

        let x = area.x as usize + self.cursor_column();
        if x < area.right() as usize {
            f.set_cursor_position((x as u16, area.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new("Lima");
        for c in text.chars() {
            input.handle_key(press(KeyCode::Char(c)));
        }
        input
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = typed("Toyo");
        input.handle_key(press(KeyCode::Left));
        input.handle_key(press(KeyCode::Left));
        input.handle_key(press(KeyCode::Char('k')));
        assert_eq!(input.value(), "Tokyo");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn backspace_and_delete() {
        let mut input = typed("Osloo");
        input.handle_key(press(KeyCode::Backspace));
        assert_eq!(input.value(), "Oslo");
        input.handle_key(press(KeyCode::Home));
        input.handle_key(press(KeyCode::Delete));
        assert_eq!(input.value(), "slo");
        input.handle_key(press(KeyCode::Backspace));
        assert_eq!(input.value(), "slo");
    }

    #[test]
    fn multibyte_chars_are_edited_whole() {
        let mut input = typed("Zürich");
        for _ in 0..4 {
            input.handle_key(press(KeyCode::Left));
        }
        input.handle_key(press(KeyCode::Backspace));
        assert_eq!(input.value(), "Zrich");
    }

    #[test]
    fn control_shortcuts() {
        let mut input = typed("New York");
        input.handle_key(ctrl('a'));
        assert_eq!(input.cursor, 0);
        input.handle_key(ctrl('e'));
        assert_eq!(input.cursor, 8);
        for _ in 0..5 {
            input.handle_key(press(KeyCode::Left));
        }
        input.handle_key(ctrl('k'));
        assert_eq!(input.value(), "New");
        input.handle_key(ctrl('u'));
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn releases_are_ignored() {
        let mut input = TextInput::new("Lima");
        input.handle_key(KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(input.value(), "");
    }

    #[test]
    fn char_limit_is_enforced() {
        let input = typed(&"a".repeat(CHAR_LIMIT + 10));
        assert_eq!(input.value().len(), CHAR_LIMIT);
    }

    #[test]
    fn scroll_keeps_cursor_visible() {
        let input = typed(&"x".repeat(WIDTH + 5));
        assert_eq!(input.scroll(), 6);
        assert_eq!(typed("short").scroll(), 0);
    }

    #[test]
    fn cursor_column_counts_display_width() {
        assert_eq!(typed("Tokyo").cursor_column(), 7);
        assert_eq!(typed("東京").cursor_column(), 6);

        let mut input = typed("東京都");
        input.handle_key(press(KeyCode::Left));
        assert_eq!(input.cursor_column(), 6);
    }
}
