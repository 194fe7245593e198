//! Search input for one pane

use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Search bar state. `cursor_pos` counts characters, not bytes.
#[derive(Debug, Clone, Default)]
pub struct SearchBar {
    pub query: String,
    pub active: bool,
    pub cursor_pos: usize,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activate(&mut self) {
        self.active = true;
        self.cursor_pos = self.char_len();
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor_pos = 0;
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor_pos);
        self.query.insert(at, c);
        self.cursor_pos += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let at = self.byte_index(self.cursor_pos);
            self.query.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.char_len() {
            let at = self.byte_index(self.cursor_pos);
            self.query.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor_pos < self.char_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.char_len();
    }

    fn char_len(&self) -> usize {
        self.query.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    /// Display column of the cursor inside a bar whose inner width is `inner_width`
    pub fn cursor_column(&self, inner_width: u16) -> u16 {
        let before = &self.query[..self.byte_index(self.cursor_pos)];
        let width = Span::raw(before).width();
        width.min(usize::from(inner_width.saturating_sub(1))) as u16
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, style: Style, focused_style: Style) {
        let border_style = if self.active { focused_style } else { style };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search (/) ");

        let display_text = if self.query.is_empty() && !self.active {
            "Type to search...".to_string()
        } else {
            self.query.clone()
        };

        let paragraph = Paragraph::new(display_text).block(block).style(style);

        frame.render_widget(paragraph, area);

        if self.active {
            let column = self.cursor_column(area.width.saturating_sub(2));
            frame.set_cursor_position((area.x + 1 + column, area.y + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_at_cursor() {
        let mut bar = SearchBar::new();
        bar.activate();
        for c in "abd".chars() {
            bar.insert(c);
        }
        bar.move_left();
        bar.insert('c');
        assert_eq!(bar.query, "abcd");

        bar.move_home();
        bar.delete();
        assert_eq!(bar.query, "bcd");

        bar.move_end();
        bar.backspace();
        assert_eq!(bar.query, "bc");
        assert_eq!(bar.cursor_pos, 2);
    }

    #[test]
    fn handles_multibyte_input() {
        let mut bar = SearchBar::new();
        bar.insert('数');
        bar.insert('据');
        bar.move_left();
        bar.insert('源');
        assert_eq!(bar.query, "数源据");
        bar.backspace();
        assert_eq!(bar.query, "数据");
    }

    #[test]
    fn cursor_column_counts_display_width() {
        let mut bar = SearchBar::new();
        for c in "a数据".chars() {
            bar.insert(c);
        }
        assert_eq!(bar.cursor_column(20), 5);
        bar.move_left();
        assert_eq!(bar.cursor_column(20), 3);
        bar.move_home();
        assert_eq!(bar.cursor_column(20), 0);
    }

    #[test]
    fn cursor_stays_inside_narrow_bar() {
        let mut bar = SearchBar::new();
        for c in "a long query that overflows".chars() {
            bar.insert(c);
        }
        assert_eq!(bar.cursor_column(8), 7);
        assert_eq!(bar.cursor_column(0), 0);
    }

    #[test]
    fn render_places_cursor_after_wide_chars() {
        use ratatui::{backend::TestBackend, layout::Position, Terminal};

        let mut bar = SearchBar::new();
        bar.activate();
        bar.insert('数');
        bar.insert('据');

        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                bar.render(frame, area, Style::default(), Style::default());
            })
            .unwrap();
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(5, 1));
    }

    #[test]
    fn clear_resets_cursor() {
        let mut bar = SearchBar::new();
        bar.insert('x');
        bar.clear();
        assert!(bar.query.is_empty());
        assert_eq!(bar.cursor_pos, 0);
        bar.backspace();
        bar.move_left();
        assert_eq!(bar.cursor_pos, 0);
    }
}
