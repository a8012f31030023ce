use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Single-line edit buffer. The cursor counts grapheme clusters, so a
/// combining sequence moves and deletes as one unit.
#[derive(Debug, Default, Clone)]
pub struct InputLine {
    text: String,
    cursor: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.text.graphemes(true).count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replaces the contents and puts the cursor at the end.
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        let before = self.len();
        let idx = self.byte_index(self.cursor);
        self.text.insert(idx, c);
        // A combining mark merges into the previous cluster.
        if self.len() > before {
            self.cursor += 1;
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.remove_at_cursor();
        }
    }

    pub fn delete(&mut self) {
        self.remove_at_cursor();
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.len();
    }

    pub fn move_word_left(&mut self) {
        let graphemes: Vec<&str> = self.text.graphemes(true).collect();
        let mut pos = self.cursor;

        while pos > 0 && is_blank(graphemes[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && !is_blank(graphemes[pos - 1]) {
            pos -= 1;
        }
        self.cursor = pos;
    }

    pub fn move_word_right(&mut self) {
        let graphemes: Vec<&str> = self.text.graphemes(true).collect();
        let len = graphemes.len();
        let mut pos = self.cursor;

        while pos < len && !is_blank(graphemes[pos]) {
            pos += 1;
        }
        while pos < len && is_blank(graphemes[pos]) {
            pos += 1;
        }
        self.cursor = pos;
    }

    /// Display columns taken by the text left of the cursor.
    pub fn cursor_width(&self) -> usize {
        self.text[..self.byte_index(self.cursor)].width()
    }

    /// `count` graphemes starting at grapheme `skip`.
    pub fn window(&self, skip: usize, count: usize) -> String {
        self.text.graphemes(true).skip(skip).take(count).collect()
    }

    fn byte_index(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn remove_at_cursor(&mut self) {
        let start = self.byte_index(self.cursor);
        if let Some(g) = self.text[start..].graphemes(true).next() {
            let end = start + g.len();
            self.text.drain(start..end);
        }
    }
}

fn is_blank(grapheme: &str) -> bool {
    grapheme.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> InputLine {
        let mut line = InputLine::new();
        for c in s.chars() {
            line.insert(c);
        }
        line
    }

    #[test]
    fn insert_in_the_middle() {
        let mut line = typed("1+3");
        line.move_left();
        line.insert('2');
        assert_eq!(line.as_str(), "1+23");
        assert_eq!(line.cursor(), 3);
    }

    #[test]
    fn backspace_and_delete_remove_whole_clusters() {
        let mut line = typed("e\u{301}1");
        assert_eq!(line.len(), 2);
        line.home();
        line.delete();
        assert_eq!(line.as_str(), "1");

        let mut line = typed("2*e\u{301}");
        line.backspace();
        assert_eq!(line.as_str(), "2*");
        assert_eq!(line.cursor(), 2);
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut line = typed("7");
        line.home();
        line.backspace();
        assert_eq!(line.as_str(), "7");
    }

    #[test]
    fn word_movement() {
        let mut line = typed("12 + 34 * 5");
        line.move_word_left();
        assert_eq!(line.cursor(), 10);
        line.move_word_left();
        assert_eq!(line.cursor(), 8);
        line.home();
        line.move_word_right();
        assert_eq!(line.cursor(), 3);
    }

    #[test]
    fn cursor_width_counts_columns() {
        let mut line = typed("１+2");
        line.end();
        assert_eq!(line.cursor_width(), 4);
        assert_eq!(line.window(1, 5), "+2");
    }

    #[test]
    fn set_moves_cursor_to_end() {
        let mut line = InputLine::new();
        line.set("(1 + 2)");
        assert_eq!(line.cursor(), 7);
        line.clear();
        assert!(line.is_empty());
        assert_eq!(line.cursor(), 0);
    }
}
