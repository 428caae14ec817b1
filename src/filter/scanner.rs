//! Character-level scanner over a filter expression

/// Cursor over an immutable input string
///
/// All methods advance the cursor; there is no other state. Positions are
/// counted in characters, not bytes, so error messages point at what the
/// user typed.
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    pub fn new(text: &str) -> Self {
        Scanner {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    /// Current cursor position in characters
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Return the next `n` characters without consuming, fewer near the end
    /// of input, `None` once the cursor is past the end.
    pub fn peek(&self, n: usize) -> Option<String> {
        if self.is_end() {
            return None;
        }
        let end = (self.pos + n).min(self.chars.len());
        Some(self.chars[self.pos..end].iter().collect())
    }

    pub fn peek_char(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Consume and return the same characters `peek(n)` would
    pub fn read(&mut self, n: usize) -> Option<String> {
        let out = self.peek(n)?;
        self.pos = (self.pos + n).min(self.chars.len());
        Some(out)
    }

    /// Skip consecutive ASCII spaces. Tabs and newlines are not whitespace
    /// in a filter expression.
    pub fn skip_spaces(&mut self) {
        while self.peek_char() == Some(' ') {
            self.pos += 1;
        }
    }

    /// Consume a quoted literal, delimiters included
    ///
    /// The current character must be `"` or `'`; the literal runs through
    /// the next occurrence of that same character. Returns `None` if the
    /// input ends before the closing quote, leaving the cursor at the end.
    pub fn read_quoted(&mut self) -> Option<String> {
        let quote = self.peek_char()?;
        if quote != '"' && quote != '\'' {
            return None;
        }
        for i in self.pos + 1..self.chars.len() {
            if self.chars[i] == quote {
                let lexeme = self.chars[self.pos..=i].iter().collect();
                self.pos = i + 1;
                return Some(lexeme);
            }
        }
        self.pos = self.chars.len();
        None
    }

    /// Consume the maximal run of characters satisfying `pred`, possibly
    /// empty.
    pub fn read_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        while matches!(self.peek_char(), Some(c) if pred(c)) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }
}
