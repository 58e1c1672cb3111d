//! Splitting text into words while keeping double-quoted groups together.

/// A run of text collected between quote boundaries.
#[derive(Debug)]
struct Part {
    text: String,
    quoted: bool,
}

/// Character-by-character splitter state.
struct Tokenizer {
    chars: Vec<char>,
    parts: Vec<Part>,
    buffer: String,
    in_quotes: bool,
    escaping: bool,
}

impl Tokenizer {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            parts: Vec::new(),
            buffer: String::new(),
            in_quotes: false,
            escaping: false,
        }
    }

    /// A quote opens a group only at the start of the text or after whitespace.
    fn opens_group(&self, index: usize) -> bool {
        !self.in_quotes && (index == 0 || self.chars[index - 1].is_whitespace())
    }

    /// A quote closes a group only at the end of the text or before whitespace.
    fn closes_group(&self, index: usize) -> bool {
        self.in_quotes
            && self
                .chars
                .get(index + 1)
                .map_or(true, |next| next.is_whitespace())
    }

    fn push_char(&mut self, c: char) {
        let starts_escape = c == '\\' && !self.escaping;
        if !starts_escape {
            // Only `"` and `\` can be escaped; otherwise the backslash stays.
            if self.escaping && c != '"' && c != '\\' {
                self.buffer.push('\\');
            }
            self.buffer.push(c);
        }
        self.escaping = starts_escape;
    }

    fn flush(&mut self, quoted: bool) {
        if self.buffer.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.buffer);
        if quoted || !text.trim().is_empty() {
            self.parts.push(Part { text, quoted });
        }
    }

    fn run(mut self) -> Vec<Part> {
        for index in 0..self.chars.len() {
            let c = self.chars[index];
            if c == '"' && !self.escaping {
                if self.opens_group(index) || self.closes_group(index) {
                    self.flush(self.in_quotes);
                    self.in_quotes = !self.in_quotes;
                } else {
                    self.buffer.push(c);
                }
            } else {
                self.push_char(c);
            }
        }

        // An unterminated group keeps its quote and is split like plain text.
        if self.in_quotes {
            self.buffer.insert(0, '"');
        }
        if self.escaping {
            self.buffer.push('\\');
        }
        self.flush(false);
        self.parts
    }
}

/// Splits `text` on whitespace, keeping double-quoted groups as single tokens.
///
/// - A `"` opens a group at the start of the text or after whitespace and
///   closes it at the end of the text or before whitespace. Anywhere else it
///   is an ordinary character.
/// - `\"` is a literal quote and `\\` a literal backslash. A backslash before
///   any other character is kept as is.
/// - Empty groups (`""`) produce no token. An unterminated group is split on
///   whitespace, with its opening quote kept on the first word.
///
/// ```
/// use extrautils_text::tokenize;
///
/// assert_eq!(
///     tokenize(r#"text with "some quotes" etc."#),
///     vec!["text", "with", "some quotes", "etc."]
/// );
/// assert_eq!(tokenize(r#"with escaped \" quote"#), vec!["with", "escaped", "\"", "quote"]);
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    Tokenizer::new(text)
        .run()
        .into_iter()
        .flat_map(|part| {
            if part.quoted {
                vec![part.text]
            } else {
                part.text.split_whitespace().map(String::from).collect()
            }
        })
        .collect()
}
