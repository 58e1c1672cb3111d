//! Whole-word search.

const PUNCTUATION: &[char] = &[
    '.', ',', ':', ';', '?', '!', '¡', '¿', '"', '\'', '„', '“', '”', '»', '«', '›', '‹', '(', ')',
    '[', ']', '{', '}', '|', '-', '–', '—',
];

fn is_blank_or_punctuation(c: char) -> bool {
    c.is_whitespace() || PUNCTUATION.contains(&c)
}

/// Returns `true` if `word` appears in `text` as a separate word.
///
/// Both sides are trimmed first, and only the first occurrence of `word`
/// is examined. At the very start of `text` the word must be followed by
/// whitespace, at the very end preceded by whitespace. Elsewhere it must be
/// surrounded by whitespace or punctuation on both sides.
///
/// ```
/// use extrautils_text::as_word_in;
///
/// assert!(as_word_in("Ahoj", "Hmm, Ahoj and this"));
/// assert!(!as_word_in("Ahoj", "Hmm, Ahojand this"));
/// assert!(!as_word_in(" ", "anything"));
/// ```
pub fn as_word_in(word: &str, text: &str) -> bool {
    let word = word.trim();
    let text = text.trim();

    if word.is_empty() || text.len() < word.len() {
        return false;
    }
    if word == text {
        return true;
    }
    let Some(start) = text.find(word) else {
        return false;
    };
    let end = start + word.len();

    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();

    match (before, after) {
        (None, Some(next)) => next.is_whitespace(),
        (Some(prev), None) => prev.is_whitespace(),
        (Some(prev), Some(next)) => is_blank_or_punctuation(prev) && is_blank_or_punctuation(next),
        (None, None) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: &str = "Ahoj";

    #[test]
    fn blank_word_never_matches() {
        assert!(!as_word_in(" ", "Ahoj a nazdar"));
        assert!(!as_word_in("", ""));
    }

    #[test]
    fn absent_word() {
        assert!(!as_word_in(W, "Hmm"));
        assert!(!as_word_in(W, "Hmm, ahoj"));
    }

    #[test]
    fn whole_text() {
        assert!(as_word_in("Ahoj ", " Ahoj   "));
    }

    #[test]
    fn at_start() {
        assert!(as_word_in(W, "Ahoj a nazdar"));
        assert!(!as_word_in(W, "Ahoja nazdar"));
        assert!(!as_word_in(W, "Ahoj, nazdar"));
    }

    #[test]
    fn at_end() {
        assert!(as_word_in(W, "A on na to: Ahoj"));
        assert!(!as_word_in(W, "A on na to:Ahoj"));
    }

    #[test]
    fn in_middle() {
        assert!(as_word_in(W, "Hmm, Ahoj and this"));
        assert!(as_word_in(W, "Hmm (Ahoj) and this"));
        assert!(!as_word_in(W, "HmmAhoj and this"));
        assert!(!as_word_in(W, "Hmm, Ahojand this"));
        assert!(!as_word_in(W, "HmmAhojand this"));
    }

    #[test]
    fn only_first_occurrence_counts() {
        assert!(!as_word_in(W, "xAhoj Ahoj y"));
    }

    #[test]
    fn non_ascii_neighbours() {
        assert!(as_word_in("den", "«den» noc"));
        assert!(as_word_in("noc", "den – noc – den"));
    }
}
