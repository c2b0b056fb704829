/// Tokenizer — raw text to word tokens, plus the token predicates the
/// generator relies on.

/// Split raw text into tokens.
///
/// Lines are split on `'\n'`, then each line on single `' '` characters.
/// Nothing is trimmed or filtered: two adjacent spaces, a leading space or
/// an empty line all yield empty-string tokens, and a tab stays inside the
/// token it touches. Empty tokens take part in windows like any other token.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| line.split(' '))
        .map(str::to_owned)
        .collect()
}

/// True if any character of the token is ASCII punctuation.
///
/// This is a plain membership test: apostrophes and hyphens count, so
/// `"don't"` ends a sentence just like `"ran."` does.
pub fn contains_punctuation(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_punctuation())
}

/// True if the token begins with an uppercase letter.
pub fn is_sentence_start(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_basic() {
        let tokens = tokenize("hi there mary");
        assert_eq!(tokens, vec!["hi", "there", "mary"]);
    }

    #[test]
    fn tokenize_keeps_attached_punctuation() {
        let tokens = tokenize("Hello, juanita.");
        assert_eq!(tokens, vec!["Hello,", "juanita."]);
    }

    #[test]
    fn tokenize_flattens_lines_in_order() {
        let tokens = tokenize("one two\nthree\nfour five");
        assert_eq!(tokens, vec!["one", "two", "three", "four", "five"]);
    }

    #[test]
    fn tokenize_keeps_empty_tokens() {
        assert_eq!(tokenize("a  b"), vec!["a", "", "b"]);
        assert_eq!(tokenize("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(tokenize("end\n"), vec!["end", ""]);
    }

    #[test]
    fn tokenize_does_not_split_tabs() {
        assert_eq!(tokenize("a\tb c"), vec!["a\tb", "c"]);
    }

    #[test]
    fn tokenize_empty_input() {
        // str::split always yields at least one piece
        assert_eq!(tokenize(""), vec![""]);
    }

    #[test]
    fn punctuation_predicate() {
        assert!(contains_punctuation("ran."));
        assert!(contains_punctuation("juanita,"));
        assert!(contains_punctuation("don't"));
        assert!(contains_punctuation("well-known"));
        assert!(contains_punctuation("\"quoted"));
        assert!(!contains_punctuation("plain"));
        assert!(!contains_punctuation(""));
        assert!(!contains_punctuation("café"));
    }

    #[test]
    fn sentence_start_predicate() {
        assert!(is_sentence_start("The"));
        assert!(is_sentence_start("Émile"));
        assert!(!is_sentence_start("the"));
        assert!(!is_sentence_start(""));
        assert!(!is_sentence_start("\"The"));
        assert!(!is_sentence_start("42"));
    }
}
