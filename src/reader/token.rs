//! Module for extracting Lisp tokens from a string.

/// Split the input into its constituent tokens.
///
/// Whitespace, commas, and `;` comments are dropped.
/// Only ASCII whitespace (tab, newline, form feed, carriage return, space) separates
/// tokens; other Unicode spaces, like U+00A0, are ordinary symbol characters.
/// This never fails: malformed text, like an unterminated string,
/// still comes out as a token and is rejected by the parser.
pub fn tokenize(input: &str) -> Vec<&str> {
    let tokens: Vec<&str> = regex::token()
        .captures_iter(input)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|t| !t.is_empty() && !t.starts_with(';'))
        .collect();
    tracing::trace!("tokenized {} bytes into {} tokens", input.len(), tokens.len());
    tokens
}

mod regex {
    use regex::Regex;
    use std::sync::OnceLock;

    pub(super) fn token() -> &'static Regex {
        static TOKEN: OnceLock<Regex> = OnceLock::new();
        TOKEN.get_or_init(|| {
            // Leading separators (ASCII whitespace and commas), then one of:
            //  - the splice-unquote sigil
            //  - a single-character bracket or reader-macro sigil
            //  - a string: quote, then escaped pairs or non-quote/non-backslash characters,
            //    then an optional closing quote (checked later, by the parser)
            //  - a comment, to end of line
            //  - a run of anything else
            Regex::new(r#"[\t\n\f\r ,]*(~@|[\[\]{}()'`~^@]|"(?:\\.|[^\\"])*"?|;.*|[^\t\n\f\r \[\]{}('"`,;)]*)"#)
                .expect("could not compile regex for tokens")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_words() {
        assert_eq!(tokenize("this is a test"), ["this", "is", "a", "test"]);
        assert_eq!(
            tokenize(" this     is  \t a,,test\n"),
            ["this", "is", "a", "test"]
        );
    }

    #[test]
    fn quoted_run_is_one_token() {
        let input = r#"this is "another set of" tests"#;
        assert_eq!(
            tokenize(input),
            ["this", "is", r#""another set of""#, "tests"]
        );
    }

    #[test]
    fn brackets_split_without_space() {
        let input = r#"this is "another set of"(tests)"#;
        assert_eq!(
            tokenize(input),
            ["this", "is", r#""another set of""#, "(", "tests", ")"]
        );
        assert_eq!(
            tokenize("{a [b]}(c)"),
            ["{", "a", "[", "b", "]", "}", "(", "c", ")"]
        );
    }

    #[test]
    fn sigils() {
        assert_eq!(
            tokenize("'a `b ~c ~@d @e ^{} f"),
            ["'", "a", "`", "b", "~", "c", "~@", "d", "@", "e", "^", "{", "}", "f"]
        );
    }

    #[test]
    fn escaped_quotes_stay_inside() {
        let input = r#""say \"hi\"" next"#;
        assert_eq!(tokenize(input), [r#""say \"hi\"""#, "next"]);
    }

    #[test]
    fn unterminated_string_is_still_a_token() {
        assert_eq!(tokenize(r#"( "here! )"#), ["(", r#""here! )"#]);
    }

    #[test]
    fn comments_are_dropped() {
        assert_eq!(
            tokenize("(a ; the rest\n b) ; trailing"),
            ["(", "a", "b", ")"]
        );
        assert!(tokenize("; nothing but a comment").is_empty());
    }

    #[test]
    fn only_ascii_whitespace_separates() {
        assert_eq!(tokenize("a\u{a0}b c"), ["a\u{a0}b", "c"]);
        assert_eq!(tokenize("a\u{2003}(b)"), ["a\u{2003}", "(", "b", ")"]);
        // Vertical tab is not a separator either.
        assert_eq!(tokenize("a\u{b}b"), ["a\u{b}b"]);
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ,, \n\t").is_empty());
    }
}
