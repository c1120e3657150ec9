//! Escape-aware checks over string quoting.
//!
//! In both scanners a backslash escapes the next character,
//! so `\"` is not a quote and `\\` is not an escape.

/// Coarse check: are the unescaped quote characters in `s` paired up?
///
/// This looks at the whole string, so `"a" "b"` is balanced.
/// It says nothing about whether `s` is a single string literal;
/// for that, see [`properly_quoted_string`].
pub fn balanced_quotes(s: &str) -> bool {
    let mut escaped = false;
    let mut open = false;
    for ch in s.chars() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '"' {
            open = !open;
        }
    }
    !open
}

/// Strict check: is `s` exactly one string literal?
///
/// It must start with `"`, and end at the first unescaped `"` after that,
/// with nothing following.
pub fn properly_quoted_string(s: &str) -> bool {
    let mut chars = s.chars();
    if chars.next() != Some('"') {
        return false;
    }
    let mut escaped = false;
    let mut closed = false;
    for ch in chars {
        if closed {
            // Trailing content after the closing quote.
            return false;
        }
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '"' {
            closed = true;
        }
    }
    closed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced() {
        for s in [
            "awefawef",
            r#""awefawef""#,
            r#""awefawef" "waef""#,
            r#""awefawef \"waef""#,
            r#""\\""#,
            "",
        ] {
            assert!(balanced_quotes(s), "{s} should be balanced");
        }
    }

    #[test]
    fn unbalanced() {
        for s in [r#"""#, r#""awefawef" \"waef""#, r#""\\\""#, r#"a "b"""#] {
            assert!(!balanced_quotes(s), "{s} should not be balanced");
        }
    }

    #[test]
    fn properly_quoted() {
        for s in [r#""Testing""#, r#""Testing\"""#, r#""\n""#, r#""""#, r#""\\""#] {
            assert!(properly_quoted_string(s), "{s} should be properly quoted");
        }
    }

    #[test]
    fn not_properly_quoted() {
        for s in [
            "Testing",
            r#"""#,
            r#""Testing"#,
            r#""Testing"test"#,
            r#""Testing\""#,
            r#""a" "b""#,
            "",
        ] {
            assert!(
                !properly_quoted_string(s),
                "{s} should not be properly quoted"
            );
        }
    }
}
