//! Shell argument escaping.
//!
//! Values that only contain characters from a conservative safe set are left
//! untouched. Everything else is wrapped in single quotes, with embedded
//! quotes written as `'\''`. The quoted form is then tidied so that a value
//! starting or ending with a quote does not carry empty `''` segments.

/// Characters that never need quoting.
const fn is_safe(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'/' | b'-')
}

/// Escape every item so it can be pasted into a POSIX shell command line.
#[must_use]
pub fn escape<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| escape_one(item.as_ref()))
        .collect()
}

/// Escape a single shell argument.
///
/// The empty string is returned as `''` so it survives as an argument.
/// Running it through the leading-pair stripping below would reduce it to an
/// empty string and silently drop the argument, so it is special-cased.
#[must_use]
pub fn escape_one(item: &str) -> String {
    if item.is_empty() {
        return String::from("''");
    }
    if item.bytes().all(is_safe) {
        return item.to_string();
    }

    let quoted = format!("'{}'", item.replace('\'', r"'\''"));

    // Leading `''` pairs come from a value that starts with a quote.
    let mut trimmed = quoted.as_str();
    while let Some(rest) = trimmed.strip_prefix("''") {
        trimmed = rest;
    }

    // An empty segment between two escaped quotes.
    trimmed.replace(r"\'''", r"\'")
}

/// Escape every item and join them with single spaces.
#[must_use]
pub fn join<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    escape(items).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_values_unchanged() {
        assert_eq!(
            escape(["main", "refs/heads/feature-1", "src/lib_rs", "ABC123"]),
            vec!["main", "refs/heads/feature-1", "src/lib_rs", "ABC123"]
        );
    }

    #[test]
    fn test_unsafe_values_quoted() {
        assert_eq!(escape_one("a b"), "'a b'");
        assert_eq!(escape_one("src/*.rs"), "'src/*.rs'");
        assert_eq!(escape_one("$HOME"), "'$HOME'");
        assert_eq!(escape_one("a.b"), "'a.b'");
        assert_eq!(escape_one("x;rm -rf /"), "'x;rm -rf /'");
    }

    #[test]
    fn test_embedded_quote() {
        assert_eq!(escape_one("it's"), r"'it'\''s'");
    }

    #[test]
    fn test_leading_quote() {
        assert_eq!(escape_one("'a"), r"\''a'");
    }

    #[test]
    fn test_trailing_quote() {
        assert_eq!(escape_one("a'"), r"'a'\'");
    }

    #[test]
    fn test_only_quotes() {
        assert_eq!(escape_one("'"), r"\'");
        assert_eq!(escape_one("''"), r"\'\'");
        assert_eq!(escape_one("'''"), r"\'\'\'");
    }

    #[test]
    fn test_consecutive_inner_quotes() {
        assert_eq!(escape_one("a''b"), r"'a'\'\''b'");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(escape_one(""), "''");
    }

    #[test]
    fn test_non_ascii_is_quoted() {
        assert_eq!(escape_one("café"), "'café'");
    }

    #[test]
    fn test_escape_preserves_order_and_length() {
        let input = vec!["a".to_string(), "b c".to_string(), "d".to_string()];
        let escaped = escape(&input);
        assert_eq!(escaped, vec!["a", "'b c'", "d"]);
    }

    #[test]
    fn test_join() {
        assert_eq!(
            join(["git", "diff", "main...feature x"]),
            "git diff 'main...feature x'"
        );
        assert_eq!(join(Vec::<String>::new()), "");
    }
}
