/// Splits `s` on any of the characters in `delims`.
///
/// Runs of adjacent delimiters are collapsed and delimiters at either end
/// are ignored, so the returned tokens are never empty.
///
/// # Examples
///
/// ```
/// use umbra_util::tokenize;
///
/// assert_eq!(tokenize("  a,,b  c", " ,"), ["a", "b", "c"]);
/// ```
pub fn tokenize<'a>(s: &'a str, delims: &str) -> Vec<&'a str> {
    s.split(|c: char| delims.contains(c))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Removes leading and trailing whitespace in place.
pub fn trim_in_place(s: &mut String) {
    s.truncate(s.trim_end().len());
    let leading = s.len() - s.trim_start().len();
    s.drain(..leading);
}

/// Lowercases `s` in place.
pub fn lowercase_in_place(s: &mut String) {
    s.make_ascii_lowercase();
}

/// Returns a lowercased copy of `s`.
pub fn lowercase(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Uppercases `s` in place.
pub fn uppercase_in_place(s: &mut String) {
    s.make_ascii_uppercase();
}

/// Whether `line` is empty or a `#` comment.
pub fn is_blank_or_comment(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_collapses_delimiter_runs() {
        assert_eq!(tokenize("  a,,b  c", " ,"), ["a", "b", "c"]);
    }

    #[test]
    fn tokenize_of_only_delimiters_is_empty() {
        assert!(tokenize(", ,, ", " ,").is_empty());
        assert!(tokenize("", " ,").is_empty());
    }

    #[test]
    fn tokenize_without_delimiters_returns_the_input() {
        assert_eq!(tokenize("plain", " ,"), ["plain"]);
    }

    #[test]
    fn trim_strips_both_ends() {
        let mut s = String::from(" \t value \n");
        trim_in_place(&mut s);
        assert_eq!(s, "value");

        let mut untouched = String::from("value");
        trim_in_place(&mut untouched);
        assert_eq!(untouched, "value");

        let mut blank = String::from("  \t ");
        trim_in_place(&mut blank);
        assert_eq!(blank, "");
    }

    #[test]
    fn case_folding() {
        let mut s = String::from("MixedCase-42");
        lowercase_in_place(&mut s);
        assert_eq!(s, "mixedcase-42");

        uppercase_in_place(&mut s);
        assert_eq!(s, "MIXEDCASE-42");

        assert_eq!(lowercase("HeLLo"), "hello");
    }

    #[test]
    fn blank_and_comment_lines() {
        assert!(is_blank_or_comment(""));
        assert!(is_blank_or_comment("# a comment"));
        assert!(!is_blank_or_comment("key = value"));
        assert!(!is_blank_or_comment(" # indented comments do not count"));
    }
}
