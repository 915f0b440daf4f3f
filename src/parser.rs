//! Flat language-file parser.
//!
//! The format is one `key = value` entry per line. There is no comment syntax
//! and no escaping; lines without a usable `=` are skipped.

use crate::types::LocaleTable;

/// Parse raw language-file text into a table.
///
/// Never fails: malformed lines are dropped and later duplicates win.
///
/// # Examples
/// ```
/// use lang_store::parser::parse;
///
/// let table = parse("greeting = Hello\n\nfarewell = Bye");
/// assert_eq!(table.get("greeting"), Some(&"Hello".to_string()));
/// assert_eq!(table.get("farewell"), Some(&"Bye".to_string()));
/// ```
#[must_use]
pub fn parse(raw: &str) -> LocaleTable {
    let collapsed = raw.replace("\n\n", "\n");

    let mut table = LocaleTable::new();
    for line in collapsed.lines() {
        if let Some((key, value)) = parse_line(line) {
            table.insert(key.to_string(), value.to_string());
        }
    }
    table
}

/// Split one line into `(key, value)`.
///
/// The key is the shortest non-empty prefix followed by optional spaces and
/// `=`, so a leading `=` belongs to the key. Tabs before `=` stay in the key.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let first_len = line.chars().next()?.len_utf8();
    let eq_pos = first_len + line.get(first_len..)?.find('=')?;

    let head = line.get(..eq_pos)?;
    let trimmed = head.trim_end_matches(' ');
    let key = if trimmed.is_empty() { head.get(..first_len)? } else { trimmed };
    let value = line.get(eq_pos + 1..)?.trim();

    Some((key, value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[googletest::test]
    fn test_parse_collapses_blank_lines() {
        let table = parse("key1 = value1\n\nkey2 = value2");

        expect_that!(table.get("key1"), some(eq(&"value1".to_string())));
        expect_that!(table.get("key2"), some(eq(&"value2".to_string())));
        expect_that!(table.len(), eq(2));
    }

    #[googletest::test]
    fn test_parse_skips_lines_without_equals() {
        let table = parse("valid = value\ninvalid line\nanother = value");

        expect_that!(table.get("valid"), some(eq(&"value".to_string())));
        expect_that!(table.get("another"), some(eq(&"value".to_string())));
        expect_that!(table.contains_key("invalid line"), eq(false));
        expect_that!(table.len(), eq(2));
    }

    #[googletest::test]
    fn test_parse_last_duplicate_wins() {
        let table = parse("title = First\ntitle = Second");

        expect_that!(table.get("title"), some(eq(&"Second".to_string())));
    }

    #[googletest::test]
    fn test_parse_empty_input() {
        expect_that!(parse("").is_empty(), eq(true));
        expect_that!(parse("\n\n\n").is_empty(), eq(true));
    }

    #[googletest::test]
    fn test_parse_crlf_lines() {
        let table = parse("a = one\r\nb = two\r\n");

        expect_that!(table.get("a"), some(eq(&"one".to_string())));
        expect_that!(table.get("b"), some(eq(&"two".to_string())));
    }

    #[rstest]
    #[case::spaced("key = value", Some(("key", "value")))]
    #[case::tight("key=value", Some(("key", "value")))]
    #[case::tab_before_equals("key\t= v", Some(("key\t", "v")))]
    #[case::space_then_tab("key \t = v", Some(("key \t", "v")))]
    #[case::tab_after_equals("key =\tvalue  ", Some(("key", "value")))]
    #[case::empty_value("key =", Some(("key", "")))]
    #[case::equals_in_value("url = a=b", Some(("url", "a=b")))]
    #[case::leading_equals("=a = b", Some(("=a", "b")))]
    #[case::only_equals("=", None)]
    #[case::space_key("  = v", Some((" ", "v")))]
    #[case::leading_space_kept("  key = v", Some(("  key", "v")))]
    #[case::no_equals("just text", None)]
    #[case::empty("", None)]
    #[case::multibyte("挨拶 = こんにちは", Some(("挨拶", "こんにちは")))]
    #[case::braces("msg = I saw {count} {animals}", Some(("msg", "I saw {count} {animals}")))]
    fn test_parse_line(#[case] line: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(parse_line(line), expected);
    }
}
