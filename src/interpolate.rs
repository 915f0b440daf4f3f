//! `{token}` placeholder substitution.
//!
//! A token is a `{` followed by the shortest run of characters up to the next
//! `}` on the same line (`\n`, `\r`, U+2028 and U+2029 end a line). Nested
//! braces are not supported: `{a{b}` is one token named `a{b`. Token text is
//! always matched literally, so braces and `|` inside a token never act as
//! pattern syntax.

use std::collections::HashMap;
use std::num::FpCategory;

/// Substitution arguments for [`crate::store::LangStore::get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Args {
    /// Named values; tokens without an entry become empty strings.
    Map(HashMap<String, String>),
    /// A single value that replaces every token regardless of its name.
    Scalar(String),
    /// A falsy scalar (`""`, `0`, `false`, NaN); substitution is skipped.
    Falsy,
}

impl Args {
    /// Whether these args count as absent.
    #[must_use]
    pub const fn is_falsy(&self) -> bool {
        matches!(self, Self::Falsy)
    }
}

impl From<HashMap<String, String>> for Args {
    fn from(map: HashMap<String, String>) -> Self {
        Self::Map(map)
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Args {
    fn from(pairs: [(K, V); N]) -> Self {
        Self::Map(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<&str> for Args {
    fn from(value: &str) -> Self {
        if value.is_empty() { Self::Falsy } else { Self::Scalar(value.to_string()) }
    }
}

impl From<String> for Args {
    fn from(value: String) -> Self {
        if value.is_empty() { Self::Falsy } else { Self::Scalar(value) }
    }
}

impl From<bool> for Args {
    fn from(value: bool) -> Self {
        if value { Self::Scalar(value.to_string()) } else { Self::Falsy }
    }
}

impl From<char> for Args {
    fn from(value: char) -> Self {
        Self::Scalar(value.to_string())
    }
}

/// Integers convert through their `Display` form; zero is falsy.
macro_rules! impl_int_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Args {
                fn from(value: $ty) -> Self {
                    if value == 0 { Self::Falsy } else { Self::Scalar(value.to_string()) }
                }
            }
        )*
    };
}

impl_int_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Floats convert through their `Display` form; zero and NaN are falsy.
macro_rules! impl_float_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Args {
                fn from(value: $ty) -> Self {
                    if matches!(value.classify(), FpCategory::Zero | FpCategory::Nan) {
                        Self::Falsy
                    } else {
                        Self::Scalar(value.to_string())
                    }
                }
            }
        )*
    };
}

impl_float_from!(f32, f64);

/// Byte spans `(start, end)` of every token in `value`, left to right.
///
/// `end` is exclusive and includes the closing brace.
fn token_spans(value: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(offset) = value.get(pos..).and_then(|rest| rest.find('{')) {
        let start = pos + offset;
        let Some(body) = value.get(start + 1..) else {
            break;
        };
        let Some(close) = body.find(['}', '\n', '\r', '\u{2028}', '\u{2029}']) else {
            break;
        };

        if body.get(close..).is_some_and(|rest| rest.starts_with('}')) {
            let end = start + 1 + close + 1;
            spans.push((start, end));
            pos = end;
        } else {
            // line break before the closing brace; retry from the next `{`
            pos = start + 1;
        }
    }

    spans
}

/// All token occurrences in `value`, braces included, in order of appearance.
///
/// # Examples
/// ```
/// use lang_store::interpolate::find_tokens;
///
/// assert_eq!(find_tokens("I saw {count} {animals}"), vec!["{count}", "{animals}"]);
/// ```
#[must_use]
pub fn find_tokens(value: &str) -> Vec<&str> {
    token_spans(value).into_iter().filter_map(|(start, end)| value.get(start..end)).collect()
}

/// Substitute `args` into `template`.
///
/// With [`Args::Map`], each distinct token is replaced everywhere in the
/// working string, in order of first appearance. With [`Args::Scalar`], every
/// token occurrence is replaced in a single pass. [`Args::Falsy`] leaves the
/// template untouched.
#[must_use]
pub fn interpolate(template: &str, args: &Args) -> String {
    match args {
        Args::Map(map) => replace_named(template, map),
        Args::Scalar(value) => replace_all_tokens(template, value),
        Args::Falsy => template.to_string(),
    }
}

/// Named replacement, one token at a time over the whole string.
fn replace_named(template: &str, map: &HashMap<String, String>) -> String {
    let mut distinct: Vec<&str> = Vec::new();
    for token in find_tokens(template) {
        if !distinct.contains(&token) {
            distinct.push(token);
        }
    }

    let mut result = template.to_string();
    for token in distinct {
        let name = token.get(1..token.len() - 1).unwrap_or_default();
        let replacement = map.get(name).map_or("", String::as_str);
        result = result.replace(token, replacement);
    }
    result
}

/// Replace every token span with `value`.
fn replace_all_tokens(template: &str, value: &str) -> String {
    let mut result = String::with_capacity(template.len());
    let mut last = 0;

    for (start, end) in token_spans(template) {
        result.push_str(template.get(last..start).unwrap_or_default());
        result.push_str(value);
        last = end;
    }
    result.push_str(template.get(last..).unwrap_or_default());
    result
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::none("plain text", vec![])]
    #[case::two("I saw {count} {animals}", vec!["{count}", "{animals}"])]
    #[case::repeated("{a} and {a}", vec!["{a}", "{a}"])]
    #[case::empty_token("{}", vec!["{}"])]
    #[case::nested_open("{a{b}", vec!["{a{b}"])]
    #[case::unclosed("{open", vec![])]
    #[case::pipe("{count|plural}", vec!["{count|plural}"])]
    #[case::line_break("{broken\n} {ok}", vec!["{ok}"])]
    #[case::line_separator("{broken\u{2028}} {ok}", vec!["{ok}"])]
    #[case::paragraph_separator("{broken\u{2029}} {ok}", vec!["{ok}"])]
    #[case::stray_close("} {x}", vec!["{x}"])]
    fn test_find_tokens(#[case] value: &str, #[case] expected: Vec<&str>) {
        assert_eq!(find_tokens(value), expected);
    }

    #[googletest::test]
    fn test_interpolate_named() {
        let args = Args::from([("count", "3"), ("animals", "cats")]);

        expect_that!(interpolate("I saw {count} {animals}", &args), eq("I saw 3 cats"));
    }

    #[googletest::test]
    fn test_interpolate_named_missing_become_empty() {
        let args = Args::Map(HashMap::new());

        expect_that!(interpolate("{hello} {world}", &args), eq(" "));
    }

    #[googletest::test]
    fn test_interpolate_named_replaces_every_occurrence() {
        let args = Args::from([("name", "Ana")]);

        expect_that!(interpolate("{name}, {name}!", &args), eq("Ana, Ana!"));
    }

    #[googletest::test]
    fn test_interpolate_named_literal_special_characters() {
        let args = Args::from([("a|b", "pipe"), ("x{y", "brace")]);

        expect_that!(interpolate("[{a|b}] [{x{y}]", &args), eq("[pipe] [brace]"));
    }

    #[googletest::test]
    fn test_interpolate_named_leaves_plain_text() {
        let args = Args::from([("unused", "x")]);

        expect_that!(interpolate("no tokens here", &args), eq("no tokens here"));
    }

    #[rstest]
    #[case::string(Args::from("something"), "I saw something something")]
    #[case::number(Args::from(7_i32), "I saw 7 7")]
    #[case::float(Args::from(1.5_f64), "I saw 1.5 1.5")]
    #[case::truthy_bool(Args::from(true), "I saw true true")]
    #[case::zero_text(Args::from("0"), "I saw 0 0")]
    fn test_interpolate_scalar(#[case] args: Args, #[case] expected: &str) {
        assert_that!(interpolate("I saw {count} {animals}", &args), eq(expected));
    }

    #[rstest]
    #[case::empty_str(Args::from(""))]
    #[case::empty_string(Args::from(String::new()))]
    #[case::zero(Args::from(0_i32))]
    #[case::zero_unsigned(Args::from(0_u64))]
    #[case::zero_float(Args::from(0.0_f64))]
    #[case::nan(Args::from(f64::NAN))]
    #[case::false_bool(Args::from(false))]
    fn test_falsy_scalars(#[case] args: Args) {
        assert_that!(args.is_falsy(), eq(true));
        assert_that!(interpolate("I saw {count} {animals}", &args), eq("I saw {count} {animals}"));
    }

    #[googletest::test]
    fn test_interpolate_scalar_is_single_pass() {
        let args = Args::from("{x}");

        expect_that!(interpolate("{a}-{b}", &args), eq("{x}-{x}"));
    }
}
