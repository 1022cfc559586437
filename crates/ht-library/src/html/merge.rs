//! Merging of attribute values that hold token lists.
//!
//! Some attributes, like `class`, describe a set of tokens rather than a single
//! value. When such an attribute is given more than once for the same element,
//! the values are combined instead of the later one replacing the earlier one.

use std::collections::HashSet;

use ecow::EcoString;

/// How the tokens of a mergeable attribute value are separated.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Split {
    /// Any Unicode whitespace.
    Whitespace,
    /// Any of the given characters.
    Chars(&'static [char]),
}

impl Split {
    fn matches(self, c: char) -> bool {
        match self {
            Self::Whitespace => c.is_whitespace(),
            Self::Chars(chars) => chars.contains(&c),
        }
    }
}

/// How to split and re-join the tokens of a mergeable attribute.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Delimiter {
    /// Separates tokens in incoming values.
    pub split: Split,
    /// Put between tokens of the merged value.
    pub join: &'static str,
}

impl Delimiter {
    /// Space-separated tokens, as in `class`.
    pub const SPACE: Self = Self { split: Split::Whitespace, join: " " };

    /// Comma-separated tokens, as in a viewport `content`.
    pub const COMMA: Self = Self { split: Split::Chars(&[',']), join: ", " };
}

/// Decides which attribute keys are merged, and how.
///
/// Keys without a rule use last-write-wins replacement.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MergePolicy<'a> {
    rules: &'a [(&'a str, Delimiter)],
}

impl MergePolicy<'static> {
    /// Merges `class` and `content`.
    pub const STANDARD: Self = Self {
        rules: &[("class", Delimiter::SPACE), ("content", Delimiter::COMMA)],
    };

    /// Merges nothing.
    pub const NONE: Self = Self { rules: &[] };
}

impl<'a> MergePolicy<'a> {
    /// Create a policy from a table of keys and their delimiters.
    pub const fn new(rules: &'a [(&'a str, Delimiter)]) -> Self {
        Self { rules }
    }

    /// The delimiter for a key, if the key's values are merged.
    pub fn delimiter(&self, key: &str) -> Option<&Delimiter> {
        self.rules.iter().find(|(k, _)| *k == key).map(|(_, d)| d)
    }

    /// Combine the existing value of an attribute with a new one.
    pub fn combine(&self, key: &str, old: &str, new: &str) -> EcoString {
        match self.delimiter(key) {
            Some(delim) => {
                let merged = merge(old, new, delim);
                log::trace!("merged `{key}` value {new:?} into {old:?}: {merged:?}");
                merged
            }
            None => new.into(),
        }
    }
}

impl Default for MergePolicy<'static> {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Merge two token lists into one, keeping each distinct token once.
///
/// Tokens of `old` come first, followed by new tokens of `new`, each in the
/// order they were first seen. Tokens are trimmed and empty tokens dropped. If
/// either side is empty, the other one is returned trimmed.
pub fn merge(old: &str, new: &str, delim: &Delimiter) -> EcoString {
    if old.is_empty() {
        return new.trim().into();
    }
    if new.is_empty() {
        return old.trim().into();
    }

    let split = delim.split;
    let tokens = old
        .split(move |c| split.matches(c))
        .chain(new.split(move |c| split.matches(c)))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    let mut seen = HashSet::new();
    let mut out = EcoString::new();
    for token in tokens {
        if !seen.insert(token) {
            continue;
        }
        if !out.is_empty() {
            out.push_str(delim.join);
        }
        out.push_str(token);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn test(key: &str, old: &str, new: &str, expected: &str) {
        assert_eq!(MergePolicy::STANDARD.combine(key, old, new), expected);
    }

    #[test]
    fn test_merge_class() {
        test("class", "", "x", "x");
        test("class", "x", "", "x");
        test("class", "a b", "b c", "a b c");
        test("class", "a c", "a b", "a c b");
        test("class", "  a ", "", "a");
        test("class", "", "  a  b ", "a  b");
        test("class", "a\tb\n", "c  a", "a b c");
    }

    #[test]
    fn test_merge_content() {
        test("content", "a", "a, b", "a, b");
        test("content", "width=device-width", "initial-scale=1.0", "width=device-width, initial-scale=1.0");
        test("content", "a,,b", " b ,c", "a, b, c");
    }

    #[test]
    fn test_merge_is_idempotent() {
        test("class", "a b", "a b", "a b");
        test("content", "a, b", "a, b", "a, b");
        let once = MergePolicy::STANDARD.combine("class", "x y", "y z");
        test("class", &once, &once, &once);
    }

    #[test]
    fn test_other_keys_replace() {
        test("id", "a", "b", "b");
        test("type", "text", "", "");
        assert_eq!(MergePolicy::NONE.combine("class", "a", "b"), "b");
    }

    #[test]
    fn test_custom_policy() {
        const RULES: &[(&str, Delimiter)] =
            &[("rel", Delimiter::SPACE), ("accept", Delimiter::COMMA)];
        let policy = MergePolicy::new(RULES);
        assert_eq!(policy.combine("rel", "noopener", "noreferrer"), "noopener noreferrer");
        assert_eq!(policy.combine("accept", "image/png", "image/jpeg"), "image/png, image/jpeg");
        assert_eq!(policy.combine("class", "a", "b"), "b");
        assert!(policy.delimiter("content").is_none());
    }
}
