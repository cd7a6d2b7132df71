//! `Segment` — Literal or rule-match units produced while scanning a string
//!
//! Segments borrow from the scanned input; concatenating
//! [`Segment::as_str`] over a full scan reconstructs the input exactly.
//! See [`tokenize`](crate::tokenize) for the producer.

use regex::Captures;

/// One unit of a tokenized string.
///
/// # Example
///
/// ```
/// use regex::Regex;
/// use rutem::{tokenize, Segment};
///
/// let rule = Regex::new(r"\{(\w+)\}").unwrap();
/// let segments: Vec<_> = tokenize(&rule, "/users/{id}").collect();
///
/// assert_eq!(segments[0], Segment::Literal("/users/"));
/// assert_eq!(segments[1].as_str(), "{id}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'t> {
    /// A run of the input that did not match the rule. Never empty.
    Literal(&'t str),
    /// A match against the configured rule.
    Match(MatchSegment<'t>),
}

impl<'t> Segment<'t> {
    /// The underlying text of this segment.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'t str {
        match self {
            Self::Literal(text) => text,
            Self::Match(m) => m.text(),
        }
    }

    /// Returns `true` if this is a literal segment.
    #[inline]
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Returns `true` if this is a match segment.
    #[inline]
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }
}

/// A single rule match: the matched substring plus its capture groups.
///
/// Group texts are recorded so callers can identify which rule-group fired
/// even after the iterator has moved on.
///
/// # Example
///
/// ```
/// use regex::Regex;
/// use rutem::{tokenize, Segment};
///
/// let rule = Regex::new(r"\{(\w+)\}").unwrap();
/// let segments: Vec<_> = tokenize(&rule, "{id}").collect();
///
/// let Segment::Match(m) = &segments[0] else { panic!("expected a match") };
/// assert_eq!(m.text(), "{id}");
/// assert_eq!(m.group(1), Some("id"));
/// assert_eq!(m.fired_group(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSegment<'t> {
    text: &'t str,
    groups: Vec<Option<&'t str>>,
}

impl<'t> MatchSegment<'t> {
    pub(crate) fn from_captures(caps: &Captures<'t>) -> Self {
        Self {
            text: caps.get(0).map_or("", |m| m.as_str()),
            groups: caps.iter().skip(1).map(|g| g.map(|m| m.as_str())).collect(),
        }
    }

    /// The full matched substring.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// The text of capture group `index`, using the rule's 1-based group
    /// numbering. Group 0 is the whole match.
    ///
    /// Returns `None` for groups that did not participate in the match and
    /// for indices beyond the rule's group count.
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&'t str> {
        match index {
            0 => Some(self.text),
            n => self.groups.get(n - 1).copied().flatten(),
        }
    }

    /// All capture groups in rule order, starting at group 1.
    #[inline]
    #[must_use]
    pub fn groups(&self) -> &[Option<&'t str>] {
        &self.groups
    }

    /// The 1-based index of the first capture group that participated in
    /// the match, identifying which alternative of the rule fired.
    ///
    /// `None` when the rule has no capture groups or none participated.
    #[must_use]
    pub fn fired_group(&self) -> Option<usize> {
        self.groups.iter().position(Option::is_some).map(|i| i + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn capture<'t>(pattern: &str, text: &'t str) -> MatchSegment<'t> {
        let rule = Regex::new(pattern).unwrap();
        let caps = rule.captures(text).expect("pattern should match");
        MatchSegment::from_captures(&caps)
    }

    #[test]
    fn as_str_covers_both_variants() {
        assert_eq!(Segment::Literal("abc").as_str(), "abc");
        let m = capture(r"\d+", "a12b");
        assert_eq!(Segment::Match(m).as_str(), "12");
    }

    #[test]
    fn variant_predicates() {
        let literal = Segment::Literal("x");
        assert!(literal.is_literal());
        assert!(!literal.is_match());

        let m = Segment::Match(capture("x", "x"));
        assert!(m.is_match());
        assert!(!m.is_literal());
    }

    #[test]
    fn group_zero_is_the_whole_match() {
        let m = capture(r"\{(\w+)\}", "{name}");
        assert_eq!(m.group(0), Some("{name}"));
        assert_eq!(m.group(1), Some("name"));
        assert_eq!(m.group(2), None);
    }

    #[test]
    fn fired_group_identifies_the_alternative() {
        let m = capture(r"(foo)|(bar)", "bar");
        assert_eq!(m.group(1), None);
        assert_eq!(m.group(2), Some("bar"));
        assert_eq!(m.fired_group(), Some(2));
    }

    #[test]
    fn fired_group_is_none_without_captures() {
        let m = capture(r"\d+", "42");
        assert!(m.groups().is_empty());
        assert_eq!(m.fired_group(), None);
    }
}
