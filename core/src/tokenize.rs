//! Lazy tokenizer — splits a string into literal and rule-match segments
//!
//! The scan keeps a cursor over the unconsumed suffix of the input and
//! searches the rule against it: the unmatched prefix becomes a
//! [`Segment::Literal`], the match a [`Segment::Match`], and the scan
//! continues after the match. Empty literals are suppressed everywhere, so
//! the reconstruction invariant (concatenating all segments yields the
//! input) holds with no empty `Literal` ever emitted.
//!
//! # Zero-width matches
//!
//! A match that consumes no characters leaves the suffix unchanged, so
//! re-searching it would loop forever. The scan special-cases this: the
//! zero-width match is emitted, the whole remainder follows as one final
//! literal, and the scan terminates without searching again.

use crate::{MatchSegment, Segment};
use regex::Regex;
use std::collections::VecDeque;

/// Split `text` into literal and match segments against `rule`.
///
/// Lazy and restartable: the returned iterator performs one rule search per
/// pulled segment (buffering at most the segments that search produced), and
/// calling `tokenize` again with the same arguments yields the same
/// sequence. Single-consumer: one cursor per invocation.
///
/// # Example
///
/// ```
/// use regex::Regex;
/// use rutem::{tokenize, Segment};
///
/// let rule = Regex::new(r"\{(\w+)\}").unwrap();
/// let segments: Vec<_> = tokenize(&rule, "/users/{id}/posts").collect();
///
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[0], Segment::Literal("/users/"));
/// assert_eq!(segments[1].as_str(), "{id}");
/// assert_eq!(segments[2], Segment::Literal("/posts"));
/// ```
pub fn tokenize<'r, 't>(rule: &'r Regex, text: &'t str) -> Segments<'r, 't> {
    Segments {
        rule,
        remaining: Some(text),
        queued: VecDeque::new(),
    }
}

/// Eagerly materialize all segments of `text`.
///
/// Equivalent to `tokenize(rule, text).collect()`.
#[must_use]
pub fn tokenize_all<'t>(rule: &Regex, text: &'t str) -> Vec<Segment<'t>> {
    tokenize(rule, text).collect()
}

/// Lazy iterator over [`Segment`]s. See [`tokenize`].
#[derive(Debug, Clone)]
pub struct Segments<'r, 't> {
    rule: &'r Regex,
    /// Unconsumed suffix of the input; `None` once the scan has terminated.
    remaining: Option<&'t str>,
    /// Segments computed by the last search step but not yet pulled.
    /// Holds at most two entries (a match plus a zero-width tail literal).
    queued: VecDeque<Segment<'t>>,
}

impl<'r, 't> Iterator for Segments<'r, 't> {
    type Item = Segment<'t>;

    fn next(&mut self) -> Option<Segment<'t>> {
        if let Some(segment) = self.queued.pop_front() {
            return Some(segment);
        }
        let rest = self.remaining.take()?;

        let Some(caps) = self.rule.captures(rest) else {
            // No match: the whole remainder is one final literal.
            return (!rest.is_empty()).then_some(Segment::Literal(rest));
        };
        let Some(whole) = caps.get(0) else {
            // Group 0 always participates in a match; treat absence as no match.
            return (!rest.is_empty()).then_some(Segment::Literal(rest));
        };

        let pre = &rest[..whole.start()];
        self.queued
            .push_back(Segment::Match(MatchSegment::from_captures(&caps)));

        if whole.start() == whole.end() {
            // Zero-width match: searching the remainder again would find the
            // same match forever. Emit it as one final literal and stop.
            let post = &rest[whole.end()..];
            if !post.is_empty() {
                self.queued.push_back(Segment::Literal(post));
            }
        } else {
            self.remaining = Some(&rest[whole.end()..]);
        }

        if pre.is_empty() {
            self.queued.pop_front()
        } else {
            Some(Segment::Literal(pre))
        }
    }
}
