//! rutem - string-transformation primitives for URI template expansion
//!
//! A small toolkit of pure, stateless primitives consumed by a URI-template
//! expansion engine. The engine itself lives elsewhere; this crate provides
//! exactly four narrow operations with fixed contracts:
//!
//! - [`tokenize`] — lazily split a template string into alternating literal
//!   and rule-match [`Segment`]s
//! - [`encode`] / [`decode`] — byte-exact percent-encoding codec
//! - [`to_param`] — value-to-string coercion with a capability fallback chain
//! - [`to_mapping`] — pair-array detection and key/value normalization
//!
//! # Architecture
//!
//! The type system splits injected rules from erased data:
//!
//! - `regex::Regex` — the injected matching rule, for both the tokenizer
//!   and the codec's unsafe-character set (linear-time matching)
//! - [`Value`] — erased expansion value (primitives + extensible Custom variant)
//! - [`CustomValue`] — extension trait carrying the optional coercion capabilities
//! - [`Segment`] — literal or rule-match unit produced while scanning
//!
//! All four operations are pure functions over immutable input; none depends
//! on another, and concurrent calls need no coordination. The expansion
//! engine composes them externally: tokenize the template, coerce the
//! variable values, normalize composites, percent-encode the results.
//!
//! # Example
//!
//! ```
//! use regex::Regex;
//! use rutem::{encode, to_param, tokenize, Segment, Value};
//!
//! let rule = Regex::new(r"\{(\w+)\}").unwrap();
//! let template = "/users/{id}/avatar";
//!
//! let rendered: String = tokenize(&rule, template)
//!     .map(|segment| match segment {
//!         Segment::Literal(text) => text.to_string(),
//!         Segment::Match(_) => encode(&to_param(&Value::Int(42)).unwrap()),
//!     })
//!     .collect();
//!
//! assert_eq!(rendered, "/users/42/avatar");
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod codec;
mod coerce;
mod pairs;
mod segment;
mod tokenize;
mod value;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use codec::{decode, decode_lossy, default_unsafe_rule, encode, encode_with};
pub use coerce::to_param;
pub use pairs::{is_pair_array, looks_like_pair_array, to_mapping};
pub use segment::{MatchSegment, Segment};
pub use tokenize::{tokenize, tokenize_all, Segments};
pub use value::{CustomValue, Value};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use rutem::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        CoerceError,
        // Traits
        CustomValue,
        // Core types
        MatchSegment,
        Segment,
        Segments,
        Value,
        // Operations
        decode,
        decode_lossy,
        default_unsafe_rule,
        encode,
        encode_with,
        is_pair_array,
        looks_like_pair_array,
        to_mapping,
        to_param,
        tokenize,
        tokenize_all,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from value coercion — the toolkit's only error kind.
///
/// Every other operation is total: the tokenizer degrades to a literal
/// tail, the normalizer returns its input unchanged, the decoder passes
/// malformed tokens through.
#[derive(Debug, Clone, PartialEq)]
pub enum CoerceError {
    /// The value exposes no usable string form.
    ///
    /// Raised when a value has neither coercion capability, or when a
    /// capability exists but failed internally — callers see this one
    /// variant for "could not get a string", never the underlying failure.
    Unconvertable {
        /// The offending value, carried for diagnostics only — never use
        /// it to recover a string.
        value: Value,
    },
}

impl std::fmt::Display for CoerceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unconvertable { value } => {
                write!(
                    f,
                    "cannot convert \"{}\" value into a parameter string: {value:?}",
                    value.type_name()
                )
            }
        }
    }
}

impl std::error::Error for CoerceError {}
