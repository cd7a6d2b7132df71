//! Percent-encoding codec over raw bytes
//!
//! [`encode`] replaces every character matched by an unsafe-character rule
//! with one `%XX` token per UTF-8 byte of that character; [`decode`] is the
//! byte-exact inverse. Encoding operates on raw bytes, never on decoded
//! text, so multi-byte characters become a run of `%XX` tokens and
//! `decode(encode(s))` reproduces the original byte sequence for any input
//! under the default rule.

use regex::Regex;
use std::sync::OnceLock;

const UPPERHEX: &[u8; 16] = b"0123456789ABCDEF";

static DEFAULT_UNSAFE: OnceLock<Regex> = OnceLock::new();

/// The default unsafe-character rule: everything outside `[A-Za-z0-9\-._]`.
///
/// Compiled once and shared; [`encode`] uses it implicitly.
pub fn default_unsafe_rule() -> &'static Regex {
    DEFAULT_UNSAFE.get_or_init(|| {
        Regex::new(r"[^A-Za-z0-9\-._]").expect("default unsafe-character class compiles")
    })
}

/// Percent-encode `text` with the default unsafe rule.
///
/// # Example
///
/// ```
/// use rutem::encode;
///
/// assert_eq!(encode("abc"), "abc");
/// assert_eq!(encode("a b"), "a%20b");
/// assert_eq!(encode("%"), "%25");
/// ```
#[must_use]
pub fn encode(text: &str) -> String {
    encode_with(text, default_unsafe_rule())
}

/// Percent-encode every character of `text` matched by `rule`.
///
/// Each matched character becomes one `%XX` token per UTF-8 byte, hex
/// digits uppercase; unmatched characters pass through untouched. The
/// output is all-ASCII whenever the rule matches every non-ASCII character
/// (the default rule does).
///
/// Characters outside the rule are never touched no matter how often the
/// encoder runs, but a `%` inside the rule is re-encoded on every pass:
/// `encode("%25")` is `"%2525"`. Exclude `%` from the rule to suppress
/// that.
///
/// # Example
///
/// ```
/// use regex::Regex;
/// use rutem::encode_with;
///
/// // One token per byte of a multi-byte character.
/// let rule = Regex::new(r"[^A-Za-z0-9\-._]").unwrap();
/// assert_eq!(encode_with("é", &rule), "%C3%A9");
/// ```
#[must_use]
pub fn encode_with(text: &str, rule: &Regex) -> String {
    rule.replace_all(text, |caps: &regex::Captures<'_>| {
        let matched = &caps[0];
        let mut escaped = String::with_capacity(matched.len() * 3);
        for &byte in matched.as_bytes() {
            escaped.push('%');
            escaped.push(UPPERHEX[usize::from(byte >> 4)] as char);
            escaped.push(UPPERHEX[usize::from(byte & 0x0F)] as char);
        }
        escaped
    })
    .into_owned()
}

/// Decode every `%XX` token of `text` into its raw byte.
///
/// Hex digits are accepted case-insensitively. Everything else passes
/// through unchanged, including a `%` not followed by two hex digits. The
/// result is a byte sequence: callers wanting text interpret it as UTF-8
/// afterward (see [`decode_lossy`]); byte runs that don't form valid UTF-8
/// are a caller concern, not an error here.
///
/// # Example
///
/// ```
/// use rutem::decode;
///
/// assert_eq!(decode("%25"), b"%");
/// assert_eq!(decode("a%20b"), b"a b");
/// assert_eq!(decode("100%"), b"100%");
/// ```
#[must_use]
pub fn decode(text: &str) -> Vec<u8> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    out
}

/// Decode `text` and interpret the result as UTF-8, replacing invalid
/// sequences with U+FFFD.
///
/// # Example
///
/// ```
/// use rutem::decode_lossy;
///
/// assert_eq!(decode_lossy("caf%C3%A9"), "café");
/// ```
#[must_use]
pub fn decode_lossy(text: &str) -> String {
    String::from_utf8_lossy(&decode(text)).into_owned()
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_characters_pass_through() {
        assert_eq!(encode("abc"), "abc");
        assert_eq!(encode("A-Z_a.z9"), "A-Z_a.z9");
    }

    #[test]
    fn unsafe_characters_are_escaped_uppercase() {
        assert_eq!(encode(" "), "%20");
        assert_eq!(encode("%"), "%25");
        assert_eq!(encode("a/b?c"), "a%2Fb%3Fc");
    }

    #[test]
    fn multibyte_characters_escape_per_byte() {
        assert_eq!(encode("é"), "%C3%A9");
        assert_eq!(encode("☕"), "%E2%98%95");
    }

    #[test]
    fn encode_output_is_ascii() {
        for text in ["héllo wörld", "日本語", "a b c"] {
            assert!(encode(text).is_ascii(), "input: {text:?}");
        }
    }

    #[test]
    fn decode_inverts_encode() {
        for text in ["", "abc", "a b", "100%", "café ☕", "a/b#c?d=e", "%25"] {
            assert_eq!(decode(&encode(text)), text.as_bytes(), "input: {text:?}");
        }
    }

    #[test]
    fn decode_accepts_lowercase_hex() {
        assert_eq!(decode("%c3%a9"), "é".as_bytes());
        assert_eq!(decode("%2f"), b"/");
    }

    #[test]
    fn malformed_tokens_pass_through() {
        assert_eq!(decode("%"), b"%");
        assert_eq!(decode("%2"), b"%2");
        assert_eq!(decode("%zz"), b"%zz");
        assert_eq!(decode("50%-60%"), b"50%-60%");
    }

    #[test]
    fn encode_is_idempotent_on_safe_output_only() {
        // Safe characters survive any number of passes.
        assert_eq!(encode(&encode("abc")), "abc");
        // But an encoded string contains `%`, which re-encodes.
        assert_eq!(encode(&encode(" ")), "%2520");
    }

    #[test]
    fn custom_rule_can_exclude_percent() {
        let rule = Regex::new(r"[^A-Za-z0-9\-._%]").unwrap();
        assert_eq!(encode_with("a b%20", &rule), "a%20b%20");
    }

    #[test]
    fn custom_rule_limits_the_unsafe_set() {
        let rule = Regex::new(r"[/]").unwrap();
        assert_eq!(encode_with("a/b c", &rule), "a%2Fb c");
    }

    #[test]
    fn decode_lossy_replaces_invalid_utf8() {
        // 0xFF alone is never valid UTF-8.
        assert_eq!(decode_lossy("%FF"), "\u{FFFD}");
        assert_eq!(decode_lossy("caf%C3%A9"), "café");
    }
}
