//! Minimal `local@domain.tld` shape check.
//!
//! This is deliberately not RFC 5322. It only rejects values that obviously
//! are not addresses: whitespace, a missing `@`, or a domain without a dot.
//!
//! "Whitespace" is the browser's set (ECMAScript WhiteSpace plus
//! LineTerminator), not Unicode `White_Space`: U+FEFF counts, U+0085 and
//! U+180E do not. Form values come from the page, so trimming and matching
//! must agree with what the page's own scripts would see.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use std::sync::LazyLock;

use regex::Regex;

// `[^\s@]` spelled out with the ECMAScript whitespace set.
const EMAIL_PATTERN: &str = concat!(
    r"^[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+",
    r"@[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+",
    r"\.[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]+$",
);

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN));

/// ECMAScript WhiteSpace or LineTerminator code point.
#[must_use]
pub fn js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strip leading and trailing [`js_whitespace`].
#[must_use]
pub fn trim(raw: &str) -> &str {
    raw.trim_matches(js_whitespace)
}

/// Whether `candidate` looks like `local@domain.tld`.
///
/// The caller is expected to [`trim`] first; leading or trailing whitespace fails.
#[must_use]
pub fn is_valid(candidate: &str) -> bool {
    EMAIL_RE.as_ref().is_ok_and(|re| re.is_match(candidate))
}
