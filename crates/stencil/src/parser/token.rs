//! Template tokenizer.
//!
//! Finds placeholder tokens in a single left-to-right, non-overlapping scan:
//! one or more `{`, a minimal property-path capture, an optional `:` followed
//! by a minimal format-spec capture, then one or more `}`. Only run lengths
//! matter — there is no brace-nesting awareness. The compiled pattern is a
//! process-wide cache shared by every render.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{CaptureMatches, Captures, Regex};

/// The token-matching pattern.
///
/// The one-or-more quantifiers on both delimiter runs make a malformed run
/// unrepresentable: every match carries at least one delimiter per side.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?<open>\{+)(?<path>.+?)(?::(?<spec>.+?))?(?<close>\}+)")
        .expect("token pattern is valid")
});

/// Matches one doubled delimiter, for collapsing escaped tokens.
static ESCAPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{|\}\}").expect("escape pattern is valid"));

/// A single placeholder match within a template.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenMatch<'t> {
    /// The full matched text, delimiters included.
    pub text: &'t str,
    /// Byte offset of the match start within the template.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    /// Leading delimiter run length (>= 1).
    pub open: usize,
    /// Trailing delimiter run length (>= 1).
    pub close: usize,
    /// The property-path capture.
    pub path: &'t str,
    /// The format-spec capture, when present.
    pub spec: Option<&'t str>,
}

impl<'t> TokenMatch<'t> {
    fn from_captures(captures: &Captures<'t>) -> TokenMatch<'t> {
        let whole = captures.get(0).expect("group 0 always participates");
        let open = captures.name("open").expect("open run always captures");
        let close = captures.name("close").expect("close run always captures");
        let path = captures.name("path").expect("path always captures");
        TokenMatch {
            text: whole.as_str(),
            start: whole.start(),
            end: whole.end(),
            open: open.len(),
            close: close.len(),
            path: path.as_str(),
            spec: captures.name("spec").map(|m| m.as_str()),
        }
    }
}

/// Lazy iterator over a template's token matches.
///
/// Restartable by calling [`scan`] again; each iteration re-enumerates from
/// the shared compiled pattern.
pub struct Tokens<'t> {
    inner: CaptureMatches<'static, 't>,
}

impl<'t> Iterator for Tokens<'t> {
    type Item = TokenMatch<'t>;

    fn next(&mut self) -> Option<TokenMatch<'t>> {
        self.inner
            .next()
            .map(|captures| TokenMatch::from_captures(&captures))
    }
}

/// Scan a template for placeholder tokens.
///
/// # Example
///
/// ```
/// use stencil::scan;
///
/// let tokens: Vec<_> = scan("{Greeting}, {Name:d}!").collect();
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].path, "Greeting");
/// assert_eq!(tokens[1].spec, Some("d"));
/// ```
pub fn scan(template: &str) -> Tokens<'_> {
    Tokens {
        inner: TOKEN_PATTERN.captures_iter(template),
    }
}

/// Collapse every doubled delimiter in `text` to a single one, left to right.
pub(crate) fn collapse_doubled(text: &str) -> Cow<'_, str> {
    ESCAPE_PATTERN.replace_all(text, |captures: &Captures<'_>| {
        captures[0][..1].to_string()
    })
}
