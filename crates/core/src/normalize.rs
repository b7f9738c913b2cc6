//! Paragraph spacing normalization.
//!
//! Expands single line breaks into blank-line separated paragraphs, or
//! collapses blank lines back into single line breaks. Every input string
//! is legal; nothing here can fail.

use crate::FormatMode;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Whitespace as browsers define it for `\s` and `trim()`: Unicode space
/// separators, the ASCII controls, line/paragraph separators and U+FEFF.
/// U+0085 is not in the set even though Unicode calls it whitespace.
const WHITESPACE_CLASS: &str =
    r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

/// Regex matching a blank line: a newline, any whitespace (further newlines
/// included), then another newline.
static BLANK_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"\n{}*\n", WHITESPACE_CLASS)).unwrap());

fn is_trim_char(c: char) -> bool {
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

/// Trim leading and trailing whitespace, byte order marks included.
pub(crate) fn trim(text: &str) -> &str {
    text.trim_matches(is_trim_char)
}

/// Replace every blank-line run with a single newline.
fn collapse_blank_lines(text: &str) -> Cow<'_, str> {
    BLANK_LINE_REGEX.replace_all(text, "\n")
}

/// Rewrite `\r\n` and lone `\r` as `\n`.
fn to_unix_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Paragraph spacing normalizer.
#[derive(Debug, Clone)]
pub struct ParagraphNormalizer {
    /// Canonicalize CRLF and CR to LF before the rewriting modes run.
    unix_line_endings: bool,
}

impl Default for ParagraphNormalizer {
    fn default() -> Self {
        Self {
            unix_line_endings: true,
        }
    }
}

impl ParagraphNormalizer {
    /// Create a normalizer that canonicalizes line endings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether `\r\n` and `\r` are rewritten to `\n` first.
    ///
    /// Pass-through never touches line endings regardless of this setting.
    pub fn with_unix_line_endings(mut self, enabled: bool) -> Self {
        self.unix_line_endings = enabled;
        self
    }

    /// Rewrite the line-break structure of `text` according to `mode`.
    pub fn normalize(&self, text: &str, mode: FormatMode) -> String {
        let output = match mode {
            FormatMode::PassThrough => trim(text).to_string(),
            FormatMode::SingleToDouble => self.single_to_double(text),
            FormatMode::DoubleToSingle => self.double_to_single(text),
        };

        log::trace!(
            "normalized {} bytes to {} bytes ({})",
            text.len(),
            output.len(),
            mode
        );

        output
    }

    /// Put exactly one blank line between every pair of lines.
    ///
    /// Existing blank lines are collapsed first, so text that is already
    /// double spaced comes back unchanged.
    pub fn single_to_double(&self, text: &str) -> String {
        let text = self.line_endings(text);
        collapse_blank_lines(trim(&text)).replace('\n', "\n\n")
    }

    /// Collapse every blank line between paragraphs into one line break.
    pub fn double_to_single(&self, text: &str) -> String {
        let text = self.line_endings(text);
        trim(&collapse_blank_lines(&text)).to_string()
    }

    fn line_endings<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.unix_line_endings {
            to_unix_line_endings(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Normalize `text` with the default [`ParagraphNormalizer`].
pub fn normalize(text: &str, mode: FormatMode) -> String {
    ParagraphNormalizer::new().normalize(text, mode)
}
