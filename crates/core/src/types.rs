//! Domain types shared by the normalizer and its hosts.

use crate::{Error, Notice, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Which spacing rule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatMode {
    /// Trim only.
    #[default]
    PassThrough,
    /// Expand single line breaks into blank-line separated paragraphs.
    SingleToDouble,
    /// Collapse blank lines into single line breaks.
    DoubleToSingle,
}

impl FormatMode {
    /// All modes, in selector order.
    pub const ALL: [FormatMode; 3] = [
        FormatMode::PassThrough,
        FormatMode::SingleToDouble,
        FormatMode::DoubleToSingle,
    ];

    /// The kebab-case name used on the command line and in JS.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PassThrough => "pass-through",
            Self::SingleToDouble => "single-to-double",
            Self::DoubleToSingle => "double-to-single",
        }
    }

    /// Human-readable label for a mode selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PassThrough => "No formatting",
            Self::SingleToDouble => "Single to double line breaks",
            Self::DoubleToSingle => "Double to single line breaks",
        }
    }

    /// Parse a mode name, falling back to pass-through for anything unknown.
    ///
    /// Names match after trimming and ignoring ASCII case, so
    /// `"Single-To-Double"` selects a rewriting mode. The browser page
    /// compared names exactly and would have passed such text through.
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::debug!("unrecognized format mode {:?}, passing text through", name);
            Self::PassThrough
        })
    }
}

impl FromStr for FormatMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownMode(name.to_string()))
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of processing one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOutcome {
    /// The normalized text.
    pub text: String,

    /// Mode that produced `text`.
    pub mode: FormatMode,

    /// Characters in the raw submission, before trimming.
    pub input_chars: usize,

    /// Characters in `text`.
    pub output_chars: usize,
}

impl FormatOutcome {
    /// Notification shown after a successful run.
    pub fn notice(&self) -> Notice {
        Notice::success("Text processed successfully!")
    }
}

/// A loaded file that was accepted as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFile {
    /// File name (without path).
    pub name: String,

    /// Decoded contents.
    pub text: String,
}

impl TextFile {
    /// Accept `bytes` as a text file.
    ///
    /// A file qualifies when its MIME type mentions `text` or its name ends
    /// in `.txt`. Without a MIME type, valid UTF-8 counts as `text/plain`.
    /// Invalid UTF-8 is decoded lossily and a leading BOM is dropped.
    pub fn from_bytes(name: &str, bytes: &[u8], mime: Option<&str>) -> Result<Self> {
        let mime = match mime {
            Some(mime) => Some(mime),
            None if std::str::from_utf8(bytes).is_ok() => Some("text/plain"),
            None => None,
        };

        let is_text = mime.map(|m| m.contains("text")).unwrap_or(false);
        if !is_text && !name.ends_with(".txt") {
            return Err(Error::UnsupportedFile(name.to_string()));
        }

        let decoded = String::from_utf8_lossy(bytes);
        let text = decoded
            .strip_prefix('\u{FEFF}')
            .unwrap_or(&*decoded)
            .to_string();

        Ok(Self {
            name: name.to_string(),
            text,
        })
    }

    /// Read a file from disk and accept it as text.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");

        Self::from_bytes(name, &bytes, None)
    }

    /// Notification shown after a successful load.
    pub fn notice(&self) -> Notice {
        Notice::info("File loaded successfully!")
    }
}
