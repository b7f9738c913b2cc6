//! Core paragraph spacing normalization, mode selection, and the
//! host-side helpers shared by the CLI and the browser binding.

pub mod error;
pub mod normalize;
pub mod notice;
pub mod process;
pub mod types;

pub use error::{Error, Result};
pub use normalize::{normalize, ParagraphNormalizer};
pub use notice::{Notice, NoticeLevel};
pub use process::{char_count, format_char_count, process_text, process_text_with};
pub use types::{FormatMode, FormatOutcome, TextFile};
