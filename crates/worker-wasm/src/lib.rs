//! WASM-compatible wrapper for paragraph spacing normalization.
//!
//! This crate exposes the normalizer and the page's process/load/copy
//! checks to JavaScript. DOM wiring, theming and the clipboard write stay
//! in the page.

use parafmt_core::{
    char_count, normalize as normalize_text, process_text as process_submission, Error,
    FormatMode, Notice, TextFile,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of processing the input box.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Normalized text for the output box.
    pub text: String,
    /// Mode that was applied.
    pub mode: FormatMode,
    /// Character count of the raw input.
    pub input_chars: usize,
    /// Character count of the output.
    pub output_chars: usize,
    /// Notification to show.
    pub notice: Notice,
}

/// Result of loading a dropped or selected file.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoadResult {
    /// Original filename.
    pub filename: String,
    /// Decoded file contents for the input box.
    pub text: String,
    /// Character count of `text`.
    pub chars: usize,
    /// Notification to show.
    pub notice: Notice,
}

/// One entry of the mode selector.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModeOption {
    pub value: String,
    pub label: String,
}

/// Normalize `text`; unknown modes pass the text through trimmed.
#[wasm_bindgen]
pub fn normalize(text: &str, mode: &str) -> String {
    normalize_text(text, FormatMode::parse_lenient(mode))
}

/// Process the input box.
///
/// Throws the notification message when the input is empty.
#[wasm_bindgen]
pub fn process_text(text: &str, mode: &str) -> Result<JsValue, JsValue> {
    let result = process_text_impl(text, mode).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn process_text_impl(text: &str, mode: &str) -> Result<ProcessResult, String> {
    let outcome =
        process_submission(text, FormatMode::parse_lenient(mode)).map_err(|e| notice_message(&e))?;
    let notice = outcome.notice();

    Ok(ProcessResult {
        text: outcome.text,
        mode: outcome.mode,
        input_chars: outcome.input_chars,
        output_chars: outcome.output_chars,
        notice,
    })
}

/// Load a file's bytes as text.
///
/// # Arguments
/// * `data` - The raw bytes of the file
/// * `filename` - The original filename (checked for a `.txt` suffix)
/// * `mime` - The browser-reported MIME type, if any
#[wasm_bindgen]
pub fn load_text_file(
    data: &[u8],
    filename: &str,
    mime: Option<String>,
) -> Result<JsValue, JsValue> {
    let result =
        load_text_file_impl(data, filename, mime.as_deref()).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn load_text_file_impl(
    data: &[u8],
    filename: &str,
    mime: Option<&str>,
) -> Result<LoadResult, String> {
    // Browsers report "" when they cannot tell the type.
    let mime = mime.filter(|m| !m.is_empty());
    let file = TextFile::from_bytes(filename, data, mime).map_err(|e| notice_message(&e))?;
    let notice = file.notice();

    Ok(LoadResult {
        chars: char_count(&file.text),
        filename: file.name,
        text: file.text,
        notice,
    })
}

/// Notice for the copy button, given the current output text.
#[wasm_bindgen]
pub fn copy_notice(output: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&Notice::for_copy(output))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Notice for the clear button.
#[wasm_bindgen]
pub fn clear_notice() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&Notice::cleared())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Notice for a rejected `navigator.clipboard.writeText`.
#[wasm_bindgen]
pub fn copy_failed_notice() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&Notice::copy_failed())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Modes for populating the selector, in display order.
#[wasm_bindgen]
pub fn format_modes() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&mode_options())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn mode_options() -> Vec<ModeOption> {
    FormatMode::ALL
        .iter()
        .map(|mode| ModeOption {
            value: mode.as_str().to_string(),
            label: mode.label().to_string(),
        })
        .collect()
}

fn notice_message(err: &Error) -> String {
    Notice::from(err).message
}

#[cfg(test)]
mod tests {
    use super::*;
    use parafmt_core::NoticeLevel;

    #[test]
    fn test_normalize_lenient_mode() {
        assert_eq!(normalize("a\nb", "single-to-double"), "a\n\nb");
        assert_eq!(normalize(" a\n\nb ", "bogus"), "a\n\nb");
    }

    #[test]
    fn test_process_text() {
        let result = process_text_impl("a\n\n\nb", "double-to-single").unwrap();

        assert_eq!(result.text, "a\nb");
        assert_eq!(result.mode, FormatMode::DoubleToSingle);
        assert_eq!(result.input_chars, 6);
        assert_eq!(result.output_chars, 3);
        assert_eq!(result.notice.level, NoticeLevel::Success);
    }

    #[test]
    fn test_process_empty_input() {
        let err = process_text_impl("   ", "single-to-double").unwrap_err();
        assert_eq!(err, "Please enter some text to process");
    }

    #[test]
    fn test_load_text_file() {
        let result = load_text_file_impl(b"one\ntwo", "lyrics.txt", Some("")).unwrap();

        assert_eq!(result.filename, "lyrics.txt");
        assert_eq!(result.text, "one\ntwo");
        assert_eq!(result.chars, 7);
        assert_eq!(result.notice.message, "File loaded successfully!");
    }

    #[test]
    fn test_load_rejects_non_text() {
        let err = load_text_file_impl(b"%PDF-1.7", "paper.pdf", Some("application/pdf")).unwrap_err();
        assert_eq!(err, "Please select a text file (.txt)");
    }

    #[test]
    fn test_mode_options() {
        let options = mode_options();
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["pass-through", "single-to-double", "double-to-single"]);
    }
}
