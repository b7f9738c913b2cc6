//! The "process" action: validate a submission, normalize it, and count
//! characters on both sides.

use crate::normalize::trim;
use crate::{Error, FormatMode, FormatOutcome, ParagraphNormalizer, Result};

/// Process a submission with the default normalizer.
///
/// Whitespace-only input is rejected with [`Error::EmptyInput`]; the
/// normalizer itself would accept it and return an empty string.
pub fn process_text(input: &str, mode: FormatMode) -> Result<FormatOutcome> {
    process_text_with(&ParagraphNormalizer::new(), input, mode)
}

/// Process a submission with a configured normalizer.
pub fn process_text_with(
    normalizer: &ParagraphNormalizer,
    input: &str,
    mode: FormatMode,
) -> Result<FormatOutcome> {
    let trimmed = trim(input);
    if trimmed.is_empty() {
        return Err(Error::EmptyInput);
    }

    let text = normalizer.normalize(trimmed, mode);
    log::debug!(
        "processed {} characters into {} ({})",
        char_count(input),
        char_count(&text),
        mode
    );

    Ok(FormatOutcome {
        input_chars: char_count(input),
        output_chars: char_count(&text),
        text,
        mode,
    })
}

/// Number of characters (Unicode scalar values) in `text`.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Render a count as `"1,234 characters"`.
pub fn format_char_count(count: usize) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{} characters", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_rejects_empty() {
        assert!(matches!(
            process_text("", FormatMode::SingleToDouble),
            Err(Error::EmptyInput)
        ));
        assert!(matches!(
            process_text(" \n\t\n ", FormatMode::PassThrough),
            Err(Error::EmptyInput)
        ));
        assert!(matches!(
            process_text("\u{FEFF}\n", FormatMode::DoubleToSingle),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn test_process_counts_characters() {
        let outcome = process_text("  a\nb  ", FormatMode::SingleToDouble).unwrap();
        assert_eq!(outcome.text, "a\n\nb");
        assert_eq!(outcome.mode, FormatMode::SingleToDouble);
        assert_eq!(outcome.input_chars, 7);
        assert_eq!(outcome.output_chars, 4);
    }

    #[test]
    fn test_process_counts_unicode_scalars() {
        let outcome = process_text("héllo\n\n\nwörld", FormatMode::DoubleToSingle).unwrap();
        assert_eq!(outcome.text, "héllo\nwörld");
        assert_eq!(outcome.output_chars, 11);
    }

    #[test]
    fn test_process_pass_through() {
        let outcome = process_text("\n keep\n\n\nas is \n", FormatMode::PassThrough).unwrap();
        assert_eq!(outcome.text, "keep\n\n\nas is");
        assert_eq!(outcome.notice().message, "Text processed successfully!");
    }

    #[test]
    fn test_process_with_custom_normalizer() {
        let normalizer = ParagraphNormalizer::new().with_unix_line_endings(false);
        let outcome =
            process_text_with(&normalizer, "a\r\nb", FormatMode::SingleToDouble).unwrap();
        assert_eq!(outcome.text, "a\r\n\nb");
    }

    #[test]
    fn test_format_char_count() {
        assert_eq!(format_char_count(0), "0 characters");
        assert_eq!(format_char_count(999), "999 characters");
        assert_eq!(format_char_count(1234), "1,234 characters");
        assert_eq!(format_char_count(1_000_000), "1,000,000 characters");
    }
}
