use unicode_normalization::UnicodeNormalization;

/// Tidy raw OCR output before it is written anywhere.
///
/// NFKC normalization, CRLF to LF, trimmed ends. Interior line breaks
/// survive since the whole transcription goes into a single cell.
pub fn tidy(text: &str) -> String {
    let text: String = text.nfkc().collect();
    text.replace("\r\n", "\n").trim().to_string()
}

/// Blank or whitespace-only transcription.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tidy_trims_and_unifies_line_endings() {
        assert_eq!(tidy("  123.45\r\nEUR  \n"), "123.45\nEUR");
    }

    #[test]
    fn tidy_applies_nfkc() {
        // fullwidth digits fold to ASCII
        assert_eq!(tidy("１２３"), "123");
    }

    #[test]
    fn blank_detects_whitespace_only() {
        assert!(is_blank(""));
        assert!(is_blank("   \n\t "));
        assert!(!is_blank(" x "));
    }
}
