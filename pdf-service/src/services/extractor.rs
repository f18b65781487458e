use lopdf::Document;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to parse PDF: {0}")]
    Parse(#[from] lopdf::Error),

    #[error("PDF is encrypted and cannot be opened without a password")]
    Encrypted,

    #[error("failed to extract text from page {page}: {source}")]
    Page {
        page: u32,
        #[source]
        source: lopdf::Error,
    },

    #[error("extraction worker stopped: {0}")]
    Worker(String),
}

/// Recovers plain text from a PDF, one string per page in document order.
pub trait PdfTextExtractor: Send + Sync {
    fn extract_pages(&self, pdf: &[u8]) -> Result<Vec<String>, ExtractionError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl PdfTextExtractor for LopdfExtractor {
    fn extract_pages(&self, pdf: &[u8]) -> Result<Vec<String>, ExtractionError> {
        let mut document = Document::load_mem(pdf)?;

        // Owner-password-only documents open with the empty user password
        if document.is_encrypted() {
            document
                .decrypt("")
                .map_err(|_| ExtractionError::Encrypted)?;
        }

        // get_pages is keyed by page number, so iteration follows document order
        document
            .get_pages()
            .into_keys()
            .map(|page| {
                document
                    .extract_text(&[page])
                    .map_err(|source| ExtractionError::Page { page, source })
            })
            .collect()
    }
}

/// Flatten every page into one list of lines, pages first, then lines within a page.
pub fn extract_lines(
    extractor: &dyn PdfTextExtractor,
    pdf: &[u8],
) -> Result<Vec<String>, ExtractionError> {
    let pages = extractor.extract_pages(pdf)?;

    Ok(pages
        .iter()
        .flat_map(|text| split_lines(text))
        .map(str::to_string)
        .collect())
}

/// Split on every Unicode line boundary, dropping the separators.
///
/// `\r\n` counts as one break and a trailing break does not yield an empty
/// final line. Blank lines between breaks are kept.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(&text[start..idx]);

        let mut end = idx + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(next_idx, '\n')) = chars.peek() {
                chars.next();
                end = next_idx + 1;
            }
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPages(Vec<&'static str>);

    impl PdfTextExtractor for FixedPages {
        fn extract_pages(&self, _pdf: &[u8]) -> Result<Vec<String>, ExtractionError> {
            Ok(self.0.iter().map(|p| p.to_string()).collect())
        }
    }

    #[test]
    fn split_drops_trailing_break() {
        assert_eq!(split_lines("Hello\nWorld\n"), vec!["Hello", "World"]);
        assert_eq!(split_lines("Hello\nWorld"), vec!["Hello", "World"]);
    }

    #[test]
    fn split_handles_mixed_breaks() {
        assert_eq!(
            split_lines("a\r\nb\rc\u{0c}d\u{2028}e"),
            vec!["a", "b", "c", "d", "e"]
        );
    }

    #[test]
    fn split_keeps_inner_blank_lines() {
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn split_of_empty_text_is_empty() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn lines_follow_page_order() {
        let extractor = FixedPages(vec!["first\nsecond\n", "", "third\n"]);
        let lines = extract_lines(&extractor, b"ignored").unwrap();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let err = LopdfExtractor::new()
            .extract_pages(b"this is not a pdf")
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Parse(_)));
        assert!(!err.to_string().is_empty());
    }
}
