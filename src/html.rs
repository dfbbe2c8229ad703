//! HTML-to-plain-text conversion for markup-formatted input
//!
//! Some upstream sources deliver the text wrapped in HTML (typically mail
//! bodies with no plain-text part). This strips the markup by walking the
//! DOM and concatenating text nodes, in document order. Whitespace between
//! elements survives as-is; the extractor's per-field normalization trims
//! it where it matters.

use scraper::Html;

/// Extract the concatenated text content of an HTML document
///
/// Parsing is lenient and never fails; plain text without markup comes
/// back essentially unchanged (it parses as a document with a single text
/// node).
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let text: String = document.root_element().text().collect();

    log::debug!(
        "Stripped HTML markup ({} -> {} bytes)",
        html.len(),
        text.len()
    );

    text
}
