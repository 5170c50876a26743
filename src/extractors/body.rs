//! Main article text extraction.
//!
//! Pages are searched for paragraphs in order of preference:
//!
//! 1. `<p>` inside the first `<article>`
//! 2. `<p>` inside the first content container (`<main>`, or a `<div>` whose
//!    id or class mentions "content") that has any
//! 3. every `<p>` in the document
//!
//! Paragraphs shorter than [`MIN_PARAGRAPH_CHARS`] are treated as navigation
//! or caption noise and skipped. The first strategy that keeps at least one
//! paragraph wins.

use crate::utils::collapse_whitespace;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

/// Paragraphs with fewer characters than this are dropped.
pub const MIN_PARAGRAPH_CHARS: usize = 40;

static ARTICLE: Lazy<Selector> = Lazy::new(|| Selector::parse("article").unwrap());
static CONTAINERS: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"main, div[id*="content"], div[class*="content"]"#).unwrap()
});
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// Extract the article body as newline-joined paragraphs.
///
/// Each paragraph has its internal whitespace collapsed. Returns an empty
/// string when the page has no qualifying paragraph.
pub fn extract_body_text(document: &Html) -> String {
    let from_article = document
        .select(&ARTICLE)
        .next()
        .map(paragraphs)
        .unwrap_or_default();
    if !from_article.is_empty() {
        return from_article.join("\n");
    }

    let from_container = document
        .select(&CONTAINERS)
        .map(paragraphs)
        .find(|p| !p.is_empty());
    if let Some(found) = from_container {
        return found.join("\n");
    }

    paragraphs(document.root_element()).join("\n")
}

fn paragraphs(scope: ElementRef<'_>) -> Vec<String> {
    scope
        .select(&PARAGRAPH)
        .map(|p| collapse_whitespace(&p.text().collect::<Vec<_>>().join(" ")))
        .filter(|text| text.chars().count() >= MIN_PARAGRAPH_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_A: &str = "The council approved the new transit budget after a long debate.";
    const LONG_B: &str = "Residents will see expanded bus service starting early next spring.";
    const LONG_C: &str = "Unrelated sidebar paragraph that is long enough to qualify as text.";

    fn body(html: &str) -> String {
        extract_body_text(&Html::parse_document(html))
    }

    #[test]
    fn test_short_paragraphs_are_dropped() {
        let short = "Ten chars.";
        let fifty = "x".repeat(50);
        let text = body(&format!("<p>{short}</p><p>{fifty}</p>"));
        assert_eq!(text, fifty);
    }

    #[test]
    fn test_article_paragraphs_only() {
        let text = body(&format!(
            "<p>{LONG_C}</p><article><p>{LONG_A}</p><p>Share</p></article><p>{LONG_B}</p>"
        ));
        assert_eq!(text, LONG_A);
    }

    #[test]
    fn test_content_container_fallback() {
        let text = body(&format!(
            r#"<div class="nav"><p>{LONG_C}</p></div>
               <div id="main-content"><p>{LONG_A}</p><p>{LONG_B}</p></div>"#
        ));
        assert_eq!(text, format!("{LONG_A}\n{LONG_B}"));
    }

    #[test]
    fn test_first_container_with_paragraphs_wins() {
        let text = body(&format!(
            r#"<main><h1>Headline</h1></main>
               <div class="page-content"><p>{LONG_A}</p></div>
               <div id="content-2"><p>{LONG_B}</p></div>"#
        ));
        assert_eq!(text, LONG_A);
    }

    #[test]
    fn test_all_paragraphs_fallback() {
        let text = body(&format!("<section><p>{LONG_A}</p></section><p>{LONG_B}</p>"));
        assert_eq!(text, format!("{LONG_A}\n{LONG_B}"));
    }

    #[test]
    fn test_article_without_qualifying_paragraphs_falls_through() {
        let text = body(&format!("<article><p>Too short.</p></article><p>{LONG_B}</p>"));
        assert_eq!(text, LONG_B);
    }

    #[test]
    fn test_inner_whitespace_is_collapsed() {
        let text = body(
            "<article><p>  The   mayor <b>said</b>\n\n the plan would   pass easily today. </p></article>",
        );
        assert_eq!(text, "The mayor said the plan would pass easily today.");
    }

    #[test]
    fn test_no_paragraphs_yields_empty() {
        assert_eq!(body("<div>No paragraphs at all in this page body</div>"), "");
    }
}
