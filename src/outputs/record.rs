//! Output record formatting.

use crate::models::{ArticleRecord, ParsedArticle, SummaryResult};

/// Combine a parsed article and its summary into the output record.
///
/// Fields pass through verbatim, except the top-level title: the article's
/// display title is preferred, and the summary's title is used only when
/// the display title is empty.
pub fn build_article_record(article: ParsedArticle, ai_summary: SummaryResult) -> ArticleRecord {
    let title = if article.title.is_empty() {
        ai_summary.title.clone()
    } else {
        article.title
    };

    ArticleRecord {
        url: article.url,
        crawl: article.crawl,
        ai_summary,
        metadata: article.metadata,
        title,
        text: article.text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArticleMetadata, CrawlInfo};

    fn article(title: &str) -> ParsedArticle {
        ParsedArticle {
            url: "https://example.com/a".to_string(),
            crawl: CrawlInfo {
                loaded_url: "https://example.com/a".to_string(),
                loaded_time: "2025-05-06T12:00:00.000000Z".to_string(),
                http_status_code: 200,
            },
            metadata: ArticleMetadata {
                canonical_url: Some("https://example.com/a".to_string()),
                ..Default::default()
            },
            title: title.to_string(),
            text: "Body text.".to_string(),
        }
    }

    fn summary() -> SummaryResult {
        SummaryResult {
            title: "Summary title".to_string(),
            summary: "- Body text.".to_string(),
            score: 40,
        }
    }

    #[test]
    fn test_record_has_exactly_six_keys_in_order() {
        let record = build_article_record(article("Display"), summary());
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 6);

        let json = serde_json::to_string(&record).unwrap();
        // top-level keys only: nested objects also carry a "title"
        let keys = [
            r#"{"url":"#,
            r#","crawl":{"#,
            r#"},"aiSummary":{"#,
            r#"},"metadata":{"#,
            r#"},"title":"#,
            r#","text":"#,
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    }

    #[test]
    fn test_display_title_preferred() {
        let record = build_article_record(article("Display"), summary());
        assert_eq!(record.title, "Display");
        assert_eq!(record.ai_summary.title, "Summary title");
    }

    #[test]
    fn test_summary_title_used_when_display_empty() {
        let record = build_article_record(article(""), summary());
        assert_eq!(record.title, "Summary title");
    }

    #[test]
    fn test_fields_pass_through() {
        let record = build_article_record(article("Display"), summary());
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["crawl"]["httpStatusCode"], 200);
        assert_eq!(value["aiSummary"]["score"], 40);
        assert_eq!(value["metadata"]["canonicalUrl"], "https://example.com/a");
        assert!(value["metadata"]["author"].is_null());
        assert_eq!(value["text"], "Body text.");
    }
}
