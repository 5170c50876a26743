//! Article metadata extraction from common HTML tags.
//!
//! Each field is resolved by walking an ordered list of [`Rule`]s; the first
//! rule that yields a non-empty value wins. Missing tags simply leave the
//! field empty, so extraction never fails.
//!
//! # Title precedence
//!
//! A `<meta name="title">` tag outranks `og:title`, which outranks `<title>`.
//! Ranking `name="title"` above Open Graph is unusual but intentional.

use crate::models::ArticleMetadata;
use crate::utils::{collapse_whitespace, non_empty};
use scraper::{ElementRef, Html, Selector};

/// A single way of reading a metadata value out of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `content` of `<meta name="..">`.
    MetaName(&'static str),
    /// `content` of `<meta property="..">`.
    MetaProperty(&'static str),
    /// `href` of `<link rel="..">`.
    LinkRel(&'static str),
    /// Text of the first element with this tag name.
    TagText(&'static str),
    /// An attribute of the root `<html>` element.
    HtmlAttr(&'static str),
    /// The first element whose class contains this lowercase needle,
    /// case-insensitively. Reads `content` from `<meta>`, text otherwise.
    ClassContains(&'static str),
}

const CANONICAL_URL: &[Rule] = &[Rule::LinkRel("canonical")];
const TITLE: &[Rule] = &[
    Rule::MetaName("title"),
    Rule::MetaProperty("og:title"),
    Rule::TagText("title"),
];
const DESCRIPTION: &[Rule] = &[
    Rule::MetaName("description"),
    Rule::MetaProperty("og:description"),
];
const IMAGE: &[Rule] = &[Rule::MetaProperty("og:image")];
const SOURCE: &[Rule] = &[Rule::MetaProperty("og:site_name"), Rule::MetaName("publisher")];
const AUTHOR: &[Rule] = &[
    Rule::MetaName("author"),
    Rule::MetaProperty("article:author"),
    Rule::ClassContains("author"),
];
const KEYWORDS: &[Rule] = &[Rule::MetaName("keywords")];
const PUBLISHED: &[Rule] = &[
    Rule::MetaProperty("article:published_time"),
    Rule::MetaName("pubdate"),
    Rule::MetaName("date"),
];
const LANGUAGE_CODE: &[Rule] = &[Rule::HtmlAttr("lang")];

impl Rule {
    /// Evaluate this rule, returning the trimmed value if one is present.
    pub fn apply(&self, document: &Html) -> Option<String> {
        match *self {
            Rule::MetaName(name) => {
                first_attr(document, &format!(r#"meta[name="{name}"]"#), "content")
            }
            Rule::MetaProperty(property) => {
                first_attr(document, &format!(r#"meta[property="{property}"]"#), "content")
            }
            Rule::LinkRel(rel) => first_attr(document, &format!(r#"link[rel~="{rel}"]"#), "href"),
            Rule::TagText(tag) => {
                let selector = Selector::parse(tag).ok()?;
                let element = document.select(&selector).next()?;
                non_empty(&element.text().collect::<String>())
            }
            Rule::HtmlAttr(attr) => non_empty(document.root_element().value().attr(attr)?),
            Rule::ClassContains(needle) => {
                let selector = Selector::parse("[class]").ok()?;
                let element = document.select(&selector).find(|el| {
                    el.value()
                        .attr("class")
                        .is_some_and(|class| class.to_lowercase().contains(needle))
                })?;
                element_value(element)
            }
        }
    }
}

/// Walk `rules` in order and return the first value found.
pub fn resolve(document: &Html, rules: &[Rule]) -> Option<String> {
    rules.iter().find_map(|rule| rule.apply(document))
}

/// Extract [`ArticleMetadata`] from a parsed page.
///
/// `url` is the URL the page was requested with; it becomes the canonical
/// URL when the page does not declare one.
pub fn extract_metadata(document: &Html, url: &str) -> ArticleMetadata {
    ArticleMetadata {
        canonical_url: Some(resolve(document, CANONICAL_URL).unwrap_or_else(|| url.to_string())),
        title: resolve(document, TITLE),
        description: resolve(document, DESCRIPTION),
        image: resolve(document, IMAGE),
        source: resolve(document, SOURCE),
        author: resolve(document, AUTHOR),
        keywords: resolve(document, KEYWORDS),
        published: resolve(document, PUBLISHED),
        language_code: resolve(document, LANGUAGE_CODE),
    }
}

fn first_attr(document: &Html, selector: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let element = document.select(&selector).next()?;
    non_empty(element.value().attr(attr)?)
}

fn element_value(element: ElementRef<'_>) -> Option<String> {
    if element.value().name() == "meta" {
        non_empty(element.value().attr("content")?)
    } else {
        non_empty(&collapse_whitespace(&element.text().collect::<Vec<_>>().join(" ")))
    }
}
