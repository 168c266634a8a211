//! Read-only selector queries over a parsed profile page.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// A parsed profile page. Thin wrapper so the extractors never touch the
/// HTML parser API directly.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
        }
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}

/// An unparsable selector behaves as "no match" so no query can panic on
/// a bad selector string.
fn compile(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            debug!(selector, error = ?err, "skipping unparsable selector");
            None
        }
    }
}

/// First descendant of `root` matching `selector`, if any.
pub fn find_first<'a>(root: Option<ElementRef<'a>>, selector: &str) -> Option<ElementRef<'a>> {
    let root = root?;
    let selector = compile(selector)?;
    root.select(&selector).next()
}

/// Every descendant of `root` matching `selector`, in document order.
pub fn find_all<'a>(root: Option<ElementRef<'a>>, selector: &str) -> Vec<ElementRef<'a>> {
    match (root, compile(selector)) {
        (Some(root), Some(selector)) => root.select(&selector).collect(),
        _ => Vec::new(),
    }
}

/// Concatenated text of every text node under `el`, untrimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Trimmed text of the first match, or `default` when nothing matches.
pub fn text_or_default(root: Option<ElementRef<'_>>, selector: &str, default: &str) -> String {
    find_first(root, selector)
        .map(|el| text_of(el).trim().to_string())
        .unwrap_or_else(|| default.to_string())
}

/// Descends `steps`, taking the first match at each level. Trimmed text
/// of the final node, or `""` when any step finds nothing.
pub fn path_text(root: Option<ElementRef<'_>>, steps: &[&str]) -> String {
    let mut current = root;
    for step in steps {
        current = find_first(current, step);
    }
    current
        .map(|el| text_of(el).trim().to_string())
        .unwrap_or_default()
}

/// Ordered selector fallback chain: the first selector with a match wins.
pub fn first_of<'a>(root: Option<ElementRef<'a>>, selectors: &[&str]) -> Option<ElementRef<'a>> {
    selectors
        .iter()
        .find_map(|selector| find_first(root, selector))
}
