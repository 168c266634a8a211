use scraper::ElementRef;
use tracing::info;

use crate::document::{find_all, find_first, text_of, Document};
use crate::errors::ExtractError;
use crate::models::Accomplishments;

use super::recover;

const CONTAINER: &str = ".pv-accomplishments-section";

pub fn extract_accomplishments(doc: &Document) -> Accomplishments {
    info!("extracting accomplishments");
    let mut accomplishments = Accomplishments::default();
    recover("accomplishments", &mut accomplishments, |accomplishments| {
        fill(doc, accomplishments)
    });
    accomplishments
}

fn fill(doc: &Document, accomplishments: &mut Accomplishments) -> Result<(), ExtractError> {
    let container = match find_first(Some(doc.root()), CONTAINER) {
        Some(container) => container,
        None => {
            // Every category stays None.
            info!("no accomplishments section on the page");
            return Ok(());
        }
    };

    accomplishments.publications = Some(category_items(container, "publications"));
    accomplishments.certifications = Some(category_items(container, "certifications"));
    accomplishments.patents = Some(category_items(container, "patents"));
    accomplishments.courses = Some(category_items(container, "courses"));
    accomplishments.projects = Some(category_items(container, "projects"));
    accomplishments.honors = Some(category_items(container, "honors"));
    accomplishments.test_scores = Some(category_items(container, "test_scores"));
    accomplishments.languages = Some(category_items(container, "languages"));
    accomplishments.organizations = Some(category_items(container, "organizations"));
    Ok(())
}

/// Trimmed text of every list item scoped to one category section.
fn category_items(container: ElementRef<'_>, category: &str) -> Vec<String> {
    let selector = format!("section.{category} ul > li");
    find_all(Some(container), &selector)
        .into_iter()
        .map(|item| text_of(item).trim().to_string())
        .collect()
}
