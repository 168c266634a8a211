use regex::Regex;
use scraper::ElementRef;
use tracing::info;

use crate::document::{find_all, find_first, path_text, text_of, Document};
use crate::errors::ExtractError;
use crate::models::{Education, Experiences, Job};

use super::recover;

/// Template-generated content sections carry "ember…" ids.
const SECTION_ID_PATTERN: &str = "ember";

const SECTION_HEADER: &str = r#"div[class="pvs-header__container"]"#;
const LEGACY_SECTION_HEADER: &str =
    r#"div[class="display-flex justify-flex-start align-items-center pt3 ph3"]"#;

const CONTENT_CONTAINER: &str = ".pvs-list__outer-container";
const ITEM_LIST: &str = "ul.ph5";
const LIST_ITEM: &str =
    "li.artdeco-list__item.pvs-list__item--line-separated.pvs-list__item--one-column";
const LEGACY_ITEM_LIST: &str = "ul.pvs-list";
const LEGACY_LIST_ITEM: &str =
    "li.pvs-list__paged-list-item.artdeco-list__item.pvs-list__item--line-separated";

const VISIBLE_SPAN: &str = r#"span[aria-hidden="true"]"#;
const BOLD_SPAN: &str = "span.t-bold";
// Exact class matches: membership on "t-14 t-normal" would also catch the
// t-black--light spans and swap the secondary and light fields.
const SECONDARY_SPAN: &str = r#"span[class="t-14 t-normal"]"#;
const LIGHT_SPAN: &str = r#"span[class="t-14 t-normal t-black--light"]"#;
const SEE_MORE_BLOCK: &str = r#"div[class="pv-shared-text-with-see-more t-14 t-normal t-black display-flex align-items-center"]"#;
// The class attribute really does end with a space in the legacy markup.
const LEGACY_DESCRIPTION_BLOCK: &str = r#"div[class="display-flex "]"#;

pub fn extract_experiences(doc: &Document) -> Experiences {
    info!("extracting experiences");
    let mut experiences = Experiences::default();
    recover("experiences", &mut experiences, |experiences| {
        fill(doc, experiences)
    });
    experiences
}

// TODO: `Experiences::volunteer` stays empty — no parser exists for the
// volunteer section markup yet.
fn fill(doc: &Document, experiences: &mut Experiences) -> Result<(), ExtractError> {
    let generated_id = Regex::new(SECTION_ID_PATTERN)?;

    for section in find_all(Some(doc.root()), "section") {
        let is_generated = section
            .value()
            .attr("id")
            .map_or(false, |id| generated_id.is_match(id));
        if !is_generated {
            continue;
        }

        let header = header_text(section);
        if header.contains("Education") {
            parse_education(section, &mut experiences.education);
        }
        if header.contains("Experience") {
            parse_jobs(section, &mut experiences.jobs);
        }
    }

    Ok(())
}

/// Header text via the current container, else the legacy flex header.
fn header_text(section: ElementRef<'_>) -> String {
    match find_first(Some(section), SECTION_HEADER) {
        Some(header) => text_of(header),
        None => path_text(Some(section), &[LEGACY_SECTION_HEADER]),
    }
}

fn parse_education(section: ElementRef<'_>, education: &mut Vec<Education>) {
    let content = find_first(Some(section), CONTENT_CONTAINER);
    let list = find_first(content, ITEM_LIST);

    for item in find_all(list, LIST_ITEM) {
        let item = Some(item);
        let (degree, field_of_study) =
            split_degree(&path_text(item, &[SECONDARY_SPAN, VISIBLE_SPAN]));

        education.push(Education {
            name: path_text(item, &[BOLD_SPAN, VISIBLE_SPAN]),
            degree,
            field_of_study,
            date_range: path_text(item, &[LIGHT_SPAN, VISIBLE_SPAN]),
            grades: path_text(item, &[SEE_MORE_BLOCK, VISIBLE_SPAN]),
        });
    }
}

fn parse_jobs(section: ElementRef<'_>, jobs: &mut Vec<Job>) {
    let content = find_first(Some(section), CONTENT_CONTAINER);
    let items = match find_first(content, ITEM_LIST) {
        Some(list) => find_all(Some(list), LIST_ITEM),
        None => find_all(find_first(Some(section), LEGACY_ITEM_LIST), LEGACY_LIST_ITEM),
    };

    for item in items {
        let item = Some(item);

        let mut date_range = String::new();
        let mut location = String::new();
        // First light span is the date range, second the location; any
        // further spans are ignored.
        for (index, span) in find_all(item, LIGHT_SPAN).into_iter().enumerate() {
            match index {
                0 => date_range = truncate_at_separator(&path_text(Some(span), &[VISIBLE_SPAN])),
                1 => location = path_text(Some(span), &[VISIBLE_SPAN]),
                _ => break,
            }
        }

        let mut description = path_text(item, &[SEE_MORE_BLOCK, VISIBLE_SPAN]);
        if description.is_empty() {
            description = path_text(item, &[LEGACY_DESCRIPTION_BLOCK, VISIBLE_SPAN]);
        }

        jobs.push(Job {
            title: path_text(item, &[BOLD_SPAN, VISIBLE_SPAN]),
            company: truncate_at_separator(&path_text(item, &[SECONDARY_SPAN, VISIBLE_SPAN])),
            date_range,
            description: collapse_whitespace(&description),
            location,
        });
    }
}

/// "Bachelor's, Computer Science" -> ("Bachelor's", "Computer Science").
/// Splits on the last comma; no comma means no field of study.
fn split_degree(raw: &str) -> (String, String) {
    match raw.rsplit_once(',') {
        Some((degree, field)) => (degree.trim_end().to_string(), field.trim().to_string()),
        None => (raw.to_string(), String::new()),
    }
}

/// Keeps only the part before the first "·":
/// "Acme Corp · Full-time" -> "Acme Corp".
fn truncate_at_separator(raw: &str) -> String {
    raw.split('·').next().unwrap_or(raw).trim().to_string()
}

fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
