use std::cmp::Reverse;

use tracing::info;

use crate::document::{find_all, text_or_default, Document};
use crate::errors::ExtractError;
use crate::models::Skill;

use super::recover;

const SKILL_WRAPPER: &str = ".pv-skill-category-entity__skill-wrapper";
const SKILL_NAME: &str = ".pv-skill-category-entity__name-text";
const ENDORSEMENT_COUNT: &str = ".pv-skill-category-entity__endorsement-count";

/// Skills in decreasing order of endorsements; ties keep page order.
pub fn extract_skills(doc: &Document) -> Vec<Skill> {
    info!("extracting skills");
    let mut skills = Vec::new();
    recover("skills", &mut skills, |skills| fill(doc, skills));
    skills
}

fn fill(doc: &Document, skills: &mut Vec<Skill>) -> Result<(), ExtractError> {
    for wrapper in find_all(Some(doc.root()), SKILL_WRAPPER) {
        let wrapper = Some(wrapper);
        skills.push(Skill {
            name: text_or_default(wrapper, SKILL_NAME, ""),
            endorsements: text_or_default(wrapper, ENDORSEMENT_COUNT, ""),
        });
    }

    // Stable sort: equal counts stay in document order.
    skills.sort_by_key(|skill| Reverse(skill.endorsement_count()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapper(name: &str, endorsements: Option<&str>) -> String {
        let counter = endorsements
            .map(|count| {
                format!(r#"<span class="pv-skill-category-entity__endorsement-count">{count}</span>"#)
            })
            .unwrap_or_default();
        format!(
            r#"<div class="pv-skill-category-entity__skill-wrapper">
                 <span class="pv-skill-category-entity__name-text">{name}</span>
                 {counter}
               </div>"#
        )
    }

    #[test]
    fn test_sorted_descending_by_endorsements() {
        let html = [
            wrapper("A", Some("5")),
            wrapper("B", Some("12+")),
            wrapper("C", None),
        ]
        .join("\n");
        let doc = Document::parse(&html);
        let skills = extract_skills(&doc);

        let names: Vec<&str> = skills.iter().map(|skill| skill.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
        assert_eq!(skills[0].endorsements, "12+");
        assert_eq!(skills[2].endorsements, "");
    }

    #[test]
    fn test_ties_keep_document_order() {
        let html = [
            wrapper("First", Some("3")),
            wrapper("Second", Some("3")),
            wrapper("Third", Some("3")),
        ]
        .join("\n");
        let doc = Document::parse(&html);
        let skills = extract_skills(&doc);

        let names: Vec<&str> = skills.iter().map(|skill| skill.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_no_wrappers_is_empty() {
        let doc = Document::parse("<html></html>");
        assert!(extract_skills(&doc).is_empty());
    }
}
