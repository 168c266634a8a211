//! The four field-extraction passes and the recovery policy they share.
//!
//! Each pass is a pure function over the parsed document. A pass never
//! returns an error: `recover` logs the failure and hands back whatever
//! part of the skeleton was filled before it.

pub mod accomplishments;
pub mod experiences;
pub mod personal_info;
pub mod skills;

pub use accomplishments::extract_accomplishments;
pub use experiences::extract_experiences;
pub use personal_info::extract_personal_info;
pub use skills::extract_skills;

use tracing::error;

use crate::document::Document;
use crate::errors::ExtractError;
use crate::fetch::ImageFetcher;
use crate::models::ProfileRecord;

/// Runs all four passes over the same document and assembles the record.
/// The passes are independent; a failure in one leaves the others intact.
pub fn extract_profile(doc: &Document, fetcher: &dyn ImageFetcher) -> ProfileRecord {
    ProfileRecord {
        personal_info: extract_personal_info(doc, fetcher),
        experiences: extract_experiences(doc),
        skills: extract_skills(doc),
        accomplishments: extract_accomplishments(doc),
    }
}

/// Applies `fill` to a skeleton, keeping whatever it populated if it
/// fails part-way. The uniform catch-and-log boundary of every pass.
pub(crate) fn recover<T, F>(pass: &str, skeleton: &mut T, fill: F)
where
    F: FnOnce(&mut T) -> Result<(), ExtractError>,
{
    if let Err(err) = fill(skeleton) {
        error!(pass, error = %err, "extraction failed; returning the partial record");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fetch::DisabledImageFetcher;
    use crate::scrape_profile;

    const FULL_PROFILE_HTML: &str = r#"
        <html><body>
          <div class="pv-top-card">
            <h1>Jane Smith</h1>
            <div class="text-body-medium break-words">Staff Engineer at Acme</div>
            <div aria-label="Current company">Acme Corp</div>
            <div aria-label="Education">Stanford University</div>
            <div class="text-body-small inline break-words">Zurich, Switzerland</div>
            <img class="pv-top-card-profile-picture__image" src="https://cdn.example.com/jane.jpg"/>
          </div>
          <section class="pv-about-section">
            About
            Loves distributed systems... see more
          </section>
          <div class="pv-recent-activity-section-v2">
            <p>Jane posted an article</p>
            <p>1,234 followers</p>
          </div>
          <section class="pv-contact-info">
            <div class="ci-email"><div class="pv-contact-info__ci-container">jane@example.com</div></div>
            <div class="ci-websites"><ul>
              <li><a href="https://jane.dev">Portfolio</a></li>
            </ul></div>
          </section>
          <section id="ember17">
            <div class="pvs-header__container"><h2>Experience</h2></div>
            <div class="pvs-list__outer-container">
              <ul class="ph5">
                <li class="artdeco-list__item pvs-list__item--line-separated pvs-list__item--one-column">
                  <span class="t-bold"><span aria-hidden="true">Staff Engineer</span></span>
                  <span class="t-14 t-normal"><span aria-hidden="true">Acme Corp · Full-time</span></span>
                  <span class="t-14 t-normal t-black--light"><span aria-hidden="true">Jan 2020 - Present · 4 yrs</span></span>
                  <span class="t-14 t-normal t-black--light"><span aria-hidden="true">Zurich, Switzerland</span></span>
                  <div class="pv-shared-text-with-see-more t-14 t-normal t-black display-flex align-items-center"><span aria-hidden="true">Built the ingestion pipeline.</span></div>
                </li>
              </ul>
            </div>
          </section>
          <section id="ember23">
            <div class="pvs-header__container"><h2>Education</h2></div>
            <div class="pvs-list__outer-container">
              <ul class="ph5">
                <li class="artdeco-list__item pvs-list__item--line-separated pvs-list__item--one-column">
                  <span class="t-bold"><span aria-hidden="true">Stanford University</span></span>
                  <span class="t-14 t-normal"><span aria-hidden="true">Bachelor's, Computer Science</span></span>
                  <span class="t-14 t-normal t-black--light"><span aria-hidden="true">2014 - 2018</span></span>
                </li>
              </ul>
            </div>
          </section>
          <div class="pv-skill-category-entity__skill-wrapper">
            <span class="pv-skill-category-entity__name-text">Rust</span>
            <span class="pv-skill-category-entity__endorsement-count">12+</span>
          </div>
          <div class="pv-skill-category-entity__skill-wrapper">
            <span class="pv-skill-category-entity__name-text">SQL</span>
          </div>
          <div class="pv-accomplishments-section">
            <section class="languages"><ul><li>English</li></ul></section>
          </div>
        </body></html>
    "#;

    #[test]
    fn test_full_extraction_assembles_all_passes() {
        let record = scrape_profile(FULL_PROFILE_HTML, &DisabledImageFetcher);

        assert_eq!(record.personal_info.name.as_deref(), Some("Jane Smith"));
        assert_eq!(record.personal_info.followers.as_deref(), Some("1,234"));
        assert_eq!(record.experiences.jobs[0].company, "Acme Corp");
        assert_eq!(record.experiences.education[0].degree, "Bachelor's");
        assert_eq!(record.skills[0].name, "Rust");
        assert_eq!(
            record.accomplishments.languages,
            Some(vec!["English".to_string()])
        );
        assert!(record.experiences.volunteer.is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let first = scrape_profile(FULL_PROFILE_HTML, &DisabledImageFetcher);
        let second = scrape_profile(FULL_PROFILE_HTML, &DisabledImageFetcher);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_document_yields_full_skeleton() {
        let record = scrape_profile("<html></html>", &DisabledImageFetcher);

        let value = record.to_value();
        let map = value.as_object().expect("record serializes to an object");
        for key in ["personal_info", "experiences", "skills", "accomplishments"] {
            assert!(map.contains_key(key), "missing top-level key {key}");
        }

        assert_eq!(record.personal_info.name, None);
        assert_eq!(record.personal_info.summary.as_deref(), Some(""));
        assert_eq!(record.personal_info.websites, Some(vec![]));
        assert!(record.experiences.jobs.is_empty());
        assert!(record.skills.is_empty());
        assert_eq!(record.accomplishments.patents, None);
    }

    #[test]
    fn test_recover_keeps_partial_progress() {
        let mut filled: Vec<String> = Vec::new();
        recover("demo", &mut filled, |filled| {
            filled.push("first".to_string());
            Err(ExtractError::Other(anyhow::anyhow!("markup shifted")))
        });
        assert_eq!(filled, vec!["first".to_string()]);
    }

    #[test]
    fn test_recover_leaves_successful_fill_alone() {
        let mut filled = vec!["kept".to_string()];
        recover("demo", &mut filled, |_| Ok(()));
        assert_eq!(filled, vec!["kept".to_string()]);
    }
}
