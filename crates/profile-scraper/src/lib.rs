//! Extracts a structured professional profile record from the rendered
//! HTML of a profile page.
//!
//! Extraction is best-effort by design: a selector that finds nothing
//! yields an empty field, and an unexpected failure inside one pass is
//! logged and degrades that pass to a partial record without touching the
//! other three. Page retrieval and session handling are the caller's
//! responsibility; the only outbound call is the optional profile-photo
//! download behind [`fetch::ImageFetcher`].

pub mod document;
pub mod errors;
pub mod extract;
pub mod fetch;
pub mod models;

pub use document::Document;
pub use errors::ExtractError;
pub use extract::extract_profile;
pub use fetch::{DisabledImageFetcher, HttpImageFetcher, ImageFetcher};
pub use models::{
    Accomplishments, Education, Experiences, Job, PersonalInfo, ProfileRecord, Skill, Volunteer,
};

/// Parses `html` and runs the full four-pass extraction.
pub fn scrape_profile(html: &str, fetcher: &dyn ImageFetcher) -> ProfileRecord {
    let doc = Document::parse(html);
    extract_profile(&doc, fetcher)
}
