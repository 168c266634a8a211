use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use regex::Regex;
use scraper::ElementRef;
use tracing::{debug, info, warn};

use crate::document::{find_all, find_first, first_of, text_of, text_or_default, Document};
use crate::errors::ExtractError;
use crate::fetch::ImageFetcher;
use crate::models::PersonalInfo;

use super::recover;

const TOP_CARD: &str = ".pv-top-card";
const CONTACT_INFO: &str = ".pv-contact-info";
const ABOUT_SECTION: &str = ".pv-about-section";
const ACTIVITY_SECTION: &str = ".pv-recent-activity-section-v2";

// Top-card fields, one first-match selector each.
const NAME: &str = "h1";
const HEADLINE: &str = ".text-body-medium.break-words";
const CURRENT_COMPANY: &str = r#"div[aria-label="Current company"]"#;
const CURRENT_SCHOOL: &str = r#"div[aria-label="Education"]"#;
const LOCATION: &str = ".text-body-small.inline.break-words";

/// The self-edit preview only exists when scraping one's own profile; it
/// wins over the standard photo element.
const PROFILE_PHOTO: &[&str] = &[
    "img.profile-photo-edit__preview",
    "img.pv-top-card-profile-picture__image",
];

// Contact-info fields.
const EMAIL: &str = ".ci-email .pv-contact-info__ci-container";
const PHONE: &str = ".ci-phone .pv-contact-info__ci-container";
const CONNECTED: &str = ".ci-connected .pv-contact-info__ci-container";
const WEBSITES: &str = ".ci-websites li a";

/// Comma-grouped digit runs like "1,234 followers"; the preceding
/// character guard keeps the capture from starting mid-number.
const FOLLOWERS_PATTERN: &str = r"(?i)(?:^|[^,\d])(\d+(?:,\d{3})*) followers";

pub fn extract_personal_info(doc: &Document, fetcher: &dyn ImageFetcher) -> PersonalInfo {
    info!("extracting personal info");
    let mut personal = PersonalInfo::default();
    recover("personal_info", &mut personal, |personal| {
        fill(doc, fetcher, personal)
    });
    personal
}

fn fill(
    doc: &Document,
    fetcher: &dyn ImageFetcher,
    personal: &mut PersonalInfo,
) -> Result<(), ExtractError> {
    let root = Some(doc.root());
    let top_card = find_first(root, TOP_CARD);
    let contact = find_first(root, CONTACT_INFO);

    personal.name = first_text(top_card, NAME);
    personal.headline = first_text(top_card, HEADLINE);
    personal.company = first_text(top_card, CURRENT_COMPANY);
    personal.school = first_text(top_card, CURRENT_SCHOOL);
    personal.location = first_text(top_card, LOCATION);

    let about = text_or_default(root, ABOUT_SECTION, "");
    personal.summary = Some(clean_summary(&about));

    personal.image = Some(fetch_photo(top_card, fetcher));
    personal.followers = Some(follower_count(root)?);

    personal.email = first_text(contact, EMAIL);
    personal.phone = first_text(contact, PHONE);
    personal.connected = first_text(contact, CONNECTED);

    personal.websites = Some(
        find_all(contact, WEBSITES)
            .into_iter()
            .filter_map(|anchor| anchor.value().attr("href"))
            .map(String::from)
            .collect(),
    );

    Ok(())
}

/// First-match text for a fixed-selector field; `None` when the region or
/// the element is missing.
fn first_text(region: Option<ElementRef<'_>>, selector: &str) -> Option<String> {
    find_first(region, selector).map(|el| text_of(el).trim().to_string())
}

/// Strips the leading "About" heading token and a trailing "see more"
/// affordance, both case-insensitive, and trims the rest.
fn clean_summary(raw: &str) -> String {
    let mut summary = raw.trim();

    if summary
        .get(..5)
        .map_or(false, |head| head.eq_ignore_ascii_case("about"))
    {
        summary = summary[5..].trim_start();
    }

    let tail_start = summary.len().saturating_sub("see more".len());
    if summary
        .get(tail_start..)
        .map_or(false, |tail| tail.eq_ignore_ascii_case("see more"))
    {
        summary = summary[..tail_start].trim_end();
    }

    summary.to_string()
}

/// Base64 of the profile photo bytes; any failure degrades to "".
fn fetch_photo(top_card: Option<ElementRef<'_>>, fetcher: &dyn ImageFetcher) -> String {
    let src = first_of(top_card, PROFILE_PHOTO).and_then(|img| img.value().attr("src"));
    match src {
        Some(url) => match fetcher.fetch(url) {
            Ok(bytes) => STANDARD.encode(&bytes),
            Err(err) => {
                warn!(url, error = %err, "profile photo fetch failed; leaving image empty");
                String::new()
            }
        },
        None => String::new(),
    }
}

fn follower_count(root: Option<ElementRef<'_>>) -> Result<String, ExtractError> {
    let activity = match find_first(root, ACTIVITY_SECTION) {
        Some(section) => section,
        None => {
            info!("no recent-activity section; continuing without a follower count");
            return Ok(String::new());
        }
    };

    info!("found the activity section, looking for a follower count");
    let pattern = Regex::new(FOLLOWERS_PATTERN)?;
    match pattern.captures(&text_of(activity)) {
        Some(caps) => Ok(caps[1].to_string()),
        None => {
            debug!("no follower count in the activity section");
            Ok(String::new())
        }
    }
}
