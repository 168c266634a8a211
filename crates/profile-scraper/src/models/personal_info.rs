use serde::{Deserialize, Serialize};

/// Identity and contact details from the profile's top card, about
/// section, activity section, and contact-info overlay.
///
/// `None` means the pass never reached the field (its region broke before
/// the field was materialized); `Some("")` means the field was processed
/// and nothing was found on the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub headline: Option<String>,
    pub company: Option<String>,
    pub school: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
    /// Base64 of the profile photo bytes; empty when there is no photo or
    /// the download failed.
    pub image: Option<String>,
    /// Verbatim capture, thousands separators preserved ("1,234").
    pub followers: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub connected: Option<String>,
    pub websites: Option<Vec<String>>,
}
