use serde::{Deserialize, Serialize};

/// Professional history, in page presentation order (reverse-chronological
/// as rendered).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experiences {
    pub jobs: Vec<Job>,
    pub education: Vec<Education>,
    /// Always empty: no volunteer section parser exists yet.
    pub volunteer: Vec<Volunteer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub date_range: String,
    pub description: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub name: String,
    pub degree: String,
    pub field_of_study: String,
    pub date_range: String,
    pub grades: String,
}

/// Shape reserved for volunteer entries so the serialized record is
/// stable once a parser lands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    pub role: String,
    pub organization: String,
    pub date_range: String,
    pub description: String,
}
