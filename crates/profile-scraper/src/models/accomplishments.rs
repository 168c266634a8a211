use serde::{Deserialize, Serialize};

/// One optional list per fixed category.
///
/// `None` means the whole accomplishments container was absent from the
/// page; `Some(vec![])` means the container existed but that category's
/// section did not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Accomplishments {
    pub publications: Option<Vec<String>>,
    pub certifications: Option<Vec<String>>,
    pub patents: Option<Vec<String>>,
    pub courses: Option<Vec<String>>,
    pub projects: Option<Vec<String>>,
    pub honors: Option<Vec<String>>,
    pub test_scores: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub organizations: Option<Vec<String>>,
}
