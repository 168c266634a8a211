use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Accomplishments, Experiences, PersonalInfo, Skill};

/// The assembled extraction result.
///
/// All four fields are always present: a pass that failed mid-way leaves
/// its field as the partially-filled skeleton rather than removing it.
/// The record is a plain snapshot — re-running the extraction on the same
/// document produces an identical value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub personal_info: PersonalInfo,
    pub experiences: Experiences,
    pub skills: Vec<Skill>,
    pub accomplishments: Accomplishments,
}

impl ProfileRecord {
    /// Serializable snapshot with the four top-level keys.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
