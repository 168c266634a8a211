use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Raw endorsement text as rendered ("12", "99+", or "" when the
    /// counter element is missing).
    pub endorsements: String,
}

impl Skill {
    /// Numeric sort key: trailing `+` stripped, empty or non-numeric text
    /// counts as zero.
    pub fn endorsement_count(&self) -> u64 {
        self.endorsements
            .trim_end_matches('+')
            .trim()
            .parse()
            .unwrap_or(0)
    }
}
