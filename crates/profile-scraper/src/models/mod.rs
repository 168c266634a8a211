pub mod accomplishments;
pub mod experience;
pub mod personal_info;
pub mod profile;
pub mod skill;

pub use accomplishments::Accomplishments;
pub use experience::{Education, Experiences, Job, Volunteer};
pub use personal_info::PersonalInfo;
pub use profile::ProfileRecord;
pub use skill::Skill;
