pub mod patch;
pub mod resume;

pub use patch::{EducationPatch, ExperiencePatch, PersonalInfoPatch, SkillPatch};
pub use resume::{Education, Experience, PersonalInfo, Resume, Section, Skill, SkillLevel};
