//! Partial updates. A `None` field leaves the stored value untouched.
//! Ids are not patchable.

use serde::{Deserialize, Deserializer};

use crate::models::resume::{Education, Experience, PersonalInfo, Skill, SkillLevel};

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PersonalInfoPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
}

impl PersonalInfoPatch {
    pub fn summary(text: impl Into<String>) -> Self {
        Self {
            summary: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn apply(self, info: &mut PersonalInfo) {
        set(&mut info.name, self.name);
        set(&mut info.email, self.email);
        set(&mut info.phone, self.phone);
        set(&mut info.location, self.location);
        set(&mut info.summary, self.summary);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub current: Option<bool>,
}

impl ExperiencePatch {
    pub fn description(text: impl Into<String>) -> Self {
        Self {
            description: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn apply(self, exp: &mut Experience) {
        set(&mut exp.company, self.company);
        set(&mut exp.position, self.position);
        set(&mut exp.start_date, self.start_date);
        set(&mut exp.end_date, self.end_date);
        set(&mut exp.description, self.description);
        set(&mut exp.current, self.current);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// `Some(None)` clears the GPA.
    #[serde(deserialize_with = "explicit_null")]
    pub gpa: Option<Option<String>>,
}

impl EducationPatch {
    pub fn apply(self, edu: &mut Education) {
        set(&mut edu.institution, self.institution);
        set(&mut edu.degree, self.degree);
        set(&mut edu.field, self.field);
        set(&mut edu.start_date, self.start_date);
        set(&mut edu.end_date, self.end_date);
        set(&mut edu.gpa, self.gpa);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<SkillLevel>,
    pub category: Option<String>,
}

impl SkillPatch {
    pub fn apply(self, skill: &mut Skill) {
        set(&mut skill.name, self.name);
        set(&mut skill.level, self.level);
        set(&mut skill.category, self.category);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_patch_touches_only_given_fields() {
        let mut exp = Experience::blank("1".into());
        exp.company = "Acme".into();
        exp.description = "Built things".into();

        ExperiencePatch {
            position: Some("Engineer".into()),
            ..Default::default()
        }
        .apply(&mut exp);

        assert_eq!(exp.position, "Engineer");
        assert_eq!(exp.company, "Acme");
        assert_eq!(exp.description, "Built things");
        assert_eq!(exp.id, "1");
    }

    #[test]
    fn test_gpa_patch_absent_null_and_value() {
        let absent: EducationPatch = serde_json::from_str(r#"{"degree":"MSc"}"#).unwrap();
        assert_eq!(absent.gpa, None);

        let cleared: EducationPatch = serde_json::from_str(r#"{"gpa":null}"#).unwrap();
        assert_eq!(cleared.gpa, Some(None));

        let set_to: EducationPatch = serde_json::from_str(r#"{"gpa":"3.9"}"#).unwrap();
        assert_eq!(set_to.gpa, Some(Some("3.9".to_string())));

        let mut edu = Education::blank("1".into());
        edu.gpa = Some("3.1".into());
        absent.apply(&mut edu);
        assert_eq!(edu.gpa.as_deref(), Some("3.1"));
        cleared.apply(&mut edu);
        assert_eq!(edu.gpa, None);
    }

    #[test]
    fn test_patch_deserializes_camel_case() {
        let patch: ExperiencePatch =
            serde_json::from_str(r#"{"endDate":"2024-05","current":true}"#).unwrap();
        assert_eq!(patch.end_date.as_deref(), Some("2024-05"));
        assert_eq!(patch.current, Some(true));
        assert_eq!(patch.company, None);
    }

    #[test]
    fn test_skill_patch_level() {
        let mut skill = Skill::blank("1".into());
        SkillPatch {
            level: Some(SkillLevel::Expert),
            ..Default::default()
        }
        .apply(&mut skill);
        assert_eq!(skill.level, SkillLevel::Expert);
        assert_eq!(skill.category, "Technical");
    }
}
