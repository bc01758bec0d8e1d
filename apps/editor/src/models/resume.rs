use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which identity-bearing list of the resume an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Experience,
    Education,
    Skill,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skill => "skill",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    /// `YYYY-MM` or empty.
    pub start_date: String,
    /// `YYYY-MM` or empty. Ignored while `current` is set.
    pub end_date: String,
    pub description: String,
    pub current: bool,
}

impl Experience {
    pub fn blank(id: String) -> Self {
        Self {
            id,
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
            current: false,
        }
    }

    /// The end date consumers should display. A current role has none,
    /// whatever text is still stored in `end_date`.
    pub fn effective_end_date(&self) -> Option<&str> {
        if self.current || self.end_date.is_empty() {
            None
        } else {
            Some(&self.end_date)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    /// Free text, never validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

impl Education {
    pub fn blank(id: String) -> Self {
        Self {
            id,
            institution: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            gpa: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

pub const DEFAULT_SKILL_CATEGORY: &str = "Technical";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
    /// Display grouping key.
    pub category: String,
}

impl Skill {
    pub fn blank(id: String) -> Self {
        Self {
            id,
            name: String::new(),
            level: SkillLevel::default(),
            category: DEFAULT_SKILL_CATEGORY.to_string(),
        }
    }
}

/// The whole resume: the aggregate every edit goes through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub last_modified: DateTime<Utc>,
}

impl Resume {
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            experiences: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            last_modified: now,
        }
    }

    /// Skills grouped by category. Categories keep the order in which they
    /// first appear; skills keep insertion order inside their group.
    pub fn skills_by_category(&self) -> Vec<(&str, Vec<&Skill>)> {
        let mut groups: Vec<(&str, Vec<&Skill>)> = Vec::new();
        for skill in &self.skills {
            match groups.iter_mut().find(|(c, _)| *c == skill.category) {
                Some((_, members)) => members.push(skill),
                None => groups.push((skill.category.as_str(), vec![skill])),
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_current_role_hides_end_date() {
        let mut exp = Experience::blank("a".into());
        exp.end_date = "2024-05".into();
        assert_eq!(exp.effective_end_date(), Some("2024-05"));

        exp.current = true;
        assert_eq!(exp.effective_end_date(), None);
        assert_eq!(exp.end_date, "2024-05");
    }

    #[test]
    fn test_empty_end_date_is_none() {
        let exp = Experience::blank("a".into());
        assert_eq!(exp.effective_end_date(), None);
    }

    #[test]
    fn test_new_skill_defaults() {
        let skill = Skill::blank("s".into());
        assert_eq!(skill.level, SkillLevel::Intermediate);
        assert_eq!(skill.category, "Technical");
        assert!(skill.name.is_empty());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let mut resume = Resume::empty(at(0));
        resume.experiences.push(Experience::blank("1".into()));
        resume.education.push(Education::blank("2".into()));
        let json = serde_json::to_value(&resume).unwrap();

        assert!(json.get("personalInfo").is_some());
        assert!(json.get("lastModified").is_some());
        assert!(json["experiences"][0].get("startDate").is_some());
        assert_eq!(json["experiences"][0]["current"], false);
        assert!(json["education"][0].get("gpa").is_none());
    }

    #[test]
    fn test_skill_level_wire_names() {
        let json = serde_json::to_string(&SkillLevel::Expert).unwrap();
        assert_eq!(json, "\"Expert\"");
        let level: SkillLevel = serde_json::from_str("\"Beginner\"").unwrap();
        assert_eq!(level, SkillLevel::Beginner);
    }

    #[test]
    fn test_education_accepts_null_gpa() {
        let raw = r#"{"id":"1","institution":"U","degree":"BSc","field":"CS",
            "startDate":"","endDate":"","gpa":null}"#;
        let edu: Education = serde_json::from_str(raw).unwrap();
        assert_eq!(edu.gpa, None);
    }

    #[test]
    fn test_skills_grouped_in_first_seen_order() {
        let mut resume = Resume::empty(at(0));
        for (id, name, category) in [
            ("1", "Rust", "Programming"),
            ("2", "Postgres", "Database"),
            ("3", "Go", "Programming"),
        ] {
            let mut skill = Skill::blank(id.into());
            skill.name = name.into();
            skill.category = category.into();
            resume.skills.push(skill);
        }

        let groups = resume.skills_by_category();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Programming");
        let names: Vec<_> = groups[0].1.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Rust", "Go"]);
        assert_eq!(groups[1].0, "Database");
    }
}
