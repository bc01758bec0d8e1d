use chrono::{DateTime, Utc};

use crate::models::{Education, Experience, PersonalInfo, Resume, Skill, SkillLevel};

/// The canned resume behind "load sample" and the stub upload path.
pub fn sample_resume(now: DateTime<Utc>) -> Resume {
    Resume {
        personal_info: PersonalInfo {
            name: "John Doe".into(),
            email: "john.doe@email.com".into(),
            phone: "+1 (555) 123-4567".into(),
            location: "San Francisco, CA".into(),
            summary: "Experienced software developer with 5+ years of expertise in full-stack \
                development, specializing in React, Node.js, and cloud technologies. Passionate \
                about creating scalable solutions and mentoring junior developers."
                .into(),
        },
        experiences: vec![
            Experience {
                id: "1".into(),
                company: "Tech Solutions Inc.".into(),
                position: "Senior Software Developer".into(),
                start_date: "2021-01".into(),
                end_date: String::new(),
                description: "Lead development of React-based web applications serving 100k+ \
                    users. Implemented microservices architecture using Node.js and AWS. \
                    Mentored 3 junior developers and reduced deployment time by 40%."
                    .into(),
                current: true,
            },
            Experience {
                id: "2".into(),
                company: "StartupXYZ".into(),
                position: "Full Stack Developer".into(),
                start_date: "2019-06".into(),
                end_date: "2020-12".into(),
                description: "Built responsive web applications using React and Express.js. \
                    Collaborated with UX team to improve user engagement by 25%. Integrated \
                    third-party APIs and payment systems."
                    .into(),
                current: false,
            },
        ],
        education: vec![Education {
            id: "1".into(),
            institution: "University of California".into(),
            degree: "Bachelor of Science".into(),
            field: "Computer Science".into(),
            start_date: "2015-09".into(),
            end_date: "2019-05".into(),
            gpa: Some("3.7".into()),
        }],
        skills: [
            ("1", "JavaScript", SkillLevel::Expert, "Programming"),
            ("2", "React", SkillLevel::Expert, "Frontend"),
            ("3", "Node.js", SkillLevel::Advanced, "Backend"),
            ("4", "AWS", SkillLevel::Intermediate, "Cloud"),
            ("5", "MongoDB", SkillLevel::Advanced, "Database"),
        ]
        .into_iter()
        .map(|(id, name, level, category)| Skill {
            id: id.into(),
            name: name.into(),
            level,
            category: category.into(),
        })
        .collect(),
        last_modified: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let resume = sample_resume(Utc::now());
        assert_eq!(resume.personal_info.name, "John Doe");
        assert_eq!(resume.experiences.len(), 2);
        assert_eq!(resume.education.len(), 1);
        assert_eq!(resume.skills.len(), 5);
        assert!(resume.experiences[0].current);
        assert_eq!(resume.experiences[0].effective_end_date(), None);
        assert_eq!(resume.experiences[1].effective_end_date(), Some("2020-12"));
    }
}
