//! File export: pretty-printed JSON plus a predictable file name.
//! Writing the bytes anywhere is up to the host.

use bytes::Bytes;
use chrono::NaiveDate;

use crate::errors::EditError;
use crate::models::Resume;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub bytes: Bytes,
}

/// `resume_<name>_<YYYY-MM-DD>.json`, each whitespace run in the name
/// replaced by a single `_`.
pub fn export_filename(name: &str, date: NaiveDate) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('_');
            }
            in_space = true;
        } else {
            slug.push(c);
            in_space = false;
        }
    }
    format!("resume_{}_{}.json", slug, date.format("%Y-%m-%d"))
}

pub fn export_resume(resume: &Resume, date: NaiveDate) -> Result<ExportArtifact, EditError> {
    let bytes = serde_json::to_vec_pretty(resume)?;
    Ok(ExportArtifact {
        filename: export_filename(&resume.personal_info.name, date),
        bytes: Bytes::from(bytes),
    })
}

/// Parses an exported (or previously saved) resume.
pub fn import_resume(bytes: &[u8]) -> Result<Resume, EditError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{add_education, sample_resume};
    use chrono::{TimeZone, Utc};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_filename_pattern() {
        assert_eq!(
            export_filename("John Doe", day()),
            "resume_John_Doe_2024-03-09.json"
        );
    }

    #[test]
    fn test_filename_collapses_whitespace_runs() {
        assert_eq!(
            export_filename("Mary  Ann\tSmith", day()),
            "resume_Mary_Ann_Smith_2024-03-09.json"
        );
        assert_eq!(export_filename(" Jo ", day()), "resume__Jo__2024-03-09.json");
    }

    #[test]
    fn test_filename_empty_name() {
        assert_eq!(export_filename("", day()), "resume__2024-03-09.json");
    }

    #[test]
    fn test_same_day_same_name_same_filename() {
        let resume = sample_resume(Utc.with_ymd_and_hms(2024, 3, 9, 8, 0, 0).unwrap());
        let a = export_resume(&resume, day()).unwrap();
        let b = export_resume(&resume, day()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_export_is_two_space_indented_camel_case() {
        let resume = sample_resume(Utc.with_ymd_and_hms(2024, 3, 9, 8, 0, 0).unwrap());
        let artifact = export_resume(&resume, day()).unwrap();
        let text = std::str::from_utf8(&artifact.bytes).unwrap();

        assert!(text.starts_with("{\n  \"personalInfo\": {\n    \"name\": \"John Doe\""));
        assert!(text.contains("\"lastModified\": \"2024-03-09T08:00:00Z\""));
    }

    #[test]
    fn test_export_then_import_is_lossless() {
        let now = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        let resume = add_education(&sample_resume(now), "new".into(), now);
        let artifact = export_resume(&resume, day()).unwrap();

        let back = import_resume(&artifact.bytes).unwrap();
        assert_eq!(back, resume);
    }

    #[test]
    fn test_import_rejects_garbage() {
        assert!(matches!(
            import_resume(b"{\"personalInfo\": 3}"),
            Err(EditError::Json(_))
        ));
    }
}
