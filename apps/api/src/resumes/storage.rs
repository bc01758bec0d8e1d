//! Saved resumes: kept in memory and mirrored to `<data_dir>/<id>.json` so
//! they survive a restart.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use editor::Resume;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::errors::AppError;

pub struct SavedResume {
    pub id: String,
    pub timestamp: DateTime<Utc>,
}

pub struct ResumeRepository {
    data_dir: PathBuf,
    resumes: RwLock<BTreeMap<String, Resume>>,
}

/// `<name, spaces and path separators as _>_<YYYYmmdd_HHMMSS>`.
pub fn resume_id(name: &str, at: DateTime<Utc>) -> String {
    let name: String = name
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    format!("{}_{}", name, at.format("%Y%m%d_%H%M%S"))
}

impl ResumeRepository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            resumes: RwLock::new(BTreeMap::new()),
        }
    }

    /// Opens the repository and reads back every `*.json` file already in
    /// `data_dir`. Unreadable files are skipped with a warning.
    pub async fn open(data_dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let repo = Self::new(data_dir);
        let mut entries = match tokio::fs::read_dir(&repo.data_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(repo),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read data directory {}", repo.data_dir.display())
                })
            }
        };

        let mut loaded = BTreeMap::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()).map(String::from) else {
                continue;
            };
            match read_resume(&path).await {
                Ok(resume) => {
                    loaded.insert(id, resume);
                }
                Err(e) => warn!("Skipping {}: {e:#}", path.display()),
            }
        }

        info!(
            "Loaded {} saved resumes from {}",
            loaded.len(),
            repo.data_dir.display()
        );
        *repo.resumes.write().await = loaded;
        Ok(repo)
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.data_dir.join(format!("{id}.json"))
    }

    /// Stamps `last_modified` with `now`, writes the file, then records the
    /// resume in memory. A failed write leaves nothing behind in memory.
    pub async fn save(&self, mut resume: Resume, now: DateTime<Utc>) -> Result<SavedResume, AppError> {
        let id = resume_id(&resume.personal_info.name, now);
        resume.last_modified = now;

        let json = serde_json::to_vec_pretty(&resume).context("Failed to serialize resume")?;
        tokio::fs::create_dir_all(&self.data_dir).await?;
        tokio::fs::write(self.path_for(&id), json).await?;

        self.resumes.write().await.insert(id.clone(), resume);
        info!("Saved resume {id}");

        Ok(SavedResume { id, timestamp: now })
    }

    pub async fn list_ids(&self) -> Vec<String> {
        self.resumes.read().await.keys().cloned().collect()
    }

    pub async fn count(&self) -> usize {
        self.resumes.read().await.len()
    }

    pub async fn get(&self, id: &str) -> Result<Resume, AppError> {
        self.resumes
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))
    }

    /// Drops the resume from memory and removes its file if one exists.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if self.resumes.write().await.remove(id).is_none() {
            return Err(AppError::NotFound("Resume not found".to_string()));
        }

        match tokio::fs::remove_file(self.path_for(id)).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        info!("Deleted resume {id}");
        Ok(())
    }
}

async fn read_resume(path: &Path) -> anyhow::Result<Resume> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
