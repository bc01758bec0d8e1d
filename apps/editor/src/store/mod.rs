//! The single-writer owner of the live resume for one editing session.
//!
//! Every edit runs inside `watch::Sender::send_if_modified`, so writers are
//! mutually exclusive and subscribers see the new value before the call
//! returns. Failed edits neither replace the resume nor notify.
//!
//! Known limitation: `SessionStatus::enhancing` is one slot. With two
//! enhancements in flight it names only the most recently started section,
//! and the first one to finish clears it.

pub mod clock;
pub mod ids;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::api_client::{Enhancement, Enhancer, ResumeSink, EXPERIENCE_SECTION, SUMMARY_SECTION};
use crate::document::{self, Entry};
use crate::errors::EditError;
use crate::export::{export_resume, import_resume, ExportArtifact};
use crate::models::{
    Education, EducationPatch, Experience, ExperiencePatch, PersonalInfoPatch, Resume, Section,
    Skill, SkillPatch,
};

pub use clock::{Clock, ManualClock, SystemClock};
pub use ids::{IdGenerator, SequentialIds, UuidIds};

/// Ids drawn from the configured generator before falling back to a UUID.
const MAX_ID_ATTEMPTS: usize = 16;

/// Progress indicators for the outstanding async operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStatus {
    pub is_saving: bool,
    /// Section name of the most recently started enhancement.
    pub enhancing: Option<String>,
}

pub struct ResumeStore {
    resume: watch::Sender<Resume>,
    status: watch::Sender<SessionStatus>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for ResumeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeStore {
    /// Empty resume, wall-clock time, random UUID ids.
    pub fn new() -> Self {
        Self::with_sources(Arc::new(SystemClock), Arc::new(UuidIds))
    }

    pub fn with_sources(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        let (resume, _) = watch::channel(Resume::empty(clock.now()));
        let (status, _) = watch::channel(SessionStatus::default());
        Self {
            resume,
            status,
            clock,
            ids,
        }
    }

    pub fn snapshot(&self) -> Resume {
        self.resume.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Resume> {
        self.resume.subscribe()
    }

    pub fn status(&self) -> SessionStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<SessionStatus> {
        self.status.subscribe()
    }

    fn replace_with<T>(&self, edit: impl FnOnce(&Resume, DateTime<Utc>) -> (Resume, T)) -> T {
        let mut out = None;
        self.resume.send_modify(|current| {
            let (next, value) = edit(current, self.clock.now());
            *current = next;
            out = Some(value);
        });
        out.unwrap_or_else(|| unreachable!("send_modify always runs its closure"))
    }

    fn try_replace_with<T>(
        &self,
        edit: impl FnOnce(&Resume, DateTime<Utc>) -> Result<(Resume, T), EditError>,
    ) -> Result<T, EditError> {
        let mut out = None;
        self.resume.send_if_modified(|current| match edit(current, self.clock.now()) {
            Ok((next, value)) => {
                *current = next;
                out = Some(Ok(value));
                true
            }
            Err(e) => {
                debug!("Edit rejected: {e}");
                out = Some(Err(e));
                false
            }
        });
        out.unwrap_or_else(|| unreachable!("send_if_modified always runs its closure"))
    }

    /// Draws ids until one is free in the target list. Loaded resumes may
    /// already use ids a fresh generator would hand out. After
    /// `MAX_ID_ATTEMPTS` collisions the generator is bypassed for a UUID.
    fn fresh_id<E: Entry>(&self, current: &Resume) -> String {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if !document::contains_id::<E>(current, &id) {
                return id;
            }
            debug!("Skipping {} id '{}': already in use", E::SECTION, id);
        }
        warn!(
            "Id generator gave {} taken {} ids in a row; using a UUID",
            MAX_ID_ATTEMPTS,
            E::SECTION
        );
        loop {
            let id = UuidIds.next_id();
            if !document::contains_id::<E>(current, &id) {
                return id;
            }
        }
    }

    fn add<E: Entry>(&self) -> String {
        self.replace_with(|current, now| {
            let id = self.fresh_id::<E>(current);
            (document::add_entry::<E>(current, id.clone(), now), id)
        })
    }

    fn update<E: Entry>(&self, id: &str, patch: E::Patch) -> Result<(), EditError> {
        self.try_replace_with(|current, now| {
            Ok((document::update_entry::<E>(current, id, patch, now)?, ()))
        })
    }

    fn remove<E: Entry>(&self, id: &str) -> Result<(), EditError> {
        self.try_replace_with(|current, now| Ok((document::remove_entry::<E>(current, id, now)?, ())))
    }

    // ── Loading ─────────────────────────────────────────────────────────────

    /// Replaces the resume wholesale, keeping its own `last_modified`.
    pub fn load(&self, resume: Resume) {
        info!(
            "Loaded resume for '{}' ({} experiences, {} education, {} skills)",
            resume.personal_info.name,
            resume.experiences.len(),
            resume.education.len(),
            resume.skills.len()
        );
        self.resume.send_replace(resume);
    }

    /// Loads a resume from previously exported or saved JSON.
    pub fn load_json(&self, bytes: &[u8]) -> Result<(), EditError> {
        let resume = import_resume(bytes)?;
        self.load(resume);
        Ok(())
    }

    pub fn load_sample(&self) {
        self.load(document::sample_resume(self.clock.now()));
    }

    /// Upload stub: the file is not parsed, the sample resume is loaded instead.
    pub fn upload_stub(&self, file_name: &str) {
        info!("Upload of '{file_name}' is not parsed; loading sample resume");
        self.load_sample();
    }

    // ── Edits ───────────────────────────────────────────────────────────────

    pub fn set_personal_info(&self, patch: PersonalInfoPatch) {
        self.replace_with(|current, now| (document::set_personal_info(current, patch, now), ()))
    }

    /// Returns the id of the new entry.
    pub fn add_experience(&self) -> String {
        self.add::<Experience>()
    }

    pub fn update_experience(&self, id: &str, patch: ExperiencePatch) -> Result<(), EditError> {
        self.update::<Experience>(id, patch)
    }

    pub fn remove_experience(&self, id: &str) -> Result<(), EditError> {
        self.remove::<Experience>(id)
    }

    pub fn add_education(&self) -> String {
        self.add::<Education>()
    }

    pub fn update_education(&self, id: &str, patch: EducationPatch) -> Result<(), EditError> {
        self.update::<Education>(id, patch)
    }

    pub fn remove_education(&self, id: &str) -> Result<(), EditError> {
        self.remove::<Education>(id)
    }

    pub fn add_skill(&self) -> String {
        self.add::<Skill>()
    }

    pub fn update_skill(&self, id: &str, patch: SkillPatch) -> Result<(), EditError> {
        self.update::<Skill>(id, patch)
    }

    pub fn remove_skill(&self, id: &str) -> Result<(), EditError> {
        self.remove::<Skill>(id)
    }

    // ── Async operations ────────────────────────────────────────────────────

    /// Enhances `content` without writing it anywhere. The status slot names
    /// `section` while the request is outstanding.
    pub async fn enhance_section(
        &self,
        enhancer: &dyn Enhancer,
        section: &str,
        content: &str,
    ) -> Enhancement {
        self.status
            .send_modify(|s| s.enhancing = Some(section.to_string()));
        let enhancement = enhancer.enhance(section, content).await;
        self.status.send_modify(|s| s.enhancing = None);
        enhancement
    }

    /// Enhances the summary and writes the result back as an ordinary edit.
    /// A blank summary is left alone: no request, no edit, and `None`.
    pub async fn enhance_summary(&self, enhancer: &dyn Enhancer) -> Option<Enhancement> {
        let summary = self.resume.borrow().personal_info.summary.clone();
        if summary.trim().is_empty() {
            debug!("Summary is blank; nothing to enhance");
            return None;
        }
        let enhancement = self.enhance_section(enhancer, SUMMARY_SECTION, &summary).await;
        self.set_personal_info(PersonalInfoPatch::summary(enhancement.text()));
        Some(enhancement)
    }

    /// Enhances one experience description and writes it back. Fails with
    /// `NotFound` if the entry is missing before or after the request.
    /// A blank description is left alone and yields `Ok(None)`.
    pub async fn enhance_experience(
        &self,
        enhancer: &dyn Enhancer,
        id: &str,
    ) -> Result<Option<Enhancement>, EditError> {
        let description = {
            let resume = self.resume.borrow();
            let found = resume
                .experiences
                .iter()
                .find(|e| e.id == id)
                .map(|e| e.description.clone());
            found
        }
        .ok_or_else(|| EditError::NotFound {
            section: Section::Experience,
            id: id.to_string(),
        })?;
        if description.trim().is_empty() {
            debug!("Experience '{id}' has a blank description; nothing to enhance");
            return Ok(None);
        }

        let enhancement = self
            .enhance_section(enhancer, EXPERIENCE_SECTION, &description)
            .await;
        self.update_experience(id, ExperiencePatch::description(enhancement.text()))?;
        Ok(Some(enhancement))
    }

    /// Sends a snapshot of the current resume. No reentrancy guard: two
    /// overlapping saves race, and whichever finishes last sets `is_saving`.
    pub async fn save(&self, sink: &dyn ResumeSink) -> bool {
        self.status.send_modify(|s| s.is_saving = true);
        let snapshot = self.snapshot();
        let saved = sink.save(&snapshot).await;
        self.status.send_modify(|s| s.is_saving = false);
        saved
    }

    /// Export artifact dated with the store clock's UTC day.
    pub fn export(&self) -> Result<ExportArtifact, EditError> {
        let today = self.clock.now().date_naive();
        export_resume(&self.resume.borrow(), today)
    }
}
