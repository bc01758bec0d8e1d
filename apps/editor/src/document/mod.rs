//! Pure edits over a [`Resume`] value.
//!
//! Every function takes the current resume and returns the next one; nothing
//! here holds state. Each successful edit stamps `last_modified` with the
//! `now` it was given, never moving it backwards.

pub mod sample;

use chrono::{DateTime, Utc};

use crate::errors::EditError;
use crate::models::{
    Education, EducationPatch, Experience, ExperiencePatch, PersonalInfoPatch, Resume, Section,
    Skill, SkillPatch,
};

pub use sample::sample_resume;

/// An identity-bearing list entry of the resume.
pub trait Entry: Clone {
    const SECTION: Section;
    type Patch;

    fn id(&self) -> &str;
    fn blank(id: String) -> Self;
    fn merge(&mut self, patch: Self::Patch);
    fn list(resume: &Resume) -> &Vec<Self>;
    fn list_mut(resume: &mut Resume) -> &mut Vec<Self>;
}

impl Entry for Experience {
    const SECTION: Section = Section::Experience;
    type Patch = ExperiencePatch;

    fn id(&self) -> &str {
        &self.id
    }
    fn blank(id: String) -> Self {
        Experience::blank(id)
    }
    fn merge(&mut self, patch: ExperiencePatch) {
        patch.apply(self)
    }
    fn list(resume: &Resume) -> &Vec<Self> {
        &resume.experiences
    }
    fn list_mut(resume: &mut Resume) -> &mut Vec<Self> {
        &mut resume.experiences
    }
}

impl Entry for Education {
    const SECTION: Section = Section::Education;
    type Patch = EducationPatch;

    fn id(&self) -> &str {
        &self.id
    }
    fn blank(id: String) -> Self {
        Education::blank(id)
    }
    fn merge(&mut self, patch: EducationPatch) {
        patch.apply(self)
    }
    fn list(resume: &Resume) -> &Vec<Self> {
        &resume.education
    }
    fn list_mut(resume: &mut Resume) -> &mut Vec<Self> {
        &mut resume.education
    }
}

impl Entry for Skill {
    const SECTION: Section = Section::Skill;
    type Patch = SkillPatch;

    fn id(&self) -> &str {
        &self.id
    }
    fn blank(id: String) -> Self {
        Skill::blank(id)
    }
    fn merge(&mut self, patch: SkillPatch) {
        patch.apply(self)
    }
    fn list(resume: &Resume) -> &Vec<Self> {
        &resume.skills
    }
    fn list_mut(resume: &mut Resume) -> &mut Vec<Self> {
        &mut resume.skills
    }
}

fn stamp(resume: &mut Resume, now: DateTime<Utc>) {
    resume.last_modified = resume.last_modified.max(now);
}

fn position<E: Entry>(resume: &Resume, id: &str) -> Result<usize, EditError> {
    E::list(resume)
        .iter()
        .position(|e| e.id() == id)
        .ok_or_else(|| EditError::NotFound {
            section: E::SECTION,
            id: id.to_string(),
        })
}

/// True if `id` is already taken in the list `E` lives in.
pub fn contains_id<E: Entry>(resume: &Resume, id: &str) -> bool {
    E::list(resume).iter().any(|e| e.id() == id)
}

/// Appends a blank entry with the given id. The caller owns id uniqueness.
pub fn add_entry<E: Entry>(resume: &Resume, id: String, now: DateTime<Utc>) -> Resume {
    let mut next = resume.clone();
    E::list_mut(&mut next).push(E::blank(id));
    stamp(&mut next, now);
    next
}

pub fn update_entry<E: Entry>(
    resume: &Resume,
    id: &str,
    patch: E::Patch,
    now: DateTime<Utc>,
) -> Result<Resume, EditError> {
    let idx = position::<E>(resume, id)?;
    let mut next = resume.clone();
    E::list_mut(&mut next)[idx].merge(patch);
    stamp(&mut next, now);
    Ok(next)
}

/// Removes the entry, keeping the relative order of the rest.
pub fn remove_entry<E: Entry>(
    resume: &Resume,
    id: &str,
    now: DateTime<Utc>,
) -> Result<Resume, EditError> {
    let idx = position::<E>(resume, id)?;
    let mut next = resume.clone();
    E::list_mut(&mut next).remove(idx);
    stamp(&mut next, now);
    Ok(next)
}

pub fn set_personal_info(resume: &Resume, patch: PersonalInfoPatch, now: DateTime<Utc>) -> Resume {
    let mut next = resume.clone();
    patch.apply(&mut next.personal_info);
    stamp(&mut next, now);
    next
}

pub fn add_experience(resume: &Resume, id: String, now: DateTime<Utc>) -> Resume {
    add_entry::<Experience>(resume, id, now)
}

pub fn update_experience(
    resume: &Resume,
    id: &str,
    patch: ExperiencePatch,
    now: DateTime<Utc>,
) -> Result<Resume, EditError> {
    update_entry::<Experience>(resume, id, patch, now)
}

pub fn remove_experience(resume: &Resume, id: &str, now: DateTime<Utc>) -> Result<Resume, EditError> {
    remove_entry::<Experience>(resume, id, now)
}

pub fn add_education(resume: &Resume, id: String, now: DateTime<Utc>) -> Resume {
    add_entry::<Education>(resume, id, now)
}

pub fn update_education(
    resume: &Resume,
    id: &str,
    patch: EducationPatch,
    now: DateTime<Utc>,
) -> Result<Resume, EditError> {
    update_entry::<Education>(resume, id, patch, now)
}

pub fn remove_education(resume: &Resume, id: &str, now: DateTime<Utc>) -> Result<Resume, EditError> {
    remove_entry::<Education>(resume, id, now)
}

pub fn add_skill(resume: &Resume, id: String, now: DateTime<Utc>) -> Resume {
    add_entry::<Skill>(resume, id, now)
}

pub fn update_skill(
    resume: &Resume,
    id: &str,
    patch: SkillPatch,
    now: DateTime<Utc>,
) -> Result<Resume, EditError> {
    update_entry::<Skill>(resume, id, patch, now)
}

pub fn remove_skill(resume: &Resume, id: &str, now: DateTime<Utc>) -> Result<Resume, EditError> {
    remove_entry::<Skill>(resume, id, now)
}
