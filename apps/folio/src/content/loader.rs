use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::ContentConfig;
use crate::models::content::{
    Contacts, Education, GeneralInfo, Language, PageContent, Skill, SummaryParagraph,
    WorkExperiences,
};

pub const GENERAL_INFO_FILE: &str = "general_info.json";
pub const EDUCATIONS_FILE: &str = "educations.json";
pub const CONTACTS_FILE: &str = "contacts.json";
pub const LANGUAGES_FILE: &str = "languages.json";
pub const WORK_EXP_FILE: &str = "work_exp.json";
pub const SKILLS_FILE: &str = "skills.json";
pub const SUMMARY_FILE: &str = "summary.json";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads one JSON file and decodes it into `T`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let raw = std::fs::read(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_slice(&raw).map_err(|source| ContentError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loaded {}", path.display());
    Ok(value)
}

/// Loads every resume section from the configured content directory.
/// The first unreadable or malformed file aborts the whole load.
pub fn load_page_content(config: &ContentConfig) -> Result<PageContent, ContentError> {
    let dir = config.content_path.as_path();

    let general_info: GeneralInfo = load_json(&dir.join(GENERAL_INFO_FILE))?;
    let educations: Vec<Education> = load_json(&dir.join(EDUCATIONS_FILE))?;
    let contacts: Contacts = load_json(&dir.join(CONTACTS_FILE))?;
    let languages: Vec<Language> = load_json(&dir.join(LANGUAGES_FILE))?;
    let work_experiences: WorkExperiences = load_json(&dir.join(WORK_EXP_FILE))?;
    let skills: Vec<Skill> = load_json(&dir.join(SKILLS_FILE))?;
    let summary: Vec<SummaryParagraph> = load_json(&dir.join(SUMMARY_FILE))?;

    let content = PageContent {
        general_info,
        summary,
        educations,
        contacts,
        languages,
        work_experiences,
        skills,
        portrait_path: config.portrait_path.clone(),
    };

    info!(
        "Content loaded from {}: {} educations, {} workplaces ({} projects), {} skills, {} languages",
        dir.display(),
        content.educations.len(),
        content.work_experiences.workplaces.len(),
        content.project_count(),
        content.skills.len(),
        content.languages.len(),
    );

    Ok(content)
}
