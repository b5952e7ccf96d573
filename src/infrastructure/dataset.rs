use derive_more::Display;
use serde::Deserialize;
use validator::Validate;

use crate::entities::{project::Project, quote::Quote, skill::Skill, user::User};

/// The catalog as ingested: one profile record plus the skill and project
/// collections and the quote pool. Immutable for the process lifetime.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    pub user: User,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub quotes: Vec<Quote>,
}

/// Seed records bundled into the binary, used when no dataset path is
/// configured.
const DEFAULT_DATASET: &str = include_str!("../../data/seed.json");

#[derive(Debug, Display)]
pub enum DatasetError {
    #[display("Failed to read dataset file {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[display("Failed to parse dataset: {_0}")]
    Parse(String),

    #[display("Dataset validation failed: {_0}")]
    Invalid(String),
}

impl std::error::Error for DatasetError {}

/// Loads and validates the bundled seed dataset.
pub fn load_default() -> Result<Dataset, DatasetError> {
    parse_and_validate(DEFAULT_DATASET)
}

/// Loads and validates a dataset from a JSON file on disk.
pub fn load_from_path(path: &str) -> Result<Dataset, DatasetError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_and_validate(&raw)
}

/// Parses the JSON and validates every record. Malformed records reject the
/// whole load so bad timestamps or out-of-range values never reach the date
/// arithmetic downstream; the error names the offending records.
fn parse_and_validate(raw: &str) -> Result<Dataset, DatasetError> {
    let dataset: Dataset =
        serde_json::from_str(raw).map_err(|e| DatasetError::Parse(e.to_string()))?;

    let mut problems = Vec::new();

    if let Err(e) = dataset.user.validate() {
        problems.push(format!("user {}: {}", dataset.user.id, e));
    }
    for skill in &dataset.skills {
        if let Err(e) = skill.validate() {
            problems.push(format!("skill {}: {}", skill.id, e));
        }
    }
    for project in &dataset.projects {
        if let Err(e) = project.validate() {
            problems.push(format!("project {}: {}", project.id, e));
        }
    }
    for (i, quote) in dataset.quotes.iter().enumerate() {
        if let Err(e) = quote.validate() {
            problems.push(format!("quote #{}: {}", i, e));
        }
    }

    if problems.is_empty() {
        tracing::info!(
            skills = dataset.skills.len(),
            projects = dataset.projects.len(),
            quotes = dataset.quotes.len(),
            "Dataset loaded"
        );
        Ok(dataset)
    } else {
        Err(DatasetError::Invalid(problems.join("; ")))
    }
}
