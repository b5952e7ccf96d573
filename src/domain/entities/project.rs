use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use validator::{Validate, ValidationError};

use crate::use_cases::display::{format_date, project_duration};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_project_window"))]
pub struct Project {
    #[validate(length(min = 1, message = "Project id cannot be empty"))]
    pub id: String,

    #[validate(length(min = 1, message = "Project name cannot be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Project description cannot be empty"))]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<Url>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Url>,

    /// Skill names, loosely coupled to the skill records. No referential
    /// integrity is enforced.
    #[serde(default)]
    pub tech_stack: Vec<String>,

    pub start_date: DateTime<Utc>,

    /// Absent means the project is still in progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<DateTime<Utc>>,
}

impl Project {
    pub fn in_progress(&self) -> bool {
        self.completion_date.is_none()
    }
}

fn validate_project_window(project: &Project) -> Result<(), ValidationError> {
    if let Some(completed) = project.completion_date {
        if completed < project.start_date {
            let mut err = ValidationError::new("invalid_project_window");
            err.message = Some("completionDate cannot predate startDate".into());
            return Err(err);
        }
    }
    Ok(())
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<Url>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Url>,

    pub tech_stack: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub started_on: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<DateTime<Utc>>,

    pub in_progress: bool,

    /// Rendered duration: "In Progress", "N days", or "N months".
    pub duration: String,
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        ProjectSummary {
            id: project.id.clone(),
            name: project.name.clone(),
            description: project.description.clone(),
            url: project.url.clone(),
            repo_url: project.repo_url.clone(),
            image_url: project.image_url.clone(),
            tech_stack: project.tech_stack.clone(),
            start_date: project.start_date,
            started_on: format_date(project.start_date),
            completion_date: project.completion_date,
            in_progress: project.in_progress(),
            duration: project_duration(project).to_string(),
        }
    }
}
