use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use url::Url;
use validator::{Validate, ValidationError};

use crate::use_cases::display::{
    category_color, category_label, days_since, format_date, status_color, status_label,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Devops,
    Soft,
    // Catch-all bucket. Unrecognized categories in ingested data land here.
    #[serde(other)]
    Other,
}

impl FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "frontend" => Ok(SkillCategory::Frontend),
            "backend" => Ok(SkillCategory::Backend),
            "devops" => Ok(SkillCategory::Devops),
            "soft" => Ok(SkillCategory::Soft),
            "other" => Ok(SkillCategory::Other),
            _ => Err(format!("Invalid skill category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillStatus {
    Learning,
    Mastered,
    Paused,
    // Not a member of the learning/mastered/paused set. Unrecognized
    // statuses land here and render as "Unknown", unlike the category
    // fallback which reuses the real "other" bucket.
    #[serde(other)]
    Unknown,
}

impl FromStr for SkillStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "learning" => Ok(SkillStatus::Learning),
            "mastered" => Ok(SkillStatus::Mastered),
            "paused" => Ok(SkillStatus::Paused),
            _ => Err(format!("Invalid skill status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Article,
    Video,
    Course,
    Book,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[validate(length(min = 1, message = "Resource id cannot be empty"))]
    pub id: String,

    #[validate(length(min = 1, message = "Resource title cannot be empty"))]
    pub title: String,

    pub url: Url,

    #[serde(rename = "type")]
    pub kind: ResourceType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    #[validate(length(min = 1, message = "Milestone id cannot be empty"))]
    pub id: String,

    #[validate(length(min = 1, message = "Milestone title cannot be empty"))]
    pub title: String,

    pub date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_practice_window"))]
pub struct Skill {
    #[validate(length(min = 1, message = "Skill id cannot be empty"))]
    pub id: String,

    #[validate(length(min = 1, message = "Skill name cannot be empty"))]
    pub name: String,

    pub category: SkillCategory,

    #[validate(range(min = 0, max = 100, message = "Proficiency must be between 0 and 100"))]
    pub proficiency: u8,

    pub status: SkillStatus,

    pub started_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_practiced: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[validate(nested)]
    pub resources: Vec<Resource>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[validate(nested)]
    pub milestones: Vec<Milestone>,
}

fn validate_practice_window(skill: &Skill) -> Result<(), ValidationError> {
    if let Some(last_practiced) = skill.last_practiced {
        if last_practiced < skill.started_at {
            let mut err = ValidationError::new("invalid_practice_window");
            err.message = Some("lastPracticed cannot predate startedAt".into());
            return Err(err);
        }
    }
    Ok(())
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSummary {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    pub category_label: &'static str,
    pub category_color: &'static str,
    pub proficiency: u8,
    pub status: SkillStatus,
    pub status_label: &'static str,
    pub status_color: &'static str,
    pub started_at: DateTime<Utc>,
    pub started_on: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_practiced: Option<DateTime<Utc>>,

    /// Whole days since the skill was last practiced, absent when the skill
    /// has never been practiced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_since_practice: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub milestones: Vec<Milestone>,
}

impl SkillSummary {
    pub fn from_skill(skill: &Skill, now: DateTime<Utc>) -> Self {
        SkillSummary {
            id: skill.id.clone(),
            name: skill.name.clone(),
            category: skill.category,
            category_label: category_label(skill.category),
            category_color: category_color(skill.category),
            proficiency: skill.proficiency,
            status: skill.status,
            status_label: status_label(skill.status),
            status_color: status_color(skill.status),
            started_at: skill.started_at,
            started_on: format_date(skill.started_at),
            last_practiced: skill.last_practiced,
            days_since_practice: skill.last_practiced.map(|t| days_since(t, now)),
            notes: skill.notes.clone(),
            resources: skill.resources.clone(),
            milestones: skill.milestones.clone(),
        }
    }
}
