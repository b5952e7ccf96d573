use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use validator::Validate;

/// Singleton profile record. Loaded once from the dataset and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[validate(length(min = 1, message = "User id cannot be empty"))]
    pub id: String,

    #[validate(length(min = 1, message = "User name cannot be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "User role cannot be empty"))]
    pub role: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<Url>,

    pub joined_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_description: Option<String>,

    /// Minutes per day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_learning_goal: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yearly_goal: Option<String>,
}
