use async_trait::async_trait;

use crate::{
    entities::{project::Project, quote::Quote, skill::Skill, user::User},
    errors::AppError,
};

/// Read-only query interface over the tracked catalog. The in-memory
/// implementation is backed by the seed dataset; a persistence-backed one
/// would slot in here without touching the use cases.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Retrieves the singleton profile record
    async fn get_profile(&self) -> Result<User, AppError>;

    /// Retrieves all tracked skills
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;

    /// Retrieves one skill by its id
    async fn get_skill_by_id(&self, id: &str) -> Result<Option<Skill>, AppError>;

    /// Retrieves all tracked projects
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;

    /// Retrieves one project by its id
    async fn get_project_by_id(&self, id: &str) -> Result<Option<Project>, AppError>;

    /// Retrieves the motivational quote pool
    async fn list_quotes(&self) -> Result<Vec<Quote>, AppError>;
}
