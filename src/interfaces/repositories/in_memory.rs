use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    entities::{project::Project, quote::Quote, skill::Skill, user::User},
    errors::AppError,
    infrastructure::dataset::Dataset,
    repositories::catalog::CatalogRepository,
};

/// Catalog repository over the immutable dataset loaded at startup.
#[derive(Clone)]
pub struct InMemoryCatalog {
    dataset: Arc<Dataset>,
}

impl InMemoryCatalog {
    pub fn new(dataset: Dataset) -> Self {
        InMemoryCatalog {
            dataset: Arc::new(dataset),
        }
    }

    pub fn skill_count(&self) -> usize {
        self.dataset.skills.len()
    }

    pub fn project_count(&self) -> usize {
        self.dataset.projects.len()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn get_profile(&self) -> Result<User, AppError> {
        Ok(self.dataset.user.clone())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        Ok(self.dataset.skills.clone())
    }

    async fn get_skill_by_id(&self, id: &str) -> Result<Option<Skill>, AppError> {
        Ok(self.dataset.skills.iter().find(|s| s.id == id).cloned())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.dataset.projects.clone())
    }

    async fn get_project_by_id(&self, id: &str) -> Result<Option<Project>, AppError> {
        Ok(self.dataset.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn list_quotes(&self) -> Result<Vec<Quote>, AppError> {
        Ok(self.dataset.quotes.clone())
    }
}
