use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::{
    entities::{
        project::ProjectSummary,
        quote::Quote,
        skill::SkillSummary,
        user::User,
    },
    errors::AppError,
    repositories::catalog::CatalogRepository,
    use_cases::{
        display::{format_date, greeting},
        filters::{available_techs, ProjectFilter, SkillFilter},
        stats::{latest_projects, profile_summary, progress_stats, top_skills, ProfileSummary, ProgressStats},
        timeline::{derive_timeline, TimelineEventView},
    },
};

const TOP_SKILLS_LIMIT: usize = 3;
const LATEST_PROJECTS_LIMIT: usize = 2;

#[derive(Debug, Serialize)]
pub struct SkillListResponse {
    pub total: usize,
    pub matched: usize,
    pub filtered: bool,
    pub skills: Vec<SkillSummary>,
}

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub total: usize,
    pub matched: usize,
    pub filtered: bool,
    pub projects: Vec<ProjectSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub greeting: &'static str,
    pub user_name: String,
    pub stats: ProgressStats,
    pub top_skills: Vec<SkillSummary>,
    pub latest_projects: Vec<ProjectSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<Quote>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user: User,
    pub joined_on: String,
    pub summary: ProfileSummary,
}

/// Read-side use cases over the catalog: filtered collections, the timeline
/// feed, and the page aggregates. Pure computation over whatever the
/// repository returns; `now` is threaded through so callers own the clock.
pub struct CatalogHandler<R>
where
    R: CatalogRepository,
{
    pub repo: R,
}

impl<R> CatalogHandler<R>
where
    R: CatalogRepository,
{
    pub fn new(repo: R) -> Self {
        CatalogHandler { repo }
    }

    /// Computes the visible subset of skills for the given filter state.
    pub async fn list_skills(
        &self,
        filter: &SkillFilter,
        now: DateTime<Utc>,
    ) -> Result<SkillListResponse, AppError> {
        let skills = self.repo.list_skills().await?;
        let visible = filter.apply(&skills);

        Ok(SkillListResponse {
            total: skills.len(),
            matched: visible.len(),
            filtered: filter.is_active(),
            skills: visible
                .iter()
                .map(|s| SkillSummary::from_skill(s, now))
                .collect(),
        })
    }

    pub async fn get_skill(&self, id: &str, now: DateTime<Utc>) -> Result<SkillSummary, AppError> {
        self.repo
            .get_skill_by_id(id)
            .await?
            .map(|s| SkillSummary::from_skill(&s, now))
            .ok_or_else(|| AppError::NotFound(format!("Skill {} not found", id)))
    }

    /// Computes the visible subset of projects for the given filter state.
    pub async fn list_projects(
        &self,
        filter: &ProjectFilter,
    ) -> Result<ProjectListResponse, AppError> {
        let projects = self.repo.list_projects().await?;
        let visible = filter.apply(&projects);

        Ok(ProjectListResponse {
            total: projects.len(),
            matched: visible.len(),
            filtered: filter.is_active(),
            projects: visible.iter().map(|p| ProjectSummary::from(*p)).collect(),
        })
    }

    pub async fn get_project(&self, id: &str) -> Result<ProjectSummary, AppError> {
        self.repo
            .get_project_by_id(id)
            .await?
            .map(|p| ProjectSummary::from(&p))
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))
    }

    /// All tech tags in use across projects, sorted and de-duplicated.
    pub async fn tech_tags(&self) -> Result<Vec<String>, AppError> {
        let projects = self.repo.list_projects().await?;
        Ok(available_techs(&projects))
    }

    /// The unified reverse-chronological learning feed.
    pub async fn timeline(&self, now: DateTime<Utc>) -> Result<Vec<TimelineEventView>, AppError> {
        let skills = self.repo.list_skills().await?;
        Ok(derive_timeline(&skills, now)
            .into_iter()
            .map(TimelineEventView::from)
            .collect())
    }

    pub async fn dashboard(&self, now: DateTime<Utc>) -> Result<DashboardResponse, AppError> {
        let user = self.repo.get_profile().await?;
        let skills = self.repo.list_skills().await?;
        let projects = self.repo.list_projects().await?;
        let quotes = self.repo.list_quotes().await?;

        Ok(DashboardResponse {
            greeting: greeting(now),
            user_name: user.name,
            stats: progress_stats(&skills)?,
            top_skills: top_skills(&skills, TOP_SKILLS_LIMIT)
                .into_iter()
                .map(|s| SkillSummary::from_skill(s, now))
                .collect(),
            latest_projects: latest_projects(&projects, LATEST_PROJECTS_LIMIT)
                .into_iter()
                .map(ProjectSummary::from)
                .collect(),
            quote: quotes.choose(&mut rand::thread_rng()).cloned(),
        })
    }

    pub async fn random_quote(&self) -> Result<Quote, AppError> {
        let quotes = self.repo.list_quotes().await?;
        quotes
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| AppError::EmptyCollection("No quotes available".into()))
    }

    pub async fn profile(&self, now: DateTime<Utc>) -> Result<ProfileResponse, AppError> {
        let user = self.repo.get_profile().await?;
        let skills = self.repo.list_skills().await?;
        let projects = self.repo.list_projects().await?;

        let summary = profile_summary(&user, &skills, &projects, now)?;

        Ok(ProfileResponse {
            joined_on: format_date(user.joined_at),
            user,
            summary,
        })
    }
}
