use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::project::Project;
use crate::entities::skill::{Skill, SkillStatus};
use crate::entities::user::User;
use crate::errors::AppError;
use crate::use_cases::display::{average_proficiency, days_since};

/// Headline numbers for the dashboard stat cards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub total_skills: usize,
    pub mastered_skills: usize,
    pub learning_skills: usize,
    pub average_proficiency: u8,

    /// Name of the most recently practiced skill, if any has been practiced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_practiced_skill: Option<String>,
}

pub fn progress_stats(skills: &[Skill]) -> Result<ProgressStats, AppError> {
    let average = average_proficiency(skills)?;

    let last_practiced_skill = skills
        .iter()
        .filter_map(|s| s.last_practiced.map(|t| (t, &s.name)))
        .max_by_key(|(t, _)| *t)
        .map(|(_, name)| name.clone());

    Ok(ProgressStats {
        total_skills: skills.len(),
        mastered_skills: count_status(skills, SkillStatus::Mastered),
        learning_skills: count_status(skills, SkillStatus::Learning),
        average_proficiency: average,
        last_practiced_skill,
    })
}

fn count_status(skills: &[Skill], status: SkillStatus) -> usize {
    skills.iter().filter(|s| s.status == status).count()
}

/// The `limit` highest-proficiency skills, best first.
pub fn top_skills(skills: &[Skill], limit: usize) -> Vec<&Skill> {
    let mut ranked: Vec<&Skill> = skills.iter().collect();
    ranked.sort_by(|a, b| b.proficiency.cmp(&a.proficiency));
    ranked.truncate(limit);
    ranked
}

/// The `limit` most recently started projects, newest first.
pub fn latest_projects(projects: &[Project], limit: usize) -> Vec<&Project> {
    let mut ranked: Vec<&Project> = projects.iter().collect();
    ranked.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    ranked.truncate(limit);
    ranked
}

/// Aggregate figures for the profile page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub total_skills: usize,
    pub mastered_skills: usize,
    /// Share of skills mastered, rounded to a whole percentage.
    pub mastered_percentage: u8,
    pub average_proficiency: u8,
    pub total_projects: usize,
    pub completed_projects: usize,
    pub days_since_joined: i64,
}

pub fn profile_summary(
    user: &User,
    skills: &[Skill],
    projects: &[Project],
    now: DateTime<Utc>,
) -> Result<ProfileSummary, AppError> {
    let average = average_proficiency(skills)?;

    // average_proficiency already rejected an empty catalog, so the
    // percentage division below cannot hit zero.
    let mastered = count_status(skills, SkillStatus::Mastered);
    let mastered_percentage = (mastered as f64 / skills.len() as f64 * 100.0).round() as u8;

    Ok(ProfileSummary {
        total_skills: skills.len(),
        mastered_skills: mastered,
        mastered_percentage,
        average_proficiency: average,
        total_projects: projects.len(),
        completed_projects: projects.iter().filter(|p| !p.in_progress()).count(),
        days_since_joined: days_since(user.joined_at, now),
    })
}
