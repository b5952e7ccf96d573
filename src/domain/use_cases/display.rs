use chrono::{DateTime, Timelike, Utc};
use std::fmt;

use crate::constants::DAYS_PER_MONTH;
use crate::entities::project::Project;
use crate::entities::skill::{Skill, SkillCategory, SkillStatus};
use crate::errors::AppError;

pub fn category_label(category: SkillCategory) -> &'static str {
    match category {
        SkillCategory::Frontend => "Frontend",
        SkillCategory::Backend => "Backend",
        SkillCategory::Devops => "DevOps",
        SkillCategory::Soft => "Soft Skills",
        SkillCategory::Other => "Other",
    }
}

pub fn category_color(category: SkillCategory) -> &'static str {
    match category {
        SkillCategory::Frontend => "blue",
        SkillCategory::Backend => "purple",
        SkillCategory::Devops => "orange",
        SkillCategory::Soft => "green",
        SkillCategory::Other => "gray",
    }
}

pub fn status_label(status: SkillStatus) -> &'static str {
    match status {
        SkillStatus::Learning => "Learning",
        SkillStatus::Mastered => "Mastered",
        SkillStatus::Paused => "Paused",
        SkillStatus::Unknown => "Unknown",
    }
}

pub fn status_color(status: SkillStatus) -> &'static str {
    match status {
        SkillStatus::Learning => "blue",
        SkillStatus::Mastered => "green",
        SkillStatus::Paused => "gray",
        SkillStatus::Unknown => "gray",
    }
}

/// Arithmetic mean of proficiency over the collection, rounded to the
/// nearest integer. Empty input is an explicit error; callers guard it.
pub fn average_proficiency(skills: &[Skill]) -> Result<u8, AppError> {
    if skills.is_empty() {
        return Err(AppError::EmptyCollection(
            "Cannot average proficiency over zero skills".into(),
        ));
    }

    let sum: u32 = skills.iter().map(|s| s.proficiency as u32).sum();
    Ok((sum as f64 / skills.len() as f64).round() as u8)
}

/// Absolute whole-day difference between two timestamps, rounding partial
/// days up.
pub fn days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
    let millis = (b - a).num_milliseconds().abs();
    (millis + MS_PER_DAY - 1) / MS_PER_DAY
}

pub fn days_since(t: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    days_between(t, now)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectDuration {
    InProgress,
    Days(i64),
    Months(i64),
}

impl fmt::Display for ProjectDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectDuration::InProgress => write!(f, "In Progress"),
            ProjectDuration::Days(n) => write!(f, "{} days", n),
            ProjectDuration::Months(1) => write!(f, "1 month"),
            ProjectDuration::Months(n) => write!(f, "{} months", n),
        }
    }
}

/// Elapsed span of a project: the in-progress sentinel while open, a day
/// count under a month, whole months otherwise.
pub fn project_duration(project: &Project) -> ProjectDuration {
    match project.completion_date {
        None => ProjectDuration::InProgress,
        Some(completed) => {
            let days = days_between(project.start_date, completed);
            if days < DAYS_PER_MONTH {
                ProjectDuration::Days(days)
            } else {
                ProjectDuration::Months(days / DAYS_PER_MONTH)
            }
        }
    }
}

/// Short display form, e.g. "Jan 15, 2022".
pub fn format_date(t: DateTime<Utc>) -> String {
    t.format("%b %-d, %Y").to_string()
}

/// Time-of-day salutation for the dashboard header.
pub fn greeting(now: DateTime<Utc>) -> &'static str {
    match now.hour() {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}
