use std::collections::{BTreeSet, HashSet};

use crate::entities::project::Project;
use crate::entities::skill::{Skill, SkillCategory, SkillStatus};

/// Transient, per-request filter state for the skill collection. Each
/// dimension is independent: an empty selection leaves the dimension
/// inactive, and inclusion requires every active dimension to match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillFilter {
    pub search: String,
    pub categories: HashSet<SkillCategory>,
    pub statuses: HashSet<SkillStatus>,
}

impl SkillFilter {
    pub fn matches(&self, skill: &Skill) -> bool {
        let matches_search = self.search.is_empty()
            || skill
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase());

        let matches_category =
            self.categories.is_empty() || self.categories.contains(&skill.category);

        let matches_status = self.statuses.is_empty() || self.statuses.contains(&skill.status);

        matches_search && matches_category && matches_status
    }

    pub fn apply<'a>(&self, skills: &'a [Skill]) -> Vec<&'a Skill> {
        skills.iter().filter(|s| self.matches(s)).collect()
    }

    /// Clears the search term and both selection sets in one step.
    pub fn reset(&mut self) {
        *self = SkillFilter::default();
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.categories.is_empty() || !self.statuses.is_empty()
    }
}

/// Filter state for the project collection: a free-text term matched against
/// name and description, and a tech-tag selection matched against the
/// project's tech stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub search: String,
    pub techs: HashSet<String>,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = self.search.is_empty()
            || project.name.to_lowercase().contains(&term)
            || project.description.to_lowercase().contains(&term);

        let matches_tech = self.techs.is_empty()
            || project.tech_stack.iter().any(|tech| self.techs.contains(tech));

        matches_search && matches_tech
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }

    pub fn reset(&mut self) {
        *self = ProjectFilter::default();
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.techs.is_empty()
    }
}

/// Sorted, de-duplicated union of tech tags across all projects. Drives the
/// filter chips on the projects page.
pub fn available_techs(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|p| p.tech_stack.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
