use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::constants::MASTERY_FALLBACK_DAYS;
use crate::entities::skill::{Skill, SkillCategory, SkillStatus};
use crate::use_cases::display::{category_color, format_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventKind {
    SkillStarted,
    Milestone,
    SkillMastered,
}

impl TimelineEventKind {
    /// Display icon token for the event. The kind is a closed sum, so the
    /// selection is total by construction.
    pub fn icon(self) -> &'static str {
        match self {
            TimelineEventKind::SkillStarted => "book-open",
            TimelineEventKind::Milestone => "flag",
            TimelineEventKind::SkillMastered => "star",
        }
    }
}

/// One entry of the unified learning feed, carrying a back-reference to the
/// skill it was derived from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TimelineEventKind,
    pub date: DateTime<Utc>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub skill_id: String,
    pub skill_name: String,
    pub category: SkillCategory,
}

/// Expands every skill into its noteworthy events and merges them into one
/// reverse-chronological feed:
///
/// - a `skill_started` event at `startedAt`;
/// - a `milestone` event per milestone, at the milestone's date;
/// - a `skill_mastered` event for mastered skills, dated `lastPracticed`
///   when present, else `now` minus [`MASTERY_FALLBACK_DAYS`]. The fallback
///   is a stand-in for a mastery timestamp the records do not track, which
///   makes the output time-dependent for such skills.
///
/// Events with equal timestamps keep their emission order (the sort is
/// stable), so the feed is reproducible for a fixed `now`.
pub fn derive_timeline(skills: &[Skill], now: DateTime<Utc>) -> Vec<TimelineEvent> {
    let mut events = Vec::new();

    for skill in skills {
        events.push(TimelineEvent {
            id: format!("skill_start_{}", skill.id),
            kind: TimelineEventKind::SkillStarted,
            date: skill.started_at,
            title: format!("Started learning {}", skill.name),
            description: None,
            skill_id: skill.id.clone(),
            skill_name: skill.name.clone(),
            category: skill.category,
        });

        for milestone in &skill.milestones {
            events.push(TimelineEvent {
                id: format!("milestone_{}", milestone.id),
                kind: TimelineEventKind::Milestone,
                date: milestone.date,
                title: milestone.title.clone(),
                description: milestone.description.clone(),
                skill_id: skill.id.clone(),
                skill_name: skill.name.clone(),
                category: skill.category,
            });
        }

        if skill.status == SkillStatus::Mastered {
            let mastered_at = skill
                .last_practiced
                .unwrap_or_else(|| now - Duration::days(MASTERY_FALLBACK_DAYS));

            events.push(TimelineEvent {
                id: format!("skill_mastery_{}", skill.id),
                kind: TimelineEventKind::SkillMastered,
                date: mastered_at,
                title: format!("Mastered {}", skill.name),
                description: None,
                skill_id: skill.id.clone(),
                skill_name: skill.name.clone(),
                category: skill.category,
            });
        }
    }

    events.sort_by(|a, b| b.date.cmp(&a.date));
    events
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEventView {
    #[serde(flatten)]
    pub event: TimelineEvent,
    pub date_label: String,
    pub icon: &'static str,
    pub color: &'static str,
}

impl From<TimelineEvent> for TimelineEventView {
    fn from(event: TimelineEvent) -> Self {
        TimelineEventView {
            date_label: format_date(event.date),
            icon: event.kind.icon(),
            color: category_color(event.category),
            event,
        }
    }
}
