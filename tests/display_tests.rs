
use devtrack_backend::entities::skill::{SkillCategory, SkillStatus};
use devtrack_backend::errors::AppError;
use chrono::{TimeZone, Utc};
use devtrack_backend::use_cases::display::{
    average_proficiency, category_color, category_label, days_between, format_date, greeting,
    project_duration, status_color, status_label, ProjectDuration,
};
use test_data::{date, TestProject, TestSkill};

#[test]
fn category_labels_cover_every_variant() {
    let cases = [
        (SkillCategory::Frontend, "Frontend", "blue"),
        (SkillCategory::Backend, "Backend", "purple"),
        (SkillCategory::Devops, "DevOps", "orange"),
        (SkillCategory::Soft, "Soft Skills", "green"),
        (SkillCategory::Other, "Other", "gray"),
    ];

    for (category, label, color) in cases {
        assert_eq!(category_label(category), label);
        assert_eq!(category_color(category), color);
        assert!(!category_label(category).is_empty());
    }
}

#[test]
fn unrecognized_category_falls_back_to_other_bucket() {
    // Ingestion routes unknown categories into the catch-all variant, so the
    // fallback rendering is the Other bucket's label and color.
    let skill: devtrack_backend::entities::skill::Skill = serde_json::from_value(
        serde_json::json!({
            "id": "x",
            "name": "Quantum Basket Weaving",
            "category": "quantum",
            "proficiency": 10,
            "status": "learning",
            "startedAt": "2022-01-01T00:00:00Z"
        }),
    )
    .unwrap();

    assert_eq!(skill.category, SkillCategory::Other);
    assert_eq!(category_label(skill.category), "Other");
    assert_eq!(category_color(skill.category), "gray");
}

#[test]
fn unrecognized_status_renders_unknown_not_other() {
    // The status fallback is "Unknown", deliberately different from the
    // category fallback above.
    let skill: devtrack_backend::entities::skill::Skill = serde_json::from_value(
        serde_json::json!({
            "id": "x",
            "name": "HTML",
            "category": "frontend",
            "proficiency": 10,
            "status": "archived",
            "startedAt": "2022-01-01T00:00:00Z"
        }),
    )
    .unwrap();

    assert_eq!(skill.status, SkillStatus::Unknown);
    assert_eq!(status_label(skill.status), "Unknown");
    assert_ne!(status_label(skill.status), "Other");
    assert_eq!(status_color(skill.status), "gray");
}

#[test]
fn status_labels_cover_every_variant() {
    assert_eq!(status_label(SkillStatus::Learning), "Learning");
    assert_eq!(status_label(SkillStatus::Mastered), "Mastered");
    assert_eq!(status_label(SkillStatus::Paused), "Paused");
    assert_eq!(status_color(SkillStatus::Learning), "blue");
    assert_eq!(status_color(SkillStatus::Mastered), "green");
    assert_eq!(status_color(SkillStatus::Paused), "gray");
}

#[test]
fn average_proficiency_rounds_to_nearest() {
    let skills = vec![
        TestSkill::new("1", "a").proficiency(85).build(),
        TestSkill::new("2", "b").proficiency(75).build(),
        TestSkill::new("3", "c").proficiency(80).build(),
    ];
    assert_eq!(average_proficiency(&skills).unwrap(), 80);

    let skills = vec![
        TestSkill::new("1", "a").proficiency(50).build(),
        TestSkill::new("2", "b").proficiency(51).build(),
    ];
    // 50.5 rounds up.
    assert_eq!(average_proficiency(&skills).unwrap(), 51);

    let skills = vec![TestSkill::new("1", "a").proficiency(67).build()];
    assert_eq!(average_proficiency(&skills).unwrap(), 67);
}

#[test]
fn average_proficiency_rejects_empty_input() {
    let result = average_proficiency(&[]);
    assert!(matches!(result, Err(AppError::EmptyCollection(_))));
}

#[test]
fn days_between_rounds_partial_days_up() {
    let a = date(2022, 1, 1);
    assert_eq!(days_between(a, date(2022, 1, 11)), 10);

    let half_day_later = date(2022, 1, 11) + chrono::Duration::hours(12);
    assert_eq!(days_between(a, half_day_later), 11);

    let one_second_later = a + chrono::Duration::seconds(1);
    assert_eq!(days_between(a, one_second_later), 1);
}

#[test]
fn days_between_is_symmetric() {
    let a = date(2022, 1, 1);
    let b = date(2022, 3, 1);
    assert_eq!(days_between(a, b), days_between(b, a));
    assert_eq!(days_between(a, a), 0);
}

#[test]
fn short_project_duration_renders_days() {
    let project = TestProject::new("1", "p")
        .started(date(2022, 3, 1))
        .completed(date(2022, 3, 11))
        .build();

    assert_eq!(project_duration(&project), ProjectDuration::Days(10));
    assert_eq!(project_duration(&project).to_string(), "10 days");
}

#[test]
fn long_project_duration_renders_whole_months() {
    let project = TestProject::new("1", "p")
        .started(date(2022, 3, 1))
        .completed(date(2022, 3, 1) + chrono::Duration::days(65))
        .build();

    assert_eq!(project_duration(&project), ProjectDuration::Months(2));
    assert_eq!(project_duration(&project).to_string(), "2 months");
}

#[test]
fn one_month_duration_is_singular() {
    let project = TestProject::new("1", "p")
        .started(date(2022, 3, 1))
        .completed(date(2022, 3, 31))
        .build();

    assert_eq!(project_duration(&project), ProjectDuration::Months(1));
    assert_eq!(project_duration(&project).to_string(), "1 month");
}

#[test]
fn open_project_is_in_progress_regardless_of_age() {
    let project = TestProject::new("1", "p").started(date(2019, 1, 1)).build();

    assert_eq!(project_duration(&project), ProjectDuration::InProgress);
    assert_eq!(project_duration(&project).to_string(), "In Progress");
}

#[test]
fn format_date_uses_short_month_form() {
    assert_eq!(format_date(date(2022, 1, 15)), "Jan 15, 2022");
    assert_eq!(format_date(date(2023, 12, 3)), "Dec 3, 2023");
}

#[test]
fn greeting_follows_the_hour() {
    let at = |h| Utc.with_ymd_and_hms(2023, 6, 1, h, 0, 0).unwrap();
    assert_eq!(greeting(at(8)), "Good morning");
    assert_eq!(greeting(at(11)), "Good morning");
    assert_eq!(greeting(at(12)), "Good afternoon");
    assert_eq!(greeting(at(17)), "Good afternoon");
    assert_eq!(greeting(at(18)), "Good evening");
    assert_eq!(greeting(at(23)), "Good evening");
}
