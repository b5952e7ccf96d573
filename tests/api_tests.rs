
use reqwest::StatusCode;
use serde_json::Value;
use test_utils::TestApp;

#[actix_rt::test]
async fn home_returns_service_banner() {
    let app = TestApp::spawn().await;

    let response = app.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "Ok");
    assert!(body["version"].as_str().is_some());
}

#[actix_rt::test]
async fn health_reports_dataset_counts() {
    let app = TestApp::spawn().await;

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["dataset"]["skills"], 8);
    assert_eq!(body["dataset"]["projects"], 4);
    assert_eq!(body["theme"], "light");
}

#[actix_rt::test]
async fn skill_list_returns_the_full_catalog_unfiltered() {
    let app = TestApp::spawn().await;

    let body: Value = app.get("/api/v1/skills").await.json().await.unwrap();

    assert_eq!(body["total"], 8);
    assert_eq!(body["matched"], 8);
    assert_eq!(body["filtered"], false);
}

#[actix_rt::test]
async fn skill_filters_combine_across_dimensions() {
    let app = TestApp::spawn().await;

    let body: Value = app
        .get("/api/v1/skills?categories=frontend&statuses=learning")
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(body["total"], 8);
    assert_eq!(body["matched"], 4);
    assert_eq!(body["filtered"], true);

    let names: Vec<&str> = body["skills"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["CSS", "JavaScript", "React", "TypeScript"]);
}

#[actix_rt::test]
async fn skill_search_is_case_insensitive() {
    let app = TestApp::spawn().await;

    let body: Value = app.get("/api/v1/skills?q=REACT").await.json().await.unwrap();

    assert_eq!(body["matched"], 1);
    assert_eq!(body["skills"][0]["name"], "React");
}

#[actix_rt::test]
async fn unknown_category_filter_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/v1/skills?categories=quantum").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Validation failed");
}

#[actix_rt::test]
async fn skill_detail_carries_display_tokens() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/v1/skills/1").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["name"], "HTML");
    assert_eq!(body["categoryLabel"], "Frontend");
    assert_eq!(body["categoryColor"], "blue");
    assert_eq!(body["statusLabel"], "Mastered");
    assert_eq!(body["startedOn"], "Jan 15, 2022");
    assert!(body["daysSincePractice"].as_i64().is_some());
}

#[actix_rt::test]
async fn unknown_skill_returns_404() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/v1/skills/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn project_tech_filter_intersects_stacks() {
    let app = TestApp::spawn().await;

    let body: Value = app
        .get("/api/v1/projects?techs=React")
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(body["matched"], 2);
    let names: Vec<&str> = body["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Weather Dashboard", "E-commerce Store"]);
}

#[actix_rt::test]
async fn project_search_matches_description_too() {
    let app = TestApp::spawn().await;

    let body: Value = app
        .get("/api/v1/projects?q=forecasts")
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(body["matched"], 1);
    assert_eq!(body["projects"][0]["name"], "Weather Dashboard");
}

#[actix_rt::test]
async fn open_project_renders_the_in_progress_sentinel() {
    let app = TestApp::spawn().await;

    let body: Value = app.get("/api/v1/projects/4").await.json().await.unwrap();

    assert_eq!(body["name"], "E-commerce Store");
    assert_eq!(body["inProgress"], true);
    assert_eq!(body["duration"], "In Progress");
}

#[actix_rt::test]
async fn completed_project_renders_month_duration() {
    // Personal Portfolio: 2022-03-01 to 2022-04-15 is 45 days.
    let app = TestApp::spawn().await;

    let body: Value = app.get("/api/v1/projects/1").await.json().await.unwrap();

    assert_eq!(body["inProgress"], false);
    assert_eq!(body["duration"], "1 month");
}

#[actix_rt::test]
async fn tech_tags_are_sorted_and_unique() {
    let app = TestApp::spawn().await;

    let body: Value = app.get("/api/v1/projects/techs").await.json().await.unwrap();

    let techs: Vec<&str> = body["techs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t.as_str().unwrap())
        .collect();
    assert_eq!(techs, vec!["CSS", "HTML", "JavaScript", "Node.js", "React"]);
}

#[actix_rt::test]
async fn timeline_is_a_descending_feed_of_derived_events() {
    let app = TestApp::spawn().await;

    let body: Value = app.get("/api/v1/timeline").await.json().await.unwrap();

    // 8 starts, 1 milestone, 2 masteries.
    assert_eq!(body["total"], 11);

    let events = body["events"].as_array().unwrap();
    assert_eq!(events[0]["title"], "Mastered Communication");
    assert_eq!(events[0]["type"], "skill_mastered");
    assert_eq!(events[0]["icon"], "star");

    let mut last: Option<String> = None;
    for event in events {
        let date = event["date"].as_str().unwrap().to_string();
        if let Some(prev) = &last {
            assert!(*prev >= date, "Feed not descending: {} before {}", prev, date);
        }
        last = Some(date);
    }
}

#[actix_rt::test]
async fn dashboard_aggregates_stats_and_rankings() {
    let app = TestApp::spawn().await;

    let body: Value = app.get("/api/v1/dashboard").await.json().await.unwrap();

    assert_eq!(body["userName"], "Avantika");
    assert!(body["greeting"].as_str().unwrap().starts_with("Good"));

    assert_eq!(body["stats"]["totalSkills"], 8);
    assert_eq!(body["stats"]["masteredSkills"], 2);
    assert_eq!(body["stats"]["learningSkills"], 6);
    assert_eq!(body["stats"]["averageProficiency"], 66);
    assert_eq!(body["stats"]["lastPracticedSkill"], "TypeScript");

    assert_eq!(body["topSkills"].as_array().unwrap().len(), 3);
    assert_eq!(body["topSkills"][0]["proficiency"], 85);

    assert_eq!(body["latestProjects"].as_array().unwrap().len(), 2);
    assert_eq!(body["latestProjects"][0]["name"], "E-commerce Store");

    assert!(body["quote"]["author"].as_str().is_some());
}

#[actix_rt::test]
async fn profile_summarizes_the_journey() {
    let app = TestApp::spawn().await;

    let body: Value = app.get("/api/v1/profile").await.json().await.unwrap();

    assert_eq!(body["user"]["name"], "Avantika");
    assert_eq!(body["joinedOn"], "Jan 15, 2023");
    assert_eq!(body["summary"]["masteredPercentage"], 25);
    assert_eq!(body["summary"]["averageProficiency"], 66);
    assert_eq!(body["summary"]["totalProjects"], 4);
    assert_eq!(body["summary"]["completedProjects"], 3);
}

#[actix_rt::test]
async fn quote_endpoint_serves_from_the_pool() {
    let app = TestApp::spawn().await;

    let body: Value = app.get("/api/v1/dashboard/quote").await.json().await.unwrap();

    assert!(body["text"].as_str().is_some());
    assert!(body["author"].as_str().is_some());
}

#[actix_rt::test]
async fn theme_lifecycle_reads_updates_and_toggles() {
    let app = TestApp::spawn().await;

    let body: Value = app.get("/api/v1/theme").await.json().await.unwrap();
    assert_eq!(body["theme"], "light");

    let response = app
        .client
        .put(format!("{}/api/v1/theme", app.address))
        .json(&serde_json::json!({ "theme": "dark" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = app.get("/api/v1/theme").await.json().await.unwrap();
    assert_eq!(body["theme"], "dark");

    let response = app
        .client
        .post(format!("{}/api/v1/theme/toggle", app.address))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["theme"], "light");
}

#[actix_rt::test]
async fn invalid_theme_payload_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .put(format!("{}/api/v1/theme", app.address))
        .json(&serde_json::json!({ "theme": "sepia" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
