use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use crate::{
    errors::AppError, interfaces::handlers::skills::split_csv, use_cases::filters::ProjectFilter,
    AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct ProjectFilterQuery {
    pub q: Option<String>,
    pub techs: Option<String>,
}

impl ProjectFilterQuery {
    pub fn into_filter(self) -> ProjectFilter {
        let mut filter = ProjectFilter::default();

        if let Some(q) = self.q {
            filter.search = q;
        }
        filter.techs = split_csv(self.techs.as_deref())
            .map(str::to_string)
            .collect();

        filter
    }
}

#[get("/projects")]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectFilterQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner().into_filter();
    let response = state.catalog.list_projects(&filter).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/projects/techs")]
pub async fn list_techs(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let techs = state.catalog.tech_tags().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "techs": techs })))
}

#[get("/projects/{project_id}")]
pub async fn get_project(
    state: web::Data<AppState>,
    project_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let project = state.catalog.get_project(&project_id).await?;
    Ok(HttpResponse::Ok().json(project))
}
