use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    entities::skill::{SkillCategory, SkillStatus},
    errors::{AppError, FieldError},
    use_cases::filters::SkillFilter,
    AppState,
};

/// Query-string form of the skill filter state. Selection sets arrive as
/// comma-separated lists; unknown values are a validation error rather than
/// a silent fallback.
#[derive(Debug, Default, Deserialize)]
pub struct SkillFilterQuery {
    pub q: Option<String>,
    pub categories: Option<String>,
    pub statuses: Option<String>,
}

impl SkillFilterQuery {
    pub fn into_filter(self) -> Result<SkillFilter, AppError> {
        let mut filter = SkillFilter::default();

        if let Some(q) = self.q {
            filter.search = q;
        }

        for part in split_csv(self.categories.as_deref()) {
            let category: SkillCategory = part
                .parse()
                .map_err(|message| invalid_field("categories", message))?;
            filter.categories.insert(category);
        }

        for part in split_csv(self.statuses.as_deref()) {
            let status: SkillStatus = part
                .parse()
                .map_err(|message| invalid_field("statuses", message))?;
            filter.statuses.insert(status);
        }

        Ok(filter)
    }
}

pub(crate) fn split_csv(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn invalid_field(field: &str, message: String) -> AppError {
    AppError::ValidationError(vec![FieldError {
        field: field.to_string(),
        message,
    }])
}

#[get("/skills")]
pub async fn list_skills(
    state: web::Data<AppState>,
    query: web::Query<SkillFilterQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = query.into_inner().into_filter()?;
    let response = state.catalog.list_skills(&filter, Utc::now()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/skills/{skill_id}")]
pub async fn get_skill(
    state: web::Data<AppState>,
    skill_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let skill = state.catalog.get_skill(&skill_id, Utc::now()).await?;
    Ok(HttpResponse::Ok().json(skill))
}
