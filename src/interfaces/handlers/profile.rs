use actix_web::{get, web, HttpResponse};
use chrono::Utc;

use crate::{errors::AppError, AppState};

#[get("/profile")]
pub async fn get_profile(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let profile = state.catalog.profile(Utc::now()).await?;
    Ok(HttpResponse::Ok().json(profile))
}
