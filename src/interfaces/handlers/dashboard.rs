use actix_web::{get, web, HttpResponse};
use chrono::Utc;

use crate::{errors::AppError, AppState};

#[get("/dashboard")]
pub async fn get_dashboard(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let dashboard = state.catalog.dashboard(Utc::now()).await?;
    Ok(HttpResponse::Ok().json(dashboard))
}

#[get("/dashboard/quote")]
pub async fn get_quote(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let quote = state.catalog.random_quote().await?;
    Ok(HttpResponse::Ok().json(quote))
}
