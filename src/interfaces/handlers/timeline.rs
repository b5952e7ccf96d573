use actix_web::{get, web, HttpResponse};
use chrono::Utc;

use crate::{errors::AppError, AppState};

#[get("/timeline")]
pub async fn get_timeline(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let events = state.catalog.timeline(Utc::now()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "total": events.len(),
        "events": events
    })))
}
