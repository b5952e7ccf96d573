use actix_web::{get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::{infrastructure::theme::Theme, AppState};

#[derive(Debug, Deserialize)]
pub struct ThemeUpdate {
    pub theme: Theme,
}

#[get("/theme")]
pub async fn current_theme(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "theme": state.theme.current() }))
}

#[put("/theme")]
pub async fn set_theme(
    state: web::Data<AppState>,
    body: web::Json<ThemeUpdate>,
) -> impl Responder {
    state.theme.set(body.theme);
    HttpResponse::Ok().json(serde_json::json!({ "theme": state.theme.current() }))
}

#[post("/theme/toggle")]
pub async fn toggle_theme(state: web::Data<AppState>) -> impl Responder {
    let theme = state.theme.toggle();
    HttpResponse::Ok().json(serde_json::json!({ "theme": theme }))
}
