use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the DevTrack API!",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/v1/skills",
            "/api/v1/projects",
            "/api/v1/timeline",
            "/api/v1/dashboard",
            "/api/v1/profile",
            "/api/v1/theme",
            "/health"
        ]
    }))
}
