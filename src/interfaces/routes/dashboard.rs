use actix_web::web;

use crate::handlers::dashboard;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard::get_dashboard);
    cfg.service(dashboard::get_quote);
}
