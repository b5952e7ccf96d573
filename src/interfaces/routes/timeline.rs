use actix_web::web;

use crate::handlers::timeline;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(timeline::get_timeline);
}
