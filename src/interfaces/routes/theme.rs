use actix_web::web;

use crate::handlers::theme;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(theme::current_theme);
    cfg.service(theme::set_theme);
    cfg.service(theme::toggle_theme);
}
