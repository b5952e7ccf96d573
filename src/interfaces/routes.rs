use actix_web::web;

use crate::handlers::home::home;
use crate::handlers::system::health_check;

mod dashboard;
mod json_error;
mod profile;
mod projects;
mod skills;
mod theme;
mod timeline;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            .configure(skills::config_routes)
            .configure(projects::config_routes)
            .configure(timeline::config_routes)
            .configure(dashboard::config_routes)
            .configure(profile::config_routes)
            .configure(theme::config_routes),
    );

    cfg.configure(json_error::config_routes);
}
