use actix_web::web;

use crate::handlers::projects;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(projects::list_projects);
    // Fixed segment before the id capture so /projects/techs resolves here.
    cfg.service(projects::list_techs);
    cfg.service(projects::get_project);
}
