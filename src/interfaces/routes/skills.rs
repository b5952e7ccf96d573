use actix_web::web;

use crate::handlers::skills;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(skills::list_skills);
    cfg.service(skills::get_skill);
}
