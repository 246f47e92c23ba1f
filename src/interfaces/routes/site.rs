use actix_web::web;

use crate::handlers::site;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/settings").route(web::get().to(site::get_site_settings)));
}
