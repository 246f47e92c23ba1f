use actix_web::web;

use crate::handlers::home::home;

mod admin;
mod blog;
mod contact;
mod projects;
mod site;
mod testimonials;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api/v1")
            .configure(projects::config_routes)
            .configure(blog::config_routes)
            .configure(testimonials::config_routes)
            .configure(contact::config_routes)
            .configure(site::config_routes),
    );

    // The session cookie is scoped to this path, so every admin endpoint
    // (login included) lives under it.
    cfg.configure(admin::config_routes);
}
