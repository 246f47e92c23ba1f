use actix_web::web;

use crate::handlers::testimonials;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/testimonials")
            .route(web::get().to(testimonials::list_testimonials))
            .route(web::post().to(testimonials::submit_testimonial)),
    );
}
