use actix_web::web;

use crate::handlers::{
    admin_auth, blog_posts, comments, contact, projects, system, testimonials, uploads,
};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(web::resource("/login").route(web::post().to(admin_auth::login)))
            .service(web::resource("/verify").route(web::get().to(admin_auth::verify)))
            .service(web::resource("/logout").route(web::post().to(admin_auth::logout)))
            .service(web::resource("/health").route(web::get().to(system::admin_health_check)))
            .service(web::resource("/projects").route(web::post().to(projects::create_project)))
            .service(
                web::resource("/projects/{project_id}")
                    .route(web::patch().to(projects::update_project))
                    .route(web::delete().to(projects::delete_project)),
            )
            .service(web::resource("/posts").route(web::post().to(blog_posts::create_blog_post)))
            .service(
                web::resource("/posts/{post_id}")
                    .route(web::patch().to(blog_posts::update_blog_post))
                    .route(web::delete().to(blog_posts::delete_blog_post)),
            )
            .service(
                web::resource("/testimonials")
                    .route(web::get().to(testimonials::admin_list_testimonials))
                    .route(web::post().to(testimonials::admin_create_testimonial)),
            )
            .service(
                web::resource("/testimonials/{testimonial_id}")
                    .route(web::patch().to(testimonials::admin_update_testimonial))
                    .route(web::delete().to(testimonials::admin_delete_testimonial)),
            )
            .service(
                web::resource("/testimonials/{testimonial_id}/approval")
                    .route(web::put().to(testimonials::admin_set_approval)),
            )
            .service(
                web::resource("/comments/{comment_id}")
                    .route(web::delete().to(comments::admin_delete_comment)),
            )
            .service(
                web::resource("/messages").route(web::get().to(contact::admin_list_messages)),
            )
            .service(
                web::resource("/messages/{message_id}")
                    .route(web::get().to(contact::admin_get_message))
                    .route(web::delete().to(contact::admin_delete_message)),
            )
            .service(web::resource("/uploads/cv").route(web::post().to(uploads::upload_cv)))
            .service(
                web::resource("/uploads/image").route(web::post().to(uploads::upload_image)),
            ),
    );
}
