use actix_web::web;

pub mod polls;
pub mod questions;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/polls")
            .route("/", web::get().to(polls::index))
            .route("/{id}/", web::get().to(polls::detail))
            .route("/{id}/vote/", web::post().to(polls::vote))
            .route("/{id}/results/", web::get().to(polls::results)),
    )
    .service(
        web::scope("/api/questions")
            .route("", web::get().to(questions::get_all))
            .route("", web::post().to(questions::create))
            .route("/{id}", web::put().to(questions::update))
            .route("/{id}", web::delete().to(questions::delete)),
    );
}
