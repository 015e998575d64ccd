//! HTTP handlers and route configuration.

mod health;
mod posts;


use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|err, _| AppError::NotFound(err.to_string()).into()),
    )
    .app_data(
        web::JsonConfig::default()
            .error_handler(|err, _| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::FormConfig::default()
            .error_handler(|err, _| AppError::BadRequest(err.to_string()).into()),
    )
    .route("/health", web::get().to(health::health_check))
    .service(
        web::scope("/posts")
            .service(
                web::resource("")
                    .route(web::get().to(posts::index))
                    .route(web::post().to(posts::create)),
            )
            // Registered before `/{id}` so "new" is never parsed as an id.
            .route("/new", web::get().to(posts::new_form))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(posts::show))
                    .route(web::head().to(posts::exists))
                    .route(web::patch().to(posts::update))
                    .route(web::put().to(posts::update))
                    .route(web::delete().to(posts::destroy)),
            )
            .route("/{id}/edit", web::get().to(posts::edit_form)),
    );
}
