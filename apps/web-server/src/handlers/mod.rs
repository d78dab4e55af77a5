//! HTTP handlers and route configuration.

pub mod auth;
pub mod comments;
pub mod pages;
pub mod posts;

use actix_web::{HttpResponse, HttpResponseBuilder, http::header, web};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Public pages
        .route("/", web::get().to(posts::index))
        .route("/post/{id}", web::get().to(posts::show))
        .route("/post/{id}", web::post().to(comments::create))
        .route("/about", web::get().to(pages::about))
        .route("/contact", web::get().to(pages::contact))
        // Account routes
        .route("/register", web::get().to(auth::register_page))
        .route("/register", web::post().to(auth::register))
        .route("/login", web::get().to(auth::login_page))
        .route("/login", web::post().to(auth::login))
        .route("/logout", web::get().to(auth::logout))
        // Admin-only post management
        .route("/new-post", web::get().to(posts::new_post_page))
        .route("/new-post", web::post().to(posts::create))
        .route("/edit-post/{id}", web::get().to(posts::edit_page))
        .route("/edit-post/{id}", web::post().to(posts::update))
        .route("/delete/{id}", web::get().to(posts::delete));
}

/// 303 redirect builder; mutating form posts answer with one of these.
pub(crate) fn see_other(location: &str) -> HttpResponseBuilder {
    let mut resp = HttpResponse::SeeOther();
    resp.insert_header((header::LOCATION, location.to_string()));
    resp
}
