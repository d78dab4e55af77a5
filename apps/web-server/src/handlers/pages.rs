//! Static informational pages.

use actix_web::HttpResponse;

use quill_shared::dto::StaticPage;

/// GET /about
pub async fn about() -> HttpResponse {
    HttpResponse::Ok().json(StaticPage {
        page: "about",
        content: "A small blog run on Quill.",
    })
}

/// GET /contact
pub async fn contact() -> HttpResponse {
    HttpResponse::Ok().json(StaticPage {
        page: "contact",
        content: "Reach the author at hello@quill.example.",
    })
}
