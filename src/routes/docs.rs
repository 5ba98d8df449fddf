use crate::configuration::Settings;
use crate::docs;
use actix_web::{get, web, HttpResponse};

#[get("")]
pub async fn docs_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(docs::DOCS_PAGE)
}

#[get("/openapi.json")]
pub async fn docs_document(settings: web::Data<Settings>) -> HttpResponse {
    HttpResponse::Ok().json(docs::api_document(&settings.docs))
}
