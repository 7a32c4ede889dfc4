use crate::domain::error::DomainError;
use crate::presentation::middleware::request_id;
use crate::presentation::state::AppState;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

#[get("/posts")]
pub async fn list_posts(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, DomainError> {
    let posts = state.api_posts.get_posts().await?;

    info!(
        request_id = %request_id(&req),
        count = posts.len(),
        "posts retrieved"
    );

    Ok(HttpResponse::Ok().json(posts))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}
