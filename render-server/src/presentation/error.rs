use crate::domain::error::DomainError;
use crate::presentation::views::{ErrorPageTemplate, render};
use actix_web::http::header::{CACHE_CONTROL, ContentType};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;
use tracing::error;

/// Failure while producing an HTML page. Always answered with the generic
/// error page; the cause only goes to the log.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct PageError(#[from] DomainError);

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        error!(error = %self.0, "page render failed");

        let status = self.status_code();
        let template = ErrorPageTemplate {
            status: status.as_u16(),
            message: "a server-side exception has occurred",
        };
        let mut builder = HttpResponse::build(status);
        builder.insert_header((CACHE_CONTROL, "no-store"));
        match render(&template) {
            Ok(html) => builder.content_type(ContentType::html()).body(html),
            Err(_) => builder
                .content_type(ContentType::plaintext())
                .body("Internal Server Error"),
        }
    }
}
