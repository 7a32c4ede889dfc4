use crate::application::strategy::RenderStrategy;
use crate::domain::error::DomainError;
use crate::presentation::error::PageError;
use crate::presentation::middleware::request_id;
use crate::presentation::state::AppState;
use crate::presentation::views::{
    CsrShellTemplate, IndexTemplate, PageLink, PostsPageTemplate, RenderedPage, render,
};
use actix_web::http::header::{CACHE_CONTROL, ContentType};
use actix_web::{HttpRequest, HttpResponse, get, web};
use chrono::Utc;
use tracing::info;

pub const CACHE_STATE_HEADER: &str = "x-render-cache";
pub const GENERATED_AT_HEADER: &str = "x-generated-at";

#[get("/")]
pub async fn index(state: web::Data<AppState>) -> Result<HttpResponse, PageError> {
    let pages = [
        RenderStrategy::ServerSide,
        RenderStrategy::ClientSide,
        state.isr_strategy(),
    ]
    .into_iter()
    .map(|strategy| PageLink {
        path: strategy.path(),
        heading: strategy.heading(),
    })
    .collect();

    let html = render(&IndexTemplate { pages })?;
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}

#[get("/ssr")]
pub async fn server_rendered(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, PageError> {
    let strategy = RenderStrategy::ServerSide;
    let posts = state.ssr_posts.get_posts().await?;
    let count = posts.len();
    let html = render(&PostsPageTemplate::new(strategy, posts, state.config.port))?;

    info!(
        request_id = %request_id(&req),
        strategy = strategy.abbreviation(),
        count,
        "page rendered"
    );

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .insert_header((CACHE_CONTROL, strategy.cache_control()))
        .body(html))
}

#[get("/csr")]
pub async fn client_rendered(state: web::Data<AppState>) -> Result<HttpResponse, PageError> {
    let strategy = RenderStrategy::ClientSide;
    let html = render(&CsrShellTemplate {
        heading: strategy.heading(),
        bundle_url: state.config.csr_bundle_url.clone(),
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .insert_header((CACHE_CONTROL, strategy.cache_control()))
        .body(html))
}

#[get("/isr")]
pub async fn incrementally_regenerated(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, PageError> {
    let strategy = state.isr_strategy();
    let posts = state.isr_posts.clone();
    let port = state.config.port;
    let dev_notice = state.config.run_mode.is_development();

    let (page, freshness) = state
        .isr_cache
        .get_or_regenerate(move || async move {
            let posts = posts.get_posts().await?;
            let template = PostsPageTemplate::new(strategy, posts, port).with_dev_notice(dev_notice);
            Ok::<_, DomainError>(RenderedPage {
                html: render(&template)?,
                generated_at: Utc::now(),
            })
        })
        .await?;

    info!(
        request_id = %request_id(&req),
        strategy = strategy.abbreviation(),
        cache = freshness.as_str(),
        generated_at = %page.generated_at,
        "page served"
    );

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .insert_header((CACHE_CONTROL, strategy.cache_control()))
        .insert_header((CACHE_STATE_HEADER, freshness.as_str()))
        .insert_header((GENERATED_AT_HEADER, page.generated_at.to_rfc3339()))
        .body(page.html))
}
