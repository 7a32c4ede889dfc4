mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;

use actix_cors::Cors;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{App, HttpServer, web};
use infrastructure::config::AppConfig;
use infrastructure::logging::init_logging;
use presentation::handlers;
use presentation::middleware::RequestContextMiddleware;
use presentation::state::AppState;
use reqwest::Client;
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = AppConfig::from_env()?;
    let state = AppState::from_config(config.clone(), Client::builder().build()?);

    info!(
        host = %config.host,
        port = config.port,
        run_mode = ?config.run_mode,
        revalidate_secs = config.revalidate.as_secs(),
        posts_api_url = %config.posts_api_url,
        "starting render server"
    );

    let bind_address = (config.host.clone(), config.port);
    let config_data = config.clone();

    HttpServer::new(move || {
        let cors = build_cors(&config_data);
        App::new()
            .wrap(Logger::default())
            .wrap(RequestContextMiddleware)
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "no-referrer"))
                    .add(("Cross-Origin-Opener-Policy", "same-origin")),
            )
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}

fn build_cors(config: &AppConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
        .max_age(3600);

    for origin in &config.cors_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
