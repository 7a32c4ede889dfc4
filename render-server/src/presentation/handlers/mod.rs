use actix_web::web;

pub mod api;
pub mod assets;
pub mod pages;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(api::list_posts)
            .service(api::health),
    )
    .service(assets::bundle_asset)
    .service(pages::index)
    .service(pages::server_rendered)
    .service(pages::client_rendered)
    .service(pages::incrementally_regenerated);
}
