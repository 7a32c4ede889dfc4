//! Serves the client-rendered page's wasm bundle from disk.

use std::path::{Path, PathBuf};

use crate::presentation::state::AppState;
use actix_web::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use actix_web::{HttpResponse, get, web};
use tracing::{debug, warn};

#[get("/assets/{path:.*}")]
pub async fn bundle_asset(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let Some(relative) = sanitize(&path) else {
        return HttpResponse::NotFound().finish();
    };
    let full = state.config.csr_assets_dir.join(&relative);

    match tokio::fs::read(&full).await {
        Ok(contents) => {
            let mime = mime_guess::from_path(&full).first_or_octet_stream();
            debug!(path = %full.display(), bytes = contents.len(), "asset served");
            HttpResponse::Ok()
                .insert_header((CONTENT_TYPE, mime.essence_str().to_owned()))
                .insert_header((CACHE_CONTROL, "public, max-age=0, must-revalidate"))
                .body(contents)
        }
        Err(e) => {
            warn!(path = %full.display(), error = %e, "asset not readable");
            HttpResponse::NotFound().finish()
        }
    }
}

/// Rejects empty paths, directories and anything that escapes the bundle
/// directory.
fn sanitize(raw: &str) -> Option<PathBuf> {
    let candidate = raw.trim_start_matches('/');
    if candidate.is_empty() || candidate.ends_with('/') {
        return None;
    }
    let path = Path::new(candidate);
    let clean = path
        .components()
        .all(|c| matches!(c, std::path::Component::Normal(_)));
    clean.then(|| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::AppConfig;
    use actix_web::{App, test};

    fn state_serving(dir: &Path) -> AppState {
        let dir = dir.to_string_lossy().into_owned();
        let config = AppConfig::from_lookup(|key| match key {
            "CSR_ASSETS_DIR" => Some(dir.clone()),
            _ => None,
        })
        .unwrap();
        AppState::from_config(config, reqwest::Client::new())
    }

    #[actix_web::test]
    async fn serves_bundle_files_with_guessed_type() {
        let dir = std::env::temp_dir().join(format!("render-assets-{}", uuid::Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(dir.join("render-wasm.js"), "export default function init() {}")
            .await
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_serving(&dir)))
                .service(bundle_asset),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/assets/render-wasm.js").to_request(),
        )
        .await;
        assert!(resp.status().is_success());
        let content_type = resp.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap();
        assert!(content_type.contains("javascript"));

        let missing = test::call_service(
            &app,
            test::TestRequest::get().uri("/assets/missing.wasm").to_request(),
        )
        .await;
        assert_eq!(missing.status(), 404);

        tokio::fs::remove_dir_all(&dir).await.ok();
    }

    #[actix_web::test]
    async fn sanitize_rejects_traversal_and_directories() {
        assert!(sanitize("../secret").is_none());
        assert!(sanitize("wasm/../../etc/passwd").is_none());
        assert!(sanitize("").is_none());
        assert!(sanitize("wasm/").is_none());
        assert_eq!(
            sanitize("wasm/render-wasm_bg.wasm"),
            Some(PathBuf::from("wasm/render-wasm_bg.wasm"))
        );
    }
}
