use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
}

impl RunMode {
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(RunMode::Development),
            "production" | "prod" => Ok(RunMode::Production),
            other => Err(anyhow::anyhow!("invalid APP_ENV: {}", other)),
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, RunMode::Development)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub run_mode: RunMode,
    pub revalidate: Duration,
    pub mock_latency: Duration,
    pub posts_api_url: String,
    pub csr_bundle_url: String,
    pub csr_assets_dir: PathBuf,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".into());
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "8080".into())
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid PORT: {}", e))?;
        let run_mode = match lookup("APP_ENV") {
            Some(value) => RunMode::parse(&value)?,
            None => RunMode::Production,
        };
        let revalidate = lookup("REVALIDATE_SECS")
            .unwrap_or_else(|| "10".into())
            .parse()
            .map(Duration::from_secs)
            .map_err(|e| anyhow::anyhow!("invalid REVALIDATE_SECS: {}", e))?;
        let mock_latency = lookup("MOCK_LATENCY_MS")
            .unwrap_or_else(|| "1000".into())
            .parse()
            .map(Duration::from_millis)
            .map_err(|e| anyhow::anyhow!("invalid MOCK_LATENCY_MS: {}", e))?;
        let posts_api_url = lookup("POSTS_API_URL")
            .unwrap_or_else(|| format!("http://localhost:{}/api/posts", port));
        let csr_bundle_url =
            lookup("CSR_BUNDLE_URL").unwrap_or_else(|| "/assets/render-wasm.js".into());
        let csr_assets_dir = lookup("CSR_ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("render-wasm/dist"));
        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            run_mode,
            revalidate,
            mock_latency,
            posts_api_url,
            csr_bundle_url,
            csr_assets_dir,
            cors_origins,
        })
    }
}
