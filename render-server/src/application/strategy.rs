use std::time::Duration;

/// When and how a page obtains its posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    /// Fetched on every request, never cached.
    ServerSide,
    /// Empty shell; the browser fetches after the page is interactive.
    ClientSide,
    /// Rendered once and reused until `revalidate` has elapsed.
    Incremental { revalidate: Duration },
}

impl RenderStrategy {
    pub fn path(&self) -> &'static str {
        match self {
            RenderStrategy::ServerSide => "/ssr",
            RenderStrategy::ClientSide => "/csr",
            RenderStrategy::Incremental { .. } => "/isr",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            RenderStrategy::ServerSide => "SSR",
            RenderStrategy::ClientSide => "CSR",
            RenderStrategy::Incremental { .. } => "ISR",
        }
    }

    pub fn heading(&self) -> String {
        let name = match self {
            RenderStrategy::ServerSide => "Server-Side Rendering",
            RenderStrategy::ClientSide => "Client-Side Rendering",
            RenderStrategy::Incremental { .. } => "Incremental Static Regeneration",
        };
        format!("{name} ({}) Example", self.abbreviation())
    }

    pub fn cache_control(&self) -> String {
        match self {
            RenderStrategy::ServerSide | RenderStrategy::ClientSide => {
                "private, no-cache, no-store, max-age=0, must-revalidate".to_owned()
            }
            RenderStrategy::Incremental { revalidate } => {
                format!("s-maxage={}, stale-while-revalidate", revalidate.as_secs())
            }
        }
    }

    /// Fixed bullets for the explanatory panel.
    pub fn explanation(&self) -> Vec<String> {
        match self {
            RenderStrategy::ServerSide => vec![
                "This page is rendered on the server".into(),
                "Data is fetched on the server and embedded in the HTML".into(),
                "Check the page source (right click - View Page Source)".into(),
                "Every refresh fetches fresh data on the server".into(),
            ],
            RenderStrategy::ClientSide => vec![
                "This page is rendered on the client (browser)".into(),
                "Data is fetched in the browser and rendered by WebAssembly".into(),
                "Check the page source (right click - View Page Source)".into(),
                "Every refresh fetches fresh data in the browser".into(),
            ],
            RenderStrategy::Incremental { revalidate } => {
                let secs = revalidate.as_secs();
                vec![
                    "This page is generated statically on first request".into(),
                    format!("The page is regenerated in the background every {secs} seconds"),
                    "Check the page source (right click - View Page Source)".into(),
                    format!(
                        "Refreshing shows the cached data until the revalidate time ({secs} seconds) has passed"
                    ),
                    "Once the revalidate time has passed, fresh data is fetched in the background and served to the next request".into(),
                ]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RenderStrategy::ServerSide, "/ssr", "SSR")]
    #[case(RenderStrategy::ClientSide, "/csr", "CSR")]
    #[case(RenderStrategy::Incremental { revalidate: Duration::from_secs(10) }, "/isr", "ISR")]
    fn routes_and_headings(
        #[case] strategy: RenderStrategy,
        #[case] path: &str,
        #[case] abbreviation: &str,
    ) {
        assert_eq!(strategy.path(), path);
        assert!(strategy.heading().contains(abbreviation));
    }

    #[test]
    fn incremental_cache_control_carries_interval() {
        let strategy = RenderStrategy::Incremental {
            revalidate: Duration::from_secs(10),
        };
        assert_eq!(strategy.cache_control(), "s-maxage=10, stale-while-revalidate");
        assert!(strategy.explanation().iter().any(|line| line.contains("every 10 seconds")));
    }

    #[test]
    fn server_side_is_never_cached() {
        assert!(RenderStrategy::ServerSide.cache_control().contains("no-store"));
    }
}
