use crate::posts::{FetchState, Post, PostSource, locale_string};
use chrono::{Local, Utc};
use dioxus::prelude::*;

mod error;
mod posts;

const HEADING: &str = "Client-Side Rendering (CSR) Example";

const EXPLANATION: [&str; 4] = [
    "This page is rendered on the client (browser)",
    "Data is fetched in the browser and rendered by WebAssembly",
    "Check the page source (right click - View Page Source)",
    "Every refresh fetches fresh data in the browser",
];

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let source = use_hook(source_from_location);
    rsx! {
        PostsPage { source }
    }
}

fn source_from_location() -> PostSource {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .map(|search| PostSource::from_query(&search))
        .unwrap_or_else(PostSource::embedded)
}

#[component]
fn PostsPage(source: PostSource) -> Element {
    // Timestamps are taken once, when the app mounts.
    let created_at = use_hook(Utc::now);
    let posts = use_resource(move || async move { source.fetch(created_at).await });
    let state = FetchState::from_resource(posts.read().as_ref());

    match state {
        FetchState::Pending => rsx! {
            div { class: "loading", "Loading..." }
        },
        FetchState::Failed(message) => rsx! {
            div { class: "error", "Error: {message}" }
        },
        FetchState::Ready(posts) => rsx! {
            div { class: "page", "data-strategy": "CSR",
                h1 { "{HEADING}" }
                div { class: "posts",
                    for post in posts {
                        PostCard { key: "{post.id}", post: post.clone() }
                    }
                }
                StrategyPanel {}
            }
        },
    }
}

#[component]
fn PostCard(post: Post) -> Element {
    let created = locale_string(&post.created_at.with_timezone(&Local));

    rsx! {
        article { class: "post", "data-id": "{post.id}",
            h2 { "{post.title}" }
            p { class: "content", "{post.content}" }
            p { class: "created", "Created at: {created}" }
        }
    }
}

#[component]
fn StrategyPanel() -> Element {
    rsx! {
        div { class: "panel",
            h2 { "How CSR works" }
            ul {
                for line in EXPLANATION {
                    li { "{line}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn mount(reachable: bool) -> VirtualDom {
        let source = PostSource {
            delay_ms: 0,
            reachable,
        };
        let mut dom = VirtualDom::new_with_props(PostsPage, PostsPageProps { source });
        dom.rebuild_in_place();
        dom
    }

    /// Drives the posts resource to completion and returns the final markup.
    async fn settle(dom: &mut VirtualDom) -> String {
        for _ in 0..5 {
            let woke = tokio::time::timeout(Duration::from_millis(200), dom.wait_for_work()).await;
            if woke.is_err() {
                break;
            }
            dom.render_immediate_to_vec();
        }
        dioxus_ssr::render(dom)
    }

    #[tokio::test]
    async fn shows_loading_before_posts_arrive() {
        let dom = mount(true);
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Loading..."));
        assert_eq!(html.matches("<article").count(), 0);
    }

    #[tokio::test]
    async fn replaces_loading_with_the_embedded_posts() {
        let mut dom = mount(true);
        let html = settle(&mut dom).await;

        assert!(!html.contains("Loading..."));
        assert_eq!(html.matches("<article").count(), 3);
        assert!(html.contains("Client-Side Rendering"));
        assert!(html.contains("How CSR works"));
    }

    #[tokio::test]
    async fn unreachable_source_shows_error() {
        let mut dom = mount(false);
        let html = settle(&mut dom).await;

        assert!(html.contains("Error: Failed to fetch posts"));
        assert!(!html.contains("Loading..."));
        assert_eq!(html.matches("<article").count(), 0);
    }
}
