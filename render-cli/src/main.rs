use std::time::Duration;

use clap::{Parser, Subcommand};
use render_client::{PageRoute, RenderClientHttp};

#[derive(Parser, Debug)]
struct Cli {
    #[clap(short, long)]
    server: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the posts served by the mock endpoint.
    Posts,
    /// Fetch one page and report how it was produced.
    Page {
        /// ssr, csr or isr
        page: PageRoute,
        #[clap(long)]
        body: bool,
    },
    /// Poll the regenerated page to watch its snapshot change.
    WatchIsr {
        #[clap(long, default_value_t = 3)]
        every: u64,
        #[clap(long, default_value_t = 10)]
        times: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let endpoint = args.server.as_deref().unwrap_or("http://127.0.0.1:8080");
    let client = RenderClientHttp::connect(endpoint)?;

    match args.command {
        Command::Posts => {
            let (posts, elapsed) = client.list_posts().await?;
            println!("Posts ({}) in {} ms", posts.len(), elapsed.as_millis());
            for post in posts {
                println!("- {}", post);
                println!("  {}", post.content);
            }
        }
        Command::Page { page, body } => {
            let fetched = client.fetch_page(page).await?;
            println!("{} -> {} in {} ms", page, fetched.status, fetched.elapsed.as_millis());
            println!(
                "cache-control: {}",
                fetched.cache_control.as_deref().unwrap_or("-")
            );
            if let Some(state) = &fetched.cache_state {
                println!("snapshot: {} (generated {})", state, fetched.generated_at.as_deref().unwrap_or("-"));
            }
            if fetched.is_loading_shell() {
                println!("articles: none yet (client renders after load)");
            } else {
                println!("articles: {}", fetched.article_count());
            }
            if body {
                println!("{}", fetched.body);
            }
        }
        Command::WatchIsr { every, times } => {
            for round in 1..=times {
                let fetched = client.fetch_page(PageRoute::Incremental).await?;
                println!(
                    "#{:<3} {:<5} generated {} ({} ms)",
                    round,
                    fetched.cache_state.as_deref().unwrap_or("-"),
                    fetched.generated_at.as_deref().unwrap_or("-"),
                    fetched.elapsed.as_millis()
                );
                if round < times {
                    tokio::time::sleep(Duration::from_secs(every)).await;
                }
            }
        }
    }

    Ok(())
}
