use std::io;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kdrama_client::{
    cli::{Command, HELP},
    models::TitleCatalog,
    services::{providers::RequestFilters, HttpRecommendationProvider, SuggestionMatcher},
    view::{HtmlView, ResultsView, SearchBox, TerminalView},
    Config, OutputFormat, RenderController,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    tracing::info!(
        api_url = %config.recommender_api_url,
        output_format = ?config.output_format,
        "Starting recommendation client"
    );

    match config.output_format {
        OutputFormat::Text => run(config, TerminalView::new(io::stdout())).await,
        OutputFormat::Html => run(config, HtmlView::new(io::stdout())).await,
    }
}

/// `KDRAMA_LOG` > `RUST_LOG` > `kdrama_client=info`, written to stderr
fn init_tracing() {
    let filter = std::env::var("KDRAMA_LOG")
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("kdrama_client=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).compact())
        .init();
}

async fn run<V: ResultsView>(config: Config, view: V) -> anyhow::Result<()> {
    let catalog = Arc::new(TitleCatalog::builtin());
    let mut search_box = SearchBox::new(SuggestionMatcher::new(catalog, config.suggestion_limit));

    let provider = Arc::new(HttpRecommendationProvider::new(
        config.recommender_api_url,
        RequestFilters {
            limit: config.results_limit,
            platforms: config.platform_filter,
            only_platform: config.only_platform,
        },
    ));
    let mut controller = RenderController::new(provider, view);

    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Input(text) => {
                for (i, suggestion) in search_box.input(&text).iter().enumerate() {
                    println!("  {}. {}", i + 1, suggestion);
                }
            }
            Command::Select(n) => match search_box.select(n - 1) {
                Some(title) => println!("> {}", title),
                None => println!("No suggestion #{}", n),
            },
            Command::Submit => {
                let text = search_box.text().to_string();
                controller.submit(&text).await;
            }
            Command::Quit => break,
            Command::Unknown(command) => println!("Unknown command :{}. {}", command, HELP),
        }
    }

    Ok(())
}
