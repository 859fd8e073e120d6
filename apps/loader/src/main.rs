use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use shared::domain::ViewState;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

mod config;
mod controller;
mod embed;
mod view;

use config::load_settings;
use controller::ViewController;
use view::PageModel;

/// Load the video named by a page URL's `v` parameter and print the page.
#[derive(Parser, Debug)]
#[command(name = "video-loader", version)]
struct Args {
    /// Page URL, e.g. `https://example.com/player?v=abc123`.
    page_url: Url,
    /// Config file (defaults to `loader.toml` in the working directory if present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Lookup service endpoint, overriding config and environment.
    #[arg(long)]
    endpoint: Option<String>,
    /// Serve canned data instead of calling the lookup service.
    #[arg(long)]
    stand_in: bool,
    /// Print the visible page as JSON.
    #[arg(long)]
    json: bool,
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_filter: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_filter.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(endpoint) = args.endpoint {
        settings.lookup_endpoint = endpoint;
    }
    if args.stand_in {
        settings.stand_in_mode = true;
    }

    let mut controller = ViewController::from_settings(&settings, PageModel::new())
        .context("failed to set up video source")?;
    let outcome = controller.initialize(&args.page_url).await;
    info!(view = outcome.view_state().as_str(), "page load finished");

    let page = controller.view();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&page.snapshot())?);
    } else {
        println!("{}", page.render_text());
    }

    Ok(match page.current() {
        Some(ViewState::Content) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}
