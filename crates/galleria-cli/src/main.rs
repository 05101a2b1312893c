use std::time::Duration;

use clap::{Parser, Subcommand};
use galleria_artic::{ArticClient, DEFAULT_BASE_URL, FIELDS_FULL};
use galleria_core::{DEFAULT_PAGE_SIZE, config_file};

mod output;
mod session;

use output::ColorMode;

/// Art collection browser - page through the Art Institute listing and
/// build a cross-page selection
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse interactively: page around, toggle rows, bulk-select the
    /// first N artworks of the dataset
    Browse {
        /// Rows per page
        #[arg(long)]
        page_size: Option<u32>,

        /// Listing API base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Per-request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Print a single page of the listing and exit
    Show {
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Rows per page
        #[arg(long)]
        page_size: Option<u32>,

        /// Listing API base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Per-request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

/// Effective settings after cascading CLI flags > env vars > config file >
/// defaults, the same resolution order everywhere.
struct Settings {
    client: ArticClient,
    page_size: u32,
}

fn resolve_settings(
    base_url: Option<String>,
    timeout: Option<u64>,
    page_size: Option<u32>,
) -> Settings {
    let file = config_file::load_config();
    let file_api = file.api.unwrap_or_default();
    let file_display = file.display.unwrap_or_default();

    let base_url = base_url
        .or_else(|| std::env::var("GALLERIA_BASE_URL").ok())
        .or(file_api.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let timeout_secs = timeout
        .or_else(|| {
            std::env::var("GALLERIA_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
        })
        .or(file_api.timeout_secs)
        .unwrap_or(10);
    let page_size = page_size
        .or(file_display.page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .max(1);

    let mut client =
        ArticClient::with_base_url(base_url).timeout(Duration::from_secs(timeout_secs));
    if let Some(user_agent) = file_api.user_agent {
        client = client.user_agent(user_agent);
    }

    Settings { client, page_size }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Browse {
            page_size,
            base_url,
            timeout,
            no_color,
        } => {
            let settings = resolve_settings(base_url, timeout, page_size);
            let color = ColorMode(!no_color);
            session::Session::new(settings.client, settings.page_size, color)
                .run()
                .await
        }
        Command::Show {
            page,
            page_size,
            base_url,
            timeout,
            no_color,
        } => {
            let settings = resolve_settings(base_url, timeout, page_size);
            let color = ColorMode(!no_color);
            show(&settings.client, page.max(1), settings.page_size, color).await
        }
    }
}

async fn show(client: &ArticClient, page: u32, page_size: u32, color: ColorMode) -> anyhow::Result<()> {
    let fetched = client.fetch_page(page, page_size, FIELDS_FULL).await?;
    let mut stdout = std::io::stdout();
    output::print_page(
        &mut stdout,
        page,
        page_size,
        &fetched.artworks,
        fetched.total,
        &Default::default(),
        0,
        color,
    )?;
    Ok(())
}
