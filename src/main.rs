use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newsfeed::app::AppContext;
use newsfeed::cli::commands::{self, SearchArgs};
use newsfeed::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { path } => {
            commands::parse(path.as_deref(), cli.format)?;
        }
        Commands::Fetch { url } => {
            let ctx = AppContext::new(cli.config.as_deref())?;
            commands::fetch(&ctx, &url, cli.format).await?;
        }
        Commands::Search {
            section,
            query,
            page_size,
            api_key,
        } => {
            let ctx = AppContext::new(cli.config.as_deref())?;
            let args = SearchArgs {
                section,
                query,
                page_size,
                api_key,
            };
            commands::search(&ctx, args, cli.format).await?;
        }
    }

    Ok(())
}
