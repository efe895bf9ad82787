// CLI modules
mod cli;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use cli::{args::Args, op::Op, Genre, Image, Init, Item, Studio, UserConfig, Users, Version};

command_enum! {
    (Init, Init),
    (Version, Version),
    (Item, Item),
    (Users, Users),
    (Genre, Genre),
    (Studio, Studio),
    (UserConfig, UserConfig),
    (Image, Image),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Logs go to stderr so stdout stays clean for JSON output
    let log_level = cli::op::resolve_log_level(args.log_level.clone(), args.config_path.clone());
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let log_level: tracing::Level = log_level.parse().unwrap_or(tracing::Level::INFO);
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();

    // Resolve remote URL: explicit flag > config api_base > hardcoded default
    let remote = cli::op::resolve_remote(args.remote, args.config_path.clone());
    tracing::debug!(%remote, "using API base");

    // Build context - always has API client initialized
    let ctx = match cli::op::OpContext::new(remote, args.config_path) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: Failed to create API client: {}", e);
            std::process::exit(1);
        }
    };

    match args.command.execute(&ctx).await {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            drop(_guard);
            std::process::exit(1);
        }
    }
}
