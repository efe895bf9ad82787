pub use clap::Parser;

use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "mbrowse")]
#[command(about = "Browse a media server from the command line")]
pub struct Args {
    /// API base url (overrides the config file)
    #[arg(long, global = true)]
    pub remote: Option<Url>,

    /// Path to the mbrowse config directory (defaults to ~/.mbrowse)
    #[arg(long, global = true)]
    pub config_path: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: crate::Command,
}
