use clap::Args;
use url::Url;

use crate::cli::state::{AppConfig, AppState, StateError};

#[derive(Args, Debug, Clone)]
pub struct Init {
    /// API base url to store in the config file
    #[arg(long)]
    pub api_base: Option<Url>,

    /// Default log level to store in the config file
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("Failed to initialize config: {0}")]
    State(#[from] StateError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Init {
    type Error = InitError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut config = AppConfig::default();
        if let Some(api_base) = &self.api_base {
            config.api_base = api_base.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }

        let state = AppState::init(ctx.config_path.clone(), Some(config))?;
        tracing::info!(path = %state.config_path.display(), "wrote config");

        Ok(format!(
            "Initialized mbrowse at {}\n  api_base:  {}\n  log_level: {}",
            state.app_dir.display(),
            state.config.api_base,
            state.config.log_level
        ))
    }
}
