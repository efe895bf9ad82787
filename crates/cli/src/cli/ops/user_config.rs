use clap::Args;
use uuid::Uuid;

use client::prelude::ApiError;

use crate::cli::op::to_pretty_json;

/// Show a user's personal configuration
#[derive(Args, Debug, Clone)]
pub struct UserConfig {
    #[arg(long)]
    pub user_id: Uuid,
}

#[derive(Debug, thiserror::Error)]
pub enum UserConfigError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for UserConfig {
    type Error = UserConfigError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let config = ctx.client.get_user_configuration(self.user_id).await?;
        Ok(to_pretty_json(&config)?)
    }
}
