use clap::Args;

use client::prelude::ApiError;

use crate::cli::op::to_pretty_json;

/// List every user on the server
#[derive(Args, Debug, Clone)]
pub struct Users;

#[derive(Debug, thiserror::Error)]
pub enum UsersError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Users {
    type Error = UsersError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let users = ctx.client.get_all_users().await?;
        Ok(to_pretty_json(&users)?)
    }
}
