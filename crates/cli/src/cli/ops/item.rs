use clap::Args;
use uuid::Uuid;

use client::prelude::ApiError;

use crate::cli::op::to_pretty_json;

/// Show an item, or the user's root folder when --id is omitted
#[derive(Args, Debug, Clone)]
pub struct Item {
    /// Item ID
    #[arg(long)]
    pub id: Option<Uuid>,

    /// User ID the item is viewed as
    #[arg(long)]
    pub user_id: Uuid,
}

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Item {
    type Error = ItemError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let item = ctx.client.get_item(self.id, self.user_id).await?;
        Ok(to_pretty_json(&item)?)
    }
}
