//! Fund list abstractions

use super::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A closed-end fund as published by the fund list source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fund {
    pub symbol: String,
    /// Net asset value per share, kept as the exact decimal text.
    pub nav: String,
    pub display_name: Option<String>,
    pub asset_type: Option<String>,
}

#[async_trait]
pub trait FundListProvider: Send + Sync {
    async fn fetch_funds(&self) -> Result<Vec<Fund>>;
}
