use crate::core::error::{Error, Result};
use crate::core::fund::{Fund, FundListProvider};
use async_trait::async_trait;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, instrument};

/// Reads the closed-end fund list published by GAMCO.
pub struct GamcoFundListProvider {
    base_url: String,
    funds_path: String,
    asset_type: Option<String>,
}

impl GamcoFundListProvider {
    pub fn new(base_url: &str, funds_path: &str, asset_type: Option<&str>) -> Self {
        GamcoFundListProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            funds_path: funds_path.to_string(),
            asset_type: asset_type.filter(|t| !t.is_empty()).map(str::to_string),
        }
    }
}

/// The NAV is published either as text or as a bare JSON number. Numbers keep
/// their source digits (`arbitrary_precision`), so `12.10` stays `12.10`.
fn nav_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected NAV as a string or number, got {other}"
        ))),
    }
}

#[derive(Deserialize, Debug)]
struct GamcoFund {
    #[serde(alias = "Symbol")]
    symbol: String,
    #[serde(alias = "NAV", deserialize_with = "nav_text")]
    nav: String,
    #[serde(default, alias = "displayName", alias = "DisplayName")]
    display_name: Option<String>,
    #[serde(default, alias = "assetType", alias = "AssetType")]
    asset_type: Option<String>,
}

impl From<GamcoFund> for Fund {
    fn from(f: GamcoFund) -> Self {
        Fund {
            symbol: f.symbol.trim().to_string(),
            nav: f.nav.trim().to_string(),
            display_name: f.display_name,
            asset_type: f.asset_type,
        }
    }
}

#[async_trait]
impl FundListProvider for GamcoFundListProvider {
    #[instrument(name = "GamcoFundListFetch", skip(self))]
    async fn fetch_funds(&self) -> Result<Vec<Fund>> {
        let url = format!("{}{}", self.base_url, self.funds_path);
        debug!("Requesting fund list from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("navcheck/0.1")
            .build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::UpstreamFetch(format!("Request error: {e} for fund list URL: {url}")))?;

        if !response.status().is_success() {
            return Err(Error::UpstreamFetch(format!(
                "HTTP error: {} for fund list",
                response.status()
            )));
        }

        let text = response.text().await?;
        let funds: Vec<GamcoFund> = serde_json::from_str(&text).map_err(|e| {
            Error::UpstreamFetch(format!("Failed to parse fund list response: {e}"))
        })?;
        debug!(count = funds.len(), "Received fund list");

        let funds: Vec<Fund> = funds
            .into_iter()
            .filter(|f| match &self.asset_type {
                Some(wanted) => f
                    .asset_type
                    .as_deref()
                    .is_some_and(|t| t.eq_ignore_ascii_case(wanted)),
                None => true,
            })
            .map(Fund::from)
            .collect();
        debug!(count = funds.len(), "Kept funds after asset type filter");

        Ok(funds)
    }
}
