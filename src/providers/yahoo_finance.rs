use crate::core::error::{Error, Result};
use crate::core::price::PriceProvider;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

// YahooFinanceProvider implementation for PriceProvider
pub struct YahooFinanceProvider {
    base_url: String,
}

impl YahooFinanceProvider {
    pub fn new(base_url: &str) -> Self {
        YahooFinanceProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct YahooQuoteResponse {
    quote_summary: QuoteSummary,
}

#[derive(Deserialize, Debug)]
struct QuoteSummary {
    #[serde(default)]
    result: Vec<QuoteSummaryItem>,
}

#[derive(Deserialize, Debug)]
struct QuoteSummaryItem {
    price: Option<PriceModule>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PriceModule {
    regular_market_price: Option<FormattedValue>,
}

#[derive(Deserialize, Debug)]
struct FormattedValue {
    fmt: Option<String>,
}

#[async_trait]
impl PriceProvider for YahooFinanceProvider {
    #[instrument(
        name = "YahooPriceFetch",
        skip(self),
        fields(symbol = %symbol)
    )]
    async fn fetch_price(&self, symbol: &str) -> Result<String> {
        let url = format!(
            "{}/v6/finance/quoteSummary/{}?modules=price",
            self.base_url,
            symbol.to_uppercase()
        );
        debug!("Requesting price data from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("navcheck/0.1")
            .build()?;
        let response = client.get(&url).send().await.map_err(|e| {
            Error::UpstreamFetch(format!("Request error: {e} for symbol: {symbol} URL: {url}"))
        })?;

        if !response.status().is_success() {
            return Err(Error::UpstreamFetch(format!(
                "HTTP error: {} for symbol: {}",
                response.status(),
                symbol
            )));
        }

        let text = response.text().await?;
        let data: YahooQuoteResponse = serde_json::from_str(&text).map_err(|e| {
            Error::UpstreamFetch(format!("Failed to parse JSON response for {symbol}: {e}"))
        })?;

        let price = data
            .quote_summary
            .result
            .into_iter()
            .next()
            .and_then(|item| item.price)
            .and_then(|p| p.regular_market_price)
            .and_then(|p| p.fmt)
            .ok_or_else(|| Error::UpstreamFetch(format!("No price data found for symbol: {symbol}")))?;

        // "1,234.50" style formatting is not a valid decimal
        Ok(price.replace(',', ""))
    }
}
