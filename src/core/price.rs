//! Pricing abstractions

use super::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Returns the current market price of `symbol` as decimal text.
    async fn fetch_price(&self, symbol: &str) -> Result<String>;
}

/// Fetches prices one symbol at a time, in order, stopping at the first failure.
///
/// `on_fetched` is invoked after every successful lookup so callers can report progress.
pub async fn fetch_prices<'a, I>(
    provider: &(dyn PriceProvider + Send + Sync),
    symbols: I,
    mut on_fetched: impl FnMut(&str),
) -> Result<HashMap<String, String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut prices = HashMap::new();
    for symbol in symbols {
        let price = provider.fetch_price(symbol).await?;
        debug!(%symbol, %price, "Fetched price");
        on_fetched(symbol);
        prices.insert(symbol.to_string(), price);
    }
    Ok(prices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;
    use std::sync::Mutex;

    struct MockPriceProvider {
        calls: Mutex<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    impl MockPriceProvider {
        fn new(fail_on: Option<&'static str>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_on,
            }
        }
    }

    #[async_trait]
    impl PriceProvider for MockPriceProvider {
        async fn fetch_price(&self, symbol: &str) -> Result<String> {
            self.calls.lock().unwrap().push(symbol.to_string());
            if self.fail_on == Some(symbol) {
                return Err(Error::UpstreamFetch(format!("no quote for {symbol}")));
            }
            Ok(format!("{}.00", symbol.len()))
        }
    }

    #[tokio::test]
    async fn test_fetch_prices_in_order() {
        let provider = MockPriceProvider::new(None);
        let mut fetched = 0;
        let prices = fetch_prices(&provider, ["GAB", "GUT", "GDV"], |_| fetched += 1)
            .await
            .unwrap();

        assert_eq!(prices.len(), 3);
        assert_eq!(prices["GUT"], "3.00");
        assert_eq!(fetched, 3);
        assert_eq!(*provider.calls.lock().unwrap(), vec!["GAB", "GUT", "GDV"]);
    }

    #[tokio::test]
    async fn test_fetch_prices_stops_at_first_failure() {
        let provider = MockPriceProvider::new(Some("GUT"));
        let result = fetch_prices(&provider, ["GAB", "GUT", "GDV"], |_| {}).await;

        assert!(matches!(result, Err(Error::UpstreamFetch(_))));
        assert_eq!(*provider.calls.lock().unwrap(), vec!["GAB", "GUT"]);
    }
}
