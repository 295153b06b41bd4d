use super::ui;
use crate::core::report;
use crate::core::{
    FundDiscount, FundListProvider, PriceProvider, Result, extract_navs, fetch_prices,
    find_discounts,
};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;

/// Fetches the fund list and every price, then keeps the funds at or above `threshold`.
pub async fn find_qualifying(
    fund_provider: &(dyn FundListProvider + Send + Sync),
    price_provider: &(dyn PriceProvider + Send + Sync),
    threshold: i64,
) -> Result<Vec<FundDiscount>> {
    let funds = fund_provider.fetch_funds().await?;
    let navs = extract_navs(&funds);
    info!(funds = navs.len(), "Fetched fund list");

    let mut symbols: Vec<&str> = navs.keys().map(String::as_str).collect();
    symbols.sort_unstable();

    let pb = ui::new_progress_bar(symbols.len() as u64);
    pb.set_message("Fetching prices...");
    let prices = fetch_prices(price_provider, symbols, |_| pb.inc(1)).await;
    pb.finish_and_clear();

    let discounts = find_discounts(&navs, &prices?, threshold)?;
    info!(
        qualifying = discounts.len(),
        threshold, "Computed discounts"
    );
    Ok(discounts)
}

/// Runs the full check and writes the report. Returns `None` when no fund qualified.
pub async fn run(
    fund_provider: &(dyn FundListProvider + Send + Sync),
    price_provider: &(dyn PriceProvider + Send + Sync),
    threshold: i64,
    report_dir: &Path,
    prefix: &str,
    date: NaiveDate,
) -> Result<Option<PathBuf>> {
    let discounts = find_qualifying(fund_provider, price_provider, threshold).await?;
    report::write_report(&discounts, report_dir, prefix, date)
}
