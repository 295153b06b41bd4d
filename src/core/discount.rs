//! Discount of market price to net asset value.
//!
//! All arithmetic is done on exact decimals; the percentage is rounded to a
//! whole number only at the end, with midpoints rounded away from zero.

use super::error::{Error, Result};
use super::fund::Fund;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::debug;

/// Funds at or above this discount (in percent) are reported.
pub const DEFAULT_THRESHOLD: i64 = 10;

/// A fund whose NAV and price have been paired and compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FundDiscount {
    pub symbol: String,
    pub nav: String,
    pub price: String,
    pub discount: i64,
}

pub fn parse_decimal(value: &str) -> Result<Decimal> {
    Decimal::from_str(value.trim()).map_err(|source| Error::Parse {
        value: value.to_string(),
        source,
    })
}

/// Returns `round((nav / price - 1) * 100)`.
///
/// A negative result means the fund trades at a premium.
pub fn discount(nav: &str, price: &str) -> Result<i64> {
    let n = parse_decimal(nav)?;
    let p = parse_decimal(price)?;
    if p.is_zero() {
        return Err(Error::DivisionByZero {
            nav: nav.to_string(),
        });
    }

    let overflow = || Error::OutOfRange {
        nav: nav.to_string(),
        price: price.to_string(),
    };

    let percent = n
        .checked_div(p)
        .and_then(|q| q.checked_sub(Decimal::ONE))
        .and_then(|q| q.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(overflow)?;

    percent
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(overflow)
}

/// Builds the symbol to NAV map. Later records win over earlier ones with the same symbol.
pub fn extract_navs(funds: &[Fund]) -> HashMap<String, String> {
    funds
        .iter()
        .map(|f| (f.symbol.clone(), f.nav.clone()))
        .collect()
}

/// Pairs every NAV with its price and keeps the funds at or above `threshold`.
///
/// Symbols are visited in sorted order, so the result is sorted by symbol. A
/// symbol with no price is compared against an empty price string and fails to
/// parse. The first error aborts the whole pass and discards partial results.
pub fn find_discounts(
    navs: &HashMap<String, String>,
    prices: &HashMap<String, String>,
    threshold: i64,
) -> Result<Vec<FundDiscount>> {
    let mut symbols: Vec<&String> = navs.keys().collect();
    symbols.sort();

    let mut discounts = Vec::new();
    for symbol in symbols {
        let nav = &navs[symbol];
        let price = prices.get(symbol).map(String::as_str).unwrap_or("");
        let d = discount(nav, price)?;
        debug!(%symbol, %nav, %price, discount = d, "Computed discount");

        if d >= threshold {
            discounts.push(FundDiscount {
                symbol: symbol.clone(),
                nav: nav.clone(),
                price: price.to_string(),
                discount: d,
            });
        }
    }

    Ok(discounts)
}
