//! Core business logic abstractions

pub mod config;
pub mod discount;
pub mod error;
pub mod fund;
pub mod log;
pub mod price;
pub mod report;

// Re-export main types for cleaner imports
pub use discount::{DEFAULT_THRESHOLD, FundDiscount, discount, extract_navs, find_discounts};
pub use error::{Error, Result};
pub use fund::{Fund, FundListProvider};
pub use price::{PriceProvider, fetch_prices};
