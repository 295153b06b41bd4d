pub mod gamco;
pub mod yahoo_finance;

pub use gamco::GamcoFundListProvider;
pub use yahoo_finance::YahooFinanceProvider;
