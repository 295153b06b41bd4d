//! Error kinds surfaced by the discount check.
//!
//! Every variant aborts the run; nothing is retried or recovered locally.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A NAV or price string that is not a valid decimal number.
    #[error("Failed to parse decimal '{value}': {source}")]
    Parse {
        value: String,
        #[source]
        source: rust_decimal::Error,
    },

    /// A quote whose price is zero.
    #[error("Price is 0, cannot calculate discount for NAV {nav}")]
    DivisionByZero { nav: String },

    /// A NAV to price ratio too large to express as a percentage.
    #[error("Discount out of range for NAV {nav} and price {price}")]
    OutOfRange { nav: String, price: String },

    /// The fund list or price source was unreachable or returned bad data.
    #[error("Upstream fetch failed: {0}")]
    UpstreamFetch(String),

    /// The report file could not be written.
    #[error("Failed to write report to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::UpstreamFetch(err.to_string())
    }
}
