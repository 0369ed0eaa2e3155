// src/scrape/mod.rs
mod error;
mod scrape;

pub use error::FetchError;
pub use scrape::{ContractSource, RetryPolicy, WebSource, fetch_contracts, fetch_with_retry, sort_by_date_desc};
