// src/lib.rs
//! Scrape the SNC public contract listing, filter it against the configured
//! RIFs/keywords/date window, and notify recipients of what matched.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod contract;
pub mod core;
pub mod filter;
pub mod notify;
pub mod runner;
pub mod scrape;
pub mod specs;

pub use config::{ConfigStore, ConfigUpdate, Configuration};
pub use contract::Contract;
pub use filter::{filter_and_report, filter_contracts};
pub use scrape::{FetchError, fetch_contracts};
