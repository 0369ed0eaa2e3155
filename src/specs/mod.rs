//! # Scraping “specs” module
//!
//! Page-specific extraction for the SNC site. A spec knows *where the data lives
//! in the HTML* and *how to read it into typed records*; nothing else.
//!
//! ## What lives here
//! - **Pure HTML parsing** of a fetched page (`parse_doc`), testable offline
//!   against inline fixtures.
//! - **Column mapping**: the listing is one table with a fixed column order
//!   (rif, name, id, date, status, type, description, state).
//! - **Row policy**: header rows and incomplete rows are dropped, never
//!   half-filled; every kept row is a fresh [`Contract`](crate::contract::Contract).
//!
//! ## What does **not** live here
//! - **Retries, sorting** – `scrape::fetch_contracts` owns those.
//! - **Filtering, notifications** – `filter` and `notify`.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::fetch_contracts → specs::contracts::fetch()
//!                                  ↘ sorted Vec<Contract>
//!        → filter::filter_and_report → notify::dispatch
//! ```
pub mod contracts;
