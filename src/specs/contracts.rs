// src/specs/contracts.rs
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};

use crate::config::consts::CONTRACT_CELLS;
use crate::contract::Contract;
use crate::core::net;
use crate::scrape::FetchError;

/// Rows read from one page, plus what was dropped on the way.
#[derive(Debug, Default)]
pub struct ContractsBundle {
    pub contracts: Vec<Contract>,
    /// Rows that had some `<td>` cells but fewer than a full record.
    pub short_rows: usize,
}

/// Fetch the listing at `url` and extract every complete row.
pub fn fetch(client: &Client, url: &str) -> Result<Vec<Contract>, FetchError> {
    let html_doc = net::http_get(client, url)?;
    let t = std::time::Instant::now();
    let bundle = parse_doc(&html_doc).ok_or_else(|| FetchError::TableNotFound { url: s!(url) })?;
    logd!("Contracts: parsed page in {:?}", t.elapsed());

    if bundle.short_rows > 0 {
        logf!("Skipped {} incomplete row(s) on {url}", bundle.short_rows);
    }
    logf!("Successfully scraped {} contracts", bundle.contracts.len());
    Ok(bundle.contracts)
}

/// Split out for unit tests. `None` when the page has no `<table>` at all.
///
/// Only the first table is read. Each `<tr>` becomes a fresh record:
/// - no `<td>` at all (header rows with `<th>`): skipped silently
/// - fewer than [`CONTRACT_CELLS`] cells: skipped and counted
/// - more: trailing cells ignored
///
/// A cell's value is all the text under it, nested markup included. A table
/// nested in a cell is flattened into that cell's text, and its own `<tr>`s are
/// visited as rows of the outer table too (usually landing as short rows).
pub fn parse_doc(html_doc: &str) -> Option<ContractsBundle> {
    let table_sel = selector("table");
    let tr_sel = selector("tr");

    let doc = Html::parse_document(html_doc);
    let table = doc.select(&table_sel).next()?;

    let mut out = ContractsBundle::default();
    for row in table.select(&tr_sel) {
        let cells = row_cells(row);
        if cells.is_empty() {
            continue;
        }
        if cells.len() < CONTRACT_CELLS {
            logd!("Short row ({} cells): {:?}", cells.len(), cells);
            out.short_rows += 1;
            continue;
        }
        out.contracts.push(Contract::from_cells(&cells));
    }
    Some(out)
}

/// Text of the row's own `<td>` children, in document order.
/// A nested table does not add cells to this row, but its text is part of the
/// `<td>` holding it.
fn row_cells(row: ElementRef<'_>) -> Vec<String> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name().eq_ignore_ascii_case("td"))
        .map(|td| td.text().collect::<String>())
        .collect()
}

fn selector(css: &str) -> Selector {
    // Static selectors; a parse failure is a programming error caught by tests.
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e}"))
}
