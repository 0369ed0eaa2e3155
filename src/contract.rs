// src/contract.rs
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::dates;
use crate::core::sanitize::{clean, upper};

/// One row of the public contract listing.
///
/// `rif` and `description` are stored upper-cased so filters can compare
/// without re-normalizing; the other fields are display text as scraped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub rif: String,
    pub name: String,
    pub id: String,
    pub date: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub state: String,
}

/// Listing columns in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Rif,
    Name,
    Id,
    Date,
    Status,
    Kind,
    Description,
    State,
}

impl Field {
    pub const ORDER: [Field; 8] = [
        Field::Rif,
        Field::Name,
        Field::Id,
        Field::Date,
        Field::Status,
        Field::Kind,
        Field::Description,
        Field::State,
    ];

    /// Cell index → field. Indices past the last column map to nothing.
    pub fn from_index(i: usize) -> Option<Field> {
        Self::ORDER.get(i).copied()
    }
}

impl Contract {
    /// Store one cell's raw text in `field`, normalizing as the field requires.
    pub fn set(&mut self, field: Field, raw: &str) {
        match field {
            Field::Rif         => self.rif = upper(raw),
            Field::Name        => self.name = clean(raw),
            Field::Id          => self.id = clean(raw),
            Field::Date        => self.date = clean(raw),
            Field::Status      => self.status = clean(raw),
            Field::Kind        => self.kind = clean(raw),
            Field::Description => self.description = upper(raw),
            Field::State       => self.state = clean(raw),
        }
    }

    /// Build from a row's cells in page order. Extra cells are ignored.
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut c = Contract::default();
        for (i, cell) in cells.into_iter().enumerate() {
            match Field::from_index(i) {
                Some(f) => c.set(f, cell.as_ref()),
                None => break,
            }
        }
        c
    }

    /// Parsed date, [`NaiveDate::MIN`] when the text is not `DD/MM/YYYY`.
    pub fn parsed_date(&self) -> NaiveDate {
        dates::date_or_min(&self.date)
    }

    /// Exact RIF membership. `rifs` must already be upper-cased.
    pub fn rif_in<'a, I>(&self, rifs: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        rifs.into_iter().any(|r| *r == self.rif)
    }

    /// True if any keyword is a substring of the description. `keywords` must already be upper-cased.
    pub fn mentions_any<'a, I>(&self, keywords: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        keywords.into_iter().any(|k| self.description.contains(k.as_str()))
    }

    /// The message block sent to recipients.
    pub fn human_readable(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Date: {}", self.date)?;
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "RIF: {}", self.rif)?;
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Type: {}", self.kind)?;
        writeln!(f, "State: {}", self.state)?;
        writeln!(f, "Description: {}", self.description)
    }
}
