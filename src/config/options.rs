// src/config/options.rs
use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::consts::DEFAULT_CRONTAB;
use crate::core::{dates, sanitize};

/// Filters and schedule shared by every pipeline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    /// Upper-cased. Empty means no RIF filtering.
    pub rif_filters: BTreeSet<String>,
    /// Upper-cased. Empty means no keyword filtering.
    pub keyword_filters: BTreeSet<String>,
    /// Only contracts dated strictly after this pass.
    pub from_date: NaiveDate,
    pub crontab: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::starting(dates::today())
    }
}

/// Every way the configuration can change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigUpdate {
    AddRifs(Vec<String>),
    RemoveRifs(Vec<String>),
    AddKeywords(Vec<String>),
    RemoveKeywords(Vec<String>),
    SetFromDate(NaiveDate),
    SetSchedule(String),
    /// Roll the window forward after a completed run.
    AdvanceFromDate { today: NaiveDate },
}

impl Configuration {
    /// Fresh configuration as of `today`: no filters, one-day lookback.
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            rif_filters: BTreeSet::new(),
            keyword_filters: BTreeSet::new(),
            from_date: dates::yesterday_of(today),
            crontab: s!(DEFAULT_CRONTAB),
        }
    }

    pub fn apply(&mut self, update: ConfigUpdate) {
        match update {
            ConfigUpdate::AddRifs(v)        => insert_all(&mut self.rif_filters, &v),
            ConfigUpdate::RemoveRifs(v)     => remove_all(&mut self.rif_filters, &v),
            ConfigUpdate::AddKeywords(v)    => insert_all(&mut self.keyword_filters, &v),
            ConfigUpdate::RemoveKeywords(v) => remove_all(&mut self.keyword_filters, &v),
            ConfigUpdate::SetFromDate(d)    => self.from_date = d,
            ConfigUpdate::SetSchedule(expr) => self.crontab = s!(expr.trim()),
            ConfigUpdate::AdvanceFromDate { today } => self.from_date = dates::yesterday_of(today),
        }
    }

    /// Builder-style `apply`.
    pub fn with(mut self, update: ConfigUpdate) -> Self {
        self.apply(update);
        self
    }

    pub fn human_readable(&self) -> String {
        format!(
            "RIFs: {:?}\nKeywords: {:?}\nCrontab: {}\nFromDate: {}",
            self.rif_filters,
            self.keyword_filters,
            self.crontab,
            dates::format_date(self.from_date),
        )
    }
}

fn insert_all(set: &mut BTreeSet<String>, values: &[String]) {
    for v in values {
        let v = sanitize::upper(v);
        if !v.is_empty() {
            set.insert(v);
        }
    }
}

fn remove_all(set: &mut BTreeSet<String>, values: &[String]) {
    for v in values {
        set.remove(&sanitize::upper(v));
    }
}
