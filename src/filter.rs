// src/filter.rs
use chrono::NaiveDate;

use crate::{
    config::{ConfigStore, ConfigUpdate, Configuration},
    contract::Contract,
    core::dates,
};

/// Does `c` pass the date, RIF and keyword criteria of `config`?
pub fn matches(c: &Contract, config: &Configuration) -> bool {
    if c.parsed_date() <= config.from_date {
        return false;
    }
    if !config.rif_filters.is_empty() && !c.rif_in(&config.rif_filters) {
        return false;
    }
    if !config.keyword_filters.is_empty() && !c.mentions_any(&config.keyword_filters) {
        return false;
    }
    true
}

/// Pure filter step. Input order is kept.
pub fn filter_contracts(contracts: &[Contract], config: &Configuration) -> Vec<Contract> {
    contracts
        .iter()
        .filter(|c| matches(c, config))
        .cloned()
        .collect()
}

/// Filter against the current snapshot, then roll `from_date` to `today - 1`.
pub fn filter_and_report(contracts: &[Contract], store: &ConfigStore) -> Vec<Contract> {
    filter_and_report_at(contracts, store, dates::today())
}

/// [`filter_and_report`] with an explicit "today".
pub fn filter_and_report_at(
    contracts: &[Contract],
    store: &ConfigStore,
    today: NaiveDate,
) -> Vec<Contract> {
    let config = store.snapshot();
    let kept = filter_contracts(contracts, &config);
    logf!(
        "Filtered {} of {} contracts (after {}, {} RIF(s), {} keyword(s))",
        kept.len(),
        contracts.len(),
        dates::format_date(config.from_date),
        config.rif_filters.len(),
        config.keyword_filters.len(),
    );

    store.update(ConfigUpdate::AdvanceFromDate { today });
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contract(rif: &str, date: &str, desc: &str) -> Contract {
        Contract {
            rif: s!(rif),
            date: s!(date),
            description: s!(desc),
            ..Default::default()
        }
    }

    fn config_from(d: NaiveDate) -> Configuration {
        Configuration { from_date: d, ..Configuration::starting(ymd(2024, 6, 15)) }
    }

    #[test]
    fn date_must_be_strictly_after() {
        let cfg = config_from(ymd(2024, 6, 10));
        assert!(matches(&contract("J1", "15/06/2024", ""), &cfg));
        assert!(!matches(&contract("J1", "10/06/2024", ""), &cfg));
        assert!(!matches(&contract("J1", "09/06/2024", ""), &cfg));
        assert!(!matches(&contract("J1", "sin fecha", ""), &cfg));
    }

    #[test]
    fn rif_filter_is_exact_membership() {
        let cfg = config_from(ymd(2024, 1, 1))
            .with(ConfigUpdate::AddRifs(vec![s!("g200003391")]));
        assert!(matches(&contract("G200003391", "15/06/2024", ""), &cfg));
        assert!(!matches(&contract("J999999999", "15/06/2024", ""), &cfg));
        assert!(!matches(&contract("G2000033910", "15/06/2024", ""), &cfg));
    }

    #[test]
    fn empty_rif_filter_passes_everyone() {
        let cfg = config_from(ymd(2024, 1, 1));
        assert!(matches(&contract("J999999999", "15/06/2024", ""), &cfg));
    }

    #[test]
    fn keyword_filter_is_substring() {
        let cfg = config_from(ymd(2024, 1, 1))
            .with(ConfigUpdate::AddKeywords(vec![s!("gas")]));
        assert!(matches(&contract("J1", "15/06/2024", "SUMINISTRO DE GAS NATURAL"), &cfg));
        assert!(!matches(&contract("J1", "15/06/2024", "SUMINISTRO DE AGUA"), &cfg));
    }

    #[test]
    fn all_criteria_must_hold() {
        let cfg = config_from(ymd(2024, 1, 1))
            .with(ConfigUpdate::AddRifs(vec![s!("G1")]))
            .with(ConfigUpdate::AddKeywords(vec![s!("GAS")]));
        assert!(matches(&contract("G1", "15/06/2024", "GAS"), &cfg));
        assert!(!matches(&contract("G1", "15/06/2024", "AGUA"), &cfg));
        assert!(!matches(&contract("J1", "15/06/2024", "GAS"), &cfg));
        assert!(!matches(&contract("G1", "01/01/2024", "GAS"), &cfg));
    }

    #[test]
    fn keeps_input_order() {
        let cfg = config_from(ymd(2024, 1, 1));
        let input = vec![
            contract("A", "15/06/2024", ""),
            contract("B", "01/01/2024", ""),
            contract("C", "10/03/2024", ""),
        ];
        let out = filter_contracts(&input, &cfg);
        let rifs: Vec<_> = out.iter().map(|c| c.rif.as_str()).collect();
        assert_eq!(rifs, ["A", "C"]);
    }

    #[test]
    fn report_advances_the_window() {
        let store = ConfigStore::new(config_from(ymd(2020, 1, 1)));
        let input = vec![contract("A", "15/06/2024", "")];
        let out = filter_and_report_at(&input, &store, ymd(2024, 7, 1));
        assert_eq!(out.len(), 1);
        assert_eq!(store.snapshot().from_date, ymd(2024, 6, 30));
    }

    #[test]
    fn report_uses_the_pre_run_window() {
        let store = ConfigStore::new(config_from(ymd(2024, 6, 20)));
        let input = vec![contract("A", "15/06/2024", "")];
        assert!(filter_and_report_at(&input, &store, ymd(2024, 6, 1)).is_empty());
        assert_eq!(store.snapshot().from_date, ymd(2024, 5, 31));
    }
}
