// src/runner.rs
use std::{thread, time::Duration};

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use cron::Schedule;

use crate::{
    config::{ConfigStore, ScheduleError, consts::DEFAULT_CRONTAB, parse_schedule, schedule::next_run},
    core::dates,
    filter,
    notify::{self, Notifier},
    scrape::{self, ContractSource, FetchError, RetryPolicy},
};

/// Everything one run touches. Borrowed, so the caller owns lifetimes and sharing.
pub struct Pipeline<'a> {
    pub source: &'a dyn ContractSource,
    pub policy: RetryPolicy,
    pub store: &'a ConfigStore,
    pub notifier: &'a dyn Notifier,
}

/// What happened during one run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub fetched: usize,
    pub matched: usize,
    pub delivered: usize,
    pub fetch_error: Option<FetchError>,
}

impl RunSummary {
    pub fn succeeded(&self) -> bool {
        self.fetch_error.is_none()
    }
}

/// fetch → sort → filter → dispatch, sequentially on the calling thread.
///
/// `from_date` only advances when the fetch succeeded.
pub fn run_once(p: &Pipeline<'_>) -> RunSummary {
    run_once_at(p, dates::today())
}

pub fn run_once_at(p: &Pipeline<'_>, today: NaiveDate) -> RunSummary {
    let mut summary = RunSummary::default();

    let outcome = scrape::fetch_contracts(p.source, &p.policy).map(|all| {
        summary.fetched = all.len();
        filter::filter_and_report_at(&all, p.store, today)
    });
    if let Ok(matched) = &outcome {
        summary.matched = matched.len();
    }

    summary.delivered = match notify::dispatch(p.notifier, &outcome) {
        Ok(n) => n,
        Err(e) => {
            loge!("Report delivery incomplete: {e}");
            0
        }
    };

    summary.fetch_error = outcome.err();
    logf!(
        "Run finished: fetched={} matched={} delivered={} ok={}",
        summary.fetched, summary.matched, summary.delivered, summary.succeeded()
    );
    summary
}

/// The crontab currently in the store, or the default if it no longer parses.
pub fn current_schedule(store: &ConfigStore) -> Result<Schedule, ScheduleError> {
    let expr = store.snapshot().crontab;
    parse_schedule(&expr).or_else(|e| {
        loge!("{e}; falling back to {DEFAULT_CRONTAB:?}");
        parse_schedule(DEFAULT_CRONTAB)
    })
}

/// Time to sleep from `now` until the next tick. `None` if the schedule has no future ticks.
pub fn wait_until_next<Z: TimeZone>(schedule: &Schedule, now: &DateTime<Z>) -> Option<Duration> {
    let next = next_run(schedule, now)?;
    Some((next - now.clone()).to_std().unwrap_or(Duration::ZERO))
}

/// Run now, then on every tick of the configured crontab.
/// Runs never overlap; the schedule is re-read before each wait.
pub fn watch(p: &Pipeline<'_>) -> Result<(), ScheduleError> {
    loop {
        run_once(p);

        let schedule = current_schedule(p.store)?;
        let Some(wait) = wait_until_next(&schedule, &Local::now()) else {
            logw!("Schedule has no upcoming runs; stopping");
            return Ok(());
        };
        logf!("Next run in {}s", wait.as_secs());
        thread::sleep(wait);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn waits_until_noon() {
        let s = parse_schedule(DEFAULT_CRONTAB).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 11, 0, 0).unwrap();
        assert_eq!(wait_until_next(&s, &now), Some(Duration::from_secs(3600)));
    }

    #[test]
    fn at_the_tick_waits_a_full_cycle() {
        let s = parse_schedule("0 12/24 * * *").unwrap();
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(wait_until_next(&s, &now), Some(Duration::from_secs(24 * 3600)));
    }

    #[test]
    fn default_store_schedule_parses() {
        let store = ConfigStore::default();
        let s = current_schedule(&store).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 11, 30, 0).unwrap();
        assert_eq!(wait_until_next(&s, &now), Some(Duration::from_secs(1800)));
    }

    #[test]
    fn bad_crontab_falls_back_to_default() {
        let store = ConfigStore::default();
        store.update(crate::config::ConfigUpdate::SetSchedule(s!("not a cron")));
        let s = current_schedule(&store).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 13, 0, 0).unwrap();
        assert_eq!(wait_until_next(&s, &now), Some(Duration::from_secs(23 * 3600)));
    }
}
