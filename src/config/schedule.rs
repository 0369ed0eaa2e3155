// src/config/schedule.rs
use std::str::FromStr;

use chrono::{DateTime, TimeZone};
use cron::Schedule;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid cron expression {expr:?}: {source}")]
    Invalid {
        expr: String,
        #[source]
        source: cron::error::Error,
    },
}

/// Span of each classic field: minute, hour, day of month, month, day of week.
const CLASSIC_SPANS: [u32; 5] = [60, 24, 31, 12, 7];

/// Parse a crontab. Classic 5-field expressions (`min hour dom month dow`) get a
/// leading seconds field; 6- and 7-field expressions are used as given.
///
/// In classic expressions a step that covers the whole field (`12/24` on hours)
/// fires once per cycle, so it is reduced to its start (`12`).
pub fn parse_schedule(expr: &str) -> Result<Schedule, ScheduleError> {
    let trimmed = expr.trim();
    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    let full = if fields.len() == CLASSIC_SPANS.len() {
        let classic: Vec<String> = fields
            .iter()
            .zip(CLASSIC_SPANS)
            .map(|(f, span)| collapse_full_step(f, span))
            .collect();
        join!("0 ", &classic.join(" "))
    } else {
        s!(trimmed)
    };
    Schedule::from_str(&full).map_err(|source| ScheduleError::Invalid { expr: s!(expr), source })
}

/// `start/step` with `step >= span` → `start`. Anything else is returned unchanged.
fn collapse_full_step(field: &str, span: u32) -> String {
    let Some((start, step)) = field.split_once('/') else {
        return s!(field);
    };
    match step.parse::<u32>() {
        Ok(step) if step >= span && start != "*" => {
            // `a-b/step` only ever hits `a`.
            s!(start.split('-').next().unwrap_or(start))
        }
        _ => s!(field),
    }
}

/// Next tick strictly after `after`.
pub fn next_run<Z: TimeZone>(schedule: &Schedule, after: &DateTime<Z>) -> Option<DateTime<Z>> {
    schedule.after(after).next()
}
