// src/config/settings.rs
use chrono::NaiveDate;
use thiserror::Error;

use crate::core::{dates, sanitize};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid date {0:?}, expected DD/MM/YYYY")]
    Date(String),
}

/// Recipients and credentials, read from the environment (`.env` honored).
#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub bot_token: Option<String>,
    pub chat_ids: Vec<i64>,
}

impl Settings {
    pub fn new(bot_token: Option<String>, chat_ids: Option<&str>) -> Self {
        Self {
            bot_token: bot_token.filter(|t| !t.trim().is_empty()),
            chat_ids: chat_ids.map(parse_chat_ids).unwrap_or_default(),
        }
    }

    /// Telegram delivery needs both a token and somewhere to send.
    pub fn telegram_ready(&self) -> bool {
        self.bot_token.is_some() && !self.chat_ids.is_empty()
    }
}

/// Comma-separated chat ids. Entries that are not integers are logged and skipped.
pub fn parse_chat_ids(s: &str) -> Vec<i64> {
    sanitize::split_list(s)
        .filter_map(|part| match part.parse::<i64>() {
            Ok(id) => Some(id),
            Err(e) => {
                logw!("Error parsing chat id {part:?}: {e}");
                None
            }
        })
        .collect()
}

/// User-supplied `DD/MM/YYYY`. Unlike scraped dates, a bad value here is an error.
pub fn parse_user_date(s: &str) -> Result<NaiveDate, SettingsError> {
    dates::parse_date(s).ok_or_else(|| SettingsError::Date(s!(s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_ids_skip_garbage() {
        assert_eq!(parse_chat_ids("123, -100456,abc,,7"), vec![123, -100456, 7]);
    }

    #[test]
    fn telegram_needs_token_and_chats() {
        assert!(!Settings::new(Some(s!("t")), None).telegram_ready());
        assert!(!Settings::new(Some(s!("  ")), Some("1")).telegram_ready());
        assert!(!Settings::new(None, Some("1")).telegram_ready());
        assert!(Settings::new(Some(s!("t")), Some("1")).telegram_ready());
    }

    #[test]
    fn user_dates_are_strict() {
        assert!(parse_user_date("22/01/2006").is_ok());
        assert!(matches!(parse_user_date("2006-01-22"), Err(SettingsError::Date(_))));
    }
}
