// src/notify/mod.rs
//! Delivery of a run's outcome to people. Rendering is the contract's own
//! human-readable block; transports only move text.

mod console;
mod telegram;

pub use console::ConsoleNotifier;
pub use telegram::TelegramNotifier;

use thiserror::Error;

use crate::{contract::Contract, scrape::FetchError};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("send failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("chat {chat_id} rejected the message (HTTP {status})")]
    Rejected { chat_id: i64, status: u16 },

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub trait Notifier {
    /// Deliver one message to every recipient.
    fn send(&self, text: &str) -> Result<(), NotifyError>;
}

/// Message sent when a run could not fetch the listing.
pub fn fetch_error_message(err: &FetchError) -> String {
    format!("Error while fetching table. {err}")
}

/// Send one message per contract, or the error message if the fetch failed.
/// Every message is attempted; the last failure (if any) is returned.
pub fn dispatch(
    notifier: &dyn Notifier,
    outcome: &Result<Vec<Contract>, FetchError>,
) -> Result<usize, NotifyError> {
    let messages: Vec<String> = match outcome {
        Ok(contracts) => contracts.iter().map(Contract::human_readable).collect(),
        Err(e) => vec![fetch_error_message(e)],
    };

    let mut last_err = None;
    let mut sent = 0;
    for msg in &messages {
        match notifier.send(msg) {
            Ok(()) => sent += 1,
            Err(e) => {
                loge!("Notification failed: {e}");
                last_err = Some(e);
            }
        }
    }

    match last_err {
        Some(e) => Err(e),
        None => Ok(sent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        sent: RefCell<Vec<String>>,
        fail_on: Option<usize>,
    }

    impl Notifier for Recorder {
        fn send(&self, text: &str) -> Result<(), NotifyError> {
            let n = self.sent.borrow().len();
            self.sent.borrow_mut().push(s!(text));
            if self.fail_on == Some(n) {
                return Err(NotifyError::Rejected { chat_id: 1, status: 403 });
            }
            Ok(())
        }
    }

    #[test]
    fn one_message_per_contract() {
        let r = Recorder::default();
        let contracts = vec![
            Contract { id: s!("A"), ..Default::default() },
            Contract { id: s!("B"), ..Default::default() },
        ];
        assert_eq!(dispatch(&r, &Ok(contracts)).unwrap(), 2);
        let sent = r.sent.borrow();
        assert!(sent[0].contains("ID: A"));
        assert!(sent[1].contains("ID: B"));
    }

    #[test]
    fn fetch_failure_is_reported() {
        let r = Recorder::default();
        let err = FetchError::Status { status: 503, url: s!("http://x") };
        dispatch(&r, &Err(err)).unwrap();
        assert_eq!(r.sent.borrow().as_slice(), ["Error while fetching table. HTTP 503 from http://x"]);
    }

    #[test]
    fn keeps_going_after_a_failed_send() {
        let r = Recorder { fail_on: Some(0), ..Default::default() };
        let contracts = vec![Contract::default(), Contract::default()];
        assert!(matches!(dispatch(&r, &Ok(contracts)), Err(NotifyError::Rejected { .. })));
        assert_eq!(r.sent.borrow().len(), 2);
    }
}
