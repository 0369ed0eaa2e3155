// src/notify/console.rs
use std::io::{self, Write};

use super::{Notifier, NotifyError};

/// Prints messages to stdout, blank-line separated. Used when no bot is configured.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn send(&self, text: &str) -> Result<(), NotifyError> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", text.trim_end())?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}
