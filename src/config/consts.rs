// src/config/consts.rs
use std::time::Duration;

// Source page
pub const SOURCE_URL: &str = "http://sistemaintegrado.snc.gob.ve/index.php/llamadoxterno";
pub const USER_AGENT: &str = concat!("snc_watch/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

// Table layout: rif, name, id, date, status, type, description, state
pub const CONTRACT_CELLS: usize = 8;
pub const DATE_FORMAT: &str = "%d/%m/%Y";

// Retry
pub const MAX_RETRIES: u32 = 1;
pub const RETRY_DELAY: Duration = Duration::from_secs(60);

// Schedule (minute hour dom month dow)
pub const DEFAULT_CRONTAB: &str = "0 12 * * *";

// Notifications
pub const TELEGRAM_API: &str = "https://api.telegram.org";
