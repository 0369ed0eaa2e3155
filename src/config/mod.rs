// src/config/mod.rs
pub mod consts;
pub mod options;
pub mod schedule;
pub mod settings;
pub mod store;

pub use options::{ConfigUpdate, Configuration};
pub use schedule::{ScheduleError, parse_schedule};
pub use settings::{Settings, SettingsError};
pub use store::ConfigStore;
