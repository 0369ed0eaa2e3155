// src/core/mod.rs

pub mod dates;
pub mod net;
pub mod sanitize;
