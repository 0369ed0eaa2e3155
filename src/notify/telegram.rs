// src/notify/telegram.rs
use reqwest::blocking::Client;
use serde_json::json;

use super::{Notifier, NotifyError};
use crate::{config::consts::TELEGRAM_API, core::net};

/// Bot API `sendMessage` to a fixed list of chats.
pub struct TelegramNotifier {
    client: Client,
    endpoint: String,
    chat_ids: Vec<i64>,
}

impl TelegramNotifier {
    pub fn new(token: &str, chat_ids: Vec<i64>) -> Result<Self, NotifyError> {
        Self::with_base(TELEGRAM_API, token, chat_ids)
    }

    /// Alternate API host (self-hosted Bot API server, tests).
    pub fn with_base(base: &str, token: &str, chat_ids: Vec<i64>) -> Result<Self, NotifyError> {
        Ok(Self {
            client: net::client()?,
            endpoint: join!(base.trim_end_matches('/'), "/bot", token, "/sendMessage"),
            chat_ids,
        })
    }

    fn send_to(&self, chat_id: i64, text: &str) -> Result<(), NotifyError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "chat_id": chat_id, "text": text }))
            .send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected { chat_id, status: status.as_u16() });
        }
        Ok(())
    }
}

impl Notifier for TelegramNotifier {
    /// A chat that fails does not stop delivery to the rest.
    fn send(&self, text: &str) -> Result<(), NotifyError> {
        let mut last_err = None;
        for &chat_id in &self.chat_ids {
            if let Err(e) = self.send_to(chat_id, text) {
                loge!("Telegram send to {chat_id} failed: {e}");
                last_err = Some(e);
            }
        }
        last_err.map_or(Ok(()), Err)
    }
}
