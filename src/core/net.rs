// src/core/net.rs
// Blocking HTTP GET. The pipeline runs on whatever thread triggers it, so no runtime is needed.

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT, USER_AGENT};
use crate::scrape::FetchError;

pub fn client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
}

/// GET `url` and return the body. Any non-2xx status is an error.
pub fn http_get(client: &Client, url: &str) -> Result<String, FetchError> {
    logd!("Visiting {url}");

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp.text()?)
}
