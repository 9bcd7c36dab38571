// src/core/net.rs
//
// Blocking HTTPS over reqwest. One request at a time; the caller's thread
// waits for the full response or the client timeout.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

pub fn build_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
}

/// GET `url` and return the body as text. Any non-2xx status is a fetch error.
pub fn http_get(url: &str) -> Result<String> {
    let client = build_client().map_err(|e| Error::fetch(url, e))?;

    let resp = client.get(url).send().map_err(|e| Error::fetch(url, e))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::fetch(url, format!("HTTP {status}")));
    }

    let body = resp.text().map_err(|e| Error::fetch(url, e))?;
    logd!("Net: GET {} → {} bytes", url, body.len());
    Ok(body)
}
