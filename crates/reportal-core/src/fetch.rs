//! Deferred `GET` of a report resource.
//!
//! Uses the curl crate (libcurl) for the transfer. [`fetch_text`] blocks the
//! current thread; [`request`] runs it on tokio's blocking pool so async
//! callers get a future that resolves to the body text.

use crate::config::FetchConfig;
use std::str;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with something other than 200.
    #[error("{status}: {status_text}")]
    Status { status: u32, status_text: String },
    /// The request could not be sent or the transfer broke off.
    #[error("Network Error: {0}")]
    Network(#[from] curl::Error),
    #[error("fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Performs a `GET` and returns the response body on HTTP 200.
pub fn fetch_text(url: &str, cfg: &FetchConfig) -> Result<String, FetchError> {
    let mut body: Vec<u8> = Vec::new();
    let mut headers: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(cfg.follow_redirects)?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(cfg.timeout_secs))?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    tracing::debug!("GET {} returned HTTP {}", url, status);
    if status != 200 {
        return Err(FetchError::Status {
            status,
            status_text: status_text(&headers),
        });
    }

    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// Async form of [`fetch_text`]; the transfer runs on a blocking thread.
pub async fn request(url: &str, cfg: &FetchConfig) -> Result<String, FetchError> {
    let url = url.to_string();
    let cfg = cfg.clone();
    tokio::task::spawn_blocking(move || fetch_text(&url, &cfg)).await?
}

/// Reason phrase of the last status line seen (the final hop after redirects).
///
/// Empty when the server sent none, as HTTP/2 servers do.
fn status_text(lines: &[String]) -> String {
    lines
        .iter()
        .filter(|l| l.starts_with("HTTP/"))
        .last()
        .and_then(|l| l.splitn(3, ' ').nth(2))
        .map(|reason| reason.trim().to_string())
        .unwrap_or_default()
}
