// src/core/net.rs

// Blocking HTTPS GET. The catalog page and the dataset files both live
// behind TLS, so this wraps reqwest's blocking client (rustls) instead
// of a raw TcpStream. One shared client, fixed timeout, no retries.

use std::{error::Error, sync::OnceLock, time::Duration};
use reqwest::blocking::{Client, Response};
use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

static CLIENT: OnceLock<Client> = OnceLock::new();

fn client() -> &'static Client {
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .expect("HTTP client init")
    })
}

fn get(url: &str) -> Result<Response, Box<dyn Error>> {
    let resp = client().get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp)
}

/// GET a page, body as text.
pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    Ok(get(url)?.text()?)
}

/// GET a file, raw body bytes.
pub fn http_get_bytes(url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    Ok(get(url)?.bytes()?.to_vec())
}
