//! URI format checks for URI-bearing members.
//!
//! Accepts two forms:
//! - network locators with a scheme and a host (`https://host/model.glb`),
//!   plus `file:` URLs
//! - `data:` URIs, whose base64 payload is decoded when `;base64` is declared

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use url::Url;

use super::{Error, Result};

/// Check whether `text` is a usable CZML URI.
pub fn is_valid_uri(text: &str) -> bool {
    validate_uri(text).is_ok()
}

/// Validate `text` as a network locator or data URI.
pub fn validate_uri(text: &str) -> Result<()> {
    if let Some(rest) = text.strip_prefix("data:") {
        return validate_data_uri(text, rest);
    }

    let url = Url::parse(text).map_err(|e| Error::InvalidUri(format!("{text}: {e}")))?;
    if url.scheme() == "file" || url.host_str().is_some_and(|h| !h.is_empty()) {
        Ok(())
    } else {
        Err(Error::InvalidUri(format!("{text}: missing host")))
    }
}

fn validate_data_uri(text: &str, rest: &str) -> Result<()> {
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::InvalidUri(format!("{text}: data URI without ','")))?;

    let mut params = header.split(';');
    let media_type = params.next().unwrap_or_default();
    if !media_type.is_empty() && !media_type.contains('/') {
        return Err(Error::InvalidUri(format!("{text}: bad media type '{media_type}'")));
    }

    if params.any(|p| p == "base64") {
        STANDARD
            .decode(payload)
            .map_err(|e| Error::InvalidUri(format!("data URI payload: {e}")))?;
    }
    Ok(())
}
