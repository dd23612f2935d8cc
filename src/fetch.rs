//! Remote asset fetching
//!
//! Builds the URL for a code-point key inside the pinned Twemoji release
//! and performs a single blocking GET. No retries, no redirect-policy
//! override; timeouts are the transport defaults.

use ureq::http::StatusCode;
use ureq::tls::{RootCerts, TlsConfig, TlsProvider};
use ureq::Agent;

use crate::error::{EmojiconError, EmojiconResult};

/// CDN host serving pinned GitHub release contents.
const ASSET_HOST: &str = "https://cdn.jsdelivr.net/gh";

/// Asset collection and pinned release. No negotiation or fallback:
/// bumping the version is a source change.
const ASSET_REPO: &str = "jdecked/twemoji";
const ASSET_VERSION: &str = "15.0.2";

/// Maximum response body size (10 MB). Twemoji SVGs are a few KB; anything
/// near this limit is a misbehaving server.
pub const MAX_ASSET_SIZE: u64 = 10 * 1024 * 1024;

/// Build the asset URL for a code-point key.
pub fn asset_url(key: &str) -> String {
    format!("{ASSET_HOST}/{ASSET_REPO}@{ASSET_VERSION}/assets/svg/{key}.svg")
}

/// Create an HTTP agent configured with native-tls.
///
/// Non-2xx statuses are surfaced as responses rather than transport
/// errors so they can be classified with their status text.
fn agent() -> Agent {
    let tls_config = TlsConfig::builder()
        .provider(TlsProvider::NativeTls)
        .root_certs(RootCerts::PlatformVerifier)
        .build();

    Agent::config_builder()
        .tls_config(tls_config)
        .http_status_as_error(false)
        .build()
        .into()
}

/// Fetch the vector asset for a code-point key, returning the raw body.
///
/// # Errors
///
/// - [`EmojiconError::FetchFailed`] if the transport call itself errors
/// - [`EmojiconError::RemoteNotFound`] on a 404 (no such emoji asset)
/// - [`EmojiconError::RemoteError`] on any other non-success status
/// - [`EmojiconError::ReadFailed`] if the body cannot be fully drained
pub fn fetch_asset(key: &str) -> EmojiconResult<Vec<u8>> {
    let url = asset_url(key);
    log::debug!("fetching {url}");

    let resp = agent()
        .get(&url)
        .header("User-Agent", concat!("emojicon/", env!("CARGO_PKG_VERSION")))
        .call()
        .map_err(|e| EmojiconError::FetchFailed {
            url: url.clone(),
            source: Box::new(e),
        })?;

    let status = resp.status();
    if !status.is_success() {
        let status_text = format!(
            "{} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        );
        return Err(if status == StatusCode::NOT_FOUND {
            EmojiconError::RemoteNotFound {
                url,
                status: status_text,
            }
        } else {
            EmojiconError::RemoteError {
                url,
                status: status_text,
            }
        });
    }

    let bytes = resp
        .into_body()
        .with_config()
        .limit(MAX_ASSET_SIZE)
        .read_to_vec()
        .map_err(|e| EmojiconError::ReadFailed {
            url: url.clone(),
            source: Box::new(e),
        })?;

    log::debug!("fetched {} bytes from {url}", bytes.len());
    Ok(bytes)
}
