//! One-shot WebDriver capture of the page currently open in a browser
//! session. No navigation is performed and nothing is cached; one connect,
//! one read, then the session is closed.

use anyhow::{Context, Result};
use fantoccini::ClientBuilder;
use url::Url;

/// Captures the active page of a WebDriver session: its URL and its
/// rendered HTML source.
pub async fn capture_current_page(webdriver_url: &str) -> Result<(Url, String)> {
    let client = ClientBuilder::native()
        .connect(webdriver_url)
        .await
        .with_context(|| format!("failed to connect to WebDriver at {webdriver_url}"))?;
    ::log::debug!("connected to WebDriver at {}", webdriver_url);

    let url = client
        .current_url()
        .await
        .context("failed to read the current page URL")?;
    let source = client
        .source()
        .await
        .context("failed to read the page source")?;

    if let Err(e) = client.close().await {
        ::log::warn!("failed to close the WebDriver session cleanly: {}", e);
    }

    ::log::info!("captured {} ({} bytes of HTML)", url, source.len());
    Ok((url, source))
}
