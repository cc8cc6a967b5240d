use anyhow::{Context, Result};
use clap::Parser;
use url::Url;

use product_peek::config::CaptureConfig;
use product_peek::display::{self, DisplayValue};
use product_peek::page::PageSnapshot;
use product_peek::relay::{self, ScrapeRequest, ScrapeResponse};

mod args;
use args::{Args, OutputFormat};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let format = args.format;

    // Capture failures surface through the same response shape as a guard
    // rejection; extraction itself cannot fail
    let response = match scrape(args).await {
        Ok(response) => response,
        Err(e) => {
            ::log::error!("capture failed: {e:#}");
            ScrapeResponse::failure(format!("{e:#}"))
        }
    };

    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&response) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to serialize response: {e}");
                std::process::exit(1);
            }
        },
        OutputFormat::Text => print_response(&response),
    }

    if !response.ok {
        std::process::exit(1);
    }
}

/// Captures the page and serves one scrape request against it.
async fn scrape(args: Args) -> Result<ScrapeResponse> {
    let (url, html) = match (&args.html, &args.url) {
        (Some(path), Some(page_url)) => {
            ::log::info!("Reading saved page from {}", path.display());
            let html = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let url = Url::parse(page_url)
                .with_context(|| format!("invalid page URL: {page_url}"))?;
            (url, html)
        }
        _ => {
            let config = load_config(&args)?;
            ::log::info!("Capturing current page from WebDriver at {}", config.webdriver_url);
            product_peek::browser::capture_current_page(&config.webdriver_url).await?
        }
    };

    let snapshot = PageSnapshot::parse(&html, url);
    Ok(relay::handle_request(&ScrapeRequest::ScrapeProduct, &snapshot))
}

/// Resolves the capture configuration: file, then environment, then flags.
fn load_config(args: &Args) -> Result<CaptureConfig> {
    let mut config = match &args.config {
        Some(path) => CaptureConfig::from_file(path)
            .map_err(|e| anyhow::anyhow!("failed to load config {}: {e}", path.display()))?,
        None => CaptureConfig::default(),
    };

    config = config.with_env_overrides();

    if let Some(webdriver_url) = &args.webdriver_url {
        config.webdriver_url = webdriver_url.clone();
    }

    Ok(config)
}

/// Prints the response as labeled entries, one per field, with `-` standing
/// in for empty values.
fn print_response(response: &ScrapeResponse) {
    let Some(record) = &response.data else {
        let message = response
            .error
            .as_deref()
            .unwrap_or("Unexpected scraping error.");
        eprintln!("Scrape failed: {message}");
        return;
    };

    for entry in display::entries(record) {
        match &entry.value {
            DisplayValue::Text(value) => {
                let shown = if value.is_empty() { "-" } else { value };
                println!("{}: {}", entry.label, shown);
            }
            DisplayValue::Items(items) => {
                println!("{}:", entry.label);
                if items.is_empty() {
                    println!("  -");
                }
                for item in items {
                    println!("  {item}");
                }
            }
        }
    }
}
