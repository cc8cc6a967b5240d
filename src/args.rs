use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "product-peek")]
#[command(about = "Extracts a structured product record from the product page open in a browser")]
#[command(version)]
pub struct Args {
    /// URL of the WebDriver instance to capture the page from
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Read the page from a saved HTML file instead of a live browser
    #[arg(long, value_name = "FILE", requires = "url")]
    pub html: Option<PathBuf>,

    /// Page URL the saved HTML file was captured from
    #[arg(long, requires = "html")]
    pub url: Option<String>,

    /// Path to a JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for the scrape result
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labeled copyable entries
    Text,
    /// Relay response JSON
    Json,
}
