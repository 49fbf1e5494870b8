use clap::Parser;
use digikey_bom_report::application::dto::OutputFormat;
use std::path::PathBuf;

/// Resolve a BOM against the DigiKey API and render a component report
#[derive(Parser, Debug)]
#[command(name = "digikey-bom-report")]
#[command(version)]
#[command(
    about = "Resolve a BOM against the DigiKey API and render a CSV or HTML component report",
    long_about = None
)]
pub struct Args {
    /// Path to the BOM file (CSV with a header row)
    pub bom_file: PathBuf,

    /// Output format: csv or html [default: html]
    #[arg(short = 'f', long)]
    pub output_format: Option<OutputFormat>,

    /// Report destination [default: component_report.<format>]
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// DigiKey API client id
    #[arg(long, env = "DIGIKEY_CLIENT_ID", hide_env_values = true)]
    pub client_id: Option<String>,

    /// DigiKey API client secret
    #[arg(long, env = "DIGIKEY_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Name of the BOM column holding manufacturer part numbers
    #[arg(long, value_name = "NAME")]
    pub part_number_column: Option<String>,

    /// Name of the BOM column holding quantities
    #[arg(long, value_name = "NAME")]
    pub quantity_column: Option<String>,

    /// Name of the BOM column holding reference designators
    #[arg(long, value_name = "NAME")]
    pub designator_column: Option<String>,

    /// Name of the BOM column holding manufacturer names
    #[arg(long, value_name = "NAME")]
    pub manufacturer_column: Option<String>,

    /// Handlebars template replacing the built-in HTML template
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Minimum similarity (0.0-1.0) for accepting a non-exact match
    #[arg(long, value_name = "SCORE")]
    pub confidence_threshold: Option<f64>,

    /// Retries per part after a transient API failure
    #[arg(long, value_name = "N")]
    pub max_retries: Option<u32>,

    /// Fixed delay between retries, in milliseconds
    #[arg(long, value_name = "MS")]
    pub retry_delay_ms: Option<u64>,

    /// DigiKey API base URL (e.g. https://sandbox-api.digikey.com)
    #[arg(long, value_name = "URL")]
    pub api_base_url: Option<String>,

    /// Path to a config file (default: ./bom-report.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
