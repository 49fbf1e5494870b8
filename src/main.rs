mod cli;

use cli::Args;
use digikey_bom_report::adapters::outbound::console::StderrProgressReporter;
use digikey_bom_report::adapters::outbound::filesystem::{CsvBomReader, FileSystemWriter};
use digikey_bom_report::adapters::outbound::network::{
    DigiKeyApiSettings, DigiKeyAuthenticator, DigiKeyClient, DigiKeyLocale,
};
use digikey_bom_report::application::dto::{OutputFormat, ReportRequest};
use digikey_bom_report::application::factories::FormatterFactory;
use digikey_bom_report::application::read_models::ReportReadModelBuilder;
use digikey_bom_report::application::use_cases::GenerateReportUseCase;
use digikey_bom_report::bom_reporting::domain::ColumnSchema;
use digikey_bom_report::bom_reporting::policies::{MatchPolicy, RetryPolicy, DEFAULT_CONFIDENCE_THRESHOLD};
use digikey_bom_report::config::{self, ConfigFile, MAX_SEARCH_LIMIT};
use digikey_bom_report::ports::outbound::{Credentials, OutputPresenter};
use digikey_bom_report::shared::error::{ExitCode, ReportError};
use digikey_bom_report::shared::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        let exit_code = ExitCode::for_error(&e);

        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\n{} {}", "Caused by:".yellow(), cause);
        }

        eprintln!();
        tracing::debug!(%exit_code, "exiting");
        process::exit(exit_code.as_i32());
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: Args) -> Result<()> {
    // Load config: explicit path, or auto-discovered in the working directory
    let config_file = match args.config.as_deref() {
        Some(path) => {
            let config_file = config::load_config_from_path(path)?;
            eprintln!("📋 Loaded config from: {}", path.display());
            config_file
        }
        None => match config::discover_config(Path::new("."))? {
            Some(config_file) => {
                eprintln!("📋 Loaded config from: {}", config::CONFIG_FILENAME);
                config_file
            }
            None => ConfigFile::default(),
        },
    };

    let settings = Settings::resolve(&args, config_file)?;
    let credentials = read_credentials(&args)?;

    // Build the formatter up front so a broken template fails before any API call
    let formatter = FormatterFactory::create(settings.format, settings.template_path.as_deref())?;

    // Create adapters (Dependency Injection)
    let bom_reader = CsvBomReader::new();
    let authenticator = DigiKeyAuthenticator::new(&settings.api)?;
    let part_search = DigiKeyClient::new(&settings.api)?;
    let progress_reporter = StderrProgressReporter::new();

    let use_case = GenerateReportUseCase::new(
        bom_reader,
        authenticator,
        part_search,
        progress_reporter,
        settings.match_policy,
        settings.retry_policy,
    );

    let request = ReportRequest::new(args.bom_file.clone(), credentials)
        .with_column_schema(settings.column_schema.clone())
        .with_currency(settings.api.locale.currency.clone());

    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let read_model = ReportReadModelBuilder::build(&response.context);
    let content = formatter.format(&read_model)?;

    let presenter = FileSystemWriter::new(settings.output_path.clone());
    presenter.present(&content)?;
    eprintln!("📄 Report written to {}", settings.output_path.display());

    Ok(())
}

/// Reads the API credentials, which clap has already taken from the flags
/// or the environment.
fn read_credentials(args: &Args) -> Result<Credentials> {
    let non_empty = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    match (non_empty(&args.client_id), non_empty(&args.client_secret)) {
        (Some(id), Some(secret)) => Ok(Credentials::new(id, secret)),
        _ => Err(ReportError::Validation {
            message: "DigiKey API credentials are missing.\n\n💡 Hint: Set DIGIKEY_CLIENT_ID and \
                      DIGIKEY_CLIENT_SECRET (or pass --client-id / --client-secret)"
                .to_string(),
        }
        .into()),
    }
}

/// Effective settings after merging CLI flags over the config file over
/// built-in defaults.
#[derive(Debug)]
struct Settings {
    format: OutputFormat,
    output_path: PathBuf,
    template_path: Option<PathBuf>,
    column_schema: ColumnSchema,
    match_policy: MatchPolicy,
    retry_policy: RetryPolicy,
    api: DigiKeyApiSettings,
}

impl Settings {
    fn resolve(args: &Args, config: ConfigFile) -> Result<Self> {
        let format = match args.output_format {
            Some(format) => format,
            None => match config.output_format.as_deref() {
                Some(value) => value
                    .parse()
                    .map_err(|message: String| ReportError::Validation { message })?,
                None => OutputFormat::default(),
            },
        };

        let output_path = args
            .output_path
            .clone()
            .or_else(|| config.output_path.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(format.default_file_name()));

        let template_path = args
            .template
            .clone()
            .or_else(|| config.template_path.map(PathBuf::from));

        let columns = config.columns.unwrap_or_default();
        let mut column_schema = ColumnSchema::default();
        if let Some(name) = args.part_number_column.clone().or(columns.part_number) {
            column_schema = column_schema.with_part_number_column(name);
        }
        if let Some(name) = args.quantity_column.clone().or(columns.quantity) {
            column_schema = column_schema.with_quantity_column(name);
        }
        if let Some(name) = args.designator_column.clone().or(columns.designators) {
            column_schema = column_schema.with_designator_column(name);
        }
        if let Some(name) = args.manufacturer_column.clone().or(columns.manufacturer) {
            column_schema = column_schema.with_manufacturer_column(name);
        }
        column_schema.validate()?;

        let threshold = args
            .confidence_threshold
            .or(config.match_confidence_threshold)
            .unwrap_or(DEFAULT_CONFIDENCE_THRESHOLD);
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ReportError::Validation {
                message: format!(
                    "--confidence-threshold must be between 0.0 and 1.0 (got {})",
                    threshold
                ),
            }
            .into());
        }

        let retry = config.retry.unwrap_or_default();
        let max_retries = args
            .max_retries
            .or(retry.max_retries)
            .unwrap_or(RetryPolicy::DEFAULT_MAX_RETRIES);
        if max_retries > RetryPolicy::MAX_RETRIES {
            return Err(ReportError::Validation {
                message: format!(
                    "--max-retries must be between 0 and {} (got {})",
                    RetryPolicy::MAX_RETRIES,
                    max_retries
                ),
            }
            .into());
        }
        let retry_policy = RetryPolicy::new(
            max_retries,
            Duration::from_millis(
                args.retry_delay_ms
                    .or(retry.delay_ms)
                    .unwrap_or(RetryPolicy::DEFAULT_DELAY_MS),
            ),
        );

        let defaults = DigiKeyApiSettings::default();
        let base_url = args
            .api_base_url
            .clone()
            .or(config.api_base_url)
            .unwrap_or(defaults.base_url);
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ReportError::Validation {
                message: format!("--api-base-url must be an http(s) URL (got '{}')", base_url),
            }
            .into());
        }

        let locale = config.locale.unwrap_or_default();
        let default_locale = DigiKeyLocale::default();
        let api = DigiKeyApiSettings {
            base_url,
            locale: DigiKeyLocale {
                site: locale.site.unwrap_or(default_locale.site),
                language: locale.language.unwrap_or(default_locale.language),
                currency: locale.currency.unwrap_or(default_locale.currency),
                customer_id: locale.customer_id.unwrap_or(default_locale.customer_id),
            },
            search_limit: config
                .search_limit
                .unwrap_or(defaults.search_limit)
                .clamp(1, MAX_SEARCH_LIMIT),
            timeout: defaults.timeout,
        };

        Ok(Self {
            format,
            output_path,
            template_path,
            column_schema,
            match_policy: MatchPolicy::new(threshold),
            retry_policy,
            api,
        })
    }
}
