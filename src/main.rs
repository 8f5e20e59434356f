mod cli;
mod config;

use cli::Args;
use config::Settings;
use dep_report::adapters::outbound::console::StderrProgressReporter;
use dep_report::adapters::outbound::filesystem::CsvUsageReader;
use dep_report::adapters::outbound::network::NuGetRepository;
use dep_report::application::dto::ReportRequest;
use dep_report::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use dep_report::application::read_models::ReportReadModelBuilder;
use dep_report::application::use_cases::GenerateReportUseCase;
use dep_report::application::RegistryCatalog;
use dep_report::shared::error::{ExitCode, ReportError};
use dep_report::shared::Result;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Class printed for failures that carry no [`ReportError`]
const GENERIC_ERROR_CLASS: &str = "Error";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprint!("{}", render_diagnostic(&e));
        process::exit(exit_code(&e).as_i32());
    }
}

fn report_error(e: &anyhow::Error) -> Option<&ReportError> {
    e.chain().find_map(|c| c.downcast_ref::<ReportError>())
}

fn exit_code(e: &anyhow::Error) -> ExitCode {
    report_error(e).map_or(ExitCode::ApplicationError, ReportError::exit_code)
}

/// `error[<Class>]: <first line>`, then the remaining message lines and the
/// cause chain below it.
fn render_diagnostic(e: &anyhow::Error) -> String {
    let class = report_error(e).map_or(GENERIC_ERROR_CLASS, ReportError::class);
    let message = e.to_string();
    let mut lines = message.lines();

    let mut output = format!("error[{}]: {}\n", class, lines.next().unwrap_or_default());
    for line in lines {
        output.push_str(line);
        output.push('\n');
    }

    // Display error chain
    for cause in e.chain().skip(1) {
        output.push_str(&format!("Caused by: {}\n", cause));
    }
    output
}

async fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with status 2 on its own errors)
    let args = Args::parse_args();
    init_logging(args.verbose);

    // Load the config file, explicit path first, then auto-discovery
    let config_file = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&std::env::current_dir()?)?,
    };
    let settings = config::merge_settings(args, config_file)?;
    tracing::debug!(?settings, "resolved settings");

    // Create adapters (Dependency Injection)
    let record_reader = CsvUsageReader::new();
    let registries = RegistryCatalog::new().register(Box::new(NuGetRepository::with_base_url(
        settings.timeout,
        &settings.registry_url,
    )?));
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = GenerateReportUseCase::new(record_reader, registries, progress_reporter);

    // Execute use case
    let response = use_case.execute(build_request(&settings)).await?;

    // Build the read model and render it
    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let read_model =
        ReportReadModelBuilder::build(&response.usage, &response.dependencies, &response.metadata);
    let formatted_output = FormatterFactory::create(settings.format).format(&read_model)?;

    // Present output only after every step succeeded
    let presenter = PresenterFactory::create(PresenterType::from_destination(&settings.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

fn build_request(settings: &Settings) -> ReportRequest {
    let mut request = ReportRequest::new(settings.input.clone(), settings.group.as_str())
        .with_license_policy(settings.license_policy);
    if let Some(pattern) = settings.exclude.as_deref() {
        request = request.with_exclude(pattern, settings.exclude_mode);
    }
    request
}

/// Diagnostics go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
