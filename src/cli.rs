use clap::Parser;
use std::path::PathBuf;

use dep_report::application::dto::OutputFormat;
use dep_report::dependency_report::services::ExcludeMode;

/// Generate a license and usage report for the dependencies of a project group
///
/// Every value except --config, --strict-licenses and --verbose can also be set
/// in a `dep-report.config.yml` file. Command-line values win.
#[derive(Parser, Debug, Default)]
#[command(name = "dep-report")]
#[command(version)]
#[command(
    about = "Generate a dependency license report from usage records",
    long_about = None
)]
pub struct Args {
    /// CSV file of usage records: project,ecosystem,name,version
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Project group name used in the report title
    #[arg(short, long)]
    pub group: Option<String>,

    /// Output file path, or '-' for stdout (defaults to dependency_report.<ext>)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Exclude dependencies whose name matches this pattern
    #[arg(short = 'x', long = "exclude", value_name = "PATTERN")]
    pub exclude: Option<String>,

    /// How --exclude is matched: regex or substring
    #[arg(long, value_name = "MODE")]
    pub exclude_mode: Option<ExcludeMode>,

    /// Output format: html, markdown or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to a config file (defaults to ./dep-report.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Per-lookup timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Base URL of a NuGet v3 flat container feed
    #[arg(long, value_name = "URL")]
    pub registry_url: Option<String>,

    /// Fail when a declared SPDX license expression cannot be resolved
    #[arg(long)]
    pub strict_licenses: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
