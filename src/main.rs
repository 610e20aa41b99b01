mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::Config;
use gceref::{group_by_scope, parse_resource_url, ResourceId, Version};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Parse and format Compute Engine resource URLs
#[derive(Parser, Debug)]
#[command(name = "gceref", version, about, long_about = None)]
struct Args {
    /// Root of the Compute API used for self links
    #[arg(long)]
    api_domain: Option<String>,

    /// API version for self links (ga, alpha, beta)
    #[arg(long = "api-version")]
    api_version: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the fields of a resource URL
    Parse { url: String },
    /// Print the path starting from the location
    Path { url: String },
    /// Print the path starting from the project
    Name { url: String },
    /// Print the full self link
    SelfLink { url: String },
    /// Group resource URLs by aggregated list key
    Aggregate {
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(
    level: LogLevel,
    log_file: Option<&PathBuf>,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let builder = tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let Some(log_path) = log_file else {
        builder.with_writer(std::io::stderr).init();
        return Ok(None);
    };

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    builder
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .init();

    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

/// Flat view of a parsed identifier for display
#[derive(Debug, Serialize)]
struct ParsedView {
    project: String,
    resource: String,
    scope: Option<String>,
    name: Option<String>,
    zone: Option<String>,
    region: Option<String>,
}

impl From<&ResourceId> for ParsedView {
    fn from(id: &ResourceId) -> Self {
        let key = id.key.as_ref();
        Self {
            project: id.project_id.clone(),
            resource: id.resource.clone(),
            scope: key.map(|k| k.key_type().to_string()),
            name: key.map(|k| k.name().to_string()),
            zone: key.and_then(|k| k.zone()).map(str::to_string),
            region: key.and_then(|k| k.region()).map(str::to_string),
        }
    }
}

fn parse(url: &str) -> Result<ResourceId> {
    parse_resource_url(url).context("Failed to parse resource URL")
}

fn print_value<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
    }
    Ok(())
}

fn run(args: &Args, version: &Version) -> Result<()> {
    match &args.command {
        Command::Parse { url } => {
            let id = parse(url)?;
            let view = ParsedView::from(&id);
            print_value(args.output, &view, || {
                let mut lines = vec![
                    format!("project:  {}", view.project),
                    format!("resource: {}", view.resource),
                ];
                let optional = [
                    ("scope", &view.scope),
                    ("name", &view.name),
                    ("zone", &view.zone),
                    ("region", &view.region),
                ];
                for (label, value) in optional {
                    if let Some(value) = value {
                        lines.push(format!("{:<9} {}", format!("{}:", label), value));
                    }
                }
                lines.join("\n")
            })
        }
        Command::Path { url } => {
            let path = parse(url)?.resource_path();
            print_value(args.output, &path, || path.clone())
        }
        Command::Name { url } => {
            let name = parse(url)?.relative_resource_name();
            print_value(args.output, &name, || name.clone())
        }
        Command::SelfLink { url } => {
            let link = parse(url)?.self_link(version);
            print_value(args.output, &link, || link.clone())
        }
        Command::Aggregate { urls } => {
            let ids = urls
                .iter()
                .map(|u| parse(u))
                .collect::<Result<Vec<_>>>()?;
            tracing::debug!("Aggregating {} identifiers", ids.len());
            let buckets: BTreeMap<String, Vec<String>> = group_by_scope(ids)
                .into_iter()
                .map(|(scope, ids)| {
                    (scope, ids.iter().map(ResourceId::relative_resource_name).collect())
                })
                .collect();
            print_value(args.output, &buckets, || {
                buckets
                    .iter()
                    .map(|(scope, names)| format!("{}\n  {}", scope, names.join("\n  ")))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = setup_logging(args.log_level, args.log_file.as_ref())?;

    let config = Config::load();
    let domain = config.effective_api_domain(args.api_domain.as_deref())?;
    let version = config.effective_version(args.api_version.as_deref());
    tracing::debug!("Using API domain {} and version {}", domain, version);

    gceref::set_api_domain(&domain);

    run(&args, &version)
}
