//! tabdoc CLI - room-booking report generator

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use tabdoc::{render, JsonFormat, RenderOptions, Report};

/// Environment variable naming the default output directory.
const OUTPUT_DIR_ENV: &str = "TABDOC_OUTPUT_DIR";

#[derive(Parser)]
#[command(name = "tabdoc")]
#[command(version)]
#[command(about = "Generate the room-booking DOCX reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one report, or all reports when none is named
    #[command(alias = "gen")]
    Generate {
        /// Report to generate
        #[arg(value_enum, value_name = "REPORT")]
        report: Option<ReportName>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", env = OUTPUT_DIR_ENV, default_value = ".")]
        output: PathBuf,

        /// Author written to the document properties
        #[arg(long)]
        author: Option<String>,
    },

    /// Print a preview of a report to stdout
    Preview {
        /// Report to preview
        #[arg(value_enum, value_name = "REPORT")]
        report: ReportName,

        /// Preview format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: PreviewFormat,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// List available reports
    List,

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ReportName {
    /// Project summary (compact tables)
    Summary,
    /// Database configuration (verbose tables)
    Database,
}

impl From<ReportName> for Report {
    fn from(name: ReportName) -> Self {
        match name {
            ReportName::Summary => Report::ProjectSummary,
            ReportName::Database => Report::DatabaseConfig,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PreviewFormat {
    /// Markdown
    Markdown,
    /// Plain text
    Text,
    /// JSON document model
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Generate {
            report,
            output,
            author,
        }) => cmd_generate(report, &output, author.as_deref()),
        Some(Commands::Preview {
            report,
            format,
            compact,
        }) => cmd_preview(report, format, compact),
        Some(Commands::List) => {
            cmd_list();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_generate(None, &default_output_dir(), None),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Output directory for a bare `tabdoc` run, resolved like `generate -o`.
fn default_output_dir() -> PathBuf {
    output_dir_or_default(std::env::var_os(OUTPUT_DIR_ENV))
}

// clap ignores an empty env value, so this does too
fn output_dir_or_default(value: Option<OsString>) -> PathBuf {
    value
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn cmd_generate(
    report: Option<ReportName>,
    output_dir: &Path,
    author: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let reports: Vec<Report> = match report {
        Some(name) => vec![name.into()],
        None => Report::all().collect(),
    };

    fs::create_dir_all(output_dir)?;

    let pb = ProgressBar::new(reports.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    let mut written = Vec::with_capacity(reports.len());
    for report in reports {
        pb.set_message(format!("Building {}...", report));
        let mut doc = report.build()?;
        doc.metadata.created = Some(Utc::now());
        if let Some(author) = author {
            doc.metadata.author = Some(author.to_string());
        }

        let path = output_dir.join(report.file_name());
        doc.save(&path)?;
        log::info!("Wrote {} ({} blocks)", path.display(), doc.block_count());
        written.push(path);
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    let last = written.len().saturating_sub(1);
    for (i, path) in written.iter().enumerate() {
        let branch = if i == last { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), path.display());
    }

    Ok(())
}

fn cmd_preview(
    report: ReportName,
    format: PreviewFormat,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = Report::from(report).build()?;

    let output = match format {
        PreviewFormat::Markdown => {
            render::to_markdown(&doc, &RenderOptions::new().with_frontmatter(true))?
        }
        PreviewFormat::Text => render::to_text(&doc, &RenderOptions::new())?,
        PreviewFormat::Json => {
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            render::to_json(&doc, format)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn cmd_list() {
    println!("{}", "Available reports".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for report in Report::all() {
        println!(
            "{:<10} {} {}",
            report.name().bold(),
            report.file_name(),
            format!("({})", report.title()).dimmed()
        );
    }
}

fn cmd_version() {
    println!("{} {}", "tabdoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_dir_or_default() {
        assert_eq!(output_dir_or_default(None), PathBuf::from("."));
        assert_eq!(output_dir_or_default(Some(OsString::new())), PathBuf::from("."));
        assert_eq!(
            output_dir_or_default(Some(OsString::from("reports"))),
            PathBuf::from("reports")
        );
    }

    #[test]
    fn test_generate_output_flag() {
        let cli = Cli::try_parse_from(["tabdoc", "generate", "database", "-o", "out"]).unwrap();
        match cli.command {
            Some(Commands::Generate { report, output, .. }) => {
                assert!(report == Some(ReportName::Database));
                assert_eq!(output, PathBuf::from("out"));
            }
            _ => panic!("expected generate"),
        }
    }
}
