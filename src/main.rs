//! sitemark CLI - Markdown to HTML for static sites
//!
//! Provides commands for:
//! - `render`: Convert one Markdown file (or stdin) to HTML on stdout
//! - `title`: Print the title of one Markdown file (or stdin)
//! - `build`: Generate a whole site from a content directory

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sitemark::site::{self, SiteConfig, SiteError};

const DEFAULT_LOG_LEVEL: &str = "warn";

/// sitemark - Markdown to HTML for static sites.
#[derive(Parser)]
#[command(name = "sitemark", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a Markdown document to HTML.
    Render(InputArgs),
    /// Print the first level-1 heading of a Markdown document.
    Title(InputArgs),
    /// Build the site.
    Build(BuildArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Input Markdown file (reads stdin when omitted or `-`)
    input: Option<PathBuf>,
}

#[derive(Args)]
struct BuildArgs {
    /// Site config file
    #[arg(long, default_value = "site.toml")]
    config: PathBuf,

    /// Content directory (overrides config)
    #[arg(long)]
    content: Option<PathBuf>,

    /// Page template (overrides config)
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Static asset directory (overrides config)
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Log each generated page
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Render(#[from] sitemark::Error),
    #[error(transparent)]
    Site(#[from] SiteError),
}

fn main() {
    let cli = Cli::parse();

    let verbose = matches!(&cli.command, Commands::Build(args) if args.verbose);
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => render(args.input.as_deref()),
        Commands::Title(args) => title(args.input.as_deref()),
        Commands::Build(args) => build(args),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// `--verbose` enables INFO level, otherwise use RUST_LOG or default to WARN.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    }
}

fn render(input: Option<&Path>) -> Result<(), CliError> {
    let markdown = read_input(input)?;
    let html = sitemark::to_html(&markdown)?;
    io::stdout().write_all(html.as_bytes())?;
    Ok(())
}

fn title(input: Option<&Path>) -> Result<(), CliError> {
    let markdown = read_input(input)?;
    let title = sitemark::extract_title(&markdown)?;
    writeln!(io::stdout(), "{title}")?;
    Ok(())
}

fn build(args: BuildArgs) -> Result<(), CliError> {
    let mut config = SiteConfig::load(&args.config)?;
    if let Some(content) = args.content {
        config.content_dir = content;
    }
    if let Some(template) = args.template {
        config.template = template;
    }
    if let Some(output) = args.output {
        config.output_dir = output;
    }
    if let Some(static_dir) = args.static_dir {
        config.static_dir = static_dir;
    }

    let report = site::build_site(&config)?;
    println!(
        "Built {} pages and copied {} assets into {}",
        report.pages,
        report.assets,
        config.output_dir.display()
    );
    Ok(())
}

fn read_input(input: Option<&Path>) -> io::Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_forces_info() {
        assert_eq!(log_filter(true).to_string(), "info");
    }

    #[test]
    fn test_default_filter_shows_warnings() {
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(log_filter(false).to_string(), DEFAULT_LOG_LEVEL);
        }
    }
}
