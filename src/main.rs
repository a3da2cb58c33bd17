//! Command-line driver for samlookup.
//!
//! Submits one search, presses "show more" as many times as asked, and writes
//! the rendered view to stdout or a file. Search failures end up in the
//! rendered error slot; only setup failures exit non-zero.

use clap::Parser;
use samlookup::observability::init_tracing;
use samlookup::{initialize, render, Config, HttpBackend, OutputFormat, PageLimit, Runtime};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "samlookup",
    version,
    about = "Look up registered entities and their 889 compliance status"
)]
struct Cli {
    #[arg(
        value_name = "QUERY",
        required = true,
        num_args = 1..,
        help = "Search text; multiple words are joined with spaces"
    )]
    query: Vec<String>,

    #[arg(
        long = "base-url",
        value_name = "URL",
        help = "Origin of the search service (default: http://localhost:5000)"
    )]
    base_url: Option<String>,

    #[arg(
        long,
        value_name = "N",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..),
        conflicts_with = "all",
        help = "Number of pages to load"
    )]
    pages: u32,

    #[arg(long, help = "Keep loading pages until every result is shown")]
    all: bool,

    #[arg(
        long,
        value_name = "FORMAT",
        help = "Output format: html or text (default: html)"
    )]
    format: Option<OutputFormat>,

    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Write output to FILE instead of stdout"
    )]
    output: Option<PathBuf>,

    #[arg(
        long,
        value_name = "FILE",
        help = "Config file (default: ~/.config/samlookup/config.toml if present)"
    )]
    config: Option<PathBuf>,

    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Log filter used when RUST_LOG is unset (default: info)"
    )]
    log_level: Option<String>,

    #[arg(long = "log-file", value_name = "FILE", help = "Also log to a rotating file")]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Flags take precedence over the config file.
    fn apply_to(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(level) = &self.log_level {
            config.log_level.clone_from(level);
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
    }

    const fn page_limit(&self) -> PageLimit {
        if self.all {
            PageLimit::All
        } else {
            PageLimit::Pages(self.pages)
        }
    }
}

async fn run(cli: Cli) -> samlookup::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);
    init_tracing(&config)?;

    tracing::debug!(config = ?config, "configuration loaded");

    let backend = HttpBackend::new(&config.base_url, config.request_timeout())?;
    tracing::info!(base_url = %backend.base_url(), "search service");
    let mut runtime = Runtime::new(backend, initialize(&config));

    let query = cli.query.join(" ");
    runtime.load(&query, cli.page_limit()).await?;

    let rendered = render(runtime.state(), config.format)?;
    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::info!(path = %path.display(), "output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("samlookup: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "samlookup failed");
            eprintln!("samlookup: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn joins_query_words_and_overrides_config() {
        let cli = Cli::parse_from([
            "samlookup",
            "--base-url",
            "http://sam.test",
            "--format",
            "text",
            "acme",
            "corp",
        ]);
        let mut config = Config::default();
        cli.apply_to(&mut config);

        assert_eq!(cli.query.join(" "), "acme corp");
        assert_eq!(config.base_url, "http://sam.test");
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(cli.page_limit(), PageLimit::Pages(1));
    }

    #[test]
    fn all_conflicts_with_pages() {
        assert!(Cli::try_parse_from(["samlookup", "--all", "--pages", "3", "acme"]).is_err());
        let cli = Cli::try_parse_from(["samlookup", "--all", "acme"]).unwrap();
        assert_eq!(cli.page_limit(), PageLimit::All);
    }

    #[test]
    fn zero_pages_is_rejected() {
        assert!(Cli::try_parse_from(["samlookup", "--pages", "0", "acme"]).is_err());
    }
}
