//! landkit CLI
//!
//! Renders marketing pages from a declarative content schema.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use landkit::cmd::providers::GridQuery;
use landkit_generator::SortMode;

/// Command-line interface for landkit.
#[derive(Parser)]
#[command(
    name = "landkit",
    version,
    about = "Render landing pages from a content schema"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "landkit.toml", global = true)]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Render every routed page into the output directory
    Build {
        /// Output directory (defaults to build.output_dir)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
        /// Enable render diagnostics
        #[arg(long)]
        dev: bool,
    },
    /// Render one page to stdout
    Render {
        /// Page key (defaults to site.default_page)
        #[arg(short, long)]
        page: Option<String>,
        /// Enable render diagnostics
        #[arg(long)]
        dev: bool,
    },
    /// Validate configuration and content schema
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Drive a providers grid and print the visible tiles
    Providers {
        /// Page key (defaults to site.default_page)
        #[arg(short, long)]
        page: Option<String>,
        /// Id of the providers section (defaults to the first grid)
        #[arg(long)]
        section: Option<String>,
        /// Search text
        #[arg(long)]
        search: Option<String>,
        /// Category filter
        #[arg(long)]
        category: Option<String>,
        /// Sort mode (popular, az, za)
        #[arg(long)]
        sort: Option<SortMode>,
        /// Number of "Show more" clicks
        #[arg(long, default_value_t = 0)]
        more: usize,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    landkit::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build { output, dev } => {
            landkit::cmd::build::run(&cli.config, output.as_deref(), dev)?;
        }
        Commands::Render { page, dev } => {
            landkit::cmd::render::run(&cli.config, page.as_deref(), dev)?;
        }
        Commands::Check { strict } => {
            landkit::cmd::check::run(&cli.config, strict)?;
        }
        Commands::Providers {
            page,
            section,
            search,
            category,
            sort,
            more,
        } => {
            let query = GridQuery {
                category,
                search,
                sort,
                more,
            };
            landkit::cmd::providers::run(
                &cli.config,
                page.as_deref(),
                section.as_deref(),
                &query,
            )?;
        }
    }

    Ok(())
}
