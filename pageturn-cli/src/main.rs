//! Pageturn CLI - Command-line reading surface for a bundled EPUB book

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pageturn_core::{DEFAULT_ENTRY_PREFIX, DEFAULT_ENTRY_SUFFIX, DEFAULT_PAGE_BUDGET};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Archive layout options shared by every command that extracts chapters
#[derive(Args)]
struct LayoutArgs {
    /// Entry path prefix chapter documents live under
    #[arg(long, default_value = DEFAULT_ENTRY_PREFIX)]
    prefix: String,

    /// Entry path suffix chapter documents carry
    #[arg(long, default_value = DEFAULT_ENTRY_SUFFIX)]
    suffix: String,
}

#[derive(Parser)]
#[command(name = "pageturn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about the book
    Info {
        /// Input EPUB path
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Dump the paginated pages
    Pages {
        /// Input EPUB path
        input: String,

        /// Page character budget
        #[arg(short, long, default_value_t = DEFAULT_PAGE_BUDGET)]
        budget: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Print one page with its chapter title and progress label
    Read {
        /// Input EPUB path
        input: String,

        /// Zero-based page to open
        #[arg(short, long, default_value_t = 0)]
        page: usize,

        /// Text scale preference (clamped to the supported range)
        #[arg(long, default_value_t = 1.0)]
        scale: f64,

        /// Page character budget
        #[arg(short, long, default_value_t = DEFAULT_PAGE_BUDGET)]
        budget: usize,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Validate that the book extracts cleanly
    Validate {
        /// Input EPUB path
        input: String,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "pageturn_cli=debug,pageturn_core=debug"
    } else {
        "pageturn_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Info {
            input,
            json,
            layout,
        } => commands::info(&input, json, &layout.prefix, &layout.suffix),

        Commands::Pages {
            input,
            budget,
            json,
            layout,
        } => commands::pages(&input, budget, json, &layout.prefix, &layout.suffix),

        Commands::Read {
            input,
            page,
            scale,
            budget,
            layout,
        } => commands::read(&input, page, scale, budget, &layout.prefix, &layout.suffix),

        Commands::Validate { input, layout } => {
            commands::validate(&input, &layout.prefix, &layout.suffix)
        }
    }
}
