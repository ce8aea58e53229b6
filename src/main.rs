use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use yait::{Extra, Library, Licence, ScaffoldError, Style};

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Scaffold new C projects and shell scripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project
    New {
        /// Project name, or "." for the current directory
        name: String,

        /// Licence written to COPYING
        #[arg(short, long, value_enum)]
        licence: Option<Licence>,

        /// Project layout
        #[arg(short, long, value_enum)]
        style: Option<Style>,

        /// Library to add as a git submodule (repeatable)
        #[arg(long = "lib", value_enum)]
        libraries: Vec<Library>,

        /// Helper scripts under tools/ (comma separated)
        #[arg(long, value_enum, value_delimiter = ',')]
        extras: Vec<Extra>,

        /// Generate C++ sources and look for a C++ compiler
        #[arg(long)]
        cpp: bool,

        /// Author name (defaults to config, then git user.name)
        #[arg(short, long)]
        author: Option<String>,

        /// Skip git repository initialization
        #[arg(long)]
        no_git: bool,

        /// Skip .clang-format
        #[arg(long)]
        no_clang_format: bool,

        /// Open the main source file in $EDITOR afterwards
        #[arg(short = 'E', long)]
        editor: bool,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,

        /// Overwrite files in an existing directory
        #[arg(short, long)]
        force: bool,
    },

    /// List available choices
    List {
        #[arg(value_enum)]
        what: commands::list::Listing,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("YAIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::New {
            name,
            licence,
            style,
            libraries,
            extras,
            cpp,
            author,
            no_git,
            no_clang_format,
            editor,
            quiet,
            force,
        } => {
            commands::new::execute(commands::new::NewOptions {
                name,
                licence,
                style,
                libraries,
                extras,
                cpp,
                author,
                no_git,
                no_clang_format,
                editor,
                quiet,
                force,
            })?;
        }
        Commands::List { what } => {
            commands::list::execute(what);
        }
    }

    Ok(())
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {e:#}", "yait".red().bold());
        if let Some(err) = e.downcast_ref::<ScaffoldError>() {
            eprintln!("  failed during {}", err.phase());
        }
        std::process::exit(1);
    }
}
