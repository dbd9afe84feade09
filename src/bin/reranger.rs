//! Reranger CLI tool
//!
//! A command-line tool for renumbering page references in book indexes.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use glob::glob;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

use reranger::config::{DEFAULT_ENTRY_DELIMITER, DEFAULT_RANGE_DELIMITER, DEFAULT_SERIES_DELIMITER};
use reranger::{renumber_file, Error, ErrorPolicy, IndexOptions, Renumberer, RerangeConfig};

/// Reranger - Renumber book index page references
#[derive(Parser)]
#[command(name = "reranger")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Six pages were added after page 68
    reranger series --increment 6 --min-page 68 \"52, 60, 91--8, 472--85\"

    # Two pages were removed; note pages are marked with (r)
    reranger series --increment=-2 --min-page 1 --reference-suffix \"(r)\" \"532(r), 544--6(r)\"

    # Renumber index files into another directory
    reranger index --increment 4 --min-page 120 -d renumbered \"chapters/*.idx\"")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Renumbering settings shared by all commands
#[derive(Args, Debug)]
struct RenumberArgs {
    /// Pages to add; negative to remove (eg. --increment=-2)
    #[arg(short, long, allow_hyphen_values = true)]
    increment: i64,

    /// Pages at or below this one are never shifted
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    min_page: i64,

    /// Separator between members of a series
    #[arg(long, default_value = DEFAULT_SERIES_DELIMITER)]
    series_delimiter: String,

    /// Separator between the two ends of a range
    #[arg(long, default_value = DEFAULT_RANGE_DELIMITER)]
    range_delimiter: String,

    /// Marker after note/reference pages, eg. "(r)"
    #[arg(short, long, default_value = "")]
    reference_suffix: String,

    /// Reject tokens that are neither numbers nor roman prelims
    #[arg(long)]
    strict: bool,
}

impl RenumberArgs {
    fn renumberer(&self) -> reranger::Result<Renumberer> {
        let config = RerangeConfig::new(
            self.series_delimiter.as_str(),
            self.range_delimiter.as_str(),
            self.increment,
        )
        .with_min_page(self.min_page)
        .with_reference_suffix(self.reference_suffix.as_str())
        .with_strict_literals(self.strict);

        Renumberer::new(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Renumber page series given on the command line
    Series {
        /// Page series, eg. "52, 60, 91--8"
        #[arg(required = true)]
        series: Vec<String>,

        #[command(flatten)]
        renumber: RenumberArgs,
    },

    /// Renumber the page series of every line in index files
    Index {
        /// Index files. Supports glob patterns like "*.idx"
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Directory for renumbered files (default: print to stdout)
        #[arg(short = 'd', long)]
        output_dir: Option<PathBuf>,

        /// Separator between entry text and its page series
        #[arg(short, long, default_value = DEFAULT_ENTRY_DELIMITER)]
        entry_delimiter: String,

        /// Keep failing lines unchanged instead of stopping
        #[arg(long)]
        keep_going: bool,

        #[command(flatten)]
        renumber: RenumberArgs,
    },
}

fn main() {
    // Initialize tracing with WARN level by default, respecting RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Series { series, renumber } => cmd_series(&series, &renumber),
        Commands::Index {
            inputs,
            output_dir,
            entry_delimiter,
            keep_going,
            renumber,
        } => cmd_index(inputs, output_dir.as_deref(), entry_delimiter, keep_going, &renumber),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Expand glob patterns in input paths
fn expand_globs(patterns: Vec<String>) -> reranger::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        // Check if pattern contains glob characters
        if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
            let entries = glob(&pattern).map_err(|e| Error::InvalidGlob(format!("{pattern}: {e}")))?;
            let mut matched = false;
            for entry in entries {
                match entry {
                    Ok(path) => {
                        paths.push(path);
                        matched = true;
                    }
                    Err(e) => eprintln!("Warning: glob error for {}: {}", pattern, e),
                }
            }
            if !matched {
                return Err(Error::NoFilesMatched(pattern));
            }
        } else {
            // No glob characters, treat as literal path
            paths.push(PathBuf::from(pattern));
        }
    }

    // Sort paths for consistent ordering
    paths.sort();

    Ok(paths)
}

/// Renumber series given as arguments
fn cmd_series(series: &[String], args: &RenumberArgs) -> Result<()> {
    let renumberer = args.renumberer()?;

    for text in series {
        let renumbered = renumberer.process_series(text)?;
        println!("{}", renumbered);
    }

    Ok(())
}

/// Renumber index files
fn cmd_index(
    inputs: Vec<String>,
    output_dir: Option<&Path>,
    entry_delimiter: String,
    keep_going: bool,
    args: &RenumberArgs,
) -> Result<()> {
    let renumberer = args.renumberer()?;
    let inputs = expand_globs(inputs)?;

    let options = IndexOptions {
        entry_delimiter,
        on_error: if keep_going {
            ErrorPolicy::KeepGoing
        } else {
            ErrorPolicy::Abort
        },
    };

    if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }

    for input in &inputs {
        let report = renumber_file(&renumberer, input, &options)
            .with_context(|| format!("renumbering {}", input.display()))?;

        for failure in &report.failures {
            eprintln!(
                "Warning: {}:{}: {} (line kept as is)",
                input.display(),
                failure.line_number,
                failure.error
            );
        }

        match output_dir {
            Some(dir) => {
                let file_name = input
                    .file_name()
                    .with_context(|| format!("no file name in {}", input.display()))?;
                let output = dir.join(file_name);
                std::fs::write(&output, &report.output)
                    .with_context(|| format!("writing {}", output.display()))?;
                eprintln!(
                    "Renumbered {} lines: {} -> {}",
                    report.renumbered,
                    input.display(),
                    output.display()
                );
            }
            None => {
                print!("{}", report.output);
                eprintln!("Renumbered {} lines in {}", report.renumbered, input.display());
            }
        }
    }

    Ok(())
}
