//! `xtask`: workspace automation for the project.
//!
//! Provides content checks for room template libraries.
use clap::{Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::{bail, eyre};
use fell_core::rooms::{TemplateIssue, audit};
use fell_core::{DEFAULT_CHUNK_SIZE, TemplateLibrary, TemplateSource};
use regex::Regex;
use std::path::{Path, PathBuf};

/// Top-level CLI entry point for the xtask binary.
#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks against the built-in templates
    Check,
    /// Audit a room template directory (or the built-in templates when omitted)
    CheckRooms {
        /// Directory containing `type0/`..`type4/` and `Solid.txt`
        dir: Option<PathBuf>,

        /// Side length every template must have
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,

        /// Only report templates whose name matches this regex
        #[arg(long)]
        filter: Option<String>,

        /// Print every template with its room type and exit
        #[arg(long)]
        list: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    match cli.command {
        Commands::Check => check_rooms(None, DEFAULT_CHUNK_SIZE, None, false),
        Commands::CheckRooms { dir, chunk_size, filter, list } => {
            check_rooms(dir.as_deref(), chunk_size, filter.as_deref(), list)
        }
    }
}

fn load_library(dir: Option<&Path>, chunk_size: usize) -> Result<TemplateLibrary> {
    match dir {
        Some(dir) => TemplateLibrary::load_dir(dir, chunk_size)
            .map_err(|e| eyre!("Failed to load room templates from {}: {}", dir.display(), e)),
        None => TemplateLibrary::builtin()
            .map_err(|e| eyre!("Built-in room templates failed to parse: {}", e)),
    }
}

/// Issues whose template name matches `filter`, or all of them.
fn filtered_issues(library: &TemplateLibrary, filter: Option<&str>) -> Result<Vec<TemplateIssue>> {
    let pattern = filter
        .map(|pattern| Regex::new(pattern).map_err(|e| eyre!("Invalid regex {}: {}", pattern, e)))
        .transpose()?;
    Ok(audit(library)
        .into_iter()
        .filter(|issue| pattern.as_ref().is_none_or(|re| re.is_match(issue.template())))
        .collect())
}

/// Fails with every defect listed when the library has any.
fn check_rooms(dir: Option<&Path>, chunk_size: usize, filter: Option<&str>, list: bool) -> Result<()> {
    let library = load_library(dir, chunk_size)?;

    if list {
        for (room_type, template) in library.iter() {
            println!("{}: {}", template.name(), room_type.name());
        }
        println!("Solid: {}x{}", library.solid().size(), library.solid().size());
        return Ok(());
    }

    let issues = filtered_issues(&library, filter)?;
    if issues.is_empty() {
        println!(
            "All {} room templates passed ({}x{}).",
            library.iter().count(),
            library.chunk_size(),
            library.chunk_size()
        );
        return Ok(());
    }

    eprintln!("Room template defects:");
    for issue in &issues {
        eprintln!("  {issue}");
    }
    bail!("{} room template defect(s) found", issues.len());
}
