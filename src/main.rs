//! Bootsmith CLI - bootstrap asset materializer
//!
//! Usage: bootsmith <COMMAND>
//!
//! Commands:
//!   materialize  Resolve all assets and stage their files
//!   check        Validate user-supplied assets without writing

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use bootsmith::{default_store, stage_files, AssetState, DiskFetcher};

/// Bootsmith - bootstrap asset materializer
#[derive(Parser, Debug)]
#[command(name = "bootsmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, default_value = "false")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve all assets and stage their files to the output directory
    Materialize {
        /// Directory holding user-supplied assets
        #[arg(short, long, default_value = ".")]
        input_dir: PathBuf,

        /// Directory to stage resolved assets into
        #[arg(short, long)]
        output_dir: PathBuf,
    },

    /// Validate user-supplied assets without writing anything
    Check {
        /// Directory holding user-supplied assets
        #[arg(short, long, default_value = ".")]
        input_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Materialize {
            input_dir,
            output_dir,
        } => cmd_materialize(&input_dir, &output_dir, cli.json),
        Commands::Check { input_dir } => cmd_check(&input_dir, cli.json),
    }
}

fn state_label(state: AssetState) -> &'static str {
    match state {
        AssetState::Unresolved => "unresolved",
        AssetState::Loaded => "loaded",
        AssetState::Generated => "generated",
        AssetState::Failed => "failed",
    }
}

fn cmd_materialize(input_dir: &PathBuf, output_dir: &PathBuf, json: bool) -> Result<()> {
    if !json {
        println!("📦 Bootsmith Materialize");
        println!("Input: {}", input_dir.display());
        println!("Output: {}", output_dir.display());
    }

    let fetcher = DiskFetcher::new(input_dir);
    let mut store = default_store()?;
    store.resolve_all(&fetcher)?;

    let files: Vec<_> = store.all_files().collect();
    let written = stage_files(output_dir, files.iter().copied())?;

    if json {
        let assets: Vec<_> = store
            .report()
            .iter()
            .map(|status| {
                serde_json::json!({
                    "key": status.key.to_string(),
                    "name": status.name,
                    "state": state_label(status.state),
                    "files": status.file_count,
                })
            })
            .collect();
        let output = serde_json::json!({
            "event": "materialize",
            "status": "success",
            "assets": assets,
            "written": written.len(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!();
        for status in store.report() {
            let icon = match status.state {
                AssetState::Loaded => "✓",
                AssetState::Generated if status.file_count == 0 => "·",
                AssetState::Generated => "✓",
                _ => "✗",
            };
            println!(
                "{} {} [{}] - {} file(s)",
                icon,
                status.name,
                state_label(status.state),
                status.file_count
            );
        }
        println!("\n📊 Staged {} file(s):", written.len());
        for (file, path) in files.iter().zip(&written) {
            println!("  - {} ({})", path.display(), file.fingerprint());
        }
    }

    Ok(())
}

fn cmd_check(input_dir: &PathBuf, json: bool) -> Result<()> {
    if !json {
        println!("🩺 Bootsmith Check");
        println!("Input: {}", input_dir.display());
        println!();
    }

    let fetcher = DiskFetcher::new(input_dir);
    let mut store = default_store()?;
    store.resolve_all(&fetcher)?;

    let report = store.report();

    if json {
        let assets: Vec<_> = report
            .iter()
            .map(|status| {
                serde_json::json!({
                    "key": status.key.to_string(),
                    "name": status.name,
                    "state": state_label(status.state),
                    "supplied": status.state == AssetState::Loaded,
                })
            })
            .collect();
        let output = serde_json::json!({
            "event": "check",
            "status": "success",
            "assets": assets,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        for status in &report {
            match status.state {
                AssetState::Loaded => {
                    println!("✓ {} - supplied and valid", status.name);
                }
                AssetState::Generated if status.file_count == 0 => {
                    println!("· {} - not supplied", status.name);
                }
                _ => {
                    println!(
                        "✓ {} - {}",
                        status.name,
                        state_label(status.state)
                    );
                }
            }
        }
        println!("\n🟢 All supplied assets are valid");
    }

    Ok(())
}
