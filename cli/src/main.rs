//! Shavec CLI
//!
//! Generates reference test vectors for a hardware SHA-256 core: a MIF
//! memory image of padded, word-framed messages plus the digest list the
//! hardware output is checked against.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "shavec")]
#[command(about = "SHA-256 hardware test-vector generator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random test corpus, one message per line
    Gen {
        /// Corpus file to write
        #[arg(short, long, value_name = "FILE", default_value = "utf8_testcases.txt")]
        output: PathBuf,

        /// Number of messages to generate
        #[arg(short, long, default_value_t = 100)]
        count: usize,

        /// Maximum message length in characters
        #[arg(long, default_value_t = 512)]
        max_len: usize,
    },
    /// Pack a message corpus into a MIF memory image and digest list
    Pack {
        /// Corpus file to read, one message per line
        #[arg(value_name = "MESSAGES")]
        input: PathBuf,

        /// MIF memory image to write
        #[arg(long, value_name = "FILE", default_value = "soc_input_data.mif")]
        mif: PathBuf,

        /// Expected digest list to write, one digest per line
        #[arg(long, value_name = "FILE", default_value = "expected_sha256_hashes.txt")]
        hashes: PathBuf,
    },
    /// Compare a digest list captured from the hardware run against the
    /// expected list
    Check {
        /// Expected digest list (from `pack`)
        #[arg(value_name = "EXPECTED")]
        expected: PathBuf,

        /// Digest list produced by the hardware run
        #[arg(value_name = "ACTUAL")]
        actual: PathBuf,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Gen {
            output,
            count,
            max_len,
        } => commands::generate(output, *count, *max_len)?,
        Commands::Pack { input, mif, hashes } => commands::pack(input, mif, hashes)?,
        Commands::Check { expected, actual } => {
            if !commands::check(expected, actual)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
