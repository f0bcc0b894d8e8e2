//! Command-line interface for typo-align.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **classify**: Classify every character of a typed text against the expected one
//! - **basis**: Show the raw alignment between two texts
//!
//! ## Usage
//!
//! ```text
//! # Annotate a typo
//! typo-align classify hola hello
//!
//! # Require half of the expected characters to match
//! typo-align classify 1abc 1234 --min-matched 50%
//!
//! # JSON output for scripting
//! typo-align classify hola hello --format json
//!
//! # Inspect the alignment
//! typo-align basis hola hello
//! ```

use clap::{Parser, Subcommand};

pub mod basis;
pub mod classify;

#[derive(Parser)]
#[command(name = "typo-align")]
#[command(version)]
#[command(about = "Classify typed characters as correct, extra, or missing")]
#[command(
    long_about = "typo-align compares a typed text against an expected text and annotates every character.\n\nIt finds the alignment that matches the most characters and reports:\n- Correct characters, with letter-case mismatches\n- Extra characters that were not expected\n- Missing characters, inserted where they belong"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify the characters of a typed text
    Classify(classify::ClassifyArgs),

    /// Show the alignment basis of two texts
    Basis(basis::BasisArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
