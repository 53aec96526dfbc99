// ulaw-wav/src/cli.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// 16-bit PCM WAVE to 8 kHz mono µ-law WAVE converter.
#[derive(Debug, Parser)]
#[command(name = "ulaw-wav", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode a 16-bit PCM WAVE file to µ-law.
    Encode { input: PathBuf, output: PathBuf },
    /// Join the audio of two µ-law WAVE files, FIRST then SECOND.
    Concat { first: PathBuf, second: PathBuf, output: PathBuf },
}
