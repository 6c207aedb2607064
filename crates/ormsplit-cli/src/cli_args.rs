//! CLI argument definitions for the ormsplit binary.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined
//! here, keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// ormsplit - Packed Metallic-Roughness Texture Splitter
#[derive(Parser)]
#[command(name = "ormsplit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a packed texture into AO, Roughness and Metallic maps
    Split {
        /// Path to the packed metallic-roughness PNG
        #[arg(short, long)]
        input: String,

        /// PNG compression preset for the output maps
        #[arg(long, default_value = "default", value_parser = ["default", "fast", "best"])]
        compression: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Report a texture's dimensions and channel layout without writing files
    Inspect {
        /// Path to the PNG to inspect
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
