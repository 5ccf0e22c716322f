//! CLI command definitions and handlers.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Load configuration with graceful fallback to defaults.
///
/// This function should be used by all commands to load the user's
/// configuration. If the config file doesn't exist or can't be parsed, it
/// falls back to defaults.
pub fn load_config() -> filefly_core::config::Config {
    filefly_core::config::Config::load().unwrap_or_default()
}

pub mod config;
pub mod delete;
pub mod intake;
pub mod list;
pub mod open;
pub mod send;

/// FileFly - Proximity file transfer intake and document tracking
#[derive(Parser)]
#[command(name = "filefly")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand)]
pub enum Command {
    /// Tag a file with your name and stage it for the proximity link
    Send(SendArgs),

    /// Take in one inbound transfer and record it
    Intake(IntakeArgs),

    /// List received documents
    List(ListArgs),

    /// Open a received document with the default viewer
    Open(OpenArgs),

    /// Delete received-document records by filename
    Delete(DeleteArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for the send command
#[derive(Parser)]
pub struct SendArgs {
    /// File to tag and stage
    pub path: PathBuf,

    /// Sender's first name (defaults to the configured name)
    #[arg(long)]
    pub first: Option<String>,

    /// Sender's last name (defaults to the configured name)
    #[arg(long)]
    pub last: Option<String>,

    /// Staging directory for the tagged file (defaults to the data dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the intake command
#[derive(Parser)]
pub struct IntakeArgs {
    /// Inbound transfer reference (file:// URI, content:// URI, or path)
    pub reference: String,

    /// Directory for received payloads (defaults to the data dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Strip the transport's 5-character filename prefix before decoding
    #[arg(long)]
    pub strip_prefix: bool,
}

/// Arguments for the list command
#[derive(Parser)]
pub struct ListArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the open command
#[derive(Parser)]
pub struct OpenArgs {
    /// Received filename, or a path to any local file
    pub file: String,

    /// Print the view request without launching a viewer
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the delete command
#[derive(Parser)]
pub struct DeleteArgs {
    /// Filename whose records should be removed
    pub filename: String,
}

/// Arguments for the config command
#[derive(Parser)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Value to set
        value: String,
    },

    /// Show all configuration
    Show,

    /// Show the configuration file path
    Path,

    /// Reset to defaults
    Reset,
}
