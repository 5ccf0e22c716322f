//! FileFly CLI - Proximity file transfer intake and document tracking
//!
//! FileFly tags outbound files with the sender's name, takes in files
//! arriving over a short-range proximity link, and keeps a record of every
//! received document in a local database.
//!
//! ## Quick Start
//!
//! ```bash
//! # Tag and stage a file for the proximity link
//! filefly send ./report.pdf --first Jane --last Smith
//!
//! # Take in an inbound transfer (on the receiving device)
//! filefly intake file:///mnt/beam/Smith_Jane_report.pdf
//!
//! # See what has been received
//! filefly list
//! ```

#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::Parser;

mod commands;

use commands::{Cli, Command};

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Command::Send(args) => commands::send::run(args),
        Command::Intake(args) => commands::intake::run(args),
        Command::List(args) => commands::list::run(&args),
        Command::Open(args) => commands::open::run(&args),
        Command::Delete(args) => commands::delete::run(&args),
        Command::Config(args) => commands::config::run(args),
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,filefly=info,filefly_core=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
