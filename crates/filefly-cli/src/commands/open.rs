//! Open command implementation.
//!
//! Builds a view request (file path plus extension-derived MIME type) and
//! hands the file to the platform's default opener.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use filefly_core::mime::ViewRequest;

use super::{load_config, OpenArgs};

/// Run the open command.
pub fn run(args: &OpenArgs) -> Result<()> {
    let path = locate(&args.file)?;
    let request = ViewRequest::for_file(path);

    println!("{} ({})", request.path.display(), request.mime);

    if args.dry_run {
        return Ok(());
    }

    open::that(&request.path)
        .with_context(|| format!("failed to open {}", request.path.display()))?;

    Ok(())
}

/// Resolve the argument to a file: an existing path as-is, otherwise a
/// filename looked up in the received directory.
fn locate(file: &str) -> Result<PathBuf> {
    let direct = PathBuf::from(file);
    if direct.is_file() {
        return Ok(direct);
    }

    let received = load_config().received_dir().join(file);
    if received.is_file() {
        return Ok(received);
    }

    bail!("'{file}' is not a file and is not in the received directory");
}
