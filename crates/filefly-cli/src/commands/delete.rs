//! Delete command implementation.
//!
//! Removes document records by filename. The payload in the received
//! directory is left in place; only the records go.

use anyhow::{Context, Result};

use filefly_core::store::DocumentStore;

use super::{load_config, DeleteArgs};

/// Run the delete command.
pub fn run(args: &DeleteArgs) -> Result<()> {
    let config = load_config();
    let store = DocumentStore::open(config.database_path())
        .context("failed to open the document database")?;

    let removed = store.delete_by_filename(&args.filename)?;

    if removed == 0 {
        println!("No records for '{}'.", args.filename);
    } else {
        println!("Removed {} record(s) for '{}'.", removed, args.filename);
    }

    Ok(())
}
