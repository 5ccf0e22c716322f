//! List command implementation.
//!
//! The received-documents presenter: re-queries the store on each run and
//! renders every record in insertion order.

use anyhow::{Context, Result};

use filefly_core::store::DocumentStore;

use super::{load_config, ListArgs};

/// Run the list command.
pub fn run(args: &ListArgs) -> Result<()> {
    let config = load_config();
    let store = DocumentStore::open(config.database_path())
        .context("failed to open the document database")?;

    let records = store.get_all()?;

    if args.json {
        let output = serde_json::json!({
            "documents": records.iter().map(|r| serde_json::json!({
                "filename": r.filename,
                "owner_first_name": r.owner_first_name,
                "owner_last_name": r.owner_last_name,
                "transferred_at": r.transferred_at.to_rfc3339(),
            })).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!("Received Documents:");
    println!("{}", "─".repeat(72));
    println!("  {:16}  {:22}  {:30}", "Date", "Sender", "File");
    println!("{}", "─".repeat(72));

    if records.is_empty() {
        println!("  (no received documents)");
    }

    for record in &records {
        println!(
            "  {:16}  {:22}  {:30}",
            record.transferred_at.format("%Y-%m-%d %H:%M").to_string(),
            format!("{} {}", record.owner_first_name, record.owner_last_name),
            record.filename
        );
    }

    println!("{}", "─".repeat(72));

    Ok(())
}
