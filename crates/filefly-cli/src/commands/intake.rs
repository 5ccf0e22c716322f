//! Intake command implementation.
//!
//! Runs one inbound transfer reference through the intake pipeline and
//! reports the outcome. Failures abort the transfer and are reported to
//! the user; nothing is retried.

use anyhow::{Context, Result};

use filefly_core::intake::{AuthorityResolver, IntakeHandler, IntakeOptions, TransferRef};
use filefly_core::store::DocumentStore;

use super::{load_config, IntakeArgs};

/// Run the intake command.
pub fn run(args: IntakeArgs) -> Result<()> {
    let config = load_config();

    let reference = TransferRef::parse(&args.reference)?;

    let received_dir = args.output.unwrap_or_else(|| config.received_dir());
    let store = DocumentStore::open(config.database_path())
        .context("failed to open the document database")?;

    let handler = IntakeHandler::new(received_dir)
        .with_options(IntakeOptions {
            strip_transport_prefix: args.strip_prefix || config.intake.strip_transport_prefix,
        })
        .with_resolver(Box::new(AuthorityResolver::new(
            config.intake.content_authority.clone(),
        )));

    let receipt = handler
        .handle(&store, &reference)
        .context("transfer intake failed")?;

    println!(
        "Received '{}' from {} {}",
        receipt.record.filename, receipt.record.owner_first_name, receipt.record.owner_last_name
    );
    println!("Saved to {}", receipt.saved_to.display());

    Ok(())
}
