//! Send command implementation.
//!
//! Tags a file with the sender's name and stages it in the outbound
//! directory under the encoded name, ready for the proximity link to pick
//! up. The names used are persisted to the configuration so the next send
//! can reuse them.

use std::fs;

use anyhow::{bail, Context, Result};

use filefly_core::codec::TaggedFilename;

use super::{load_config, SendArgs};

/// Maximum accepted length of a name component.
const MAX_NAME_LENGTH: usize = 50;

/// Run the send command.
pub fn run(args: SendArgs) -> Result<()> {
    let mut config = load_config();

    let first = resolve_name(args.first, &config.sender.first_name, "first")?;
    let last = resolve_name(args.last, &config.sender.last_name, "last")?;

    let original_name = args
        .path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("'{}' has no usable filename", args.path.display()))?;

    let tag = TaggedFilename::new(&last, &first, original_name)?;

    let outbound_dir = args.output.unwrap_or_else(|| config.outbound_dir());
    fs::create_dir_all(&outbound_dir)
        .with_context(|| format!("failed to create {}", outbound_dir.display()))?;

    let staged = outbound_dir.join(tag.encode());
    fs::copy(&args.path, &staged)
        .with_context(|| format!("failed to stage {}", args.path.display()))?;

    // Remember the names for the next send
    if config.sender.first_name != first || config.sender.last_name != last {
        config.sender.first_name = first;
        config.sender.last_name = last;
        if let Err(e) = config.save() {
            tracing::warn!("could not persist sender names: {e}");
        }
    }

    println!("Staged {}", staged.display());
    Ok(())
}

/// Pick the explicit name if given, else fall back to the configured one.
///
/// Names are restricted to letters, as the transfer encoding reserves
/// punctuation for its own delimiters.
fn resolve_name(explicit: Option<String>, configured: &str, which: &str) -> Result<String> {
    let name = match explicit {
        Some(name) => name,
        None if !configured.is_empty() => configured.to_string(),
        None => bail!("no {which} name given and none configured (set one with --{which})"),
    };

    if name.len() > MAX_NAME_LENGTH {
        bail!("{which} name is longer than {MAX_NAME_LENGTH} characters");
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic()) {
        bail!("{which} name must contain only letters");
    }

    Ok(name)
}
