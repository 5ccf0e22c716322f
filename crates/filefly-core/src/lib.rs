//! # FileFly Core Library
//!
//! `filefly-core` provides the core functionality for FileFly, a tool for
//! moving files between nearby devices over a short-range proximity link
//! and keeping track of what was received from whom.
//!
//! The proximity channel carries nothing but a filename, so the sender's
//! identity travels *inside* the filename: `lastname_firstname_original`.
//! The receiving side decodes that name, copies the payload into a local
//! received directory, and records the transfer in an embedded SQLite
//! database.
//!
//! ## Modules
//!
//! - [`codec`] - Encoding sender metadata into transport-safe filenames
//! - [`config`] - Configuration management
//! - [`mod@error`] - Unified error type
//! - [`intake`] - Inbound transfer pipeline (resolve, decode, copy, record)
//! - [`mime`] - Extension-based MIME dispatch for opening received files
//! - [`store`] - Received-document record store
//!
//! ## Example
//!
//! ```rust,ignore
//! use filefly_core::intake::{IntakeHandler, TransferRef};
//! use filefly_core::store::DocumentStore;
//!
//! let store = DocumentStore::open("datastore.db")?;
//! let handler = IntakeHandler::new("received");
//! let receipt = handler.handle(&store, &TransferRef::parse("file:///tmp/Smith_Jane_report.pdf")?)?;
//! println!("saved {}", receipt.saved_to.display());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::must_use_candidate)]

pub mod codec;
pub mod config;
pub mod error;
pub mod intake;
pub mod mime;
pub mod store;

pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix some proximity transports prepend to the carried filename
pub const TRANSPORT_PREFIX: &str = "files";

/// Directory name for received payloads, under the data directory
pub const RECEIVED_DIR_NAME: &str = "received";

/// Directory name for staged outbound payloads, under the data directory
pub const OUTBOUND_DIR_NAME: &str = "outbound";

/// Filename of the embedded document database
pub const DATABASE_FILE_NAME: &str = "datastore.db";
