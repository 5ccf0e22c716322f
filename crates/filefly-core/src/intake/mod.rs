//! Inbound transfer intake pipeline.
//!
//! One inbound transfer runs through a straight line of steps:
//!
//! 1. **Resolve** the transfer reference to a source path
//! 2. **Decode** the sender metadata carried in the filename
//! 3. **Copy** the payload into the received directory
//! 4. **Persist** a [`DocumentRecord`] describing the transfer
//!
//! A failure at any step aborts the rest. The record is only written
//! after a successful copy, so a failed copy never leaves a dangling
//! row; the reverse (an orphan file after a failed insert) can occur
//! and is not compensated.
//!
//! ## Example
//!
//! ```rust,ignore
//! use filefly_core::intake::{IntakeHandler, TransferRef};
//!
//! let handler = IntakeHandler::new("/data/filefly/received");
//! let reference = TransferRef::parse("file:///mnt/beam/filesSmith_Jane_report.pdf")?;
//! let receipt = handler.handle(&store, &reference)?;
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::codec::TaggedFilename;
use crate::error::{Error, Result};
use crate::store::{DocumentRecord, DocumentStore};

/// A parsed inbound transfer reference.
///
/// The transport hands over an opaque locator; only the `file` and
/// `content` schemes are recognized. Anything else is unresolvable and
/// belongs back with the platform's default handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferRef {
    /// A direct filesystem path (`file://` URI or a bare path)
    LocalFile(PathBuf),
    /// A content-provider locator: `authority/path` from a `content://` URI
    Content(String),
}

impl TransferRef {
    /// Parse a transfer reference from its string form.
    ///
    /// Input without a scheme is treated as a local path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedSource`] for any unrecognized scheme.
    pub fn parse(reference: &str) -> Result<Self> {
        match reference.split_once("://") {
            None => Ok(Self::LocalFile(PathBuf::from(reference))),
            Some(("file", rest)) => Ok(Self::LocalFile(PathBuf::from(rest))),
            Some(("content", rest)) => Ok(Self::Content(rest.to_string())),
            Some((scheme, _)) => Err(Error::UnresolvedSource(format!(
                "unrecognized scheme '{scheme}' in '{reference}'"
            ))),
        }
    }
}

/// Resolves a content-provider locator to a local filesystem path.
pub trait ContentResolver {
    /// Resolve `locator` (the `authority/path` remainder of a `content://`
    /// URI) to an absolute source path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedSource`] when the locator cannot be
    /// resolved by this provider.
    fn resolve(&self, locator: &str) -> Result<PathBuf>;
}

/// Content resolver for a single provider authority.
///
/// Locators carry `authority/path`; when the authority matches, the path
/// part is taken as an absolute filesystem path. Only one authority is
/// served, mirroring the media-store-only behavior of the transport this
/// replaces.
#[derive(Debug, Clone)]
pub struct AuthorityResolver {
    authority: String,
}

impl AuthorityResolver {
    /// Default provider authority.
    pub const DEFAULT_AUTHORITY: &'static str = "media";

    /// Create a resolver serving the given authority.
    #[must_use]
    pub fn new(authority: impl Into<String>) -> Self {
        Self {
            authority: authority.into(),
        }
    }
}

impl Default for AuthorityResolver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_AUTHORITY)
    }
}

impl ContentResolver for AuthorityResolver {
    fn resolve(&self, locator: &str) -> Result<PathBuf> {
        let (authority, path) = locator.split_once('/').ok_or_else(|| {
            Error::UnresolvedSource(format!("content locator '{locator}' carries no path"))
        })?;

        if authority != self.authority {
            return Err(Error::UnresolvedSource(format!(
                "no resolver for content authority '{authority}'"
            )));
        }

        let resolved = PathBuf::from(format!("/{path}"));
        if !resolved.is_file() {
            return Err(Error::FileNotFound(resolved.display().to_string()));
        }
        Ok(resolved)
    }
}

/// Options controlling the intake pipeline.
#[derive(Debug, Clone, Default)]
pub struct IntakeOptions {
    /// Strip the fixed transport prefix from the carried filename before
    /// decoding. Required for sources that prepend it, wrong for sources
    /// that do not; callers must choose.
    pub strip_transport_prefix: bool,
}

/// Outcome of one successful intake.
///
/// Returning the receipt is the change signal: presenters re-query the
/// store on demand rather than registering callbacks.
#[derive(Debug, Clone)]
pub struct IntakeReceipt {
    /// The record persisted for this transfer
    pub record: DocumentRecord,
    /// Where the payload was saved
    pub saved_to: PathBuf,
}

/// Orchestrates one inbound transfer from reference to stored record.
pub struct IntakeHandler {
    received_dir: PathBuf,
    options: IntakeOptions,
    resolver: Box<dyn ContentResolver>,
}

impl std::fmt::Debug for IntakeHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntakeHandler")
            .field("received_dir", &self.received_dir)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl IntakeHandler {
    /// Create a handler saving payloads under `received_dir`, with default
    /// options and the default content resolver.
    #[must_use]
    pub fn new(received_dir: impl Into<PathBuf>) -> Self {
        Self {
            received_dir: received_dir.into(),
            options: IntakeOptions::default(),
            resolver: Box::new(AuthorityResolver::default()),
        }
    }

    /// Set intake options.
    #[must_use]
    pub fn with_options(mut self, options: IntakeOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the content resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: Box<dyn ContentResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Run one inbound transfer through the pipeline.
    ///
    /// The store handle is passed in explicitly; the handler holds no
    /// ambient state beyond its target directory.
    ///
    /// # Errors
    ///
    /// Propagates the failing step's error; see the module docs for which
    /// steps leave side effects behind.
    pub fn handle(&self, store: &DocumentStore, reference: &TransferRef) -> Result<IntakeReceipt> {
        let source = self.resolve(reference)?;
        tracing::debug!(source = %source.display(), "transfer source resolved");

        let tag = self.decode_metadata(&source)?;
        tracing::debug!(
            sender = %format!("{} {}", tag.first_name, tag.last_name),
            original = %tag.original_name,
            "sender metadata decoded"
        );

        let saved_to = self.copy_payload(&source, &tag.original_name)?;

        let record = DocumentRecord {
            filename: tag.original_name,
            owner_first_name: tag.first_name,
            owner_last_name: tag.last_name,
            transferred_at: Utc::now(),
        };
        store.insert(&record)?;

        tracing::info!(
            filename = %record.filename,
            saved_to = %saved_to.display(),
            "transfer intake complete"
        );

        Ok(IntakeReceipt { record, saved_to })
    }

    fn resolve(&self, reference: &TransferRef) -> Result<PathBuf> {
        match reference {
            TransferRef::LocalFile(path) => Ok(path.clone()),
            TransferRef::Content(locator) => self.resolver.resolve(locator),
        }
    }

    fn decode_metadata(&self, source: &Path) -> Result<TaggedFilename> {
        let carried = source
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                Error::MalformedName(format!(
                    "source path '{}' carries no usable filename",
                    source.display()
                ))
            })?;

        if self.options.strip_transport_prefix {
            TaggedFilename::decode_prefixed(carried)
        } else {
            TaggedFilename::decode(carried)
        }
    }

    fn copy_payload(&self, source: &Path, original_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.received_dir)?;

        // A re-received file replaces the previous copy; the store keeps
        // one row per arrival either way.
        let dest = self.received_dir.join(original_name);
        fs::copy(source, &dest)?;

        Ok(dest)
    }
}
