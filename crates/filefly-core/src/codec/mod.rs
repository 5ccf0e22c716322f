//! Sender-tagged filename encoding and decoding.
//!
//! The proximity link carries a filename and nothing else, so the sender's
//! name rides inside it. This module packs and unpacks that encoding.
//!
//! ## Name Format
//!
//! ```text
//! lastname_firstname_originalname
//! ```
//!
//! - Token order is last-before-first on both paths. The original filename
//!   may itself contain underscores; everything after the second delimiter
//!   belongs to it.
//! - Some transports prepend a fixed 5-character prefix (`files`) to the
//!   carried name. Callers that receive from such a source must use
//!   [`TaggedFilename::decode_prefixed`]; plain sources use
//!   [`TaggedFilename::decode`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use filefly_core::codec::TaggedFilename;
//!
//! let tag = TaggedFilename::new("Smith", "Jane", "report.pdf")?;
//! assert_eq!(tag.encode(), "Smith_Jane_report.pdf");
//!
//! let tag = TaggedFilename::decode("Smith_Jane_report.pdf")?;
//! assert_eq!(tag.original_name, "report.pdf");
//! ```

use crate::error::{Error, Result};

/// Delimiter between the encoded name components.
pub const DELIMITER: char = '_';

/// Length of the transport-prepended prefix ("files").
pub const TRANSPORT_PREFIX_LEN: usize = 5;

/// The decoded sender metadata carried by an encoded filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedFilename {
    /// Sender's last name (first token)
    pub last_name: String,
    /// Sender's first name (second token)
    pub first_name: String,
    /// Original filename as picked by the sender, extension included
    pub original_name: String,
}

impl TaggedFilename {
    /// Build a tag from its components, validating each one.
    ///
    /// Name components must be non-empty and must not contain the
    /// delimiter (an underscore in a name would shift every following
    /// token on decode) or path separators. The original filename may
    /// contain underscores but must be non-empty and separator-free.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidComponent`] when a component is rejected.
    pub fn new(last_name: &str, first_name: &str, original_name: &str) -> Result<Self> {
        validate_name_component("last name", last_name)?;
        validate_name_component("first name", first_name)?;
        validate_filename_component(original_name)?;

        Ok(Self {
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            original_name: original_name.to_string(),
        })
    }

    /// Encode the tag into a single transport-safe filename.
    #[must_use]
    pub fn encode(&self) -> String {
        format!(
            "{}{DELIMITER}{}{DELIMITER}{}",
            self.last_name, self.first_name, self.original_name
        )
    }

    /// Decode an encoded filename into its components.
    ///
    /// Splits on the delimiter: the first token is the last name, the
    /// second the first name, and the remaining tokens are rejoined to
    /// reconstruct the original filename.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedName`] when fewer than 3 tokens are
    /// present or a token is empty.
    pub fn decode(encoded: &str) -> Result<Self> {
        let tokens: Vec<&str> = encoded.split(DELIMITER).collect();

        if tokens.len() < 3 {
            return Err(Error::MalformedName(format!(
                "expected at least 3 '{DELIMITER}'-delimited tokens, got {} in '{encoded}'",
                tokens.len()
            )));
        }

        let last_name = tokens[0];
        let first_name = tokens[1];
        let original_name = tokens[2..].join("_");

        if last_name.is_empty() || first_name.is_empty() || original_name.is_empty() {
            return Err(Error::MalformedName(format!(
                "empty component in '{encoded}'"
            )));
        }

        Ok(Self {
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            original_name,
        })
    }

    /// Decode an encoded filename after stripping the transport prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedName`] when the input is shorter than the
    /// prefix or the remainder does not decode.
    pub fn decode_prefixed(encoded: &str) -> Result<Self> {
        if encoded.len() < TRANSPORT_PREFIX_LEN || !encoded.is_char_boundary(TRANSPORT_PREFIX_LEN) {
            return Err(Error::MalformedName(format!(
                "'{encoded}' is too short to carry the {TRANSPORT_PREFIX_LEN}-character transport prefix"
            )));
        }

        Self::decode(&encoded[TRANSPORT_PREFIX_LEN..])
    }
}

impl std::fmt::Display for TaggedFilename {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode())
    }
}

fn validate_name_component(component: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidComponent {
            component,
            reason: "must not be empty".to_string(),
        });
    }
    if value.contains(DELIMITER) {
        return Err(Error::InvalidComponent {
            component,
            reason: format!("must not contain '{DELIMITER}'"),
        });
    }
    if value.contains(['/', '\\']) {
        return Err(Error::InvalidComponent {
            component,
            reason: "must not contain path separators".to_string(),
        });
    }
    Ok(())
}

fn validate_filename_component(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidComponent {
            component: "original filename",
            reason: "must not be empty".to_string(),
        });
    }
    if value.contains(['/', '\\']) {
        return Err(Error::InvalidComponent {
            component: "original filename",
            reason: "must not contain path separators".to_string(),
        });
    }
    Ok(())
}
