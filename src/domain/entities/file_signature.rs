//! Signature entry entity
//!
//! A fixed byte pattern at a fixed offset that identifies a file format.
//! This is the foundation of header-based format detection.

use serde::Deserialize;
use std::fmt;

use crate::core::error::SignatureError;

/// A magic-byte descriptor for one file format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureEntry {
    /// Format identifier, stored uppercase (e.g. `PNG`)
    format_id: String,
    /// The bytes that must appear at `offset`
    pattern: Vec<u8>,
    /// Offset from the start of the file where `pattern` is expected
    offset: u64,
    /// Minimum file length for this entry to apply
    min_size: Option<u64>,
}

impl SignatureEntry {
    /// Creates a signature anchored at the start of the file
    pub fn new(format_id: &str, pattern: Vec<u8>) -> Result<Self, SignatureError> {
        let format_id = format_id.trim().to_ascii_uppercase();
        if format_id.is_empty() {
            return Err(SignatureError::EmptyFormatId);
        }
        if pattern.is_empty() {
            return Err(SignatureError::EmptyPattern(format_id));
        }
        Ok(Self {
            format_id,
            pattern,
            offset: 0,
            min_size: None,
        })
    }

    /// Parses a hex pattern such as `"89 50 4E 47"`; whitespace is ignored
    pub fn from_hex(format_id: &str, pattern: &str) -> Result<Self, SignatureError> {
        let compact: String = pattern.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = hex::decode(&compact).map_err(|source| SignatureError::InvalidHex {
            pattern: pattern.to_string(),
            source,
        })?;
        Self::new(format_id, bytes)
    }

    /// Moves the pattern to a custom offset
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Requires files to be at least `min_size` bytes long
    pub fn with_min_size(mut self, min_size: u64) -> Self {
        self.min_size = Some(min_size);
        self
    }

    pub fn format_id(&self) -> &str {
        &self.format_id
    }

    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn min_size(&self) -> Option<u64> {
        self.min_size
    }

    /// Position one past the last pattern byte
    pub fn end(&self) -> u64 {
        self.offset + self.pattern.len() as u64
    }

    /// Whether a file of `len` bytes can hold this signature at all
    pub fn fits(&self, len: u64) -> bool {
        len >= self.end() && self.min_size.is_none_or(|min| len >= min)
    }

    /// Two entries claim the same bytes when offset and pattern are identical
    pub fn same_claim(&self, other: &SignatureEntry) -> bool {
        self.offset == other.offset && self.pattern == other.pattern
    }

    /// Checks an in-memory header against this signature
    pub fn matches_header(&self, data: &[u8]) -> bool {
        if !self.fits(data.len() as u64) {
            return false;
        }
        let start = self.offset as usize;
        &data[start..start + self.pattern.len()] == self.pattern.as_slice()
    }
}

impl fmt::Display for SignatureEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} @{:<6} {}",
            self.format_id,
            self.offset,
            hex::encode_upper(&self.pattern)
        )
    }
}

/// On-disk form of a custom signature
///
/// ```json
/// [{ "format": "FOO", "pattern": "46 4F 4F", "offset": 0, "min_size": 16 }]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SignatureSpec {
    pub format: String,
    pub pattern: String,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub min_size: Option<u64>,
}

impl TryFrom<SignatureSpec> for SignatureEntry {
    type Error = SignatureError;

    fn try_from(spec: SignatureSpec) -> Result<Self, Self::Error> {
        let entry = SignatureEntry::from_hex(&spec.format, &spec.pattern)?.with_offset(spec.offset);
        Ok(match spec.min_size {
            Some(min) => entry.with_min_size(min),
            None => entry,
        })
    }
}
