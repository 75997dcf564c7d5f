//! Signature registry service
//!
//! Holds the magic-byte signatures consulted by the format detector.
//! Ships a built-in default set and accepts caller-supplied entries.

use crate::core::error::SignatureError;
use crate::domain::entities::{SignatureEntry, SignatureSpec};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Built-in signatures as `(format-id, hex pattern, offset)`
///
/// Generic containers (ZIP, compound binary) are intentionally absent: they
/// are handled by the fallback rules of the disambiguation resolver.
const DEFAULT_SIGNATURES: &[(&str, &str, u64)] = &[
    // Images
    ("JPG", "FF D8 FF", 0),
    ("PNG", "89 50 4E 47 0D 0A 1A 0A", 0),
    ("GIF", "47 49 46 38 37 61", 0),
    ("GIF", "47 49 46 38 39 61", 0),
    ("BMP", "42 4D", 0),
    ("TIF", "49 49 2A 00", 0),
    ("TIF", "4D 4D 00 2A", 0),
    ("ICO", "00 00 01 00", 0),
    ("WEBP", "57 45 42 50", 8),
    ("PSD", "38 42 50 53", 0),
    // Documents
    ("PDF", "25 50 44 46 2D", 0),
    ("RTF", "7B 5C 72 74 66 31", 0),
    ("HWP", "48 57 50 20 44 6F 63 75 6D 65 6E 74 20 46 69 6C 65", 0),
    // Archives
    ("7Z", "37 7A BC AF 27 1C", 0),
    ("RAR", "52 61 72 21 1A 07", 0),
    ("GZ", "1F 8B 08", 0),
    ("BZ2", "42 5A 68", 0),
    ("XZ", "FD 37 7A 58 5A 00", 0),
    ("ZST", "28 B5 2F FD", 0),
    ("CAB", "4D 53 43 46", 0),
    // Media
    ("MP3", "49 44 33", 0),
    ("FLAC", "66 4C 61 43", 0),
    ("OGG", "4F 67 67 53", 0),
    ("WAV", "57 41 56 45", 8),
    ("AVI", "41 56 49 20", 8),
    ("MP4", "66 74 79 70", 4),
    ("MKV", "1A 45 DF A3", 0),
    ("MID", "4D 54 68 64", 0),
    // Executables and databases
    ("EXE", "4D 5A", 0),
    ("ELF", "7F 45 4C 46", 0),
    ("CLASS", "CA FE BA BE", 0),
    ("SQLITE", "53 51 4C 69 74 65 20 66 6F 72 6D 61 74 20 33 00", 0),
    ("ISO", "43 44 30 30 31", 0x8001),
];

/// ZIP-hosted sub-formats that name themselves at the first local entry
/// (offset 30, right after the 30-byte local file header)
const ZIP_MEMBER_SIGNATURES: &[(&str, &str)] = &[
    ("EPUB", "mimetypeapplication/epub+zip"),
    ("ODT", "mimetypeapplication/vnd.oasis.opendocument.text"),
    ("ODS", "mimetypeapplication/vnd.oasis.opendocument.spreadsheet"),
    ("ODP", "mimetypeapplication/vnd.oasis.opendocument.presentation"),
    ("JAR", "META-INF/"),
];

const ZIP_MEMBER_NAME_OFFSET: u64 = 30;

/// Registry of file signatures for format detection
///
/// Entries are grouped by format id. Registering an entry whose offset and
/// pattern are already claimed by another format moves the claim to the new
/// format (last registered wins). Matching is by specificity, so the order
/// of registration never changes which format is detected.
///
/// # Example
///
/// ```
/// use hdrcheck::domain::services::SignatureRegistry;
///
/// let registry = SignatureRegistry::with_defaults();
/// let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
/// assert!(registry.all().any(|s| s.matches_header(&png) && s.format_id() == "PNG"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SignatureRegistry {
    signatures: HashMap<String, Vec<SignatureEntry>>,
    /// Format ids in first-registration order, for stable listing
    formats: Vec<String>,
}

impl SignatureRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in signature set
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        for (format_id, pattern, offset) in DEFAULT_SIGNATURES {
            match SignatureEntry::from_hex(format_id, pattern) {
                Ok(entry) => registry.register(entry.with_offset(*offset)),
                Err(e) => tracing::error!("Invalid built-in signature {}: {}", format_id, e),
            }
        }

        for (format_id, member) in ZIP_MEMBER_SIGNATURES {
            match SignatureEntry::new(format_id, member.as_bytes().to_vec()) {
                Ok(entry) => registry.register(entry.with_offset(ZIP_MEMBER_NAME_OFFSET)),
                Err(e) => tracing::error!("Invalid built-in signature {}: {}", format_id, e),
            }
        }

        registry
    }

    /// Registers a signature
    pub fn register(&mut self, entry: SignatureEntry) {
        let format_id = entry.format_id().to_string();

        for (owner, entries) in self.signatures.iter_mut() {
            let before = entries.len();
            entries.retain(|existing| !existing.same_claim(&entry));
            if entries.len() != before && *owner != format_id {
                tracing::debug!(
                    "Signature {} reassigned from {} to {}",
                    hex::encode_upper(entry.pattern()),
                    owner,
                    format_id
                );
            }
        }
        self.signatures.retain(|_, entries| !entries.is_empty());
        self.formats.retain(|id| self.signatures.contains_key(id));

        if !self.formats.contains(&format_id) {
            self.formats.push(format_id.clone());
        }
        self.signatures.entry(format_id).or_default().push(entry);
    }

    /// Registers every entry from a JSON signature file
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize, SignatureError> {
        let text = fs::read_to_string(path).map_err(|source| SignatureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let specs: Vec<SignatureSpec> =
            serde_json::from_str(&text).map_err(|source| SignatureError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        let entries = specs
            .into_iter()
            .map(SignatureEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let count = entries.len();
        for entry in entries {
            self.register(entry);
        }

        tracing::info!("Loaded {} custom signatures from {}", count, path.display());
        Ok(count)
    }

    /// Returns every registered signature
    pub fn all(&self) -> impl Iterator<Item = &SignatureEntry> {
        self.formats
            .iter()
            .filter_map(|id| self.signatures.get(id))
            .flatten()
    }

    /// Returns the signatures registered for a format id
    pub fn get_signatures(&self, format_id: &str) -> &[SignatureEntry] {
        self.signatures
            .get(&format_id.to_ascii_uppercase())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Format ids in registration order
    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    pub fn signature_count(&self) -> usize {
        self.signatures.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_loaded() {
        let registry = SignatureRegistry::with_defaults();
        assert_eq!(
            registry.signature_count(),
            DEFAULT_SIGNATURES.len() + ZIP_MEMBER_SIGNATURES.len()
        );
        assert_eq!(registry.get_signatures("gif").len(), 2);
        assert!(registry.get_signatures("ZIP").is_empty());
    }

    #[test]
    fn same_claim_moves_to_last_registered() {
        let mut registry = SignatureRegistry::new();
        registry.register(SignatureEntry::from_hex("OLD", "AA BB").unwrap());
        registry.register(SignatureEntry::from_hex("NEW", "AA BB").unwrap());

        assert!(registry.get_signatures("OLD").is_empty());
        assert_eq!(registry.get_signatures("NEW").len(), 1);
        assert_eq!(registry.formats(), &["NEW".to_string()]);
    }

    #[test]
    fn duplicate_registration_is_idempotent() {
        let mut registry = SignatureRegistry::new();
        registry.register(SignatureEntry::from_hex("A", "01 02").unwrap());
        registry.register(SignatureEntry::from_hex("A", "01 02").unwrap());
        assert_eq!(registry.signature_count(), 1);
    }

    #[test]
    fn same_pattern_other_offset_coexists() {
        let mut registry = SignatureRegistry::new();
        registry.register(SignatureEntry::from_hex("A", "01 02").unwrap());
        registry.register(SignatureEntry::from_hex("B", "01 02").unwrap().with_offset(4));
        assert_eq!(registry.signature_count(), 2);
    }

    #[test]
    fn extend_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sigs.json");
        fs::write(
            &path,
            r#"[{"format":"foo","pattern":"46 4F 4F"},{"format":"bar","pattern":"42","offset":2,"min_size":8}]"#,
        )
        .unwrap();

        let mut registry = SignatureRegistry::new();
        assert_eq!(registry.extend_from_file(&path).unwrap(), 2);
        assert_eq!(registry.get_signatures("FOO").len(), 1);
        assert_eq!(registry.get_signatures("BAR")[0].offset(), 2);
    }

    #[test]
    fn invalid_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sigs.json");
        fs::write(&path, "{not json").unwrap();

        let mut registry = SignatureRegistry::new();
        assert!(matches!(
            registry.extend_from_file(&path),
            Err(SignatureError::Json { .. })
        ));
    }
}
