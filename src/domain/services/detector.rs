//! Format detector service
//!
//! Probes a seekable stream against every registered signature and picks the
//! most specific match, falling back to the disambiguation resolver when the
//! registry has nothing specific to say.

use super::resolver::DisambiguationResolver;
use super::signature_registry::SignatureRegistry;
use crate::domain::entities::{Detection, SignatureEntry};
use std::cmp::Reverse;
use std::io::{self, Cursor, Read, Seek, SeekFrom};

/// Reads up to `len` bytes at `offset`; a short result means end of stream
pub(crate) fn read_header<R: Read + Seek>(
    source: &mut R,
    offset: u64,
    len: usize,
) -> io::Result<Vec<u8>> {
    source.seek(SeekFrom::Start(offset))?;
    let mut buf = vec![0u8; len];
    let mut filled = 0;
    while filled < len {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    buf.truncate(filled);
    Ok(buf)
}

/// Specificity of a matched entry; greater ranks win
fn rank(entry: &SignatureEntry) -> (usize, u64, Reverse<&str>) {
    (entry.pattern().len(), entry.end(), Reverse(entry.format_id()))
}

/// Header-based format detector
#[derive(Debug, Clone)]
pub struct FormatDetector {
    registry: SignatureRegistry,
    resolver: DisambiguationResolver,
}

impl Default for FormatDetector {
    fn default() -> Self {
        Self::new(
            SignatureRegistry::with_defaults(),
            DisambiguationResolver::default(),
        )
    }
}

impl FormatDetector {
    pub fn new(registry: SignatureRegistry, resolver: DisambiguationResolver) -> Self {
        Self { registry, resolver }
    }

    pub fn registry(&self) -> &SignatureRegistry {
        &self.registry
    }

    pub fn resolver(&self) -> &DisambiguationResolver {
        &self.resolver
    }

    /// Finds the most specific registered signature present in the stream
    ///
    /// Each entry is read independently from its own offset. Entries that
    /// do not fit in `len` bytes, or whose bytes are cut short, do not match.
    /// Ranking: longest pattern, then furthest end position, then the
    /// alphabetically first format id.
    pub fn best_match<R: Read + Seek>(
        &self,
        source: &mut R,
        len: u64,
    ) -> io::Result<Option<&SignatureEntry>> {
        let mut best: Option<&SignatureEntry> = None;

        for entry in self.registry.all() {
            if !entry.fits(len) {
                continue;
            }
            let header = read_header(source, entry.offset(), entry.pattern().len())?;
            if header != entry.pattern() {
                continue;
            }
            tracing::trace!("Signature {} matched", entry);

            if best.is_none_or(|current| rank(entry) > rank(current)) {
                best = Some(entry);
            }
        }

        Ok(best)
    }

    /// Detects the format of a stream of `len` bytes
    ///
    /// A read fault never escapes: it becomes [`Detection::Faulted`].
    pub fn detect<R: Read + Seek>(&self, source: &mut R, len: u64) -> Detection {
        if len == 0 {
            return Detection::Empty;
        }

        let primary = match self.best_match(source, len) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Read fault during detection: {}", e);
                return Detection::Faulted(e.to_string());
            }
        };

        if let Some(entry) = primary
            && !self.resolver.is_container(entry.format_id())
        {
            return Detection::Matched(entry.format_id().to_string());
        }

        match self.resolver.resolve(source, len) {
            Ok(Some(target)) => Detection::Matched(target.to_string()),
            Ok(None) => match primary {
                Some(entry) => Detection::Matched(entry.format_id().to_string()),
                None => Detection::NoMatch,
            },
            Err(e) => {
                tracing::warn!("Read fault during fallback: {}", e);
                Detection::Faulted(e.to_string())
            }
        }
    }

    /// Detects the format of an in-memory header
    pub fn detect_bytes(&self, data: &[u8]) -> Option<String> {
        match self.detect(&mut Cursor::new(data), data.len() as u64) {
            Detection::Matched(id) => Some(id),
            _ => None,
        }
    }
}
