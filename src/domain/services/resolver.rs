//! Disambiguation resolver
//!
//! Several document formats live inside a generic container (a ZIP archive
//! or a compound-binary file) whose outer signature says nothing about the
//! document type. When the registry cannot name a specific format, the
//! resolver maps the container to a single fixed fallback format.

use super::detector::read_header;
use std::io::{self, Read, Seek};

/// Container id for ZIP-family archives
pub const ZIP_CONTAINER: &str = "ZIP";
/// Container id for compound-binary (OLE2) files
pub const CFB_CONTAINER: &str = "CFB";

pub const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];
pub const CFB_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Unresolved ZIP containers are treated as spreadsheets
pub const DEFAULT_ZIP_TARGET: &str = "XLSX";
/// Unresolved compound-binary containers are treated as legacy HWP documents
pub const DEFAULT_CFB_TARGET: &str = "HWP";

/// Maps one container signature to one fallback format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackRule {
    container: String,
    magic: Vec<u8>,
    target: String,
}

impl FallbackRule {
    pub fn new(container: &str, magic: &[u8], target: &str) -> Self {
        Self {
            container: container.to_ascii_uppercase(),
            magic: magic.to_vec(),
            target: target.to_ascii_uppercase(),
        }
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn magic(&self) -> &[u8] {
        &self.magic
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Ordered fallback rules, first match wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPolicy {
    rules: Vec<FallbackRule>,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self {
            rules: vec![
                FallbackRule::new(ZIP_CONTAINER, &ZIP_MAGIC, DEFAULT_ZIP_TARGET),
                FallbackRule::new(CFB_CONTAINER, &CFB_MAGIC, DEFAULT_CFB_TARGET),
            ],
        }
    }
}

impl FallbackPolicy {
    /// A policy with no rules; unresolved containers stay unknown
    pub fn none() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule
    pub fn with_rule(mut self, rule: FallbackRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Retargets the rule for `container`, leaving its magic untouched
    pub fn with_target(mut self, container: &str, target: &str) -> Self {
        let target = target.to_ascii_uppercase();
        for rule in self
            .rules
            .iter_mut()
            .filter(|r| r.container.eq_ignore_ascii_case(container))
        {
            rule.target = target.clone();
        }
        self
    }

    pub fn rules(&self) -> &[FallbackRule] {
        &self.rules
    }
}

/// Applies the fallback chain to a stream the registry could not resolve
#[derive(Debug, Clone, Default)]
pub struct DisambiguationResolver {
    policy: FallbackPolicy,
}

impl DisambiguationResolver {
    pub fn new(policy: FallbackPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &FallbackPolicy {
        &self.policy
    }

    /// Whether `format_id` names a generic container handled here
    pub fn is_container(&self, format_id: &str) -> bool {
        self.policy
            .rules
            .iter()
            .any(|r| r.container.eq_ignore_ascii_case(format_id))
    }

    /// Returns the fallback format for the stream, if any rule's magic
    /// appears at the start of it
    pub fn resolve<R: Read + Seek>(&self, source: &mut R, len: u64) -> io::Result<Option<&str>> {
        for rule in &self.policy.rules {
            if len < rule.magic.len() as u64 {
                continue;
            }
            let header = read_header(source, 0, rule.magic.len())?;
            if header == rule.magic {
                tracing::debug!(
                    "Unresolved {} container mapped to {}",
                    rule.container,
                    rule.target
                );
                return Ok(Some(&rule.target));
            }
        }
        Ok(None)
    }
}
