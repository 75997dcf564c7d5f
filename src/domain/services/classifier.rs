//! Classifier service
//!
//! Turns a detection, a declared extension and a file size into a status.

use crate::domain::entities::{Detection, Status};

/// Classifies one file.
///
/// Rules apply in order: zero size is `Empty`; no format at all is
/// `Unknown`; a format equal to the extension (ignoring case) is `Ok`; a read
/// fault is `Corrupted`; any other concrete format is `Mismatch`.
pub fn classify(declared_extension: &str, detection: &Detection, size: u64) -> Status {
    if size == 0 {
        return Status::Empty;
    }

    match detection {
        Detection::Empty => Status::Empty,
        Detection::NoMatch => Status::Unknown,
        Detection::Matched(format_id) if format_id.eq_ignore_ascii_case(declared_extension) => {
            Status::Ok
        }
        Detection::Faulted(_) => Status::Corrupted,
        Detection::Matched(_) => Status::Mismatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(id: &str) -> Detection {
        Detection::Matched(id.to_string())
    }

    #[test]
    fn zero_size_wins_over_everything() {
        assert_eq!(classify("PNG", &matched("PNG"), 0), Status::Empty);
        assert_eq!(classify("PNG", &Detection::Faulted("x".into()), 0), Status::Empty);
    }

    #[test]
    fn same_format_is_ok_ignoring_case() {
        assert_eq!(classify("png", &matched("PNG"), 10), Status::Ok);
        assert_eq!(classify("PDF", &matched("pdf"), 10), Status::Ok);
    }

    #[test]
    fn other_format_is_mismatch() {
        assert_eq!(classify("JPG", &matched("PNG"), 10), Status::Mismatch);
        assert_eq!(classify("", &matched("PNG"), 10), Status::Mismatch);
    }

    #[test]
    fn no_match_is_unknown_not_corrupted() {
        assert_eq!(classify("TXT", &Detection::NoMatch, 10), Status::Unknown);
    }

    #[test]
    fn fault_is_corrupted() {
        assert_eq!(
            classify("PNG", &Detection::Faulted("I/O".into()), 10),
            Status::Corrupted
        );
    }
}
