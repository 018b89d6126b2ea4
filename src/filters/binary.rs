//! Binary file filtering

use super::{Candidate, Filter, FilterDecision};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected
const SNIFF_LEN: u64 = 512;

/// Sniff the first bytes of a file for binary content
///
/// Any NUL byte in the window marks the file binary, as does a binary
/// signature recognised by `content_inspector`.
///
/// Unreadable and empty files count as text; a read failure surfaces later
/// when the file content is loaded.
pub fn is_binary(path: &Path) -> bool {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            tracing::trace!("Cannot open {} for sniffing: {}", path.display(), e);
            return false;
        }
    };

    let mut head = Vec::with_capacity(SNIFF_LEN as usize);
    if let Err(e) = file.take(SNIFF_LEN).read_to_end(&mut head) {
        tracing::trace!("Cannot read {} for sniffing: {}", path.display(), e);
        return false;
    }

    // A BOM makes content_inspector report text even when NULs follow
    head.contains(&0) || (!head.is_empty() && content_inspector::inspect(&head).is_binary())
}

/// Skips files whose leading bytes look binary
pub struct BinaryFilter;

impl Filter for BinaryFilter {
    fn filter(&self, candidate: &Candidate<'_>) -> FilterDecision {
        if is_binary(candidate.path) {
            FilterDecision::Skip("binary file")
        } else {
            FilterDecision::Process
        }
    }

    fn name(&self) -> &'static str {
        "BinaryFilter"
    }
}
