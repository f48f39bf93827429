//! Fragment merging
//!
//! Given two fragments and the anchored overlap between them, exactly one
//! of four geometries applies: one fragment is contained in the other
//! (either way around), or the match bridges the end of one fragment and
//! the start of the other. Containment makes the smaller fragment
//! redundant; bridging splices the non-shared prefix of one fragment onto
//! the whole of the other.

use crate::{
    error::{CoreError, Result},
    overlap::detect,
    types::Overlap,
};

/// How two fragments fit together at their matched region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// The match covers all of the second fragment: it is redundant
    ContainsB,
    /// The match covers all of the first fragment: it is redundant
    ContainedInB,
    /// The match runs to the end of the first fragment and starts at the
    /// head of the second
    SuffixPrefix,
    /// The match runs to the end of the second fragment and starts at the
    /// head of the first
    PrefixSuffix,
}

impl Overlap {
    /// Classify this descriptor against the fragment lengths it was
    /// computed for
    ///
    /// Returns `None` for a zero-length descriptor and for any positive
    /// descriptor that fits none of the anchored cases. The detector never
    /// produces the latter; callers treat it as a contract violation.
    pub fn classify(&self, a_len: usize, b_len: usize) -> Option<Geometry> {
        if self.is_none() {
            None
        } else if self.b_start == 0 && self.b_end == b_len {
            Some(Geometry::ContainsB)
        } else if self.a_start == 0 && self.a_end == a_len {
            Some(Geometry::ContainedInB)
        } else if self.a_end == a_len && self.b_start == 0 && self.b_end > 0 {
            Some(Geometry::SuffixPrefix)
        } else if self.b_end == b_len && self.a_start == 0 && self.a_end > 0 {
            Some(Geometry::PrefixSuffix)
        } else {
            None
        }
    }
}

/// Merge two fragments along a previously computed overlap descriptor
///
/// Fails with [`CoreError::EmptyOverlap`] when the descriptor reports no
/// usable overlap, and with [`CoreError::InvalidGeometry`] when a positive
/// descriptor fits none of the anchored cases. The detector never produces
/// the latter, so that branch never returns a partial or corrupt string.
pub fn merge_with(a: &str, b: &str, overlap: &Overlap) -> Result<String> {
    if overlap.is_none() {
        return Err(CoreError::EmptyOverlap);
    }
    match overlap.classify(a.len(), b.len()) {
        Some(Geometry::ContainsB) => Ok(a.to_string()),
        Some(Geometry::ContainedInB) => Ok(b.to_string()),
        Some(Geometry::SuffixPrefix) => Ok(format!("{}{}", &a[..overlap.a_start], b)),
        Some(Geometry::PrefixSuffix) => Ok(format!("{}{}", &b[..overlap.b_start], a)),
        None => Err(CoreError::InvalidGeometry {
            len: overlap.len,
            a_start: overlap.a_start,
            a_end: overlap.a_end,
            b_start: overlap.b_start,
            b_end: overlap.b_end,
        }),
    }
}

/// Detect the overlap between two fragments and merge them along it
pub fn merge(a: &str, b: &str) -> Result<String> {
    merge_with(a, b, &detect(a, b))
}
