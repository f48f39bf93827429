//! Anchored overlap detection
//!
//! The detector looks for the longest run of equal bytes that represents a
//! true prefix/suffix relationship between the two inputs. A run qualifies
//! only when it is anchored: it must reach the end of at least one input,
//! and it always begins at the head of one of them because every candidate
//! is seeded where the other string's first byte occurs. A run that stops
//! strictly inside both strings is a coincidental internal repeat, like
//! "on" inside "on and on", and is discarded no matter how long it is.

use crate::types::Overlap;

/// Find the longest anchored match between `a` and `b`
///
/// Two scans feed the candidate set. The first seeds a match at every
/// occurrence of `b`'s first byte inside `a` and extends forward; such a
/// run is kept when it consumes all of `b` or runs to the end of `a`. The
/// second scan swaps the roles, seeding at occurrences of `a`'s first byte
/// inside `b`. The strictly longest retained candidate wins; on equal
/// lengths the first one found is kept.
///
/// Offsets in the returned descriptor are byte offsets into the original
/// inputs. Equal substrings of well-formed UTF-8 compare equal bytewise,
/// and every reported start offset falls on a character boundary because
/// matches are seeded on leading bytes.
pub fn detect(a: &str, b: &str) -> Overlap {
    let a = a.as_bytes();
    let b = b.as_bytes();

    // An empty fragment has no boundary to anchor to.
    if a.is_empty() || b.is_empty() {
        return Overlap::NONE;
    }

    let mut best: Option<Overlap> = None;

    // Runs starting mid-a: must consume all of b or reach the end of a.
    for i in 0..a.len() {
        if a[i] != b[0] {
            continue;
        }
        let run = run_len(&a[i..], b);
        let (a_end, b_end) = (i + run, run);
        if a_end < a.len() && b_end < b.len() {
            // Stopped strictly inside both inputs: internal repeat.
            continue;
        }
        if run > best.map_or(0, |o| o.len) {
            best = Some(Overlap::new(i, a_end, 0, b_end));
        }
    }

    // Runs starting mid-b: must consume all of a or reach the end of b.
    for j in 0..b.len() {
        if b[j] != a[0] {
            continue;
        }
        let run = run_len(a, &b[j..]);
        let (a_end, b_end) = (run, j + run);
        if a_end < a.len() && b_end < b.len() {
            continue;
        }
        if run > best.map_or(0, |o| o.len) {
            best = Some(Overlap::new(0, a_end, j, b_end));
        }
    }

    best.unwrap_or(Overlap::NONE)
}

/// Length of the common prefix of two byte slices
fn run_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
