//! Basic tests for restitch-core

use restitch_core::*;

#[test]
fn test_detect_reports_byte_ranges() {
    let overlap = detect("greatpeking", "pekingduckfordinner");
    assert_eq!(overlap.len, 6);
    assert_eq!(overlap.a_end - overlap.a_start, overlap.len);
    assert_eq!(overlap.b_end - overlap.b_start, overlap.len);
    assert_eq!(overlap.a_end, "greatpeking".len());
    assert_eq!(overlap.b_start, 0);
}

#[test]
fn test_merge_bridges_fragments() {
    assert_eq!(
        merge("greatpeking", "pekingduckfordinner").unwrap(),
        "greatpekingduckfordinner"
    );
    assert_eq!(merge("abcd", "cdef").unwrap(), "abcdef");
    assert_eq!(merge("cdef", "efgh").unwrap(), "cdefgh");
}

#[test]
fn test_merge_containment_both_directions() {
    assert_eq!(
        merge("greatpekingduckfordinner", "greatpeking").unwrap(),
        "greatpekingduckfordinner"
    );
    assert_eq!(
        merge("duck", "pekingduckfordinner").unwrap(),
        "pekingduckfordinner"
    );
}

#[test]
fn test_disjoint_fragments_do_not_merge() {
    assert!(detect("on", "and").is_none());
    assert_eq!(merge("on", "and"), Err(CoreError::EmptyOverlap));
}

#[test]
fn test_single_byte_bridge() {
    let overlap = detect("ab", "bc");
    assert_eq!(overlap.len, 1);
    assert_eq!(merge("ab", "bc").unwrap(), "abc");
}

#[test]
fn test_multibyte_fragments() {
    // Offsets are byte offsets; the shared region is one character but
    // three bytes of UTF-8.
    let overlap = detect("さくら猫", "猫さくら咲く");
    assert_eq!(overlap.len, "猫".len());
    assert_eq!(
        merge("さくら猫", "猫さくら咲く").unwrap(),
        "さくら猫さくら咲く"
    );

    let overlap = detect("great桜", "桜duck");
    assert_eq!(overlap.len, "桜".len());
    assert_eq!(merge("great桜", "桜duck").unwrap(), "great桜duck");
}

#[test]
fn test_geometry_names_match_shapes() {
    let overlap = detect("abcd", "cdef");
    assert_eq!(overlap.classify(4, 4), Some(Geometry::SuffixPrefix));

    let overlap = detect("abcd", "abcd");
    assert_eq!(overlap.classify(4, 4), Some(Geometry::ContainsB));
}
