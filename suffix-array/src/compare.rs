use std::cmp::Ordering;

/// How the end of a pattern compares against a suffix that has not ended yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternEnd {
    /// The pattern ends where its symbols end; a suffix extending it is not less.
    Exact,
    /// The pattern is followed by a symbol greater than every real symbol.
    Unbounded,
}

/// Returns `true` if `suffix < pattern`, comparing only up to the shorter of the two.
///
/// With [`PatternEnd::Exact`], a suffix that is a strict prefix of `pattern` is less,
/// and a suffix that has `pattern` as a prefix is not.
/// With [`PatternEnd::Unbounded`], both of those are less, so the suffixes less than
/// the pattern are exactly the ones that come before the block starting with it,
/// together with the block itself.
pub fn is_suffix_less<T: Ord>(suffix: &[T], pattern: &[T], end: PatternEnd) -> bool {
    for (s, p) in suffix.iter().zip(pattern) {
        match s.cmp(p) {
            Ordering::Less => return true,
            Ordering::Greater => return false,
            Ordering::Equal => {}
        }
    }
    match end {
        PatternEnd::Exact => suffix.len() < pattern.len(),
        PatternEnd::Unbounded => true,
    }
}
