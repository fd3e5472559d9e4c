use std::ops::{Deref, Range};

use binary_heap::merge::KWayMerge;
use compare::{is_suffix_less, PatternEnd};
use util::algorithm::upper_bound;

pub mod compare;
mod error;

pub use error::SuffixArrayError;

/// Suffix array of an owned text.
///
/// Dereferences to the sorted suffix start offsets, so `sa[rank]` is the start of the
/// `rank`-th smallest suffix and `sa.len()` is the length of the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SuffixArray<T> {
    text: Box<[T]>,
    array: Box<[usize]>,
}

impl<T> Deref for SuffixArray<T> {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.array
    }
}

impl<T> SuffixArray<T> {
    pub fn text(&self) -> &[T] {
        &self.text
    }

    /// Start offset of the `rank`-th smallest suffix.
    pub fn offset(&self, rank: usize) -> Result<usize, SuffixArrayError> {
        self.array
            .get(rank)
            .copied()
            .ok_or(SuffixArrayError::RankOutOfRange {
                rank,
                len: self.array.len(),
            })
    }

    /// The `rank`-th smallest suffix.
    pub fn suffix(&self, rank: usize) -> Result<&[T], SuffixArrayError> {
        self.offset(rank).map(|start| &self.text[start..])
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.array.into_vec()
    }

    pub fn into_parts(self) -> (Box<[T]>, Box<[usize]>) {
        (self.text, self.array)
    }
}

impl<T: Ord> SuffixArray<T> {
    /// Builds the suffix array by prefix doubling in `O(n log n)`.
    pub fn new(text: impl Into<Box<[T]>>) -> Self {
        let text = text.into();
        let array = doubling(&text).into_boxed_slice();
        Self { text, array }
    }

    /// Builds the suffix array by sorting the suffixes directly. `O(n^2 log n)` in the worst case.
    pub fn new_simple(text: impl Into<Box<[T]>>) -> Self {
        let text = text.into();
        let mut array = (0..text.len()).collect::<Box<[_]>>();
        array.sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]));
        Self { text, array }
    }

    /// Ranks of the suffixes that start with `pattern`.
    ///
    /// `sa[sa.range(pattern)]` are the start offsets of every occurrence of `pattern`,
    /// in suffix order. An empty pattern matches every suffix.
    pub fn range(&self, pattern: &[T]) -> Range<usize> {
        let len = self.array.len();
        if pattern.is_empty() {
            return 0..len;
        }
        let lo = upper_bound(0..len, |rank| {
            is_suffix_less(self.suffix_at(rank), pattern, PatternEnd::Exact)
        });
        let hi = upper_bound(lo..len, |rank| {
            is_suffix_less(self.suffix_at(rank), pattern, PatternEnd::Unbounded)
        });
        lo..hi
    }

    /// Start offsets of the occurrences of `pattern`, in suffix order.
    pub fn occurrences(&self, pattern: &[T]) -> &[usize] {
        &self.array[self.range(pattern)]
    }

    /// Start offsets of the occurrences of `pattern`, in ascending order.
    pub fn positions(&self, pattern: &[T]) -> Vec<usize> {
        let mut positions = self.occurrences(pattern).to_vec();
        positions.sort_unstable();
        positions
    }

    /// Occurrences of several patterns merged in text order.
    ///
    /// Each item is `(offset, i)` where `patterns[i]` occurs at `offset`. Items with the
    /// same offset are ordered by `i`.
    pub fn merged_positions<'p, I>(&self, patterns: I) -> Vec<(usize, usize)>
    where
        T: 'p,
        I: IntoIterator<Item = &'p [T]>,
    {
        let lists = patterns.into_iter().enumerate().map(|(i, pattern)| {
            self.positions(pattern)
                .into_iter()
                .map(move |offset| (offset, i))
        });
        KWayMerge::new(lists).collect()
    }

    pub fn count(&self, pattern: &[T]) -> usize {
        self.range(pattern).len()
    }

    pub fn contains(&self, pattern: &[T]) -> bool {
        !self.range(pattern).is_empty()
    }

    fn suffix_at(&self, rank: usize) -> &[T] {
        &self.text[self.array[rank]..]
    }
}

impl<T: Ord> From<Vec<T>> for SuffixArray<T> {
    fn from(text: Vec<T>) -> Self {
        Self::new(text)
    }
}

impl<T: Ord + Clone> From<&[T]> for SuffixArray<T> {
    fn from(text: &[T]) -> Self {
        Self::new(text)
    }
}

impl<T: Ord> FromIterator<T> for SuffixArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Box<[_]>>())
    }
}

/// Sorts the suffix start offsets of `text`.
///
/// After the pass with window `w`, `rank[i]` is the position in `order` of the first
/// offset whose first `w` symbols (end of text counting as the smallest symbol) equal
/// those of `i`. Ranks double as counting-sort bucket starts.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
fn doubling<T: Ord>(text: &[T]) -> Vec<usize> {
    let n = text.len();
    let mut order = (0..n).collect::<Vec<_>>();
    order.sort_by(|&a, &b| text[a].cmp(&text[b]));

    let mut rank = vec![0; n];
    let mut classes = n.min(1);
    for p in 1..n {
        let (prev, cur) = (order[p - 1], order[p]);
        rank[cur] = if text[prev] == text[cur] {
            rank[prev]
        } else {
            classes += 1;
            p
        };
    }

    let mut next_order = vec![0; n];
    let mut next_rank = vec![0; n];
    let mut bucket = vec![0; n];
    let mut window = 1;
    while window < n && classes < n {
        for (start, b) in bucket.iter_mut().enumerate() {
            *b = start;
        }
        // offsets without a second half come first in their bucket
        for i in (n - window..n).rev() {
            next_order[bucket[rank[i]]] = i;
            bucket[rank[i]] += 1;
        }
        for &j in &order {
            if let Some(i) = j.checked_sub(window) {
                next_order[bucket[rank[i]]] = i;
                bucket[rank[i]] += 1;
            }
        }

        let key = |i: usize| (rank[i], rank.get(i + window).copied());
        classes = 1;
        next_rank[next_order[0]] = 0;
        for p in 1..n {
            let (prev, cur) = (next_order[p - 1], next_order[p]);
            next_rank[cur] = if key(prev) == key(cur) {
                next_rank[prev]
            } else {
                classes += 1;
                p
            };
        }

        std::mem::swap(&mut order, &mut next_order);
        std::mem::swap(&mut rank, &mut next_rank);
        window *= 2;
        tracing::trace!(window, classes, "doubling pass");
    }
    order
}
