use std::iter::FusedIterator;

use crate::BinaryHeap;

/// Merges ascending iterators into one ascending iterator.
pub struct KWayMerge<I: Iterator> {
    sources: Vec<I>,
    heads: BinaryHeap<(I::Item, usize)>,
}

impl<I> KWayMerge<I>
where
    I: Iterator,
    I::Item: Ord,
{
    pub fn new<S>(sources: S) -> Self
    where
        S: IntoIterator,
        S::Item: IntoIterator<IntoIter = I>,
    {
        let mut sources = sources
            .into_iter()
            .map(IntoIterator::into_iter)
            .collect::<Vec<_>>();
        let heads = sources
            .iter_mut()
            .enumerate()
            .filter_map(|(k, source)| source.next().map(|x| (x, k)))
            .collect();
        Self { sources, heads }
    }
}

impl<I> Iterator for KWayMerge<I>
where
    I: Iterator,
    I::Item: Ord,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let (x, k) = self.heads.pop()?;
        if let Some(next) = self.sources[k].next() {
            self.heads.push((next, k));
        }
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sources
            .iter()
            .map(Iterator::size_hint)
            .fold((self.heads.len(), Some(self.heads.len())), |(lo, hi), (l, h)| {
                (
                    lo.saturating_add(l),
                    hi.zip(h).and_then(|(a, b)| a.checked_add(b)),
                )
            })
    }
}

impl<I> FusedIterator for KWayMerge<I>
where
    I: FusedIterator,
    I::Item: Ord,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_sorted_lists() {
        let lists = vec![vec![1, 4, 9], vec![], vec![2, 3, 10, 11], vec![4]];
        let merged = KWayMerge::new(lists).collect::<Vec<_>>();
        assert_eq!(merged, [1, 2, 3, 4, 4, 9, 10, 11]);
    }

    #[test]
    fn merge_tagged_occurrences() {
        let lists = [vec![0, 7], vec![0, 3, 5, 7, 10], vec![4]];
        let tagged = lists
            .into_iter()
            .enumerate()
            .map(|(k, list)| list.into_iter().map(move |x| (x, k)));
        let merged = KWayMerge::new(tagged).collect::<Vec<_>>();
        assert_eq!(
            merged,
            [(0, 0), (0, 1), (3, 1), (4, 2), (5, 1), (7, 0), (7, 1), (10, 1)]
        );
    }

    #[test]
    fn size_hint() {
        let merge = KWayMerge::new(vec![0..3, 5..7, 7..7]);
        assert_eq!(merge.size_hint(), (5, Some(5)));
        assert_eq!(merge.count(), 5);
        assert_eq!(KWayMerge::new(Vec::<std::ops::Range<u8>>::new()).next(), None);
    }
}
