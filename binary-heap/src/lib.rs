use thiserror::Error;

pub mod compare;
pub mod merge;

pub use compare::{ByKey, Compare, FnCompare, MaxFirst, MinFirst};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("pop from an empty heap")]
    Empty,
}

/// Array-backed binary heap ordered by `C`.
///
/// For every node `i`, no child of `i` precedes `i` under `C`.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T, C = MinFirst> {
    data: Vec<T>,
    compare: C,
}

impl<T: Ord> BinaryHeap<T, MinFirst> {
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            compare: MinFirst,
        }
    }
}

impl<T, C> BinaryHeap<T, C> {
    pub const fn with_compare(compare: C) -> Self {
        Self {
            data: Vec::new(),
            compare,
        }
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Elements in heap order (not sorted).
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    pub fn pop(&mut self) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        self.data.swap(0, last);
        let top = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        top
    }

    pub fn try_pop(&mut self) -> Result<T, HeapError> {
        self.pop().ok_or(HeapError::Empty)
    }

    /// Elements in the order `pop` would return them.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(x) = self.pop() {
            sorted.push(x);
        }
        sorted
    }

    fn from_vec_compare(data: Vec<T>, compare: C) -> Self {
        let mut heap = Self { data, compare };
        for i in (0..heap.data.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.compare.precedes(&self.data[i], &self.data[parent]) {
                break;
            }
            self.data.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child =
                if right < len && self.compare.precedes(&self.data[right], &self.data[left]) {
                    right
                } else {
                    left
                };
            if !self.compare.precedes(&self.data[child], &self.data[i]) {
                break;
            }
            self.data.swap(i, child);
            i = child;
        }
    }
}

impl<T, C: Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::with_compare(C::default())
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_compare(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.push(x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop() {
        let mut heap = BinaryHeap::new();
        heap.push(3);
        heap.push(3);
        heap.push(10);
        assert_eq!(heap.pop(), Some(3));
        assert_eq!(heap.pop(), Some(3));
        heap.push(45);
        heap.push(1);
        heap.push(3);
        assert_eq!(heap.pop(), Some(1));
        heap.push(10);
        heap.push(11);
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.peek(), Some(&3));
        assert_eq!(heap.pop(), Some(3));
        assert_eq!(heap.pop(), Some(10));
        assert_eq!(heap.pop(), Some(10));
        assert_eq!(heap.pop(), Some(11));
        assert_eq!(heap.pop(), Some(45));
        assert_eq!(heap.pop(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn empty() {
        let mut heap = BinaryHeap::<u32>::new();
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.try_pop(), Err(HeapError::Empty));
        heap.push(4);
        assert_eq!(heap.try_pop(), Ok(4));
        assert_eq!(heap.try_pop(), Err(HeapError::Empty));
        assert_eq!(HeapError::Empty.to_string(), "pop from an empty heap");
    }

    #[test]
    fn max_first() {
        let mut heap = BinaryHeap::with_compare(MaxFirst);
        heap.extend([5, 1, 8, 3, 9, 2]);
        assert_eq!(heap.pop(), Some(9));
        assert_eq!(heap.into_sorted_vec(), [8, 5, 3, 2, 1]);
    }

    #[test]
    fn closure_compare() {
        let heap = BinaryHeap::from_vec_compare(
            vec!["pear", "fig", "banana", "kiwi"],
            FnCompare(|a: &&str, b: &&str| a.len() > b.len()),
        );
        assert_eq!(heap.into_sorted_vec()[0], "banana");

        let mut heap = BinaryHeap::with_compare(ByKey::new(|p: &(u32, char)| p.1));
        heap.extend([(1, 'c'), (2, 'a'), (3, 'b')]);
        assert_eq!(heap.pop(), Some((2, 'a')));
        assert_eq!(heap.pop(), Some((3, 'b')));
    }

    #[test]
    fn collect() {
        let heap = [7, 2, 9, 4, 4, 0, 13, 1].into_iter().collect::<BinaryHeap<_>>();
        assert_eq!(heap.peek(), Some(&0));
        assert_eq!(heap.into_sorted_vec(), [0, 1, 2, 4, 4, 7, 9, 13]);
    }

    #[test]
    fn dijkstra() {
        use proconio::input;
        let s = "17 44
1 2 104
1 3 80
2 4 64
2 5 60
2 6 56
2 7 52
2 8 48
3 4 72
3 5 48
3 6 44
3 7 40
3 8 36
4 9 32
4 10 28
4 11 24
5 9 40
5 10 16
5 11 12
6 9 48
6 10 24
6 11 0
7 9 56
7 10 32
7 11 8
8 9 64
8 10 40
8 11 16
9 12 48
9 13 44
9 14 40
9 15 36
10 12 56
10 13 32
10 14 28
10 15 24
11 12 64
11 13 40
11 14 16
11 15 12
12 16 0
13 16 8
14 16 16
15 16 24
16 17 132";
        let source = proconio::source::line::LineSource::new(s.as_bytes());
        input! {
            from source,
            n: usize,
            m: usize,
            uvb: [(usize, usize, u64); m],
        }

        let mut adj_list = vec![vec![]; n];
        for &(u, v, b) in &uvb {
            adj_list[u - 1].push((v - 1, b));
        }

        let mut heap = BinaryHeap::new();
        heap.push((0u64, 0usize));
        let mut dist = vec![u64::MAX; n];
        dist[0] = 0;
        while let Some((w, node)) = heap.pop() {
            if w > dist[node] {
                continue;
            }
            for &(next, b) in &adj_list[node] {
                let next_w = w + b;
                if next_w < dist[next] {
                    dist[next] = next_w;
                    heap.push((next_w, next));
                }
            }
        }
        assert_eq!(
            dist[1..],
            [104, 80, 152, 128, 124, 120, 116, 168, 144, 124, 188, 164, 140, 136, 156, 288]
        );
    }
}
