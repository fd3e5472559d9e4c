use std::marker::PhantomData;

/// Order of a [`BinaryHeap`](crate::BinaryHeap).
///
/// `precedes(a, b)` means `a` must be popped before `b`. It has to be a strict weak order.
pub trait Compare<T> {
    fn precedes(&self, a: &T, b: &T) -> bool;
}

/// Smallest element first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

/// Largest element first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord> Compare<T> for MinFirst {
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: Ord> Compare<T> for MaxFirst {
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Smallest key first, where the key is computed by `F`.
pub struct ByKey<T, K, F> {
    f: F,
    _marker: PhantomData<fn(&T) -> K>,
}

impl<T, K, F> ByKey<T, K, F>
where
    F: Fn(&T) -> K,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<T, K: Ord, F: Fn(&T) -> K> Compare<T> for ByKey<T, K, F> {
    fn precedes(&self, a: &T, b: &T) -> bool {
        (self.f)(a) < (self.f)(b)
    }
}

/// Any `Fn(&T, &T) -> bool` used as the precedence predicate.
#[derive(Debug, Clone, Copy)]
pub struct FnCompare<F>(pub F);

impl<T, F: Fn(&T, &T) -> bool> Compare<T> for FnCompare<F> {
    fn precedes(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}
