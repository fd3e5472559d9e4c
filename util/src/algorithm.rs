use std::ops::{Add, Bound, Div, Mul, RangeBounds, Rem, Sub};

pub trait Integer:
    Sized
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Ord
    + Copy
{
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl Integer for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const TWO: Self = 2;
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize);
impl_integer!(u8, u16, u32, u64, u128, usize);

/// 戻り値を`(l, r)`とすると`l..r`が探索範囲となる。
fn bounds<T: Integer>(range: impl RangeBounds<T>) -> (T, T) {
    let l = match range.start_bound() {
        Bound::Included(&l) => l,
        Bound::Excluded(&l) => l + T::ONE,
        Bound::Unbounded => T::MIN / T::TWO,
    };
    let r = match range.end_bound() {
        Bound::Included(&r) => r + T::ONE,
        Bound::Excluded(&r) => r,
        Bound::Unbounded => T::MAX / T::TWO,
    };
    (l, r)
}

/// `range`が`l..r`で、返り値を`i`とすると、
/// `(l..i).contains(j)`となる`j`において、`f(j)`が`true`となり、
/// `(i..r).contains(j)`となる`j`において、`f(j)`が`false`となる。
///
/// `f`は`l..r`の外では呼ばれない。`l >= r`なら`f`を呼ばずに`l`を返す。
pub fn upper_bound<T: Integer>(range: impl RangeBounds<T>, mut f: impl FnMut(T) -> bool) -> T {
    let (mut l, mut r) = bounds(range);
    while l < r {
        let m = l + (r - l) / T::TWO;
        if f(m) {
            l = m + T::ONE;
        } else {
            r = m;
        }
    }
    l
}

/// `range`が`l..r`で、返り値を`i`とすると、
/// `(l..i).contains(j)`となる`j`において、`f(j)`が`false`となり、
/// `(i..r).contains(j)`となる`j`において、`f(j)`が`true`となる。
pub fn lower_bound<T: Integer>(range: impl RangeBounds<T>, mut f: impl FnMut(T) -> bool) -> T {
    upper_bound(range, |x| !f(x))
}
