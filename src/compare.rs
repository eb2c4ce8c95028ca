//! Orderings used to rank heap elements.
//!
//! A comparator is a strict weak ordering: `less(a, b)` is true when `a` is
//! better than `b`, i.e. `a` should be kept in preference to `b`. The bounded
//! heap keeps the elements that are the "smallest" under this ordering.

/// Strict weak ordering over `T`
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` ranks strictly before (is better than) `b`
    fn less(&self, a: &T, b: &T) -> bool;
}

/// The natural `<` ordering: keeps the smallest values
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<T: PartialOrd + ?Sized> Compare<T> for NaturalOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// The reversed ordering: keeps the largest values
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseOrder;

impl<T: PartialOrd + ?Sized> Compare<T> for ReverseOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }
}

/// Wraps a closure `Fn(&T, &T) -> bool`
#[derive(Clone, Copy)]
pub struct FnCompare<F>(pub F);

impl<T, F> Compare<T> for FnCompare<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

/// Orders elements by a key extracted with a closure (smallest key first)
#[derive(Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Compare<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a) < (self.0)(b)
    }
}

impl<F> std::fmt::Debug for FnCompare<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnCompare")
    }
}

impl<F> std::fmt::Debug for ByKey<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ByKey")
    }
}
