//! Key projections

/// Maps an element to the key it is compared by.
///
/// A projection may be evaluated more than once for the same element, so it
/// should be pure.
pub trait Projection<T> {
    type Key;

    fn project(&self, item: T) -> Self::Key;
}

/// Passes elements through unchanged, the default projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T> Projection<T> for Identity {
    type Key = T;

    #[inline]
    fn project(&self, item: T) -> T {
        item
    }
}

impl<T, K, F> Projection<T> for F
where
    F: Fn(T) -> K,
{
    type Key = K;

    #[inline]
    fn project(&self, item: T) -> K {
        self(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(Identity.project(7), 7);
        let word = "kiwi";
        assert_eq!(Identity.project(&word), &"kiwi");
    }

    #[test]
    fn test_closure_projection() {
        let len = |s: &&str| s.len();
        assert_eq!(len.project(&"banana"), 6);

        let abs = |x: &i32| x.abs();
        assert_eq!(abs.project(&-4), 4);
    }
}
