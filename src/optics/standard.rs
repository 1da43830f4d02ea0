//! Standard optics that are commonly used.

use super::{FunctionIso, Iso};

/// Creates an identity Iso that doesn't transform the value.
///
/// # Example
///
/// ```
/// use relens::optics::{Iso, iso_identity};
///
/// let identity_iso = iso_identity::<i32>();
///
/// assert_eq!(identity_iso.get(42), 42);
/// assert_eq!(identity_iso.reverse_get(42), 42);
/// ```
#[must_use]
pub fn iso_identity<T>() -> impl Iso<T, T> + Clone {
    FunctionIso::new(|x: T| x, |x: T| x)
}

/// Creates an Iso that swaps the elements of a tuple.
///
/// Converts `(A, B)` to `(B, A)` and vice versa.
///
/// # Example
///
/// ```
/// use relens::optics::{Iso, iso_swap};
///
/// let swap_iso = iso_swap::<i32, String>();
///
/// let swapped = swap_iso.get((42, "hello".to_string()));
/// assert_eq!(swapped, ("hello".to_string(), 42));
/// ```
#[must_use]
pub fn iso_swap<A, B>() -> impl Iso<(A, B), (B, A)> + Clone {
    FunctionIso::new(|(a, b): (A, B)| (b, a), |(b, a): (B, A)| (a, b))
}
