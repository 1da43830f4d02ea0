//! Iso optics for isomorphic type conversions.
//!
//! An Iso (isomorphism) is a reversible pair of pure conversions between two
//! value types where no information is lost. Isos compose with each other and
//! can be threaded behind a lens via
//! [`Lens::map_through`](super::Lens::map_through).
//!
//! # Laws
//!
//! Every Iso must satisfy two laws:
//!
//! 1. **`GetReverseGet` Law**: Converting forward then backward yields the
//!    original.
//!    ```text
//!    iso.reverse_get(iso.get(source)) == source
//!    ```
//!
//! 2. **`ReverseGetGet` Law**: Converting backward then forward yields the
//!    original.
//!    ```text
//!    iso.get(iso.reverse_get(value)) == value
//!    ```
//!
//! The laws are the caller's responsibility and are never verified at
//! runtime. A law-breaking Iso degrades to wrong values downstream; it never
//! causes a panic.
//!
//! # Examples
//!
//! ```
//! use relens::optics::{Iso, FunctionIso};
//!
//! // String <-> Vec<char> conversion
//! let string_chars_iso = FunctionIso::new(
//!     |s: String| s.chars().collect::<Vec<_>>(),
//!     |chars: Vec<char>| chars.into_iter().collect::<String>(),
//! );
//!
//! let chars = string_chars_iso.get("hello".to_string());
//! assert_eq!(chars, vec!['h', 'e', 'l', 'l', 'o']);
//!
//! let back = string_chars_iso.reverse_get(chars);
//! assert_eq!(back, "hello");
//! ```

use std::marker::PhantomData;

/// An Iso represents an isomorphism between two types.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
///
/// # Laws
///
/// 1. **`GetReverseGet` Law**: `iso.reverse_get(iso.get(source)) == source`
/// 2. **`ReverseGetGet` Law**: `iso.get(iso.reverse_get(value)) == value`
pub trait Iso<S, A> {
    /// Converts from the source type to the target type.
    fn get(&self, source: S) -> A;

    /// Converts from the target type back to the source type.
    fn reverse_get(&self, value: A) -> S;

    /// Returns the dual Iso, with the two directions swapped.
    ///
    /// # Example
    ///
    /// ```
    /// use relens::optics::{Iso, FunctionIso};
    ///
    /// let string_chars_iso = FunctionIso::new(
    ///     |s: String| s.chars().collect::<Vec<_>>(),
    ///     |chars: Vec<char>| chars.into_iter().collect::<String>(),
    /// );
    ///
    /// let chars_string_iso = string_chars_iso.reverse();
    /// assert_eq!(chars_string_iso.get(vec!['h', 'i']), "hi");
    /// ```
    fn reverse(self) -> ReversedIso<Self>
    where
        Self: Sized,
    {
        ReversedIso::new(self)
    }

    /// Applies a function to the converted value and converts back.
    ///
    /// Equivalent to `iso.reverse_get(function(iso.get(source)))`.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let converted = self.get(source);
        self.reverse_get(function(converted))
    }

    /// Composes this Iso with another Iso converting onward from `A`.
    ///
    /// # Example
    ///
    /// ```
    /// use relens::optics::{Iso, FunctionIso};
    ///
    /// let widen = FunctionIso::new(|x: i32| i64::from(x), |x: i64| x as i32);
    /// let stringify = FunctionIso::new(
    ///     |x: i64| x.to_string(),
    ///     |s: String| s.parse::<i64>().unwrap(),
    /// );
    ///
    /// let composed = widen.compose(stringify);
    /// assert_eq!(composed.get(42), "42");
    /// assert_eq!(composed.reverse_get("42".to_string()), 42);
    /// ```
    fn compose<B, I>(self, other: I) -> ComposedIso<Self, I, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        ComposedIso::new(self, other)
    }
}

/// An Iso implemented using get and `reverse_get` functions.
///
/// This is the most common way to create an Iso. The [`iso!`](crate::iso)
/// macro generates a `FunctionIso` internally.
pub struct FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    get_function: G,
    reverse_get_function: Rg,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, Rg> FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    /// Creates a new `FunctionIso` from a forward and a backward conversion.
    #[must_use]
    pub const fn new(get_function: G, reverse_get_function: Rg) -> Self {
        Self {
            get_function,
            reverse_get_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, Rg> Iso<S, A> for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    fn get(&self, source: S) -> A {
        (self.get_function)(source)
    }

    fn reverse_get(&self, value: A) -> S {
        (self.reverse_get_function)(value)
    }
}

impl<S, A, G, Rg> Clone for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A + Clone,
    Rg: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            get_function: self.get_function.clone(),
            reverse_get_function: self.reverse_get_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, Rg> std::fmt::Debug for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionIso")
            .finish_non_exhaustive()
    }
}

/// A reversed Iso that swaps the direction of conversion.
pub struct ReversedIso<I> {
    inner: I,
}

impl<I> ReversedIso<I> {
    /// Creates a new `ReversedIso` from an Iso.
    #[must_use]
    pub const fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<S, A, I> Iso<A, S> for ReversedIso<I>
where
    I: Iso<S, A>,
{
    fn get(&self, source: A) -> S {
        self.inner.reverse_get(source)
    }

    fn reverse_get(&self, value: S) -> A {
        self.inner.get(value)
    }
}

impl<I: Clone> Clone for ReversedIso<I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<I: std::fmt::Debug> std::fmt::Debug for ReversedIso<I> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ReversedIso")
            .field("inner", &self.inner)
            .finish()
    }
}

/// A composed Iso that chains two Isos together.
///
/// # Type Parameters
///
/// - `I1`: The type of the first Iso
/// - `I2`: The type of the second Iso
/// - `A`: The intermediate type (target of I1, source of I2)
pub struct ComposedIso<I1, I2, A> {
    first: I1,
    second: I2,
    _marker: PhantomData<A>,
}

impl<I1, I2, A> ComposedIso<I1, I2, A> {
    /// Creates a new `ComposedIso` from two Isos.
    #[must_use]
    pub const fn new(first: I1, second: I2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, I1, I2> Iso<S, B> for ComposedIso<I1, I2, A>
where
    I1: Iso<S, A>,
    I2: Iso<A, B>,
{
    fn get(&self, source: S) -> B {
        let intermediate = self.first.get(source);
        self.second.get(intermediate)
    }

    fn reverse_get(&self, value: B) -> S {
        let intermediate = self.second.reverse_get(value);
        self.first.reverse_get(intermediate)
    }
}

impl<I1: Clone, I2: Clone, A> Clone for ComposedIso<I1, I2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<I1: std::fmt::Debug, I2: std::fmt::Debug, A> std::fmt::Debug for ComposedIso<I1, I2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedIso")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates an Iso from get and `reverse_get` functions.
///
/// # Example
///
/// ```
/// use relens::optics::Iso;
/// use relens::iso;
///
/// let swap = iso!(
///     |(a, b): (i32, String)| (b, a),
///     |(b, a): (String, i32)| (a, b)
/// );
///
/// let swapped = swap.get((42, "hello".to_string()));
/// assert_eq!(swapped, ("hello".to_string(), 42));
/// ```
#[macro_export]
macro_rules! iso {
    ($get:expr, $reverse_get:expr) => {
        $crate::optics::FunctionIso::new($get, $reverse_get)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_iso_round_trip() {
        let string_chars_iso = FunctionIso::new(
            |s: String| s.chars().collect::<Vec<_>>(),
            |chars: Vec<char>| chars.into_iter().collect::<String>(),
        );

        let chars = string_chars_iso.get("hello".to_string());
        assert_eq!(chars, vec!['h', 'e', 'l', 'l', 'o']);
        assert_eq!(string_chars_iso.reverse_get(chars), "hello");
    }

    #[test]
    fn test_reversed_iso_swaps_directions() {
        let string_chars_iso = FunctionIso::new(
            |s: String| s.chars().collect::<Vec<_>>(),
            |chars: Vec<char>| chars.into_iter().collect::<String>(),
        );

        let chars_string_iso = string_chars_iso.reverse();
        assert_eq!(chars_string_iso.get(vec!['h', 'i']), "hi");
        assert_eq!(chars_string_iso.reverse_get("hi".to_string()), vec!['h', 'i']);
    }

    #[test]
    fn test_iso_modify() {
        let string_chars_iso = FunctionIso::new(
            |s: String| s.chars().collect::<Vec<_>>(),
            |chars: Vec<char>| chars.into_iter().collect::<String>(),
        );

        let reversed = string_chars_iso.modify("hello".to_string(), |mut chars| {
            chars.reverse();
            chars
        });
        assert_eq!(reversed, "olleh");
    }

    #[test]
    fn test_iso_compose() {
        #[allow(clippy::cast_possible_truncation)]
        let widen = FunctionIso::new(|x: i32| i64::from(x), |x: i64| x as i32);
        let stringify = FunctionIso::new(
            |x: i64| x.to_string(),
            |s: String| s.parse::<i64>().unwrap(),
        );

        let composed = widen.compose(stringify);
        assert_eq!(composed.get(42), "42");
        assert_eq!(composed.reverse_get("42".to_string()), 42);
    }

    #[test]
    fn test_iso_macro() {
        let swap = iso!(|(a, b): (i32, String)| (b, a), |(b, a): (String, i32)| (
            a, b
        ));

        assert_eq!(
            swap.get((42, "hello".to_string())),
            ("hello".to_string(), 42)
        );
    }
}
