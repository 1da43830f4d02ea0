//! Lens optics for focusing on struct fields.
//!
//! A Lens is a pure `(get, set)` pair for one field of an immutable
//! aggregate: `get` reads the field's value, `set` produces a whole new
//! aggregate with that field replaced. Lenses compose associatively, so deep
//! updates read like a single operation.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetPut Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(source.clone(), lens.get(&source)) == source
//!    ```
//!
//! 2. **PutGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value)) == value
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```
//!
//! The laws are assumed, not enforced.
//!
//! # Examples
//!
//! ```
//! use relens::optics::Lens;
//! use relens::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.get(&point), 10);
//!
//! let updated = x_lens.set(point, 100);
//! assert_eq!(updated.x, 100);
//! ```

use std::marker::PhantomData;

use super::iso::Iso;

/// A Lens focuses on a single field within a larger structure.
///
/// `get` returns the focused value by value: the algebra here is
/// value-to-value over immutable data, which is what lets a lens be mapped
/// through an [`Iso`] or substituted with a default without borrowing
/// gymnastics. Focused types are expected to be `Clone`.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused field)
///
/// # Laws
///
/// 1. **GetPut Law**: `lens.set(source.clone(), lens.get(&source)) == source`
/// 2. **PutGet Law**: `lens.get(&lens.set(source, value)) == value`
/// 3. **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
pub trait Lens<S, A> {
    /// Gets the focused value out of `source`.
    fn get(&self, source: &S) -> A;

    /// Sets the focused field to a new value, returning a new source.
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused field by applying a function to its current
    /// value.
    ///
    /// Equivalent to `set(source, function(get(&source)))`; `function` must
    /// be a pure function of the current value.
    ///
    /// # Example
    ///
    /// ```
    /// use relens::optics::Lens;
    /// use relens::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let doubled = x_lens.modify(Point { x: 10, y: 20 }, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let current = self.get(&source);
        self.set(source, function(current))
    }

    /// Composes this lens with another lens to focus on a nested field.
    ///
    /// Composition is associative: grouping three lenses either way yields
    /// the same get and set behavior.
    ///
    /// # Example
    ///
    /// ```
    /// use relens::optics::Lens;
    /// use relens::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String, city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, address: Address }
    ///
    /// let person_street = lens!(Person, address).compose(lens!(Address, street));
    ///
    /// let person = Person {
    ///     name: "Alice".to_string(),
    ///     address: Address {
    ///         street: "Main St".to_string(),
    ///         city: "Tokyo".to_string(),
    ///     },
    /// };
    ///
    /// assert_eq!(person_street.get(&person), "Main St");
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }

    /// Maps this lens through an isomorphism, changing the focused type.
    ///
    /// Reads convert forward through the iso; writes convert backward before
    /// being stored.
    ///
    /// # Example
    ///
    /// ```
    /// use relens::optics::{Iso, Lens};
    /// use relens::{iso, lens};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let widened = lens!(Point, x).map_through(iso!(
    ///     |x: i32| i64::from(x),
    ///     |x: i64| x as i32
    /// ));
    ///
    /// let point = Point { x: 10, y: 20 };
    /// assert_eq!(widened.get(&point), 10_i64);
    /// assert_eq!(widened.set(point, 100_i64).x, 100);
    /// ```
    fn map_through<B, I>(self, iso: I) -> IsoMappedLens<Self, I, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        IsoMappedLens::new(self, iso)
    }
}

/// A lens implemented using getter and setter functions.
///
/// This is the most direct way to create a lens. The [`lens!`](crate::lens)
/// macro generates a `FunctionLens` internally.
///
/// # Example
///
/// ```
/// use relens::optics::{Lens, FunctionLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// assert_eq!(x_lens.get(&Point { x: 10, y: 20 }), 10);
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens composed of two lenses.
///
/// Reads go outer-then-inner; writes rebuild the intermediate value through
/// the inner lens and store it back through the outer one.
///
/// # Type Parameters
///
/// - `L1`: The type of the outer lens
/// - `L2`: The type of the inner lens
/// - `A`: The intermediate type (target of L1, source of L2)
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens from an outer and an inner lens.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn get(&self, source: &S) -> B {
        let intermediate = self.first.get(source);
        self.second.get(&intermediate)
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source);
        let updated = self.second.set(intermediate, value);
        self.first.set(source, updated)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// A lens mapped through an isomorphism.
///
/// # Type Parameters
///
/// - `L`: The type of the underlying lens
/// - `I`: The type of the isomorphism
/// - `A`: The lens target type (source side of the iso)
pub struct IsoMappedLens<L, I, A> {
    lens: L,
    iso: I,
    _marker: PhantomData<A>,
}

impl<L, I, A> IsoMappedLens<L, I, A> {
    /// Creates a new `IsoMappedLens` from a lens and an isomorphism.
    #[must_use]
    pub const fn new(lens: L, iso: I) -> Self {
        Self {
            lens,
            iso,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L, I> Lens<S, B> for IsoMappedLens<L, I, A>
where
    L: Lens<S, A>,
    I: Iso<A, B>,
{
    fn get(&self, source: &S) -> B {
        self.iso.get(self.lens.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        self.lens.set(source, self.iso.reverse_get(value))
    }
}

impl<L: Clone, I: Clone, A> Clone for IsoMappedLens<L, I, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            iso: self.iso.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L: std::fmt::Debug, I: std::fmt::Debug, A> std::fmt::Debug for IsoMappedLens<L, I, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("IsoMappedLens")
            .field("lens", &self.lens)
            .field("iso", &self.iso)
            .finish()
    }
}

/// Creates a lens for a struct field.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// The field type must implement `Clone`; reads clone the field value and
/// writes move the rest of the struct unchanged.
///
/// # Example
///
/// ```
/// use relens::optics::Lens;
/// use relens::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(x_lens.get(&point), 10);
/// assert_eq!(x_lens.set(point, 100), Point { x: 100, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ty, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
