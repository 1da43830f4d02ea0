//! Field accessors and their adaptation into lenses.
//!
//! A [`Field`] is a raw named accessor for one field of an aggregate type: it
//! can read, and it knows the field's name. Pairing it with the owning type's
//! [shape descriptor](crate::shape::PropertyMapper) yields a [`FieldLens`],
//! a full get/set lens whose setter rebuilds the aggregate through its
//! reconstruction operation.
//!
//! Adaptation validates eagerly: [`Field::to_lens`] fails with a
//! [`LensError`] for fields the reconstruction operation cannot set (derived
//! fields) or for types with no usable reconstruction operation, so a
//! `FieldLens` in hand is safe to apply indefinitely.
//!
//! # Examples
//!
//! ```
//! use relens::optics::{Field, Lens};
//! use relens::shape::Shape;
//! use relens::field;
//!
//! #[derive(Clone, Debug, PartialEq, Shape)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = field!(Point, x).to_lens().unwrap();
//!
//! let point = Point { x: 1, y: 2 };
//! assert_eq!(x_lens.get(&point), 1);
//! assert_eq!(x_lens.set(point, 10), Point { x: 10, y: 2 });
//! ```

use std::any::Any;

use crate::shape::{FieldSetter, LensError, PropertyMapper, Shape};

use super::lens::{ComposedLens, Lens};

/// A raw, read-only accessor for one named field of an aggregate type.
///
/// Usually obtained from `#[derive(Fields)]` (`T::field_name_field()`) or the
/// [`field!`](crate::field) macro.
///
/// # Type Parameters
///
/// - `S`: The owning type
/// - `A`: The field type
pub struct Field<S, A> {
    name: &'static str,
    getter: fn(&S) -> &A,
}

impl<S, A> Field<S, A> {
    /// Creates a new field accessor from a name and a borrowing getter.
    ///
    /// `name` must be the field's declared name; it is how the shape
    /// descriptor locates the field among the reconstruction parameters.
    #[must_use]
    pub const fn new(name: &'static str, getter: fn(&S) -> &A) -> Self {
        Self { name, getter }
    }

    /// The field's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Reads the field's value out of `source`.
    pub fn get(&self, source: &S) -> A
    where
        A: Clone,
    {
        (self.getter)(source).clone()
    }
}

impl<S, A> Field<S, A>
where
    S: Shape,
    A: Any + Clone,
{
    /// Adapts this field accessor into a full lens.
    ///
    /// # Errors
    ///
    /// Returns a [`LensError`] if `S` has no usable reconstruction operation,
    /// or if this field is not one of its parameters, or if the declared
    /// field type disagrees with `A`. A returned `Ok` lens can never fail.
    pub fn to_lens(self) -> Result<FieldLens<S, A>, LensError> {
        let mapper = PropertyMapper::<S>::for_type()?;
        let setter = mapper.setter_for::<A>(self.name)?;
        Ok(FieldLens {
            name: self.name,
            getter: self.getter,
            setter,
        })
    }

    /// One-shot structural update through this field, without building a
    /// lens first.
    ///
    /// Convenient for a single write; for repeated writes build the lens once
    /// via [`Field::to_lens`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`Field::to_lens`].
    pub fn set(&self, source: S, value: A) -> Result<S, LensError> {
        PropertyMapper::<S>::for_type()?.copy_with(&source, self.name, value)
    }

    /// Composes this field with a field of the focused value, normalizing
    /// both to lenses.
    ///
    /// # Errors
    ///
    /// Returns a [`LensError`] if either field fails to adapt into a lens.
    pub fn compose_field<B>(
        self,
        other: Field<A, B>,
    ) -> Result<ComposedLens<FieldLens<S, A>, FieldLens<A, B>, A>, LensError>
    where
        A: Shape,
        B: Any + Clone,
    {
        Ok(self.to_lens()?.compose(other.to_lens()?))
    }

    /// Composes this field with an existing lens over the focused value.
    ///
    /// # Errors
    ///
    /// Returns a [`LensError`] if this field fails to adapt into a lens.
    pub fn compose_lens<B, L>(
        self,
        other: L,
    ) -> Result<ComposedLens<FieldLens<S, A>, L, A>, LensError>
    where
        L: Lens<A, B>,
    {
        Ok(self.to_lens()?.compose(other))
    }
}

impl<S, A> Clone for Field<S, A> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            getter: self.getter,
        }
    }
}

impl<S, A> Copy for Field<S, A> {}

impl<S, A> std::fmt::Debug for Field<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Field")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A lens derived from a field accessor and the owning type's shape
/// descriptor.
///
/// Created by [`Field::to_lens`]; get/set cannot fail.
pub struct FieldLens<S, A> {
    name: &'static str,
    getter: fn(&S) -> &A,
    setter: FieldSetter<S, A>,
}

impl<S, A> FieldLens<S, A> {
    /// The underlying field's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<S, A> Lens<S, A> for FieldLens<S, A>
where
    S: Shape,
    A: Any + Clone,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source).clone()
    }

    fn set(&self, source: S, value: A) -> S {
        self.setter.set(source, value)
    }
}

impl<S, A> Clone for FieldLens<S, A> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            getter: self.getter,
            setter: self.setter.clone(),
        }
    }
}

impl<S, A> std::fmt::Debug for FieldLens<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FieldLens")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Extension trait for composing an existing lens with a field of its
/// focused value.
pub trait LensFieldExtension<S, A>: Lens<S, A> + Sized {
    /// Composes this lens with a field accessor, adapting the field into a
    /// lens first.
    ///
    /// # Errors
    ///
    /// Returns a [`LensError`] if the field fails to adapt into a lens.
    ///
    /// # Example
    ///
    /// ```
    /// use relens::optics::{Lens, LensFieldExtension};
    /// use relens::shape::Shape;
    /// use relens::{field, lens};
    ///
    /// #[derive(Clone, Debug, PartialEq, Shape)]
    /// struct Inner { value: i32 }
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Outer { inner: Inner }
    ///
    /// let composed = lens!(Outer, inner)
    ///     .compose_field(field!(Inner, value))
    ///     .unwrap();
    ///
    /// let outer = Outer { inner: Inner { value: 23 } };
    /// assert_eq!(composed.get(&outer), 23);
    /// ```
    fn compose_field<B>(
        self,
        field: Field<A, B>,
    ) -> Result<ComposedLens<Self, FieldLens<A, B>, A>, LensError>
    where
        A: Shape + Any + Clone,
        B: Any + Clone,
    {
        Ok(self.compose(field.to_lens()?))
    }
}

impl<S, A, L: Lens<S, A>> LensFieldExtension<S, A> for L {}

/// Creates a [`Field`] accessor for a struct field.
///
/// # Syntax
///
/// ```text
/// field!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use relens::field;
///
/// #[derive(Clone)]
/// struct Point { x: i32, y: i32 }
///
/// let x_field = field!(Point, x);
/// assert_eq!(x_field.name(), "x");
/// assert_eq!(x_field.get(&Point { x: 1, y: 2 }), 1);
/// ```
#[macro_export]
macro_rules! field {
    ($struct_type:ty, $field:ident) => {
        $crate::optics::Field::new(stringify!($field), |source: &$struct_type| &source.$field)
    };
}
