//! The `Shape` trait and the metadata it exposes.
//!
//! A [`Shape`] implementation describes an aggregate type to the rest of the
//! library: the named fields that can be read off an instance, and the
//! reconstruction operations (constructors or builder functions) that can
//! produce a fresh instance from a full set of field values. The
//! [`PropertyMapper`](super::PropertyMapper) consumes this metadata to build
//! field-level setters without any per-field copy code.
//!
//! `Shape` is normally implemented via `#[derive(Shape)]`. Hand-written
//! implementations are possible; the contract they must uphold is documented
//! on the trait.

use std::any::{Any, TypeId};

/// Describes an aggregate type's fields and reconstruction operations.
///
/// # Contract
///
/// - Every entry in [`ShapeInfo::fields`] must report the field's real type
///   in both `type_id` and `type_name`, and its `read` function must return
///   a boxed clone of exactly that type.
/// - Every reconstruction operation must consume its arguments in parameter
///   order via [`ArgumentPack::take`], using the declared parameter names and
///   the corresponding field types.
///
/// A reconstruction operation whose parameters do not all name declared
/// fields is never invoked; it is simply ignored during descriptor
/// computation (and if no operation qualifies, descriptor computation fails
/// with a [`ShapeError`](super::ShapeError)). A `read` function or `construct`
/// function that lies about its types, however, cannot be detected up front
/// and will panic inside [`ArgumentPack::take`] when first exercised. The
/// derive macro always generates conforming implementations.
pub trait Shape: Sized + 'static {
    /// Returns the field and constructor metadata for this type.
    ///
    /// Called once per process by the descriptor cache; the result must be
    /// the same on every call.
    fn shape() -> ShapeInfo<Self>;
}

/// The full metadata record returned by [`Shape::shape`].
pub struct ShapeInfo<T> {
    /// All declared fields, in declaration order.
    pub fields: Vec<FieldInfo<T>>,
    /// All reconstruction operations, in declaration order.
    ///
    /// Declaration order is significant: when two operations of equal
    /// parameter count qualify, the earlier one is chosen.
    pub constructors: Vec<ConstructorInfo<T>>,
}

/// Metadata for one named field of an aggregate type.
pub struct FieldInfo<T> {
    /// The field name.
    pub name: &'static str,
    /// The field's type name, for diagnostics.
    pub type_name: &'static str,
    /// The field's type identity, checked against requested setter types.
    pub type_id: TypeId,
    /// Reads the field off an instance as a boxed clone.
    pub read: fn(&T) -> Box<dyn Any>,
}

impl<T> Clone for FieldInfo<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            type_name: self.type_name,
            type_id: self.type_id,
            read: self.read,
        }
    }
}

impl<T> std::fmt::Debug for FieldInfo<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Metadata for one reconstruction operation of an aggregate type.
pub struct ConstructorInfo<T> {
    /// A display name for the operation, used in error signatures
    /// (for example `Outer` for the struct literal, `Outer::new` for an
    /// associated function).
    pub name: &'static str,
    /// Parameter names, in call order. Each must name a declared field for
    /// the operation to qualify during descriptor computation.
    pub parameters: Vec<&'static str>,
    /// Invokes the operation with a full set of arguments.
    pub construct: fn(ArgumentPack) -> T,
}

impl<T> Clone for ConstructorInfo<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            parameters: self.parameters.clone(),
            construct: self.construct,
        }
    }
}

impl<T> std::fmt::Debug for ConstructorInfo<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ConstructorInfo")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// An ordered pack of type-erased constructor arguments.
///
/// Produced by the [`PropertyMapper`](super::PropertyMapper) when it rebuilds
/// an instance; consumed by a [`ConstructorInfo::construct`] function, one
/// argument per declared parameter, in order.
pub struct ArgumentPack {
    arguments: std::vec::IntoIter<(&'static str, Box<dyn Any>)>,
}

impl ArgumentPack {
    pub(crate) fn new(arguments: Vec<(&'static str, Box<dyn Any>)>) -> Self {
        Self {
            arguments: arguments.into_iter(),
        }
    }

    /// Takes the next argument, asserting its parameter name and type.
    ///
    /// # Panics
    ///
    /// Panics if the next argument is not named `parameter` or does not hold
    /// a `V`. Through the public API this is unreachable: the mapper checks
    /// field names and type identities before constructing a pack. It can
    /// only fire for a hand-written [`Shape`] implementation that misstates
    /// its field types or consumes parameters out of order.
    pub fn take<V: Any>(&mut self, parameter: &'static str) -> V {
        match self.arguments.next() {
            Some((name, value)) if name == parameter => match value.downcast::<V>() {
                Ok(value) => *value,
                Err(_) => panic!(
                    "shape contract violation: parameter `{parameter}` does not hold its declared type"
                ),
            },
            Some((name, _)) => panic!(
                "shape contract violation: expected parameter `{parameter}`, found `{name}`"
            ),
            None => panic!("shape contract violation: no argument left for parameter `{parameter}`"),
        }
    }
}

impl std::fmt::Debug for ArgumentPack {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("ArgumentPack").finish_non_exhaustive()
    }
}
