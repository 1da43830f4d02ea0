//! Derive macros for relens optics.
//!
//! This crate provides procedural macros that describe struct types to the
//! relens shape machinery and generate field accessors.
//!
//! # Available Derive Macros
//!
//! - [`Shape`]: Implements the `relens::shape::Shape` trait for a struct
//! - [`Fields`]: Generates `{field}_field()` accessor methods for struct
//!   fields
//!
//! # Example: Shape
//!
//! ```rust,ignore
//! use relens::shape::{PropertyMapper, Shape};
//!
//! #[derive(Clone, Shape)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let mapper = PropertyMapper::<Point>::for_type().unwrap();
//! let moved = mapper.copy_with(&Point { x: 1, y: 2 }, "x", 10).unwrap();
//! assert_eq!(moved.x, 10);
//! ```
//!
//! # Example: custom reconstruction and derived fields
//!
//! ```rust,ignore
//! use relens::shape::Shape;
//!
//! #[derive(Clone, Shape)]
//! #[shape(constructor = "new(value)")]
//! struct Cached {
//!     value: String,
//!     #[shape(derived)]
//!     uppercased: String,
//! }
//!
//! impl Cached {
//!     fn new(value: String) -> Self {
//!         let uppercased = value.to_uppercase();
//!         Self { value, uppercased }
//!     }
//! }
//! ```
//!
//! # Example: Fields
//!
//! ```rust,ignore
//! use relens::optics::Lens;
//!
//! #[derive(Clone, relens::optics::Fields)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_field() -> Field<Point, i32>
//! // - Point::y_field() -> Field<Point, i32>
//! let x_lens = Point::x_field().to_lens().unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod fields;
mod shape;

use proc_macro::TokenStream;

/// Derive macro implementing the `Shape` trait for a named struct.
///
/// The generated implementation lists every named field (each field type
/// must be `Clone + 'static`) and the type's reconstruction operations.
///
/// # Attributes
///
/// - `#[shape(constructor = "name(param, ...)")]` (struct level, repeatable):
///   declares the associated function `Self::name` as a reconstruction
///   operation. Every parameter must name a declared field; parameter types
///   are taken from the field declarations.
/// - `#[shape(derived)]` (field level): marks a field as derived. Derived
///   fields are readable but recomputed by the reconstruction operation on
///   every update, so they cannot be set independently. A struct with
///   derived fields must declare an explicit constructor.
///
/// When no field is derived, the struct literal over all fields is emitted
/// as an implicit reconstruction operation (and, having the most parameters,
/// it is the one selected unless only narrower explicit constructors exist).
///
/// # Requirements
///
/// - The type must be a struct with named fields
#[proc_macro_derive(Shape, attributes(shape))]
pub fn derive_shape(input: TokenStream) -> TokenStream {
    shape::derive_shape_impl(input)
}

/// Derive macro generating a field accessor method for each struct field.
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_field() -> relens::optics::Field<StructName, T> { ... }
/// }
/// ```
///
/// # Requirements
///
/// - The type must be a struct with named fields
#[proc_macro_derive(Fields)]
pub fn derive_fields(input: TokenStream) -> TokenStream {
    fields::derive_fields_impl(input)
}
