//! Shape descriptors for generic structural updates.
//!
//! This module is what lets an immutable aggregate type participate in lens
//! updates without hand-written copy code. An aggregate describes itself
//! through the [`Shape`] trait (normally via `#[derive(Shape)]`): its named
//! fields, and the reconstruction operations able to build a fresh instance
//! from a full set of field values. From that description, a cached
//! [`PropertyMapper`] derives a "copy with one field replaced" operation and
//! validated per-field setters.
//!
//! # Shape contract
//!
//! A type is lens-compatible when:
//!
//! - its fields are individually readable by name (each field is `Clone`), and
//! - at least one reconstruction operation exists whose parameter names are a
//!   subset of the field names.
//!
//! Violations surface eagerly, when a descriptor or setter is first
//! requested: [`ShapeError`] when no reconstruction operation qualifies,
//! [`InvalidFieldError`] when a setter is requested for a field the chosen
//! operation does not take (a derived field), [`FieldTypeError`] when the
//! requested value type is wrong.
//!
//! # Derived fields
//!
//! Fields that are not parameters of the chosen reconstruction operation are
//! recomputed from scratch by the operation on every update:
//!
//! ```rust
//! use relens::shape::{PropertyMapper, Shape};
//!
//! #[derive(Clone, Debug, PartialEq, Shape)]
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
//!
//! let mapper = PropertyMapper::<Cached>::for_type().unwrap();
//! let updated = mapper
//!     .copy_with(&Cached::new("foo".to_string()), "value", "bar".to_string())
//!     .unwrap();
//! assert_eq!(updated.uppercased, "BAR");
//!
//! // The derived field itself cannot be set independently.
//! assert!(mapper.setter_for::<String>("uppercased").is_err());
//! ```

mod descriptor;
mod error;
mod info;

// Re-export descriptor types
pub use descriptor::FieldSetter;
pub use descriptor::PropertyMapper;

// Re-export error types
pub use error::FieldTypeError;
pub use error::InvalidFieldError;
pub use error::LensError;
pub use error::ShapeError;

// Re-export shape metadata types
pub use info::ArgumentPack;
pub use info::ConstructorInfo;
pub use info::FieldInfo;
pub use info::Shape;
pub use info::ShapeInfo;

/// Derive macro generating a [`Shape`] implementation for a named struct.
#[cfg(feature = "derive")]
pub use relens_derive::Shape;
