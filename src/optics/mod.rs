//! Optics for immutable data manipulation.
//!
//! This module provides composable accessors for immutable data structures:
//! read and update deeply nested fields without hand-written copy
//! boilerplate, and without mutating anything in place.
//!
//! # Available Optics
//!
//! - [`Lens`]: Focus on a single field (get/set access)
//! - [`Iso`]: Isomorphism between types (bidirectional conversion)
//! - [`Field`]: A raw named field accessor, adaptable into a lens through the
//!   owning type's [shape descriptor](crate::shape)
//! - [`DefaultedLens`]: A lens over an optional field with a default
//!   substituted on read (via [`OptionLensExtension::or_else`])
//!
//! # Example
//!
//! ```
//! use relens::optics::{Lens, OptionLensExtension};
//! use relens::shape::Shape;
//! use relens::field;
//!
//! #[derive(Clone, Debug, PartialEq, Shape)]
//! struct Inner { value: String }
//!
//! #[derive(Clone, Debug, PartialEq, Shape)]
//! struct Outer { outer_value: String, inner: Option<Inner> }
//!
//! let outer = Outer { outer_value: "foo".to_string(), inner: None };
//!
//! // A lens over the optional inner record, with a default for when it is
//! // absent, composed down to the inner field.
//! let inner_value = field!(Outer, inner)
//!     .to_lens()
//!     .unwrap()
//!     .or_else(Inner { value: "xyzzy".to_string() })
//!     .compose(field!(Inner, value).to_lens().unwrap());
//!
//! assert_eq!(inner_value.get(&outer), "xyzzy");
//!
//! let updated = inner_value.set(outer, "frobnitz".to_string());
//! assert_eq!(updated.inner, Some(Inner { value: "frobnitz".to_string() }));
//! assert_eq!(updated.outer_value, "foo");
//! ```

mod defaulted;
mod field;
mod iso;
mod lens;
mod standard;

// Re-export all lens-related types and traits
pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::IsoMappedLens;
pub use lens::Lens;

// Re-export all iso-related types and traits
pub use iso::ComposedIso;
pub use iso::FunctionIso;
pub use iso::Iso;
pub use iso::ReversedIso;

// Re-export default substitution
pub use defaulted::DefaultedLens;
pub use defaulted::OptionLensExtension;

// Re-export field accessor types and traits
pub use field::Field;
pub use field::FieldLens;
pub use field::LensFieldExtension;

// Re-export standard optics
pub use standard::iso_identity;
pub use standard::iso_swap;

/// Derive macro generating `{field}_field()` accessor methods for a named
/// struct.
#[cfg(feature = "derive")]
pub use relens_derive::Fields;
