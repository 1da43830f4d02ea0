//! # relens
//!
//! Composable functional optics for immutable records: lenses, isomorphisms,
//! and shape-based structural updates.
//!
//! ## Overview
//!
//! Immutable aggregate values are pleasant to reason about and painful to
//! update: replacing one deeply nested field means reconstructing every
//! record along the path by hand. This library removes that boilerplate:
//!
//! - **Optics** ([`optics`]): the [`Lens`](optics::Lens) get/set/compose
//!   algebra, [`Iso`](optics::Iso) bidirectional conversions, mapping a lens
//!   through an iso, and default substitution for optional fields.
//! - **Shape descriptors** ([`shape`]): per-type cached metadata describing
//!   which fields participate in reconstruction, powering a generic "copy
//!   with one field replaced" operation and validated per-field setters.
//! - **Derive macros** (`derive` feature, on by default):
//!   `#[derive(Shape)]` describes a struct to the shape machinery,
//!   `#[derive(Fields)]` generates named field accessors.
//!
//! Everything is pure and synchronous; the only process-wide state is the
//! shape-descriptor cache, which is compute-once-per-type and safe to
//! populate concurrently.
//!
//! ## Example
//!
//! ```rust
//! use relens::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq, Shape, Fields)]
//! struct Inner { value: i32 }
//!
//! #[derive(Clone, Debug, PartialEq, Shape, Fields)]
//! struct Outer { outer_value: String, inner: Inner }
//!
//! let outer = Outer {
//!     outer_value: "foo".to_string(),
//!     inner: Inner { value: 23 },
//! };
//!
//! let inner_value = Outer::inner_field()
//!     .compose_field(Inner::value_field())
//!     .unwrap();
//!
//! assert_eq!(inner_value.get(&outer), 23);
//!
//! let doubled = inner_value.modify(outer, |value| value * 2);
//! assert_eq!(doubled.inner.value, 46);
//! assert_eq!(doubled.outer_value, "foo");
//! ```
//!
//! ## Feature Flags
//!
//! - `derive`: the `Shape` and `Fields` derive macros (enabled by default)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod optics;
pub mod shape;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use relens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optics::*;
    pub use crate::shape::*;
}
