//! Default substitution for lenses over optional fields.
//!
//! [`OptionLensExtension::or_else`] turns a `Lens<S, Option<A>>` into a
//! `Lens<S, A>`: reads substitute a default when the field is absent, writes
//! always store a present value.
//!
//! The substitution is intentionally asymmetric. After writing a real value
//! the round trip holds, but the strict GetPut law does not when the
//! underlying field was absent: getting yields the default, and setting that
//! default back stores `Some(default)` rather than restoring `None`.

use super::lens::Lens;

/// Extension trait adding default substitution to lenses over `Option`
/// fields.
pub trait OptionLensExtension<S, A>: Lens<S, Option<A>> + Sized {
    /// Substitutes `default` for absent values on read; writes always store
    /// `Some(value)`.
    ///
    /// # Example
    ///
    /// ```
    /// use relens::optics::{Lens, OptionLensExtension};
    /// use relens::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Config { label: Option<String> }
    ///
    /// let label_lens = lens!(Config, label).or_else("unnamed".to_string());
    ///
    /// let config = Config { label: None };
    /// assert_eq!(label_lens.get(&config), "unnamed");
    ///
    /// let updated = label_lens.set(config, "primary".to_string());
    /// assert_eq!(updated.label, Some("primary".to_string()));
    /// ```
    fn or_else(self, default: A) -> DefaultedLens<Self, A> {
        DefaultedLens::new(self, default)
    }
}

impl<S, A, L: Lens<S, Option<A>>> OptionLensExtension<S, A> for L {}

/// A lens over an optional field with a default substituted on read.
///
/// # Type Parameters
///
/// - `L`: The type of the underlying lens (focusing `Option<A>`)
/// - `A`: The present-value type
pub struct DefaultedLens<L, A> {
    inner: L,
    default: A,
}

impl<L, A> DefaultedLens<L, A> {
    /// Creates a new `DefaultedLens` from an `Option` lens and a default.
    #[must_use]
    pub const fn new(inner: L, default: A) -> Self {
        Self { inner, default }
    }
}

impl<S, A, L> Lens<S, A> for DefaultedLens<L, A>
where
    L: Lens<S, Option<A>>,
    A: Clone,
{
    fn get(&self, source: &S) -> A {
        self.inner
            .get(source)
            .unwrap_or_else(|| self.default.clone())
    }

    fn set(&self, source: S, value: A) -> S {
        self.inner.set(source, Some(value))
    }
}

impl<L: Clone, A: Clone> Clone for DefaultedLens<L, A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            default: self.default.clone(),
        }
    }
}

impl<L: std::fmt::Debug, A: std::fmt::Debug> std::fmt::Debug for DefaultedLens<L, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("DefaultedLens")
            .field("inner", &self.inner)
            .field("default", &self.default)
            .finish()
    }
}
