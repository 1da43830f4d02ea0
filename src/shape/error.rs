//! Error types for shape descriptors and lens construction.
//!
//! All errors in this library surface at construction time: computing a
//! descriptor, requesting a setter, or adapting a field accessor into a lens.
//! A successfully constructed lens or setter is proof that its get/set
//! operations cannot fail afterwards.

/// Raised when a type has no reconstruction operation compatible with its
/// declared fields.
///
/// Fatal to any lens usage for that type. Surfaced at descriptor-creation
/// time, on the first request for that type.
///
/// # Examples
///
/// ```rust
/// use relens::shape::ShapeError;
///
/// let error = ShapeError {
///     type_name: "Opaque",
///     field_names: vec!["value"],
/// };
/// assert_eq!(
///     format!("{}", error),
///     "no reconstruction operation of `Opaque` is satisfiable from its declared fields (value)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    /// The name of the rejected type.
    pub type_name: &'static str,
    /// The type's declared field names, for diagnosis.
    pub field_names: Vec<&'static str>,
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "no reconstruction operation of `{}` is satisfiable from its declared fields ({})",
            self.type_name,
            self.field_names.join(", ")
        )
    }
}

impl std::error::Error for ShapeError {}

/// Raised when a setter or lens is requested for a field that is not a
/// parameter of the type's chosen reconstruction operation.
///
/// Typical for derived/computed fields, which are recomputed by the
/// reconstruction operation itself and cannot be set independently. Raised
/// eagerly at setter-creation time, never at first use.
///
/// # Examples
///
/// ```rust
/// use relens::shape::InvalidFieldError;
///
/// let error = InvalidFieldError {
///     type_name: "Cached",
///     field: "uppercased".to_string(),
///     signature: "Cached::new(value)".to_string(),
/// };
/// assert_eq!(
///     format!("{}", error),
///     "field `uppercased` of `Cached` is not used in constructor `Cached::new(value)`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFieldError {
    /// The name of the owning type.
    pub type_name: &'static str,
    /// The offending field name.
    pub field: String,
    /// The chosen reconstruction operation's signature, for diagnosis.
    pub signature: String,
}

impl std::fmt::Display for InvalidFieldError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "field `{}` of `{}` is not used in constructor `{}`",
            self.field, self.type_name, self.signature
        )
    }
}

impl std::error::Error for InvalidFieldError {}

/// Raised when a setter is requested with a value type that does not match
/// the field's declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTypeError {
    /// The name of the owning type.
    pub type_name: &'static str,
    /// The offending field name.
    pub field: String,
    /// The field's declared type name.
    pub expected: &'static str,
    /// The requested value type name.
    pub found: &'static str,
}

impl std::fmt::Display for FieldTypeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "field `{}` of `{}` has type `{}`, but a setter for `{}` was requested",
            self.field, self.type_name, self.expected, self.found
        )
    }
}

impl std::error::Error for FieldTypeError {}

/// Represents errors that can occur while building descriptors and lenses.
///
/// This enum provides a unified error type for all construction-time
/// failures. Get/set on an already-constructed lens never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LensError {
    /// The type has no satisfiable reconstruction operation.
    Shape(ShapeError),
    /// The field is not a parameter of the chosen reconstruction operation.
    InvalidField(InvalidFieldError),
    /// The requested value type does not match the field's declared type.
    FieldType(FieldTypeError),
}

impl std::fmt::Display for LensError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shape(error) => write!(formatter, "{error}"),
            Self::InvalidField(error) => write!(formatter, "{error}"),
            Self::FieldType(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for LensError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Shape(error) => Some(error),
            Self::InvalidField(error) => Some(error),
            Self::FieldType(error) => Some(error),
        }
    }
}

impl From<ShapeError> for LensError {
    fn from(error: ShapeError) -> Self {
        Self::Shape(error)
    }
}

impl From<InvalidFieldError> for LensError {
    fn from(error: InvalidFieldError) -> Self {
        Self::InvalidField(error)
    }
}

impl From<FieldTypeError> for LensError {
    fn from(error: FieldTypeError) -> Self {
        Self::FieldType(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_display() {
        let error = ShapeError {
            type_name: "Opaque",
            field_names: vec!["value", "count"],
        };
        assert_eq!(
            format!("{error}"),
            "no reconstruction operation of `Opaque` is satisfiable from its declared fields (value, count)"
        );
    }

    #[test]
    fn test_invalid_field_error_display() {
        let error = InvalidFieldError {
            type_name: "Cached",
            field: "uppercased".to_string(),
            signature: "Cached::new(value)".to_string(),
        };
        assert_eq!(
            format!("{error}"),
            "field `uppercased` of `Cached` is not used in constructor `Cached::new(value)`"
        );
    }

    #[test]
    fn test_field_type_error_display() {
        let error = FieldTypeError {
            type_name: "Point",
            field: "x".to_string(),
            expected: "i32",
            found: "alloc::string::String",
        };
        assert_eq!(
            format!("{error}"),
            "field `x` of `Point` has type `i32`, but a setter for `alloc::string::String` was requested"
        );
    }

    #[test]
    fn test_lens_error_delegates_display() {
        let error = LensError::from(ShapeError {
            type_name: "Opaque",
            field_names: vec!["value"],
        });
        assert_eq!(
            format!("{error}"),
            "no reconstruction operation of `Opaque` is satisfiable from its declared fields (value)"
        );
    }

    #[test]
    fn test_lens_error_source_chain() {
        use std::error::Error;

        let error = LensError::from(InvalidFieldError {
            type_name: "Cached",
            field: "uppercased".to_string(),
            signature: "Cached::new(value)".to_string(),
        });
        let source = error.source().unwrap();
        assert!(source.to_string().contains("not used in constructor"));
    }
}
