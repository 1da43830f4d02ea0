//! Per-type shape descriptors with a process-wide cache.
//!
//! A [`PropertyMapper`] makes an immutable aggregate "updatable by field"
//! without per-field copy code: it discovers, once per type, which
//! reconstruction operation to use and how the operation's parameters map
//! onto the type's fields, then rebuilds a whole new instance with exactly
//! one argument substituted.
//!
//! # Cache lifecycle
//!
//! Descriptors are pure functions of their type, so they are computed lazily
//! on first request, stored in a process-wide map keyed by [`TypeId`], and
//! never invalidated. Concurrent first requests for the same type may race;
//! the duplicate computation is benign and the first published descriptor
//! wins, so every caller observes the same [`Arc`]. Failed computations are
//! not cached. Only successful descriptors enter the map, which stays bounded
//! by the number of distinct aggregate types in the program.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use super::error::{FieldTypeError, InvalidFieldError, LensError, ShapeError};
use super::info::{ArgumentPack, ConstructorInfo, FieldInfo, Shape};

static CACHE: LazyLock<RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// The cached shape descriptor for one aggregate type.
///
/// Holds the chosen reconstruction operation and the field metadata for each
/// of its parameters, in parameter order. Obtain one via
/// [`PropertyMapper::for_type`]; instances are shared and never constructed
/// directly.
///
/// # Examples
///
/// ```rust
/// use relens::shape::{PropertyMapper, Shape};
///
/// #[derive(Clone, Debug, PartialEq, Shape)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let mapper = PropertyMapper::<Point>::for_type().unwrap();
/// let point = Point { x: 1, y: 2 };
///
/// let moved = mapper.copy_with(&point, "x", 10).unwrap();
/// assert_eq!(moved, Point { x: 10, y: 2 });
/// ```
pub struct PropertyMapper<T> {
    constructor: ConstructorInfo<T>,
    members: Vec<FieldInfo<T>>,
    signature: String,
}

impl<T: Shape> PropertyMapper<T> {
    /// Returns the descriptor for `T`, computing and caching it on first
    /// request.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if no reconstruction operation of `T` has all
    /// of its parameters satisfiable from the declared fields.
    pub fn for_type() -> Result<Arc<Self>, ShapeError> {
        let key = TypeId::of::<T>();
        if let Some(entry) = CACHE.read().get(&key) {
            return Ok(Self::downcast_entry(entry));
        }

        // May race with another thread computing the same descriptor; the
        // first inserted entry wins and the loser's work is discarded.
        let computed: Arc<dyn Any + Send + Sync> = Arc::new(Self::compute()?);
        let mut cache = CACHE.write();
        let entry = cache.entry(key).or_insert(computed);
        Ok(Self::downcast_entry(entry))
    }

    fn downcast_entry(entry: &Arc<dyn Any + Send + Sync>) -> Arc<Self> {
        match Arc::clone(entry).downcast::<Self>() {
            Ok(mapper) => mapper,
            Err(_) => unreachable!("cache entries are keyed by their exact type"),
        }
    }

    fn compute() -> Result<Self, ShapeError> {
        let info = T::shape();
        let fields_by_name: HashMap<&str, &FieldInfo<T>> =
            info.fields.iter().map(|field| (field.name, field)).collect();

        // The most complete qualifying operation wins; on equal parameter
        // counts, the first-declared one.
        let mut chosen: Option<&ConstructorInfo<T>> = None;
        for candidate in &info.constructors {
            if !candidate
                .parameters
                .iter()
                .all(|parameter| fields_by_name.contains_key(parameter))
            {
                continue;
            }
            let more_complete = chosen
                .is_none_or(|current| candidate.parameters.len() > current.parameters.len());
            if more_complete {
                chosen = Some(candidate);
            }
        }

        let constructor = chosen.ok_or_else(|| ShapeError {
            type_name: type_name::<T>(),
            field_names: info.fields.iter().map(|field| field.name).collect(),
        })?;

        let members = constructor
            .parameters
            .iter()
            .map(|parameter| fields_by_name[parameter].clone())
            .collect();
        let signature = format!("{}({})", constructor.name, constructor.parameters.join(", "));

        Ok(Self {
            constructor: constructor.clone(),
            members,
            signature,
        })
    }

    /// The chosen reconstruction operation's signature, e.g.
    /// `Outer(outer_value, inner)`.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The chosen reconstruction operation's parameter names, in call order.
    pub fn parameters(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.members.iter().map(|member| member.name)
    }

    /// Produces a new instance with `field` replaced by `value` and all other
    /// reconstruction parameters carried over from `source`.
    ///
    /// Fields that are not parameters of the reconstruction operation are
    /// recomputed from scratch by the operation itself on every copy; that is
    /// what makes derived fields consistent by construction.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFieldError`] if `field` is not a parameter of the
    /// chosen reconstruction operation, or [`FieldTypeError`] if `V` is not
    /// the field's declared type.
    pub fn copy_with<V: Any>(&self, source: &T, field: &str, value: V) -> Result<T, LensError> {
        let position = self.position_of(field)?;
        self.check_value_type(position, TypeId::of::<V>(), type_name::<V>())?;
        Ok(self.reconstruct(position, source, Box::new(value)))
    }

    /// Returns a bound setter for one field.
    ///
    /// Validation happens here, at setter-creation time: the returned
    /// [`FieldSetter`] can be applied indefinitely without failing.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFieldError`] if `field` is not a parameter of the
    /// chosen reconstruction operation (e.g. a derived field), or
    /// [`FieldTypeError`] if `V` is not the field's declared type.
    pub fn setter_for<V: Any>(&self, field: &str) -> Result<FieldSetter<T, V>, LensError> {
        let position = self.position_of(field)?;
        self.check_value_type(position, TypeId::of::<V>(), type_name::<V>())?;
        Ok(FieldSetter {
            mapper: Self::for_type()?,
            position,
            _marker: PhantomData,
        })
    }

    fn position_of(&self, field: &str) -> Result<usize, InvalidFieldError> {
        self.members
            .iter()
            .position(|member| member.name == field)
            .ok_or_else(|| InvalidFieldError {
                type_name: type_name::<T>(),
                field: field.to_string(),
                signature: self.signature.clone(),
            })
    }

    fn check_value_type(
        &self,
        position: usize,
        value_type: TypeId,
        value_type_name: &'static str,
    ) -> Result<(), FieldTypeError> {
        let member = &self.members[position];
        if member.type_id == value_type {
            Ok(())
        } else {
            Err(FieldTypeError {
                type_name: type_name::<T>(),
                field: member.name.to_string(),
                expected: member.type_name,
                found: value_type_name,
            })
        }
    }

    // Invariant: `position` indexes `members` and `value` holds the member's
    // declared type. Both are established by the validating callers above.
    fn reconstruct(&self, position: usize, source: &T, value: Box<dyn Any>) -> T {
        let mut replacement = Some(value);
        let arguments = self
            .members
            .iter()
            .enumerate()
            .map(|(index, member)| {
                let argument = if index == position {
                    replacement.take()
                } else {
                    None
                }
                .unwrap_or_else(|| (member.read)(source));
                (member.name, argument)
            })
            .collect();
        (self.constructor.construct)(ArgumentPack::new(arguments))
    }
}

impl<T> std::fmt::Debug for PropertyMapper<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PropertyMapper")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// A validated, bound `(instance, value) -> instance` setter for one field.
///
/// Created by [`PropertyMapper::setter_for`]; applying it cannot fail.
pub struct FieldSetter<T, V> {
    mapper: Arc<PropertyMapper<T>>,
    position: usize,
    _marker: PhantomData<fn(V)>,
}

impl<T: Shape, V: Any> FieldSetter<T, V> {
    /// Returns a new instance with the bound field replaced by `value`.
    pub fn set(&self, source: T, value: V) -> T {
        self.mapper.reconstruct(self.position, &source, Box::new(value))
    }
}

impl<T, V> Clone for FieldSetter<T, V> {
    fn clone(&self) -> Self {
        Self {
            mapper: Arc::clone(&self.mapper),
            position: self.position,
            _marker: PhantomData,
        }
    }
}

impl<T, V> std::fmt::Debug for FieldSetter<T, V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FieldSetter")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
