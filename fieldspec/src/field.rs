use alloc::borrow::Cow;
use core::any::Any;

use crate::error::FieldError;
use crate::factory::Factory;

/// The default-resolution mechanism carried by a [`Field`].
///
/// Exactly one of three configurations holds at a time, so "both a value and a
/// factory" is unrepresentable in a built descriptor. `NoDefault` plays the
/// role a sentinel object plays in dynamic schema layers: it stays
/// distinguishable from every legitimate default value, including `None` when
/// `T` is an `Option` (`Value(None)` is a real default, `NoDefault` is the
/// absence of one).
#[derive(Clone, Debug)]
pub enum FieldDefault<T> {
    /// No default was supplied; the slot is left unset (or reported missing)
    /// at instance construction.
    NoDefault,

    /// A fixed value, reused for every instance. Safe only for immutable
    /// defaults.
    Value(T),

    /// A factory invoked anew for every instance, so mutable defaults are
    /// never shared between instances.
    Factory(Factory<T>),
}

impl<T> Default for FieldDefault<T> {
    fn default() -> Self {
        FieldDefault::NoDefault
    }
}

impl<T> FieldDefault<T> {
    /// Returns true if no default was supplied.
    #[inline]
    pub fn is_no_default(&self) -> bool {
        matches!(self, FieldDefault::NoDefault)
    }

    /// Returns true for the fixed-value configuration.
    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self, FieldDefault::Value(_))
    }

    /// Returns true for the computed (factory) configuration.
    #[inline]
    pub fn is_factory(&self) -> bool {
        matches!(self, FieldDefault::Factory(_))
    }
}

/// Immutable descriptor for one named slot in a schema.
///
/// A `Field` is fully determined at construction and read-only afterwards:
/// concurrent readers need no synchronization. The struct compiler queries it
/// per instance construction to decide whether to leave the slot unset, copy
/// the fixed default, or invoke the factory for a fresh value — that
/// three-way branch is [`resolve_default`](Field::resolve_default).
#[derive(Clone, Debug)]
pub struct Field<T> {
    name: Cow<'static, str>,
    default: FieldDefault<T>,
}

impl<T> Field<T> {
    /// Builds a `Field` directly from a [`FieldDefault`] configuration.
    ///
    /// Infallible: the sum type already guarantees at most one default
    /// mechanism. Declaration sites that stage a value and a factory
    /// separately go through [`builder`](Field::builder) instead, which
    /// rejects the conflicting combination.
    pub fn new(name: impl Into<Cow<'static, str>>, default: FieldDefault<T>) -> Self {
        Self {
            name: name.into(),
            default,
        }
    }

    /// Returns a builder for `Field`.
    pub const fn builder() -> FieldBuilder<T> {
        FieldBuilder::new()
    }

    /// The field's name. Set once at construction; name legality (emptiness,
    /// identifier rules) is the schema compiler's concern, not checked here.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's default configuration.
    ///
    /// When the field has no fixed default this returns the
    /// [`FieldDefault::NoDefault`] marker unchanged, so callers can branch on
    /// it directly.
    #[inline]
    pub fn default(&self) -> &FieldDefault<T> {
        &self.default
    }

    /// The fixed default value, if this field is in the fixed-default
    /// configuration.
    #[inline]
    pub fn default_value(&self) -> Option<&T> {
        match &self.default {
            FieldDefault::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The default factory, if this field is in the computed-default
    /// configuration.
    #[inline]
    pub fn default_factory(&self) -> Option<&Factory<T>> {
        match &self.default {
            FieldDefault::Factory(factory) => Some(factory),
            _ => None,
        }
    }

    /// Returns true if this field has a default, fixed or computed.
    #[inline]
    pub fn has_default(&self) -> bool {
        !self.default.is_no_default()
    }

    /// Resolves the default for one new instance, right now.
    ///
    /// Factory fields invoke their callee (a fresh value per call), fixed
    /// defaults are cloned, and `None` means the field has no default — the
    /// caller decides whether that leaves the slot unset or signals a missing
    /// required field.
    pub fn resolve_default(&self) -> Option<T>
    where
        T: Clone,
    {
        match &self.default {
            FieldDefault::Factory(factory) => Some(factory.create()),
            FieldDefault::Value(value) => Some(value.clone()),
            FieldDefault::NoDefault => None,
        }
    }
}

/// Returns true if `value` is a [`Field<T>`], false for anything else.
///
/// Type-identity discrimination for type-erased schema pipelines; never
/// panics.
pub fn is_field<T: 'static>(value: &dyn Any) -> bool {
    value.is::<Field<T>>()
}

/// Returns a [`FieldBuilder`] with `name` already set.
///
/// The friendly declaration entry point:
///
/// ```
/// use fieldspec::{Field, field};
///
/// let retries: Field<u32> = field("retries").default(3).build()?;
/// # Ok::<(), fieldspec::FieldError>(())
/// ```
pub fn field<T>(name: impl Into<Cow<'static, str>>) -> FieldBuilder<T> {
    FieldBuilder::new().name(name)
}

/// Builder for [`Field`].
///
/// Unlike the built descriptor, the builder keeps the value and factory slots
/// separate so a declaration supplying both can be detected and rejected at
/// [`build`](FieldBuilder::build) time rather than silently resolved.
pub struct FieldBuilder<T> {
    name: Option<Cow<'static, str>>,
    default: Option<T>,
    factory: Option<Factory<T>>,
}

impl<T> FieldBuilder<T> {
    /// Creates a new `FieldBuilder` with nothing staged.
    #[allow(clippy::new_without_default)]
    pub const fn new() -> Self {
        Self {
            name: None,
            default: None,
            factory: None,
        }
    }

    /// Sets the field name.
    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Stages a fixed default value.
    ///
    /// Any value counts as supplied here, including `None` for optional types
    /// and falsy values like `0` — staging `default(0)` alongside a factory
    /// is still a conflict.
    pub fn default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    /// Stages a pre-built default factory.
    pub fn default_factory(mut self, factory: Factory<T>) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Stages a raw callable as the default factory, wrapping it in a
    /// [`Factory`]. The wrapping is observable: the built field's
    /// [`default_factory`](Field::default_factory) returns a `Factory`.
    ///
    /// The callability constraint applies here independently of the
    /// exclusivity check — a non-callable is rejected even when no fixed
    /// default is staged:
    ///
    /// ```compile_fail
    /// let f: fieldspec::Field<u32> = fieldspec::field("n").default_fn(0).build().unwrap();
    /// ```
    pub fn default_fn<F>(mut self, callee: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.factory = Some(Factory::new(callee));
        self
    }

    /// Validates the staged declaration and builds the `Field`.
    ///
    /// Fails with [`FieldError::ConflictingDefaults`] when both a value and a
    /// factory were staged, and [`FieldError::MissingName`] when no name was
    /// set. Staging neither mechanism is valid and produces a field with
    /// [`FieldDefault::NoDefault`].
    pub fn build(self) -> Result<Field<T>, FieldError> {
        let default = match (self.default, self.factory) {
            (Some(_), Some(_)) => return Err(FieldError::ConflictingDefaults),
            (Some(value), None) => FieldDefault::Value(value),
            (None, Some(factory)) => FieldDefault::Factory(factory),
            (None, None) => FieldDefault::NoDefault,
        };
        let name = self.name.ok_or(FieldError::MissingName)?;
        Ok(Field { name, default })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_default_defaults_to_no_default() {
        // No T: Default bound needed.
        struct Opaque;
        let d: FieldDefault<Opaque> = FieldDefault::default();
        assert!(d.is_no_default());
        assert!(!d.is_value());
        assert!(!d.is_factory());
    }

    #[test]
    fn builder_validates_exclusivity_before_name() {
        // A nameless conflicting declaration reports the conflict, matching
        // the validation order of the declaration API.
        let err = FieldBuilder::new()
            .default(1u8)
            .default_fn(|| 1u8)
            .build()
            .unwrap_err();
        assert_eq!(err, FieldError::ConflictingDefaults);
    }

    #[test]
    fn builder_without_name_fails() {
        let err = FieldBuilder::<u8>::new().build().unwrap_err();
        assert_eq!(err, FieldError::MissingName);
    }
}
