//! `fieldspec` provides the field-descriptor primitives a schema/struct
//! definition layer needs to answer one question per declared field: does this
//! field have a default, and if so, how is it computed right now?
//!
//! A [`Field`] carries a name and exactly one of three default configurations,
//! modeled directly as the [`FieldDefault`] sum type:
//!
//! - [`FieldDefault::NoDefault`] — no default was supplied. This is distinct
//!   from a default *of* `None`: for `T = Option<U>`, `Value(None)` is a real
//!   default while `NoDefault` means the slot has none at all.
//! - [`FieldDefault::Value`] — a fixed value, reused for every instance. Only
//!   safe for immutable defaults.
//! - [`FieldDefault::Factory`] — a [`Factory`] wrapping a zero-argument
//!   callable, invoked anew for every instance. Required for mutable defaults
//!   (containers and the like), where handing the same instance to every
//!   constructed object would be unsafe.
//!
//! Because the three configurations are enum variants, the "both a value and a
//! factory" state is unrepresentable in a built descriptor; the [`field()`]
//! builder still rejects the combination at [`FieldBuilder::build`] time so a
//! misconfigured declaration fails eagerly rather than silently picking one.
//!
//! # Example
//!
//! ```
//! use fieldspec::{Field, FieldDefault, field};
//!
//! // A fixed default, reused as-is for every instance.
//! let port: Field<u16> = field("port").default(8080).build()?;
//! assert_eq!(port.default_value(), Some(&8080));
//!
//! // A computed default: every resolution produces a fresh Vec.
//! let tags: Field<Vec<String>> = field("tags").default_fn(Vec::new).build()?;
//! let a = tags.resolve_default().unwrap();
//! let b = tags.resolve_default().unwrap();
//! assert!(a.is_empty() && b.is_empty());
//!
//! // No default at all.
//! let id: Field<u64> = field("id").build()?;
//! assert!(matches!(id.default(), FieldDefault::NoDefault));
//! # Ok::<(), fieldspec::FieldError>(())
//! ```
//!
//! All descriptor types are immutable once built and can be shared freely
//! across threads; see the type-level docs for the exact contracts.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod factory;
mod field;

pub use error::FieldError;
pub use factory::{Factory, is_factory};
pub use field::{Field, FieldBuilder, FieldDefault, field, is_field};
