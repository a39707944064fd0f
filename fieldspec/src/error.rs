use core::fmt;

/// Errors encountered when building a [`Field`](crate::Field) descriptor.
///
/// Both variants signal programmer error in the declaration itself; neither is
/// retried or recovered here. A built `Field` is always fully valid — there is
/// no partially-initialized descriptor to observe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Both a fixed default value and a default factory were supplied for the
    /// same field. A field carries at most one default mechanism.
    ConflictingDefaults,

    /// The builder was finished without a field name.
    MissingName,
}

impl core::error::Error for FieldError {}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::ConflictingDefaults => {
                write!(f, "cannot set both a default value and a default factory")
            }
            FieldError::MissingName => {
                write!(f, "field name was not set")
            }
        }
    }
}
