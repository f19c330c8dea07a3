//! Error types for map construction and immutable map access.
//!
//! Every failure in this crate is one of three kinds:
//!
//! - [`UnpairedKeyError`]: a flat key/value list had a key without a value
//! - [`NullArgumentError`]: a required source map was missing
//! - [`UnsupportedOperationError`]: a mutation was attempted on an
//!   [`ImmutableMap`](crate::immutable::ImmutableMap)
//!
//! [`MapError`] unifies them so fallible operations can share one
//! `Result` type and compose with `?`.

/// A flat key/value list whose length is odd.
///
/// # Examples
///
/// ```rust
/// use micromaps::error::UnpairedKeyError;
///
/// let error = UnpairedKeyError { length: 3 };
/// assert_eq!(
///     format!("{error}"),
///     "key/value list has odd length 3: the last key has no value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnpairedKeyError {
    /// Number of items in the rejected list.
    pub length: usize,
}

impl std::fmt::Display for UnpairedKeyError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "key/value list has odd length {}: the last key has no value",
            self.length
        )
    }
}

impl std::error::Error for UnpairedKeyError {}

/// A required map argument was `None`.
///
/// # Examples
///
/// ```rust
/// use micromaps::error::NullArgumentError;
///
/// let error = NullArgumentError {
///     function_name: "try_extend",
///     parameter_name: "original",
/// };
/// assert_eq!(format!("{error}"), "try_extend: argument `original` is required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullArgumentError {
    /// The function that rejected the argument.
    pub function_name: &'static str,
    /// The name of the missing parameter.
    pub parameter_name: &'static str,
}

impl std::fmt::Display for NullArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: argument `{}` is required",
            self.function_name, self.parameter_name
        )
    }
}

impl std::error::Error for NullArgumentError {}

/// A mutation was attempted on a map that does not allow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedOperationError {
    /// The rejected operation, e.g. `"put"` or `"remove_where"`.
    pub operation: &'static str,
}

impl std::fmt::Display for UnsupportedOperationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{} is not supported on an immutable map",
            self.operation
        )
    }
}

impl std::error::Error for UnsupportedOperationError {}

/// Represents every error this crate can produce.
///
/// # Examples
///
/// ```rust
/// use micromaps::error::{MapError, UnpairedKeyError};
///
/// let error: MapError = UnpairedKeyError { length: 1 }.into();
/// assert!(matches!(error, MapError::InvalidArgument(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// A flat key/value list had odd length.
    InvalidArgument(UnpairedKeyError),
    /// A required map argument was missing.
    NullArgument(NullArgumentError),
    /// A mutation was attempted on an immutable map.
    UnsupportedOperation(UnsupportedOperationError),
}

impl MapError {
    /// Shorthand for an [`UnsupportedOperation`](Self::UnsupportedOperation) error.
    pub(crate) const fn unsupported(operation: &'static str) -> Self {
        Self::UnsupportedOperation(UnsupportedOperationError { operation })
    }
}

impl std::fmt::Display for MapError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(error) => write!(formatter, "invalid argument: {error}"),
            Self::NullArgument(error) => write!(formatter, "null argument: {error}"),
            Self::UnsupportedOperation(error) => {
                write!(formatter, "unsupported operation: {error}")
            }
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(error) => Some(error),
            Self::NullArgument(error) => Some(error),
            Self::UnsupportedOperation(error) => Some(error),
        }
    }
}

impl From<UnpairedKeyError> for MapError {
    fn from(error: UnpairedKeyError) -> Self {
        Self::InvalidArgument(error)
    }
}

impl From<NullArgumentError> for MapError {
    fn from(error: NullArgumentError) -> Self {
        Self::NullArgument(error)
    }
}

impl From<UnsupportedOperationError> for MapError {
    fn from(error: UnsupportedOperationError) -> Self {
        Self::UnsupportedOperation(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error;

    #[rstest]
    fn test_unpaired_key_error_display() {
        let error = UnpairedKeyError { length: 5 };
        assert_eq!(
            format!("{error}"),
            "key/value list has odd length 5: the last key has no value"
        );
    }

    #[rstest]
    fn test_null_argument_error_display() {
        let error = NullArgumentError {
            function_name: "try_extend",
            parameter_name: "original",
        };
        assert_eq!(
            format!("{error}"),
            "try_extend: argument `original` is required"
        );
    }

    #[rstest]
    fn test_unsupported_operation_error_display() {
        let error = UnsupportedOperationError { operation: "put" };
        assert_eq!(
            format!("{error}"),
            "put is not supported on an immutable map"
        );
    }

    #[rstest]
    #[case(MapError::from(UnpairedKeyError { length: 1 }), "invalid argument: ")]
    #[case(
        MapError::from(NullArgumentError { function_name: "f", parameter_name: "p" }),
        "null argument: "
    )]
    #[case(MapError::unsupported("remove_key"), "unsupported operation: ")]
    fn test_map_error_display_is_prefixed(#[case] error: MapError, #[case] prefix: &str) {
        assert!(format!("{error}").starts_with(prefix));
    }

    #[rstest]
    fn test_map_error_source_is_payload() {
        let error = MapError::unsupported("remove_all");
        let source = error.source().map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("remove_all is not supported on an immutable map")
        );
    }

    #[rstest]
    fn test_map_error_equality() {
        assert_eq!(MapError::unsupported("put"), MapError::unsupported("put"));
        assert_ne!(
            MapError::unsupported("put"),
            MapError::unsupported("put_all")
        );
    }
}
