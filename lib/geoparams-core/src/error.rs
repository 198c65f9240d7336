//! Error types for geoparams.

use derive_more::{Display, Error};

/// Validation error raised while serializing a request.
///
/// Every variant names the offending field(s) using the public field
/// names of the request (`Key`, `Path`, `PanoramaId`, ...), so the
/// message reads the same whichever endpoint produced it.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// A mandatory field is absent or empty.
    #[display("'{field}' is required")]
    Required {
        /// Name of the missing field.
        field: &'static str,
    },

    /// Neither of two alternative fields was supplied.
    #[display("'{first}' or '{second}' is required")]
    RequiredOneOf {
        /// First alternative.
        first: &'static str,
        /// Second alternative.
        second: &'static str,
    },

    /// A field is mandatory because another one is in use.
    #[display("'{field}' is required, when using '{when}'")]
    RequiredWhen {
        /// Name of the missing field.
        field: &'static str,
        /// The field whose presence makes it mandatory.
        when: &'static str,
    },

    /// Two alternative fields were both supplied.
    #[display("'{first}' and '{second}' cannot both be specified")]
    MutuallyExclusive {
        /// First alternative.
        first: &'static str,
        /// Second alternative.
        second: &'static str,
    },

    /// A sequence holds fewer entries than required.
    #[display("a minimum of {min} entries is required when using '{field}', got {actual}")]
    TooFew {
        /// Name of the sequence field.
        field: &'static str,
        /// Minimum number of entries.
        min: usize,
        /// Number of entries supplied.
        actual: usize,
    },

    /// A numeric value lies outside its inclusive bounds.
    #[display("'{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Name of the numeric field.
        field: &'static str,
        /// Value supplied.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a required-field error.
    #[must_use]
    pub const fn required(field: &'static str) -> Self {
        Self::Required { field }
    }

    /// Create an error for a missing choice between two alternatives.
    #[must_use]
    pub const fn required_one_of(first: &'static str, second: &'static str) -> Self {
        Self::RequiredOneOf { first, second }
    }

    /// Create an error for a field required by another field.
    #[must_use]
    pub const fn required_when(field: &'static str, when: &'static str) -> Self {
        Self::RequiredWhen { field, when }
    }

    /// Create a mutual-exclusion error.
    #[must_use]
    pub const fn mutually_exclusive(first: &'static str, second: &'static str) -> Self {
        Self::MutuallyExclusive { first, second }
    }

    /// Create an error for a sequence with fewer than `min` entries.
    #[must_use]
    pub const fn too_few(field: &'static str, min: usize, actual: usize) -> Self {
        Self::TooFew { field, min, actual }
    }

    /// Check `value` against the inclusive range `min..=max`.
    ///
    /// # Example
    ///
    /// ```
    /// use geoparams_core::Error;
    ///
    /// assert!(Error::check_range("Pitch", 45, -90, 90).is_ok());
    /// assert!(Error::check_range("Pitch", 91, -90, 90).is_err());
    /// ```
    pub fn check_range(
        field: &'static str,
        value: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Result<()> {
        let (value, min, max) = (value.into(), min.into(), max.into());
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(Self::OutOfRange {
                field,
                value,
                min,
                max,
            })
        }
    }

    /// Returns `true` if a mandatory value (or choice) is missing.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(
            self,
            Self::Required { .. } | Self::RequiredOneOf { .. } | Self::RequiredWhen { .. }
        )
    }

    /// Returns `true` if two alternatives were both supplied.
    #[must_use]
    pub const fn is_mutual_exclusion(&self) -> bool {
        matches!(self, Self::MutuallyExclusive { .. })
    }

    /// Returns `true` if a value or a count is outside its bounds.
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(self, Self::TooFew { .. } | Self::OutOfRange { .. })
    }

    /// Names of the fields this error is about.
    #[must_use]
    pub fn fields(&self) -> Vec<&'static str> {
        match *self {
            Self::Required { field }
            | Self::TooFew { field, .. }
            | Self::OutOfRange { field, .. } => vec![field],
            Self::RequiredWhen { field, when } => vec![field, when],
            Self::RequiredOneOf { first, second } | Self::MutuallyExclusive { first, second } => {
                vec![first, second]
            }
        }
    }
}
