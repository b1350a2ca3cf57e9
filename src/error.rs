//! The error type returned when a payload fails validation.
//!
//! Every failure in this crate is a [`ValidationError`]: a synchronous
//! rejection of malformed draft data at the serialization boundary. There are
//! no transient or fatal errors anywhere — the caller can always correct the
//! draft and serialize again.

use std::{
    borrow::Cow,
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

use crate::types::{ChannelType, CommandOptionType};

/// A payload failed validation at the serialization boundary.
///
/// Carries the path of the offending field (e.g. `options[2].choices`) and
/// the constraint that was violated.
#[derive(Debug)]
pub struct ValidationError {
    /// Path of the field that failed validation.
    field: Cow<'static, str>,
    /// The constraint that was violated.
    kind: ValidationErrorType,
}

impl ValidationError {
    pub(crate) fn new(field: impl Into<Cow<'static, str>>, kind: ValidationErrorType) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    /// Path of the field that failed validation.
    #[must_use = "retrieving the field has no effect if left unused"]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &ValidationErrorType {
        &self.kind
    }

    /// Consume the error, returning the field path and the owned error type.
    #[must_use = "consuming the error into its parts has no effect if left unused"]
    pub fn into_parts(self) -> (Cow<'static, str>, ValidationErrorType) {
        (self.field, self.kind)
    }

    /// Return a copy of this error with `prefix` prepended to the field path.
    ///
    /// Used when a parent payload re-reports a failure from one of its
    /// children, e.g. `choices[3].name`.
    pub(crate) fn at(self, prefix: &str) -> Self {
        Self {
            field: Cow::Owned(format!("{prefix}.{}", self.field)),
            kind: self.kind,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.field)?;
        f.write_str(": ")?;

        match &self.kind {
            ValidationErrorType::FieldMissing => f.write_str("field is required but missing"),
            ValidationErrorType::LengthInvalid { len, min, max } => {
                write!(f, "length is {len}, but must be between {min} and {max}")
            }
            ValidationErrorType::CharsetInvalid => {
                f.write_str("contains characters outside the allowed set")
            }
            ValidationErrorType::PermissionsDecimalPoint => {
                f.write_str("permissions string must not contain a decimal point")
            }
            ValidationErrorType::UrlInvalid => f.write_str("value is not a valid URL"),
            ValidationErrorType::UrlProtocolDisallowed { protocol } => {
                write!(f, "URL protocol `{protocol}:` is not allowed here")
            }
            ValidationErrorType::CountInvalid { count, min, max } => {
                write!(f, "has {count} entries, but must have between {min} and {max}")
            }
            ValidationErrorType::ChoicesWithAutocomplete => {
                f.write_str("choices may not be present while autocomplete is enabled")
            }
            ValidationErrorType::ChoiceValueTypeMismatch { expected } => {
                write!(f, "choice value must be {expected}")
            }
            ValidationErrorType::ChannelTypeDisallowed { kind } => {
                write!(f, "channel type {kind:?} is not valid for a channel option")
            }
            ValidationErrorType::BoundNotInteger => {
                f.write_str("bound must be a whole number for integer options")
            }
            ValidationErrorType::OptionsNotHomogeneous => f.write_str(
                "options must be all basic options, all subcommands, or all subcommand groups",
            ),
            ValidationErrorType::OptionTypeInvalid { kind, expected } => {
                write!(f, "option of type {kind:?} is not allowed here, expected {expected}")
            }
            ValidationErrorType::CommandTypeInvalid => {
                f.write_str("command type must be user (2) or message (3)")
            }
            ValidationErrorType::ColorRangeInvalid { color } => {
                write!(f, "color {color:#08x} is outside the 24-bit RGB range")
            }
            ValidationErrorType::EmbedEmpty => {
                f.write_str("embed must have at least one field set")
            }
        }
    }
}

impl Error for ValidationError {}

/// Type of [`ValidationError`] that occurred.
#[derive(Debug)]
#[non_exhaustive]
pub enum ValidationErrorType {
    /// A field the schema requires was never set on the draft.
    FieldMissing,
    /// A string's length is outside its allowed bounds.
    LengthInvalid {
        /// Length of the provided value, in characters.
        len: usize,
        /// Minimum allowed length.
        min: usize,
        /// Maximum allowed length.
        max: usize,
    },
    /// A string contains characters outside the allowed pattern.
    CharsetInvalid,
    /// A permissions string contains a decimal point, which indicates a
    /// stray float-to-string coercion upstream.
    PermissionsDecimalPoint,
    /// A value could not be parsed as a URL.
    UrlInvalid,
    /// A URL parsed, but its protocol is not in the allow-list for this
    /// field.
    UrlProtocolDisallowed {
        /// The offending protocol, without the trailing colon.
        protocol: String,
    },
    /// A collection's entry count is outside its allowed bounds.
    CountInvalid {
        /// Number of entries provided.
        count: usize,
        /// Minimum allowed count.
        min: usize,
        /// Maximum allowed count.
        max: usize,
    },
    /// Both a non-empty choice list and `autocomplete = true` were set on
    /// the same option.
    ChoicesWithAutocomplete,
    /// A choice value's type does not match the option's declared kind.
    ChoiceValueTypeMismatch {
        /// Human-readable description of the expected value type.
        expected: &'static str,
    },
    /// A channel type outside the allowed subset was added to a channel
    /// option.
    ChannelTypeDisallowed {
        /// The disallowed channel type.
        kind: ChannelType,
    },
    /// A fractional bound was set on an integer option.
    BoundNotInteger,
    /// A command's option list mixes basic options, subcommands, and/or
    /// subcommand groups at the same nesting level.
    OptionsNotHomogeneous,
    /// An option of the wrong kind appears in a list with a fixed shape,
    /// e.g. a non-subcommand inside a subcommand group.
    OptionTypeInvalid {
        /// The offending option type.
        kind: CommandOptionType,
        /// Human-readable description of what was expected.
        expected: &'static str,
    },
    /// A context-menu command's type is not user or message.
    CommandTypeInvalid,
    /// An embed color is outside the 24-bit RGB range.
    ColorRangeInvalid {
        /// The offending color value.
        color: u32,
    },
    /// Every section of an embed is absent.
    EmbedEmpty,
}

#[cfg(test)]
mod tests {
    use super::{ValidationError, ValidationErrorType};
    use static_assertions::assert_impl_all;
    use std::error::Error;

    assert_impl_all!(ValidationError: Error, Send, Sync);

    #[test]
    fn display_includes_field_path() {
        let err = ValidationError::new(
            "name",
            ValidationErrorType::LengthInvalid {
                len: 0,
                min: 1,
                max: 32,
            },
        );
        assert_eq!(err.to_string(), "name: length is 0, but must be between 1 and 32");
    }

    #[test]
    fn at_prepends_path_segment() {
        let err = ValidationError::new("name", ValidationErrorType::CharsetInvalid);
        let err = err.at("options[2]");
        assert_eq!(err.field(), "options[2].name");
    }

    #[test]
    fn into_parts_returns_field_and_kind() {
        let err = ValidationError::new("autocomplete", ValidationErrorType::ChoicesWithAutocomplete);
        let (field, kind) = err.into_parts();
        assert_eq!(field, "autocomplete");
        assert!(matches!(kind, ValidationErrorType::ChoicesWithAutocomplete));
    }
}
