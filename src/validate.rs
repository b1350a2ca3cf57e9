//! Primitive validity rules shared by the composite payload validators.
//!
//! Each function rejects one malformed scalar or collection value and
//! reports it as a [`ValidationError`] with the offending field's path. No
//! coercion is ever attempted. The cross-field rules (choices vs
//! autocomplete, option homogeneity, and so on) live next to the builders
//! they protect.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::{ValidationError, ValidationErrorType};

/// Charset for slash-command and option names: lowercase letters, modifier
/// and other letters, numbers, the Devanagari and Thai scripts, `_` and `-`.
static COMMAND_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{Ll}\p{Lm}\p{Lo}\p{N}\p{Devanagari}\p{Thai}_-]+$").unwrap()
});

/// Charset for context-menu command names. Broader than slash names: any
/// letter case, punctuation, and embedded single spaces between words.
static CONTEXT_MENU_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^( *[\p{P}\p{L}\p{N}\p{Devanagari}\p{Thai}]+ *)+$").unwrap()
});

/// Protocols allowed for generic URL fields.
const URL_PROTOCOLS: &[&str] = &["http", "https"];

/// Protocols allowed for icon URL fields.
const ICON_URL_PROTOCOLS: &[&str] = &["http", "https", "attachment"];

/// Require that an optional field was set, returning the value.
pub(crate) fn required<'a, T>(
    field: &'static str,
    value: Option<&'a T>,
) -> Result<&'a T, ValidationError> {
    value.ok_or_else(|| ValidationError::new(field, ValidationErrorType::FieldMissing))
}

/// Character-count bounds check. Lengths follow `char` counts, matching how
/// the platform measures user-visible text.
pub(crate) fn length(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();

    if len < min || len > max {
        return Err(ValidationError::new(
            field.to_owned(),
            ValidationErrorType::LengthInvalid { len, min, max },
        ));
    }

    Ok(())
}

/// Slash-command name: length 1–32 and the restricted lowercase charset.
pub(crate) fn command_name(field: &str, value: &str) -> Result<(), ValidationError> {
    length(field, value, 1, 32)?;

    if !COMMAND_NAME_RE.is_match(value) {
        return Err(ValidationError::new(
            field.to_owned(),
            ValidationErrorType::CharsetInvalid,
        ));
    }

    Ok(())
}

/// Context-menu command name: length 1–32 and the broader charset that
/// permits mixed case, punctuation, and spaces.
pub(crate) fn context_menu_name(field: &str, value: &str) -> Result<(), ValidationError> {
    length(field, value, 1, 32)?;

    if !CONTEXT_MENU_NAME_RE.is_match(value) {
        return Err(ValidationError::new(
            field.to_owned(),
            ValidationErrorType::CharsetInvalid,
        ));
    }

    Ok(())
}

/// Command or option description: length 1–100.
pub(crate) fn description(field: &str, value: &str) -> Result<(), ValidationError> {
    length(field, value, 1, 100)
}

/// Permissions string: must not contain a decimal point.
pub(crate) fn permissions_string(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.contains('.') {
        return Err(ValidationError::new(
            field.to_owned(),
            ValidationErrorType::PermissionsDecimalPoint,
        ));
    }

    Ok(())
}

fn url_with_protocols(
    field: &str,
    value: &str,
    allowed: &[&str],
) -> Result<(), ValidationError> {
    let parsed = Url::parse(value)
        .map_err(|_| ValidationError::new(field.to_owned(), ValidationErrorType::UrlInvalid))?;

    if !allowed.contains(&parsed.scheme()) {
        return Err(ValidationError::new(
            field.to_owned(),
            ValidationErrorType::UrlProtocolDisallowed {
                protocol: parsed.scheme().to_owned(),
            },
        ));
    }

    Ok(())
}

/// Generic URL: must parse and use `http:` or `https:`.
pub(crate) fn url(field: &str, value: &str) -> Result<(), ValidationError> {
    url_with_protocols(field, value, URL_PROTOCOLS)
}

/// Icon URL: like [`url`], but additionally permits `attachment:`.
pub(crate) fn icon_url(field: &str, value: &str) -> Result<(), ValidationError> {
    url_with_protocols(field, value, ICON_URL_PROTOCOLS)
}

/// Collection size bounds check.
pub(crate) fn count(
    field: &str,
    count: usize,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    if count < min || count > max {
        return Err(ValidationError::new(
            field.to_owned(),
            ValidationErrorType::CountInvalid { count, min, max },
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names() {
        assert!(command_name("name", "ping").is_ok());
        assert!(command_name("name", "hello-world_command").is_ok());
        // Mixed scripts are fine as long as they stay in the allowed classes.
        assert!(command_name("name", "o_comandă").is_ok());
        assert!(command_name("name", "どうも").is_ok());

        assert!(command_name("name", "").is_err());
        assert!(command_name("name", "ABC").is_err());
        assert!(command_name("name", "help ping").is_err());
        assert!(command_name("name", "🦦").is_err());
        assert!(command_name("name", &"q".repeat(33)).is_err());
    }

    #[test]
    fn context_menu_names() {
        assert!(context_menu_name("name", "A COMMAND").is_ok());
        assert!(context_menu_name("name", "o_comandă").is_ok());
        assert!(context_menu_name("name", "this is with sentence").is_ok());

        assert!(context_menu_name("name", "").is_err());
        assert!(context_menu_name("name", &"q".repeat(33)).is_err());
    }

    #[test]
    fn descriptions() {
        assert!(description("description", "This is an OwO moment fur sure!~").is_ok());
        assert!(description("description", "").is_err());
        assert!(description("description", &"q".repeat(101)).is_err());
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // Three chars, nine bytes.
        assert!(length("name", "どうも", 1, 3).is_ok());
    }

    #[test]
    fn permission_strings() {
        assert!(permissions_string("default_member_permissions", "1").is_ok());
        assert!(permissions_string("default_member_permissions", "1.1").is_err());
    }

    #[test]
    fn urls() {
        assert!(url("url", "https://example.com").is_ok());
        assert!(url("url", "attachment://file.png").is_err());
        assert!(url("url", "not a url").is_err());

        assert!(icon_url("icon_url", "attachment://file.png").is_ok());
        assert!(icon_url("icon_url", "ftp://example.com").is_err());
    }
}
