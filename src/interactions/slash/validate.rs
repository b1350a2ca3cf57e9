//! Composite validators for slash-command payload shapes.
//!
//! Each function checks one whole serialized snapshot, including the
//! relationships the primitive rules cannot see alone: the
//! choices/autocomplete exclusivity, option-list homogeneity, and the
//! subcommand nesting shape. They run exactly once per serialization call,
//! over final state, so the order in which setters ran never matters.

use crate::error::{ValidationError, ValidationErrorType};
use crate::types::{ChoiceValue, CommandData, CommandOptionData, CommandOptionType};
use crate::validate;

use super::ALLOWED_CHANNEL_TYPES;

/// Shared checks for all nine basic option kinds: a valid name and
/// description must be present and the type discriminant must be basic.
fn basic_option(data: &CommandOptionData) -> Result<(), ValidationError> {
    let name = validate::required("name", data.base.name.as_ref())?;
    validate::command_name("name", name)?;

    let description = validate::required("description", data.base.description.as_ref())?;
    validate::description("description", description)?;

    if !data.kind.is_basic() {
        return Err(ValidationError::new(
            "type",
            ValidationErrorType::OptionTypeInvalid {
                kind: data.kind,
                expected: "a basic option type",
            },
        ));
    }

    Ok(())
}

/// The exclusive-or block between autocomplete and choices: either
/// autocomplete is enabled and choices are absent or empty, or choices are
/// an optional list of at most 25 entries whose values match `check`.
fn autocomplete_or_choices(
    data: &CommandOptionData,
    expected: &'static str,
    check: fn(&ChoiceValue) -> bool,
) -> Result<(), ValidationError> {
    let has_choices = data.choices.as_ref().is_some_and(|choices| !choices.is_empty());

    if data.autocomplete == Some(true) && has_choices {
        return Err(ValidationError::new(
            "autocomplete",
            ValidationErrorType::ChoicesWithAutocomplete,
        ));
    }

    if let Some(choices) = &data.choices {
        validate::count("choices", choices.len(), 0, 25)?;

        for (index, choice) in choices.iter().enumerate() {
            let field = format!("choices[{index}]");

            validate::length(&format!("{field}.name"), &choice.name, 1, 100)?;

            if !check(&choice.value) {
                return Err(ValidationError::new(
                    format!("{field}.value"),
                    ValidationErrorType::ChoiceValueTypeMismatch { expected },
                ));
            }

            if let ChoiceValue::String(value) = &choice.value {
                validate::length(&format!("{field}.value"), value, 1, 100)?;
            }
        }
    }

    Ok(())
}

/// An option kind with no extra fields beyond the shared base:
/// attachment, boolean, mentionable, role, user.
pub(crate) fn plain_option(data: &CommandOptionData) -> Result<(), ValidationError> {
    basic_option(data)
}

pub(crate) fn string_option(data: &CommandOptionData) -> Result<(), ValidationError> {
    basic_option(data)?;
    autocomplete_or_choices(data, "a string", |value| {
        matches!(value, ChoiceValue::String(_))
    })
}

pub(crate) fn integer_option(data: &CommandOptionData) -> Result<(), ValidationError> {
    basic_option(data)?;
    autocomplete_or_choices(data, "a whole number", |value| {
        matches!(value, ChoiceValue::Integer(_))
    })?;

    for (field, bound) in [("min_value", data.min_value), ("max_value", data.max_value)] {
        if let Some(bound) = bound {
            if !bound.is_whole() {
                return Err(ValidationError::new(
                    field,
                    ValidationErrorType::BoundNotInteger,
                ));
            }
        }
    }

    Ok(())
}

pub(crate) fn number_option(data: &CommandOptionData) -> Result<(), ValidationError> {
    basic_option(data)?;
    // Whole-number values are fine for a float option; the reverse is not.
    autocomplete_or_choices(data, "a number", |value| {
        matches!(value, ChoiceValue::Integer(_) | ChoiceValue::Number(_))
    })
}

pub(crate) fn channel_option(data: &CommandOptionData) -> Result<(), ValidationError> {
    basic_option(data)?;

    if let Some(channel_types) = &data.channel_types {
        for kind in channel_types {
            if !ALLOWED_CHANNEL_TYPES.contains(kind) {
                return Err(ValidationError::new(
                    "channel_types",
                    ValidationErrorType::ChannelTypeDisallowed { kind: *kind },
                ));
            }
        }
    }

    Ok(())
}

/// A subcommand: valid name/description and 0–25 basic-typed child options.
pub(crate) fn subcommand(data: &CommandOptionData) -> Result<(), ValidationError> {
    let name = validate::required("name", data.base.name.as_ref())?;
    validate::command_name("name", name)?;

    let description = validate::required("description", data.base.description.as_ref())?;
    validate::description("description", description)?;

    let options = validate::required("options", data.options.as_ref())?;
    validate::count("options", options.len(), 0, 25)?;

    for (index, option) in options.iter().enumerate() {
        if !option.kind.is_basic() {
            return Err(ValidationError::new(
                format!("options[{index}].type"),
                ValidationErrorType::OptionTypeInvalid {
                    kind: option.kind,
                    expected: "a basic option type",
                },
            ));
        }
    }

    Ok(())
}

/// A subcommand group: valid name/description and 1–25 subcommand-typed
/// child options. Groups cannot nest further groups.
pub(crate) fn subcommand_group(data: &CommandOptionData) -> Result<(), ValidationError> {
    let name = validate::required("name", data.base.name.as_ref())?;
    validate::command_name("name", name)?;

    let description = validate::required("description", data.base.description.as_ref())?;
    validate::description("description", description)?;

    let options = validate::required("options", data.options.as_ref())?;
    validate::count("options", options.len(), 1, 25)?;

    for (index, option) in options.iter().enumerate() {
        if option.kind != CommandOptionType::Subcommand {
            return Err(ValidationError::new(
                format!("options[{index}].type"),
                ValidationErrorType::OptionTypeInvalid {
                    kind: option.kind,
                    expected: "a subcommand",
                },
            ));
        }
    }

    Ok(())
}

/// A whole slash command, after its children have validated themselves:
/// name/description, the optional shared fields, and option-list
/// homogeneity — all basic options, all subcommands, or all groups, never a
/// mix at the same nesting level.
pub(crate) fn slash_command(data: &CommandData) -> Result<(), ValidationError> {
    let name = validate::required("name", data.base.name.as_ref())?;
    validate::command_name("name", name)?;

    let description = validate::required("description", data.base.description.as_ref())?;
    validate::description("description", description)?;

    if let Some(permissions) = &data.shared.default_member_permissions {
        validate::permissions_string("default_member_permissions", permissions)?;
    }

    if let Some(options) = &data.options {
        let homogeneous = options.iter().all(|option| option.kind.is_basic())
            || options
                .iter()
                .all(|option| option.kind == CommandOptionType::Subcommand)
            || options
                .iter()
                .all(|option| option.kind == CommandOptionType::SubcommandGroup);

        if !homogeneous {
            return Err(ValidationError::new(
                "options",
                ValidationErrorType::OptionsNotHomogeneous,
            ));
        }
    }

    Ok(())
}
