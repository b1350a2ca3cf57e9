//! The nine basic (non-nesting) slash-command option builders.
//!
//! All nine share the same draft shape and the same serialization flow; a
//! macro stamps out the struct, its trait wiring, and `to_json`, and the
//! per-kind extras (choices, bounds, lengths, channel filters) are added as
//! inherent impls below.

use crate::error::ValidationError;
use crate::interactions::mixins::{
    IntoOption, OptionBase, SharedNameAndDescription, WithAutocomplete, WithChannelTypes,
    WithChoices,
};
use crate::types::{CommandOptionData, CommandOptionType, NameAndDescriptionData, OptionBound};
use crate::validation::should_validate;

use super::validate;

macro_rules! basic_option {
    ($(#[$docs:meta])* $name:ident, $kind:ident, $validator:ident) => {
        $(#[$docs])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            data: CommandOptionData,
        }

        impl $name {
            /// An empty draft.
            pub fn new() -> Self {
                Self {
                    data: CommandOptionData::new(CommandOptionType::$kind),
                }
            }

            /// Validate and snapshot the draft into its wire shape.
            ///
            /// `validation_override` forces validation on (`Some(true)`) or
            /// off (`Some(false)`) for this call only; `None` defers to the
            /// global toggle. The builder is left untouched and reusable.
            pub fn to_json(
                &self,
                validation_override: Option<bool>,
            ) -> Result<CommandOptionData, ValidationError> {
                let data = self.data.clone();

                if should_validate(validation_override) {
                    validate::$validator(&data)?;
                }

                Ok(data)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl SharedNameAndDescription for $name {
            fn name_and_description_mut(&mut self) -> &mut NameAndDescriptionData {
                &mut self.data.base
            }
        }

        impl OptionBase for $name {
            fn option_data_mut(&mut self) -> &mut CommandOptionData {
                &mut self.data
            }
        }
    };
}

basic_option!(
    /// Builder for an attachment option.
    SlashCommandAttachmentOption, Attachment, plain_option
);
basic_option!(
    /// Builder for a boolean option.
    SlashCommandBooleanOption, Boolean, plain_option
);
basic_option!(
    /// Builder for a channel option, optionally filtered to a set of channel
    /// types.
    SlashCommandChannelOption, Channel, channel_option
);
basic_option!(
    /// Builder for an integer option. Supports choices, autocomplete, and
    /// whole-number value bounds.
    SlashCommandIntegerOption, Integer, integer_option
);
basic_option!(
    /// Builder for a mentionable (user or role) option.
    SlashCommandMentionableOption, Mentionable, plain_option
);
basic_option!(
    /// Builder for a floating-point number option. Supports choices,
    /// autocomplete, and value bounds.
    SlashCommandNumberOption, Number, number_option
);
basic_option!(
    /// Builder for a role option.
    SlashCommandRoleOption, Role, plain_option
);
basic_option!(
    /// Builder for a string option. Supports choices, autocomplete, and
    /// length bounds.
    SlashCommandStringOption, String, string_option
);
basic_option!(
    /// Builder for a user option.
    SlashCommandUserOption, User, plain_option
);

impl WithChoices for SlashCommandStringOption {}
impl WithAutocomplete for SlashCommandStringOption {}
impl WithChoices for SlashCommandIntegerOption {}
impl WithAutocomplete for SlashCommandIntegerOption {}
impl WithChoices for SlashCommandNumberOption {}
impl WithAutocomplete for SlashCommandNumberOption {}

impl WithChannelTypes for SlashCommandChannelOption {}

impl SlashCommandStringOption {
    /// Set the minimum input length.
    pub fn set_min_length(mut self, min_length: u16) -> Self {
        self.data.min_length = Some(min_length);
        self
    }

    /// Clear the minimum input length.
    pub fn clear_min_length(mut self) -> Self {
        self.data.min_length = None;
        self
    }

    /// Set the maximum input length.
    pub fn set_max_length(mut self, max_length: u16) -> Self {
        self.data.max_length = Some(max_length);
        self
    }

    /// Clear the maximum input length.
    pub fn clear_max_length(mut self) -> Self {
        self.data.max_length = None;
        self
    }
}

impl SlashCommandIntegerOption {
    /// Set the minimum accepted value.
    pub fn set_min_value(mut self, min_value: i64) -> Self {
        self.data.min_value = Some(OptionBound::Integer(min_value));
        self
    }

    /// Clear the minimum accepted value.
    pub fn clear_min_value(mut self) -> Self {
        self.data.min_value = None;
        self
    }

    /// Set the maximum accepted value.
    pub fn set_max_value(mut self, max_value: i64) -> Self {
        self.data.max_value = Some(OptionBound::Integer(max_value));
        self
    }

    /// Clear the maximum accepted value.
    pub fn clear_max_value(mut self) -> Self {
        self.data.max_value = None;
        self
    }
}

impl SlashCommandNumberOption {
    /// Set the minimum accepted value.
    pub fn set_min_value(mut self, min_value: f64) -> Self {
        self.data.min_value = Some(OptionBound::Number(min_value));
        self
    }

    /// Clear the minimum accepted value.
    pub fn clear_min_value(mut self) -> Self {
        self.data.min_value = None;
        self
    }

    /// Set the maximum accepted value.
    pub fn set_max_value(mut self, max_value: f64) -> Self {
        self.data.max_value = Some(OptionBound::Number(max_value));
        self
    }

    /// Clear the maximum accepted value.
    pub fn clear_max_value(mut self) -> Self {
        self.data.max_value = None;
        self
    }
}

// ---------------------------------------------------------------------------
// Kind-erased option storage
// ---------------------------------------------------------------------------

/// A basic option of any of the nine kinds, as stored by command and
/// subcommand builders.
#[derive(Debug, Clone, PartialEq)]
pub enum BasicOption {
    Attachment(SlashCommandAttachmentOption),
    Boolean(SlashCommandBooleanOption),
    Channel(SlashCommandChannelOption),
    Integer(SlashCommandIntegerOption),
    Mentionable(SlashCommandMentionableOption),
    Number(SlashCommandNumberOption),
    Role(SlashCommandRoleOption),
    String(SlashCommandStringOption),
    User(SlashCommandUserOption),
}

impl BasicOption {
    /// Serialize the wrapped option, dispatching to its per-kind validator.
    pub(crate) fn to_json(
        &self,
        validation_override: Option<bool>,
    ) -> Result<CommandOptionData, ValidationError> {
        match self {
            Self::Attachment(option) => option.to_json(validation_override),
            Self::Boolean(option) => option.to_json(validation_override),
            Self::Channel(option) => option.to_json(validation_override),
            Self::Integer(option) => option.to_json(validation_override),
            Self::Mentionable(option) => option.to_json(validation_override),
            Self::Number(option) => option.to_json(validation_override),
            Self::Role(option) => option.to_json(validation_override),
            Self::String(option) => option.to_json(validation_override),
            Self::User(option) => option.to_json(validation_override),
        }
    }
}

macro_rules! basic_option_from {
    ($builder:ident, $variant:ident) => {
        impl From<$builder> for BasicOption {
            fn from(option: $builder) -> Self {
                Self::$variant(option)
            }
        }
    };
}

basic_option_from!(SlashCommandAttachmentOption, Attachment);
basic_option_from!(SlashCommandBooleanOption, Boolean);
basic_option_from!(SlashCommandChannelOption, Channel);
basic_option_from!(SlashCommandIntegerOption, Integer);
basic_option_from!(SlashCommandMentionableOption, Mentionable);
basic_option_from!(SlashCommandNumberOption, Number);
basic_option_from!(SlashCommandRoleOption, Role);
basic_option_from!(SlashCommandStringOption, String);
basic_option_from!(SlashCommandUserOption, User);

// ---------------------------------------------------------------------------
// Shared add-option surface
// ---------------------------------------------------------------------------

/// Basic-option accumulation shared by command and subcommand builders.
///
/// Each `add_*_option` accepts either a pre-built option builder or a
/// configurator closure over a fresh one, via [`IntoOption`].
pub trait SharedSlashCommandOptions: Sized {
    /// Append one kind-erased option to the draft.
    fn push_option(&mut self, option: BasicOption);

    /// Add an attachment option.
    fn add_attachment_option<M>(
        mut self,
        input: impl IntoOption<SlashCommandAttachmentOption, M>,
    ) -> Self {
        self.push_option(input.into_option().into());
        self
    }

    /// Add a boolean option.
    fn add_boolean_option<M>(
        mut self,
        input: impl IntoOption<SlashCommandBooleanOption, M>,
    ) -> Self {
        self.push_option(input.into_option().into());
        self
    }

    /// Add a channel option.
    fn add_channel_option<M>(
        mut self,
        input: impl IntoOption<SlashCommandChannelOption, M>,
    ) -> Self {
        self.push_option(input.into_option().into());
        self
    }

    /// Add an integer option.
    fn add_integer_option<M>(
        mut self,
        input: impl IntoOption<SlashCommandIntegerOption, M>,
    ) -> Self {
        self.push_option(input.into_option().into());
        self
    }

    /// Add a mentionable option.
    fn add_mentionable_option<M>(
        mut self,
        input: impl IntoOption<SlashCommandMentionableOption, M>,
    ) -> Self {
        self.push_option(input.into_option().into());
        self
    }

    /// Add a number option.
    fn add_number_option<M>(
        mut self,
        input: impl IntoOption<SlashCommandNumberOption, M>,
    ) -> Self {
        self.push_option(input.into_option().into());
        self
    }

    /// Add a role option.
    fn add_role_option<M>(mut self, input: impl IntoOption<SlashCommandRoleOption, M>) -> Self {
        self.push_option(input.into_option().into());
        self
    }

    /// Add a string option.
    fn add_string_option<M>(
        mut self,
        input: impl IntoOption<SlashCommandStringOption, M>,
    ) -> Self {
        self.push_option(input.into_option().into());
        self
    }

    /// Add a user option.
    fn add_user_option<M>(mut self, input: impl IntoOption<SlashCommandUserOption, M>) -> Self {
        self.push_option(input.into_option().into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrorType;
    use crate::types::{ChannelType, Choice};
    use serde_json::json;

    #[test]
    fn minimal_string_option_serializes_without_optional_keys() {
        let option = SlashCommandStringOption::new()
            .set_name("input")
            .set_description("Enter a string");

        let value = serde_json::to_value(option.to_json(Some(true)).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({ "type": 3, "name": "input", "description": "Enter a string" })
        );
    }

    #[test]
    fn missing_description_is_rejected() {
        let option = SlashCommandBooleanOption::new().set_name("flag");

        let err = option.to_json(Some(true)).unwrap_err();
        assert_eq!(err.field(), "description");
        assert!(matches!(err.kind(), ValidationErrorType::FieldMissing));
    }

    #[test]
    fn uppercase_name_is_rejected() {
        let option = SlashCommandUserOption::new()
            .set_name("OWNER")
            .set_description("The user");

        let err = option.to_json(Some(true)).unwrap_err();
        assert!(matches!(err.kind(), ValidationErrorType::CharsetInvalid));
    }

    #[test]
    fn autocomplete_and_choices_conflict_in_either_order() {
        let base = || {
            SlashCommandStringOption::new()
                .set_name("animal")
                .set_description("Pick one")
        };

        let choices_first = base()
            .add_choices([Choice::string("Otter", "otter")])
            .set_autocomplete(true);
        let autocomplete_first = base()
            .set_autocomplete(true)
            .add_choices([Choice::string("Otter", "otter")]);

        for option in [choices_first, autocomplete_first] {
            let err = option.to_json(Some(true)).unwrap_err();
            assert!(matches!(
                err.kind(),
                ValidationErrorType::ChoicesWithAutocomplete
            ));
        }
    }

    #[test]
    fn autocomplete_with_empty_choice_list_is_fine() {
        let option = SlashCommandStringOption::new()
            .set_name("animal")
            .set_description("Pick one")
            .set_choices([])
            .set_autocomplete(true);

        assert!(option.to_json(Some(true)).is_ok());
    }

    #[test]
    fn string_option_rejects_numeric_choice() {
        let option = SlashCommandStringOption::new()
            .set_name("animal")
            .set_description("Pick one")
            .add_choices([Choice::integer("Otter", 1)]);

        let err = option.to_json(Some(true)).unwrap_err();
        assert_eq!(err.field(), "choices[0].value");
        assert!(matches!(
            err.kind(),
            ValidationErrorType::ChoiceValueTypeMismatch { .. }
        ));
    }

    #[test]
    fn number_option_accepts_whole_number_choices() {
        let option = SlashCommandNumberOption::new()
            .set_name("ratio")
            .set_description("A ratio")
            .add_choices([Choice::integer("One", 1), Choice::number("Half", 0.5)]);

        assert!(option.to_json(Some(true)).is_ok());
    }

    #[test]
    fn integer_option_rejects_fractional_bound() {
        // The bound arrives as a float through deserialized drafts; the
        // typed setter cannot produce one, so poke the draft directly.
        let mut option = SlashCommandIntegerOption::new()
            .set_name("count")
            .set_description("How many");
        option.option_data_mut().min_value = Some(OptionBound::Number(1.5));

        let err = option.to_json(Some(true)).unwrap_err();
        assert_eq!(err.field(), "min_value");
        assert!(matches!(err.kind(), ValidationErrorType::BoundNotInteger));

        option.option_data_mut().min_value = Some(OptionBound::Number(2.0));
        assert!(option.to_json(Some(true)).is_ok());
    }

    #[test]
    fn channel_option_rejects_dm_channel_type() {
        let option = SlashCommandChannelOption::new()
            .set_name("where")
            .set_description("Target channel")
            .add_channel_types([ChannelType::GuildText, ChannelType::Dm]);

        let err = option.to_json(Some(true)).unwrap_err();
        assert!(matches!(
            err.kind(),
            ValidationErrorType::ChannelTypeDisallowed {
                kind: ChannelType::Dm
            }
        ));
    }

    #[test]
    fn validation_can_be_skipped_per_call() {
        let option = SlashCommandRoleOption::new();
        assert!(option.to_json(Some(true)).is_err());
        assert!(option.to_json(Some(false)).is_ok());
    }

    #[test]
    fn builder_is_reusable_after_serialization() {
        let option = SlashCommandStringOption::new()
            .set_name("input")
            .set_description("Enter a string");

        let first = option.to_json(Some(true)).unwrap();
        let second = option.to_json(Some(true)).unwrap();
        assert_eq!(first, second);
    }
}
