//! Builder for user and message context-menu commands.

use crate::error::{ValidationError, ValidationErrorType};
use crate::interactions::mixins::SharedCommand;
use crate::types::{
    CommandType, ContextMenuCommandData, Locale, LocalizationMap, SharedCommandData,
};
use crate::validate;
use crate::validation::should_validate;

/// Builder for a context-menu command registration payload.
///
/// Unlike slash commands these carry no description and no options, and
/// their names allow mixed case, punctuation, and spaces. The type must be
/// set to [`CommandType::User`] or [`CommandType::Message`] before
/// serialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMenuCommandBuilder {
    data: ContextMenuCommandData,
}

impl ContextMenuCommandBuilder {
    /// An empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// A draft hydrated from an existing payload.
    pub fn from_data(data: ContextMenuCommandData) -> Self {
        Self { data }
    }

    /// Set the name.
    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.data.name = Some(name.into());
        self
    }

    /// Set the command type. Only [`CommandType::User`] and
    /// [`CommandType::Message`] pass validation.
    pub fn set_kind(mut self, kind: CommandType) -> Self {
        self.data.kind = Some(kind);
        self
    }

    /// Set the localized name for one locale.
    pub fn set_name_localization(mut self, locale: Locale, localized: impl Into<String>) -> Self {
        self.data
            .name_localizations
            .get_or_insert_with(LocalizationMap::new)
            .insert(locale, Some(localized.into()));
        self
    }

    /// Clear the localized name for one locale, leaving an explicit null
    /// marker that tells the platform to remove the override.
    pub fn clear_name_localization(mut self, locale: Locale) -> Self {
        self.data
            .name_localizations
            .get_or_insert_with(LocalizationMap::new)
            .insert(locale, None);
        self
    }

    /// Replace all name localizations.
    pub fn set_name_localizations(
        mut self,
        localized: impl IntoIterator<Item = (Locale, String)>,
    ) -> Self {
        self.data.name_localizations = Some(
            localized
                .into_iter()
                .map(|(locale, name)| (locale, Some(name)))
                .collect(),
        );
        self
    }

    /// Remove the name localization map entirely; the field is then omitted
    /// from output.
    pub fn clear_name_localizations(mut self) -> Self {
        self.data.name_localizations = None;
        self
    }

    /// Validate and snapshot the draft into its wire shape.
    ///
    /// `validation_override` forces validation on (`Some(true)`) or off
    /// (`Some(false)`) for this call only; `None` defers to the global
    /// toggle. The builder is left untouched and reusable.
    pub fn to_json(
        &self,
        validation_override: Option<bool>,
    ) -> Result<ContextMenuCommandData, ValidationError> {
        let data = self.data.clone();

        if should_validate(validation_override) {
            let kind = validate::required("type", data.kind.as_ref())?;
            if !matches!(kind, CommandType::User | CommandType::Message) {
                return Err(ValidationError::new(
                    "type",
                    ValidationErrorType::CommandTypeInvalid,
                ));
            }

            let name = validate::required("name", data.name.as_ref())?;
            validate::context_menu_name("name", name)?;

            if let Some(permissions) = &data.shared.default_member_permissions {
                validate::permissions_string("default_member_permissions", permissions)?;
            }
        }

        Ok(data)
    }
}

impl SharedCommand for ContextMenuCommandBuilder {
    fn shared_command_mut(&mut self) -> &mut SharedCommandData {
        &mut self.data.shared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrorType;
    use serde_json::json;

    #[test]
    fn minimal_user_command_serializes() {
        let command = ContextMenuCommandBuilder::new()
            .set_kind(CommandType::User)
            .set_name("Show Avatar");

        let value = serde_json::to_value(command.to_json(Some(true)).unwrap()).unwrap();
        assert_eq!(value, json!({ "type": 2, "name": "Show Avatar" }));
    }

    #[test]
    fn chat_input_kind_is_rejected() {
        let command = ContextMenuCommandBuilder::new()
            .set_kind(CommandType::ChatInput)
            .set_name("Show Avatar");

        let err = command.to_json(Some(true)).unwrap_err();
        assert_eq!(err.field(), "type");
        assert!(matches!(err.kind(), ValidationErrorType::CommandTypeInvalid));
    }

    #[test]
    fn missing_kind_is_rejected() {
        let command = ContextMenuCommandBuilder::new().set_name("Show Avatar");

        let err = command.to_json(Some(true)).unwrap_err();
        assert_eq!(err.field(), "type");
        assert!(matches!(err.kind(), ValidationErrorType::FieldMissing));
    }

    #[test]
    fn names_allow_mixed_case_and_spaces() {
        let command = ContextMenuCommandBuilder::new()
            .set_kind(CommandType::Message)
            .set_name("Report to Moderators");

        assert!(command.to_json(Some(true)).is_ok());
    }

    #[test]
    fn builder_round_trips_through_from_data() {
        use crate::types::Locale;

        let command = ContextMenuCommandBuilder::new()
            .set_kind(CommandType::Message)
            .set_name("Report to Moderators")
            .set_name_localization(Locale::German, "An Moderatoren melden")
            .set_nsfw(false);

        let payload = command.to_json(Some(true)).unwrap();
        let rebuilt = ContextMenuCommandBuilder::from_data(payload.clone());
        assert_eq!(rebuilt, command);
        assert_eq!(rebuilt.to_json(Some(true)).unwrap(), payload);
    }

    #[test]
    fn float_permissions_are_rejected_at_serialization() {
        let command = ContextMenuCommandBuilder::new()
            .set_kind(CommandType::User)
            .set_name("Show Avatar")
            .set_default_member_permissions(1.1);

        let err = command.to_json(Some(true)).unwrap_err();
        assert!(matches!(
            err.kind(),
            ValidationErrorType::PermissionsDecimalPoint
        ));

        let whole = ContextMenuCommandBuilder::new()
            .set_kind(CommandType::User)
            .set_name("Show Avatar")
            .set_default_member_permissions(1.0);
        let payload = whole.to_json(Some(true)).unwrap();
        assert_eq!(payload.shared.default_member_permissions.as_deref(), Some("1"));
    }
}
