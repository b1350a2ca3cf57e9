//! Shared field-group behaviors composed into the leaf builders.
//!
//! The upstream API shares these through multiple inheritance; here each
//! bundle is a trait with default fluent methods over a single draft
//! accessor, so a leaf builder opts in by implementing one accessor method
//! per bundle. Setters never validate — every invalid intermediate state is
//! constructible and only rejected at the serialization boundary.

use crate::types::{
    ApplicationIntegrationType, ChannelType, Choice, CommandOptionData, InteractionContextType,
    Locale, LocalizationMap, NameAndDescriptionData, PermissionsInput, SharedCommandData,
};

// ---------------------------------------------------------------------------
// Name, description, and their localizations
// ---------------------------------------------------------------------------

/// Name/description setters plus per-locale localization management.
pub trait SharedNameAndDescription: Sized {
    /// The draft fields this bundle mutates.
    fn name_and_description_mut(&mut self) -> &mut NameAndDescriptionData;

    /// Set the name.
    fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name_and_description_mut().name = Some(name.into());
        self
    }

    /// Set the description.
    fn set_description(mut self, description: impl Into<String>) -> Self {
        self.name_and_description_mut().description = Some(description.into());
        self
    }

    /// Set the localized name for one locale.
    fn set_name_localization(mut self, locale: Locale, localized: impl Into<String>) -> Self {
        self.name_and_description_mut()
            .name_localizations
            .get_or_insert_with(LocalizationMap::new)
            .insert(locale, Some(localized.into()));
        self
    }

    /// Clear the localized name for one locale.
    ///
    /// The locale stays in the map with an explicit null marker, telling the
    /// platform to remove that override — distinct from never setting it.
    fn clear_name_localization(mut self, locale: Locale) -> Self {
        self.name_and_description_mut()
            .name_localizations
            .get_or_insert_with(LocalizationMap::new)
            .insert(locale, None);
        self
    }

    /// Replace all name localizations.
    fn set_name_localizations(
        mut self,
        localized: impl IntoIterator<Item = (Locale, String)>,
    ) -> Self {
        self.name_and_description_mut().name_localizations = Some(
            localized
                .into_iter()
                .map(|(locale, name)| (locale, Some(name)))
                .collect(),
        );
        self
    }

    /// Remove the name localization map entirely; the field is then omitted
    /// from output.
    fn clear_name_localizations(mut self) -> Self {
        self.name_and_description_mut().name_localizations = None;
        self
    }

    /// Set the localized description for one locale.
    fn set_description_localization(
        mut self,
        locale: Locale,
        localized: impl Into<String>,
    ) -> Self {
        self.name_and_description_mut()
            .description_localizations
            .get_or_insert_with(LocalizationMap::new)
            .insert(locale, Some(localized.into()));
        self
    }

    /// Clear the localized description for one locale, leaving the explicit
    /// null marker.
    fn clear_description_localization(mut self, locale: Locale) -> Self {
        self.name_and_description_mut()
            .description_localizations
            .get_or_insert_with(LocalizationMap::new)
            .insert(locale, None);
        self
    }

    /// Replace all description localizations.
    fn set_description_localizations(
        mut self,
        localized: impl IntoIterator<Item = (Locale, String)>,
    ) -> Self {
        self.name_and_description_mut().description_localizations = Some(
            localized
                .into_iter()
                .map(|(locale, description)| (locale, Some(description)))
                .collect(),
        );
        self
    }

    /// Remove the description localization map entirely.
    fn clear_description_localizations(mut self) -> Self {
        self.name_and_description_mut().description_localizations = None;
        self
    }
}

// ---------------------------------------------------------------------------
// Basic option base
// ---------------------------------------------------------------------------

/// Common behavior of the nine basic option builders.
pub trait OptionBase: SharedNameAndDescription {
    /// The full option draft.
    fn option_data_mut(&mut self) -> &mut CommandOptionData;

    /// Set whether this option must be provided by the invoking user.
    fn set_required(mut self, required: bool) -> Self {
        self.option_data_mut().required = Some(required);
        self
    }
}

// ---------------------------------------------------------------------------
// Choices and autocomplete
// ---------------------------------------------------------------------------

/// Choice-list management for string, integer, and number options.
pub trait WithChoices: OptionBase {
    /// Append choices to this option.
    fn add_choices(mut self, choices: impl IntoIterator<Item = Choice>) -> Self {
        self.option_data_mut()
            .choices
            .get_or_insert_with(Vec::new)
            .extend(choices);
        self
    }

    /// Replace this option's choices.
    fn set_choices(mut self, choices: impl IntoIterator<Item = Choice>) -> Self {
        self.option_data_mut().choices = Some(choices.into_iter().collect());
        self
    }
}

/// Autocomplete flag for string, integer, and number options.
///
/// Interacts with [`WithChoices`] only through the exclusivity rule checked
/// at serialization: setting both is legal on the draft and rejected when
/// the snapshot is validated, regardless of the order the setters ran in.
pub trait WithAutocomplete: OptionBase {
    /// Set whether this option offers autocomplete suggestions.
    fn set_autocomplete(mut self, autocomplete: bool) -> Self {
        self.option_data_mut().autocomplete = Some(autocomplete);
        self
    }
}

// ---------------------------------------------------------------------------
// Channel-type filter
// ---------------------------------------------------------------------------

/// Channel-type allow-list accumulation for channel options.
pub trait WithChannelTypes: OptionBase {
    /// Append channel types the option accepts.
    fn add_channel_types(mut self, channel_types: impl IntoIterator<Item = ChannelType>) -> Self {
        self.option_data_mut()
            .channel_types
            .get_or_insert_with(Vec::new)
            .extend(channel_types);
        self
    }
}

// ---------------------------------------------------------------------------
// Command-level shared fields
// ---------------------------------------------------------------------------

/// Fields shared by slash and context-menu commands independent of options.
pub trait SharedCommand: Sized {
    /// The draft fields this bundle mutates.
    fn shared_command_mut(&mut self) -> &mut SharedCommandData;

    /// Set the interaction contexts this command can be invoked from.
    fn set_contexts(
        mut self,
        contexts: impl IntoIterator<Item = InteractionContextType>,
    ) -> Self {
        self.shared_command_mut().contexts = Some(contexts.into_iter().collect());
        self
    }

    /// Set the installation contexts this command is available in.
    fn set_integration_types(
        mut self,
        integration_types: impl IntoIterator<Item = ApplicationIntegrationType>,
    ) -> Self {
        self.shared_command_mut().integration_types =
            Some(integration_types.into_iter().collect());
        self
    }

    /// Set the permissions a member needs to run this command.
    ///
    /// Accepts a [`Permissions`] bitfield, a raw `u64`, a pre-formatted
    /// string, or a float of unknown provenance; everything is normalized to
    /// the decimal-string wire form. Pass `0u64` to disable the command by
    /// default.
    ///
    /// [`Permissions`]: crate::types::Permissions
    fn set_default_member_permissions(
        mut self,
        permissions: impl Into<PermissionsInput>,
    ) -> Self {
        self.shared_command_mut().default_member_permissions =
            Some(permissions.into().into_string());
        self
    }

    /// Clear the default member permissions.
    fn clear_default_member_permissions(mut self) -> Self {
        self.shared_command_mut().default_member_permissions = None;
        self
    }

    /// Set whether this command is age-restricted.
    fn set_nsfw(mut self, nsfw: bool) -> Self {
        self.shared_command_mut().nsfw = Some(nsfw);
        self
    }
}

// ---------------------------------------------------------------------------
// Pre-built-or-configurator child inputs
// ---------------------------------------------------------------------------

/// A child builder input: either an already built child, or a configurator
/// closure that receives a fresh default child and returns the finished one.
///
/// The `Marker` parameter only disambiguates the two blanket impls; callers
/// never name it.
pub trait IntoOption<T, Marker> {
    /// Produce the child builder.
    fn into_option(self) -> T;
}

/// Marker for the pre-built-child impl of [`IntoOption`].
pub struct PrebuiltMarker;

/// Marker for the configurator-closure impl of [`IntoOption`].
pub struct ConfiguratorMarker;

impl<T> IntoOption<T, PrebuiltMarker> for T {
    fn into_option(self) -> T {
        self
    }
}

impl<T, F> IntoOption<T, ConfiguratorMarker> for F
where
    T: Default,
    F: FnOnce(T) -> T,
{
    fn into_option(self) -> T {
        self(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommandOptionType;

    #[derive(Default)]
    struct Dummy {
        data: Option<CommandOptionData>,
    }

    impl Dummy {
        fn data(&mut self) -> &mut CommandOptionData {
            self.data
                .get_or_insert_with(|| CommandOptionData::new(CommandOptionType::String))
        }
    }

    impl SharedNameAndDescription for Dummy {
        fn name_and_description_mut(&mut self) -> &mut NameAndDescriptionData {
            &mut self.data().base
        }
    }

    #[test]
    fn clearing_one_locale_leaves_explicit_marker() {
        let mut dummy = Dummy::default()
            .set_name_localization(Locale::EnglishUs, "foobar")
            .set_name_localization(Locale::Bulgarian, "test")
            .clear_name_localization(Locale::EnglishUs);

        let map = dummy
            .name_and_description_mut()
            .name_localizations
            .clone()
            .unwrap();
        assert_eq!(map.get(&Locale::EnglishUs), Some(&None));
        assert_eq!(
            map.get(&Locale::Bulgarian),
            Some(&Some("test".to_owned()))
        );
    }

    #[test]
    fn clearing_all_locales_removes_the_map() {
        let mut dummy = Dummy::default()
            .set_name_localizations([(Locale::EnglishUs, "foobar".to_owned())])
            .clear_name_localizations();

        assert!(dummy
            .name_and_description_mut()
            .name_localizations
            .is_none());
    }

    #[test]
    fn into_option_accepts_both_input_shapes() {
        fn take<M>(input: impl IntoOption<Dummy, M>) -> Dummy {
            input.into_option()
        }

        let prebuilt = Dummy::default().set_name("prebuilt");
        let mut from_value = take(prebuilt);
        assert_eq!(
            from_value.name_and_description_mut().name.as_deref(),
            Some("prebuilt")
        );

        let mut from_closure = take(|dummy: Dummy| dummy.set_name("configured"));
        assert_eq!(
            from_closure.name_and_description_mut().name.as_deref(),
            Some("configured")
        );
    }
}
