//! Subcommand and subcommand-group builders.
//!
//! Both always emit an `options` array, even when empty, because the
//! platform treats a missing array and an empty one differently for nesting
//! payloads. Group membership is shape-checked at serialization: groups hold
//! only subcommands, subcommands hold only basic options.

use crate::error::ValidationError;
use crate::interactions::mixins::{IntoOption, SharedNameAndDescription};
use crate::types::{CommandOptionData, CommandOptionType, NameAndDescriptionData};
use crate::validation::should_validate;

use super::options::{BasicOption, SharedSlashCommandOptions};
use super::validate;

/// Builder for a subcommand: a named action holding up to 25 basic options.
#[derive(Debug, Clone, PartialEq)]
pub struct SlashCommandSubcommandBuilder {
    data: CommandOptionData,
    options: Vec<BasicOption>,
}

impl SlashCommandSubcommandBuilder {
    /// An empty draft.
    pub fn new() -> Self {
        Self {
            data: CommandOptionData::new(CommandOptionType::Subcommand),
            options: Vec::new(),
        }
    }

    /// Validate and snapshot the draft into its wire shape.
    ///
    /// Children serialize first, so a nested failure surfaces with its path
    /// prefixed (e.g. `options[1].name`). The builder is left untouched.
    pub fn to_json(
        &self,
        validation_override: Option<bool>,
    ) -> Result<CommandOptionData, ValidationError> {
        let mut data = self.data.clone();

        let mut options = Vec::with_capacity(self.options.len());
        for (index, option) in self.options.iter().enumerate() {
            let option = option
                .to_json(validation_override)
                .map_err(|source| source.at(&format!("options[{index}]")))?;
            options.push(option);
        }
        data.options = Some(options);

        if should_validate(validation_override) {
            validate::subcommand(&data)?;
        }

        Ok(data)
    }
}

impl Default for SlashCommandSubcommandBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedNameAndDescription for SlashCommandSubcommandBuilder {
    fn name_and_description_mut(&mut self) -> &mut NameAndDescriptionData {
        &mut self.data.base
    }
}

impl SharedSlashCommandOptions for SlashCommandSubcommandBuilder {
    fn push_option(&mut self, option: BasicOption) {
        self.options.push(option);
    }
}

/// Builder for a subcommand group: a named container of 1–25 subcommands.
#[derive(Debug, Clone, PartialEq)]
pub struct SlashCommandSubcommandGroupBuilder {
    data: CommandOptionData,
    options: Vec<SlashCommandSubcommandBuilder>,
}

impl SlashCommandSubcommandGroupBuilder {
    /// An empty draft.
    pub fn new() -> Self {
        Self {
            data: CommandOptionData::new(CommandOptionType::SubcommandGroup),
            options: Vec::new(),
        }
    }

    /// Add a subcommand, as a pre-built builder or a configurator closure.
    pub fn add_subcommand<M>(
        mut self,
        input: impl IntoOption<SlashCommandSubcommandBuilder, M>,
    ) -> Self {
        self.options.push(input.into_option());
        self
    }

    /// Validate and snapshot the draft into its wire shape.
    pub fn to_json(
        &self,
        validation_override: Option<bool>,
    ) -> Result<CommandOptionData, ValidationError> {
        let mut data = self.data.clone();

        let mut options = Vec::with_capacity(self.options.len());
        for (index, subcommand) in self.options.iter().enumerate() {
            let subcommand = subcommand
                .to_json(validation_override)
                .map_err(|source| source.at(&format!("options[{index}]")))?;
            options.push(subcommand);
        }
        data.options = Some(options);

        if should_validate(validation_override) {
            validate::subcommand_group(&data)?;
        }

        Ok(data)
    }
}

impl Default for SlashCommandSubcommandGroupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedNameAndDescription for SlashCommandSubcommandGroupBuilder {
    fn name_and_description_mut(&mut self) -> &mut NameAndDescriptionData {
        &mut self.data.base
    }
}
