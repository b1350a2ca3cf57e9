//! Slash-command builders: the top-level command, its nine basic option
//! kinds, and the subcommand/group nesting layer.

pub mod options;
pub mod subcommands;

mod validate;

pub use self::options::{
    BasicOption, SharedSlashCommandOptions, SlashCommandAttachmentOption,
    SlashCommandBooleanOption, SlashCommandChannelOption, SlashCommandIntegerOption,
    SlashCommandMentionableOption, SlashCommandNumberOption, SlashCommandRoleOption,
    SlashCommandStringOption, SlashCommandUserOption,
};
pub use self::subcommands::{SlashCommandSubcommandBuilder, SlashCommandSubcommandGroupBuilder};

use crate::error::ValidationError;
use crate::interactions::mixins::{IntoOption, SharedCommand, SharedNameAndDescription};
use crate::types::{
    ChannelType, CommandData, CommandOptionData, NameAndDescriptionData, SharedCommandData,
};
use crate::validation::should_validate;

/// Channel types a channel option's `channel_types` filter may name.
///
/// DM, group-DM, and directory channels can never carry slash commands, so
/// filtering on them is rejected.
pub const ALLOWED_CHANNEL_TYPES: &[ChannelType] = &[
    ChannelType::GuildText,
    ChannelType::GuildVoice,
    ChannelType::GuildCategory,
    ChannelType::GuildAnnouncement,
    ChannelType::AnnouncementThread,
    ChannelType::PublicThread,
    ChannelType::PrivateThread,
    ChannelType::GuildStageVoice,
    ChannelType::GuildForum,
    ChannelType::GuildMedia,
];

/// A child of the top-level command, of any of the three shapes.
///
/// The homogeneity rule (never mix shapes at one level) is deliberately not
/// enforced here: setters stay infallible and the mix is rejected when the
/// snapshot validates.
#[derive(Debug, Clone, PartialEq)]
enum SlashCommandOption {
    Basic(BasicOption),
    Subcommand(SlashCommandSubcommandBuilder),
    SubcommandGroup(SlashCommandSubcommandGroupBuilder),
}

impl SlashCommandOption {
    fn to_json(
        &self,
        validation_override: Option<bool>,
    ) -> Result<CommandOptionData, ValidationError> {
        match self {
            Self::Basic(option) => option.to_json(validation_override),
            Self::Subcommand(subcommand) => subcommand.to_json(validation_override),
            Self::SubcommandGroup(group) => group.to_json(validation_override),
        }
    }
}

/// Builder for a slash-command registration payload.
///
/// Setters never validate; [`to_json`](Self::to_json) serializes children
/// depth-first and then validates the whole snapshot, so setter ordering
/// never matters and the builder stays reusable after serialization.
///
/// ```
/// use discord_builders::{SharedNameAndDescription, SlashCommandBuilder};
///
/// let command = SlashCommandBuilder::new()
///     .set_name("ping")
///     .set_description("Check the bot's latency");
///
/// let payload = command.to_json(None)?;
/// # Ok::<(), discord_builders::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SlashCommandBuilder {
    data: CommandData,
    options: Vec<SlashCommandOption>,
}

impl SlashCommandBuilder {
    /// An empty draft.
    pub fn new() -> Self {
        Self {
            data: CommandData::new(),
            options: Vec::new(),
        }
    }

    /// Add a subcommand, as a pre-built builder or a configurator closure.
    pub fn add_subcommand<M>(
        mut self,
        input: impl IntoOption<SlashCommandSubcommandBuilder, M>,
    ) -> Self {
        self.options
            .push(SlashCommandOption::Subcommand(input.into_option()));
        self
    }

    /// Add a subcommand group, as a pre-built builder or a configurator
    /// closure.
    pub fn add_subcommand_group<M>(
        mut self,
        input: impl IntoOption<SlashCommandSubcommandGroupBuilder, M>,
    ) -> Self {
        self.options
            .push(SlashCommandOption::SubcommandGroup(input.into_option()));
        self
    }

    /// Validate and snapshot the draft into its wire shape.
    ///
    /// `validation_override` forces validation on (`Some(true)`) or off
    /// (`Some(false)`) for this call and every nested child; `None` defers
    /// to the global toggle. Children serialize first, so a nested failure
    /// surfaces with its path prefixed (e.g. `options[2].name`). The
    /// `options` key is omitted entirely when no options were added.
    pub fn to_json(
        &self,
        validation_override: Option<bool>,
    ) -> Result<CommandData, ValidationError> {
        let mut data = self.data.clone();

        if !self.options.is_empty() {
            let mut options = Vec::with_capacity(self.options.len());
            for (index, option) in self.options.iter().enumerate() {
                let option = option
                    .to_json(validation_override)
                    .map_err(|source| source.at(&format!("options[{index}]")))?;
                options.push(option);
            }
            data.options = Some(options);
        }

        if should_validate(validation_override) {
            validate::slash_command(&data)?;
        }

        Ok(data)
    }
}

impl Default for SlashCommandBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedNameAndDescription for SlashCommandBuilder {
    fn name_and_description_mut(&mut self) -> &mut NameAndDescriptionData {
        &mut self.data.base
    }
}

impl SharedCommand for SlashCommandBuilder {
    fn shared_command_mut(&mut self) -> &mut SharedCommandData {
        &mut self.data.shared
    }
}

impl SharedSlashCommandOptions for SlashCommandBuilder {
    fn push_option(&mut self, option: BasicOption) {
        self.options.push(SlashCommandOption::Basic(option));
    }
}
