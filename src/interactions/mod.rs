//! Builders for interaction payloads: slash commands, context-menu
//! commands, and modals.

pub mod context_menu;
pub mod mixins;
pub mod modal;
pub mod slash;

pub use self::context_menu::ContextMenuCommandBuilder;
pub use self::mixins::{
    IntoOption, OptionBase, SharedCommand, SharedNameAndDescription, WithAutocomplete,
    WithChannelTypes, WithChoices,
};
pub use self::modal::{ActionRowBuilder, ModalBuilder, TextInputBuilder};
pub use self::slash::{
    BasicOption, SharedSlashCommandOptions, SlashCommandAttachmentOption,
    SlashCommandBooleanOption, SlashCommandBuilder, SlashCommandChannelOption,
    SlashCommandIntegerOption, SlashCommandMentionableOption, SlashCommandNumberOption,
    SlashCommandRoleOption, SlashCommandStringOption, SlashCommandSubcommandBuilder,
    SlashCommandSubcommandGroupBuilder, SlashCommandUserOption, ALLOWED_CHANNEL_TYPES,
};
