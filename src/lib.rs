//! Fluent builders for Discord interaction payloads.
//!
//! Builders assemble slash commands, context-menu commands, modals, and
//! embeds into wire-accurate JSON. Setters never validate, so drafts can be
//! assembled in any order and pass through invalid intermediate states;
//! every rule is checked once, over the final snapshot, when `to_json` is
//! called. Validation can be skipped per call or disabled globally with
//! [`disable_validation`].
//!
//! ```
//! use discord_builders::{
//!     OptionBase, SharedNameAndDescription, SharedSlashCommandOptions, SlashCommandBuilder,
//!     SlashCommandStringOption,
//! };
//!
//! let command = SlashCommandBuilder::new()
//!     .set_name("echo")
//!     .set_description("Repeat a message")
//!     .add_string_option(|option: SlashCommandStringOption| {
//!         option
//!             .set_name("message")
//!             .set_description("What to repeat")
//!             .set_required(true)
//!     });
//!
//! let payload = serde_json::to_string(&command.to_json(None)?).unwrap();
//! # let _ = payload;
//! # Ok::<(), discord_builders::ValidationError>(())
//! ```

pub mod error;
pub mod interactions;
pub mod messages;
pub mod types;
pub mod validation;

pub(crate) mod validate;

pub use self::error::{ValidationError, ValidationErrorType};
pub use self::interactions::{
    ActionRowBuilder, BasicOption, ContextMenuCommandBuilder, IntoOption, ModalBuilder,
    OptionBase, SharedCommand, SharedNameAndDescription, SharedSlashCommandOptions,
    SlashCommandAttachmentOption, SlashCommandBooleanOption, SlashCommandBuilder,
    SlashCommandChannelOption, SlashCommandIntegerOption, SlashCommandMentionableOption,
    SlashCommandNumberOption, SlashCommandRoleOption, SlashCommandStringOption,
    SlashCommandSubcommandBuilder, SlashCommandSubcommandGroupBuilder, SlashCommandUserOption,
    TextInputBuilder, WithAutocomplete, WithChannelTypes, WithChoices, ALLOWED_CHANNEL_TYPES,
};
pub use self::messages::EmbedBuilder;
pub use self::validation::{disable_validation, enable_validation, is_validation_enabled};
