//! Typed representations of the Discord interaction payloads this crate
//! assembles.
//!
//! These mirror the Discord API docs so the builders can emit (and hydrate
//! from) wire-accurate JSON without touching `serde_json::Value`. Each
//! struct is both the mutable draft owned by a builder and the validated
//! output of its `to_json`.

pub mod command;
pub mod component;
pub mod embed;
pub mod locale;

pub use self::command::{
    ApplicationIntegrationType, ChannelType, Choice, ChoiceValue, CommandData, CommandOptionData,
    CommandOptionType, CommandType, ContextMenuCommandData, InteractionContextType,
    NameAndDescriptionData, OptionBound, Permissions, PermissionsInput, SharedCommandData,
};
pub use self::component::{ActionRowData, ComponentType, ModalData, TextInputData, TextInputStyle};
pub use self::embed::{Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedMedia};
pub use self::locale::{Locale, LocalizationMap};
