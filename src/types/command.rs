//! Wire types for application-command registration payloads.
//!
//! These mirror the Discord API docs field-for-field. Every struct doubles
//! as the mutable draft held by its builder and as the validated output of
//! `to_json`: fields are optional until set, and unset fields are omitted
//! from the serialized JSON rather than emitted as `null`.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::types::locale::LocalizationMap;

// ---------------------------------------------------------------------------
// Integer-discriminated enums
// ---------------------------------------------------------------------------

/// Type of an application command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize_repr, Serialize_repr)]
#[repr(u8)]
pub enum CommandType {
    /// A slash command, invoked by typing.
    ChatInput = 1,
    /// A context-menu command on a user.
    User = 2,
    /// A context-menu command on a message.
    Message = 3,
}

/// Type of an application command option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize_repr, Serialize_repr)]
#[repr(u8)]
pub enum CommandOptionType {
    Subcommand = 1,
    SubcommandGroup = 2,
    String = 3,
    Integer = 4,
    Boolean = 5,
    User = 6,
    Channel = 7,
    Role = 8,
    Mentionable = 9,
    Number = 10,
    Attachment = 11,
}

impl CommandOptionType {
    /// Whether this is one of the nine basic (non-nesting) option types.
    pub const fn is_basic(self) -> bool {
        !matches!(self, Self::Subcommand | Self::SubcommandGroup)
    }
}

/// Type of a channel.
///
/// The full set as transmitted by the API. Only a subset is valid for a
/// channel option's `channel_types` filter; see
/// [`ALLOWED_CHANNEL_TYPES`](crate::interactions::slash::ALLOWED_CHANNEL_TYPES).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize_repr, Serialize_repr)]
#[repr(u8)]
pub enum ChannelType {
    GuildText = 0,
    Dm = 1,
    GuildVoice = 2,
    GroupDm = 3,
    GuildCategory = 4,
    GuildAnnouncement = 5,
    AnnouncementThread = 10,
    PublicThread = 11,
    PrivateThread = 12,
    GuildStageVoice = 13,
    GuildDirectory = 14,
    GuildForum = 15,
    GuildMedia = 16,
}

/// Where a command can be invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize_repr, Serialize_repr)]
#[repr(u8)]
pub enum InteractionContextType {
    Guild = 0,
    BotDm = 1,
    PrivateChannel = 2,
}

/// Installation contexts a command is available in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize_repr, Serialize_repr)]
#[repr(u8)]
pub enum ApplicationIntegrationType {
    GuildInstall = 0,
    UserInstall = 1,
}

// ---------------------------------------------------------------------------
// Permissions
// ---------------------------------------------------------------------------

bitflags::bitflags! {
    /// Guild permission bitfield.
    ///
    /// Discord transmits permission bitfields as decimal strings; this type
    /// only exists on the builder input side, where it is normalized to its
    /// string form by `set_default_member_permissions`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Permissions: u64 {
        const CREATE_INVITE = 1;
        const KICK_MEMBERS = 1 << 1;
        const BAN_MEMBERS = 1 << 2;
        const ADMINISTRATOR = 1 << 3;
        const MANAGE_CHANNELS = 1 << 4;
        const MANAGE_GUILD = 1 << 5;
        const ADD_REACTIONS = 1 << 6;
        const VIEW_AUDIT_LOG = 1 << 7;
        const VIEW_CHANNEL = 1 << 10;
        const SEND_MESSAGES = 1 << 11;
        const MANAGE_MESSAGES = 1 << 13;
        const EMBED_LINKS = 1 << 14;
        const ATTACH_FILES = 1 << 15;
        const READ_MESSAGE_HISTORY = 1 << 16;
        const MENTION_EVERYONE = 1 << 17;
        const USE_EXTERNAL_EMOJIS = 1 << 18;
        const CONNECT = 1 << 20;
        const SPEAK = 1 << 21;
        const MUTE_MEMBERS = 1 << 22;
        const DEAFEN_MEMBERS = 1 << 23;
        const MANAGE_ROLES = 1 << 28;
        const MANAGE_EVENTS = 1 << 33;
        const MODERATE_MEMBERS = 1 << 40;
    }
}

/// Accepted input forms for a default-member-permissions setter.
///
/// Everything normalizes to the string form Discord expects. A float input
/// stringifies as-is; if the result contains a decimal point it is rejected
/// at validation time, which catches stray float coercions upstream.
#[derive(Debug, Clone)]
pub enum PermissionsInput {
    /// A typed permission bitfield.
    Flags(Permissions),
    /// A raw bitfield value.
    Bits(u64),
    /// A numeric value of unknown provenance. Stringified verbatim.
    Float(f64),
    /// A pre-formatted permissions string.
    Text(String),
}

impl PermissionsInput {
    /// Normalize to the decimal-string wire form.
    pub(crate) fn into_string(self) -> String {
        match self {
            Self::Flags(flags) => flags.bits().to_string(),
            Self::Bits(bits) => bits.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Text(text) => text,
        }
    }
}

impl From<Permissions> for PermissionsInput {
    fn from(flags: Permissions) -> Self {
        Self::Flags(flags)
    }
}

impl From<u64> for PermissionsInput {
    fn from(bits: u64) -> Self {
        Self::Bits(bits)
    }
}

impl From<f64> for PermissionsInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for PermissionsInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for PermissionsInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

// ---------------------------------------------------------------------------
// Shared field groups
// ---------------------------------------------------------------------------

/// Name/description fields shared by commands, options, and subcommands.
///
/// Flattened into the owning payload, so the wire shape stays flat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameAndDescriptionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<LocalizationMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_localizations: Option<LocalizationMap>,
}

/// Fields shared by slash and context-menu commands independent of options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedCommandData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_member_permissions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contexts: Option<Vec<InteractionContextType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_types: Option<Vec<ApplicationIntegrationType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
}

// ---------------------------------------------------------------------------
// Choices
// ---------------------------------------------------------------------------

/// Value of a command option choice.
///
/// Must match the owning option's declared kind; checked at serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    String(String),
    Integer(i64),
    Number(f64),
}

/// A single choice for a string, integer, or number option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<LocalizationMap>,
    pub value: ChoiceValue,
}

impl Choice {
    /// A choice with a string value, for string options.
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            name_localizations: None,
            value: ChoiceValue::String(value.into()),
        }
    }

    /// A choice with a whole-number value, for integer options.
    pub fn integer(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            name_localizations: None,
            value: ChoiceValue::Integer(value),
        }
    }

    /// A choice with a floating-point value, for number options.
    pub fn number(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            name_localizations: None,
            value: ChoiceValue::Number(value),
        }
    }

    /// Attach a localized name for `locale`.
    pub fn with_name_localization(
        mut self,
        locale: crate::types::Locale,
        localized: impl Into<String>,
    ) -> Self {
        self.name_localizations
            .get_or_insert_with(LocalizationMap::new)
            .insert(locale, Some(localized.into()));
        self
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Minimum/maximum bound of an integer or number option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionBound {
    Integer(i64),
    Number(f64),
}

impl OptionBound {
    /// Whether the bound is a whole number.
    pub fn is_whole(self) -> bool {
        match self {
            Self::Integer(_) => true,
            Self::Number(value) => value.fract() == 0.0,
        }
    }
}

/// Wire shape of a single command option of any kind.
///
/// One struct covers all eleven option types; per-kind fields are simply
/// never set by builders of other kinds, and the per-kind validators reject
/// anything that slipped through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOptionData {
    #[serde(rename = "type")]
    pub kind: CommandOptionType,
    #[serde(flatten)]
    pub base: NameAndDescriptionData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Choice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_types: Option<Vec<ChannelType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<OptionBound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<OptionBound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u16>,
    /// Child options, for subcommands and subcommand groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<CommandOptionData>>,
}

impl CommandOptionData {
    /// An empty draft of the given kind.
    pub fn new(kind: CommandOptionType) -> Self {
        Self {
            kind,
            base: NameAndDescriptionData::default(),
            required: None,
            choices: None,
            autocomplete: None,
            channel_types: None,
            min_value: None,
            max_value: None,
            min_length: None,
            max_length: None,
            options: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Wire shape of a slash-command registration payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandData {
    #[serde(rename = "type")]
    pub kind: CommandType,
    #[serde(flatten)]
    pub base: NameAndDescriptionData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<CommandOptionData>>,
    #[serde(flatten)]
    pub shared: SharedCommandData,
}

impl CommandData {
    /// An empty slash-command draft.
    pub fn new() -> Self {
        Self {
            kind: CommandType::ChatInput,
            base: NameAndDescriptionData::default(),
            options: None,
            shared: SharedCommandData::default(),
        }
    }
}

impl Default for CommandData {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire shape of a context-menu command registration payload.
///
/// Context-menu commands have no description and no options; their names
/// allow a broader character set than slash-command names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextMenuCommandData {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CommandType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<LocalizationMap>,
    #[serde(flatten)]
    pub shared: SharedCommandData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn option_type_discriminants() {
        assert_tokens(&CommandOptionType::Subcommand, &[Token::U8(1)]);
        assert_tokens(&CommandOptionType::Attachment, &[Token::U8(11)]);
    }

    #[test]
    fn basic_option_type_excludes_nesting_kinds() {
        assert!(CommandOptionType::String.is_basic());
        assert!(CommandOptionType::Attachment.is_basic());
        assert!(!CommandOptionType::Subcommand.is_basic());
        assert!(!CommandOptionType::SubcommandGroup.is_basic());
    }

    #[test]
    fn unset_fields_are_omitted() {
        let mut data = CommandData::new();
        data.base.name = Some("ping".to_owned());
        data.base.description = Some("Check latency".to_owned());

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(
            value,
            json!({ "type": 1, "name": "ping", "description": "Check latency" })
        );
    }

    #[test]
    fn permissions_input_normalization() {
        let input: PermissionsInput = (Permissions::ADD_REACTIONS | Permissions::ATTACH_FILES).into();
        assert_eq!(input.into_string(), ((1u64 << 6) | (1 << 15)).to_string());

        let input: PermissionsInput = 8u64.into();
        assert_eq!(input.into_string(), "8");

        // Floats stringify verbatim so validation can reject the decimal point.
        let input: PermissionsInput = 1.1f64.into();
        assert_eq!(input.into_string(), "1.1");

        // A whole float has no decimal point in its string form, as in the
        // source platform's stringification.
        let input: PermissionsInput = 1.0f64.into();
        assert_eq!(input.into_string(), "1");
    }

    #[test]
    fn choice_value_round_trip() {
        let choices = vec![
            Choice::string("Fancy Pants", "fp_1"),
            Choice::integer("Very cool", 1_000),
            Choice::number("Even cooler", 2.5),
        ];

        let value = serde_json::to_value(&choices).unwrap();
        assert_eq!(
            value,
            json!([
                { "name": "Fancy Pants", "value": "fp_1" },
                { "name": "Very cool", "value": 1000 },
                { "name": "Even cooler", "value": 2.5 },
            ])
        );

        let parsed: Vec<Choice> = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, choices);
    }
}
