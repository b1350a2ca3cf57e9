//! Wire types for modals and their components.
//!
//! A modal carries 1–5 action rows, each wrapping text inputs. Like the
//! command types, these double as builder drafts: required fields are
//! `Option` until set and validated at the serialization boundary.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Type of a message component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize_repr, Serialize_repr)]
#[repr(u8)]
pub enum ComponentType {
    ActionRow = 1,
    TextInput = 4,
}

/// Style of a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize_repr, Serialize_repr)]
#[repr(u8)]
pub enum TextInputStyle {
    /// A single-line input.
    Short = 1,
    /// A multi-line input.
    Paragraph = 2,
}

/// Wire shape of a text input component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextInputData {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TextInputStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl TextInputData {
    /// An empty text-input draft.
    pub fn new() -> Self {
        Self {
            kind: ComponentType::TextInput,
            custom_id: None,
            style: None,
            label: None,
            min_length: None,
            max_length: None,
            required: None,
            value: None,
            placeholder: None,
        }
    }
}

impl Default for TextInputData {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire shape of an action row inside a modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRowData {
    #[serde(rename = "type")]
    pub kind: ComponentType,
    #[serde(default)]
    pub components: Vec<TextInputData>,
}

impl ActionRowData {
    /// An empty action-row draft.
    pub fn new() -> Self {
        Self {
            kind: ComponentType::ActionRow,
            components: Vec::new(),
        }
    }
}

impl Default for ActionRowData {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire shape of a modal interaction response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModalData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    #[serde(default)]
    pub components: Vec<ActionRowData>,
}
