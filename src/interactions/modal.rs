//! Builders for modal interaction responses: the modal itself, its action
//! rows, and the text inputs inside them.

use crate::error::ValidationError;
use crate::types::{ActionRowData, ModalData, TextInputData, TextInputStyle};
use crate::validate;
use crate::validation::should_validate;

// ---------------------------------------------------------------------------
// Text inputs
// ---------------------------------------------------------------------------

/// Builder for a text input component.
///
/// Compares equal to another builder, or directly to a [`TextInputData`]
/// payload, when the underlying drafts match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInputBuilder {
    data: TextInputData,
}

impl TextInputBuilder {
    /// An empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the developer-defined identifier returned with the submission.
    pub fn set_custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.data.custom_id = Some(custom_id.into());
        self
    }

    /// Set the label shown above the input.
    pub fn set_label(mut self, label: impl Into<String>) -> Self {
        self.data.label = Some(label.into());
        self
    }

    /// Set the input style.
    pub fn set_style(mut self, style: TextInputStyle) -> Self {
        self.data.style = Some(style);
        self
    }

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

    /// Set the placeholder shown while the input is empty.
    pub fn set_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.data.placeholder = Some(placeholder.into());
        self
    }

    /// Clear the placeholder.
    pub fn clear_placeholder(mut self) -> Self {
        self.data.placeholder = None;
        self
    }

    /// Set the pre-filled value.
    pub fn set_value(mut self, value: impl Into<String>) -> Self {
        self.data.value = Some(value.into());
        self
    }

    /// Clear the pre-filled value.
    pub fn clear_value(mut self) -> Self {
        self.data.value = None;
        self
    }

    /// Set whether the input must be filled before submission.
    pub fn set_required(mut self, required: bool) -> Self {
        self.data.required = Some(required);
        self
    }

    /// Validate and snapshot the draft into its wire shape.
    pub fn to_json(
        &self,
        validation_override: Option<bool>,
    ) -> Result<TextInputData, ValidationError> {
        let data = self.data.clone();

        if should_validate(validation_override) {
            let custom_id = validate::required("custom_id", data.custom_id.as_ref())?;
            validate::length("custom_id", custom_id, 1, 100)?;

            let label = validate::required("label", data.label.as_ref())?;
            validate::length("label", label, 1, 45)?;

            validate::required("style", data.style.as_ref())?;

            if let Some(min_length) = data.min_length {
                validate::count("min_length", usize::from(min_length), 0, 4000)?;
            }

            if let Some(max_length) = data.max_length {
                validate::count("max_length", usize::from(max_length), 1, 4000)?;
            }

            if let Some(placeholder) = &data.placeholder {
                validate::length("placeholder", placeholder, 0, 100)?;
            }

            if let Some(value) = &data.value {
                validate::length("value", value, 0, 4000)?;
            }
        }

        Ok(data)
    }
}

impl From<TextInputData> for TextInputBuilder {
    fn from(data: TextInputData) -> Self {
        Self { data }
    }
}

impl PartialEq<TextInputData> for TextInputBuilder {
    fn eq(&self, other: &TextInputData) -> bool {
        self.data == *other
    }
}

impl PartialEq<TextInputBuilder> for TextInputData {
    fn eq(&self, other: &TextInputBuilder) -> bool {
        *self == other.data
    }
}

// ---------------------------------------------------------------------------
// Action rows
// ---------------------------------------------------------------------------

/// Builder for an action row holding 1–5 text inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionRowBuilder {
    components: Vec<TextInputBuilder>,
}

impl ActionRowBuilder {
    /// An empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text inputs to this row. Accepts builders or raw payloads.
    pub fn add_components(
        mut self,
        components: impl IntoIterator<Item = impl Into<TextInputBuilder>>,
    ) -> Self {
        self.components
            .extend(components.into_iter().map(Into::into));
        self
    }

    /// Replace this row's text inputs.
    pub fn set_components(
        mut self,
        components: impl IntoIterator<Item = impl Into<TextInputBuilder>>,
    ) -> Self {
        self.components = components.into_iter().map(Into::into).collect();
        self
    }

    /// Validate and snapshot the draft into its wire shape. Inputs serialize
    /// first; a nested failure carries its position (e.g.
    /// `components[1].label`).
    pub fn to_json(
        &self,
        validation_override: Option<bool>,
    ) -> Result<ActionRowData, ValidationError> {
        let mut data = ActionRowData::new();

        for (index, component) in self.components.iter().enumerate() {
            let component = component
                .to_json(validation_override)
                .map_err(|source| source.at(&format!("components[{index}]")))?;
            data.components.push(component);
        }

        if should_validate(validation_override) {
            validate::count("components", data.components.len(), 1, 5)?;
        }

        Ok(data)
    }
}

impl From<ActionRowData> for ActionRowBuilder {
    fn from(data: ActionRowData) -> Self {
        Self {
            components: data.components.into_iter().map(Into::into).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Modals
// ---------------------------------------------------------------------------

/// Builder for a modal interaction response: a title, a custom id, and 1–5
/// action rows of text inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalBuilder {
    title: Option<String>,
    custom_id: Option<String>,
    components: Vec<ActionRowBuilder>,
}

impl ModalBuilder {
    /// An empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// A draft hydrated from an existing payload, e.g. to edit and resend a
    /// previously built modal.
    pub fn from_data(data: ModalData) -> Self {
        Self {
            title: data.title,
            custom_id: data.custom_id,
            components: data.components.into_iter().map(Into::into).collect(),
        }
    }

    /// Set the title shown at the top of the modal.
    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the developer-defined identifier returned with the submission.
    pub fn set_custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.custom_id = Some(custom_id.into());
        self
    }

    /// Append action rows. Accepts builders or raw payloads.
    pub fn add_components(
        mut self,
        components: impl IntoIterator<Item = impl Into<ActionRowBuilder>>,
    ) -> Self {
        self.components
            .extend(components.into_iter().map(Into::into));
        self
    }

    /// Replace the action rows.
    pub fn set_components(
        mut self,
        components: impl IntoIterator<Item = impl Into<ActionRowBuilder>>,
    ) -> Self {
        self.components = components.into_iter().map(Into::into).collect();
        self
    }

    /// Validate and snapshot the draft into its wire shape.
    pub fn to_json(&self, validation_override: Option<bool>) -> Result<ModalData, ValidationError> {
        let mut data = ModalData {
            title: self.title.clone(),
            custom_id: self.custom_id.clone(),
            components: Vec::with_capacity(self.components.len()),
        };

        for (index, row) in self.components.iter().enumerate() {
            let row = row
                .to_json(validation_override)
                .map_err(|source| source.at(&format!("components[{index}]")))?;
            data.components.push(row);
        }

        if should_validate(validation_override) {
            let title = validate::required("title", data.title.as_ref())?;
            validate::length("title", title, 1, 45)?;

            let custom_id = validate::required("custom_id", data.custom_id.as_ref())?;
            validate::length("custom_id", custom_id, 1, 100)?;

            validate::count("components", data.components.len(), 1, 5)?;
        }

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrorType;
    use serde_json::json;

    fn input() -> TextInputBuilder {
        TextInputBuilder::new()
            .set_custom_id("reason")
            .set_label("Reason")
            .set_style(TextInputStyle::Paragraph)
    }

    #[test]
    fn text_input_requires_a_style() {
        let incomplete = TextInputBuilder::new()
            .set_custom_id("reason")
            .set_label("Reason");

        let err = incomplete.to_json(Some(true)).unwrap_err();
        assert_eq!(err.field(), "style");
        assert!(matches!(err.kind(), ValidationErrorType::FieldMissing));

        assert!(input().to_json(Some(true)).is_ok());
    }

    #[test]
    fn text_input_builders_compare_to_payloads() {
        let a = input();
        let b = input();
        assert_eq!(a, b);

        let payload = a.to_json(Some(true)).unwrap();
        assert_eq!(b, payload);
        assert_eq!(payload, b);

        let c = b.set_required(true);
        assert_ne!(c, payload);
    }

    #[test]
    fn empty_action_row_is_rejected() {
        let err = ActionRowBuilder::new().to_json(Some(true)).unwrap_err();
        assert_eq!(err.field(), "components");
        assert!(matches!(
            err.kind(),
            ValidationErrorType::CountInvalid { count: 0, min: 1, max: 5 }
        ));
    }

    #[test]
    fn modal_serializes_its_full_tree() {
        let modal = ModalBuilder::new()
            .set_title("Report Message")
            .set_custom_id("report")
            .add_components([ActionRowBuilder::new().add_components([input()])]);

        let value = serde_json::to_value(modal.to_json(Some(true)).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Report Message",
                "custom_id": "report",
                "components": [{
                    "type": 1,
                    "components": [{
                        "type": 4,
                        "custom_id": "reason",
                        "style": 2,
                        "label": "Reason",
                    }],
                }],
            })
        );
    }

    #[test]
    fn modal_round_trips_through_from_data() {
        let modal = ModalBuilder::new()
            .set_title("Report Message")
            .set_custom_id("report")
            .add_components([ActionRowBuilder::new().add_components([input()])]);

        let payload = modal.to_json(Some(true)).unwrap();
        let rebuilt = ModalBuilder::from_data(payload.clone());
        assert_eq!(rebuilt, modal);
        assert_eq!(rebuilt.to_json(Some(true)).unwrap(), payload);
    }

    #[test]
    fn nested_input_failure_reports_its_path() {
        let modal = ModalBuilder::new()
            .set_title("Report Message")
            .set_custom_id("report")
            .add_components([
                ActionRowBuilder::new().add_components([TextInputBuilder::new()])
            ]);

        let err = modal.to_json(Some(true)).unwrap_err();
        assert_eq!(err.field(), "components[0].components[0].custom_id");
    }
}
