//! Builder for message embeds.

use crate::error::{ValidationError, ValidationErrorType};
use crate::types::{Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedMedia};
use crate::validate;
use crate::validation::should_validate;

/// Largest representable 24-bit RGB color.
const COLOR_MAX: u32 = 0xFF_FF_FF;

/// Builder for a message embed.
///
/// Every section is optional, but serialization rejects an embed with no
/// sections set at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbedBuilder {
    data: Embed,
}

impl EmbedBuilder {
    /// An empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.data.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn set_description(mut self, description: impl Into<String>) -> Self {
        self.data.description = Some(description.into());
        self
    }

    /// Set the URL the title links to.
    pub fn set_url(mut self, url: impl Into<String>) -> Self {
        self.data.url = Some(url.into());
        self
    }

    /// Set the timestamp, as an ISO 8601 string.
    pub fn set_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.data.timestamp = Some(timestamp.into());
        self
    }

    /// Set the accent color as a 24-bit RGB value.
    pub fn set_color(mut self, color: u32) -> Self {
        self.data.color = Some(color);
        self
    }

    /// Set the footer text.
    pub fn set_footer(mut self, text: impl Into<String>) -> Self {
        self.data.footer = Some(EmbedFooter {
            text: text.into(),
            icon_url: None,
        });
        self
    }

    /// Set the footer text with an icon.
    pub fn set_footer_with_icon(
        mut self,
        text: impl Into<String>,
        icon_url: impl Into<String>,
    ) -> Self {
        self.data.footer = Some(EmbedFooter {
            text: text.into(),
            icon_url: Some(icon_url.into()),
        });
        self
    }

    /// Set the large image.
    pub fn set_image(mut self, url: impl Into<String>) -> Self {
        self.data.image = Some(EmbedMedia { url: url.into() });
        self
    }

    /// Set the thumbnail image.
    pub fn set_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.data.thumbnail = Some(EmbedMedia { url: url.into() });
        self
    }

    /// Set the author name.
    pub fn set_author(mut self, name: impl Into<String>) -> Self {
        self.data.author = Some(EmbedAuthor {
            name: name.into(),
            url: None,
            icon_url: None,
        });
        self
    }

    /// Set the full author section.
    pub fn set_author_full(
        mut self,
        name: impl Into<String>,
        url: Option<String>,
        icon_url: Option<String>,
    ) -> Self {
        self.data.author = Some(EmbedAuthor {
            name: name.into(),
            url,
            icon_url,
        });
        self
    }

    /// Append one name/value field.
    pub fn add_field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.data.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline: Some(inline),
        });
        self
    }

    /// Append fields.
    pub fn add_fields(mut self, fields: impl IntoIterator<Item = EmbedField>) -> Self {
        self.data.fields.extend(fields);
        self
    }

    /// Replace all fields.
    pub fn set_fields(mut self, fields: impl IntoIterator<Item = EmbedField>) -> Self {
        self.data.fields = fields.into_iter().collect();
        self
    }

    /// Validate and snapshot the draft into its wire shape.
    ///
    /// `validation_override` forces validation on (`Some(true)`) or off
    /// (`Some(false)`) for this call only; `None` defers to the global
    /// toggle. The builder is left untouched and reusable.
    pub fn to_json(&self, validation_override: Option<bool>) -> Result<Embed, ValidationError> {
        let data = self.data.clone();

        if should_validate(validation_override) {
            validate_embed(&data)?;
        }

        Ok(data)
    }
}

impl From<Embed> for EmbedBuilder {
    fn from(data: Embed) -> Self {
        Self { data }
    }
}

fn validate_embed(data: &Embed) -> Result<(), ValidationError> {
    let empty = data.title.is_none()
        && data.description.is_none()
        && data.url.is_none()
        && data.timestamp.is_none()
        && data.color.is_none()
        && data.footer.is_none()
        && data.image.is_none()
        && data.thumbnail.is_none()
        && data.author.is_none()
        && data.fields.is_empty();
    if empty {
        return Err(ValidationError::new("embed", ValidationErrorType::EmbedEmpty));
    }

    if let Some(title) = &data.title {
        validate::length("title", title, 1, 256)?;
    }

    if let Some(description) = &data.description {
        validate::length("description", description, 1, 4096)?;
    }

    if let Some(url) = &data.url {
        validate::url("url", url)?;
    }

    if let Some(color) = data.color {
        if color > COLOR_MAX {
            return Err(ValidationError::new(
                "color",
                ValidationErrorType::ColorRangeInvalid { color },
            ));
        }
    }

    if let Some(footer) = &data.footer {
        validate::length("footer.text", &footer.text, 1, 2048)?;
        if let Some(icon_url) = &footer.icon_url {
            validate::icon_url("footer.icon_url", icon_url)?;
        }
    }

    if let Some(image) = &data.image {
        validate::url("image.url", &image.url)?;
    }

    if let Some(thumbnail) = &data.thumbnail {
        validate::url("thumbnail.url", &thumbnail.url)?;
    }

    if let Some(author) = &data.author {
        validate::length("author.name", &author.name, 1, 256)?;
        if let Some(url) = &author.url {
            validate::url("author.url", url)?;
        }
        if let Some(icon_url) = &author.icon_url {
            validate::icon_url("author.icon_url", icon_url)?;
        }
    }

    validate::count("fields", data.fields.len(), 0, 25)?;
    for (index, field) in data.fields.iter().enumerate() {
        validate::length(&format!("fields[{index}].name"), &field.name, 1, 256)?;
        validate::length(&format!("fields[{index}].value"), &field.value, 1, 1024)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrorType;
    use serde_json::json;

    #[test]
    fn empty_embed_is_rejected() {
        let err = EmbedBuilder::new().to_json(Some(true)).unwrap_err();
        assert!(matches!(err.kind(), ValidationErrorType::EmbedEmpty));
    }

    #[test]
    fn color_only_embed_is_enough() {
        let embed = EmbedBuilder::new().set_color(0xff6600);

        let value = serde_json::to_value(embed.to_json(Some(true)).unwrap()).unwrap();
        assert_eq!(value, json!({ "color": 0xff6600 }));
    }

    #[test]
    fn out_of_range_color_is_rejected() {
        let embed = EmbedBuilder::new().set_color(0x1_00_00_00);

        let err = embed.to_json(Some(true)).unwrap_err();
        assert!(matches!(
            err.kind(),
            ValidationErrorType::ColorRangeInvalid { color: 0x1_00_00_00 }
        ));
    }

    #[test]
    fn footer_icon_allows_attachment_protocol() {
        let embed = EmbedBuilder::new().set_footer_with_icon("hi", "attachment://icon.png");
        assert!(embed.to_json(Some(true)).is_ok());

        // The title URL does not.
        let embed = EmbedBuilder::new()
            .set_title("hi")
            .set_url("attachment://icon.png");
        let err = embed.to_json(Some(true)).unwrap_err();
        assert!(matches!(
            err.kind(),
            ValidationErrorType::UrlProtocolDisallowed { .. }
        ));
    }

    #[test]
    fn field_errors_carry_their_index() {
        let embed = EmbedBuilder::new()
            .add_field("ok", "fine", false)
            .add_field("bad", "", false);

        let err = embed.to_json(Some(true)).unwrap_err();
        assert_eq!(err.field(), "fields[1].value");
    }

    #[test]
    fn builder_round_trips_through_a_payload() {
        let embed = EmbedBuilder::new()
            .set_title("Status")
            .set_footer_with_icon("statusbot", "https://example.com/icon.png")
            .add_field("Uptime", "42 days", true);

        let payload = embed.to_json(Some(true)).unwrap();
        let rebuilt = EmbedBuilder::from(payload.clone());
        assert_eq!(rebuilt, embed);
        assert_eq!(rebuilt.to_json(Some(true)).unwrap(), payload);
    }

    #[test]
    fn full_embed_serializes() {
        let embed = EmbedBuilder::new()
            .set_title("Status")
            .set_description("All systems nominal")
            .set_color(0x00ff00)
            .set_author("statusbot")
            .add_field("Uptime", "42 days", true);

        let value = serde_json::to_value(embed.to_json(Some(true)).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Status",
                "description": "All systems nominal",
                "color": 0x00ff00,
                "author": { "name": "statusbot" },
                "fields": [{ "name": "Uptime", "value": "42 days", "inline": true }],
            })
        );
    }
}
