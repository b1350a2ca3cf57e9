//! Locales supported by the Discord client, and localization maps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A locale tag recognized by Discord.
///
/// Localization maps may only be keyed by these tags; anything else is
/// rejected during deserialization, which keeps the locale-map shape strict
/// without a runtime key check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "da")]
    Danish,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "en-GB")]
    EnglishGb,
    #[serde(rename = "en-US")]
    EnglishUs,
    #[serde(rename = "es-ES")]
    SpanishEs,
    #[serde(rename = "es-419")]
    SpanishLatam,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "hr")]
    Croatian,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "lt")]
    Lithuanian,
    #[serde(rename = "hu")]
    Hungarian,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "no")]
    Norwegian,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "pt-BR")]
    PortugueseBr,
    #[serde(rename = "ro")]
    Romanian,
    #[serde(rename = "fi")]
    Finnish,
    #[serde(rename = "sv-SE")]
    Swedish,
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "cs")]
    Czech,
    #[serde(rename = "el")]
    Greek,
    #[serde(rename = "bg")]
    Bulgarian,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "uk")]
    Ukrainian,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "th")]
    Thai,
    #[serde(rename = "zh-CN")]
    ChineseCn,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "zh-TW")]
    ChineseTw,
    #[serde(rename = "ko")]
    Korean,
}

/// Localized overrides for a translatable text field.
///
/// An entry with a `Some` value is an override for that locale. An entry
/// with an explicit `None` value serializes as JSON `null`, which is the
/// wire marker for "remove this locale's override" — distinguishable from a
/// locale that was never set, which is simply absent from the map.
pub type LocalizationMap = BTreeMap<Locale, Option<String>>;

#[cfg(test)]
mod tests {
    use super::{Locale, LocalizationMap};
    use serde_test::{assert_tokens, Token};

    #[test]
    fn locale_wire_tags() {
        assert_tokens(&Locale::EnglishUs, &[Token::UnitVariant {
            name: "Locale",
            variant: "en-US",
        }]);
        assert_tokens(&Locale::SpanishLatam, &[Token::UnitVariant {
            name: "Locale",
            variant: "es-419",
        }]);
    }

    #[test]
    fn unknown_locale_tag_is_rejected() {
        assert!(serde_json::from_str::<Locale>("\"en-U\"").is_err());
    }

    #[test]
    fn cleared_entry_serializes_as_null() {
        let mut map = LocalizationMap::new();
        map.insert(Locale::EnglishUs, None);
        map.insert(Locale::Bulgarian, Some("тест".to_owned()));

        let value = serde_json::to_value(&map).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "en-US": null, "bg": "тест" })
        );
    }
}
