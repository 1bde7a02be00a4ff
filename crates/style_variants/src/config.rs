use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{flag_key, VariantError};

/// A closed enumeration of legal values for one axis.
///
/// Implemented by the typed value enums of each component (`ButtonSize`,
/// `InputState`, ...). Typed selections cannot name an illegal value; string
/// input goes through [`AxisValue::parse`].
pub trait AxisValue: Copy + 'static {
    /// Axis this enum selects a value for.
    const AXIS: &'static str;
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Value key as listed in the variant table.
    fn key(self) -> &'static str;

    /// Parses a value key, rejecting anything outside [`AxisValue::ALL`].
    fn parse(raw: &str) -> Result<Self, VariantError> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|value| value.key() == raw)
            .ok_or_else(|| VariantError::invalid_value(Self::AXIS, raw))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Per-render component configuration: a partial axis selection plus caller
/// override tokens.
///
/// Serializes as a flat map, e.g. `{"size": "lg", "class": "mt-4"}`. Flag axes
/// also accept JSON booleans (`{"with_icon": true}`).
pub struct VariantConfig {
    #[serde(
        default,
        rename = "class",
        skip_serializing_if = "Vec::is_empty",
        with = "class_list"
    )]
    overrides: Vec<String>,
    #[serde(flatten)]
    selections: BTreeMap<String, AxisKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAxisKey", into = "String")]
struct AxisKey(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAxisKey {
    Flag(bool),
    Key(String),
}

impl From<RawAxisKey> for AxisKey {
    fn from(raw: RawAxisKey) -> Self {
        match raw {
            RawAxisKey::Flag(flag) => Self(flag_key(flag).to_string()),
            RawAxisKey::Key(key) => Self(key),
        }
    }
}

impl From<AxisKey> for String {
    fn from(key: AxisKey) -> Self {
        key.0
    }
}

impl VariantConfig {
    /// Empty configuration: every axis at its default, no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `value` for `axis` by name. Validated at resolution time.
    pub fn select(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.selections.insert(axis.into(), AxisKey(value.into()));
        self
    }

    /// Selects a typed value.
    pub fn select_value<V: AxisValue>(self, value: V) -> Self {
        self.select(V::AXIS, value.key())
    }

    /// Selects a typed value when present; `None` leaves the axis at its default.
    pub fn select_opt<V: AxisValue>(self, value: Option<V>) -> Self {
        match value {
            Some(value) => self.select_value(value),
            None => self,
        }
    }

    /// Selects `"true"`/`"false"` on a boolean axis.
    pub fn select_flag(self, axis: &'static str, value: bool) -> Self {
        self.select(axis, flag_key(value))
    }

    /// Appends whitespace-separated override tokens after everything already
    /// queued. Blank input is ignored.
    pub fn with_class(mut self, raw: impl AsRef<str>) -> Self {
        self.overrides
            .extend(raw.as_ref().split_whitespace().map(str::to_owned));
        self
    }

    /// Appends `raw` only when present.
    pub fn with_class_opt(self, raw: Option<impl AsRef<str>>) -> Self {
        match raw {
            Some(raw) => self.with_class(raw),
            None => self,
        }
    }

    /// Explicit selection for `axis`, if any.
    pub fn selection(&self, axis: &str) -> Option<&str> {
        self.selections.get(axis).map(|key| key.0.as_str())
    }

    pub(crate) fn selections(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selections
            .iter()
            .map(|(axis, value)| (axis.as_str(), value.0.as_str()))
    }

    /// Override tokens in the order they were supplied.
    pub fn overrides(&self) -> &[String] {
        &self.overrides
    }
}

mod class_list {
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(tokens: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&tokens.join(" "))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.split_whitespace().map(str::to_owned).collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Size {
        Sm,
        Lg,
    }

    impl AxisValue for Size {
        const AXIS: &'static str = "size";
        const ALL: &'static [Self] = &[Self::Sm, Self::Lg];

        fn key(self) -> &'static str {
            match self {
                Self::Sm => "sm",
                Self::Lg => "lg",
            }
        }
    }

    #[test]
    fn typed_selection_records_axis_and_key() {
        let config = VariantConfig::new()
            .select_value(Size::Lg)
            .select_opt(None::<Size>)
            .select_flag("with_icon", true);
        assert_eq!(config.selection("size"), Some("lg"));
        assert_eq!(config.selection("with_icon"), Some("true"));
        assert_eq!(config.selection("variant"), None);
    }

    #[test]
    fn parse_accepts_members_and_rejects_everything_else() {
        assert_eq!(Size::parse(" sm "), Ok(Size::Sm));
        assert_eq!(
            Size::parse("xxl"),
            Err(VariantError::InvalidVariantValue {
                axis: "size".to_string(),
                value: "xxl".to_string(),
            })
        );
    }

    #[test]
    fn class_overrides_split_on_whitespace_and_keep_call_order() {
        let config = VariantConfig::new()
            .with_class("pl-10")
            .with_class("  ")
            .with_class_opt(Some("mt-4  w-full"))
            .with_class_opt(None::<&str>);
        assert_eq!(config.overrides(), ["pl-10", "mt-4", "w-full"]);
    }

    #[test]
    fn deserializes_flat_map_with_class_field() {
        let config: VariantConfig =
            serde_json::from_str(r#"{"size": "lg", "variant": "outline", "class": "mt-4 w-full"}"#)
                .expect("config");
        assert_eq!(config.selection("size"), Some("lg"));
        assert_eq!(config.selection("variant"), Some("outline"));
        assert_eq!(config.selection("class"), None);
        assert_eq!(config.overrides(), ["mt-4", "w-full"]);

        let encoded = serde_json::to_value(&config).expect("encode");
        assert_eq!(
            encoded,
            serde_json::json!({"size": "lg", "variant": "outline", "class": "mt-4 w-full"})
        );
    }

    #[test]
    fn flag_axes_accept_json_booleans() {
        let config: VariantConfig =
            serde_json::from_str(r#"{"with_icon": true, "interactive": false, "size": "sm"}"#)
                .expect("config");
        assert_eq!(config.selection("with_icon"), Some("true"));
        assert_eq!(config.selection("interactive"), Some("false"));
        assert_eq!(config.selection("size"), Some("sm"));
        assert_eq!(
            config,
            VariantConfig::new()
                .select_flag("with_icon", true)
                .select_flag("interactive", false)
                .select_value(Size::Sm)
        );

        let encoded = serde_json::to_value(&config).expect("encode");
        assert_eq!(encoded["with_icon"], serde_json::json!("true"));
    }

    #[test]
    fn empty_json_object_is_the_default_configuration() {
        let config: VariantConfig = serde_json::from_str("{}").expect("config");
        assert_eq!(config, VariantConfig::new());
    }
}
