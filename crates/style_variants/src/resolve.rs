use std::collections::HashSet;
use std::fmt;

use crate::{VariantConfig, VariantDefinition, VariantError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Final ordered class-token sequence for one rendering.
pub struct ResolvedStyle {
    tokens: Vec<String>,
}

impl ResolvedStyle {
    /// Tokens in application order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no token was produced.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether `token` is part of the sequence.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|candidate| candidate == token)
    }

    /// Drops every token that a later token in the same conflict group
    /// supersedes. `group` names a token's group; tokens it returns `None` for
    /// never conflict. Survivors keep their relative order.
    pub fn merge_conflicts<F>(self, group: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut seen = HashSet::new();
        let mut tokens: Vec<String> = self
            .tokens
            .into_iter()
            .rev()
            .filter(|token| group(token).map_or(true, |key| seen.insert(key)))
            .collect();
        tokens.reverse();
        Self { tokens }
    }

    /// Space-joined value for a `class` attribute.
    pub fn class_name(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for ResolvedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_name())
    }
}

impl From<ResolvedStyle> for String {
    fn from(style: ResolvedStyle) -> Self {
        style.class_name()
    }
}

#[derive(Default)]
struct TokenList {
    tokens: Vec<String>,
    seen: HashSet<String>,
}

impl TokenList {
    fn push_raw(&mut self, raw: &str) {
        for token in raw.split_whitespace() {
            self.push(token);
        }
    }

    fn push(&mut self, token: &str) {
        if self.seen.insert(token.to_owned()) {
            self.tokens.push(token.to_owned());
        }
    }

    fn finish(self) -> ResolvedStyle {
        ResolvedStyle {
            tokens: self.tokens,
        }
    }
}

/// Resolves `config` against `definition`.
///
/// Tokens are emitted as: base set, then each axis in declaration order using
/// the selected value (or the axis default), then `config`'s override tokens.
/// Repeated tokens keep their first position. Any selection naming an unknown
/// axis or an illegal value fails the whole resolution.
pub fn resolve(
    definition: &VariantDefinition,
    config: &VariantConfig,
) -> Result<ResolvedStyle, VariantError> {
    for (axis, value) in config.selections() {
        let Some(axis_definition) = definition.axis(axis) else {
            return Err(VariantError::UnknownAxis {
                definition: definition.name(),
                axis: axis.to_string(),
            });
        };
        if !axis_definition.contains(value) {
            return Err(VariantError::invalid_value(axis, value));
        }
    }

    let mut list = TokenList::default();
    list.push_raw(definition.base());

    for axis in definition.axes() {
        let value = config
            .selection(axis.name())
            .unwrap_or_else(|| axis.default_value());
        let tokens = axis
            .tokens_for(value)
            .ok_or(VariantError::InvalidDefault {
                definition: definition.name(),
                axis: axis.name(),
                value: axis.default_value(),
            })?;
        list.push_raw(tokens);
    }

    for token in config.overrides() {
        list.push(token);
    }

    Ok(list.finish())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::AxisDefinition;

    const MD: &str = "h-10 px-4 text-sm";
    const LG: &str = "h-12 px-6 text-base";
    const PRIMARY: &str = "bg-primary text-primary-foreground";
    const OUTLINE: &str = "border border-input bg-background";

    static BUTTON: VariantDefinition = VariantDefinition::new(
        "button",
        "inline-flex",
        &[
            AxisDefinition::new("size", &[("sm", "h-8 px-3 text-xs"), ("md", MD), ("lg", LG)], "md"),
            AxisDefinition::new("variant", &[("primary", PRIMARY), ("outline", OUTLINE)], "primary"),
        ],
    );

    fn tokens(style: &ResolvedStyle) -> Vec<&str> {
        style.tokens().iter().map(String::as_str).collect()
    }

    fn split(raw: &str) -> Vec<&str> {
        raw.split_whitespace().collect()
    }

    #[test]
    fn empty_configuration_uses_every_default() {
        let style = resolve(&BUTTON, &VariantConfig::new()).expect("resolve");
        let mut expected = vec!["inline-flex"];
        expected.extend(split(MD));
        expected.extend(split(PRIMARY));
        assert_eq!(tokens(&style), expected);
    }

    #[test]
    fn explicit_values_replace_defaults_in_declaration_order() {
        let config = VariantConfig::new()
            .select("variant", "outline")
            .select("size", "lg");
        let style = BUTTON.resolve(&config).expect("resolve");

        let mut expected = vec!["inline-flex"];
        expected.extend(split(LG));
        expected.extend(split(OUTLINE));
        assert_eq!(tokens(&style), expected);
    }

    #[test]
    fn illegal_value_fails_without_fallback() {
        let config = VariantConfig::new().select("size", "xxl");
        assert_eq!(
            resolve(&BUTTON, &config),
            Err(VariantError::InvalidVariantValue {
                axis: "size".to_string(),
                value: "xxl".to_string(),
            })
        );
    }

    #[test]
    fn unknown_axis_is_rejected() {
        let config = VariantConfig::new().select("shadow", "lg");
        assert_eq!(
            resolve(&BUTTON, &config),
            Err(VariantError::UnknownAxis {
                definition: "button",
                axis: "shadow".to_string(),
            })
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let config = VariantConfig::new().select("size", "sm").with_class("mt-2");
        let first = resolve(&BUTTON, &config).expect("first");
        let _ = resolve(&BUTTON, &VariantConfig::new().select("size", "lg"));
        let second = resolve(&BUTTON, &config).expect("second");
        assert_eq!(first, second);
    }

    #[test]
    fn changing_one_axis_leaves_other_contributions_untouched() {
        let small = BUTTON
            .resolve(&VariantConfig::new().select("size", "sm").select("variant", "outline"))
            .expect("small");
        let large = BUTTON
            .resolve(&VariantConfig::new().select("size", "lg").select("variant", "outline"))
            .expect("large");

        for token in split(OUTLINE).into_iter().chain(["inline-flex"]) {
            assert!(small.contains(token), "{token} missing from small");
            assert!(large.contains(token), "{token} missing from large");
        }
        for token in split(LG) {
            assert!(!small.contains(token), "{token} leaked into small");
        }
        for token in split(PRIMARY) {
            assert!(!large.contains(token), "{token} leaked from unselected variant");
        }
    }

    #[test]
    fn omitted_axis_matches_explicit_default() {
        let omitted = BUTTON
            .resolve(&VariantConfig::new().select("variant", "outline"))
            .expect("omitted");
        let explicit = BUTTON
            .resolve(&VariantConfig::new().select("variant", "outline").select("size", "md"))
            .expect("explicit");
        assert_eq!(omitted, explicit);
    }

    #[test]
    fn overrides_follow_axis_tokens() {
        let style = BUTTON
            .resolve(&VariantConfig::new().with_class("rounded-full w-full"))
            .expect("resolve");
        let all = tokens(&style);
        assert_eq!(&all[all.len() - 2..], ["rounded-full", "w-full"]);
    }

    #[test]
    fn later_token_of_a_conflict_group_wins() {
        let style = BUTTON
            .resolve(&VariantConfig::new().select("size", "lg").with_class("px-2 mt-1"))
            .expect("resolve");
        let merged = style.merge_conflicts(|token| {
            token
                .split_once('-')
                .map(|(family, _)| family.to_string())
                .filter(|family| family == "px" || family == "h")
        });
        assert_eq!(
            tokens(&merged),
            ["inline-flex", "h-12", "text-base", "bg-primary", "text-primary-foreground", "px-2", "mt-1"]
        );
    }

    #[test]
    fn repeated_tokens_keep_first_position() {
        static OVERLAP: VariantDefinition = VariantDefinition::new(
            "overlap",
            "flex gap-1",
            &[AxisDefinition::new("spacing", &[("tight", "gap-2"), ("none", "")], "tight")],
        );
        let style = OVERLAP
            .resolve(&VariantConfig::new().with_class("flex mt-1"))
            .expect("resolve");
        assert_eq!(tokens(&style), ["flex", "gap-1", "gap-2", "mt-1"]);

        let bare = OVERLAP
            .resolve(&VariantConfig::new().select("spacing", "none"))
            .expect("bare");
        assert_eq!(bare.class_name(), "flex gap-1");
        assert_eq!(bare.to_string(), "flex gap-1");
    }
}
