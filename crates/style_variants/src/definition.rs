use std::collections::HashSet;

use crate::{resolve, ResolvedStyle, VariantConfig, VariantError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One named style dimension with a closed set of values and a default.
///
/// `options` pairs each legal value with the whitespace-separated tokens it
/// contributes. An empty token string is legal and contributes nothing.
pub struct AxisDefinition {
    name: &'static str,
    options: &'static [(&'static str, &'static str)],
    default: &'static str,
}

impl AxisDefinition {
    /// Declares an axis. Intended for `static` tables.
    pub const fn new(
        name: &'static str,
        options: &'static [(&'static str, &'static str)],
        default: &'static str,
    ) -> Self {
        Self {
            name,
            options,
            default,
        }
    }

    /// Axis name as used in configurations.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Value applied when a configuration omits this axis.
    pub const fn default_value(&self) -> &'static str {
        self.default
    }

    /// Legal values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &'static str> {
        self.options.iter().map(|(value, _)| *value)
    }

    /// Whether `value` is a member of the legal set.
    pub fn contains(&self, value: &str) -> bool {
        self.tokens_for(value).is_some()
    }

    /// Raw token string contributed by `value`, if it is legal.
    pub fn tokens_for(&self, value: &str) -> Option<&'static str> {
        self.options
            .iter()
            .find(|(candidate, _)| *candidate == value)
            .map(|(_, tokens)| *tokens)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Static style profile for one component kind.
pub struct VariantDefinition {
    name: &'static str,
    base: &'static str,
    axes: &'static [AxisDefinition],
}

impl VariantDefinition {
    /// Declares a definition. Axes resolve in the order given here.
    pub const fn new(
        name: &'static str,
        base: &'static str,
        axes: &'static [AxisDefinition],
    ) -> Self {
        Self { name, base, axes }
    }

    /// Definition name, used in error messages.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Tokens applied to every rendering.
    pub const fn base(&self) -> &'static str {
        self.base
    }

    /// Axes in resolution order.
    pub const fn axes(&self) -> &'static [AxisDefinition] {
        self.axes
    }

    /// Looks up an axis by name.
    pub fn axis(&self, name: &str) -> Option<&'static AxisDefinition> {
        self.axes.iter().find(|axis| axis.name == name)
    }

    /// Checks the table itself: unique axis names, unique values per axis, and
    /// defaults that are members of their axis.
    pub fn validate(&self) -> Result<(), VariantError> {
        let mut axis_names = HashSet::new();
        for axis in self.axes {
            if !axis_names.insert(axis.name) {
                return Err(VariantError::DuplicateAxis {
                    definition: self.name,
                    axis: axis.name,
                });
            }

            let mut values = HashSet::new();
            for value in axis.values() {
                if !values.insert(value) {
                    return Err(VariantError::DuplicateValue {
                        definition: self.name,
                        axis: axis.name,
                        value,
                    });
                }
            }

            if !axis.contains(axis.default) {
                return Err(VariantError::InvalidDefault {
                    definition: self.name,
                    axis: axis.name,
                    value: axis.default,
                });
            }
        }
        Ok(())
    }

    /// Resolves `config` against this table. See [`resolve`].
    pub fn resolve(&self, config: &VariantConfig) -> Result<ResolvedStyle, VariantError> {
        resolve(self, config)
    }

    /// Resolves with every axis at its default and no overrides.
    pub fn resolve_defaults(&self) -> Result<ResolvedStyle, VariantError> {
        resolve(self, &VariantConfig::new())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static TONE: VariantDefinition = VariantDefinition::new(
        "tone",
        "inline-flex",
        &[AxisDefinition::new(
            "tone",
            &[("calm", "text-blue-500"), ("loud", "text-red-500 font-bold")],
            "calm",
        )],
    );

    #[test]
    fn axis_lookup_reports_membership_and_tokens() {
        let axis = TONE.axis("tone").expect("tone axis");
        assert!(axis.contains("loud"));
        assert!(!axis.contains("quiet"));
        assert_eq!(axis.tokens_for("loud"), Some("text-red-500 font-bold"));
        assert_eq!(axis.values().collect::<Vec<_>>(), vec!["calm", "loud"]);
        assert!(TONE.axis("size").is_none());
    }

    #[test]
    fn validate_accepts_well_formed_table() {
        assert_eq!(TONE.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_default_outside_axis() {
        static BROKEN: VariantDefinition = VariantDefinition::new(
            "broken",
            "",
            &[AxisDefinition::new("size", &[("sm", "h-8"), ("md", "h-10")], "xl")],
        );
        assert_eq!(
            BROKEN.validate(),
            Err(VariantError::InvalidDefault {
                definition: "broken",
                axis: "size",
                value: "xl",
            })
        );
    }

    #[test]
    fn validate_rejects_duplicate_axes_and_values() {
        static TWICE: VariantDefinition = VariantDefinition::new(
            "twice",
            "",
            &[
                AxisDefinition::new("size", &[("sm", "h-8")], "sm"),
                AxisDefinition::new("size", &[("md", "h-10")], "md"),
            ],
        );
        static REPEATED: VariantDefinition = VariantDefinition::new(
            "repeated",
            "",
            &[AxisDefinition::new("size", &[("sm", "h-8"), ("sm", "h-9")], "sm")],
        );

        assert_eq!(
            TWICE.validate(),
            Err(VariantError::DuplicateAxis {
                definition: "twice",
                axis: "size",
            })
        );
        assert_eq!(
            REPEATED.validate(),
            Err(VariantError::DuplicateValue {
                definition: "repeated",
                axis: "size",
                value: "sm",
            })
        );
    }
}
