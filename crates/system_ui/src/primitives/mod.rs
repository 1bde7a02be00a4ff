//! Styled controls, card surfaces, and navigation primitives.

use leptos::ev::MouseEvent;
use leptos::*;
use style_variants::{AxisValue, VariantConfig, VariantDefinition};

use crate::composition::{Adornments, CardRegions, InputDecorations, LeadingAdornment};
use crate::utilities::resolve_utilities;
use crate::variants::*;
use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod navigation;

pub use controls::{Button, Input};
pub use data_display::{
    Badge, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    HorizontalCard, SimpleCard,
};
pub use navigation::{Breadcrumb, BreadcrumbItem, NavItem, NavMenu, TabItem, Tabs};

/// Resolves a component's class attribute from its table.
///
/// Later layers win utility conflicts, so a selection or `layout_class` can
/// restate what the base set. Props are typed, so a failure means the static
/// table itself is broken; the element still renders with the base tokens.
pub(crate) fn style_class(definition: &VariantDefinition, config: VariantConfig) -> String {
    match resolve_utilities(definition, &config) {
        Ok(style) => style.class_name(),
        Err(err) => {
            logging::error!("{} style resolution failed: {err}", definition.name());
            definition.base().to_string()
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<String>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.trim().is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn variant_token<V: AxisValue + Default>(value: Option<V>) -> &'static str {
    value.unwrap_or_default().key()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn style_class_lets_later_layers_win_conflicts() {
        let class = style_class(
            &NAV_MENU,
            VariantConfig::new()
                .select_value(NavSpacing::Tight)
                .with_class("mt-2"),
        );
        assert_eq!(class, "flex items-center flex-row text-base gap-2 mt-2");
    }

    #[test]
    fn style_class_falls_back_to_base_on_bad_selection() {
        let class = style_class(&NAV_MENU, VariantConfig::new().select("spacing", "huge"));
        assert_eq!(class, NAV_MENU.base());
    }

    #[test]
    fn layout_class_merges_only_when_present() {
        assert_eq!(merge_layout_class("p-6 pt-0", None), "p-6 pt-0");
        assert_eq!(merge_layout_class("p-6 pt-0", Some(" ".to_string())), "p-6 pt-0");
        assert_eq!(
            merge_layout_class("p-6 pt-0", Some("gap-2".to_string())),
            "p-6 pt-0 gap-2"
        );
    }

    #[test]
    fn variant_token_reports_effective_value() {
        assert_eq!(variant_token::<ButtonSize>(None), "md");
        assert_eq!(variant_token(Some(ButtonVariant::Danger)), "danger");
    }
}
