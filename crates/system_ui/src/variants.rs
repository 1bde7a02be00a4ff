//! Static variant tables for every styled primitive, plus the typed axis values
//! components accept as props.
//!
//! Token strings use the Tailwind utility vocabulary of the underlying design
//! system stylesheet.

use style_variants::{AxisDefinition, AxisValue, VariantDefinition};

const ROUNDED_OPTIONS: &[(&str, &str)] = &[
    ("none", "rounded-none"),
    ("sm", "rounded-sm"),
    ("md", "rounded-md"),
    ("lg", "rounded-lg"),
    ("full", "rounded-full"),
];

const TEXT_SIZE_OPTIONS: &[(&str, &str)] = &[("sm", "text-sm"), ("md", "text-base"), ("lg", "text-lg")];

/// Buttons: eight intents, five sizes, radius, and a derived icon-gap flag.
pub static BUTTON: VariantDefinition = VariantDefinition::new(
    "button",
    "inline-flex items-center justify-center font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50",
    &[
        AxisDefinition::new(
            "variant",
            &[
                ("primary", "bg-primary text-primary-foreground hover:bg-primary/90"),
                ("secondary", "bg-secondary text-secondary-foreground hover:bg-secondary/90"),
                ("outline", "border border-input bg-background hover:bg-accent hover:text-accent-foreground"),
                ("ghost", "hover:bg-accent hover:text-accent-foreground"),
                ("link", "text-primary underline-offset-4 hover:underline"),
                ("success", "bg-green-600 text-white hover:bg-green-700"),
                ("warning", "bg-amber-500 text-white hover:bg-amber-600"),
                ("danger", "bg-red-600 text-white hover:bg-red-700"),
            ],
            "primary",
        ),
        AxisDefinition::new(
            "size",
            &[
                ("xs", "h-7 rounded-md px-2 text-xs"),
                ("sm", "h-8 rounded-md px-3 text-xs"),
                ("md", "h-10 rounded-md px-4 py-2 text-sm"),
                ("lg", "h-12 rounded-md px-6 py-3 text-base"),
                ("xl", "h-14 rounded-md px-8 py-4 text-lg"),
            ],
            "md",
        ),
        AxisDefinition::new("rounded", ROUNDED_OPTIONS, "md"),
        AxisDefinition::new("with_icon", &[("true", "gap-2"), ("false", "")], "false"),
    ],
);

/// Text inputs: surface treatment, size, radius, and validation state.
pub static INPUT: VariantDefinition = VariantDefinition::new(
    "input",
    "flex w-full border border-input bg-background px-3 py-2 text-sm ring-offset-background file:border-0 file:bg-transparent file:text-sm file:font-medium placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50",
    &[
        AxisDefinition::new(
            "variant",
            &[
                ("default", "rounded-md"),
                ("filled", "bg-muted border-transparent focus-visible:bg-background"),
                ("flushed", "rounded-none border-0 border-b px-0 focus-visible:border-b-2 focus-visible:ring-0"),
                ("outline", "border-2"),
            ],
            "default",
        ),
        AxisDefinition::new(
            "size",
            &[("sm", "h-8 text-xs px-2"), ("md", "h-10 text-sm px-3"), ("lg", "h-12 text-base px-4")],
            "md",
        ),
        AxisDefinition::new("rounded", ROUNDED_OPTIONS, "md"),
        AxisDefinition::new(
            "state",
            &[
                ("default", ""),
                ("error", "border-red-500 focus-visible:ring-red-500"),
                ("success", "border-green-500 focus-visible:ring-green-500"),
            ],
            "default",
        ),
    ],
);

/// Badges: status intents, size, pill/radius shape, and a derived icon-gap flag.
pub static BADGE: VariantDefinition = VariantDefinition::new(
    "badge",
    "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold transition-colors focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2",
    &[
        AxisDefinition::new(
            "variant",
            &[
                ("default", "border-transparent bg-primary text-primary-foreground"),
                ("secondary", "border-transparent bg-secondary text-secondary-foreground"),
                ("outline", "text-foreground"),
                ("success", "border-transparent bg-green-500 text-white"),
                ("warning", "border-transparent bg-amber-500 text-white"),
                ("danger", "border-transparent bg-red-500 text-white"),
                ("info", "border-transparent bg-blue-500 text-white"),
            ],
            "default",
        ),
        AxisDefinition::new(
            "size",
            &[("sm", "px-2 py-0.5 text-xs"), ("md", "px-2.5 py-0.5 text-xs"), ("lg", "px-3 py-1 text-sm")],
            "md",
        ),
        AxisDefinition::new(
            "rounded",
            &[
                ("default", "rounded-full"),
                ("sm", "rounded-sm"),
                ("md", "rounded-md"),
                ("lg", "rounded-lg"),
                ("full", "rounded-full"),
            ],
            "default",
        ),
        AxisDefinition::new("with_icon", &[("true", "gap-1"), ("false", "")], "false"),
    ],
);

/// Card surfaces: treatment, padding, radius, and hover lift.
pub static CARD: VariantDefinition = VariantDefinition::new(
    "card",
    "rounded-lg border bg-card text-card-foreground shadow-sm",
    &[
        AxisDefinition::new(
            "variant",
            &[
                ("default", ""),
                ("outline", "border-2"),
                ("filled", "bg-muted"),
                ("elevated", "shadow-lg"),
                ("ghost", "border-0 bg-transparent shadow-none"),
            ],
            "default",
        ),
        AxisDefinition::new("size", &[("sm", "p-3"), ("md", "p-5"), ("lg", "p-7")], "md"),
        AxisDefinition::new(
            "rounded",
            &[
                ("none", "rounded-none"),
                ("sm", "rounded-sm"),
                ("md", "rounded-md"),
                ("lg", "rounded-lg"),
                ("xl", "rounded-xl"),
            ],
            "lg",
        ),
        AxisDefinition::new(
            "interactive",
            &[
                ("true", "transition-all duration-200 hover:shadow-md hover:-translate-y-1 cursor-pointer"),
                ("false", ""),
            ],
            "false",
        ),
    ],
);

/// Navigation menus: orientation, text size, and item spacing.
pub static NAV_MENU: VariantDefinition = VariantDefinition::new(
    "nav-menu",
    "flex gap-1 items-center",
    &[
        AxisDefinition::new(
            "variant",
            &[("horizontal", "flex-row"), ("vertical", "flex-col items-start")],
            "horizontal",
        ),
        AxisDefinition::new("size", TEXT_SIZE_OPTIONS, "md"),
        AxisDefinition::new(
            "spacing",
            &[("tight", "gap-2"), ("normal", "gap-4"), ("loose", "gap-6")],
            "normal",
        ),
    ],
);

/// Breadcrumb trails: text size and separator glyph.
pub static BREADCRUMB: VariantDefinition = VariantDefinition::new(
    "breadcrumb",
    "flex items-center",
    &[
        AxisDefinition::new("size", &[("sm", "text-xs"), ("md", "text-sm"), ("lg", "text-base")], "md"),
        AxisDefinition::new(
            "separator",
            &[("slash", "divide-x"), ("chevron", "gap-1"), ("dot", "gap-1")],
            "chevron",
        ),
    ],
);

/// Tab strip container.
pub static TABS: VariantDefinition = VariantDefinition::new(
    "tabs",
    "flex",
    &[
        AxisDefinition::new(
            "variant",
            &[
                ("default", "border-b"),
                ("pills", "gap-2"),
                ("underline", "border-b"),
                ("enclosed", "border rounded-lg p-1 bg-muted"),
            ],
            "default",
        ),
        AxisDefinition::new("size", TEXT_SIZE_OPTIONS, "md"),
    ],
);

/// Individual tab trigger. Active styling keys off `data-active="true"`.
pub static TAB_ITEM: VariantDefinition = VariantDefinition::new(
    "tab-item",
    "inline-flex items-center justify-center whitespace-nowrap transition-all focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50",
    &[
        AxisDefinition::new(
            "variant",
            &[
                (
                    "default",
                    "border-b-2 border-transparent px-4 py-2 hover:text-foreground data-[active=true]:border-primary data-[active=true]:text-foreground",
                ),
                (
                    "pills",
                    "rounded-md px-3 py-1.5 hover:bg-muted data-[active=true]:bg-primary data-[active=true]:text-primary-foreground",
                ),
                (
                    "underline",
                    "border-b-2 border-transparent px-4 py-2 hover:text-foreground data-[active=true]:border-primary data-[active=true]:text-foreground",
                ),
                (
                    "enclosed",
                    "rounded-md px-3 py-1.5 hover:bg-background data-[active=true]:bg-background",
                ),
            ],
            "default",
        ),
        AxisDefinition::new("size", TEXT_SIZE_OPTIONS, "md"),
    ],
);

/// Every shipped table, for validation.
pub static ALL_DEFINITIONS: &[&VariantDefinition] = &[
    &BUTTON,
    &INPUT,
    &BADGE,
    &CARD,
    &NAV_MENU,
    &BREADCRUMB,
    &TABS,
    &TAB_ITEM,
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Button intent.
pub enum ButtonVariant {
    /// Filled brand action.
    #[default]
    Primary,
    /// Muted filled action.
    Secondary,
    /// Bordered action on the page background.
    Outline,
    /// Background appears on hover only.
    Ghost,
    /// Inline text link styling.
    Link,
    /// Positive/confirming action.
    Success,
    /// Cautionary action.
    Warning,
    /// Destructive action.
    Danger,
}

impl AxisValue for ButtonVariant {
    const AXIS: &'static str = "variant";
    const ALL: &'static [Self] = &[
        Self::Primary,
        Self::Secondary,
        Self::Outline,
        Self::Ghost,
        Self::Link,
        Self::Success,
        Self::Warning,
        Self::Danger,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Link => "link",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Button height and padding scale.
pub enum ButtonSize {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Medium.
    #[default]
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
}

impl AxisValue for ButtonSize {
    const AXIS: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    fn key(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Three-step size scale shared by inputs, badges, cards, and navigation.
pub enum Size {
    /// Small.
    Sm,
    /// Medium.
    #[default]
    Md,
    /// Large.
    Lg,
}

impl AxisValue for Size {
    const AXIS: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg];

    fn key(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Corner radius for buttons and inputs.
pub enum Rounded {
    /// Square corners.
    None,
    /// Small radius.
    Sm,
    /// Medium radius.
    #[default]
    Md,
    /// Large radius.
    Lg,
    /// Fully rounded.
    Full,
}

impl AxisValue for Rounded {
    const AXIS: &'static str = "rounded";
    const ALL: &'static [Self] = &[Self::None, Self::Sm, Self::Md, Self::Lg, Self::Full];

    fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Full => "full",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Input surface treatment.
pub enum InputVariant {
    /// Bordered field.
    #[default]
    Default,
    /// Muted fill without border.
    Filled,
    /// Bottom border only.
    Flushed,
    /// Heavy border.
    Outline,
}

impl AxisValue for InputVariant {
    const AXIS: &'static str = "variant";
    const ALL: &'static [Self] = &[Self::Default, Self::Filled, Self::Flushed, Self::Outline];

    fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Filled => "filled",
            Self::Flushed => "flushed",
            Self::Outline => "outline",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Input validation state.
pub enum InputState {
    /// Neutral.
    #[default]
    Default,
    /// Failed validation.
    Error,
    /// Passed validation.
    Success,
}

impl AxisValue for InputState {
    const AXIS: &'static str = "state";
    const ALL: &'static [Self] = &[Self::Default, Self::Error, Self::Success];

    fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Badge intent.
pub enum BadgeVariant {
    /// Brand fill.
    #[default]
    Default,
    /// Muted fill.
    Secondary,
    /// Border only.
    Outline,
    /// Positive status.
    Success,
    /// Cautionary status.
    Warning,
    /// Failure status.
    Danger,
    /// Informational status.
    Info,
}

impl AxisValue for BadgeVariant {
    const AXIS: &'static str = "variant";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Secondary,
        Self::Outline,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Info,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Badge shape. `Default` is a pill.
pub enum BadgeRounded {
    /// Pill shape.
    #[default]
    Default,
    /// Small radius.
    Sm,
    /// Medium radius.
    Md,
    /// Large radius.
    Lg,
    /// Fully rounded.
    Full,
}

impl AxisValue for BadgeRounded {
    const AXIS: &'static str = "rounded";
    const ALL: &'static [Self] = &[Self::Default, Self::Sm, Self::Md, Self::Lg, Self::Full];

    fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Full => "full",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Card surface treatment.
pub enum CardVariant {
    /// Bordered card with a light shadow.
    #[default]
    Default,
    /// Heavy border.
    Outline,
    /// Muted fill.
    Filled,
    /// Large shadow.
    Elevated,
    /// No border, fill, or shadow.
    Ghost,
}

impl AxisValue for CardVariant {
    const AXIS: &'static str = "variant";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Outline,
        Self::Filled,
        Self::Elevated,
        Self::Ghost,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Outline => "outline",
            Self::Filled => "filled",
            Self::Elevated => "elevated",
            Self::Ghost => "ghost",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Card corner radius.
pub enum CardRounded {
    /// Square corners.
    None,
    /// Small radius.
    Sm,
    /// Medium radius.
    Md,
    /// Large radius.
    #[default]
    Lg,
    /// Extra large radius.
    Xl,
}

impl AxisValue for CardRounded {
    const AXIS: &'static str = "rounded";
    const ALL: &'static [Self] = &[Self::None, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Navigation menu direction.
pub enum NavOrientation {
    /// Items in a row.
    #[default]
    Horizontal,
    /// Items in a column.
    Vertical,
}

impl AxisValue for NavOrientation {
    const AXIS: &'static str = "variant";
    const ALL: &'static [Self] = &[Self::Horizontal, Self::Vertical];

    fn key(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Gap between navigation items.
pub enum NavSpacing {
    /// Small gap.
    Tight,
    /// Default gap.
    #[default]
    Normal,
    /// Large gap.
    Loose,
}

impl AxisValue for NavSpacing {
    const AXIS: &'static str = "spacing";
    const ALL: &'static [Self] = &[Self::Tight, Self::Normal, Self::Loose];

    fn key(self) -> &'static str {
        match self {
            Self::Tight => "tight",
            Self::Normal => "normal",
            Self::Loose => "loose",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Glyph rendered between breadcrumb items.
pub enum BreadcrumbSeparator {
    /// `/`
    Slash,
    /// Chevron icon.
    #[default]
    Chevron,
    /// `•`
    Dot,
}

impl AxisValue for BreadcrumbSeparator {
    const AXIS: &'static str = "separator";
    const ALL: &'static [Self] = &[Self::Slash, Self::Chevron, Self::Dot];

    fn key(self) -> &'static str {
        match self {
            Self::Slash => "slash",
            Self::Chevron => "chevron",
            Self::Dot => "dot",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Tab strip treatment, shared by the strip and its triggers.
pub enum TabsVariant {
    /// Underlined strip.
    #[default]
    Default,
    /// Filled pill for the active tab.
    Pills,
    /// Underline indicator.
    Underline,
    /// Tabs inside a muted tray.
    Enclosed,
}

impl AxisValue for TabsVariant {
    const AXIS: &'static str = "variant";
    const ALL: &'static [Self] = &[Self::Default, Self::Pills, Self::Underline, Self::Enclosed];

    fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pills => "pills",
            Self::Underline => "underline",
            Self::Enclosed => "enclosed",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use style_variants::{VariantConfig, VariantError};

    use super::*;
    use crate::utilities::resolve_utilities;

    fn assert_axis_matches<V: AxisValue + Default>(definition: &VariantDefinition) {
        let axis = definition
            .axis(V::AXIS)
            .unwrap_or_else(|| panic!("{} has no `{}` axis", definition.name(), V::AXIS));
        let table: Vec<_> = axis.values().collect();
        let typed: Vec<_> = V::ALL.iter().map(|value| value.key()).collect();
        assert_eq!(table, typed, "{}.{}", definition.name(), V::AXIS);
        assert_eq!(V::default().key(), axis.default_value(), "{}.{}", definition.name(), V::AXIS);
    }

    #[test]
    fn every_shipped_table_validates() {
        for definition in ALL_DEFINITIONS {
            assert_eq!(definition.validate(), Ok(()), "{}", definition.name());
        }
    }

    #[test]
    fn typed_values_mirror_their_tables() {
        assert_axis_matches::<ButtonVariant>(&BUTTON);
        assert_axis_matches::<ButtonSize>(&BUTTON);
        assert_axis_matches::<Rounded>(&BUTTON);
        assert_axis_matches::<InputVariant>(&INPUT);
        assert_axis_matches::<Size>(&INPUT);
        assert_axis_matches::<Rounded>(&INPUT);
        assert_axis_matches::<InputState>(&INPUT);
        assert_axis_matches::<BadgeVariant>(&BADGE);
        assert_axis_matches::<Size>(&BADGE);
        assert_axis_matches::<BadgeRounded>(&BADGE);
        assert_axis_matches::<CardVariant>(&CARD);
        assert_axis_matches::<Size>(&CARD);
        assert_axis_matches::<CardRounded>(&CARD);
        assert_axis_matches::<NavOrientation>(&NAV_MENU);
        assert_axis_matches::<Size>(&NAV_MENU);
        assert_axis_matches::<NavSpacing>(&NAV_MENU);
        assert_axis_matches::<Size>(&BREADCRUMB);
        assert_axis_matches::<BreadcrumbSeparator>(&BREADCRUMB);
        assert_axis_matches::<TabsVariant>(&TABS);
        assert_axis_matches::<Size>(&TABS);
        assert_axis_matches::<TabsVariant>(&TAB_ITEM);
        assert_axis_matches::<Size>(&TAB_ITEM);
    }

    #[test]
    fn button_defaults_resolve_in_axis_order() {
        let style = BUTTON.resolve_defaults().expect("defaults");
        let tokens = style.tokens();
        let base: Vec<_> = BUTTON.base().split_whitespace().collect();
        let base_len = base.len();
        let variant_at = tokens.iter().position(|t| t == "bg-primary").expect("primary");
        let size_at = tokens.iter().position(|t| t == "h-10").expect("md size");
        assert_eq!(tokens[..base_len].iter().map(String::as_str).collect::<Vec<_>>(), base);
        assert_eq!(variant_at, base_len);
        assert!(variant_at < size_at);
        assert!(!style.contains("gap-2"));
    }

    #[test]
    fn shape_selections_replace_earlier_radius_and_padding() {
        let button = resolve_utilities(&BUTTON, &VariantConfig::new().select_value(Rounded::None))
            .expect("button");
        assert!(button.contains("rounded-none"));
        assert!(!button.contains("rounded-md"));

        let badge = resolve_utilities(&BADGE, &VariantConfig::new().select_value(BadgeRounded::Sm))
            .expect("badge");
        assert!(badge.contains("rounded-sm"));
        assert!(!badge.contains("rounded-full"));

        let input =
            resolve_utilities(&INPUT, &VariantConfig::new().select_value(Size::Sm)).expect("input");
        assert!(input.contains("px-2"));
        assert!(input.contains("text-xs"));
        assert!(!input.contains("px-3"));
        assert!(!input.contains("text-sm"));
        assert!(input.contains("file:text-sm"));

        let ghost = resolve_utilities(&CARD, &VariantConfig::new().select_value(CardVariant::Ghost))
            .expect("card");
        assert!(ghost.contains("border-0"));
        assert!(!ghost.contains("border"));
        assert!(!ghost.contains("bg-card"));
    }

    #[test]
    fn button_large_outline_drops_default_tokens() {
        let config = VariantConfig::new()
            .select_value(ButtonSize::Lg)
            .select_value(ButtonVariant::Outline);
        let style = BUTTON.resolve(&config).expect("resolve");
        assert!(style.contains("h-12"));
        assert!(style.contains("border-input"));
        assert!(!style.contains("h-10"));
        assert!(!style.contains("bg-primary"));
    }

    #[test]
    fn string_configuration_outside_table_is_rejected() {
        let config: VariantConfig = serde_json::from_str(r#"{"size": "xxl"}"#).expect("config");
        assert_eq!(
            BUTTON.resolve(&config),
            Err(VariantError::InvalidVariantValue {
                axis: "size".to_string(),
                value: "xxl".to_string(),
            })
        );
        assert!(matches!(
            CARD.resolve(&VariantConfig::new().select_value(Rounded::Full)),
            Err(VariantError::InvalidVariantValue { .. })
        ));
    }
}
