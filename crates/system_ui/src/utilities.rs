//! Conflict groups for the Tailwind utilities used by the variant tables.
//!
//! Tables layer tokens (base, axes, caller overrides) and a later layer may
//! restate a property an earlier one already set, e.g. a `rounded-none`
//! selection after the size axis's `rounded-md`. A stylesheet resolves such
//! pairs by its own rule order, not by attribute order, so resolved styles
//! keep only the last token of each group before they reach the DOM.

use style_variants::{ResolvedStyle, VariantConfig, VariantDefinition, VariantError};

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "hidden",
    "contents",
];
const FLEX_DIRECTION: &[&str] = &["flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse"];
const ALIGN_ITEMS: &[&str] = &["items-start", "items-end", "items-center", "items-baseline", "items-stretch"];
const RADIUS: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];
const SHADOW: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];
const TEXT_SIZE: &[&str] = &["xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl"];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHT: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const WIDTHS: &[&str] = &["0", "1", "2", "4", "8"];
const BORDER_STYLE: &[&str] = &["solid", "dashed", "dotted", "double", "none"];

/// Sized utilities keyed by prefix. Listed longest prefix first within a family.
const SPACING: &[(&str, &str)] = &[
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("p-", "p"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("m-", "m"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("space-x-", "space-x"),
    ("space-y-", "space-y"),
    ("min-h-", "min-h"),
    ("min-w-", "min-w"),
    ("h-", "h"),
    ("w-", "w"),
];

fn border_group(rest: &str) -> Option<&'static str> {
    let (side, width) = match rest.split_once('-') {
        Some((side, width)) if side.len() == 1 => (Some(side), Some(width)),
        _ if rest.len() == 1 => (Some(rest), None),
        _ => (None, Some(rest)),
    };
    match (side, width) {
        (Some(side), width) if width.map_or(true, |width| WIDTHS.contains(&width)) => match side {
            "t" => Some("border-t-width"),
            "r" => Some("border-r-width"),
            "b" => Some("border-b-width"),
            "l" => Some("border-l-width"),
            "x" => Some("border-x-width"),
            "y" => Some("border-y-width"),
            _ => Some("border-color"),
        },
        (None, Some(width)) if WIDTHS.contains(&width) => Some("border-width"),
        (None, Some(style)) if BORDER_STYLE.contains(&style) => Some("border-style"),
        (None, Some("collapse" | "separate")) => None,
        _ => Some("border-color"),
    }
}

fn ring_group(utility: &str) -> Option<&'static str> {
    if utility == "ring" {
        return Some("ring-width");
    }
    let rest = utility.strip_prefix("ring-")?;
    if rest == "inset" {
        return None;
    }
    if let Some(offset) = rest.strip_prefix("offset-") {
        return Some(if WIDTHS.contains(&offset) {
            "ring-offset-width"
        } else {
            "ring-offset-color"
        });
    }
    Some(if WIDTHS.contains(&rest) {
        "ring-width"
    } else {
        "ring-color"
    })
}

fn family(utility: &str) -> Option<&'static str> {
    if DISPLAY.contains(&utility) {
        return Some("display");
    }
    if FLEX_DIRECTION.contains(&utility) {
        return Some("flex-direction");
    }
    if ALIGN_ITEMS.contains(&utility) {
        return Some("align-items");
    }
    if utility == "rounded" {
        return Some("rounded");
    }
    if let Some(rest) = utility.strip_prefix("rounded-") {
        return RADIUS.contains(&rest).then_some("rounded");
    }
    if utility == "shadow" {
        return Some("shadow");
    }
    if let Some(rest) = utility.strip_prefix("shadow-") {
        return Some(if SHADOW.contains(&rest) {
            "shadow"
        } else {
            "shadow-color"
        });
    }
    if let Some(rest) = utility.strip_prefix("text-") {
        return Some(if TEXT_SIZE.contains(&rest) {
            "text-size"
        } else if TEXT_ALIGN.contains(&rest) {
            "text-align"
        } else {
            "text-color"
        });
    }
    if let Some(rest) = utility.strip_prefix("font-") {
        return FONT_WEIGHT.contains(&rest).then_some("font-weight");
    }
    if utility.starts_with("bg-") {
        return Some("bg");
    }
    if utility == "border" {
        return Some("border-width");
    }
    if let Some(rest) = utility.strip_prefix("border-") {
        return border_group(rest);
    }
    if utility.starts_with("ring") {
        return ring_group(utility);
    }
    SPACING
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
        .map(|(_, group)| *group)
}

/// Conflict group of one class token, including its variant prefix
/// (`hover:`, `md:`, `data-[active=true]:`). `None` for utilities that never
/// conflict here.
pub fn utility_group(token: &str) -> Option<String> {
    let (prefix, utility) = match token.rsplit_once(':') {
        Some((prefix, utility)) => (prefix, utility),
        None => ("", token),
    };
    let utility = utility.strip_prefix('!').unwrap_or(utility);
    let family = family(utility)?;
    Some(if prefix.is_empty() {
        family.to_string()
    } else {
        format!("{prefix}:{family}")
    })
}

/// Resolves `config` and keeps only the winning token of each utility group.
pub fn resolve_utilities(
    definition: &VariantDefinition,
    config: &VariantConfig,
) -> Result<ResolvedStyle, VariantError> {
    Ok(definition.resolve(config)?.merge_conflicts(utility_group))
}
