//! Centralized icon catalog for the shared primitives.
//!
//! Components take an [`IconName`] instead of raw SVG so decorations stay
//! consistent across buttons, inputs, badges, and navigation. Paths follow the
//! Fluent UI System Icons regular 24px grid.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers.
pub enum IconName {
    /// Right-pointing arrow.
    ArrowRight,
    /// Checkmark.
    Checkmark,
    /// Right chevron, also used as the breadcrumb separator.
    ChevronRight,
    /// House.
    Home,
    /// Envelope.
    Mail,
    /// Person silhouette.
    Person,
    /// Magnifier.
    Search,
    /// Gear.
    Settings,
    /// Busy indicator arc; spins via `animate-spin`.
    Spinner,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::ArrowRight => "arrow-right",
            Self::Checkmark => "checkmark",
            Self::ChevronRight => "chevron-right",
            Self::Home => "home",
            Self::Mail => "mail",
            Self::Person => "person",
            Self::Search => "search",
            Self::Settings => "settings",
            Self::Spinner => "spinner",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::ArrowRight => {
                r#"<path d="M13.27 4.2a.75.75 0 0 0-.04 1.06l5.81 5.99H3.75a.75.75 0 0 0 0 1.5h15.29l-5.81 6a.75.75 0 0 0 1.08 1.04l7-7.25a.75.75 0 0 0 0-1.04l-7-7.25a.75.75 0 0 0-1.04-.04Z"/>"#
            }
            Self::Checkmark => {
                r#"<path d="M4.53 12.97a.75.75 0 0 0-1.06 1.06l4.5 4.5c.3.3.77.3 1.06 0l11-11a.75.75 0 0 0-1.06-1.06L8.5 16.94l-3.97-3.97Z"/>"#
            }
            Self::ChevronRight => {
                r#"<path d="M8.47 4.22a.75.75 0 0 0 0 1.06L15.19 12l-6.72 6.72a.75.75 0 1 0 1.06 1.06l7.25-7.25c.3-.3.3-.77 0-1.06L9.53 4.22a.75.75 0 0 0-1.06 0Z"/>"#
            }
            Self::Home => {
                r#"<path d="M10.55 2.53a2.25 2.25 0 0 1 2.9 0l6.75 5.7c.5.42.8 1.05.8 1.71v9.31c0 .97-.78 1.75-1.75 1.75h-3.5c-.97 0-1.75-.78-1.75-1.75v-5a.25.25 0 0 0-.25-.25h-3.5a.25.25 0 0 0-.25.25v5c0 .97-.78 1.75-1.75 1.75h-3.5C3.78 21 3 20.22 3 19.25V9.94c0-.66.3-1.29.8-1.71l6.75-5.7Zm1.93 1.15a.75.75 0 0 0-.96 0l-6.75 5.7a.75.75 0 0 0-.27.56v9.31c0 .14.11.25.25.25h3.5c.14 0 .25-.11.25-.25v-5c0-.97.78-1.75 1.75-1.75h3.5c.97 0 1.75.78 1.75 1.75v5c0 .14.11.25.25.25h3.5c.14 0 .25-.11.25-.25V9.94a.75.75 0 0 0-.27-.57l-6.75-5.69Z"/>"#
            }
            Self::Mail => {
                r#"<path d="M5.25 4h13.5a3.25 3.25 0 0 1 3.25 3.07v9.68A3.25 3.25 0 0 1 18.93 20H5.25A3.25 3.25 0 0 1 2 16.93V7.25A3.25 3.25 0 0 1 5.07 4h13.68-13.5ZM20.5 9.37l-8.15 4.3a.75.75 0 0 1-.6.04l-.1-.04L3.5 9.37v7.38c0 .92.7 1.67 1.6 1.74l.15.01h13.5c.92 0 1.67-.7 1.74-1.6l.01-.15V9.37ZM18.75 5.5H5.25c-.92 0-1.67.7-1.74 1.6l-.01.15v.43l8.5 4.49 8.5-4.49v-.43c0-.92-.7-1.67-1.6-1.74l-.15-.01Z"/>"#
            }
            Self::Person => {
                r#"<path d="M17.75 14C19 14 20 15 20 16.25v.57c0 .9-.32 1.76-.9 2.44C17.53 21.1 15.15 22 12 22c-3.15 0-5.53-.9-7.1-2.74a3.75 3.75 0 0 1-.9-2.43v-.58C4 15 5.01 14 6.25 14h11.5Zm0 1.5H6.25a.75.75 0 0 0-.75.75v.58c0 .53.2 1.05.54 1.46C7.3 19.76 9.26 20.5 12 20.5c2.74 0 4.7-.74 5.96-2.21.35-.41.54-.93.54-1.47v-.57a.75.75 0 0 0-.75-.75ZM12 2a5 5 0 1 1 0 10 5 5 0 0 1 0-10Zm0 1.5a3.5 3.5 0 1 0 0 7 3.5 3.5 0 0 0 0-7Z"/>"#
            }
            Self::Search => {
                r#"<path d="M10 2.75a7.25 7.25 0 0 1 5.63 11.82l4.9 4.9a.75.75 0 0 1-.98 1.13l-.08-.07-4.9-4.9A7.25 7.25 0 1 1 10 2.75Zm0 1.5a5.75 5.75 0 1 0 0 11.5 5.75 5.75 0 0 0 0-11.5Z"/>"#
            }
            Self::Settings => {
                r#"<path d="M12 8.5a3.5 3.5 0 1 1 0 7 3.5 3.5 0 0 1 0-7Zm0 1.5a2 2 0 1 0 0 4 2 2 0 0 0 0-4Zm-1.23-8h2.46c.48 0 .9.34.98.8l.33 1.8c.5.18.98.42 1.42.71l1.72-.62a1 1 0 0 1 1.2.44l1.23 2.13a1 1 0 0 1-.22 1.27l-1.4 1.19a7.2 7.2 0 0 1 0 1.64l1.4 1.19a1 1 0 0 1 .22 1.27l-1.23 2.13a1 1 0 0 1-1.2.44l-1.72-.62c-.44.29-.92.53-1.42.71l-.33 1.8a1 1 0 0 1-.98.8h-2.46a1 1 0 0 1-.98-.8l-.33-1.8a6.9 6.9 0 0 1-1.42-.71l-1.72.62a1 1 0 0 1-1.2-.44l-1.23-2.13a1 1 0 0 1 .22-1.27l1.4-1.19a7.2 7.2 0 0 1 0-1.64l-1.4-1.19a1 1 0 0 1-.22-1.27l1.23-2.13a1 1 0 0 1 1.2-.44l1.72.62c.44-.29.92-.53 1.42-.71l.33-1.8a1 1 0 0 1 .98-.8Z"/>"#
            }
            Self::Spinner => {
                r#"<path d="M12 3.5a8.5 8.5 0 1 0 8.5 8.5.75.75 0 0 1 1.5 0A10 10 0 1 1 12 2a.75.75 0 0 1 0 1.5Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 12px, badges.
    Xs,
    /// 16px, buttons, inputs, and navigation.
    #[default]
    Sm,
    /// 20px.
    Md,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
        }
    }

    /// Stable size token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }

    fn box_class(self) -> &'static str {
        match self {
            Self::Xs => "h-3 w-3",
            Self::Sm => "h-4 w-4",
            Self::Md => "h-5 w-5",
        }
    }
}

#[component]
/// Renders an icon from the catalog as inline SVG.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
    /// Extra class tokens appended after the size box.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView {
    let size_px = size.px().to_string();
    let class = match layout_class {
        Some(extra) if !extra.is_empty() => format!("ui-icon {} {extra}", size.box_class()),
        _ => format!("ui-icon {}", size.box_class()),
    };

    view! {
        <svg
            class=class
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
