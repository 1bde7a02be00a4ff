//! Design-system showcase page.
//!
//! Renders every component family from `system_ui` across five tabbed
//! sections. Only the selected section is mounted; the header and footer
//! navigation stay in place while the tab changes.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod sections;

use leptos::*;
use system_ui::prelude::*;

use crate::sections::{BadgesSection, ButtonsSection, CardsSection, InputsSection, NavigationSection};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Tab-selectable page sections, in display order.
pub enum ShowcaseSection {
    /// Button variants, sizes, radii, and icons.
    #[default]
    Buttons,
    /// Input variants, sizes, radii, states, and decorations.
    Inputs,
    /// Card variants, sizes, interactivity, and the horizontal layout.
    Cards,
    /// Badge variants, sizes, shapes, and icons.
    Badges,
    /// Navigation menu, breadcrumb, and tab variants.
    Navigation,
}

impl ShowcaseSection {
    /// All sections in tab order.
    pub const ALL: [Self; 5] = [
        Self::Buttons,
        Self::Inputs,
        Self::Cards,
        Self::Badges,
        Self::Navigation,
    ];

    /// Route segment for the section.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Buttons => "buttons",
            Self::Inputs => "inputs",
            Self::Cards => "cards",
            Self::Badges => "badges",
            Self::Navigation => "navigation",
        }
    }

    /// Tab label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Buttons => "Buttons",
            Self::Inputs => "Inputs",
            Self::Cards => "Cards",
            Self::Badges => "Badges",
            Self::Navigation => "Navigation",
        }
    }

    /// Tab icon, if the section has one.
    pub const fn icon(self) -> Option<IconName> {
        match self {
            Self::Buttons => Some(IconName::Settings),
            Self::Inputs => Some(IconName::Mail),
            Self::Cards => Some(IconName::Person),
            Self::Badges => None,
            Self::Navigation => Some(IconName::Home),
        }
    }

    /// Parses a route segment. Matching ignores ASCII case and surrounding
    /// whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.key().eq_ignore_ascii_case(raw))
    }

    /// Tab triggers for every section.
    pub fn tab_items() -> Vec<TabItem<Self>> {
        Self::ALL
            .into_iter()
            .map(|section| {
                let item = TabItem::new(section.label(), section);
                match section.icon() {
                    Some(icon) => item.with_icon(icon),
                    None => item,
                }
            })
            .collect()
    }
}

fn header_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "#").active(true),
        NavItem::new("Components", "#"),
        NavItem::new("Documentation", "#"),
        NavItem::new("GitHub", "#"),
    ]
}

fn footer_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("GitHub", "#"),
        NavItem::new("Twitter", "#"),
        NavItem::new("Discord", "#"),
    ]
}

pub(crate) fn breadcrumb_items() -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem::new("Home").with_href("/"),
        BreadcrumbItem::new("Components").with_href("#"),
        BreadcrumbItem::new("Design System").active(true),
    ]
}

/// Sections whose bodies are in the DOM for `selection`, in page order.
fn mounted_sections(selection: &Selection<ShowcaseSection>) -> Vec<ShowcaseSection> {
    ShowcaseSection::ALL
        .into_iter()
        .filter(|section| selection.is_selected(*section))
        .collect()
}

fn section_view(section: ShowcaseSection) -> View {
    match section {
        ShowcaseSection::Buttons => view! { <ButtonsSection /> }.into_view(),
        ShowcaseSection::Inputs => view! { <InputsSection /> }.into_view(),
        ShowcaseSection::Cards => view! { <CardsSection /> }.into_view(),
        ShowcaseSection::Badges => view! { <BadgesSection /> }.into_view(),
        ShowcaseSection::Navigation => view! { <NavigationSection /> }.into_view(),
    }
}

#[component]
/// Full showcase page: header, breadcrumb, section tabs, and footer.
pub fn UiShowcaseApp(
    /// Section selected on first render.
    #[prop(optional)]
    initial_section: Option<ShowcaseSection>,
) -> impl IntoView {
    let selection = create_rw_signal(Selection::new(initial_section.unwrap_or_default()));
    let current = Signal::derive(move || selection.with(|selection| selection.current()));
    let on_select = Callback::new(move |section: ShowcaseSection| {
        selection.update(|selection| {
            selection.select(section);
        });
    });

    view! {
        <div class="min-h-screen bg-background" data-ui-kind="showcase">
            <header class="sticky top-0 z-10 border-b bg-background">
                <div class="container flex h-16 items-center justify-between">
                    <div class="flex items-center gap-6">
                        <h1 class="text-xl font-bold">"Design System"</h1>
                        <NavMenu items=header_nav_items() aria_label="Primary" />
                    </div>
                </div>
            </header>

            <main class="container py-10">
                <div class="mb-10 space-y-4">
                    <Breadcrumb items=breadcrumb_items() />
                    <h1 class="text-4xl font-bold">"Custom Design System"</h1>
                    <p class="text-xl text-muted-foreground">
                        "A showcase of variant-driven components built with Leptos"
                    </p>
                </div>

                <div class="mb-8">
                    <Tabs
                        items=ShowcaseSection::tab_items()
                        selected=current
                        on_select=on_select
                        variant=TabsVariant::Pills
                        layout_class="mb-8"
                        aria_label="Component sections"
                    />
                    {move || {
                        selection
                            .with(mounted_sections)
                            .into_iter()
                            .map(section_view)
                            .collect_view()
                    }}
                </div>
            </main>

            <footer class="border-t py-6">
                <div class="container flex items-center justify-between">
                    <p class="text-sm text-muted-foreground">"Custom Design System built with Leptos"</p>
                    <NavMenu
                        items=footer_nav_items()
                        size=Size::Sm
                        spacing=NavSpacing::Tight
                        aria_label="Social"
                    />
                </div>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn selecting_inputs_replaces_buttons() {
        let mut selection = Selection::new(ShowcaseSection::Buttons);
        assert!(selection.select(ShowcaseSection::Inputs));
        assert_eq!(selection.current(), ShowcaseSection::Inputs);
        assert!(!selection.is_selected(ShowcaseSection::Buttons));
    }

    #[test]
    fn only_the_selected_section_is_mounted() {
        let mut selection = Selection::new(ShowcaseSection::default());
        assert_eq!(mounted_sections(&selection), vec![ShowcaseSection::Buttons]);

        selection.select(ShowcaseSection::Inputs);
        let mounted = mounted_sections(&selection);
        let keys: Vec<_> = mounted.iter().map(|section| section.key()).collect();
        assert_eq!(keys, vec!["inputs"]);
        assert!(!mounted.contains(&ShowcaseSection::Buttons));

        for section in ShowcaseSection::ALL {
            selection.select(section);
            assert_eq!(mounted_sections(&selection), vec![section]);
        }
    }

    #[test]
    fn parse_accepts_route_keys_only() {
        assert_eq!(ShowcaseSection::parse("inputs"), Some(ShowcaseSection::Inputs));
        assert_eq!(ShowcaseSection::parse(" Navigation "), Some(ShowcaseSection::Navigation));
        assert_eq!(ShowcaseSection::parse("themes"), None);
        assert_eq!(ShowcaseSection::parse(""), None);
    }

    #[test]
    fn keys_round_trip_through_parse() {
        for section in ShowcaseSection::ALL {
            assert_eq!(ShowcaseSection::parse(section.key()), Some(section));
        }
    }

    #[test]
    fn tab_items_follow_section_order() {
        let items = ShowcaseSection::tab_items();
        let values: Vec<_> = items.iter().map(|item| item.value).collect();
        assert_eq!(values, ShowcaseSection::ALL.to_vec());
        assert_eq!(items[0].icon, Some(IconName::Settings));
        assert_eq!(items[3].label, "Badges");
        assert_eq!(items[3].icon, None);
    }

    #[test]
    fn only_the_design_system_crumb_is_current() {
        let crumbs = breadcrumb_items();
        let links: Vec<_> = crumbs.iter().map(BreadcrumbItem::renders_link).collect();
        assert_eq!(links, vec![true, true, false]);
        assert!(crumbs[2].active);
    }
}
