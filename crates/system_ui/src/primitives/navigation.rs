use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One link in a [`NavMenu`].
pub struct NavItem {
    /// Visible text.
    pub label: String,
    /// Link target.
    pub href: String,
    /// Marks the current location.
    pub active: bool,
    /// Optional icon before the label.
    pub icon: Option<IconName>,
}

impl NavItem {
    /// Inactive item without an icon.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            active: false,
            icon: None,
        }
    }

    /// Sets the active flag.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Adds a leading icon.
    pub fn with_icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Link classes; the active item is emphasized, others are muted.
    pub fn class_name(&self) -> &'static str {
        if self.active {
            "flex items-center gap-2 transition-colors hover:text-primary font-medium text-primary"
        } else {
            "flex items-center gap-2 transition-colors hover:text-primary text-muted-foreground"
        }
    }
}

#[component]
/// Row or column of navigation links.
pub fn NavMenu(
    /// Links in display order.
    items: Vec<NavItem>,
    #[prop(optional)] variant: Option<NavOrientation>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] spacing: Option<NavSpacing>,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Nav>,
) -> impl IntoView {
    let class = style_class(
        &NAV_MENU,
        VariantConfig::new()
            .select_opt(variant)
            .select_opt(size)
            .select_opt(spacing)
            .with_class_opt(layout_class),
    );

    view! {
        <nav
            class=class
            node_ref=node_ref
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="nav-menu"
            data-ui-variant=variant_token(variant)
        >
            {items
                .into_iter()
                .map(|item| {
                    let class = item.class_name();
                    view! {
                        <a
                            href=item.href
                            class=class
                            aria-current=item.active.then_some("page")
                        >
                            {item.icon.map(|icon| view! { <Icon icon=icon /> })}
                            {item.label}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One step in a [`Breadcrumb`] trail.
pub struct BreadcrumbItem {
    /// Visible text.
    pub label: String,
    /// Link target; omitted for plain text steps.
    pub href: Option<String>,
    /// Marks the current page.
    pub active: bool,
}

impl BreadcrumbItem {
    /// Plain, inactive step.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            active: false,
        }
    }

    /// Adds a link target.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Sets the active flag.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// The current page is never a link, even when it has a target.
    pub fn renders_link(&self) -> bool {
        self.href.is_some() && !self.active
    }

    /// Classes for the step's text or link.
    pub fn class_name(&self) -> &'static str {
        match (self.renders_link(), self.active) {
            (true, _) => "hover:text-primary text-muted-foreground",
            (false, true) => "font-medium text-foreground",
            (false, false) => "text-muted-foreground",
        }
    }
}

/// Text glyph for a separator; `None` means the chevron icon.
fn separator_text(separator: BreadcrumbSeparator) -> Option<&'static str> {
    match separator {
        BreadcrumbSeparator::Slash => Some("/"),
        BreadcrumbSeparator::Dot => Some("\u{2022}"),
        BreadcrumbSeparator::Chevron => None,
    }
}

fn separator_view(separator: BreadcrumbSeparator) -> View {
    match separator_text(separator) {
        Some(glyph) => view! { <span class="px-2" aria-hidden="true">{glyph}</span> }.into_view(),
        None => view! {
            <Icon icon=IconName::ChevronRight layout_class="text-muted-foreground" />
        }
        .into_view(),
    }
}

#[component]
/// Breadcrumb trail with a separator between consecutive steps.
pub fn Breadcrumb(
    /// Steps from root to current page.
    items: Vec<BreadcrumbItem>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] separator: Option<BreadcrumbSeparator>,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Nav>,
) -> impl IntoView {
    let class = style_class(
        &BREADCRUMB,
        VariantConfig::new()
            .select_opt(size)
            .select_opt(separator)
            .with_class_opt(layout_class),
    );
    let separator = separator.unwrap_or_default();

    view! {
        <nav
            class=class
            node_ref=node_ref
            aria-label="Breadcrumb"
            data-ui-primitive="true"
            data-ui-kind="breadcrumb"
            data-ui-separator=separator.key()
        >
            <ol class="flex items-center gap-1">
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let class = item.class_name();
                        let step = if item.renders_link() {
                            view! { <a href=item.href class=class>{item.label}</a> }.into_view()
                        } else {
                            view! {
                                <span class=class aria-current=item.active.then_some("page")>
                                    {item.label}
                                </span>
                            }
                            .into_view()
                        };
                        view! {
                            <li class="flex items-center">
                                {(index > 0).then(|| separator_view(separator))}
                                {step}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </nav>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One trigger in a [`Tabs`] strip.
pub struct TabItem<T> {
    /// Visible text.
    pub label: String,
    /// Value reported when the tab is chosen.
    pub value: T,
    /// Optional icon before the label.
    pub icon: Option<IconName>,
}

impl<T> TabItem<T> {
    /// Tab without an icon.
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
            icon: None,
        }
    }

    /// Adds a leading icon.
    pub fn with_icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }
}

#[component]
/// Controlled tab strip.
///
/// The strip never owns the selection: `selected` is read to mark the active
/// trigger and clicks are reported through `on_select`.
pub fn Tabs<T>(
    /// Triggers in display order.
    items: Vec<TabItem<T>>,
    /// Currently selected value.
    #[prop(into)]
    selected: Signal<T>,
    /// Invoked with the clicked tab's value.
    on_select: Callback<T>,
    #[prop(optional)] variant: Option<TabsVariant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
) -> impl IntoView
where
    T: Copy + PartialEq + 'static,
{
    let class = style_class(
        &TABS,
        VariantConfig::new()
            .select_opt(variant)
            .select_opt(size)
            .with_class_opt(layout_class),
    );
    let item_class = style_class(
        &TAB_ITEM,
        VariantConfig::new()
            .select_opt(variant)
            .select_opt(size)
            .with_class("flex items-center gap-2"),
    );

    view! {
        <div
            class=class
            node_ref=node_ref
            role="tablist"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="tabs"
            data-ui-variant=variant_token(variant)
        >
            {items
                .into_iter()
                .map(|item| {
                    let value = item.value;
                    let is_active = move || selected.get() == value;
                    view! {
                        <button
                            type="button"
                            class=item_class.clone()
                            role="tab"
                            aria-selected=move || bool_token(is_active())
                            data-active=move || bool_token(is_active())
                            on:click=move |_| on_select.call(value)
                        >
                            {item.icon.map(|icon| view! { <Icon icon=icon /> })}
                            {item.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn nav_item_class_tracks_active_flag() {
        let item = NavItem::new("Docs", "/docs");
        assert!(item.class_name().ends_with("text-muted-foreground"));
        assert!(item.clone().active(true).class_name().ends_with("font-medium text-primary"));
        assert_eq!(item.with_icon(IconName::Home).icon, Some(IconName::Home));
    }

    #[test]
    fn active_breadcrumb_step_is_never_a_link() {
        let current = BreadcrumbItem::new("Buttons").with_href("/buttons").active(true);
        assert!(!current.renders_link());
        assert_eq!(current.class_name(), "font-medium text-foreground");

        let parent = BreadcrumbItem::new("Home").with_href("/");
        assert!(parent.renders_link());
        assert_eq!(parent.class_name(), "hover:text-primary text-muted-foreground");

        let plain = BreadcrumbItem::new("Components");
        assert!(!plain.renders_link());
        assert_eq!(plain.class_name(), "text-muted-foreground");
    }

    #[test]
    fn separator_glyphs() {
        assert_eq!(separator_text(BreadcrumbSeparator::Slash), Some("/"));
        assert_eq!(separator_text(BreadcrumbSeparator::Dot), Some("\u{2022}"));
        assert_eq!(separator_text(BreadcrumbSeparator::Chevron), None);
    }

    #[test]
    fn tab_item_layout_class_replaces_inline_display() {
        let class = style_class(
            &TAB_ITEM,
            VariantConfig::new()
                .select_value(TabsVariant::Enclosed)
                .select_value(Size::Sm)
                .with_class("flex items-center gap-2"),
        );
        assert!(class.starts_with("items-center justify-center whitespace-nowrap"));
        assert!(!class.split_whitespace().any(|token| token == "inline-flex"));
        assert!(class.ends_with(
            "rounded-md px-3 py-1.5 hover:bg-background data-[active=true]:bg-background text-sm flex gap-2"
        ));
    }
}
