use leptos::*;
use system_ui::prelude::*;

use crate::{breadcrumb_items, ShowcaseSection};

#[component]
fn DemoGroup(title: &'static str, layout_class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <h2 class="mb-4 text-2xl font-bold">{title}</h2>
            <div class=layout_class>{children()}</div>
        </div>
    }
}

#[component]
fn DemoCase(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <h3 class="mb-2 text-lg font-medium">{title}</h3>
            {children()}
        </div>
    }
}

#[component]
pub(crate) fn ButtonsSection() -> impl IntoView {
    let variants = [
        (ButtonVariant::Primary, "Primary"),
        (ButtonVariant::Secondary, "Secondary"),
        (ButtonVariant::Outline, "Outline"),
        (ButtonVariant::Ghost, "Ghost"),
        (ButtonVariant::Link, "Link"),
        (ButtonVariant::Success, "Success"),
        (ButtonVariant::Warning, "Warning"),
        (ButtonVariant::Danger, "Danger"),
    ];
    let sizes = [
        (ButtonSize::Xs, "Extra Small"),
        (ButtonSize::Sm, "Small"),
        (ButtonSize::Md, "Medium"),
        (ButtonSize::Lg, "Large"),
        (ButtonSize::Xl, "Extra Large"),
    ];
    let radii = [
        (Rounded::None, "Square"),
        (Rounded::Sm, "Small Radius"),
        (Rounded::Md, "Medium Radius"),
        (Rounded::Lg, "Large Radius"),
        (Rounded::Full, "Full Radius"),
    ];

    view! {
        <section class="space-y-8" data-section=ShowcaseSection::Buttons.key()>
            <DemoGroup title="Button Variants" layout_class="flex flex-wrap gap-4">
                {variants
                    .into_iter()
                    .map(|(variant, label)| view! { <Button variant=variant>{label}</Button> })
                    .collect_view()}
            </DemoGroup>
            <DemoGroup title="Button Sizes" layout_class="flex flex-wrap items-center gap-4">
                {sizes
                    .into_iter()
                    .map(|(size, label)| view! { <Button size=size>{label}</Button> })
                    .collect_view()}
            </DemoGroup>
            <DemoGroup title="Button Roundness" layout_class="flex flex-wrap gap-4">
                {radii
                    .into_iter()
                    .map(|(rounded, label)| view! { <Button rounded=rounded>{label}</Button> })
                    .collect_view()}
            </DemoGroup>
            <DemoGroup title="Button with Icons" layout_class="flex flex-wrap gap-4">
                <Button leading_icon=IconName::Mail>"Email"</Button>
                <Button trailing_icon=IconName::ArrowRight>"Next"</Button>
                <Button variant=ButtonVariant::Success leading_icon=IconName::Checkmark>
                    "Completed"
                </Button>
                <Button loading=true>"Loading"</Button>
            </DemoGroup>
        </section>
    }
}

#[component]
pub(crate) fn InputsSection() -> impl IntoView {
    let variants = [
        (InputVariant::Default, "Default input"),
        (InputVariant::Filled, "Filled input"),
        (InputVariant::Flushed, "Flushed input"),
        (InputVariant::Outline, "Outline input"),
    ];
    let sizes = [
        (Size::Sm, "Small input"),
        (Size::Md, "Medium input"),
        (Size::Lg, "Large input"),
    ];
    let radii = [
        (Rounded::None, "Square input"),
        (Rounded::Sm, "Small radius input"),
        (Rounded::Md, "Medium radius input"),
        (Rounded::Lg, "Large radius input"),
        (Rounded::Full, "Full radius input"),
    ];
    let states = [
        (InputState::Default, "Default state"),
        (InputState::Error, "Error state"),
        (InputState::Success, "Success state"),
    ];

    view! {
        <section class="space-y-8" data-section=ShowcaseSection::Inputs.key()>
            <DemoGroup title="Input Variants" layout_class="grid gap-4 md:grid-cols-2">
                {variants
                    .into_iter()
                    .map(|(variant, placeholder)| view! { <Input variant=variant placeholder=placeholder /> })
                    .collect_view()}
            </DemoGroup>
            <DemoGroup title="Input Sizes" layout_class="grid gap-4">
                {sizes
                    .into_iter()
                    .map(|(size, placeholder)| view! { <Input size=size placeholder=placeholder /> })
                    .collect_view()}
            </DemoGroup>
            <DemoGroup title="Input Roundness" layout_class="grid gap-4 md:grid-cols-2">
                {radii
                    .into_iter()
                    .map(|(rounded, placeholder)| view! { <Input rounded=rounded placeholder=placeholder /> })
                    .collect_view()}
            </DemoGroup>
            <DemoGroup title="Input States" layout_class="grid gap-4 md:grid-cols-2">
                {states
                    .into_iter()
                    .map(|(state, placeholder)| view! { <Input state=state placeholder=placeholder /> })
                    .collect_view()}
            </DemoGroup>
            <DemoGroup title="Input with Elements" layout_class="grid gap-4">
                <Input leading=IconName::Search placeholder="Search..." />
                <Input trailing=IconName::Mail placeholder="Email address" input_type="email" />
                <Input
                    leading=IconName::Person
                    trailing=IconName::Checkmark
                    trailing_class="text-green-500"
                    placeholder="Username"
                />
            </DemoGroup>
        </section>
    }
}

#[component]
pub(crate) fn CardsSection() -> impl IntoView {
    let variants = [
        (CardVariant::Default, "Default Card", "This is a default card component"),
        (CardVariant::Outline, "Outline Card", "Card with outline style"),
        (CardVariant::Filled, "Filled Card", "Card with filled background"),
        (CardVariant::Elevated, "Elevated Card", "Card with elevated shadow"),
        (CardVariant::Ghost, "Ghost Card", "Card with ghost style"),
    ];
    let sizes = [
        (Size::Sm, "Small Card", "Card with small padding"),
        (Size::Md, "Medium Card", "Card with medium padding"),
        (Size::Lg, "Large Card", "Card with large padding"),
    ];
    let media = view! {
        <div class="h-full w-full bg-muted">
            <img
                src="/placeholder.svg?height=200&width=300"
                alt="Placeholder"
                width="300"
                height="200"
                class="h-full w-full object-cover"
            />
        </div>
    }
    .into_view();

    view! {
        <section class="space-y-8" data-section=ShowcaseSection::Cards.key()>
            <DemoGroup title="Card Variants" layout_class="grid gap-6 md:grid-cols-3">
                {variants
                    .into_iter()
                    .map(|(variant, title, description)| view! {
                        <SimpleCard variant=variant title=title description=description>
                            <p>"Card content goes here"</p>
                        </SimpleCard>
                    })
                    .collect_view()}
            </DemoGroup>
            <DemoGroup title="Card Sizes" layout_class="grid gap-6 md:grid-cols-3">
                {sizes
                    .into_iter()
                    .map(|(size, title, description)| view! {
                        <SimpleCard size=size title=title description=description>
                            <p>"Card content goes here"</p>
                        </SimpleCard>
                    })
                    .collect_view()}
            </DemoGroup>
            <DemoGroup title="Interactive Cards" layout_class="grid gap-6 md:grid-cols-3">
                <SimpleCard interactive=true title="Interactive Card" description="Hover to see the effect">
                    <p>"This card has hover effects"</p>
                </SimpleCard>
                <SimpleCard
                    interactive=true
                    variant=CardVariant::Outline
                    title="Interactive Outline"
                    description="Hover to see the effect"
                    footer=view! { <Button size=ButtonSize::Sm variant=ButtonVariant::Outline>"Open"</Button> }.into_view()
                >
                    <p>"This card has hover effects"</p>
                </SimpleCard>
            </DemoGroup>
            <DemoGroup title="Horizontal Card Layout" layout_class="">
                <HorizontalCard
                    title="Horizontal Card"
                    description="Card with horizontal layout"
                    media=media
                >
                    <p>"This card has a horizontal layout with media on the left side."</p>
                </HorizontalCard>
            </DemoGroup>
        </section>
    }
}

#[component]
pub(crate) fn BadgesSection() -> impl IntoView {
    let variants = [
        (BadgeVariant::Default, "Default"),
        (BadgeVariant::Secondary, "Secondary"),
        (BadgeVariant::Outline, "Outline"),
        (BadgeVariant::Success, "Success"),
        (BadgeVariant::Warning, "Warning"),
        (BadgeVariant::Danger, "Danger"),
        (BadgeVariant::Info, "Info"),
    ];
    let sizes = [(Size::Sm, "Small"), (Size::Md, "Medium"), (Size::Lg, "Large")];
    let shapes = [
        (BadgeRounded::Sm, "Square-ish"),
        (BadgeRounded::Md, "Medium Radius"),
        (BadgeRounded::Lg, "Large Radius"),
        (BadgeRounded::Full, "Pill"),
    ];

    view! {
        <section class="space-y-8" data-section=ShowcaseSection::Badges.key()>
            <DemoGroup title="Badge Variants" layout_class="flex flex-wrap gap-4">
                {variants
                    .into_iter()
                    .map(|(variant, label)| view! { <Badge variant=variant>{label}</Badge> })
                    .collect_view()}
            </DemoGroup>
            <DemoGroup title="Badge Sizes" layout_class="flex flex-wrap items-center gap-4">
                {sizes
                    .into_iter()
                    .map(|(size, label)| view! { <Badge size=size>{label}</Badge> })
                    .collect_view()}
            </DemoGroup>
            <DemoGroup title="Badge Shapes" layout_class="flex flex-wrap gap-4">
                {shapes
                    .into_iter()
                    .map(|(rounded, label)| view! { <Badge rounded=rounded>{label}</Badge> })
                    .collect_view()}
            </DemoGroup>
            <DemoGroup title="Badge with Icons" layout_class="flex flex-wrap gap-4">
                <Badge leading_icon=IconName::Checkmark>"Verified"</Badge>
                <Badge trailing_icon=IconName::ChevronRight>"View more"</Badge>
                <Badge
                    variant=BadgeVariant::Success
                    leading_icon=IconName::Checkmark
                    trailing_icon=IconName::ChevronRight
                >
                    "Completed"
                </Badge>
            </DemoGroup>
        </section>
    }
}

fn demo_tab_items() -> Vec<TabItem<ShowcaseSection>> {
    ShowcaseSection::tab_items().into_iter().take(3).collect()
}

#[component]
fn TabDemo(title: &'static str, variant: TabsVariant) -> impl IntoView {
    let selected = create_rw_signal(ShowcaseSection::Buttons);

    view! {
        <DemoCase title=title>
            <Tabs
                items=demo_tab_items()
                selected=selected
                on_select=Callback::new(move |section: ShowcaseSection| selected.set(section))
                variant=variant
            />
        </DemoCase>
    }
}

#[component]
pub(crate) fn NavigationSection() -> impl IntoView {
    let horizontal = vec![
        NavItem::new("Home", "#").active(true),
        NavItem::new("Products", "#"),
        NavItem::new("Pricing", "#"),
        NavItem::new("About", "#"),
    ];
    let vertical = vec![
        NavItem::new("Dashboard", "#").with_icon(IconName::Home),
        NavItem::new("Settings", "#").with_icon(IconName::Settings),
        NavItem::new("Messages", "#").with_icon(IconName::Mail).active(true),
        NavItem::new("Profile", "#").with_icon(IconName::Person),
    ];
    let separators = [
        (BreadcrumbSeparator::Chevron, "Chevron Separator"),
        (BreadcrumbSeparator::Slash, "Slash Separator"),
        (BreadcrumbSeparator::Dot, "Dot Separator"),
    ];
    let tab_variants = [
        (TabsVariant::Default, "Default Tabs"),
        (TabsVariant::Pills, "Pills Tabs"),
        (TabsVariant::Underline, "Underline Tabs"),
        (TabsVariant::Enclosed, "Enclosed Tabs"),
    ];

    view! {
        <section class="space-y-8" data-section=ShowcaseSection::Navigation.key()>
            <DemoGroup title="Navigation Menu Variants" layout_class="space-y-8">
                <DemoCase title="Horizontal Menu">
                    <NavMenu items=horizontal variant=NavOrientation::Horizontal />
                </DemoCase>
                <DemoCase title="Vertical Menu">
                    <NavMenu items=vertical variant=NavOrientation::Vertical />
                </DemoCase>
            </DemoGroup>
            <DemoGroup title="Breadcrumb Variants" layout_class="space-y-4">
                {separators
                    .into_iter()
                    .map(|(separator, title)| view! {
                        <DemoCase title=title>
                            <Breadcrumb items=breadcrumb_items() separator=separator />
                        </DemoCase>
                    })
                    .collect_view()}
            </DemoGroup>
            <DemoGroup title="Tab Variants" layout_class="space-y-8">
                {tab_variants
                    .into_iter()
                    .map(|(variant, title)| view! { <TabDemo title=title variant=variant /> })
                    .collect_view()}
            </DemoGroup>
        </section>
    }
}
