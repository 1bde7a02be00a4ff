use super::*;

#[component]
/// Compact status badge with optional icons on either side.
pub fn Badge(
    #[prop(optional)] variant: Option<BadgeVariant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] rounded: Option<BadgeRounded>,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    children: Children,
) -> impl IntoView {
    let adornments = Adornments::compose(false, leading_icon, trailing_icon);
    let class = style_class(
        &BADGE,
        VariantConfig::new()
            .select_opt(variant)
            .select_opt(size)
            .select_opt(rounded)
            .select_flag("with_icon", adornments.with_icon())
            .with_class_opt(layout_class),
    );
    let leading = match adornments.leading {
        LeadingAdornment::Icon(icon) => Some(icon),
        LeadingAdornment::Busy | LeadingAdornment::Empty => None,
    };

    view! {
        <div
            class=class
            node_ref=node_ref
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=variant_token(variant)
            data-ui-size=variant_token(size)
        >
            {leading.map(|icon| view! { <Icon icon=icon size=IconSize::Xs /> })}
            {children()}
            {adornments.trailing.map(|icon| view! { <Icon icon=icon size=IconSize::Xs /> })}
        </div>
    }
}

#[component]
/// Card surface resolved from the card variant table.
pub fn Card(
    #[prop(optional)] variant: Option<CardVariant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] rounded: Option<CardRounded>,
    #[prop(optional)] interactive: bool,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    children: Children,
) -> impl IntoView {
    let class = style_class(
        &CARD,
        VariantConfig::new()
            .select_opt(variant)
            .select_opt(size)
            .select_opt(rounded)
            .select_flag("interactive", interactive)
            .with_class_opt(layout_class),
    );

    view! {
        <div
            class=class
            node_ref=node_ref
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-variant=variant_token(variant)
            data-ui-size=variant_token(size)
            data-ui-interactive=bool_token(interactive)
        >
            {children()}
        </div>
    }
}

#[component]
/// Card title and description region.
pub fn CardHeader(
    #[prop(optional, into)] layout_class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=merge_layout_class("flex flex-col space-y-1.5 p-6", layout_class) data-ui-slot="header">
            {children()}
        </div>
    }
}

#[component]
/// Card heading.
pub fn CardTitle(
    #[prop(optional, into)] layout_class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <h3
            class=merge_layout_class("text-2xl font-semibold leading-none tracking-tight", layout_class)
            data-ui-slot="title"
        >
            {children()}
        </h3>
    }
}

#[component]
/// Muted supporting line under a card title.
pub fn CardDescription(
    #[prop(optional, into)] layout_class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <p class=merge_layout_class("text-sm text-muted-foreground", layout_class) data-ui-slot="description">
            {children()}
        </p>
    }
}

#[component]
/// Card body.
pub fn CardContent(
    #[prop(optional, into)] layout_class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=merge_layout_class("p-6 pt-0", layout_class) data-ui-slot="content">
            {children()}
        </div>
    }
}

#[component]
/// Card action row.
pub fn CardFooter(
    #[prop(optional, into)] layout_class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=merge_layout_class("flex items-center p-6 pt-0", layout_class) data-ui-slot="footer">
            {children()}
        </div>
    }
}

fn card_header(regions: CardRegions, title: Option<String>, description: Option<String>) -> View {
    if !regions.header() {
        return ().into_view();
    }
    let title = title.filter(|_| regions.title);
    let description = description.filter(|_| regions.description);

    view! {
        <CardHeader>
            {title.map(|title| view! { <CardTitle>{title}</CardTitle> })}
            {description.map(|description| view! { <CardDescription>{description}</CardDescription> })}
        </CardHeader>
    }
    .into_view()
}

#[component]
/// Vertical card layout: optional header, body, optional footer.
pub fn SimpleCard(
    #[prop(optional)] variant: Option<CardVariant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] rounded: Option<CardRounded>,
    #[prop(optional)] interactive: bool,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] footer: Option<View>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    children: Children,
) -> impl IntoView {
    let regions = CardRegions::from_slots(
        title.as_deref(),
        description.as_deref(),
        footer.is_some(),
        false,
    );

    view! {
        <Card variant=variant.unwrap_or_default() size=size.unwrap_or_default() rounded=rounded.unwrap_or_default() interactive=interactive layout_class=layout_class.unwrap_or_default() node_ref=node_ref>
            {card_header(regions, title, description)}
            <CardContent>{children()}</CardContent>
            {footer.map(|footer| view! { <CardFooter>{footer}</CardFooter> })}
        </Card>
    }
}

#[component]
/// Card with an optional media column beside the text column.
pub fn HorizontalCard(
    #[prop(optional)] variant: Option<CardVariant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] rounded: Option<CardRounded>,
    #[prop(optional)] interactive: bool,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] media: Option<View>,
    #[prop(optional)] footer: Option<View>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    children: Children,
) -> impl IntoView {
    let regions = CardRegions::from_slots(
        title.as_deref(),
        description.as_deref(),
        footer.is_some(),
        media.is_some(),
    );

    view! {
        <Card
            variant=variant.unwrap_or_default()
            size=size.unwrap_or_default()
            rounded=rounded.unwrap_or_default()
            interactive=interactive
            layout_class=merge_layout_class("overflow-hidden", layout_class)
            node_ref=node_ref
        >
            <div class="flex flex-col md:flex-row">
                {media.map(|media| view! {
                    <div class="md:w-1/3 flex-shrink-0" data-ui-slot="media">{media}</div>
                })}
                <div class=regions.body_column_class()>
                    {card_header(regions, title, description)}
                    <CardContent>{children()}</CardContent>
                    {footer.map(|footer| view! { <CardFooter>{footer}</CardFooter> })}
                </div>
            </div>
        </Card>
    }
}
