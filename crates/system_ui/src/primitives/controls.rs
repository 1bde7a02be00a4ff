use super::*;

#[component]
/// Shared button primitive with variant tokens, icon slots, and a busy state.
///
/// While `loading`, the spinner takes the leading slot, the caller's leading
/// icon is hidden, and the button is disabled.
pub fn Button(
    #[prop(optional)] variant: Option<ButtonVariant>,
    #[prop(optional)] size: Option<ButtonSize>,
    #[prop(optional)] rounded: Option<Rounded>,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] loading: bool,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let adornments = Adornments::compose(loading, leading_icon, trailing_icon);
    let class = style_class(
        &BUTTON,
        VariantConfig::new()
            .select_opt(variant)
            .select_opt(size)
            .select_opt(rounded)
            .select_flag("with_icon", adornments.with_icon())
            .with_class_opt(layout_class),
    );
    let leading = match adornments.leading {
        LeadingAdornment::Busy => {
            view! { <Icon icon=IconName::Spinner layout_class="mr-2 animate-spin" /> }.into_view()
        }
        LeadingAdornment::Icon(icon) => view! { <Icon icon=icon /> }.into_view(),
        LeadingAdornment::Empty => ().into_view(),
    };
    let state_token = if loading { "busy" } else { "idle" };

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=class
            id=id
            title=title
            aria-label=aria_label
            aria-busy=bool_token(loading)
            node_ref=node_ref
            disabled=move || loading || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant_token(variant)
            data-ui-size=variant_token(size)
            data-ui-rounded=variant_token(rounded)
            data-ui-state=state_token
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading}
            {children()}
            {adornments.trailing.map(|icon| view! { <Icon icon=icon /> })}
        </button>
    }
}

#[component]
/// Shared text input with optional leading/trailing decorations.
///
/// Without decorations the bare `<input>` renders; with either one, a
/// positioning wrapper is added and the field reserves padding on that side.
pub fn Input(
    #[prop(optional)] variant: Option<InputVariant>,
    #[prop(optional)] size: Option<Size>,
    #[prop(optional)] rounded: Option<Rounded>,
    #[prop(optional)] state: Option<InputState>,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] leading: Option<IconName>,
    #[prop(optional)] trailing: Option<IconName>,
    #[prop(optional)] trailing_class: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    let decorations = InputDecorations::new(leading.is_some(), trailing.is_some());
    let class = style_class(
        &INPUT,
        VariantConfig::new()
            .select_opt(variant)
            .select_opt(size)
            .select_opt(rounded)
            .select_opt(state)
            .with_class(decorations.padding_tokens())
            .with_class_opt(layout_class),
    );

    let field = view! {
        <input
            class=class
            id=id
            name=name
            placeholder=placeholder
            aria-label=aria_label
            aria-invalid=(state == Some(InputState::Error)).then_some("true")
            type=input_type.unwrap_or("text")
            node_ref=node_ref
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="input"
            data-ui-variant=variant_token(variant)
            data-ui-size=variant_token(size)
            data-ui-state=variant_token(state)
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
        />
    };

    if !decorations.needs_wrapper() {
        return field.into_view();
    }

    view! {
        <div class="relative flex items-center" data-ui-primitive="true" data-ui-kind="input-group">
            {leading.map(|icon| view! {
                <div class="absolute left-3 flex h-full items-center text-muted-foreground" data-ui-slot="leading">
                    <Icon icon=icon />
                </div>
            })}
            {field}
            {trailing.map(|icon| view! {
                <div class="absolute right-3 flex h-full items-center text-muted-foreground" data-ui-slot="trailing">
                    <Icon icon=icon layout_class=trailing_class.unwrap_or("") />
                </div>
            })}
        </div>
    }
    .into_view()
}
