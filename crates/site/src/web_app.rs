use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use ui_showcase::{ShowcaseSection, UiShowcaseApp};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Design System" />
        <Meta name="description" content="Variant-driven UI components rendered with Leptos." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=ShowcaseEntry />
                    <Route path="/:section" view=ShowcaseSectionRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn ShowcaseEntry() -> impl IntoView {
    view! { <UiShowcaseApp /> }
}

#[component]
fn ShowcaseSectionRoute() -> impl IntoView {
    let params = use_params_map();
    let raw = params.with_untracked(|map| map.get("section").cloned());
    let section = section_from_route(raw.as_deref());

    view! { <UiShowcaseApp initial_section=section /> }
}

/// Maps the `/:section` segment to a tab. Unknown segments fall back to the
/// first section.
pub(crate) fn section_from_route(raw: Option<&str>) -> ShowcaseSection {
    match raw {
        None => ShowcaseSection::default(),
        Some(raw) => ShowcaseSection::parse(raw).unwrap_or_else(|| {
            logging::warn!("unknown showcase section `{raw}`; showing buttons");
            ShowcaseSection::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn known_segment_selects_its_section() {
        assert_eq!(section_from_route(Some("cards")), ShowcaseSection::Cards);
    }

    #[test]
    fn missing_or_unknown_segment_falls_back_to_buttons() {
        assert_eq!(section_from_route(None), ShowcaseSection::Buttons);
        assert_eq!(section_from_route(Some("themes")), ShowcaseSection::Buttons);
    }
}
