//! Region and decoration decisions for composite widgets.
//!
//! Everything here is a pure function of the props a component received, so
//! the render functions stay declarative and the rules are testable without a
//! DOM.

use crate::IconName;

/// Whether an optional text slot should render. Blank strings count as empty.
pub fn has_text(slot: Option<&str>) -> bool {
    slot.is_some_and(|text| !text.trim().is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Leading region content of a button or badge.
pub enum LeadingAdornment {
    /// Busy spinner; hides any caller icon.
    Busy,
    /// Caller-supplied icon.
    Icon(IconName),
    /// Nothing rendered.
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon decorations around a label, resolved for one render.
pub struct Adornments {
    /// Leading region.
    pub leading: LeadingAdornment,
    /// Trailing icon, unaffected by the busy state.
    pub trailing: Option<IconName>,
}

impl Adornments {
    /// Applies the busy-over-icon precedence for the leading region.
    pub fn compose(busy: bool, leading: Option<IconName>, trailing: Option<IconName>) -> Self {
        let leading = match (busy, leading) {
            (true, _) => LeadingAdornment::Busy,
            (false, Some(icon)) => LeadingAdornment::Icon(icon),
            (false, None) => LeadingAdornment::Empty,
        };
        Self { leading, trailing }
    }

    /// Drives the `with_icon` axis: true when anything renders beside the label.
    pub fn with_icon(&self) -> bool {
        self.leading != LeadingAdornment::Empty || self.trailing.is_some()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Which decorations an input carries.
pub struct InputDecorations {
    /// Leading decoration present.
    pub leading: bool,
    /// Trailing decoration present.
    pub trailing: bool,
}

impl InputDecorations {
    /// Records which decoration slots are populated.
    pub fn new(leading: bool, trailing: bool) -> Self {
        Self { leading, trailing }
    }

    /// Whether the positioning wrapper is needed at all.
    pub fn needs_wrapper(&self) -> bool {
        self.leading || self.trailing
    }

    /// Padding reserved for the decorations. Appended after axis tokens and
    /// before caller overrides.
    pub fn padding_tokens(&self) -> &'static str {
        match (self.leading, self.trailing) {
            (true, true) => "pl-10 pr-10",
            (true, false) => "pl-10",
            (false, true) => "pr-10",
            (false, false) => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Card layout regions, in render order.
pub enum CardRegion {
    /// Media column (horizontal layout only).
    Media,
    /// Title and description.
    Header,
    /// Body content; always present.
    Content,
    /// Footer actions.
    Footer,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Populated optional slots of a card layout.
pub struct CardRegions {
    /// Title slot populated.
    pub title: bool,
    /// Description slot populated.
    pub description: bool,
    /// Footer slot populated.
    pub footer: bool,
    /// Media slot populated.
    pub media: bool,
}

impl CardRegions {
    /// Derives region presence from the card's slots.
    pub fn from_slots(
        title: Option<&str>,
        description: Option<&str>,
        footer: bool,
        media: bool,
    ) -> Self {
        Self {
            title: has_text(title),
            description: has_text(description),
            footer,
            media,
        }
    }

    /// Header renders when it has a title or a description.
    pub fn header(&self) -> bool {
        self.title || self.description
    }

    /// Regions to render, first to last.
    pub fn order(&self) -> Vec<CardRegion> {
        let mut regions = Vec::with_capacity(4);
        if self.media {
            regions.push(CardRegion::Media);
        }
        if self.header() {
            regions.push(CardRegion::Header);
        }
        regions.push(CardRegion::Content);
        if self.footer {
            regions.push(CardRegion::Footer);
        }
        regions
    }

    /// Width of the text column in the horizontal layout.
    pub fn body_column_class(&self) -> &'static str {
        if self.media {
            "flex flex-col md:w-2/3"
        } else {
            "flex flex-col w-full"
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn text_slots_need_visible_content() {
        assert!(has_text(Some("Title")));
        assert!(!has_text(Some("   ")));
        assert!(!has_text(Some("")));
        assert!(!has_text(None));
    }

    #[test]
    fn busy_state_replaces_leading_icon_only() {
        let busy = Adornments::compose(true, Some(IconName::Mail), Some(IconName::ArrowRight));
        assert_eq!(busy.leading, LeadingAdornment::Busy);
        assert_eq!(busy.trailing, Some(IconName::ArrowRight));
        assert!(busy.with_icon());

        let idle = Adornments::compose(false, Some(IconName::Mail), None);
        assert_eq!(idle.leading, LeadingAdornment::Icon(IconName::Mail));
        assert!(idle.with_icon());

        let plain = Adornments::compose(false, None, None);
        assert_eq!(plain.leading, LeadingAdornment::Empty);
        assert!(!plain.with_icon());
    }

    #[test]
    fn input_padding_follows_populated_decorations() {
        assert_eq!(InputDecorations::new(true, false).padding_tokens(), "pl-10");
        assert_eq!(InputDecorations::new(false, true).padding_tokens(), "pr-10");
        assert_eq!(InputDecorations::new(true, true).padding_tokens(), "pl-10 pr-10");

        let bare = InputDecorations::default();
        assert_eq!(bare.padding_tokens(), "");
        assert!(!bare.needs_wrapper());
        assert!(InputDecorations::new(false, true).needs_wrapper());
    }

    #[test]
    fn card_without_footer_omits_footer_region() {
        let regions = CardRegions::from_slots(Some("Default Card"), None, false, false);
        assert_eq!(regions.order(), vec![CardRegion::Header, CardRegion::Content]);
    }

    #[test]
    fn card_footer_renders_last() {
        let regions = CardRegions::from_slots(Some("Default Card"), Some("Details"), true, false);
        assert_eq!(
            regions.order(),
            vec![CardRegion::Header, CardRegion::Content, CardRegion::Footer]
        );
    }

    #[test]
    fn empty_card_renders_only_content() {
        let regions = CardRegions::from_slots(Some(""), None, false, false);
        assert!(!regions.header());
        assert_eq!(regions.order(), vec![CardRegion::Content]);
        assert_eq!(regions.body_column_class(), "flex flex-col w-full");
    }

    #[test]
    fn media_leads_horizontal_layout_and_narrows_body() {
        let regions = CardRegions::from_slots(None, Some("Horizontal"), false, true);
        assert_eq!(
            regions.order(),
            vec![CardRegion::Media, CardRegion::Header, CardRegion::Content]
        );
        assert_eq!(regions.body_column_class(), "flex flex-col md:w-2/3");
    }
}
