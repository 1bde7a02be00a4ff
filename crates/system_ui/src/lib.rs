//! Shared design-system primitives for the showcase and any downstream app.
//!
//! Every styled component resolves its class attribute through a static
//! [`style_variants::VariantDefinition`] in [`variants`], takes typed axis
//! props, and exposes the stable `data-ui-*` DOM contract used by tests and
//! CSS hooks. Composite widgets keep their region rules in [`composition`] so
//! they can be checked without a DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod composition;
mod icon;
mod primitives;
mod selection;
pub mod utilities;
pub mod variants;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Breadcrumb, BreadcrumbItem, Button, Card, CardContent, CardDescription, CardFooter,
    CardHeader, CardTitle, HorizontalCard, Input, NavItem, NavMenu, SimpleCard, TabItem, Tabs,
};
pub use selection::Selection;
pub use variants::{
    BadgeRounded, BadgeVariant, BreadcrumbSeparator, ButtonSize, ButtonVariant, CardRounded,
    CardVariant, InputState, InputVariant, NavOrientation, NavSpacing, Rounded, Size, TabsVariant,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, BadgeRounded, BadgeVariant, Breadcrumb, BreadcrumbItem, BreadcrumbSeparator,
        Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardFooter,
        CardHeader, CardRounded, CardTitle, CardVariant, HorizontalCard, Icon, IconName, IconSize,
        Input, InputState, InputVariant, NavItem, NavMenu, NavOrientation, NavSpacing, Rounded,
        Selection, SimpleCard, Size, TabItem, Tabs, TabsVariant,
    };
}
