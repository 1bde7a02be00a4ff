//! Headless style-variant resolution for the shared component library.
//!
//! A [`VariantDefinition`] is a static lookup table: a base class-token set plus
//! an ordered list of [`AxisDefinition`]s, each mapping a closed set of values to
//! the tokens they contribute. A [`VariantConfig`] selects values for some axes
//! and carries caller override tokens. Resolution merges everything into a
//! [`ResolvedStyle`] in a fixed order (base, axes in declaration order,
//! overrides) so a "last wins" style layer lets callers override earlier tokens.
//!
//! The crate has no UI dependency; `system_ui` owns the concrete tables and the
//! Leptos components that consume them.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod config;
mod definition;
mod error;
mod resolve;

pub use config::{AxisValue, VariantConfig};
pub use definition::{AxisDefinition, VariantDefinition};
pub use error::VariantError;
pub use resolve::{resolve, ResolvedStyle};

/// Value key used by boolean axes such as `with_icon` or `interactive`.
pub const fn flag_key(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
