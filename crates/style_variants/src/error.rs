use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Configuration errors raised while validating or resolving a variant table.
pub enum VariantError {
    /// A configuration selected a value outside the axis's legal set.
    #[error("invalid value `{value}` for variant axis `{axis}`")]
    InvalidVariantValue {
        /// Axis the value was supplied for.
        axis: String,
        /// Rejected value.
        value: String,
    },
    /// A configuration named an axis the definition does not declare.
    #[error("variant `{definition}` has no axis named `{axis}`")]
    UnknownAxis {
        /// Definition being resolved.
        definition: &'static str,
        /// Unrecognized axis name.
        axis: String,
    },
    /// An axis default is not one of its own legal values.
    #[error("default `{value}` of axis `{axis}` in variant `{definition}` is not a legal value")]
    InvalidDefault {
        /// Definition carrying the broken axis.
        definition: &'static str,
        /// Axis name.
        axis: &'static str,
        /// Declared default.
        value: &'static str,
    },
    /// Two axes of one definition share a name.
    #[error("variant `{definition}` declares axis `{axis}` more than once")]
    DuplicateAxis {
        /// Definition carrying the duplicate.
        definition: &'static str,
        /// Repeated axis name.
        axis: &'static str,
    },
    /// One axis lists the same value twice.
    #[error("axis `{axis}` in variant `{definition}` lists value `{value}` more than once")]
    DuplicateValue {
        /// Definition carrying the duplicate.
        definition: &'static str,
        /// Axis name.
        axis: &'static str,
        /// Repeated value.
        value: &'static str,
    },
}

impl VariantError {
    pub(crate) fn invalid_value(axis: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidVariantValue {
            axis: axis.into(),
            value: value.into(),
        }
    }
}
