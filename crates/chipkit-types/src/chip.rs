//! The chip value type and its validating constructors.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChipError, ChipResult};
use crate::token::{ChipSize, ChipVariant, DEFAULT_SIZE, DEFAULT_VARIANT};

/// Labeled, styled display element representing an enumerated value.
///
/// Instances are only produced by the validating constructors, so the label
/// is never empty and both presentation tokens are always populated. Tokens
/// outside the documented sets are stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ChipRecord", into = "ChipRecord")]
pub struct ChipValue {
    label: String,
    variant: String,
    size: String,
}

impl ChipValue {
    /// Construct a chip from all three inputs.
    ///
    /// Empty `variant` and `size` inputs are replaced by [`DEFAULT_VARIANT`]
    /// and [`DEFAULT_SIZE`].
    ///
    /// A rejected label is logged as a `debug` event carrying `field = "label"`.
    /// The event is diagnostic only; construction has no other effect.
    ///
    /// # Errors
    ///
    /// Returns [`ChipError::InvalidArgument`] when `label` is empty.
    pub fn new(
        label: impl Into<String>,
        variant: impl Into<String>,
        size: impl Into<String>,
    ) -> ChipResult<Self> {
        let label = label.into();
        if label.is_empty() {
            debug!(field = "label", "rejected chip construction");
            return Err(ChipError::invalid_label());
        }

        Ok(Self {
            label,
            variant: or_default(variant.into(), DEFAULT_VARIANT),
            size: or_default(size.into(), DEFAULT_SIZE),
        })
    }

    /// Construct a chip with the default variant and size.
    ///
    /// # Errors
    ///
    /// Returns [`ChipError::InvalidArgument`] when `label` is empty.
    pub fn from_label(label: impl Into<String>) -> ChipResult<Self> {
        Self::new(label, String::new(), String::new())
    }

    /// Start building a chip, supplying only the presentation tokens needed.
    #[must_use]
    pub fn builder(label: impl Into<String>) -> ChipBuilder {
        ChipBuilder {
            label: label.into(),
            variant: String::new(),
            size: String::new(),
        }
    }

    /// Semantic identifier of the displayed value.
    #[must_use]
    pub const fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Presentation style token.
    #[must_use]
    pub const fn variant(&self) -> &str {
        self.variant.as_str()
    }

    /// Presentation size token.
    #[must_use]
    pub const fn size(&self) -> &str {
        self.size.as_str()
    }

    /// Typed variant, or `None` when the stored token is not a documented one.
    #[must_use]
    pub fn known_variant(&self) -> Option<ChipVariant> {
        self.variant.parse().ok()
    }

    /// Typed size, or `None` when the stored token is not a documented one.
    #[must_use]
    pub fn known_size(&self) -> Option<ChipSize> {
        self.size.parse().ok()
    }
}

impl Display for ChipValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// Incremental constructor for [`ChipValue`]; omitted tokens fall back to defaults.
#[derive(Debug, Clone)]
#[must_use]
pub struct ChipBuilder {
    label: String,
    variant: String,
    size: String,
}

impl ChipBuilder {
    /// Set the presentation style token.
    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }

    /// Set the presentation size token.
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Validate the inputs and produce the chip.
    ///
    /// # Errors
    ///
    /// Returns [`ChipError::InvalidArgument`] when the label is empty.
    pub fn build(self) -> ChipResult<ChipValue> {
        ChipValue::new(self.label, self.variant, self.size)
    }
}

/// Unvalidated wire form of a chip.
///
/// Missing `variant`/`size` keys deserialize as empty strings and are then
/// defaulted by [`ChipValue`]'s constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipRecord {
    /// Label of the chip.
    pub label: String,
    /// Presentation style token.
    #[serde(default)]
    pub variant: String,
    /// Presentation size token.
    #[serde(default)]
    pub size: String,
}

impl TryFrom<ChipRecord> for ChipValue {
    type Error = ChipError;

    fn try_from(record: ChipRecord) -> ChipResult<Self> {
        Self::new(record.label, record.variant, record.size)
    }
}

impl From<ChipValue> for ChipRecord {
    fn from(chip: ChipValue) -> Self {
        Self {
            label: chip.label,
            variant: chip.variant,
            size: chip.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_supplied_tokens() {
        let chip = ChipValue::new("enum1", "filled", "medium").expect("valid chip");
        assert_eq!(chip.label(), "enum1");
        assert_eq!(chip.variant(), "filled");
        assert_eq!(chip.size(), "medium");
    }

    #[test]
    fn empty_tokens_are_defaulted() {
        let chip = ChipValue::new("enum1", "", "").expect("valid chip");
        assert_eq!(chip.variant(), DEFAULT_VARIANT);
        assert_eq!(chip.size(), DEFAULT_SIZE);
    }

    #[test]
    fn empty_label_is_rejected_regardless_of_tokens() {
        for (variant, size) in [("filled", "medium"), ("", ""), ("outlined", "small")] {
            let err = ChipValue::new("", variant, size).unwrap_err();
            assert!(matches!(err, ChipError::InvalidArgument { field: "label", .. }));
            assert!(err.to_string().contains("Incorrect value for label"));
        }
    }

    #[test]
    fn whitespace_label_is_accepted() {
        let chip = ChipValue::from_label(" ").expect("only emptiness is rejected");
        assert_eq!(chip.label(), " ");
    }

    #[test]
    fn unknown_tokens_are_stored_verbatim() {
        let chip = ChipValue::new("enum1", "dashed", "huge").expect("tokens are not validated");
        assert_eq!(chip.variant(), "dashed");
        assert_eq!(chip.size(), "huge");
        assert_eq!(chip.known_variant(), None);
        assert_eq!(chip.known_size(), None);
    }

    #[test]
    fn known_tokens_are_typed() {
        let chip = ChipValue::new("enum1", ChipVariant::Outlined, ChipSize::Small)
            .expect("valid chip");
        assert_eq!(chip.known_variant(), Some(ChipVariant::Outlined));
        assert_eq!(chip.known_size(), Some(ChipSize::Small));
    }

    #[test]
    fn builder_defaults_omitted_tokens() {
        let chip = ChipValue::builder("enum1")
            .size("small")
            .build()
            .expect("valid chip");
        assert_eq!(chip.variant(), "filled");
        assert_eq!(chip.size(), "small");

        assert!(ChipValue::builder("").variant("outlined").build().is_err());
    }

    #[test]
    fn display_renders_label() {
        let chip = ChipValue::from_label("enum1").expect("valid chip");
        assert_eq!(chip.to_string(), "enum1");
    }

    #[test]
    fn record_conversion_preserves_fields() {
        let chip = ChipValue::new("enum1", "outlined", "small").expect("valid chip");
        let record = ChipRecord::from(chip.clone());
        assert_eq!(record.variant, "outlined");
        assert_eq!(ChipValue::try_from(record), Ok(chip));
    }
}
