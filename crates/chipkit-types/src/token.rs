//! Known presentation tokens for chips.
//!
//! Chips store their tokens as plain strings; these enums give callers a typed
//! view over the documented values without restricting what may be stored.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Token used when a chip is constructed without a variant.
pub const DEFAULT_VARIANT: &str = ChipVariant::Filled.as_str();
/// Token used when a chip is constructed without a size.
pub const DEFAULT_SIZE: &str = ChipSize::Medium.as_str();

/// Presentation style of a chip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChipVariant {
    /// Solid background.
    #[default]
    Filled,
    /// Border only.
    Outlined,
}

impl ChipVariant {
    /// Render the variant as its lowercase token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Outlined => "outlined",
        }
    }
}

impl FromStr for ChipVariant {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "filled" => Ok(Self::Filled),
            "outlined" => Ok(Self::Outlined),
            other => Err(UnknownToken::new("variant", other)),
        }
    }
}

impl Display for ChipVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ChipVariant> for String {
    fn from(value: ChipVariant) -> Self {
        value.as_str().to_string()
    }
}

/// Presentation size of a chip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChipSize {
    /// Regular size.
    #[default]
    Medium,
    /// Compact size.
    Small,
}

impl ChipSize {
    /// Render the size as its lowercase token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Medium => "medium",
            Self::Small => "small",
        }
    }
}

impl FromStr for ChipSize {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "medium" => Ok(Self::Medium),
            "small" => Ok(Self::Small),
            other => Err(UnknownToken::new("size", other)),
        }
    }
}

impl Display for ChipSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ChipSize> for String {
    fn from(value: ChipSize) -> Self {
        value.as_str().to_string()
    }
}

/// Raised when a string is not one of the documented tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chip {kind} '{value}'")]
pub struct UnknownToken {
    /// Token family (`variant` or `size`).
    pub kind: &'static str,
    /// Offending input.
    pub value: String,
}

impl UnknownToken {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
