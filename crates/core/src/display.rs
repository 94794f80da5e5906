//! Which of the two views is shown.

use serde::{Deserialize, Serialize};

/// Catalog or cart view. Flipped only by explicit user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    #[default]
    Catalog,
    Cart,
}

impl DisplayMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Catalog => Self::Cart,
            Self::Cart => Self::Catalog,
        }
    }

    pub const fn toggle(&mut self) {
        *self = self.toggled();
    }

    #[must_use]
    pub const fn is_catalog(&self) -> bool {
        matches!(self, Self::Catalog)
    }

    #[must_use]
    pub const fn is_cart(&self) -> bool {
        matches!(self, Self::Cart)
    }
}
