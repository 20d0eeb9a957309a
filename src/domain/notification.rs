use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier carried by a card's `data-id` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(String);

impl NotificationId {
    /// Returns `None` for a missing or blank attribute value.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Unread,
    Read,
}

/// Where a card currently sits in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSlot {
    Listed(ListKind),
    /// A `.notification-card` outside both tracked lists.
    Detached,
}

impl CardSlot {
    pub fn is_listed(self) -> bool {
        matches!(self, CardSlot::Listed(_))
    }
}
