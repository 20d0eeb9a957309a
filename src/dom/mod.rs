//! The page contract the panel controller works against.
//!
//! `MemoryPage` models the contract in plain Rust; `BrowserPage` drives the
//! live document through `web-sys`.

mod memory;
#[cfg(target_arch = "wasm32")]
mod browser;

pub use memory::{Card, MemoryPage, MemoryPageBuilder};
#[cfg(target_arch = "wasm32")]
pub use browser::BrowserPage;

use crate::domain::{CardSlot, ListKind, NotificationId};

pub const CARD_CLASS: &str = "notification-card";
pub const UNREAD_CLASS: &str = "unread";
pub const READ_CLASS: &str = "read";
pub const BADGE_CLASS: &str = "notification-badge";
pub const MARK_READ_BUTTON_CLASS: &str = "mark-read-btn";
pub const DELETE_BUTTON_CLASS: &str = "delete-btn";
pub const MARK_ALL_BUTTON_ID: &str = "mark-all-read-btn";
pub const ID_ATTRIBUTE: &str = "data-id";

/// Elements whose visibility is derived from card counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    UnreadList,
    ReadList,
    EmptyAll,
    NoNew,
    NoRead,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::UnreadList,
        Region::ReadList,
        Region::EmptyAll,
        Region::NoNew,
        Region::NoRead,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            Region::UnreadList => "unread-list",
            Region::ReadList => "read-list",
            Region::EmptyAll => "empty-all",
            Region::NoNew => "no-new",
            Region::NoRead => "no-read",
        }
    }

    pub fn list(kind: ListKind) -> Region {
        match kind {
            ListKind::Unread => Region::UnreadList,
            ListKind::Read => Region::ReadList,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonState {
    pub enabled: bool,
    pub label: String,
}

/// DOM operations used by the controller. Methods take `&self` because the
/// document is shared with event handlers; implementations never hold a
/// borrow past a single call.
pub trait Page {
    fn locate(&self, id: &NotificationId) -> Option<CardSlot>;

    /// Card ids in display order.
    fn card_ids(&self, list: ListKind) -> Vec<NotificationId>;

    fn card_count(&self, list: ListKind) -> usize {
        self.card_ids(list).len()
    }

    /// Ids of every card still styled unread, wherever it sits on the page.
    fn unread_card_ids(&self) -> Vec<NotificationId>;

    /// Swaps the unread class for the read class and drops the badge and the
    /// mark-read control.
    fn strip_unread(&self, id: &NotificationId);

    fn prepend_card(&self, id: &NotificationId, list: ListKind);

    fn remove_card(&self, id: &NotificationId);

    fn set_visible(&self, region: Region, visible: bool);

    /// `None` when the page has no mark-all button.
    fn mark_all_button(&self) -> Option<ButtonState>;

    fn set_mark_all_enabled(&self, enabled: bool);

    fn set_mark_all_label(&self, label: &str);

    /// Blocking user-visible message.
    fn alert(&self, message: &str);
}
