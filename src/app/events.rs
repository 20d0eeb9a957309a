use crate::dom::{DELETE_BUTTON_CLASS, MARK_ALL_BUTTON_ID, MARK_READ_BUTTON_CLASS};
use crate::domain::NotificationId;

/// Clickable controls the panel binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    MarkRead,
    MarkAll,
    Delete,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::MarkRead, Control::MarkAll, Control::Delete];

    pub fn selector(self) -> String {
        match self {
            Control::MarkRead => format!(".{}", MARK_READ_BUTTON_CLASS),
            Control::MarkAll => format!("#{}", MARK_ALL_BUTTON_ID),
            Control::Delete => format!(".{}", DELETE_BUTTON_CLASS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    MarkRead(NotificationId),
    MarkAllRead,
    Delete(NotificationId),
}

impl PanelEvent {
    /// Event for a click on `control`. Per-card controls without a usable id
    /// produce nothing.
    pub fn from_click(control: Control, raw_id: Option<&str>) -> Option<Self> {
        match control {
            Control::MarkAll => Some(PanelEvent::MarkAllRead),
            Control::MarkRead => raw_id
                .and_then(NotificationId::parse)
                .map(PanelEvent::MarkRead),
            Control::Delete => raw_id.and_then(NotificationId::parse).map(PanelEvent::Delete),
        }
    }
}
