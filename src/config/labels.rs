/// User-visible text written by the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelLabels {
    pub mark_all: String,
    pub no_unread: String,
    pub marked_read: String,
    pub mark_read_failed: String,
    pub mark_all_failed: String,
    pub delete_failed: String,
}

impl Default for PanelLabels {
    fn default() -> Self {
        Self {
            mark_all: "Mark all as read".to_string(),
            no_unread: "No unread".to_string(),
            marked_read: "Marked read".to_string(),
            mark_read_failed: "Could not mark notification as read. Please try again."
                .to_string(),
            mark_all_failed: "Could not mark all notifications as read. Please try again."
                .to_string(),
            delete_failed: "Could not delete notification. Please try again.".to_string(),
        }
    }
}

impl PanelLabels {
    /// Label shown on the mark-all button once the server confirms.
    pub fn marked(&self, count: Option<u64>) -> String {
        match count {
            Some(n) if n > 0 => format!("Marked {} read", n),
            _ => self.marked_read.clone(),
        }
    }

    pub fn mark_all_button(&self, unread: usize) -> &str {
        if unread > 0 {
            &self.mark_all
        } else {
            &self.no_unread
        }
    }
}
