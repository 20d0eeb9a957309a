use std::cell::RefCell;
use std::collections::HashSet;

use crate::app::events::PanelEvent;
use crate::app::states::{EmptyStates, PanelCounts};
use crate::config::{PanelConfig, PanelLabels};
use crate::dom::{Page, Region};
use crate::domain::{CardSlot, ListKind, NotificationId};
use crate::http::{ApiError, NotificationApi, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The server confirmed and the page was updated.
    Applied,
    /// An identical request was already outstanding.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Pending {
    MarkRead(NotificationId),
    Delete(NotificationId),
    MarkAll,
}

/// Keeps the inbox page in step with server-confirmed mutations.
///
/// The page is only touched after the server answers. Failures are logged,
/// alerted, and handed back to the caller.
pub struct NotificationPanelController<P, T> {
    page: P,
    api: NotificationApi<T>,
    labels: PanelLabels,
    pending: RefCell<HashSet<Pending>>,
}

impl<P: Page, T: Transport> NotificationPanelController<P, T> {
    pub fn new(page: P, transport: T, config: &PanelConfig) -> Self {
        Self {
            page,
            api: NotificationApi::new(transport, config),
            labels: config.labels.clone(),
            pending: RefCell::new(HashSet::new()),
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub async fn handle(&self, event: PanelEvent) -> Result<Completion, ApiError> {
        match event {
            PanelEvent::MarkRead(id) => self.mark_one_read(&id).await,
            PanelEvent::MarkAllRead => self.mark_all_read().await,
            PanelEvent::Delete(id) => self.delete_one(&id).await,
        }
    }

    pub async fn mark_one_read(&self, id: &NotificationId) -> Result<Completion, ApiError> {
        let Some(_guard) = self.begin(Pending::MarkRead(id.clone())) else {
            tracing::debug!(notification_id = %id, "mark-read already in flight");
            return Ok(Completion::Ignored);
        };

        if let Err(err) = self.api.mark_read(id).await {
            tracing::error!(error = %err, notification_id = %id, "failed to mark notification read");
            self.page.alert(&self.labels.mark_read_failed);
            return Err(err);
        }

        match self.page.locate(id) {
            Some(slot) => {
                self.page.strip_unread(id);
                if slot == CardSlot::Listed(ListKind::Unread) {
                    self.page.prepend_card(id, ListKind::Read);
                }
            }
            None => tracing::debug!(notification_id = %id, "marked card is no longer on the page"),
        }

        self.sync_states();
        Ok(Completion::Applied)
    }

    pub async fn mark_all_read(&self) -> Result<Completion, ApiError> {
        let button_disabled = self
            .page
            .mark_all_button()
            .is_some_and(|button| !button.enabled);
        if button_disabled {
            tracing::debug!("mark-all button is disabled");
            return Ok(Completion::Ignored);
        }
        let Some(guard) = self.begin(Pending::MarkAll) else {
            tracing::debug!("mark-all already in flight");
            return Ok(Completion::Ignored);
        };
        self.page.set_mark_all_enabled(false);

        let response = match self.api.mark_all_read().await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(error = %err, "failed to mark all notifications read");
                drop(guard);
                self.page.alert(&self.labels.mark_all_failed);
                self.page.set_mark_all_enabled(true);
                return Err(err);
            }
        };
        drop(guard);

        // Walk backwards so the block keeps its order on top of the read list.
        let unread = self.page.card_ids(ListKind::Unread);
        for id in unread.iter().rev() {
            self.page.strip_unread(id);
            self.page.prepend_card(id, ListKind::Read);
        }
        // Unread cards outside the lists are restyled in place.
        let stray = self.page.unread_card_ids();
        for id in &stray {
            self.page.strip_unread(id);
        }

        let restyled = unread.len() + stray.len();
        if response.marked.is_some_and(|marked| marked != restyled as u64) {
            tracing::warn!(
                marked = ?response.marked,
                restyled,
                "server count differs from unread cards on the page"
            );
        }
        tracing::info!(
            moved = unread.len(),
            in_place = stray.len(),
            "marked all notifications read"
        );

        self.sync_states();
        // Written after the resync so the confirmation replaces "No unread".
        self.page.set_mark_all_label(&self.labels.marked(response.marked));
        Ok(Completion::Applied)
    }

    pub async fn delete_one(&self, id: &NotificationId) -> Result<Completion, ApiError> {
        let Some(_guard) = self.begin(Pending::Delete(id.clone())) else {
            tracing::debug!(notification_id = %id, "delete already in flight");
            return Ok(Completion::Ignored);
        };

        if let Err(err) = self.api.delete(id).await {
            tracing::error!(error = %err, notification_id = %id, "failed to delete notification");
            self.page.alert(&self.labels.delete_failed);
            return Err(err);
        }

        let slot = self.page.locate(id);
        self.page.remove_card(id);
        if slot.is_some_and(CardSlot::is_listed) {
            self.sync_states();
        }
        Ok(Completion::Applied)
    }

    /// Recomputes region visibility and the mark-all button from card counts.
    pub fn sync_states(&self) -> PanelCounts {
        let counts = PanelCounts {
            unread: self.page.card_count(ListKind::Unread),
            read: self.page.card_count(ListKind::Read),
        };
        let states = EmptyStates::from_counts(counts);
        for region in Region::ALL {
            self.page.set_visible(region, states.is_visible(region));
        }

        if self.page.mark_all_button().is_some() {
            let busy = self.pending.borrow().contains(&Pending::MarkAll);
            self.page.set_mark_all_enabled(counts.unread > 0 && !busy);
            self.page.set_mark_all_label(self.labels.mark_all_button(counts.unread));
        }

        tracing::debug!(unread = counts.unread, read = counts.read, "panel states synced");
        counts
    }

    fn begin(&self, action: Pending) -> Option<PendingGuard<'_>> {
        if !self.pending.borrow_mut().insert(action.clone()) {
            return None;
        }
        Some(PendingGuard {
            pending: &self.pending,
            action,
        })
    }
}

struct PendingGuard<'a> {
    pending: &'a RefCell<HashSet<Pending>>,
    action: Pending,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.pending.borrow_mut().remove(&self.action);
    }
}
