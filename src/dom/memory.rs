use std::cell::RefCell;
use std::collections::HashSet;

use super::{ButtonState, Page, Region};
use crate::domain::{CardSlot, ListKind, NotificationId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: NotificationId,
    pub unread: bool,
    pub badge: bool,
    pub mark_read_control: bool,
    pub delete_control: bool,
}

impl Card {
    /// An unread card as the server renders it: badge plus both controls.
    pub fn unread(id: NotificationId) -> Self {
        Self {
            id,
            unread: true,
            badge: true,
            mark_read_control: true,
            delete_control: true,
        }
    }

    pub fn read(id: NotificationId) -> Self {
        Self {
            id,
            unread: false,
            badge: false,
            mark_read_control: false,
            delete_control: true,
        }
    }
}

#[derive(Debug, Default)]
struct PageState {
    unread: Vec<Card>,
    read: Vec<Card>,
    detached: Vec<Card>,
    hidden: HashSet<Region>,
    mark_all: Option<ButtonState>,
    alerts: Vec<String>,
}

impl PageState {
    fn list(&self, kind: ListKind) -> &Vec<Card> {
        match kind {
            ListKind::Unread => &self.unread,
            ListKind::Read => &self.read,
        }
    }

    fn list_mut(&mut self, kind: ListKind) -> &mut Vec<Card> {
        match kind {
            ListKind::Unread => &mut self.unread,
            ListKind::Read => &mut self.read,
        }
    }

    fn slots_mut(&mut self) -> [(CardSlot, &mut Vec<Card>); 3] {
        [
            (CardSlot::Listed(ListKind::Unread), &mut self.unread),
            (CardSlot::Listed(ListKind::Read), &mut self.read),
            (CardSlot::Detached, &mut self.detached),
        ]
    }

    fn take(&mut self, id: &NotificationId) -> Option<(CardSlot, Card)> {
        for (slot, cards) in self.slots_mut() {
            if let Some(index) = cards.iter().position(|card| &card.id == id) {
                return Some((slot, cards.remove(index)));
            }
        }
        None
    }

    fn find(&self, id: &NotificationId) -> Option<&Card> {
        self.unread
            .iter()
            .chain(self.read.iter())
            .chain(self.detached.iter())
            .find(|card| &card.id == id)
    }

    fn find_mut(&mut self, id: &NotificationId) -> Option<&mut Card> {
        self.unread
            .iter_mut()
            .chain(self.read.iter_mut())
            .chain(self.detached.iter_mut())
            .find(|card| &card.id == id)
    }
}

/// In-memory rendition of the notifications page.
#[derive(Debug, Default)]
pub struct MemoryPage {
    state: RefCell<PageState>,
}

impl MemoryPage {
    pub fn builder() -> MemoryPageBuilder {
        MemoryPageBuilder::default()
    }

    pub fn cards(&self, list: ListKind) -> Vec<Card> {
        self.state.borrow().list(list).clone()
    }

    pub fn detached_cards(&self) -> Vec<Card> {
        self.state.borrow().detached.clone()
    }

    pub fn card(&self, id: &str) -> Option<Card> {
        let id = NotificationId::parse(id)?;
        self.state.borrow().find(&id).cloned()
    }

    pub fn is_visible(&self, region: Region) -> bool {
        !self.state.borrow().hidden.contains(&region)
    }

    pub fn alerts(&self) -> Vec<String> {
        self.state.borrow().alerts.clone()
    }
}

impl Page for MemoryPage {
    fn locate(&self, id: &NotificationId) -> Option<CardSlot> {
        let state = self.state.borrow();
        let contains = |cards: &Vec<Card>| cards.iter().any(|card| &card.id == id);
        if contains(&state.unread) {
            Some(CardSlot::Listed(ListKind::Unread))
        } else if contains(&state.read) {
            Some(CardSlot::Listed(ListKind::Read))
        } else if contains(&state.detached) {
            Some(CardSlot::Detached)
        } else {
            None
        }
    }

    fn card_ids(&self, list: ListKind) -> Vec<NotificationId> {
        self.state
            .borrow()
            .list(list)
            .iter()
            .map(|card| card.id.clone())
            .collect()
    }

    fn unread_card_ids(&self) -> Vec<NotificationId> {
        let state = self.state.borrow();
        state
            .unread
            .iter()
            .chain(state.read.iter())
            .chain(state.detached.iter())
            .filter(|card| card.unread)
            .map(|card| card.id.clone())
            .collect()
    }

    fn strip_unread(&self, id: &NotificationId) {
        if let Some(card) = self.state.borrow_mut().find_mut(id) {
            card.unread = false;
            card.badge = false;
            card.mark_read_control = false;
        }
    }

    fn prepend_card(&self, id: &NotificationId, list: ListKind) {
        let mut state = self.state.borrow_mut();
        if let Some((_, card)) = state.take(id) {
            state.list_mut(list).insert(0, card);
        }
    }

    fn remove_card(&self, id: &NotificationId) {
        self.state.borrow_mut().take(id);
    }

    fn set_visible(&self, region: Region, visible: bool) {
        let mut state = self.state.borrow_mut();
        if visible {
            state.hidden.remove(&region);
        } else {
            state.hidden.insert(region);
        }
    }

    fn mark_all_button(&self) -> Option<ButtonState> {
        self.state.borrow().mark_all.clone()
    }

    fn set_mark_all_enabled(&self, enabled: bool) {
        if let Some(button) = self.state.borrow_mut().mark_all.as_mut() {
            button.enabled = enabled;
        }
    }

    fn set_mark_all_label(&self, label: &str) {
        if let Some(button) = self.state.borrow_mut().mark_all.as_mut() {
            button.label = label.to_string();
        }
    }

    fn alert(&self, message: &str) {
        self.state.borrow_mut().alerts.push(message.to_string());
    }
}

#[derive(Debug, Default)]
pub struct MemoryPageBuilder {
    state: PageState,
}

impl MemoryPageBuilder {
    pub fn unread(mut self, id: &str) -> Self {
        if let Some(id) = parse_or_warn(id) {
            self.state.unread.push(Card::unread(id));
        }
        self
    }

    pub fn read(mut self, id: &str) -> Self {
        if let Some(id) = parse_or_warn(id) {
            self.state.read.push(Card::read(id));
        }
        self
    }

    /// A card rendered outside both lists.
    pub fn detached(mut self, id: &str) -> Self {
        if let Some(id) = parse_or_warn(id) {
            self.state.detached.push(Card::unread(id));
        }
        self
    }

    pub fn mark_all_button(mut self, label: &str) -> Self {
        self.state.mark_all = Some(ButtonState {
            enabled: true,
            label: label.to_string(),
        });
        self
    }

    pub fn hidden(mut self, region: Region) -> Self {
        self.state.hidden.insert(region);
        self
    }

    pub fn build(self) -> MemoryPage {
        MemoryPage {
            state: RefCell::new(self.state),
        }
    }
}

fn parse_or_warn(raw: &str) -> Option<NotificationId> {
    let id = NotificationId::parse(raw);
    if id.is_none() {
        tracing::warn!(raw, "skipping card without an id");
    }
    id
}
