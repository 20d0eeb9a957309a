use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, NodeList, Window};

use super::{
    ButtonState, Page, Region, BADGE_CLASS, CARD_CLASS, ID_ATTRIBUTE, MARK_ALL_BUTTON_ID,
    MARK_READ_BUTTON_CLASS, READ_CLASS, UNREAD_CLASS,
};
use crate::domain::{CardSlot, ListKind, NotificationId};

/// The live document. JS failures are logged and otherwise ignored so a
/// half-rendered page never panics the handler.
#[derive(Clone, Debug)]
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn origin(&self) -> Result<String, JsValue> {
        self.window.location().origin()
    }

    pub fn meta_content(&self, name: &str) -> Option<String> {
        let selector = format!("meta[name=\"{}\"]", name);
        self.document
            .query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"))
    }

    /// Every element in the document matching `selector`.
    pub fn select_all(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(nodes) => elements(&nodes),
            Err(err) => {
                warn_js("query", err);
                Vec::new()
            }
        }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn list_element(&self, kind: ListKind) -> Option<Element> {
        self.element(Region::list(kind).dom_id())
    }

    fn find_card(&self, id: &NotificationId) -> Option<Element> {
        self.select_all(&format!(".{}", CARD_CLASS))
            .into_iter()
            .find(|card| card_id(card).as_ref() == Some(id))
    }
}

impl Page for BrowserPage {
    fn locate(&self, id: &NotificationId) -> Option<CardSlot> {
        let card = self.find_card(id)?;
        for kind in [ListKind::Unread, ListKind::Read] {
            if let Some(list) = self.list_element(kind) {
                if list.contains(Some(&*card)) {
                    return Some(CardSlot::Listed(kind));
                }
            }
        }
        Some(CardSlot::Detached)
    }

    fn card_ids(&self, list: ListKind) -> Vec<NotificationId> {
        let Some(list) = self.list_element(list) else {
            return Vec::new();
        };
        match list.query_selector_all(&format!(".{}", CARD_CLASS)) {
            Ok(nodes) => elements(&nodes).iter().filter_map(card_id).collect(),
            Err(err) => {
                warn_js("query", err);
                Vec::new()
            }
        }
    }

    fn unread_card_ids(&self) -> Vec<NotificationId> {
        self.select_all(&format!(".{}.{}", CARD_CLASS, UNREAD_CLASS))
            .iter()
            .filter_map(card_id)
            .collect()
    }

    fn strip_unread(&self, id: &NotificationId) {
        let Some(card) = self.find_card(id) else {
            return;
        };
        let classes = card.class_list();
        if let Err(err) = classes.remove_1(UNREAD_CLASS) {
            warn_js("remove class", err);
        }
        if let Err(err) = classes.add_1(READ_CLASS) {
            warn_js("add class", err);
        }
        for class in [BADGE_CLASS, MARK_READ_BUTTON_CLASS] {
            if let Ok(Some(child)) = card.query_selector(&format!(".{}", class)) {
                child.remove();
            }
        }
    }

    fn prepend_card(&self, id: &NotificationId, list: ListKind) {
        let (Some(card), Some(list)) = (self.find_card(id), self.list_element(list)) else {
            return;
        };
        if let Err(err) = list.prepend_with_node_1(&card) {
            warn_js("prepend", err);
        }
    }

    fn remove_card(&self, id: &NotificationId) {
        if let Some(card) = self.find_card(id) {
            card.remove();
        }
    }

    fn set_visible(&self, region: Region, visible: bool) {
        let Some(element) = self.element(region.dom_id()) else {
            return;
        };
        let result = if visible {
            element.remove_attribute("hidden")
        } else {
            element.set_attribute("hidden", "")
        };
        if let Err(err) = result {
            warn_js("toggle hidden", err);
        }
    }

    fn mark_all_button(&self) -> Option<ButtonState> {
        let button = self.element(MARK_ALL_BUTTON_ID)?;
        Some(ButtonState {
            enabled: !button.has_attribute("disabled"),
            label: button.text_content().unwrap_or_default().trim().to_string(),
        })
    }

    fn set_mark_all_enabled(&self, enabled: bool) {
        let Some(button) = self.element(MARK_ALL_BUTTON_ID) else {
            return;
        };
        let result = if enabled {
            button.remove_attribute("disabled")
        } else {
            button.set_attribute("disabled", "true")
        };
        if let Err(err) = result {
            warn_js("toggle disabled", err);
        }
    }

    fn set_mark_all_label(&self, label: &str) {
        if let Some(button) = self.element(MARK_ALL_BUTTON_ID) {
            button.set_text_content(Some(label));
        }
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            warn_js("alert", err);
        }
    }
}

fn elements(nodes: &NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn card_id(element: &Element) -> Option<NotificationId> {
    element
        .get_attribute(ID_ATTRIBUTE)
        .and_then(|raw| NotificationId::parse(&raw))
}

fn warn_js(action: &str, err: JsValue) {
    tracing::warn!(action, error = ?err, "DOM operation failed");
}
