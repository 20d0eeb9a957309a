use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::app::{Control, NotificationPanelController, PanelEvent};
use crate::config::PanelConfig;
use crate::dom::{BrowserPage, CARD_CLASS, ID_ATTRIBUTE};
use crate::http::FetchTransport;
use crate::telemetry;

type BrowserController = NotificationPanelController<BrowserPage, FetchTransport>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    telemetry::init();

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let closure = Closure::once(move || {
            if let Err(err) = mount() {
                tracing::error!(error = ?err, "failed to mount notification panel");
            }
        });
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            closure.as_ref().unchecked_ref(),
        )?;
        closure.forget();
        Ok(())
    } else {
        mount()
    }
}

fn mount() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let page = BrowserPage::new(window, document);

    let origin = page.origin()?;
    let config = PanelConfig::from_meta(&origin, |name| page.meta_content(name))
        .map_err(|err| JsValue::from_str(&format!("{:#}", err)))?;

    let controls: Vec<(Control, Element)> = Control::ALL
        .into_iter()
        .flat_map(|control| {
            page.select_all(&control.selector())
                .into_iter()
                .map(move |element| (control, element))
        })
        .collect();

    let controller: Rc<BrowserController> =
        Rc::new(NotificationPanelController::new(page, FetchTransport, &config));
    for (control, element) in &controls {
        bind(&controller, *control, element)?;
    }

    tracing::info!(
        controls = controls.len(),
        csrf = config.csrf.is_some(),
        "notification panel mounted"
    );
    Ok(())
}

fn bind(
    controller: &Rc<BrowserController>,
    control: Control,
    element: &Element,
) -> Result<(), JsValue> {
    let controller = Rc::clone(controller);
    let target = element.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
        let raw_id = control_id(&target);
        let Some(event) = PanelEvent::from_click(control, raw_id.as_deref()) else {
            tracing::debug!(?control, "ignoring click on control without an id");
            return;
        };
        let controller = Rc::clone(&controller);
        wasm_bindgen_futures::spawn_local(async move {
            // Failures are logged and alerted inside the controller.
            let _ = controller.handle(event).await;
        });
    });
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// The control's own `data-id`, falling back to the enclosing card's.
fn control_id(element: &Element) -> Option<String> {
    element.get_attribute(ID_ATTRIBUTE).or_else(|| {
        element
            .closest(&format!(".{}", CARD_CLASS))
            .ok()
            .flatten()
            .and_then(|card| card.get_attribute(ID_ATTRIBUTE))
    })
}
