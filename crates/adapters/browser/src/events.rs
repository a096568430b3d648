//! Delegated DOM listeners.
//!
//! `click` and `submit` are caught once on the application root, which
//! outlives every render; `popstate` is caught on the window. Each event is
//! reduced to a [`UiEvent`] and handed to the navigation controller.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, Event, EventTarget, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
    MouseEvent, Window,
};

use techblog_app::forms::FormFields;
use techblog_app::navigation::{self, ClickTarget, LINK_ATTRIBUTE, RETRY_ATTRIBUTE, UiEvent};

use crate::{AppRouter, StartError};

/// Install the root and window listeners. They live as long as the page.
pub fn install(window: &Window, root: &Element, router: &Rc<AppRouter>) -> Result<(), StartError> {
    delegate(root, "click", router, read_click)?;
    delegate(root, "submit", router, read_submit)?;

    let router = Rc::clone(router);
    let on_popstate = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        let router = Rc::clone(&router);
        spawn_local(async move {
            router.on_popstate().await;
        });
    });
    window.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref())?;
    on_popstate.forget();
    Ok(())
}

fn delegate(
    target: &EventTarget,
    kind: &str,
    router: &Rc<AppRouter>,
    read: fn(&Event) -> Option<UiEvent>,
) -> Result<(), StartError> {
    let router = Rc::clone(router);
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(intent) = read(&event).as_ref().and_then(navigation::interpret) else {
            return;
        };
        event.prevent_default();
        let router = Rc::clone(&router);
        spawn_local(async move {
            router.perform(intent).await;
        });
    });
    target.add_event_listener_with_callback(kind, handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

fn read_click(event: &Event) -> Option<UiEvent> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    let origin = event.target()?.dyn_into::<Element>().ok()?;
    let modified = mouse.button() != 0
        || mouse.ctrl_key()
        || mouse.meta_key()
        || mouse.shift_key()
        || mouse.alt_key();

    let target = if let Some(link) = closest(&origin, LINK_ATTRIBUTE) {
        ClickTarget::Link {
            href: link.get_attribute("href").unwrap_or_default(),
            target: link.get_attribute("target"),
        }
    } else if closest(&origin, RETRY_ATTRIBUTE).is_some() {
        ClickTarget::Retry
    } else {
        ClickTarget::Other
    };
    Some(UiEvent::Click { target, modified })
}

fn closest(element: &Element, attribute: &str) -> Option<Element> {
    element.closest(&format!("[{attribute}]")).ok().flatten()
}

fn read_submit(event: &Event) -> Option<UiEvent> {
    let form = event.target()?.dyn_into::<HtmlFormElement>().ok()?;
    let controls = form.elements();
    let mut fields = FormFields::new();
    for index in 0..controls.length() {
        let Some(control) = controls.item(index) else {
            continue;
        };
        if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
            record(&mut fields, input.name(), input.id(), input.value());
        } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
            record(&mut fields, area.name(), area.id(), area.value());
        }
    }
    Some(UiEvent::Submit {
        form_id: form.id(),
        fields,
    })
}

/// Controls are keyed by `name`, falling back to `id`; anonymous ones are
/// skipped.
fn record(fields: &mut FormFields, name: String, id: String, value: String) {
    let key = if name.is_empty() { id } else { name };
    if !key.is_empty() {
        fields.insert(key, value);
    }
}
