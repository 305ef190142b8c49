//! Thin `web-sys` helpers shared by the install functions.
//!
//! Every lookup returns an `Option` (or a `Vec` that may be empty) so callers
//! branch on absence explicitly. Listener registration is a plain function
//! taking a target, an event name, and a handler.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::FooterError;

/// The global `window`.
///
/// # Errors
///
/// [`FooterError::NoWindow`] when not running in a browser.
pub fn window() -> Result<Window, FooterError> {
    web_sys::window().ok_or(FooterError::NoWindow)
}

/// The window's document.
///
/// # Errors
///
/// [`FooterError::NoWindow`] or [`FooterError::NoDocument`].
pub fn document() -> Result<Document, FooterError> {
    window()?.document().ok_or(FooterError::NoDocument)
}

/// First element matching `selector`, if any.
///
/// # Errors
///
/// [`FooterError::Dom`] when the selector is syntactically invalid.
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>, FooterError> {
    Ok(document.query_selector(selector)?)
}

/// All elements matching `selector`, in document order.
///
/// # Errors
///
/// [`FooterError::Dom`] when the selector is syntactically invalid.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, FooterError> {
    let nodes = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i)
            && let Ok(el) = node.dyn_into::<Element>()
        {
            out.push(el);
        }
    }
    Ok(out)
}

/// Element with the given id as an `HtmlElement`, if it exists and is one.
pub fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    let el = document.get_element_by_id(id)?;
    el.dyn_ref::<HtmlElement>().cloned()
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
///
/// # Errors
///
/// [`FooterError::Dom`] when `addEventListener` throws.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), FooterError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` once after `delay_ms`. Not cancellable.
pub fn after<F>(delay_ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(delay_ms, f).forget();
}

/// Show a blocking message box.
pub fn alert(message: &str) {
    let shown = window().and_then(|w| w.alert_with_message(message).map_err(FooterError::from));
    if let Err(e) = shown {
        log::warn!("alert failed: {e}");
    }
}

/// Set one inline style property.
///
/// # Errors
///
/// [`FooterError::Dom`] when the browser rejects the write.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), FooterError> {
    el.style()
        .set_property(property, value)
        .map_err(|e| FooterError::Dom(format!("set {property}: {}", FooterError::from(e))))
}
