//! Browser DOM glue for page controllers (hydrate only).
//!
//! SYSTEM CONTEXT
//! ==============
//! Page controllers paint HTML strings produced by the renderers and apply
//! `DomPatch` lists after toggles. Everything that touches `web_sys` lives
//! here so the renderers stay pure.
//!
//! ERROR HANDLING
//! ==============
//! A missing element or a rejected DOM call is a no-op. Pages ship their own
//! markup, so a missing id means the page does not use that feature.

use std::cell::Cell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, HtmlElement};

use crate::components::patch::DomPatch;
use crate::util::html::attr_selector;

const ACTIVE_CLASS: &str = "active";
const FORM_FEEDBACK_ID: &str = "form-feedback";
const FORM_FEEDBACK_CLEAR_MS: u32 = 5_000;
const TOAST_MS: u32 = 3_000;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Replace the children of `#id` with `html`. Returns the container so the
/// caller can localize the new fragment.
pub fn set_html(id: &str, html: &str) -> Option<Element> {
    let element = by_id(id)?;
    element.set_inner_html(html);
    Some(element)
}

pub fn set_text(id: &str, text: &str) {
    if let Some(element) = by_id(id) {
        element.set_text_content(Some(text));
    }
}

/// Show or hide `#id` through the `hidden` attribute.
pub fn set_visible(id: &str, visible: bool) {
    let Some(element) = by_id(id) else {
        return;
    };
    if visible {
        let _ = element.remove_attribute("hidden");
    } else {
        let _ = element.set_attribute("hidden", "");
    }
}

pub fn apply_patches(patches: &[DomPatch]) {
    let Some(document) = document() else {
        return;
    };
    for patch in patches {
        let Ok(nodes) = document.query_selector_all(patch.selector()) else {
            log::warn!("bad patch selector {}", patch.selector());
            continue;
        };
        for index in 0..nodes.length() {
            let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            match patch {
                DomPatch::Text { text, .. } => element.set_text_content(Some(text)),
                DomPatch::Class { class, enabled, .. } => {
                    let _ = element.class_list().toggle_with_force(class, *enabled);
                }
            }
        }
    }
}

/// Value of `name` in the page's query string.
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

/// Delegate clicks on elements matching `selector` (or their descendants) to
/// `handler`. The listener lives as long as the page.
pub fn on_click(selector: &'static str, handler: impl Fn(Element) + 'static) {
    let Some(document) = document() else {
        return;
    };
    let listener = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if let Ok(Some(matched)) = target.closest(selector) {
            event.prevent_default();
            handler(matched);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    if document.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref()).is_err() {
        log::warn!("could not listen for clicks on {selector}");
    }
    listener.forget();
}

/// Listen for `event_type` on `#id`.
pub fn on_event(id: &str, event_type: &str, handler: impl Fn(web_sys::Event) + 'static) {
    let Some(element) = by_id(id) else {
        return;
    };
    let listener = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if element.add_event_listener_with_callback(event_type, listener.as_ref().unchecked_ref()).is_err() {
        log::warn!("could not listen for {event_type} on #{id}");
    }
    listener.forget();
}

/// Mark the filter button for `value` active and clear the others.
pub fn mark_active_filter(value: &str) {
    let Some(document) = document() else {
        return;
    };
    if let Ok(buttons) = document.query_selector_all(".filter-btn") {
        for index in 0..buttons.length() {
            if let Some(button) = buttons.get(index).and_then(|node| node.dyn_into::<Element>().ok()) {
                let _ = button.class_list().remove_1(ACTIVE_CLASS);
            }
        }
    }
    let selector = format!(".filter-btn{}", attr_selector("data-filter", value));
    if let Ok(Some(button)) = document.query_selector(&selector) {
        let _ = button.class_list().add_1(ACTIVE_CLASS);
    }
}

/// Footer year.
pub fn fill_year(year: i32) {
    set_text("year", &year.to_string());
}

thread_local! {
    static FEEDBACK_GENERATION: Cell<u32> = const { Cell::new(0) };
}

/// Show a message under the contact form and clear it after five seconds.
/// A newer message is not cleared by an older message's timer.
pub fn show_form_feedback(message: &str, kind: &str) {
    let Some(feedback) = by_id(FORM_FEEDBACK_ID) else {
        return;
    };
    feedback.set_text_content(Some(message));
    feedback.set_class_name(&format!("form-feedback {kind}"));
    let generation = FEEDBACK_GENERATION.with(|g| {
        let next = g.get().wrapping_add(1);
        g.set(next);
        next
    });
    Timeout::new(FORM_FEEDBACK_CLEAR_MS, move || {
        if FEEDBACK_GENERATION.with(Cell::get) == generation {
            feedback.set_text_content(None);
            feedback.set_class_name("form-feedback");
        }
    })
    .forget();
}

/// Floating confirmation appended to `<body>`, removed after three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = document() else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_class_name("language-change-message");
    toast.set_text_content(Some(message));
    if body.append_child(&toast).is_err() {
        return;
    }
    Timeout::new(TOAST_MS, move || toast.remove()).forget();
}

/// Wire `.accordion-header` clicks inside `#id`: opening one item closes its
/// siblings.
pub fn init_accordion(id: &str) {
    let Some(accordion) = by_id(id) else {
        log::warn!("accordion #{id} not found");
        return;
    };
    let Ok(headers) = accordion.query_selector_all(".accordion-header") else {
        return;
    };
    for index in 0..headers.length() {
        let Some(header) = headers.get(index).and_then(|node| node.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let target = header.clone();
        let listener = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            toggle_accordion_item(&target);
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = header.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
        listener.forget();
    }
}

fn toggle_accordion_item(header: &Element) {
    let Ok(Some(item)) = header.closest(".accordion-item") else {
        return;
    };
    let open = item.class_list().contains(ACTIVE_CLASS);
    if !open {
        if let Ok(Some(parent)) = item.closest(".accordion") {
            if let Ok(siblings) = parent.query_selector_all(".accordion-item") {
                for index in 0..siblings.length() {
                    if let Some(sibling) = siblings.get(index).and_then(|node| node.dyn_into::<Element>().ok()) {
                        set_accordion_item(&sibling, false);
                    }
                }
            }
        }
    }
    set_accordion_item(&item, !open);
}

fn set_accordion_item(item: &Element, open: bool) {
    let _ = item.class_list().toggle_with_force(ACTIVE_CLASS, open);
    if let Ok(Some(content)) = item.query_selector(".accordion-content") {
        let _ = content.class_list().toggle_with_force("open", open);
    }
    if let Ok(Some(toggle)) = item.query_selector(".accordion-toggle") {
        toggle.set_text_content(Some(if open { "−" } else { "+" }));
    }
    if let Ok(Some(header)) = item.query_selector(".accordion-header") {
        let _ = header.set_attribute("aria-expanded", if open { "true" } else { "false" });
    }
}
