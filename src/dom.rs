//! Browser-only helpers for the handlers that touch the DOM directly.

use std::rc::Rc;

use leptos::logging::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    js_sys, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::config::{LandingConfig, CONFIG_ELEMENT_ID};
use crate::services::motion::{
    PointerRatio, REVEAL_MARKER, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, VISIBLE_CLASS,
};
use crate::services::scheduler::{BrowserScheduler, Millis, Scheduler};

thread_local! {
    static SCHEDULER: Rc<BrowserScheduler> = Rc::new(BrowserScheduler::new());
}

/// The page-wide timer source. One instance, so ids from any handler can be
/// cancelled from any other.
pub fn scheduler() -> Rc<dyn Scheduler> {
    SCHEDULER.with(|scheduler| scheduler.clone() as Rc<dyn Scheduler>)
}

pub fn viewport() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
    (width, height)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn pointer_ratio(ev: &MouseEvent) -> PointerRatio {
    let (width, height) = viewport();
    PointerRatio::from_client(f64::from(ev.client_x()), f64::from(ev.client_y()), width, height)
}

/// Pointer position relative to the element the listener is attached to,
/// together with that element's size.
pub fn local_pointer(ev: &MouseEvent) -> Option<(f64, f64, f64, f64)> {
    let element = ev.current_target()?.dyn_into::<Element>().ok()?;
    let rect = element.get_bounding_client_rect();
    Some((
        f64::from(ev.client_x()) - rect.left(),
        f64::from(ev.client_y()) - rect.top(),
        rect.width(),
        rect.height(),
    ))
}

/// Size of the element the listener is attached to.
pub fn current_target_size(ev: &MouseEvent) -> Option<(f64, f64)> {
    let element = ev.current_target()?.dyn_into::<Element>().ok()?;
    let rect = element.get_bounding_client_rect();
    Some((rect.width(), rect.height()))
}

pub fn is_on_screen(element: &Element) -> bool {
    element.get_bounding_client_rect().bottom() > 0.0
}

/// Smooth-scroll to the element with `id`. Missing targets are ignored.
pub fn smooth_scroll_to(id: &str) {
    let Some(target) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Config the host embedded in the page. Anything missing or invalid falls
/// back to the defaults so hydration still happens.
pub fn embedded_config() -> LandingConfig {
    let Some(json) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content())
    else {
        warn!("no embedded landing config, using defaults");
        return LandingConfig::default();
    };
    LandingConfig::from_json(&json).unwrap_or_else(|err| {
        warn!("embedded landing config rejected: {err}");
        LandingConfig::default()
    })
}

/// Run `f` once the window has loaded, immediately if it already has.
pub fn on_window_load(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let loaded = window
        .document()
        .map(|document| document.ready_state() == "complete")
        .unwrap_or(false);
    if loaded {
        f();
        return;
    }

    let callback = Closure::once_into_js(f);
    if let Err(err) = window.add_event_listener_with_callback("load", callback.unchecked_ref()) {
        warn!("could not listen for window load: {err:?}");
    }
}

/// Start the body transparent and fade it in after `delay` ms.
pub fn fade_in_body(delay: Millis) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    set_style(&body, "opacity", "0");
    set_style(&body, "transition", "opacity 0.5s ease-in-out");

    scheduler().schedule(delay, Box::new(move || set_style(&body, "opacity", "1")));
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        warn!("could not set {property}: {err:?}");
    }
}

/// Mark every `.reveal` element `visible` the first time it scrolls into
/// view.
pub fn observe_reveals() -> Option<IntersectionObserver> {
    let document = web_sys::window()?.document()?;

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(VISIBLE_CLASS);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&REVEAL_THRESHOLD.into());
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("intersection observer unavailable: {err:?}");
                return None;
            }
        };
    callback.forget();

    let nodes = document
        .query_selector_all(&format!(".{REVEAL_MARKER}"))
        .ok()?;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }
    Some(observer)
}
