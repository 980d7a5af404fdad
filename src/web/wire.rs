//! Event wiring between the browser and [`Site`].
//!
//! DESIGN
//! ======
//! Every listener translates its DOM event into a [`SiteEvent`], dispatches
//! it, and carries out the returned [`Action`]s against the raw event and
//! the browser APIs the registry does not model (Bootstrap, scrolling,
//! intersection observers, service workers). Listeners live as long as the
//! page, so their closures are leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, ErrorEvent, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, ScrollBehavior, ScrollToOptions, ServiceWorkerRegistration, Window,
};

use super::{BrowserScheduler, LocalStorage, WebDom, describe};
use crate::config::SiteConfig;
use crate::dom::Dom;
use crate::effects::{ANCHOR_SELECTOR, BACK_TO_TOP_ID, OBSERVERS, ObserverSpec, Watch};
use crate::error::SiteError;
use crate::forms::{FIELD_SELECTOR, MEMBERSHIP_FORM_ID, NEWSLETTER_FORM_SELECTOR};
use crate::input::{KeyPress, Modifiers};
use crate::nav::OFFCANVAS_ID;
use crate::panels::calendar::DAY_CELL_SELECTOR;
use crate::panels::filters::CONTROL_SELECTOR;
use crate::panels::map::ZONE_SELECTOR;
use crate::schedule::Scheduler;
use crate::site::{Action, Site, SiteEvent};
use crate::theme::TOGGLE_SELECTOR;

struct Host {
    window: Window,
    site: Site<WebDom>,
    observers: RefCell<Vec<(Watch, IntersectionObserver)>>,
}

fn dom_error(op: &'static str, err: &JsValue) -> SiteError {
    SiteError::Dom { op, detail: describe(err) }
}

/// Mount now if the document is parsed, otherwise on `DOMContentLoaded`.
pub(super) fn boot() -> Result<(), SiteError> {
    let window = web_sys::window().ok_or(SiteError::Dom { op: "window", detail: "no global window".to_owned() })?;
    let document =
        window.document().ok_or(SiteError::Dom { op: "document", detail: "window has no document".to_owned() })?;

    if document.ready_state() != "loading" {
        return mount(window, document);
    }

    let ready_window = window.clone();
    let ready_document = document.clone();
    let on_ready = Closure::once_into_js(move || {
        if let Err(e) = mount(ready_window, ready_document) {
            log::error!("site failed to mount: {e}");
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .map_err(|e| dom_error("addEventListener", &e))
}

fn mount(window: Window, document: Document) -> Result<(), SiteError> {
    let dom = Rc::new(WebDom::new(window.clone(), document.clone()));
    let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler::new(window.clone()));
    let store = Box::new(LocalStorage::new(window.clone()));
    let config = SiteConfig::from_document(&*dom);

    let site = Site::new(Rc::clone(&dom), scheduler, store, config);
    site.init(today(), js_sys::Math::random);

    let host = Rc::new(Host { window, site, observers: RefCell::new(Vec::new()) });
    wire_window(&host)?;
    wire_document(&host, &document)?;
    wire_elements(&host, &dom)?;
    for spec in &OBSERVERS {
        observe(&host, &dom, spec)?;
    }
    Ok(())
}

fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    let year = i32::try_from(now.get_full_year()).unwrap_or(1970);
    NaiveDate::from_ymd_opt(year, now.get_month() + 1, now.get_date()).unwrap_or_default()
}

// =============================================================================
// LISTENERS
// =============================================================================

fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) -> Result<(), SiteError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|e| dom_error("addEventListener", &e))?;
    closure.forget();
    Ok(())
}

/// Listen on `el`, dispatching the event built from the element.
fn on_element(
    host: &Rc<Host>,
    el: &Element,
    kind: &str,
    make: impl Fn(Element) -> SiteEvent<Element> + 'static,
) -> Result<(), SiteError> {
    let host = Rc::clone(host);
    let owner = el.clone();
    listen(el, kind, move |event| host.run(&event, make(owner.clone())))
}

fn target_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_ref::<Element>().cloned())
}

fn key_press(event: &KeyboardEvent) -> KeyPress {
    KeyPress::new(
        event.key(),
        Modifiers { shift: event.shift_key(), ctrl: event.ctrl_key(), alt: event.alt_key(), meta: event.meta_key() },
    )
}

fn wire_window(host: &Rc<Host>) -> Result<(), SiteError> {
    let window: &EventTarget = &host.window;

    let h = Rc::clone(host);
    listen(window, "scroll", move |event| h.run(&event, SiteEvent::Scrolled))?;
    let h = Rc::clone(host);
    listen(window, "resize", move |event| h.run(&event, SiteEvent::Resized))?;
    if let Some(actions) = host.site.catch_up_load() {
        host.apply(None, actions);
    } else {
        let h = Rc::clone(host);
        listen(window, "load", move |event| h.run(&event, SiteEvent::Loaded))?;
    }

    listen(window, "error", |event| {
        if let Some(error) = event.dyn_ref::<ErrorEvent>() {
            log::error!("script error: {} ({}:{})", error.message(), error.filename(), error.lineno());
        }
    })
}

fn wire_document(host: &Rc<Host>, document: &Document) -> Result<(), SiteError> {
    let h = Rc::clone(host);
    listen(document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            h.run(&event, SiteEvent::KeyDown(key_press(key)));
        }
    })?;

    let h = Rc::clone(host);
    listen(document, "click", move |event| {
        if let Some(target) = target_element(&event) {
            h.run(&event, SiteEvent::DocumentClicked(target));
        }
    })
}

fn wire_elements(host: &Rc<Host>, dom: &WebDom) -> Result<(), SiteError> {
    for toggle in dom.query_all(TOGGLE_SELECTOR) {
        on_element(host, &toggle, "click", |_| SiteEvent::ThemeToggleClicked)?;
    }

    for zone in dom.query_all(ZONE_SELECTOR) {
        on_element(host, &zone, "click", SiteEvent::ZoneClicked)?;
        on_element(host, &zone, "mouseenter", |zone| SiteEvent::ZoneHover { zone, entered: true })?;
        on_element(host, &zone, "mouseleave", |zone| SiteEvent::ZoneHover { zone, entered: false })?;
        let h = Rc::clone(host);
        let owner = zone.clone();
        listen(&zone, "keypress", move |event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                h.run(&event, SiteEvent::ZoneKeyDown { zone: owner.clone(), key: key_press(key) });
            }
        })?;
    }

    for control in dom.query_all(CONTROL_SELECTOR) {
        on_element(host, &control, "click", SiteEvent::FilterClicked)?;
    }
    for cell in dom.query_all(DAY_CELL_SELECTOR) {
        on_element(host, &cell, "click", SiteEvent::CalendarDayClicked)?;
    }

    if let Some(form) = dom.by_id(MEMBERSHIP_FORM_ID) {
        on_element(host, &form, "submit", SiteEvent::MembershipSubmitted)?;
        for field in dom.query_all(FIELD_SELECTOR) {
            on_element(host, &field, "blur", SiteEvent::FieldBlurred)?;
        }
    }
    for form in dom.query_all(NEWSLETTER_FORM_SELECTOR) {
        on_element(host, &form, "submit", SiteEvent::NewsletterSubmitted)?;
    }

    if let Some(panel) = dom.by_id(OFFCANVAS_ID) {
        let h = Rc::clone(host);
        listen(&panel, "click", move |event| {
            if let Some(target) = target_element(&event) {
                h.run(&event, SiteEvent::OffcanvasClicked(target));
            }
        })?;
    }
    for link in dom.query_all(ANCHOR_SELECTOR) {
        on_element(host, &link, "click", SiteEvent::AnchorClicked)?;
    }
    if let Some(button) = dom.by_id(BACK_TO_TOP_ID) {
        on_element(host, &button, "click", |_| SiteEvent::BackToTopClicked)?;
    }
    Ok(())
}

// =============================================================================
// OBSERVERS
// =============================================================================

fn observe(host: &Rc<Host>, dom: &WebDom, spec: &ObserverSpec) -> Result<(), SiteError> {
    let targets = dom.query_all(spec.selector);
    if targets.is_empty() {
        return Ok(());
    }

    let watch = spec.watch;
    let h = Rc::clone(host);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let actions = h.site.dispatch(SiteEvent::BecameVisible { node: entry.target(), watch });
                h.apply(None, actions);
            }
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(spec.threshold));
    init.set_root_margin(spec.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|e| dom_error("IntersectionObserver", &e))?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    host.observers.borrow_mut().push((watch, observer));
    Ok(())
}

// =============================================================================
// ACTIONS
// =============================================================================

impl Host {
    fn run(&self, event: &Event, site_event: SiteEvent<Element>) {
        let actions = self.site.dispatch(site_event);
        self.apply(Some(event), actions);
    }

    fn apply(&self, event: Option<&Event>, actions: Vec<Action<Element>>) {
        for action in actions {
            match action {
                Action::PreventDefault => {
                    if let Some(event) = event {
                        event.prevent_default();
                    }
                }
                Action::Unobserve { node, watch } => {
                    for (kind, observer) in self.observers.borrow().iter() {
                        if *kind == watch {
                            observer.unobserve(&node);
                        }
                    }
                }
                Action::HideOffcanvas(panel) => match hide_offcanvas(&self.window, &panel) {
                    Ok(true) => log::debug!("offcanvas hidden"),
                    Ok(false) => log::debug!("no offcanvas instance to hide"),
                    Err(e) => log::debug!("{}", dom_error("Offcanvas.hide", &e)),
                },
                Action::ScrollTo { top } => {
                    let options = ScrollToOptions::new();
                    options.set_top(top);
                    options.set_behavior(ScrollBehavior::Smooth);
                    self.window.scroll_to_with_scroll_to_options(&options);
                }
                Action::RegisterServiceWorker { path } => register_service_worker(&self.window, &path),
            }
        }
    }
}

/// `bootstrap.Offcanvas.getInstance(panel)?.hide()`. `Ok(false)` when the
/// library or the instance is missing.
fn hide_offcanvas(window: &Window, panel: &Element) -> Result<bool, JsValue> {
    let bootstrap = Reflect::get(window, &JsValue::from_str("bootstrap"))?;
    if bootstrap.is_undefined() {
        return Ok(false);
    }
    let offcanvas = Reflect::get(&bootstrap, &JsValue::from_str("Offcanvas"))?;
    if offcanvas.is_undefined() {
        return Ok(false);
    }
    let get_instance: Function = Reflect::get(&offcanvas, &JsValue::from_str("getInstance"))?.dyn_into()?;
    let instance = get_instance.call1(&offcanvas, panel)?;
    if instance.is_null() || instance.is_undefined() {
        return Ok(false);
    }
    let hide: Function = Reflect::get(&instance, &JsValue::from_str("hide"))?.dyn_into()?;
    hide.call0(&instance)?;
    Ok(true)
}

fn register_service_worker(window: &Window, path: &str) {
    let navigator = window.navigator();
    match Reflect::has(&navigator, &JsValue::from_str("serviceWorker")) {
        Ok(true) => {}
        Ok(false) | Err(_) => {
            log::debug!("service workers unsupported");
            return;
        }
    }
    let promise = navigator.service_worker().register(path);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(registration) => {
                let scope = registration.dyn_ref::<ServiceWorkerRegistration>().map(ServiceWorkerRegistration::scope);
                log::info!("service worker registered: scope={}", scope.unwrap_or_default());
            }
            Err(e) => log::warn!("{}", SiteError::ServiceWorker(describe(&e))),
        }
    });
}
