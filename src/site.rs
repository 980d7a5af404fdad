//! Site state object and event dispatcher.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host (browser glue under `web`, or a test) translates DOM callbacks
//! into [`SiteEvent`]s and feeds them to [`Site::dispatch`]. Everything that
//! can be done through the [`Dom`] registry happens inside the call; what
//! needs the raw browser event or a browser API the registry does not model
//! comes back as [`Action`]s for the host to carry out.
//!
//! DESIGN
//! ======
//! All session state (current theme, parallax in-flight flag, resize
//! generation) lives inside the components owned here. Nothing is global;
//! two `Site`s over two documents are fully independent.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use std::rc::Rc;

use chrono::NaiveDate;
use garden::zones::ZoneCatalog;

use crate::config::SiteConfig;
use crate::dom::Dom;
use crate::effects::{self, BackToTop, Counters, Parallax, Watch};
use crate::forms::FormGuard;
use crate::input::KeyPress;
use crate::layout::LayoutGuards;
use crate::nav::Navigation;
use crate::panels::calendar::CalendarPanel;
use crate::panels::filters::EventFilter;
use crate::panels::map::MapInspector;
use crate::prefs::{PreferenceStore, ThemePreference};
use crate::schedule::Scheduler;
use crate::theme::{Theme, ThemeSync};
use crate::toast::Notifier;

/// A discrete page event, carrying the element it concerns.
#[derive(Debug, Clone, PartialEq)]
pub enum SiteEvent<N> {
    ThemeToggleClicked,
    KeyDown(KeyPress),
    ZoneClicked(N),
    ZoneHover { zone: N, entered: bool },
    ZoneKeyDown { zone: N, key: KeyPress },
    FilterClicked(N),
    CalendarDayClicked(N),
    FieldBlurred(N),
    MembershipSubmitted(N),
    NewsletterSubmitted(N),
    /// Any click on the document; `N` is the event target.
    DocumentClicked(N),
    /// A click inside `#navbarOffcanvas`; `N` is the event target.
    OffcanvasClicked(N),
    AnchorClicked(N),
    BackToTopClicked,
    Scrolled,
    Resized,
    BecameVisible { node: N, watch: Watch },
    /// The window `load` event.
    Loaded,
}

/// Work for the host after a dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Action<N> {
    /// Suppress the browser default for the event being dispatched.
    PreventDefault,
    /// Stop watching `node` with the `watch` observer.
    Unobserve { node: N, watch: Watch },
    /// Hide the Bootstrap offcanvas rooted at `N`, if the library has one.
    HideOffcanvas(N),
    /// Smooth-scroll the window to `top`.
    ScrollTo { top: f64 },
    RegisterServiceWorker { path: String },
}

pub struct Site<D: Dom> {
    dom: Rc<D>,
    config: SiteConfig,
    notifier: Rc<Notifier<D>>,
    theme: ThemeSync<D>,
    map: MapInspector<D>,
    filter: EventFilter<D>,
    calendar: CalendarPanel<D>,
    forms: FormGuard<D>,
    layout: LayoutGuards<D>,
    counters: Counters<D>,
    parallax: Parallax<D>,
    back_to_top: BackToTop<D>,
    nav: Navigation<D>,
}

impl<D: Dom + 'static> Site<D> {
    #[must_use]
    pub fn new(dom: Rc<D>, scheduler: Rc<dyn Scheduler>, store: Box<dyn PreferenceStore>, config: SiteConfig) -> Self {
        let notifier = Rc::new(Notifier::new(Rc::clone(&dom), Rc::clone(&scheduler), config.toast));
        let preference = ThemePreference::load(store, &config.theme_storage_key);
        Self {
            theme: ThemeSync::new(Rc::clone(&dom), preference, Rc::clone(&notifier)),
            map: MapInspector::new(
                Rc::clone(&dom),
                Rc::clone(&scheduler),
                ZoneCatalog::green_haven(),
                config.zone_highlight_ms,
            ),
            filter: EventFilter::new(Rc::clone(&dom)),
            calendar: CalendarPanel::new(Rc::clone(&dom)),
            forms: FormGuard::new(Rc::clone(&dom), Rc::clone(&notifier)),
            layout: LayoutGuards::new(Rc::clone(&dom), Rc::clone(&scheduler), config.resize_debounce_ms),
            counters: Counters::new(Rc::clone(&dom), Rc::clone(&scheduler), config.counter_frames),
            parallax: Parallax::new(Rc::clone(&dom), scheduler, config.parallax_default_speed),
            back_to_top: BackToTop::new(Rc::clone(&dom), config.back_to_top_threshold_px),
            nav: Navigation::new(Rc::clone(&dom)),
            notifier,
            config,
            dom,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    #[must_use]
    pub fn notifier(&self) -> &Rc<Notifier<D>> {
        &self.notifier
    }

    /// One-time page setup once the document is parsed. `unit` yields uniform
    /// samples in `[0, 1)` for the decorative leaves.
    pub fn init(&self, today: NaiveDate, unit: impl FnMut() -> f64) {
        self.theme.init();
        effects::disable_typing(&*self.dom);
        self.map.prepare_accessibility();
        let cells = self.calendar.render(today, &self.config.activity_days);
        effects::populate_leaves(&*self.dom, self.config.floating_leaf_count, unit);
        let clamped = self.layout.run();
        let active = self.nav.mark_active_links();
        log::info!(
            "site ready: theme={} calendar_cells={cells} clamped={clamped} active_links={active}",
            self.theme.current().as_str()
        );
    }

    /// Load work owed at mount time: when the window `load` event fired
    /// before the host attached its listener, the [`SiteEvent::Loaded`]
    /// dispatch happens here instead. `None` means the host must still listen.
    pub fn catch_up_load(&self) -> Option<Vec<Action<D::Node>>> {
        if !self.dom.load_complete() {
            return None;
        }
        log::debug!("window already loaded at mount");
        Some(self.dispatch(SiteEvent::Loaded))
    }

    /// Handle one event and report what the host still has to do.
    pub fn dispatch(&self, event: SiteEvent<D::Node>) -> Vec<Action<D::Node>> {
        let mut actions = Vec::new();
        match event {
            SiteEvent::ThemeToggleClicked => {
                self.theme.toggle();
            }
            SiteEvent::KeyDown(key) => {
                if key.is_theme_chord() {
                    self.theme.toggle();
                    actions.push(Action::PreventDefault);
                } else if key.is_escape() {
                    actions.extend(self.nav.on_escape().map(Action::HideOffcanvas));
                }
            }
            SiteEvent::ZoneClicked(zone) => {
                if let Some(key) = self.map.zone_key(&zone) {
                    self.map.on_zone_click(&key);
                }
            }
            SiteEvent::ZoneHover { zone, entered } => self.map.on_zone_hover(&zone, entered),
            SiteEvent::ZoneKeyDown { zone, key } => {
                if self.map.on_zone_key(&zone, &key) {
                    actions.push(Action::PreventDefault);
                }
            }
            SiteEvent::FilterClicked(control) => {
                self.filter.on_filter_click(&control);
            }
            SiteEvent::CalendarDayClicked(cell) => {
                if let Some(day) = self.calendar.day_of(&cell) {
                    self.calendar.on_day_click(day);
                }
            }
            SiteEvent::FieldBlurred(field) => {
                self.forms.validate_field(&field);
            }
            SiteEvent::MembershipSubmitted(form) => {
                actions.push(Action::PreventDefault);
                self.forms.submit_membership(&form);
            }
            SiteEvent::NewsletterSubmitted(form) => {
                actions.push(Action::PreventDefault);
                self.forms.submit_newsletter(&form);
            }
            SiteEvent::DocumentClicked(target) => {
                actions.extend(self.nav.on_document_click(&target).map(Action::HideOffcanvas));
            }
            SiteEvent::OffcanvasClicked(target) => {
                actions.extend(self.nav.on_offcanvas_click(&target).map(Action::HideOffcanvas));
            }
            SiteEvent::AnchorClicked(link) => {
                actions.push(Action::PreventDefault);
                if let Some(top) = effects::anchor_target(&*self.dom, &link) {
                    actions.push(Action::ScrollTo { top });
                }
            }
            SiteEvent::BackToTopClicked => actions.push(Action::ScrollTo { top: 0.0 }),
            SiteEvent::Scrolled => {
                self.back_to_top.on_scroll();
                self.parallax.on_scroll();
            }
            SiteEvent::Resized => self.layout.on_resize(),
            SiteEvent::BecameVisible { node, watch } => {
                match watch {
                    Watch::Reveal => effects::reveal(&*self.dom, &node),
                    Watch::Counter => {
                        self.counters.start(&node);
                    }
                }
                actions.push(Action::Unobserve { node, watch });
            }
            SiteEvent::Loaded => {
                actions.push(Action::RegisterServiceWorker { path: self.config.service_worker_path.clone() });
            }
        }
        actions
    }
}
