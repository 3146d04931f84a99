use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::dom::{self, Arg, DomError};
use raitobokkusu_core::{GallerySnapshot, GalleryState, NavAction};

pub(crate) const TRIGGER_SELECTOR: &str = ".lightbox-link";

const ACTIVE_CLASS: &str = "active";

const IMAGE_CLEARED_SRC: &str = "";

#[derive(Debug)]
pub(crate) enum MountError {
    MissingBody,
    Dom(DomError),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::MissingBody => write!(f, "document has no body to mount into"),
            MountError::Dom(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for MountError {}

impl From<DomError> for MountError {
    fn from(err: DomError) -> Self {
        MountError::Dom(err)
    }
}

struct Trigger {
    element: Element,
    href: String,
}

type DispatchHook = Rc<RefCell<Option<Rc<dyn Fn(NavAction)>>>>;

pub(crate) struct LightboxView {
    state: RefCell<GalleryState>,
    triggers: Vec<Trigger>,
    overlay: Element,
    image: Element,
    prev: Element,
    next: Element,
    listeners: RefCell<Vec<EventListener>>,
    // At most one live listener per control; render overwrites the slot.
    prev_listener: RefCell<Option<EventListener>>,
    next_listener: RefCell<Option<EventListener>>,
}

impl LightboxView {
    pub(crate) fn mount(document: &Document) -> Result<Rc<Self>, MountError> {
        let Some(body) = document.body() else {
            return Err(MountError::MissingBody);
        };

        let image = dom::build(
            document,
            "img",
            vec![
                Arg::attr("class", "lightbox-img"),
                Arg::attr("src", IMAGE_CLEARED_SRC),
            ],
        )?;
        let next = dom::build(
            document,
            "div",
            vec![
                Arg::attr("class", "lightbox-next"),
                Arg::text(r#"<i class="fa fa-solid fa-arrow-right"></i>"#),
            ],
        )?;
        let prev = dom::build(
            document,
            "div",
            vec![
                Arg::attr("class", "lightbox-prev"),
                Arg::text(r#"<i class="fa fa-solid fa-arrow-left"></i>"#),
            ],
        )?;

        // The view does not exist yet; the backdrop handler dispatches
        // through this slot, filled in right after construction.
        let hook: DispatchHook = Rc::new(RefCell::new(None));
        let close_hook = Rc::clone(&hook);
        let overlay = dom::build(
            document,
            "div",
            vec![
                Arg::attr("class", "lightbox-bg"),
                Arg::Parent(body.into()),
                Arg::on("onclick", move |event| {
                    let dispatch = close_hook.borrow().as_ref().map(Rc::clone);
                    if let Some(dispatch) = dispatch {
                        dispatch(NavAction::Close);
                    }
                    event.prevent_default();
                    event.stop_propagation();
                }),
                Arg::List(vec![
                    Arg::Child(prev.element.clone()),
                    Arg::Child(next.element.clone()),
                    Arg::Child(image.element.clone()),
                ]),
            ],
        )?;

        let triggers = scan_triggers(document);
        let view = Rc::new(Self {
            state: RefCell::new(GalleryState::new(triggers.len())),
            triggers,
            overlay: overlay.element,
            image: image.element,
            prev: prev.element,
            next: next.element,
            listeners: RefCell::new(overlay.listeners),
            prev_listener: RefCell::new(None),
            next_listener: RefCell::new(None),
        });

        let dispatch_view = Rc::downgrade(&view);
        *hook.borrow_mut() = Some(Rc::new(move |action| {
            if let Some(view) = dispatch_view.upgrade() {
                view.dispatch(action);
            }
        }));

        view.install_trigger_listeners();
        Ok(view)
    }

    pub(crate) fn unmount(&self) {
        self.prev_listener.borrow_mut().take();
        self.next_listener.borrow_mut().take();
        self.listeners.borrow_mut().clear();
        self.overlay.remove();
    }

    pub(crate) fn dispatch(self: &Rc<Self>, action: NavAction) {
        let changed = self.state.borrow_mut().apply(action);
        if !changed {
            return;
        }
        let snapshot = self.state.borrow().snapshot();
        self.render(&snapshot);
    }

    fn install_trigger_listeners(self: &Rc<Self>) {
        let mut listeners = self.listeners.borrow_mut();
        for (index, trigger) in self.triggers.iter().enumerate() {
            let view = Rc::downgrade(self);
            listeners.push(click_listener(&trigger.element, move |event| {
                if let Some(view) = view.upgrade() {
                    view.dispatch(NavAction::Open(index));
                }
                event.prevent_default();
                event.stop_propagation();
            }));
        }
    }

    fn render(self: &Rc<Self>, snapshot: &GallerySnapshot) {
        match snapshot.current {
            Some(index) => {
                let _ = self.image.set_attribute("src", &self.triggers[index].href);
                let _ = self.overlay.class_list().add_1(ACTIVE_CLASS);
            }
            None => {
                let _ = self.image.set_attribute("src", IMAGE_CLEARED_SRC);
                let _ = self.overlay.class_list().remove_1(ACTIVE_CLASS);
            }
        }
        self.bind_control(&self.prev, &self.prev_listener, NavAction::Prev, snapshot.prev);
        self.bind_control(&self.next, &self.next_listener, NavAction::Next, snapshot.next);
    }

    fn bind_control(
        self: &Rc<Self>,
        control: &Element,
        slot: &RefCell<Option<EventListener>>,
        action: NavAction,
        neighbor: Option<usize>,
    ) {
        slot.borrow_mut().take();
        if neighbor.is_none() {
            let _ = control.class_list().remove_1(ACTIVE_CLASS);
            return;
        }
        let _ = control.class_list().add_1(ACTIVE_CLASS);
        let view = Rc::downgrade(self);
        let listener = click_listener(control, move |event| {
            if let Some(view) = view.upgrade() {
                view.dispatch(action);
            }
            // Controls sit inside the backdrop; without this the click
            // would bubble up and close the overlay.
            event.prevent_default();
            event.stop_propagation();
        });
        *slot.borrow_mut() = Some(listener);
    }
}

fn click_listener(target: &Element, handler: impl Fn(&Event) + 'static) -> EventListener {
    EventListener::new_with_options(
        target,
        "click",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        },
        move |event: &Event| handler(event),
    )
}

fn scan_triggers(document: &Document) -> Vec<Trigger> {
    let mut triggers = Vec::new();
    let Ok(nodes) = document.query_selector_all(TRIGGER_SELECTOR) else {
        return triggers;
    };
    for position in 0..nodes.length() {
        let Some(node) = nodes.get(position) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        match element.get_attribute("href") {
            Some(href) if !href.is_empty() => triggers.push(Trigger { element, href }),
            _ => {
                gloo::console::warn!(
                    "lightbox: skipping trigger without usable href",
                    element.outer_html()
                );
            }
        }
    }
    triggers
}
