use std::fmt;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use web_sys::{Document, Element, Event};

const EVENT_TYPES: &[(&str, &str)] = &[("onclick", "click")];

const PARENT_KEY: &str = "parent";

pub(crate) type Handler = Rc<dyn Fn(&Event)>;

pub(crate) enum Arg {
    List(Vec<Arg>),
    Text(String),
    Child(Element),
    Attr(String, String),
    On(String, Handler),
    Parent(Element),
}

impl Arg {
    pub(crate) fn text(value: impl Into<String>) -> Self {
        Arg::Text(value.into())
    }

    pub(crate) fn attr(name: &str, value: impl fmt::Display) -> Self {
        Arg::Attr(name.to_string(), value.to_string())
    }

    pub(crate) fn on(name: &str, handler: impl Fn(&Event) + 'static) -> Self {
        Arg::On(name.to_string(), Rc::new(handler))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DomError {
    CreateElement { tag: String },
    Markup { tag: String },
    UnknownEvent { name: String },
    ReservedAttr { name: String },
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::CreateElement { tag } => {
                write!(f, "document rejected element tag '{tag}'")
            }
            DomError::Markup { tag } => {
                write!(f, "markup fragment rejected inside <{tag}>")
            }
            DomError::UnknownEvent { name } => {
                write!(f, "unknown event directive '{name}'")
            }
            DomError::ReservedAttr { name } => {
                write!(f, "'{name}' is a directive key, not an attribute")
            }
        }
    }
}

impl std::error::Error for DomError {}

pub(crate) struct Built {
    pub element: Element,
    // Dropping a guard detaches its listener.
    pub listeners: Vec<EventListener>,
}

// Not atomic: a Parent attachment already performed stays visible when a
// later argument fails.
pub(crate) fn build(document: &Document, tag: &str, args: Vec<Arg>) -> Result<Built, DomError> {
    let element = document.create_element(tag).map_err(|_| DomError::CreateElement {
        tag: tag.to_string(),
    })?;
    let mut listeners = Vec::new();
    apply_args(&element, tag, args, &mut listeners)?;
    Ok(Built { element, listeners })
}

pub(crate) fn listen(
    target: &Element,
    name: &str,
    handler: impl Fn(&Event) + 'static,
) -> Result<EventListener, DomError> {
    let Some(event) = event_type(name) else {
        return Err(DomError::UnknownEvent {
            name: name.to_string(),
        });
    };
    Ok(EventListener::new_with_options(
        target,
        event,
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        },
        move |event: &Event| handler(event),
    ))
}

fn apply_args(
    element: &Element,
    tag: &str,
    args: Vec<Arg>,
    listeners: &mut Vec<EventListener>,
) -> Result<(), DomError> {
    for arg in args {
        match arg {
            Arg::List(nested) => apply_args(element, tag, nested, listeners)?,
            Arg::Text(markup) => {
                element
                    .insert_adjacent_html("beforeend", &markup)
                    .map_err(|_| DomError::Markup {
                        tag: tag.to_string(),
                    })?;
            }
            Arg::Child(child) => {
                let _ = element.append_child(&child);
            }
            Arg::Attr(name, value) => {
                if name == PARENT_KEY || event_type(&name).is_some() {
                    return Err(DomError::ReservedAttr { name });
                }
                let _ = element.set_attribute(&name, &value);
            }
            Arg::On(name, handler) => {
                let listener = listen(element, &name, move |event| handler(event))?;
                listeners.push(listener);
            }
            Arg::Parent(parent) => {
                let _ = parent.append_child(element);
            }
        }
    }
    Ok(())
}

fn event_type(name: &str) -> Option<&'static str> {
    EVENT_TYPES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, event)| *event)
}
