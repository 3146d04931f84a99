use std::cell::RefCell;
use std::rc::Rc;

use crate::gallery_view::LightboxView;

thread_local! {
    static LIGHTBOX_VIEW: RefCell<Option<Rc<LightboxView>>> = RefCell::new(None);
}

pub fn run() {
    let already_mounted = LIGHTBOX_VIEW.with(|slot| slot.borrow().is_some());
    if already_mounted {
        return;
    }
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        gloo::console::error!("lightbox: no document to mount into");
        return;
    };
    match LightboxView::mount(&document) {
        Ok(view) => {
            LIGHTBOX_VIEW.with(|slot| {
                *slot.borrow_mut() = Some(view);
            });
        }
        Err(err) => {
            gloo::console::error!(format!("lightbox: mount failed: {err}"));
        }
    }
}

pub fn shutdown() {
    let view = LIGHTBOX_VIEW.with(|slot| slot.borrow_mut().take());
    if let Some(view) = view {
        view.unmount();
    }
}

pub fn is_mounted() -> bool {
    LIGHTBOX_VIEW.with(|slot| slot.borrow().is_some())
}
