//! Runs test bodies inside a live Dioxus scope so signals can be created and
//! written outside a real renderer.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

thread_local! {
    static BODY: RefCell<Option<Box<dyn FnOnce()>>> = RefCell::new(None);
}

#[component]
fn Host() -> Element {
    use_hook(|| {
        if let Some(body) = BODY.with(|slot| slot.borrow_mut().take()) {
            body();
        }
    });
    rsx! {}
}

/// Build a one-component `VirtualDom` and run `body` during its first render.
pub fn in_scope<T: 'static>(body: impl FnOnce() -> T + 'static) -> T {
    let out = Rc::new(RefCell::new(None));
    let slot = out.clone();
    BODY.with(|b| {
        *b.borrow_mut() = Some(Box::new(move || {
            *slot.borrow_mut() = Some(body());
        }));
    });

    let mut dom = VirtualDom::new(Host);
    dom.rebuild_in_place();
    drop(dom);

    let value = out.borrow_mut().take();
    value.expect("scope body did not run")
}
