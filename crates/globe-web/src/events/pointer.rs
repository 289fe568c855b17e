use super::InputWiring;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mouse moves and touch starts anywhere in the window aim the picking ray
/// and drag the popup along.
pub(super) fn wire_hover(w: &InputWiring) {
    // mousemove
    {
        let state = w.state.clone();
        let container = w.container.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            if let Some(vp) = dom::viewport(&container) {
                state
                    .borrow_mut()
                    .pointer_moved(ev.client_x() as f64, ev.client_y() as f64, &vp);
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // touchstart: first touch point only
    {
        let state = w.state.clone();
        let container = w.container.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            let Some(touch) = ev.touches().get(0) else {
                return;
            };
            if let Some(vp) = dom::viewport(&container) {
                state
                    .borrow_mut()
                    .pointer_moved(touch.client_x() as f64, touch.client_y() as f64, &vp);
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            _ = wnd.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}
