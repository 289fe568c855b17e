use super::InputWiring;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drag to rotate and wheel to zoom, feeding the orbit controller.
pub(super) fn wire_orbit(w: &InputWiring) {
    // pointerdown
    {
        let state = w.state.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if ev.button() != 0 {
                return;
            }
            let id = ev.pointer_id();
            state
                .borrow_mut()
                .drag
                .begin(id, ev.client_x() as f64, ev.client_y() as f64);
            _ = canvas.set_pointer_capture(id);
            log::debug!("[orbit] begin drag, pointer {}", id);
        }) as Box<dyn FnMut(_)>);
        _ = w
            .canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove
    {
        let state = w.state.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut s = state.borrow_mut();
            let delta = s
                .drag
                .step(ev.pointer_id(), ev.client_x() as f64, ev.client_y() as f64);
            if let Some((dx, dy)) = delta {
                let h = canvas.client_height() as f32;
                s.orbit.drag(dx as f32, dy as f32, h);
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerup / pointercancel
    {
        let state = w.state.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let id = ev.pointer_id();
            state.borrow_mut().drag.end(id);
            if canvas.has_pointer_capture(id) {
                _ = canvas.release_pointer_capture(id);
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            for name in ["pointerup", "pointercancel"] {
                _ = wnd.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            }
        }
        closure.forget();
    }

    // wheel
    {
        let state = w.state.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            state.borrow_mut().orbit.zoom(ev.delta_y() as f32);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        _ = w.canvas.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        closure.forget();
    }
}
