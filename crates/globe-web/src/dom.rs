use globe_core::{AppState, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn query<T: JsCast>(document: &web::Document, selector: &str) -> anyhow::Result<T> {
    document
        .query_selector(selector)
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("{} has an unexpected element type", selector))
}

pub fn by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

/// CSS size of the render container.
#[inline]
pub fn container_size(container: &web::HtmlElement) -> (f32, f32) {
    (
        container.offset_width().max(1) as f32,
        container.offset_height().max(1) as f32,
    )
}

pub fn viewport(container: &web::HtmlElement) -> Option<Viewport> {
    let window = web::window()?;
    let inner_width = window.inner_width().ok()?.as_f64()?;
    let inner_height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport {
        inner_width,
        inner_height,
        container_top: container.get_bounding_client_rect().top(),
    })
}

/// Size the canvas to the container, backing store scaled by devicePixelRatio.
pub fn sync_canvas_to_container(canvas: &web::HtmlCanvasElement, container: &web::HtmlElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let (css_w, css_h) = container_size(container);
        canvas.set_width(((css_w as f64 * dpr) as u32).max(1));
        canvas.set_height(((css_h as f64 * dpr) as u32).max(1));
        let style = canvas.style();
        _ = style.set_property("width", &format!("{}px", css_w));
        _ = style.set_property("height", &format!("{}px", css_h));
    }
}

pub fn wire_resize(
    canvas: web::HtmlCanvasElement,
    container: web::HtmlElement,
    state: Rc<RefCell<AppState>>,
) {
    let closure = Closure::wrap(Box::new(move || {
        sync_canvas_to_container(&canvas, &container);
        let (w, h) = container_size(&container);
        state.borrow_mut().resize(w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
