use globe_core::AppState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod orbit;
mod pointer;

pub struct InputWiring {
    pub container: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub state: Rc<RefCell<AppState>>,
}

pub fn wire_input_handlers(w: &InputWiring) {
    pointer::wire_hover(w);
    orbit::wire_orbit(w);
}
