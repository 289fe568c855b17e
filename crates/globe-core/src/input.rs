use crate::constants::LAYOUT_BREAKPOINT_PX;
use glam::Vec2;

/// Last pointer position in normalized device coordinates.
///
/// Both axes stay `None` until the first mouse move or touch.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl PointerState {
    #[inline]
    pub fn ndc(&self) -> Option<Vec2> {
        Some(Vec2::new(self.x?, self.y?))
    }

    #[inline]
    pub fn set(&mut self, ndc: Vec2) {
        self.x = Some(ndc.x);
        self.y = Some(ndc.y);
    }
}

/// Window metrics needed to normalize pointer positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub inner_width: f64,
    pub inner_height: f64,
    /// Top of the render container's bounding rect, in client pixels.
    pub container_top: f64,
}

impl Viewport {
    /// Stacked (mobile) layout: the canvas sits below other content instead
    /// of filling the right half of the window.
    #[inline]
    pub fn is_stacked(&self) -> bool {
        self.inner_width <= LAYOUT_BREAKPOINT_PX
    }
}

/// Map client coordinates to NDC for the current layout.
///
/// Wide layout: x spans the right half of the window and y the full window
/// height. Stacked layout: x spans the full width and y is measured from the
/// container's top. Returns `None` for a zero-sized window.
pub fn normalize_pointer(client_x: f64, client_y: f64, viewport: &Viewport) -> Option<Vec2> {
    let w = viewport.inner_width;
    let h = viewport.inner_height;
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let (x, y) = if viewport.is_stacked() {
        (
            (client_x / w) * 2.0 - 1.0,
            -((client_y - viewport.container_top) / h) * 2.0 + 1.0,
        )
    } else {
        (
            ((client_x - w / 2.0) / (w / 2.0)) * 2.0 - 1.0,
            -(client_y / h) * 2.0 + 1.0,
        )
    };
    Some(Vec2::new(x as f32, y as f32))
}

#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last_x: f64,
    pub last_y: f64,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, x: f64, y: f64) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last_x = x;
        self.last_y = y;
    }

    /// Delta since the previous move for the captured pointer.
    pub fn step(&mut self, pointer_id: i32, x: f64, y: f64) -> Option<(f64, f64)> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) {
        if pointer_id == self.pointer_id {
            self.active = false;
        }
    }
}
