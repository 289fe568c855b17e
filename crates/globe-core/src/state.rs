//! Application state shared between the event handlers and the frame loop.

use crate::camera::{Camera, OrbitControls};
use crate::country::CountryRecord;
use crate::format::NumberFormat;
use crate::input::{normalize_pointer, DragState, PointerState, Viewport};
use crate::marker::{build_markers, Marker};
use crate::params::SceneParams;
use crate::picking::{intersect_markers, Hits};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Debug, PartialEq)]
pub struct PopupContent {
    pub country: String,
    pub population_display: String,
    pub flag_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PopupState {
    pub visible: bool,
    /// Raw client coordinates of the last pointer event.
    pub screen_x: f64,
    pub screen_y: f64,
    pub content: Option<PopupContent>,
}

pub struct AppState {
    pub params: SceneParams,
    pub markers: Vec<Marker>,
    pub pointer: PointerState,
    pub drag: DragState,
    pub camera: Camera,
    pub orbit: OrbitControls,
    pub popup: PopupState,
    /// Markers under the pointer this frame, nearest first.
    pub highlighted: Hits,
}

impl AppState {
    pub fn new(params: SceneParams, markers: Vec<Marker>, aspect: f32) -> Self {
        let eye = Vec3::new(0.0, 0.0, params.camera_z);
        let camera = Camera::perspective(params.camera_fov_deg, aspect, eye);
        let orbit = OrbitControls::new(eye, Vec3::ZERO, params.orbit_damping);
        Self {
            params,
            markers,
            pointer: PointerState::default(),
            drag: DragState::default(),
            camera,
            orbit,
            popup: PopupState::default(),
            highlighted: Hits::new(),
        }
    }

    pub fn from_records(
        params: SceneParams,
        records: &[CountryRecord],
        format: &NumberFormat,
        seed: u64,
        aspect: f32,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let markers = build_markers(records, &params, format, &mut rng);
        Self::new(params, markers, aspect)
    }

    /// Mouse move / touch start: update the pointer and move the popup.
    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64, viewport: &Viewport) {
        if let Some(ndc) = normalize_pointer(client_x, client_y, viewport) {
            self.pointer.set(ndc);
        }
        self.popup.screen_x = client_x;
        self.popup.screen_y = client_y;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_viewport(width, height);
    }

    pub fn animate(&mut self, elapsed_sec: f32) {
        if !self.params.pulse_enabled {
            return;
        }
        for m in &mut self.markers {
            m.depth_scale = m.pulse.scale_at(elapsed_sec);
        }
    }

    /// Recompute highlight and popup state from the current pointer.
    pub fn pick(&mut self) {
        let hits = match self.pointer.ndc() {
            Some(ndc) => intersect_markers(&self.camera.ray_from_ndc(ndc), &self.markers),
            None => Hits::new(),
        };

        for m in &mut self.markers {
            m.opacity = self.params.dim_opacity;
        }
        self.popup.visible = false;
        self.popup.content = None;

        let mut last = None;
        for hit in &hits {
            self.markers[hit.index].opacity = self.params.highlight_opacity;
            self.popup.visible = true;
            last = Some(hit.index);
        }
        // The farthest hit is processed last and owns the popup text.
        if let Some(i) = last {
            self.popup.content = Some(self.markers[i].popup_content());
        }
        self.highlighted = hits;
    }

    pub fn frame(&mut self, elapsed_sec: f32) {
        self.orbit.update(&mut self.camera);
        self.animate(elapsed_sec);
        self.pick();
    }
}
