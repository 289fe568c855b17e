//! Perspective camera and orbit controls.
//!
//! The controls keep the camera on a sphere around `target` and ease pending
//! rotation in over several frames (damping), matching the feel of the
//! orbit-drag interaction the globe is used with.

use crate::constants::*;
use glam::{Mat4, Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn perspective(fov_deg: f32, aspect: f32, eye: Vec3) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: fov_deg.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// World-space picking ray through normalized device coordinates.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray {
            origin: self.eye,
            dir: (far - self.eye).normalize(),
        }
    }

    /// Camera basis vectors for billboards: (right, up).
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward);
        (right, up)
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub damping: f32,
    pub rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    radius: f32,
    theta: f32,
    phi: f32,
    pending_theta: f32,
    pending_phi: f32,
    pending_scale: f32,
}

impl OrbitControls {
    pub fn new(eye: Vec3, target: Vec3, damping: f32) -> Self {
        let offset = eye - target;
        let radius = offset.length();
        let (theta, phi) = if radius > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, std::f32::consts::FRAC_PI_2)
        };
        Self {
            target,
            damping,
            rotate_speed: ORBIT_ROTATE_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            radius,
            theta,
            phi,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_scale: 1.0,
        }
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.radius
    }
    #[inline]
    pub fn azimuth(&self) -> f32 {
        self.theta
    }
    #[inline]
    pub fn polar(&self) -> f32 {
        self.phi
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.pending_theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.pending_phi -= angle;
    }

    /// Pointer drag of `dx`, `dy` CSS pixels on an element `client_height` tall.
    pub fn drag(&mut self, dx: f32, dy: f32, client_height: f32) {
        let h = client_height.max(1.0);
        let tau = std::f32::consts::TAU;
        self.rotate_left(tau * dx / h * self.rotate_speed);
        self.rotate_up(tau * dy / h * self.rotate_speed);
    }

    /// Wheel zoom; negative `delta_y` moves closer.
    pub fn zoom(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.pending_scale *= ORBIT_ZOOM_STEP;
        } else if delta_y > 0.0 {
            self.pending_scale /= ORBIT_ZOOM_STEP;
        }
    }

    /// Apply pending motion and write the new eye into `camera`.
    pub fn update(&mut self, camera: &mut Camera) {
        let k = if self.damping > 0.0 { self.damping } else { 1.0 };
        self.theta += self.pending_theta * k;
        self.phi = (self.phi + self.pending_phi * k)
            .clamp(ORBIT_POLAR_EPS, std::f32::consts::PI - ORBIT_POLAR_EPS);
        self.radius = (self.radius * self.pending_scale).clamp(self.min_distance, self.max_distance);
        self.pending_scale = 1.0;
        if self.damping > 0.0 {
            self.pending_theta *= 1.0 - self.damping;
            self.pending_phi *= 1.0 - self.damping;
        } else {
            self.pending_theta = 0.0;
            self.pending_phi = 0.0;
        }

        let sin_phi = self.phi.sin();
        let offset = Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        );
        camera.eye = self.target + offset;
        camera.target = self.target;
    }
}
