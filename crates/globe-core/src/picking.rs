use crate::camera::Ray;
use crate::marker::Marker;
use glam::{Quat, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub distance: f32,
}

pub type Hits = SmallVec<[Hit; 4]>;

/// Distance along `ray` to an oriented box, if the ray enters it ahead of
/// the origin.
pub fn ray_box(ray: &Ray, center: Vec3, orientation: Quat, half: Vec3) -> Option<f32> {
    let inv = orientation.inverse();
    let o = inv * (ray.origin - center);
    let d = inv * ray.dir;
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        let (o, d, h) = (o[axis], d[axis], half[axis]);
        if d.abs() < 1e-8 {
            if o.abs() > h {
                return None;
            }
            continue;
        }
        let mut t0 = (-h - o) / d;
        let mut t1 = (h - o) / d;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }
    (t_near >= 0.0).then_some(t_near)
}

/// Pickable markers hit by `ray`, nearest first.
pub fn intersect_markers(ray: &Ray, markers: &[Marker]) -> Hits {
    let mut hits: Hits = markers
        .iter()
        .enumerate()
        .filter(|(_, m)| m.pickable)
        .filter_map(|(index, m)| {
            ray_box(ray, m.center(), m.orientation, m.half_extents())
                .map(|distance| Hit { index, distance })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}
