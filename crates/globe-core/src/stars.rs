use glam::Vec3;
use rand::Rng;

/// Random backdrop points: `x` and `y` in `[-spread/2, spread/2)`, `z` in
/// `(-spread, 0]` so the field sits behind the globe from the start view.
pub fn generate_stars<R: Rng + ?Sized>(count: usize, spread: f32, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
                -rng.gen::<f32>() * spread,
            )
        })
        .collect()
}
