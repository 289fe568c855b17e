use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

/// Latitude/longitude sphere with `(width + 1) * (height + 1)` vertices.
///
/// Seam at `u = 0`, north pole at +Y, `v = 1` at the top. Triangles wind
/// counter-clockwise seen from outside.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = MeshData {
        vertices: Vec::with_capacity(((ws + 1) * (hs + 1)) as usize),
        indices: Vec::with_capacity((6 * ws * (hs - 1)) as usize),
    };
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        // pole rows sample the middle of each segment
        let u_offset = match iy {
            0 => 0.5 / ws as f32,
            _ if iy == hs => -0.5 / ws as f32,
            _ => 0.0,
        };
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let phi = u * std::f32::consts::TAU;
            let theta = v * std::f32::consts::PI;
            let p = Vec3::new(
                -radius * phi.cos() * theta.sin(),
                radius * theta.cos(),
                radius * phi.sin() * theta.sin(),
            );
            let n = p.normalize_or_zero();
            mesh.vertices.push(MeshVertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: [u + u_offset, 1.0 - v],
            });
        }
    }
    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Unit cube centred on the origin, one quad per face with flat normals.
pub fn unit_box() -> MeshData {
    // (normal, u axis, v axis) with u x v = normal
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
    let mut mesh = MeshData::default();
    for (n, u, v) in faces {
        let base = mesh.vertices.len() as u32;
        for (cu, cv) in corners {
            let p = (n + u * cu + v * cv) * 0.5;
            mesh.vertices.push(MeshVertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: [(cu + 1.0) * 0.5, (cv + 1.0) * 0.5],
            });
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}
