use std::f32::consts::TAU;

use glam::{Mat4, Quat, Vec3};

/// Vertex data as laid out in the GPU vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3], color: [f32; 3]) -> Self {
        Self {
            position,
            normal,
            color,
        }
    }

    pub const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x3,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Per-instance model matrix for the GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
}

impl InstanceRaw {
    pub fn from_matrix(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
        }
    }

    pub const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// CPU-side triangle mesh, built once during scene composition
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Append another mesh, reindexing its triangles
    pub fn merge(&mut self, other: Mesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(other.vertices);
        self.indices.extend(other.indices.into_iter().map(|i| i + base));
    }

    fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3, color: [f32; 3]) {
        let base = self.vertices.len() as u32;
        for corner in corners {
            self.vertices
                .push(Vertex::new(corner.to_array(), normal.to_array(), color));
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Flat plane in the XZ plane, centered at the origin, facing +Y
pub fn plane(width: f32, depth: f32, color: [f32; 3]) -> Mesh {
    let (hw, hd) = (width / 2.0, depth / 2.0);
    let mut mesh = Mesh::default();
    mesh.push_quad(
        [
            Vec3::new(-hw, 0.0, -hd),
            Vec3::new(-hw, 0.0, hd),
            Vec3::new(hw, 0.0, hd),
            Vec3::new(hw, 0.0, -hd),
        ],
        Vec3::Y,
        color,
    );
    mesh
}

/// Axis-aligned box centered at the origin, flat-shaded (4 verts per face)
pub fn cuboid(size: Vec3, color: [f32; 3]) -> Mesh {
    let h = size / 2.0;
    let mut mesh = Mesh::default();

    // +X / -X
    mesh.push_quad(
        [
            Vec3::new(h.x, -h.y, -h.z),
            Vec3::new(h.x, -h.y, h.z),
            Vec3::new(h.x, h.y, h.z),
            Vec3::new(h.x, h.y, -h.z),
        ],
        Vec3::X,
        color,
    );
    mesh.push_quad(
        [
            Vec3::new(-h.x, -h.y, h.z),
            Vec3::new(-h.x, -h.y, -h.z),
            Vec3::new(-h.x, h.y, -h.z),
            Vec3::new(-h.x, h.y, h.z),
        ],
        -Vec3::X,
        color,
    );
    // +Y / -Y
    mesh.push_quad(
        [
            Vec3::new(-h.x, h.y, -h.z),
            Vec3::new(h.x, h.y, -h.z),
            Vec3::new(h.x, h.y, h.z),
            Vec3::new(-h.x, h.y, h.z),
        ],
        Vec3::Y,
        color,
    );
    mesh.push_quad(
        [
            Vec3::new(-h.x, -h.y, h.z),
            Vec3::new(h.x, -h.y, h.z),
            Vec3::new(h.x, -h.y, -h.z),
            Vec3::new(-h.x, -h.y, -h.z),
        ],
        -Vec3::Y,
        color,
    );
    // +Z / -Z
    mesh.push_quad(
        [
            Vec3::new(-h.x, -h.y, h.z),
            Vec3::new(-h.x, h.y, h.z),
            Vec3::new(h.x, h.y, h.z),
            Vec3::new(h.x, -h.y, h.z),
        ],
        Vec3::Z,
        color,
    );
    mesh.push_quad(
        [
            Vec3::new(h.x, -h.y, -h.z),
            Vec3::new(h.x, h.y, -h.z),
            Vec3::new(-h.x, h.y, -h.z),
            Vec3::new(-h.x, -h.y, -h.z),
        ],
        -Vec3::Z,
        color,
    );
    mesh
}

/// Upright cylinder centered at the origin: smooth-shaded side wall plus
/// two cap fans
pub fn cylinder(radius: f32, height: f32, segments: u32, color: [f32; 3]) -> Mesh {
    assert!(segments >= 3);

    let mut mesh = Mesh::default();
    let hh = height / 2.0;

    // Side wall: two rings of vertices with radial normals
    for i in 0..=segments {
        let angle = i as f32 / segments as f32 * TAU;
        let (sin, cos) = angle.sin_cos();
        let normal = Vec3::new(cos, 0.0, sin);
        let bottom = Vec3::new(radius * cos, -hh, radius * sin);
        let top = Vec3::new(radius * cos, hh, radius * sin);
        mesh.vertices
            .push(Vertex::new(bottom.to_array(), normal.to_array(), color));
        mesh.vertices
            .push(Vertex::new(top.to_array(), normal.to_array(), color));
    }
    for i in 0..segments {
        let b = i * 2;
        mesh.indices
            .extend_from_slice(&[b, b + 1, b + 3, b, b + 3, b + 2]);
    }

    // Caps: center vertex plus a ring, axial normals
    for (y, normal) in [(hh, Vec3::Y), (-hh, -Vec3::Y)] {
        let center = mesh.vertices.len() as u32;
        mesh.vertices
            .push(Vertex::new([0.0, y, 0.0], normal.to_array(), color));
        for i in 0..=segments {
            let angle = i as f32 / segments as f32 * TAU;
            let (sin, cos) = angle.sin_cos();
            mesh.vertices.push(Vertex::new(
                [radius * cos, y, radius * sin],
                normal.to_array(),
                color,
            ));
        }
        for i in 0..segments {
            let ring = center + 1 + i;
            if normal.y > 0.0 {
                mesh.indices.extend_from_slice(&[center, ring + 1, ring]);
            } else {
                mesh.indices.extend_from_slice(&[center, ring, ring + 1]);
            }
        }
    }

    mesh
}

/// Thin box stretched between two points, the wire substitute for line
/// primitives in a triangle-list pipeline
pub fn line_segment(a: Vec3, b: Vec3, thickness: f32, color: [f32; 3]) -> Mesh {
    let offset = b - a;
    let rotation = Quat::from_rotation_arc(Vec3::Z, offset.normalize_or(Vec3::Z));
    let transform = Mat4::from_rotation_translation(rotation, (a + b) / 2.0);

    let mut mesh = cuboid(Vec3::new(thickness, thickness, offset.length()), color);
    for v in &mut mesh.vertices {
        v.position = transform
            .transform_point3(Vec3::from_array(v.position))
            .to_array();
        v.normal = transform
            .transform_vector3(Vec3::from_array(v.normal))
            .to_array();
    }
    mesh
}

/// Small arrowhead pointing down +Z, used as the bird body
pub fn bird(size: f32, color: [f32; 3]) -> Mesh {
    let nose = Vec3::new(0.0, 0.0, size);
    let left = Vec3::new(-size * 0.6, 0.0, -size * 0.5);
    let right = Vec3::new(size * 0.6, 0.0, -size * 0.5);
    let top = Vec3::new(0.0, size * 0.4, -size * 0.3);

    let mut mesh = Mesh::default();
    for (a, b, c) in [
        (nose, left, top),
        (nose, top, right),
        (nose, right, left),
        (top, left, right),
    ] {
        let normal = (b - a).cross(c - a).normalize();
        let base = mesh.vertices.len() as u32;
        for p in [a, b, c] {
            mesh.vertices
                .push(Vertex::new(p.to_array(), normal.to_array(), color));
        }
        mesh.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normals_are_unit(mesh: &Mesh) {
        for v in &mesh.vertices {
            let len = Vec3::from_array(v.normal).length();
            assert!((len - 1.0).abs() < 1e-4, "normal length {len}");
        }
    }

    #[test]
    fn plane_has_one_quad() {
        let mesh = plane(10.0, 10.0, [0.5, 0.5, 0.5]);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
        normals_are_unit(&mesh);
    }

    #[test]
    fn cuboid_has_six_faces() {
        let mesh = cuboid(Vec3::splat(2.0), [1.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        normals_are_unit(&mesh);
    }

    #[test]
    fn cylinder_counts_match_segments() {
        let segments = 16;
        let mesh = cylinder(1.0, 2.0, segments, [0.0, 1.0, 0.0]);

        // Side: (segments + 1) * 2; each cap: 1 center + segments + 1 ring
        let expected_vertices = (segments + 1) * 2 + 2 * (segments + 2);
        assert_eq!(mesh.vertices.len(), expected_vertices as usize);
        // Side: segments quads; caps: segments triangles each
        assert_eq!(mesh.indices.len(), (segments * 6 + segments * 3 * 2) as usize);
        normals_are_unit(&mesh);
    }

    #[test]
    fn line_segment_spans_its_endpoints() {
        let a = Vec3::ZERO;
        let b = Vec3::new(0.0, 50.0, 0.0);
        let mesh = line_segment(a, b, 0.2, [1.0, 0.0, 0.0]);

        let ys: Vec<f32> = mesh.vertices.iter().map(|v| v.position[1]).collect();
        let min = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        assert!(min.abs() < 1e-3);
        assert!((max - 50.0).abs() < 1e-3);
        normals_are_unit(&mesh);
    }

    #[test]
    fn merge_reindexes_triangles() {
        let mut mesh = plane(2.0, 2.0, [0.0; 3]);
        mesh.merge(cuboid(Vec3::ONE, [0.0; 3]));

        assert_eq!(mesh.vertices.len(), 4 + 24);
        assert_eq!(mesh.indices.len(), 6 + 36);
        // Merged indices must point past the original vertices
        assert!(mesh.indices[6..].iter().all(|&i| i >= 4));
        for &i in &mesh.indices {
            assert!((i as usize) < mesh.vertices.len());
        }
    }

    #[test]
    fn indices_are_in_bounds() {
        for mesh in [
            plane(5.0, 5.0, [0.0; 3]),
            cuboid(Vec3::ONE, [0.0; 3]),
            cylinder(0.5, 1.0, 8, [0.0; 3]),
            bird(1.0, [0.0; 3]),
        ] {
            for &i in &mesh.indices {
                assert!((i as usize) < mesh.vertices.len());
            }
            assert_eq!(mesh.indices.len() % 3, 0);
        }
    }
}
