//! Quad mesh data for textured sprites and backdrops.
//!
//! Every renderable in a parallax scene is a flat, axis-aligned quad:
//!
//! - [`QuadVertex`] — Position and texture coordinate, laid out for GPU upload
//! - [`MeshData`] — CPU-side vertex and index buffers
//! - [`QUAD_INDICES`] — The two triangles covering a quad
//!
//! # Building Quads
//!
//! ```
//! use parallax::{MeshData, Vec3};
//!
//! // A 0.2 x 0.4 character quad, centered slightly below the origin
//! let character = MeshData::quad(0.1, 0.2, Vec3::new(0.0, -0.2, 0.0));
//! assert_eq!(character.vertices.len(), 4);
//! assert_eq!(character.indices, vec![0, 1, 2, 2, 3, 0]);
//! ```
//!
//! # Vertex Layout
//!
//! | Attribute | Format    | Offset | Shader Location |
//! |-----------|-----------|--------|-----------------|
//! | position  | Float32x3 | 0      | 0               |
//! | uv        | Float32x2 | 12     | 1               |
//!
//! This layout is exposed via [`QuadVertex::LAYOUT`].

use glam::{Vec2, Vec3};

/// Triangle list covering a quad built by [`MeshData::push_quad`].
///
/// Both triangles share the bottom-left to top-right diagonal and wind the
/// same way: (BL, TL, TR) and (TR, BR, BL).
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Texture coordinates for the four corners, in vertex order.
const QUAD_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];

/// A quad vertex with position and texture coordinates.
///
/// Uses `#[repr(C)]` and derives [`bytemuck::Pod`] so a vertex slice can be
/// cast straight to bytes for a vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    /// Model-space position.
    pub position: [f32; 3],
    /// Texture coordinates in the range [0, 1].
    pub uv: [f32; 2],
}

impl QuadVertex {
    /// The wgpu vertex buffer layout for this vertex type.
    ///
    /// - **Array stride**: 20 bytes per vertex
    /// - **Attributes**: position (loc 0), uv (loc 1)
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<QuadVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            // uv
            wgpu::VertexAttribute {
                offset: 12,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x2,
            },
        ],
    };

    pub fn new(position: [f32; 3], uv: [f32; 2]) -> Self {
        Self { position, uv }
    }
}

/// CPU-side geometry: a vertex list and a triangle index list.
///
/// Meshes are built once during scene setup and never mutated afterwards.
/// Movement is expressed through model matrices, not by rewriting vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<QuadVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fresh container holding a single quad.
    ///
    /// See [`MeshData::push_quad`] for the vertex order.
    pub fn quad(half_width: f32, half_height: f32, center: Vec3) -> Self {
        let mut mesh = Self::new();
        mesh.push_quad(half_width, half_height, center);
        mesh
    }

    /// Appends a quad spanning `center ± (half_width, half_height)` on the
    /// plane `z = center.z`.
    ///
    /// Vertices are emitted bottom-left, top-left, top-right, bottom-right,
    /// with UVs (0,0), (0,1), (1,1), (1,0) in the same order.
    ///
    /// Existing contents are kept, and the appended indices are always the
    /// literal [`QUAD_INDICES`]: they are not offset by the vertices already
    /// present. Build independent quads into independent containers.
    pub fn push_quad(&mut self, half_width: f32, half_height: f32, center: Vec3) {
        let (w, h) = (half_width, half_height);

        #[rustfmt::skip]
        let corners = [
            [center.x - w, center.y - h, center.z],
            [center.x - w, center.y + h, center.z],
            [center.x + w, center.y + h, center.z],
            [center.x + w, center.y - h, center.z],
        ];

        for (position, uv) in corners.into_iter().zip(QUAD_UVS) {
            self.vertices.push(QuadVertex::new(position, uv));
        }
        self.indices.extend_from_slice(&QUAD_INDICES);
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of indices, i.e. the element count of an indexed draw.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices.iter().map(|v| Vec3::from(v.position))
    }

    pub fn uvs(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.vertices.iter().map(|v| Vec2::from(v.uv))
    }

    /// Axis-aligned bounding box as `(min, max)`.
    ///
    /// Returns `(Vec3::ZERO, Vec3::ZERO)` for an empty mesh.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        if self.vertices.is_empty() {
            return (Vec3::ZERO, Vec3::ZERO);
        }

        self.positions().fold(
            (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
            |(min, max), p| (min.min(p), max.max(p)),
        )
    }

    /// Vertex data as bytes, ready for a vertex buffer.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as bytes (u32 indices), ready for an index buffer.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_corners_follow_half_extents() {
        let cases = [
            (0.1, 0.2, Vec3::new(0.0, -0.2, 0.0)),
            (1.0, 1.0, Vec3::new(0.0, 0.0, -0.5)),
            (0.25, 0.15, Vec3::ZERO),
            (3.5, 0.01, Vec3::new(-7.0, 2.0, 0.4)),
        ];

        for (w, h, pos) in cases {
            let mesh = MeshData::quad(w, h, pos);
            let (min, max) = mesh.bounds();

            assert!((min.x - (pos.x - w)).abs() < 1e-6);
            assert!((max.x - (pos.x + w)).abs() < 1e-6);
            assert!((min.y - (pos.y - h)).abs() < 1e-6);
            assert!((max.y - (pos.y + h)).abs() < 1e-6);
            assert!(mesh.positions().all(|p| p.z == pos.z));
        }
    }

    #[test]
    fn quad_vertex_order_is_bl_tl_tr_br() {
        let mesh = MeshData::quad(1.0, 2.0, Vec3::new(10.0, 20.0, 0.0));
        let positions: Vec<Vec3> = mesh.positions().collect();

        assert_eq!(
            positions,
            vec![
                Vec3::new(9.0, 18.0, 0.0),
                Vec3::new(9.0, 22.0, 0.0),
                Vec3::new(11.0, 22.0, 0.0),
                Vec3::new(11.0, 18.0, 0.0),
            ]
        );
    }

    #[test]
    fn uvs_match_corner_order() {
        let mesh = MeshData::quad(0.5, 0.5, Vec3::ZERO);
        let uvs: Vec<Vec2> = mesh.uvs().collect();

        assert_eq!(
            uvs,
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(0.0, 1.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(1.0, 0.0),
            ]
        );
    }

    #[test]
    fn indices_are_fixed_regardless_of_input() {
        for (w, h) in [(0.0, 0.0), (1.0, 1.0), (-2.0, 5.0)] {
            let mesh = MeshData::quad(w, h, Vec3::new(1.0, 2.0, 3.0));
            assert_eq!(mesh.indices, QUAD_INDICES.to_vec());
            assert_eq!(mesh.index_count(), 6);
        }
    }

    #[test]
    fn triangles_share_winding() {
        let mesh = MeshData::quad(1.0, 1.0, Vec3::ZERO);
        let p: Vec<Vec3> = mesh.positions().collect();

        let signed_area = |tri: &[u32]| {
            let (a, b, c) = (p[tri[0] as usize], p[tri[1] as usize], p[tri[2] as usize]);
            (b - a).cross(c - a).z
        };

        let first = signed_area(&mesh.indices[0..3]);
        let second = signed_area(&mesh.indices[3..6]);
        assert!(first != 0.0);
        assert_eq!(first.signum(), second.signum());
    }

    #[test]
    fn push_quad_appends_without_clearing() {
        let mut mesh = MeshData::quad(1.0, 1.0, Vec3::ZERO);
        mesh.push_quad(0.5, 0.5, Vec3::new(2.0, 0.0, 0.0));

        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.indices, vec![0, 1, 2, 2, 3, 0, 0, 1, 2, 2, 3, 0]);
        assert_eq!(mesh.vertices[4].position, [1.5, -0.5, 0.0]);
    }

    #[test]
    fn byte_views_match_layout() {
        let mesh = MeshData::quad(1.0, 1.0, Vec3::ZERO);

        assert_eq!(QuadVertex::LAYOUT.array_stride, 20);
        assert_eq!(mesh.vertex_bytes().len(), 4 * 20);
        assert_eq!(mesh.index_bytes().len(), 6 * 4);
    }

    #[test]
    fn empty_mesh_bounds() {
        let mesh = MeshData::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.bounds(), (Vec3::ZERO, Vec3::ZERO));
    }
}
