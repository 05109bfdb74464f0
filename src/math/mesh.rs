use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::math::normals::{compute_normal, face_cross, normalize_or_zero};
use crate::math::surface::Mesh;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShadingMode {
    /// One normal per emitted strip vertex, taken from the triangle ahead of it.
    /// The last column and the whole last row strip get zero normals.
    #[default]
    Flat,
    /// Per-vertex normals averaged over every adjacent triangle.
    Smooth,
}

impl ShadingMode {
    pub fn label(self) -> &'static str {
        match self {
            ShadingMode::Flat => "Flat",
            ShadingMode::Smooth => "Smooth",
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct StripVertex {
    pub normal: [f32; 3],
    pub position: [f32; 3],
}

impl StripVertex {
    fn new(normal: Vec3, position: Vec3) -> Self {
        Self {
            normal: normal.to_array(),
            position: position.to_array(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct TriangleStrip {
    pub vertices: Vec<StripVertex>,
}

/// Everything a backend needs for one frame: the modelview transform and
/// one triangle strip per lattice row.
#[derive(Clone, Debug)]
pub struct DrawList {
    pub transform: Mat4,
    pub strips: Vec<TriangleStrip>,
}

impl DrawList {
    pub fn vertex_count(&self) -> usize {
        self.strips.iter().map(|s| s.vertices.len()).sum()
    }

    /// Concatenates all strips, returning the vertex range of each one.
    pub fn flatten(&self) -> (Vec<StripVertex>, Vec<Range<u32>>) {
        let mut vertices = Vec::with_capacity(self.vertex_count());
        let mut ranges = Vec::with_capacity(self.strips.len());

        for strip in &self.strips {
            let start = vertices.len() as u32;
            vertices.extend_from_slice(&strip.vertices);
            ranges.push(start..vertices.len() as u32);
        }

        (vertices, ranges)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MeshRenderer {
    pub shading: ShadingMode,
}

impl MeshRenderer {
    pub fn new(shading: ShadingMode) -> Self {
        Self { shading }
    }

    pub fn draw(&self, mesh: &Mesh, transform: Mat4) -> DrawList {
        let strips = match self.shading {
            ShadingMode::Flat => flat_strips(mesh),
            ShadingMode::Smooth => smooth_strips(mesh),
        };

        DrawList { transform, strips }
    }
}

fn flat_strips(mesh: &Mesh) -> Vec<TriangleStrip> {
    let rows = mesh.rows();
    let cols = mesh.cols();

    (0..rows)
        .map(|i| {
            let mut vertices = Vec::with_capacity((cols + 1) * 2);

            for j in 0..=cols {
                let top = mesh.vertex(i, j);
                let bottom = mesh.vertex(i + 1, j);

                let (n1, n2) = if j < cols && i + 1 < rows {
                    let top_next = mesh.vertex(i, j + 1);
                    let bottom_next = mesh.vertex(i + 1, j + 1);
                    (
                        compute_normal(top, bottom, top_next),
                        compute_normal(bottom, bottom_next, top_next),
                    )
                } else {
                    (Vec3::ZERO, Vec3::ZERO)
                };

                vertices.push(StripVertex::new(n1, top));
                vertices.push(StripVertex::new(n2, bottom));
            }

            TriangleStrip { vertices }
        })
        .collect()
}

/// Area-weighted vertex normals over the same triangle pair per quad that flat shading uses.
pub fn vertex_normals(mesh: &Mesh) -> Vec<Vec3> {
    let rows = mesh.rows();
    let cols = mesh.cols();
    let stride = cols + 1;
    let mut sums = vec![Vec3::ZERO; (rows + 1) * stride];

    for i in 0..rows {
        for j in 0..cols {
            let a = mesh.vertex(i, j);
            let b = mesh.vertex(i + 1, j);
            let c = mesh.vertex(i, j + 1);
            let d = mesh.vertex(i + 1, j + 1);

            let first = face_cross(a, b, c);
            let second = face_cross(b, d, c);

            sums[i * stride + j] += first;
            sums[(i + 1) * stride + j] += first + second;
            sums[i * stride + j + 1] += first + second;
            sums[(i + 1) * stride + j + 1] += second;
        }
    }

    sums.into_iter().map(normalize_or_zero).collect()
}

fn smooth_strips(mesh: &Mesh) -> Vec<TriangleStrip> {
    let normals = vertex_normals(mesh);
    let stride = mesh.cols() + 1;

    (0..mesh.rows())
        .map(|i| {
            let vertices = (0..stride)
                .flat_map(|j| {
                    [
                        StripVertex::new(normals[i * stride + j], mesh.vertex(i, j)),
                        StripVertex::new(normals[(i + 1) * stride + j], mesh.vertex(i + 1, j)),
                    ]
                })
                .collect();

            TriangleStrip { vertices }
        })
        .collect()
}
