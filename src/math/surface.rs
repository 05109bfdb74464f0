use glam::Vec3;

/// Rectangular parameter domain `[u_min, u_max] x [v_min, v_max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub u_min: f32,
    pub u_max: f32,
    pub v_min: f32,
    pub v_max: f32,
}

/// Lattice of sampled surface points, `(rows + 1) x (cols + 1)` in row-major order.
///
/// Row `i` corresponds to parameter `u_i`, column `j` to `v_j`. A mesh is never
/// edited after sampling; a new resolution means a new mesh.
#[derive(Clone, Debug)]
pub struct Mesh {
    rows: usize,
    cols: usize,
    domain: Domain,
    vertices: Vec<Vec3>,
}

impl Mesh {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn vertex(&self, i: usize, j: usize) -> Vec3 {
        self.vertices[i * (self.cols + 1) + j]
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// The `(u, v)` pair lattice index `(i, j)` was sampled at.
    pub fn parameters(&self, i: usize, j: usize) -> (f32, f32) {
        let d = &self.domain;
        let u = d.u_min + (d.u_max - d.u_min) * i as f32 / self.rows as f32;
        let v = d.v_min + (d.v_max - d.v_min) * j as f32 / self.cols as f32;
        (u, v)
    }
}

/// Enneper's minimal surface at parameter `(u, v)`.
#[inline]
pub fn enneper(u: f32, v: f32) -> Vec3 {
    let u2 = u * u;
    let v2 = v * v;
    let u3 = u2 * u;
    let v3 = v2 * v;

    Vec3::new(u - u3 / 3.0 + u * v2, v - v3 / 3.0 + v * u2, u2 - v2)
}

/// Samples the surface over `domain`. Zero resolutions are raised to one.
pub fn generate(rows: usize, cols: usize, domain: Domain) -> Mesh {
    let rows = rows.max(1);
    let cols = cols.max(1);

    let mut mesh = Mesh {
        rows,
        cols,
        domain,
        vertices: Vec::with_capacity((rows + 1) * (cols + 1)),
    };

    for i in 0..=rows {
        for j in 0..=cols {
            let (u, v) = mesh.parameters(i, j);
            mesh.vertices.push(enneper(u, v));
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: Domain = Domain {
        u_min: -2.0,
        u_max: 2.0,
        v_min: -2.0,
        v_max: 2.0,
    };

    #[test]
    fn lattice_has_one_more_row_and_column_than_cells() {
        let mesh = generate(100, 100, DOMAIN);
        assert_eq!(mesh.rows(), 100);
        assert_eq!(mesh.cols(), 100);
        assert_eq!(mesh.vertices().len(), 101 * 101);
    }

    #[test]
    fn corner_vertex_matches_closed_form() {
        let mesh = generate(2, 2, DOMAIN);
        let p = mesh.vertex(0, 0);

        assert!((p.x - (-22.0 / 3.0)).abs() < 1e-4, "x = {}", p.x);
        assert!((p.y - (-22.0 / 3.0)).abs() < 1e-4, "y = {}", p.y);
        assert!(p.z.abs() < 1e-6);
    }

    #[test]
    fn centre_of_even_grid_is_origin() {
        let mesh = generate(2, 2, DOMAIN);
        assert!(mesh.vertex(1, 1).length() < 1e-6);
    }

    #[test]
    fn every_vertex_reproduces_from_its_parameters() {
        let mesh = generate(100, 100, DOMAIN);

        for i in 0..=100 {
            for j in 0..=100 {
                let u = -2.0 + 4.0 * i as f32 / 100.0;
                let v = -2.0 + 4.0 * j as f32 / 100.0;
                let p = mesh.vertex(i, j);

                assert!((p.z - (u * u - v * v)).abs() < 1e-4);
                assert!((p - enneper(u, v)).length() < 1e-4, "({i}, {j})");
            }
        }
    }

    #[test]
    fn domain_endpoints_are_hit_exactly() {
        let mesh = generate(7, 3, DOMAIN);
        assert_eq!(mesh.parameters(0, 0), (-2.0, -2.0));
        assert_eq!(mesh.parameters(7, 3), (2.0, 2.0));
    }

    #[test]
    fn surface_is_symmetric_under_parameter_swap() {
        // Swapping u and v swaps x and y and negates z.
        let a = enneper(0.7, -1.3);
        let b = enneper(-1.3, 0.7);
        assert!((a.x - b.y).abs() < 1e-5);
        assert!((a.y - b.x).abs() < 1e-5);
        assert!((a.z + b.z).abs() < 1e-5);
    }

    #[test]
    fn zero_resolution_is_raised_to_one() {
        let mesh = generate(0, 0, DOMAIN);
        assert_eq!(mesh.vertices().len(), 4);
        assert!(mesh.vertices().iter().all(|p| p.is_finite()));
    }
}
