use glam::Vec3;

/// Cross products shorter than this are treated as "no normal".
pub const DEGENERATE_EPSILON: f32 = 1e-5;

/// Unit normal of triangle `(p1, p2, p3)`, or `Vec3::ZERO` when the triangle is degenerate.
///
/// Winding follows `(p2 - p1) x (p3 - p1)`. A zero normal contributes no diffuse or
/// specular light; callers must not renormalise it.
#[inline]
pub fn compute_normal(p1: Vec3, p2: Vec3, p3: Vec3) -> Vec3 {
    normalize_or_zero(face_cross(p1, p2, p3))
}

/// Unnormalised `(p2 - p1) x (p3 - p1)`.
#[inline]
pub fn face_cross(p1: Vec3, p2: Vec3, p3: Vec3) -> Vec3 {
    (p2 - p1).cross(p3 - p1)
}

#[inline]
pub fn normalize_or_zero(n: Vec3) -> Vec3 {
    let length = n.length();
    if length > DEGENERATE_EPSILON {
        n / length
    } else {
        Vec3::ZERO
    }
}
