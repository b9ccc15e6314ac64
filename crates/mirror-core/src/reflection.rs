//! Planar reflection matrices.

use glam::{Mat4, Vec3, Vec4};

use crate::plane::Plane;

/// Computes the reflection matrix for a plane with a unit normal.
///
/// The resulting matrix maps every point to its mirror image across the plane.
#[must_use]
pub fn reflection_matrix(plane: &Plane) -> Mat4 {
    let n = plane.normal;
    let d = plane.constant;

    // | 1-2nx²   -2nxny   -2nxnz   -2nxd |
    // | -2nxny   1-2ny²   -2nynz   -2nyd |
    // | -2nxnz   -2nynz   1-2nz²   -2nzd |
    // |    0        0        0       1   |
    Mat4::from_cols(
        Vec4::new(1.0 - 2.0 * n.x * n.x, -2.0 * n.x * n.y, -2.0 * n.x * n.z, 0.0),
        Vec4::new(-2.0 * n.x * n.y, 1.0 - 2.0 * n.y * n.y, -2.0 * n.y * n.z, 0.0),
        Vec4::new(-2.0 * n.x * n.z, -2.0 * n.y * n.z, 1.0 - 2.0 * n.z * n.z, 0.0),
        Vec4::new(-2.0 * n.x * d, -2.0 * n.y * d, -2.0 * n.z * d, 1.0),
    )
}

/// Computes a reflection matrix for a plane given by a point and normal.
///
/// Returns `None` when the normal has zero length.
#[must_use]
pub fn reflection_matrix_from_point_normal(plane_point: Vec3, plane_normal: Vec3) -> Option<Mat4> {
    Plane::from_point_normal(plane_point, plane_normal)
        .ok()
        .map(|plane| reflection_matrix(&plane))
}

/// Computes a reflection matrix for a horizontal ground mirror at given height.
///
/// Assumes Y-up coordinate system.
#[must_use]
pub fn ground_reflection_matrix(height: f32) -> Mat4 {
    reflection_matrix(&Plane::new(Vec3::Y, -height))
}

/// Mirrors a world transform across the plane: `R * world`.
#[must_use]
pub fn reflect_transform(plane: &Plane, world: &Mat4) -> Mat4 {
    reflection_matrix(plane) * *world
}
