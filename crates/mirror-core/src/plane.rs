//! Mirror plane extraction.
//!
//! A mirror's reflection plane is its local XY plane: the normal is the
//! local +Z axis carried into world space, and the plane passes through the
//! mirror's world position. Planes are cheap and are rebuilt every frame from
//! the current world transform, since the mirror or any of its parents may be
//! animated.

use glam::{Mat3, Mat4, Quat, Vec3, Vec4};

use crate::error::{MirrorError, Result};

/// Squared length below which a normal is treated as zero.
const DEGENERATE_EPSILON: f32 = 1e-12;

/// An oriented plane `normal · p + constant = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal, pointing to the reflective side.
    pub normal: Vec3,
    /// Signed distance term (`-(point · normal)` for any point on the plane).
    pub constant: f32,
}

impl Plane {
    /// Creates a plane from an already-normalized normal and constant.
    #[must_use]
    pub fn new(normal: Vec3, constant: f32) -> Self {
        Self { normal, constant }
    }

    /// Creates a plane through `point` with the given (not necessarily unit) normal.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Result<Self> {
        if !normal.is_finite() || normal.length_squared() < DEGENERATE_EPSILON {
            return Err(MirrorError::DegeneratePlane);
        }
        let normal = normal.normalize();
        Ok(Self {
            normal,
            constant: -point.dot(normal),
        })
    }

    /// Creates the mirror plane from a world position and world orientation.
    ///
    /// The normal is the local +Z axis rotated into world space.
    pub fn from_pose(position: Vec3, rotation: Quat) -> Result<Self> {
        Self::from_point_normal(position, rotation * Vec3::Z)
    }

    /// Creates the mirror plane from a world matrix.
    ///
    /// A zero scale along local Z collapses the normal and yields
    /// [`MirrorError::DegeneratePlane`].
    pub fn from_world_matrix(world: &Mat4) -> Result<Self> {
        let position = world.w_axis.truncate();
        Self::from_point_normal(position, world.transform_vector3(Vec3::Z))
    }

    /// Returns the signed distance from `point` to the plane.
    ///
    /// Positive values are on the reflective side.
    #[must_use]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }

    /// Returns the point on the plane closest to the origin.
    #[must_use]
    pub fn coplanar_point(&self) -> Vec3 {
        self.normal * -self.constant
    }

    /// Projects `point` orthogonally onto the plane.
    #[must_use]
    pub fn project_point(&self, point: Vec3) -> Vec3 {
        point - self.normal * self.signed_distance(point)
    }

    /// Transforms the plane by an affine matrix.
    ///
    /// The normal goes through the inverse transpose of the upper 3x3 so the
    /// result stays perpendicular under non-uniform scale.
    #[must_use]
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        let normal_matrix = Mat3::from_mat4(*matrix).inverse().transpose();
        let point = matrix.transform_point3(self.coplanar_point());
        let normal = (normal_matrix * self.normal).normalize();
        Self {
            normal,
            constant: -point.dot(normal),
        }
    }

    /// Returns the plane as `(nx, ny, nz, constant)`.
    #[must_use]
    pub fn to_vec4(&self) -> Vec4 {
        self.normal.extend(self.constant)
    }
}
