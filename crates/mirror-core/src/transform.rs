//! Decomposed camera poses.

use glam::{Mat4, Quat, Vec3};

/// A pose represented as separate translation, rotation and scale.
///
/// Reflected camera matrices have a negative determinant. Decomposition
/// keeps that sign in `scale.x`, so `to_matrix` rebuilds the mirrored
/// handedness exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation component.
    pub translation: Vec3,
    /// Rotation component as a quaternion.
    pub rotation: Quat,
    /// Scale component.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Creates a new identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Creates a transform from a Mat4.
    ///
    /// This decomposition may not be exact for matrices with shear.
    #[must_use]
    pub fn from_matrix(matrix: Mat4) -> Self {
        let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Converts this transform to a Mat4.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Returns a local axis in world space, following the sign of the scale.
    ///
    /// For a mirrored pose this is the direction of the matrix column, not
    /// of the bare rotation. Scale magnitude is ignored.
    #[must_use]
    pub fn local_axis(&self, axis: Vec3) -> Vec3 {
        self.rotation * (axis * self.scale.signum())
    }

    /// Moves along a local axis by `distance` world units.
    pub fn translate_local(&mut self, axis: Vec3, distance: f32) {
        self.translation += self.local_axis(axis) * distance;
    }

    /// Moves along the local X axis.
    pub fn translate_x(&mut self, distance: f32) {
        self.translate_local(Vec3::X, distance);
    }

    /// Moves along the local Z axis.
    pub fn translate_z(&mut self, distance: f32) {
        self.translate_local(Vec3::Z, distance);
    }
}
