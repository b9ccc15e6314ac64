//! Perspective frustum extents and the stereo frustum union.
//!
//! The reflected pass draws through one synthesized camera whose frustum
//! covers both reflected eyes. The union is only used for culling; each eye
//! still renders with its own pose and projection.

use glam::{Mat4, Vec4};

use crate::camera::CameraRecord;
use crate::error::Result;
use crate::transform::Transform;

/// Extents of an off-axis perspective frustum, measured on the near plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
}

impl Frustum {
    /// Recovers the extents from an OpenGL-convention perspective matrix.
    #[must_use]
    pub fn from_projection(projection: &Mat4) -> Self {
        let near = projection.w_axis.z / (projection.z_axis.z - 1.0);
        let far = projection.w_axis.z / (projection.z_axis.z + 1.0);
        Self {
            left: near * tangents_x(projection).0,
            right: near * tangents_x(projection).1,
            top: near * tangents_y(projection).0,
            bottom: near * tangents_y(projection).1,
            near,
            far,
        }
    }

    /// Builds the projection matrix for these extents.
    #[must_use]
    pub fn to_projection(&self) -> Mat4 {
        off_axis_perspective(
            self.left,
            self.right,
            self.top,
            self.bottom,
            self.near,
            self.far,
        )
    }
}

/// Left and right half-angle tangents `(left/near, right/near)`.
fn tangents_x(projection: &Mat4) -> (f32, f32) {
    (
        (projection.z_axis.x - 1.0) / projection.x_axis.x,
        (projection.z_axis.x + 1.0) / projection.x_axis.x,
    )
}

/// Top and bottom half-angle tangents `(top/near, bottom/near)`.
fn tangents_y(projection: &Mat4) -> (f32, f32) {
    (
        (projection.z_axis.y + 1.0) / projection.y_axis.y,
        (projection.z_axis.y - 1.0) / projection.y_axis.y,
    )
}

/// Builds an off-axis perspective projection (OpenGL clip convention).
#[must_use]
pub fn off_axis_perspective(left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) -> Mat4 {
    let x = 2.0 * near / (right - left);
    let y = 2.0 * near / (top - bottom);
    let a = (right + left) / (right - left);
    let b = (top + bottom) / (top - bottom);
    let c = -(far + near) / (far - near);
    let d = -2.0 * far * near / (far - near);

    Mat4::from_cols(
        Vec4::new(x, 0.0, 0.0, 0.0),
        Vec4::new(0.0, y, 0.0, 0.0),
        Vec4::new(a, b, c, -1.0),
        Vec4::new(0.0, 0.0, d, 0.0),
    )
}

/// A synthesized camera whose frustum contains both eye frustums.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumUnion {
    /// Pose of the union camera.
    pub pose: Transform,
    /// Extents of the union frustum.
    pub frustum: Frustum,
    /// Sideways offset from the left eye.
    pub x_offset: f32,
    /// Backwards offset from the left eye.
    pub z_offset: f32,
}

impl FrustumUnion {
    /// Computes the union of a left and right eye.
    ///
    /// Near, far, top and bottom come from the left eye; the right edge from
    /// the right eye. The union camera sits behind the eyes, far enough back
    /// that its frustum edges pass through both eyes' outer edges.
    #[must_use]
    pub fn compute(left: &CameraRecord, right: &CameraRecord) -> Self {
        let ipd = left.position().distance(right.position());

        let projection_l = &left.projection;
        let near = projection_l.w_axis.z / (projection_l.z_axis.z - 1.0);
        let far = projection_l.w_axis.z / (projection_l.z_axis.z + 1.0);
        let (top_fov, bottom_fov) = tangents_y(projection_l);
        let left_fov = tangents_x(projection_l).0;
        let right_fov = tangents_x(&right.projection).1;
        let left_extent = near * left_fov;
        let right_extent = near * right_fov;

        // x_offset is roughly half the ipd for symmetric eyes.
        let z_offset = ipd / (-left_fov + right_fov);
        let x_offset = z_offset * -left_fov;

        let mut pose = Transform::from_matrix(left.world);
        pose.translate_x(x_offset);
        pose.translate_z(z_offset);

        // Keep the near plane fixed in world space relative to the moved camera.
        let near2 = near + z_offset;
        let far2 = far + z_offset;
        let frustum = Frustum {
            left: left_extent - x_offset,
            right: right_extent + (ipd - x_offset),
            top: top_fov * far / far2 * near2,
            bottom: bottom_fov * far / far2 * near2,
            near: near2,
            far: far2,
        };

        Self {
            pose,
            frustum,
            x_offset,
            z_offset,
        }
    }

    /// Writes the union pose and projection into `camera`.
    pub fn apply_to(&self, camera: &mut CameraRecord) -> Result<()> {
        camera.set_world(self.pose.to_matrix())?;
        camera.projection = self.frustum.to_projection();
        camera.near = self.frustum.near;
        camera.far = self.frustum.far;
        Ok(())
    }
}
