//! Oblique near-plane clipping.
//!
//! After reflection, geometry behind the mirror lands in front of the
//! virtual camera. Tilting the projection's near plane onto the mirror
//! surface clips it away without an extra pass (Lengyel's method).

use glam::{Mat4, Vec4};

use crate::camera::CameraRecord;
use crate::plane::Plane;

/// Replaces the near plane of `projection` with `clip_plane`, given in view space.
///
/// `clip_plane` is `(nx, ny, nz, d)` with the normal pointing to the side
/// that stays visible. Only the third row of the matrix is rewritten.
pub fn apply_oblique_clip(projection: &mut Mat4, clip_plane: Vec4) {
    // Clip-space corner opposite the plane, mapped back to view space.
    let q = Vec4::new(
        (sign(clip_plane.x) + projection.z_axis.x) / projection.x_axis.x,
        (sign(clip_plane.y) + projection.z_axis.y) / projection.y_axis.y,
        -1.0,
        (1.0 + projection.z_axis.z) / projection.w_axis.z,
    );

    let scaled = clip_plane * (2.0 / clip_plane.dot(q));

    projection.x_axis.z = scaled.x;
    projection.y_axis.z = scaled.y;
    projection.z_axis.z = scaled.z + 1.0;
    projection.w_axis.z = scaled.w;
}

/// Clips `camera`'s projection against a world-space plane.
///
/// The plane is carried into the camera's view space through its current
/// `world_inverse`, so the camera pose must already be final.
pub fn clip_camera_to_plane(camera: &mut CameraRecord, plane: &Plane) {
    let view_plane = plane.transformed(&camera.world_inverse);
    apply_oblique_clip(&mut camera.projection, view_plane.to_vec4());
}

/// Sign with zero mapped to zero.
fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
