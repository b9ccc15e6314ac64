//! Reflection camera construction for flat and stereo viewers.

use glam::Mat4;

use crate::camera::CameraRecord;
use crate::error::Result;
use crate::frustum::FrustumUnion;
use crate::oblique::clip_camera_to_plane;
use crate::plane::Plane;
use crate::reflection::reflection_matrix;
use crate::stereo::StereoRig;
use crate::transform::Transform;

/// A virtual camera mirrored across a plane.
///
/// Only the extrinsic pose is mirrored; projection, clip distances and
/// layers are inherited from the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualCamera {
    /// Decomposed mirrored pose (negative `scale.x`).
    pub pose: Transform,
    /// Camera record the host renders through.
    pub camera: CameraRecord,
}

/// Mirrors a single viewer across `plane`.
pub fn reflect_camera(viewer: &CameraRecord, plane: &Plane) -> Result<VirtualCamera> {
    reflect_with(viewer, &reflection_matrix(plane))
}

fn reflect_with(viewer: &CameraRecord, reflection: &Mat4) -> Result<VirtualCamera> {
    let world = *reflection * viewer.world;
    let camera = (*viewer).with_world(world)?;
    Ok(VirtualCamera {
        pose: Transform::from_matrix(world),
        camera,
    })
}

/// Builds the clipped reflection camera for a flat display.
pub fn prepare_flat_reflection(viewer: &CameraRecord, plane: &Plane) -> Result<VirtualCamera> {
    let mut virtual_camera = reflect_camera(viewer, plane)?;
    clip_camera_to_plane(&mut virtual_camera.camera, plane);
    Ok(virtual_camera)
}

/// Mirrors every eye of `rig` in place, synthesizes the culling camera and
/// clips each eye's projection to the mirror.
///
/// Eyes are reflected one by one before the union: reflection does not
/// commute with the inter-eye offset. The caller must snapshot the rig first
/// and must have checked the eye count; the union reads eyes 0 and 1.
pub fn prepare_stereo_reflection(rig: &mut StereoRig, plane: &Plane) -> Result<FrustumUnion> {
    let reflection = reflection_matrix(plane);
    for eye in &mut rig.eyes {
        let world = reflection * eye.world;
        eye.set_world(world)?;
    }

    let union = FrustumUnion::compute(&rig.eyes[0], &rig.eyes[1]);
    log::trace!(
        "stereo union: x_offset={:.4} z_offset={:.4}",
        union.x_offset,
        union.z_offset
    );
    union.apply_to(&mut rig.combined)?;

    for eye in &mut rig.eyes {
        clip_camera_to_plane(eye, plane);
    }
    Ok(union)
}
