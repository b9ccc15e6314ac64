//! Core math for planar-mirror.
//!
//! This crate computes everything a stencil-masked mirror pass needs, with no
//! dependency on a graphics API:
//! - [`Plane`] extraction from the mirror's world transform
//! - The visibility gate ([`viewer_in_front`], [`any_viewer_in_front`])
//! - Reflection matrices and reflected cameras ([`reflect_camera`])
//! - The stereo [`FrustumUnion`] used for culling
//! - Oblique near-plane clipping ([`apply_oblique_clip`])

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Frustum math uses the conventional single-letter names
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod camera;
pub mod error;
pub mod frustum;
pub mod oblique;
pub mod options;
pub mod plane;
pub mod reflection;
pub mod reflection_camera;
pub mod stereo;
pub mod transform;
pub mod visibility;

pub use camera::{CameraRecord, LayerMask};
pub use error::{MirrorError, Result};
pub use frustum::{off_axis_perspective, Frustum, FrustumUnion};
pub use oblique::{apply_oblique_clip, clip_camera_to_plane};
pub use options::{HookEye, MirrorOptions, MAX_MIRROR_ID};
pub use plane::Plane;
pub use reflection::{
    ground_reflection_matrix, reflect_transform, reflection_matrix,
    reflection_matrix_from_point_normal,
};
pub use reflection_camera::{
    prepare_flat_reflection, prepare_stereo_reflection, reflect_camera, VirtualCamera,
};
pub use stereo::{StereoRig, StereoSnapshot};
pub use transform::Transform;
pub use visibility::{any_viewer_in_front, viewer_in_front};

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, Vec3, Vec4};
