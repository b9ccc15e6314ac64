//! planar-mirror: physically-correct planar mirror reflections.
//!
//! A mirror writes its id into the stencil buffer during the primary pass.
//! Its after-render hook then re-renders the scene through a camera
//! reflected across the mirror plane, masked to those pixels, with the near
//! plane tilted onto the mirror so nothing behind it leaks into the
//! reflection. Stereo rigs are reflected per eye and culled through a
//! synthesized union frustum.
//!
//! # Quick Start
//!
//! ```
//! use planar_mirror::headless::{MirrorScene, RecordingHost};
//! use planar_mirror::*;
//!
//! # fn main() -> std::result::Result<(), RenderError> {
//! init_logging();
//!
//! let mut scene = MirrorScene::new();
//! let mirror = scene.add_mirror(MirrorOptions::default())?;
//! mirror.set_world_transform(Mat4::IDENTITY);
//!
//! let viewer = CameraRecord::default()
//!     .looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y)?;
//! let mut host = RecordingHost::new();
//! let outcomes = host.run_frame(&scene, &viewer)?;
//! assert_eq!(outcomes[0], PassOutcome::Rendered { eyes: 1 });
//! # Ok(())
//! # }
//! ```
//!
//! # Host contract
//!
//! - Call [`MirrorSurface::on_after_render`] once per viewer camera, after
//!   the primary pass stamped the mirror's stencil id.
//! - Draw the mirror with [`MirrorSurface::primary_stencil`] and skip it
//!   while [`MirrorSurface::is_visible`] is false.
//! - Honor the [`WindingStrategy`] installed through [`RenderHost::set_winding`].

pub mod headless;

// Re-export core types
pub use mirror_core::{
    any_viewer_in_front, apply_oblique_clip, clip_camera_to_plane, ground_reflection_matrix,
    off_axis_perspective, prepare_flat_reflection, prepare_stereo_reflection, reflect_camera,
    reflect_transform, reflection_matrix, reflection_matrix_from_point_normal, viewer_in_front,
    CameraRecord, Frustum, FrustumUnion, HookEye, LayerMask, Mat4, MirrorError, MirrorOptions,
    Plane, Quat, Result, StereoRig, StereoSnapshot, Transform, Vec3, Vec4, VirtualCamera,
    MAX_MIRROR_ID,
};

// Re-export render types
pub use mirror_render::{
    DefaultWinding, MirrorSurface, MirroredWinding, PassOutcome, PassState, RenderError,
    RenderHost, RenderResult, RenderView, SkipReason, StencilConfig, Viewer, WindingStrategy,
};

/// Initializes `env_logger` from `RUST_LOG`. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
