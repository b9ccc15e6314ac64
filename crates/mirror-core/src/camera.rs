//! Camera records shared between the host and the mirror pass.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{MirrorError, Result};

/// Visibility-layer bitmask. A camera draws objects whose layers intersect its mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerMask(pub u32);

impl Default for LayerMask {
    fn default() -> Self {
        Self(1)
    }
}

impl LayerMask {
    /// Mask with every layer enabled.
    pub const ALL: Self = Self(u32::MAX);

    /// Mask with only `layer` enabled.
    #[must_use]
    pub fn only(layer: u32) -> Self {
        Self(1 << layer)
    }

    /// Returns whether `layer` is enabled.
    #[must_use]
    pub fn contains(self, layer: u32) -> bool {
        self.0 & (1 << layer) != 0
    }

    /// Returns whether the two masks share a layer.
    #[must_use]
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

/// The camera state a pass reads and mutates: pose, view and projection.
///
/// Projection matrices use the OpenGL clip convention (z in [-1, 1]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRecord {
    /// Camera-to-world transform.
    pub world: Mat4,
    /// World-to-camera (view) transform.
    pub world_inverse: Mat4,
    /// Projection matrix.
    pub projection: Mat4,
    /// Visibility layers.
    pub layers: LayerMask,
    /// Near clipping distance.
    pub near: f32,
    /// Far clipping distance.
    pub far: f32,
}

impl Default for CameraRecord {
    fn default() -> Self {
        Self::perspective(std::f32::consts::FRAC_PI_4, 1.0, 0.1, 100.0)
    }
}

impl CameraRecord {
    /// Creates a camera at the origin looking down -Z with a symmetric perspective.
    #[must_use]
    pub fn perspective(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        Self {
            world: Mat4::IDENTITY,
            world_inverse: Mat4::IDENTITY,
            projection: Mat4::perspective_rh_gl(fov_y, aspect_ratio, near, far),
            layers: LayerMask::default(),
            near,
            far,
        }
    }

    /// Returns this camera moved to `world`.
    pub fn with_world(mut self, world: Mat4) -> Result<Self> {
        self.set_world(world)?;
        Ok(self)
    }

    /// Returns this camera placed at `eye` looking at `target`.
    pub fn looking_at(self, eye: Vec3, target: Vec3, up: Vec3) -> Result<Self> {
        self.with_world(Mat4::look_at_rh(eye, target, up).inverse())
    }

    /// Sets the world transform and recomputes its inverse.
    pub fn set_world(&mut self, world: Mat4) -> Result<()> {
        let det = world.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(MirrorError::SingularTransform);
        }
        self.world = world;
        self.world_inverse = world.inverse();
        Ok(())
    }

    /// Camera position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.world.w_axis.truncate()
    }

    /// Viewing direction (local -Z) in world space.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (-self.world.z_axis.truncate()).normalize_or_zero()
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.world_inverse
    }
}
