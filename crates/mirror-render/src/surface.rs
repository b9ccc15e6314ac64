//! The mirror surface and its per-frame entry points.
//!
//! The host must call [`MirrorSurface::on_after_render`] after the primary
//! pass has stamped this mirror's id into the stencil buffer, and before the
//! frame is finalized. Nothing here enforces that ordering; it is the
//! host's render-hook contract.

use std::cell::Cell;

use glam::{Mat4, Vec3};
use mirror_core::{
    any_viewer_in_front, prepare_flat_reflection, prepare_stereo_reflection, viewer_in_front,
    CameraRecord, MirrorError, MirrorOptions, Plane,
};

use crate::error::{RenderError, RenderResult};
use crate::host::{RenderHost, RenderView, Viewer};
use crate::pass::{PassGuard, PassState};
use crate::stencil::StencilConfig;

/// Why a frame's reflected pass did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The mirror is configured not to render itself.
    RenderSelfDisabled,
    /// The hook was invoked for an eye other than the configured one.
    NotHookEye,
    /// No viewer is on the reflective side.
    FacingAway,
    /// The mirror's transform does not define a plane.
    DegeneratePlane,
}

/// Result of one hook or render invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// The reflected scene was drawn through `eyes` cameras.
    Rendered { eyes: usize },
    /// The pass was skipped.
    Skipped(SkipReason),
}

/// A planar mirror in the scene.
///
/// World transform, visibility and pass state use `Cell` so the host's scene
/// can hold shared references to every mirror while one of them renders.
#[derive(Debug)]
pub struct MirrorSurface {
    options: MirrorOptions,
    world: Cell<Mat4>,
    visible: Cell<bool>,
    state: Cell<PassState>,
}

impl MirrorSurface {
    /// Creates a mirror with the given options at the world origin, facing +Z.
    pub fn new(options: MirrorOptions) -> RenderResult<Self> {
        options.validate()?;
        Ok(Self {
            options,
            world: Cell::new(Mat4::IDENTITY),
            visible: Cell::new(true),
            state: Cell::new(PassState::Idle),
        })
    }

    /// Returns the mirror's options.
    pub fn options(&self) -> &MirrorOptions {
        &self.options
    }

    /// Returns the stencil reference id.
    pub fn mirror_id(&self) -> u32 {
        self.options.mirror_id
    }

    /// Sets the world transform for this frame (after the scene-graph update).
    pub fn set_world_transform(&self, world: Mat4) {
        self.world.set(world);
    }

    /// Returns the current world transform.
    pub fn world_transform(&self) -> Mat4 {
        self.world.get()
    }

    /// Whether the surface should be drawn. False while its own reflection renders.
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Current phase of the reflected pass.
    pub fn pass_state(&self) -> PassState {
        self.state.get()
    }

    /// Stencil state the host uses when drawing this surface in the primary pass.
    pub fn primary_stencil(&self) -> StencilConfig {
        StencilConfig::mirror_write(self.options.mirror_id)
    }

    /// The mirror plane derived from the current world transform.
    pub fn plane(&self) -> mirror_core::Result<Plane> {
        Plane::from_world_matrix(&self.world.get())
    }

    /// After-primary-render hook, invoked by the host once per viewer camera.
    ///
    /// In stereo only the configured hook eye (the last by default) runs the
    /// pass, so it happens once per frame after every eye wrote its stencil.
    pub fn on_after_render<H: RenderHost>(
        &self,
        host: &mut H,
        scene: &H::Scene,
        viewer: Viewer<'_>,
    ) -> RenderResult<PassOutcome> {
        let camera = if host.is_presenting() {
            let rig = host.stereo().ok_or(RenderError::MissingStereoRig)?;
            rig.require_eyes(self.options.stereo_eye_count)?;
            let hook_eye = self.options.hook_eye.index(rig.eye_count());
            match viewer {
                Viewer::Eye(index) if index == hook_eye => rig.eyes[index],
                _ => return Ok(PassOutcome::Skipped(SkipReason::NotHookEye)),
            }
        } else {
            match viewer {
                Viewer::Mono(camera) => *camera,
                Viewer::Eye(index) => return Err(RenderError::EyeWithoutStereo(index)),
            }
        };

        if !self.options.render_self {
            return Ok(PassOutcome::Skipped(SkipReason::RenderSelfDisabled));
        }
        self.render(host, scene, &camera)
    }

    /// Renders this mirror's reflection into its stencil-masked pixels.
    ///
    /// `viewer` is used for flat displays; in stereo the host's eye cameras
    /// are reflected instead. The surface is hidden for the duration.
    pub fn render<H: RenderHost>(
        &self,
        host: &mut H,
        scene: &H::Scene,
        viewer: &CameraRecord,
    ) -> RenderResult<PassOutcome> {
        self.visible.set(false);
        let outcome = self.render_hidden(host, scene, viewer);
        self.visible.set(true);
        outcome
    }

    fn render_hidden<H: RenderHost>(
        &self,
        host: &mut H,
        scene: &H::Scene,
        viewer: &CameraRecord,
    ) -> RenderResult<PassOutcome> {
        let world = self.world.get();
        let plane = match Plane::from_world_matrix(&world) {
            Ok(plane) => plane,
            Err(MirrorError::DegeneratePlane) => {
                log::warn!(
                    "mirror {}: degenerate world transform, skipping reflection",
                    self.options.mirror_id
                );
                return Ok(PassOutcome::Skipped(SkipReason::DegeneratePlane));
            }
            Err(err) => return Err(err.into()),
        };
        let mirror_position = world.w_axis.truncate();

        if host.is_presenting() {
            self.render_stereo(host, scene, &plane, mirror_position)
        } else {
            if !viewer_in_front(&plane, mirror_position, viewer.position()) {
                log::debug!("mirror {}: viewer behind plane", self.options.mirror_id);
                return Ok(PassOutcome::Skipped(SkipReason::FacingAway));
            }

            let reflected = prepare_flat_reflection(viewer, &plane)?;
            let mut pass = PassGuard::begin(host, &self.state);
            pass.configure(self.options.mirror_id, self.options.clear_depth);
            pass.render(scene, RenderView::Mono(&reflected.camera));
            Ok(PassOutcome::Rendered { eyes: 1 })
        }
    }

    fn render_stereo<H: RenderHost>(
        &self,
        host: &mut H,
        scene: &H::Scene,
        plane: &Plane,
        mirror_position: Vec3,
    ) -> RenderResult<PassOutcome> {
        let rig = host.stereo().ok_or(RenderError::MissingStereoRig)?;
        rig.require_eyes(self.options.stereo_eye_count)?;
        let eyes = rig.eye_count();

        let visible = any_viewer_in_front(
            plane,
            mirror_position,
            rig.eyes.iter().map(CameraRecord::position),
        );
        if !visible {
            log::debug!("mirror {}: all eyes behind plane", self.options.mirror_id);
            return Ok(PassOutcome::Skipped(SkipReason::FacingAway));
        }

        let mut pass = PassGuard::begin(host, &self.state);
        let rig = pass.stereo_mut().ok_or(RenderError::MissingStereoRig)?;
        prepare_stereo_reflection(rig, plane)?;
        pass.configure(self.options.mirror_id, self.options.clear_depth);
        pass.render(scene, RenderView::Stereo);
        Ok(PassOutcome::Rendered { eyes })
    }
}
