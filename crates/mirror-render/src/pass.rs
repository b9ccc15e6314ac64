//! Reflected pass state machine and scoped host-state restoration.

use std::cell::Cell;
use std::rc::Rc;

use mirror_core::{StereoRig, StereoSnapshot};

use crate::host::{RenderHost, RenderView};
use crate::stencil::StencilConfig;
use crate::winding::{MirroredWinding, WindingStrategy};

/// Phase of a mirror's reflected pass within the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassState {
    /// No pass in progress.
    #[default]
    Idle,
    /// Host state is being snapshotted and configured.
    PreparingPass,
    /// The reflected scene is being drawn.
    Rendering,
    /// Host state is being restored.
    Restoring,
}

/// Host state captured before the pass touches anything.
struct Snapshot {
    autoclear: bool,
    stencil: StencilConfig,
    winding: Rc<dyn WindingStrategy>,
    camera_auto_update: Option<bool>,
    stereo: Option<StereoSnapshot>,
}

/// Exclusive access to the host for one reflected pass.
///
/// Everything the pass may mutate is snapshotted on [`PassGuard::begin`] and
/// written back in reverse order of mutation when the guard drops, on every
/// exit path.
pub(crate) struct PassGuard<'a, H: RenderHost> {
    host: &'a mut H,
    state: &'a Cell<PassState>,
    snapshot: Snapshot,
}

impl<'a, H: RenderHost> PassGuard<'a, H> {
    pub(crate) fn begin(host: &'a mut H, state: &'a Cell<PassState>) -> Self {
        state.set(PassState::PreparingPass);
        log::trace!("mirror pass: preparing");

        let snapshot = Snapshot {
            autoclear: host.autoclear(),
            stencil: host.stencil(),
            winding: host.winding(),
            camera_auto_update: host.stereo().map(|rig| rig.camera_auto_update),
            stereo: host.stereo().map(StereoSnapshot::capture),
        };

        Self {
            host,
            state,
            snapshot,
        }
    }

    /// The host's stereo rig, for in-place camera reflection.
    pub(crate) fn stereo_mut(&mut self) -> Option<&mut StereoRig> {
        self.host.stereo_mut()
    }

    /// Puts the host in the reflected-pass configuration: head tracking
    /// frozen, winding inverted, stencil masked to `mirror_id`, optional
    /// depth clear, autoclear off.
    pub(crate) fn configure(&mut self, mirror_id: u32, clear_depth: bool) {
        if let Some(rig) = self.host.stereo_mut() {
            rig.camera_auto_update = false;
        }
        let mirrored = MirroredWinding::new(Rc::clone(&self.snapshot.winding));
        self.host.set_winding(Rc::new(mirrored));
        self.host.set_stencil(StencilConfig::mirror_mask(mirror_id));
        if clear_depth {
            self.host.clear_depth();
        }
        self.host.set_autoclear(false);
    }

    pub(crate) fn render(&mut self, scene: &H::Scene, view: RenderView<'_>) {
        self.state.set(PassState::Rendering);
        log::trace!("mirror pass: rendering");
        self.host.render(scene, view);
    }
}

impl<H: RenderHost> Drop for PassGuard<'_, H> {
    fn drop(&mut self) {
        self.state.set(PassState::Restoring);
        log::trace!("mirror pass: restoring");

        self.host.set_autoclear(self.snapshot.autoclear);
        self.host.set_stencil(self.snapshot.stencil);
        self.host.set_winding(Rc::clone(&self.snapshot.winding));
        if let Some(rig) = self.host.stereo_mut() {
            if let Some(auto_update) = self.snapshot.camera_auto_update {
                rig.camera_auto_update = auto_update;
            }
            if let Some(stereo) = &self.snapshot.stereo {
                stereo.restore(rig);
            }
        }

        self.state.set(PassState::Idle);
    }
}
