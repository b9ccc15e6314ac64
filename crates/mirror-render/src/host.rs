//! The interface a host renderer exposes to mirror passes.

use std::rc::Rc;

use mirror_core::{CameraRecord, StereoRig};

use crate::stencil::StencilConfig;
use crate::winding::WindingStrategy;

/// Which camera(s) a draw goes through.
#[derive(Debug, Clone, Copy)]
pub enum RenderView<'a> {
    /// A single camera (flat display or the reflected mono camera).
    Mono(&'a CameraRecord),
    /// The host's own stereo rig: eyes for drawing, combined camera for culling.
    Stereo,
}

/// The camera a host render hook was invoked for.
#[derive(Debug, Clone, Copy)]
pub enum Viewer<'a> {
    /// A flat-display camera.
    Mono(&'a CameraRecord),
    /// Eye `index` of the host's stereo rig.
    Eye(usize),
}

/// Renderer state and entry points a mirror pass needs.
///
/// Every setter here is shared state. A mirror pass owns it exclusively for
/// its duration and restores the previous values before returning, so
/// mirrors are serialized by the host's per-object hook order.
pub trait RenderHost {
    /// Scene graph root passed through to [`RenderHost::render`].
    type Scene: ?Sized;

    /// Whether color and depth are cleared automatically before each render.
    fn autoclear(&self) -> bool;
    fn set_autoclear(&mut self, enabled: bool);

    /// Clears the depth buffer of the current target.
    fn clear_depth(&mut self);

    /// Current stencil test configuration.
    fn stencil(&self) -> StencilConfig;
    fn set_stencil(&mut self, config: StencilConfig);

    /// Strategy deciding the front-face winding of each draw.
    fn winding(&self) -> Rc<dyn WindingStrategy>;
    fn set_winding(&mut self, strategy: Rc<dyn WindingStrategy>);

    /// Whether stereo presentation is active.
    fn is_presenting(&self) -> bool;

    /// The stereo rig, if the host has one.
    fn stereo(&self) -> Option<&StereoRig>;
    fn stereo_mut(&mut self) -> Option<&mut StereoRig>;

    /// Draws the scene through `view` and returns when done.
    fn render(&mut self, scene: &Self::Scene, view: RenderView<'_>);
}
