//! In-memory host for running mirror passes without a GPU.
//!
//! [`RecordingHost`] implements [`RenderHost`] by recording every state
//! mutation and every draw. It is used by the integration tests and is handy
//! for checking a host integration's expectations frame by frame.

use std::rc::Rc;

use mirror_core::{CameraRecord, MirrorOptions, StereoRig};
use mirror_render::{
    DefaultWinding, MirrorSurface, PassOutcome, RenderHost, RenderResult, RenderView,
    StencilConfig, Viewer, WindingStrategy,
};

/// A scene graph containing only mirrors.
#[derive(Debug, Default)]
pub struct MirrorScene {
    mirrors: Vec<Rc<MirrorSurface>>,
}

impl MirrorScene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mirror and returns a handle to it.
    pub fn add_mirror(&mut self, options: MirrorOptions) -> RenderResult<Rc<MirrorSurface>> {
        let mirror = Rc::new(MirrorSurface::new(options)?);
        self.mirrors.push(Rc::clone(&mirror));
        Ok(mirror)
    }

    /// Mirrors in hook order.
    #[must_use]
    pub fn mirrors(&self) -> &[Rc<MirrorSurface>] {
        &self.mirrors
    }
}

/// Cameras a recorded draw went through.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawView {
    Mono(CameraRecord),
    Stereo {
        eyes: Vec<CameraRecord>,
        combined: CameraRecord,
    },
}

/// Host state observed at the moment of a draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRecord {
    pub view: DrawView,
    pub stencil: StencilConfig,
    pub autoclear: bool,
    /// Front face chosen for a counter-clockwise material.
    pub front_face: wgpu::FrontFace,
    /// Ids of mirrors hidden during the draw.
    pub hidden_mirrors: Vec<u32>,
}

/// A state mutation performed through the [`RenderHost`] interface.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    SetAutoclear(bool),
    ClearDepth,
    SetStencil(StencilConfig),
    SetWinding,
    Render,
}

/// A [`RenderHost`] that records instead of drawing.
pub struct RecordingHost {
    autoclear: bool,
    stencil: StencilConfig,
    winding: Rc<dyn WindingStrategy>,
    presenting: bool,
    rig: Option<StereoRig>,
    draws: Vec<DrawRecord>,
    events: Vec<HostEvent>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingHost {
    /// Creates a flat-display host with autoclear on and the stencil test off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            autoclear: true,
            stencil: StencilConfig::default(),
            winding: Rc::new(DefaultWinding),
            presenting: false,
            rig: None,
            draws: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Creates a host presenting through `rig`.
    #[must_use]
    pub fn with_stereo(rig: StereoRig) -> Self {
        Self {
            presenting: rig.presenting,
            rig: Some(rig),
            ..Self::new()
        }
    }

    /// Overrides whether the host reports stereo presentation.
    pub fn set_presenting(&mut self, presenting: bool) {
        self.presenting = presenting;
    }

    /// Recorded draws, oldest first.
    #[must_use]
    pub fn draws(&self) -> &[DrawRecord] {
        &self.draws
    }

    /// Recorded state mutations, oldest first.
    #[must_use]
    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// The stereo rig, if any.
    #[must_use]
    pub fn rig(&self) -> Option<&StereoRig> {
        self.rig.as_ref()
    }

    /// Current autoclear flag.
    #[must_use]
    pub fn autoclear_enabled(&self) -> bool {
        self.autoclear
    }

    /// Current stencil state.
    #[must_use]
    pub fn stencil_config(&self) -> StencilConfig {
        self.stencil
    }

    /// Front face the active strategy picks for a counter-clockwise material.
    #[must_use]
    pub fn front_face(&self) -> wgpu::FrontFace {
        self.winding.front_face(false)
    }

    /// Forgets recorded draws and events.
    pub fn clear_records(&mut self) {
        self.draws.clear();
        self.events.clear();
    }

    /// Runs every mirror's after-render hook for one frame.
    ///
    /// Flat hosts invoke each hook once with `viewer`; stereo hosts invoke it
    /// once per eye in rig order. Mirrors run one after another, never
    /// interleaved.
    pub fn run_frame(
        &mut self,
        scene: &MirrorScene,
        viewer: &CameraRecord,
    ) -> RenderResult<Vec<PassOutcome>> {
        let eye_count = if self.presenting {
            self.rig.as_ref().map_or(0, StereoRig::eye_count)
        } else {
            0
        };

        let mut outcomes = Vec::new();
        for mirror in scene.mirrors() {
            if eye_count == 0 {
                outcomes.push(mirror.on_after_render(self, scene, Viewer::Mono(viewer))?);
            } else {
                for eye in 0..eye_count {
                    outcomes.push(mirror.on_after_render(self, scene, Viewer::Eye(eye))?);
                }
            }
        }
        Ok(outcomes)
    }
}

impl RenderHost for RecordingHost {
    type Scene = MirrorScene;

    fn autoclear(&self) -> bool {
        self.autoclear
    }

    fn set_autoclear(&mut self, enabled: bool) {
        self.events.push(HostEvent::SetAutoclear(enabled));
        self.autoclear = enabled;
    }

    fn clear_depth(&mut self) {
        self.events.push(HostEvent::ClearDepth);
    }

    fn stencil(&self) -> StencilConfig {
        self.stencil
    }

    fn set_stencil(&mut self, config: StencilConfig) {
        self.events.push(HostEvent::SetStencil(config));
        self.stencil = config;
    }

    fn winding(&self) -> Rc<dyn WindingStrategy> {
        Rc::clone(&self.winding)
    }

    fn set_winding(&mut self, strategy: Rc<dyn WindingStrategy>) {
        self.events.push(HostEvent::SetWinding);
        self.winding = strategy;
    }

    fn is_presenting(&self) -> bool {
        self.presenting
    }

    fn stereo(&self) -> Option<&StereoRig> {
        self.rig.as_ref()
    }

    fn stereo_mut(&mut self) -> Option<&mut StereoRig> {
        self.rig.as_mut()
    }

    fn render(&mut self, scene: &Self::Scene, view: RenderView<'_>) {
        let view = match view {
            RenderView::Mono(camera) => DrawView::Mono(*camera),
            RenderView::Stereo => match &self.rig {
                Some(rig) => DrawView::Stereo {
                    eyes: rig.eyes.clone(),
                    combined: rig.combined,
                },
                None => {
                    log::error!("stereo draw requested without a stereo rig");
                    return;
                }
            },
        };
        log::debug!("recording draw through {view:?}");

        self.events.push(HostEvent::Render);
        self.draws.push(DrawRecord {
            view,
            stencil: self.stencil,
            autoclear: self.autoclear,
            front_face: self.winding.front_face(false),
            hidden_mirrors: scene
                .mirrors()
                .iter()
                .filter(|mirror| !mirror.is_visible())
                .map(|mirror| mirror.mirror_id())
                .collect(),
        });
    }
}
