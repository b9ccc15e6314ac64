//! Minimal in-memory host for unit tests.

use std::rc::Rc;

use mirror_core::{CameraRecord, StereoRig};

use crate::host::{RenderHost, RenderView};
use crate::stencil::StencilConfig;
use crate::surface::MirrorSurface;
use crate::winding::{DefaultWinding, WindingStrategy};

pub(crate) struct Draw {
    pub camera: Option<CameraRecord>,
    pub rig: Option<StereoRig>,
    pub stencil: StencilConfig,
    pub autoclear: bool,
    pub ccw_front_face: wgpu::FrontFace,
    pub visible_mirrors: Vec<u32>,
}

pub(crate) struct TestHost {
    pub autoclear: bool,
    pub stencil: StencilConfig,
    pub winding: Rc<dyn WindingStrategy>,
    pub presenting: bool,
    pub rig: Option<StereoRig>,
    pub depth_clears: usize,
    pub draws: Vec<Draw>,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            autoclear: true,
            stencil: StencilConfig::default(),
            winding: Rc::new(DefaultWinding),
            presenting: false,
            rig: None,
            depth_clears: 0,
            draws: Vec::new(),
        }
    }

    pub fn stereo(rig: StereoRig) -> Self {
        Self {
            presenting: true,
            rig: Some(rig),
            ..Self::new()
        }
    }
}

impl RenderHost for TestHost {
    type Scene = Vec<Rc<MirrorSurface>>;

    fn autoclear(&self) -> bool {
        self.autoclear
    }

    fn set_autoclear(&mut self, enabled: bool) {
        self.autoclear = enabled;
    }

    fn clear_depth(&mut self) {
        self.depth_clears += 1;
    }

    fn stencil(&self) -> StencilConfig {
        self.stencil
    }

    fn set_stencil(&mut self, config: StencilConfig) {
        self.stencil = config;
    }

    fn winding(&self) -> Rc<dyn WindingStrategy> {
        Rc::clone(&self.winding)
    }

    fn set_winding(&mut self, strategy: Rc<dyn WindingStrategy>) {
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
        let camera = match view {
            RenderView::Mono(camera) => Some(*camera),
            RenderView::Stereo => None,
        };
        self.draws.push(Draw {
            camera,
            rig: self.rig.clone(),
            stencil: self.stencil,
            autoclear: self.autoclear,
            ccw_front_face: self.winding.front_face(false),
            visible_mirrors: scene
                .iter()
                .filter(|mirror| mirror.is_visible())
                .map(|mirror| mirror.mirror_id())
                .collect(),
        });
    }
}
