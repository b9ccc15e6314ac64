//! Stencil configurations for the primary and reflected passes.

/// Stencil test state as the host renderer tracks it.
///
/// The reference value is dynamic pipeline state in wgpu
/// (`RenderPass::set_stencil_reference`), so it is kept next to the
/// `wgpu::StencilState` fields here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StencilConfig {
    /// Whether the stencil test runs at all.
    pub enabled: bool,
    /// Comparison against the reference value.
    pub compare: wgpu::CompareFunction,
    /// Reference value.
    pub reference: u32,
    /// Mask applied to both reference and buffer value before comparing.
    pub read_mask: u32,
    /// Mask applied when writing.
    pub write_mask: u32,
    /// Operation when the stencil test fails.
    pub fail_op: wgpu::StencilOperation,
    /// Operation when stencil passes but depth fails.
    pub depth_fail_op: wgpu::StencilOperation,
    /// Operation when both tests pass.
    pub pass_op: wgpu::StencilOperation,
    /// Whether materials are prevented from overriding this state.
    pub locked: bool,
}

impl Default for StencilConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            compare: wgpu::CompareFunction::Always,
            reference: 0,
            read_mask: 0xFF,
            write_mask: 0xFF,
            fail_op: wgpu::StencilOperation::Keep,
            depth_fail_op: wgpu::StencilOperation::Keep,
            pass_op: wgpu::StencilOperation::Keep,
            locked: false,
        }
    }
}

impl StencilConfig {
    /// State for drawing the mirror surface in the primary pass: stamp the
    /// mirror id wherever the surface passes the depth test.
    #[must_use]
    pub fn mirror_write(mirror_id: u32) -> Self {
        Self {
            enabled: true,
            compare: wgpu::CompareFunction::Always,
            reference: mirror_id,
            pass_op: wgpu::StencilOperation::Replace,
            ..Self::default()
        }
    }

    /// State for the reflected pass: draw only where the mirror id was
    /// stamped, leave the buffer untouched, and lock out material overrides.
    #[must_use]
    pub fn mirror_mask(mirror_id: u32) -> Self {
        Self {
            enabled: true,
            compare: wgpu::CompareFunction::Equal,
            reference: mirror_id,
            locked: true,
            ..Self::default()
        }
    }

    /// Per-face stencil state. Disabled tests always pass and keep the buffer.
    #[must_use]
    pub fn face_state(&self) -> wgpu::StencilFaceState {
        if !self.enabled {
            return wgpu::StencilFaceState::IGNORE;
        }
        wgpu::StencilFaceState {
            compare: self.compare,
            fail_op: self.fail_op,
            depth_fail_op: self.depth_fail_op,
            pass_op: self.pass_op,
        }
    }

    /// Pipeline stencil state, applied to both faces.
    #[must_use]
    pub fn to_wgpu(&self) -> wgpu::StencilState {
        if !self.enabled {
            return wgpu::StencilState::default();
        }
        wgpu::StencilState {
            front: self.face_state(),
            back: self.face_state(),
            read_mask: self.read_mask,
            write_mask: self.write_mask,
        }
    }
}
