//! Front-face winding strategies.
//!
//! A reflection flips handedness, so triangles that were counter-clockwise
//! on screen become clockwise. Instead of patching the renderer, the pass
//! installs a [`MirroredWinding`] around the previously active strategy and
//! puts the original back afterwards.

use std::rc::Rc;

/// Decides which winding is front-facing for a draw.
pub trait WindingStrategy {
    /// Returns the front face given the material's "clockwise is front" flag.
    fn front_face(&self, clockwise: bool) -> wgpu::FrontFace;
}

/// Identity strategy: the flag maps directly onto the winding.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultWinding;

impl WindingStrategy for DefaultWinding {
    fn front_face(&self, clockwise: bool) -> wgpu::FrontFace {
        if clockwise {
            wgpu::FrontFace::Cw
        } else {
            wgpu::FrontFace::Ccw
        }
    }
}

/// Inverts the flag before delegating to the wrapped strategy.
pub struct MirroredWinding {
    inner: Rc<dyn WindingStrategy>,
}

impl MirroredWinding {
    /// Wraps `inner`.
    #[must_use]
    pub fn new(inner: Rc<dyn WindingStrategy>) -> Self {
        Self { inner }
    }
}

impl WindingStrategy for MirroredWinding {
    fn front_face(&self, clockwise: bool) -> wgpu::FrontFace {
        self.inner.front_face(!clockwise)
    }
}
