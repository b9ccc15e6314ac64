//! Stencil-masked mirror pass orchestration.
//!
//! This crate drives one mirror's reflected pass against a host renderer:
//! - [`RenderHost`] trait describing the renderer and stereo state it borrows
//! - [`StencilConfig`] for the primary (write) and reflected (mask) passes
//! - [`WindingStrategy`] swapped in to invert front faces while mirrored
//! - [`MirrorSurface`] with the per-frame render and after-render hooks

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Getters return plain values that don't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod host;
pub mod pass;
pub mod stencil;
pub mod surface;
pub mod winding;

#[cfg(test)]
mod test_host;

pub use error::{RenderError, RenderResult};
pub use host::{RenderHost, RenderView, Viewer};
pub use pass::PassState;
pub use stencil::StencilConfig;
pub use surface::{MirrorSurface, PassOutcome, SkipReason};
pub use winding::{DefaultWinding, MirroredWinding, WindingStrategy};
