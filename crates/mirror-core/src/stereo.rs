//! Stereo (XR) camera rig and pass-scoped snapshots.
//!
//! The stereo subsystem owns one record per eye plus a combined record used
//! for culling. The mirror pass mutates these in place, so every mutation is
//! preceded by a [`StereoSnapshot`] that is written back when the pass ends.

use crate::camera::CameraRecord;
use crate::error::{MirrorError, Result};

/// Shared per-eye camera state of a stereo presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoRig {
    /// Whether stereo presentation is currently active.
    pub presenting: bool,
    /// Eye cameras in enumeration order (left, then right).
    pub eyes: Vec<CameraRecord>,
    /// Synthesized camera covering all eyes, used for culling.
    pub combined: CameraRecord,
    /// Whether eye cameras are synced from head tracking every frame.
    pub camera_auto_update: bool,
}

impl StereoRig {
    /// Creates a presenting rig from a left and right eye.
    #[must_use]
    pub fn new(left: CameraRecord, right: CameraRecord) -> Self {
        Self {
            presenting: true,
            eyes: vec![left, right],
            combined: left,
            camera_auto_update: true,
        }
    }

    /// Returns the number of eye cameras.
    #[must_use]
    pub fn eye_count(&self) -> usize {
        self.eyes.len()
    }

    /// Fails unless the rig exposes exactly `expected` eyes.
    pub fn require_eyes(&self, expected: usize) -> Result<()> {
        if self.eyes.len() == expected {
            Ok(())
        } else {
            Err(MirrorError::EyeCountMismatch {
                expected,
                actual: self.eyes.len(),
            })
        }
    }
}

/// Owned copy of every rig camera a mirror pass may touch.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoSnapshot {
    eyes: Vec<CameraRecord>,
    combined: CameraRecord,
}

impl StereoSnapshot {
    /// Captures eye and combined cameras.
    #[must_use]
    pub fn capture(rig: &StereoRig) -> Self {
        Self {
            eyes: rig.eyes.clone(),
            combined: rig.combined,
        }
    }

    /// Writes the captured cameras back into the rig.
    pub fn restore(&self, rig: &mut StereoRig) {
        for (eye, saved) in rig.eyes.iter_mut().zip(&self.eyes) {
            *eye = *saved;
        }
        rig.combined = self.combined;
    }

    /// Captured eye cameras.
    #[must_use]
    pub fn eyes(&self) -> &[CameraRecord] {
        &self.eyes
    }
}
