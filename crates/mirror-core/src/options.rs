//! Configuration options for a mirror surface.

use serde::{Deserialize, Serialize};

use crate::error::{MirrorError, Result};

/// Largest stencil reference value an 8-bit stencil buffer can hold.
pub const MAX_MIRROR_ID: u32 = 0xFF;

/// Which stereo eye's after-render hook triggers the reflected pass.
///
/// The host invokes the hook once per eye; the pass must run exactly once
/// per frame, after every eye has written its stencil values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HookEye {
    /// The last eye in the rig's enumeration order (right eye for left-then-right).
    #[default]
    Last,
    /// The first eye in the rig's enumeration order.
    First,
}

impl HookEye {
    /// Returns the eye index this variant selects for a rig with `eye_count` eyes.
    #[must_use]
    pub fn index(self, eye_count: usize) -> usize {
        match self {
            HookEye::Last => eye_count.saturating_sub(1),
            HookEye::First => 0,
        }
    }
}

/// Construction-time configuration for a mirror.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorOptions {
    /// Stencil reference value written by the mirror in the primary pass.
    pub mirror_id: u32,

    /// Whether the mirror renders its reflection from the after-render hook.
    pub render_self: bool,

    /// Whether the depth buffer is cleared before the reflected pass.
    pub clear_depth: bool,

    /// Number of eye cameras a stereo rig must expose.
    pub stereo_eye_count: usize,

    /// Which eye's hook invocation runs the reflected pass.
    pub hook_eye: HookEye,
}

impl Default for MirrorOptions {
    fn default() -> Self {
        Self {
            mirror_id: 1,
            render_self: true,
            clear_depth: true,
            stereo_eye_count: 2,
            hook_eye: HookEye::Last,
        }
    }
}

impl MirrorOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stencil reference id.
    #[must_use]
    pub fn with_mirror_id(mut self, mirror_id: u32) -> Self {
        self.mirror_id = mirror_id;
        self
    }

    /// Sets whether the mirror renders itself.
    #[must_use]
    pub fn with_render_self(mut self, render_self: bool) -> Self {
        self.render_self = render_self;
        self
    }

    /// Sets whether depth is cleared before the reflected pass.
    #[must_use]
    pub fn with_clear_depth(mut self, clear_depth: bool) -> Self {
        self.clear_depth = clear_depth;
        self
    }

    /// Sets which stereo eye triggers the pass.
    #[must_use]
    pub fn with_hook_eye(mut self, hook_eye: HookEye) -> Self {
        self.hook_eye = hook_eye;
        self
    }

    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that the options can be used for a stencil-masked pass.
    pub fn validate(&self) -> Result<()> {
        if self.mirror_id == 0 || self.mirror_id > MAX_MIRROR_ID {
            return Err(MirrorError::InvalidOptions(format!(
                "mirror_id must be in 1..={MAX_MIRROR_ID}, got {}",
                self.mirror_id
            )));
        }
        if self.stereo_eye_count < 2 {
            return Err(MirrorError::InvalidOptions(format!(
                "stereo_eye_count must be at least 2, got {}",
                self.stereo_eye_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = MirrorOptions::default();
        assert_eq!(options.mirror_id, 1);
        assert!(options.render_self);
        assert!(options.clear_depth);
        assert_eq!(options.stereo_eye_count, 2);
        assert_eq!(options.hook_eye, HookEye::Last);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_options_from_partial_json() {
        let options = MirrorOptions::from_json(r#"{ "mirror_id": 7, "clear_depth": false }"#)
            .expect("valid options");
        assert_eq!(options.mirror_id, 7);
        assert!(!options.clear_depth);
        assert!(options.render_self);
    }

    #[test]
    fn test_options_json_roundtrip() {
        let options = MirrorOptions::new()
            .with_mirror_id(3)
            .with_hook_eye(HookEye::First);
        let json = options.to_json().unwrap();
        assert_eq!(MirrorOptions::from_json(&json).unwrap(), options);
    }

    #[test]
    fn test_options_reject_out_of_range_id() {
        assert!(MirrorOptions::new().with_mirror_id(0).validate().is_err());
        assert!(MirrorOptions::new().with_mirror_id(256).validate().is_err());
        assert!(MirrorOptions::from_json(r#"{ "mirror_id": 300 }"#).is_err());
    }

    #[test]
    fn test_options_reject_malformed_json() {
        let err = MirrorOptions::from_json("{ mirror_id: ").unwrap_err();
        assert!(matches!(err, MirrorError::Json(_)));
    }

    #[test]
    fn test_hook_eye_index() {
        assert_eq!(HookEye::Last.index(2), 1);
        assert_eq!(HookEye::First.index(2), 0);
        assert_eq!(HookEye::Last.index(0), 0);
    }
}
