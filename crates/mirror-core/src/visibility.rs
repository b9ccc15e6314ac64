//! Visibility gate: skip the reflected pass when no viewer can see the mirror.

use glam::Vec3;

use crate::plane::Plane;

/// Returns whether a viewer at `viewer` is on the reflective side of the mirror.
///
/// The viewer is in front when `(mirror_position - viewer) · normal <= 0`.
/// A viewer exactly on the plane counts as in front.
#[must_use]
pub fn viewer_in_front(plane: &Plane, mirror_position: Vec3, viewer: Vec3) -> bool {
    (mirror_position - viewer).dot(plane.normal) <= 0.0
}

/// Returns whether any of the viewers sees the reflective side.
///
/// Stereo eyes are OR-ed: a mirror that only one eye faces must still render.
#[must_use]
pub fn any_viewer_in_front<I>(plane: &Plane, mirror_position: Vec3, viewers: I) -> bool
where
    I: IntoIterator<Item = Vec3>,
{
    viewers
        .into_iter()
        .any(|viewer| viewer_in_front(plane, mirror_position, viewer))
}
