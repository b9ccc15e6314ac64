//! Stereo (XR) mirror pass integration tests.

use planar_mirror::headless::{DrawView, MirrorScene, RecordingHost};
use planar_mirror::*;

const HALF_IPD: f32 = 0.032;

fn eye(offset: f32, layer: u32) -> CameraRecord {
    // The outer half of each eye's frustum is the wider one.
    let projection = if offset < 0.0 {
        off_axis_perspective(-0.09, 0.07, 0.08, -0.08, 0.1, 500.0)
    } else {
        off_axis_perspective(-0.07, 0.09, 0.08, -0.08, 0.1, 500.0)
    };
    let camera = CameraRecord {
        projection,
        layers: LayerMask::only(layer),
        near: 0.1,
        far: 500.0,
        ..CameraRecord::default()
    };
    camera
        .with_world(Mat4::from_rotation_translation(
            Quat::from_rotation_y(0.1),
            Vec3::new(offset, 1.6, 2.5),
        ))
        .expect("eye pose")
}

fn stereo_host() -> RecordingHost {
    RecordingHost::with_stereo(StereoRig::new(eye(-HALF_IPD, 1), eye(HALF_IPD, 2)))
}

#[test]
fn test_two_mirrors_restore_eyes_bit_for_bit() {
    init_logging();

    let mut scene = MirrorScene::new();
    let wall = scene.add_mirror(MirrorOptions::new().with_mirror_id(1)).unwrap();
    let side = scene.add_mirror(MirrorOptions::new().with_mirror_id(2)).unwrap();
    wall.set_world_transform(Mat4::from_translation(Vec3::new(0.0, 1.5, -1.0)));
    side.set_world_transform(Mat4::from_rotation_translation(
        Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        Vec3::new(-2.0, 1.5, 0.0),
    ));

    let mut host = stereo_host();
    let before = host.rig().unwrap().clone();

    let outcomes = host.run_frame(&scene, &CameraRecord::default()).unwrap();

    assert_eq!(
        outcomes,
        vec![
            PassOutcome::Skipped(SkipReason::NotHookEye),
            PassOutcome::Rendered { eyes: 2 },
            PassOutcome::Skipped(SkipReason::NotHookEye),
            PassOutcome::Rendered { eyes: 2 },
        ]
    );

    let after = host.rig().unwrap();
    for (restored, original) in after.eyes.iter().zip(&before.eyes) {
        assert_eq!(
            restored.world.to_cols_array().map(f32::to_bits),
            original.world.to_cols_array().map(f32::to_bits)
        );
        assert_eq!(
            restored.world_inverse.to_cols_array().map(f32::to_bits),
            original.world_inverse.to_cols_array().map(f32::to_bits)
        );
        assert_eq!(
            restored.projection.to_cols_array().map(f32::to_bits),
            original.projection.to_cols_array().map(f32::to_bits)
        );
        assert_eq!(restored.layers, original.layers);
    }
    assert_eq!(after, &before);
    assert!(after.camera_auto_update);
}

#[test]
fn test_second_mirror_sees_unreflected_eyes() {
    let mut scene = MirrorScene::new();
    scene.add_mirror(MirrorOptions::new().with_mirror_id(1)).unwrap();
    scene.add_mirror(MirrorOptions::new().with_mirror_id(2)).unwrap();
    for mirror in scene.mirrors() {
        mirror.set_world_transform(Mat4::from_translation(Vec3::new(0.0, 1.5, -1.0)));
    }

    let mut host = stereo_host();
    host.run_frame(&scene, &CameraRecord::default()).unwrap();

    // Identical mirrors must produce identical reflected passes; a leaked
    // reflection from the first would mirror the second one back.
    let draws = host.draws();
    assert_eq!(draws.len(), 2);
    assert_eq!(draws[0].view, draws[1].view);
    assert_eq!(draws[0].hidden_mirrors, vec![1]);
    assert_eq!(draws[1].hidden_mirrors, vec![2]);
}

#[test]
fn test_reflected_eyes_during_draw() {
    let mut scene = MirrorScene::new();
    scene
        .add_mirror(MirrorOptions::default())
        .unwrap()
        .set_world_transform(Mat4::IDENTITY);

    let mut host = stereo_host();
    let before = host.rig().unwrap().clone();
    host.run_frame(&scene, &CameraRecord::default()).unwrap();

    let DrawView::Stereo { eyes, combined } = &host.draws()[0].view else {
        panic!("expected a stereo draw");
    };
    for (reflected, original) in eyes.iter().zip(&before.eyes) {
        let position = original.position();
        let expected = Vec3::new(position.x, position.y, -position.z);
        assert!((reflected.position() - expected).length() < 1e-5);
        assert!(reflected.world.determinant() < 0.0);
        assert_eq!(reflected.layers, original.layers);
        assert_ne!(reflected.projection, original.projection);
    }

    // The culling camera sits behind the reflected eyes, between them.
    let midpoint = (eyes[0].position() + eyes[1].position()) * 0.5;
    let to_union = combined.position() - midpoint;
    assert!(to_union.dot(eyes[0].forward()) < 0.0);
    assert!(combined.near > before.eyes[0].near);
}

#[test]
fn test_stereo_without_eye_pair_fails_loudly() {
    let mut scene = MirrorScene::new();
    scene.add_mirror(MirrorOptions::default()).unwrap();

    let mut rig = StereoRig::new(eye(-HALF_IPD, 1), eye(HALF_IPD, 2));
    rig.eyes.push(eye(0.0, 3));
    let mut host = RecordingHost::with_stereo(rig);

    let err = host
        .run_frame(&scene, &CameraRecord::default())
        .unwrap_err();
    assert!(matches!(
        err,
        RenderError::Mirror(MirrorError::EyeCountMismatch {
            expected: 2,
            actual: 3
        })
    ));
    assert!(host.draws().is_empty());
}

#[test]
fn test_presenting_without_rig_fails_loudly() {
    let mut scene = MirrorScene::new();
    scene.add_mirror(MirrorOptions::default()).unwrap();
    let mut host = RecordingHost::new();
    host.set_presenting(true);

    let mirror = &scene.mirrors()[0];
    let err = mirror
        .on_after_render(&mut host, &scene, Viewer::Eye(1))
        .unwrap_err();
    assert!(matches!(err, RenderError::MissingStereoRig));
}
