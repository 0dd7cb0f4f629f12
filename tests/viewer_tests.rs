mod common;

use std::cell::Cell;

use common::{MockContainer, MockHost, RecordingRenderer};
use cube_viewer::core::{ContainerSize, RendererOptions, SceneRenderer};
use cube_viewer::{CubeViewer, Error, ViewerConfig};

const ID: &str = "threejs-container";

fn init_viewer(
    container: &MockContainer,
    config: &ViewerConfig,
) -> CubeViewer<MockContainer, RecordingRenderer> {
    let host = MockHost::with(ID, container.clone());
    CubeViewer::init(&host, config, |_, size, _, _| {
        Ok(RecordingRenderer::sized(size.width, size.height))
    })
    .expect("viewer should initialize")
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn test_aspect_matches_container_after_init() {
    let cases = [(800, 400), (640, 480), (1920, 1080), (1, 1000), (333, 7)];
    for (w, h) in cases {
        let container = MockContainer::new(w, h);
        let viewer = init_viewer(&container, &ViewerConfig::default());
        let expected = w as f32 / h as f32;
        assert!(
            (viewer.scene().camera.aspect - expected).abs() < 1e-6,
            "{}x{} gave aspect {}",
            w,
            h,
            viewer.scene().camera.aspect
        );
    }
}

#[test]
fn test_800x400_gives_aspect_two() {
    let container = MockContainer::new(800, 400);
    let viewer = init_viewer(&container, &ViewerConfig::default());
    assert_eq!(viewer.scene().camera.aspect, 2.0);
    assert_eq!(viewer.renderer().size(), (800, 400));
}

#[test]
fn test_zero_height_falls_back_to_500() {
    let container = MockContainer::new(300, 0);
    let viewer = init_viewer(&container, &ViewerConfig::default());
    assert!((viewer.scene().camera.aspect - 0.6).abs() < 1e-6);
    assert_eq!(viewer.renderer().size(), (300, 500));
}

#[test]
fn test_renderer_factory_receives_container_box_and_options() {
    let container = MockContainer::new(300, 0);
    let host = MockHost::with(ID, container.clone());
    let mut config = ViewerConfig::default();
    config.antialias = false;

    let seen = Cell::new(None);
    let viewer = CubeViewer::init(&host, &config, |_, size, geometry, options| {
        seen.set(Some((size, geometry.indices().len(), options)));
        Ok(RecordingRenderer::sized(size.width, size.height))
    })
    .unwrap();

    let (size, index_count, options) = seen.get().unwrap();
    assert_eq!(size, ContainerSize::new(300, 500));
    assert_eq!(index_count, 36);
    assert_eq!(options, RendererOptions { antialias: false });
    assert_eq!(viewer.frame_count(), 0);
}

#[test]
fn test_init_builds_demo_scene() {
    let container = MockContainer::new(800, 600);
    let viewer = init_viewer(&container, &ViewerConfig::default());
    let scene = viewer.scene();

    assert_eq!(scene.background.to_hex(), 0xf0f0f0);
    assert_eq!(scene.camera.fov, 75.0);
    assert_eq!(scene.camera.near, 0.1);
    assert_eq!(scene.camera.far, 1000.0);
    assert_eq!(scene.camera.position.z, 5.0);
    assert_eq!(scene.cube.geometry.width, 2.0);
    assert_eq!(scene.cube.geometry.height, 2.0);
    assert_eq!(scene.cube.geometry.depth, 2.0);
    assert_eq!(scene.ambient.intensity, 0.5);
    assert_eq!(scene.directional.intensity, 0.5);
    assert_eq!(scene.directional.position.to_array(), [1.0, 1.0, 1.0]);
}

#[test]
fn test_init_schedules_first_frame_without_rendering() {
    let container = MockContainer::new(800, 600);
    let viewer = init_viewer(&container, &ViewerConfig::default());
    assert_eq!(container.frames_requested(), 1);
    assert_eq!(viewer.renderer().render_count(), 0);
}

#[test]
fn test_missing_container_constructs_nothing() {
    let host = MockHost::with("somewhere-else", MockContainer::new(800, 600));
    let factory_calls = Cell::new(0);

    let result = CubeViewer::init(&host, &ViewerConfig::default(), |_, size, _, _| {
        factory_calls.set(factory_calls.get() + 1);
        Ok(RecordingRenderer::sized(size.width, size.height))
    });

    match result {
        Err(Error::ContainerNotFound(id)) => assert_eq!(id, ID),
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("viewer should not start without a container"),
    }
    assert_eq!(factory_calls.get(), 0);
}

#[test]
fn test_configured_container_id_is_used() {
    let container = MockContainer::new(400, 400);
    let host = MockHost::with("viewport", container.clone());
    let mut config = ViewerConfig::default();
    config.container = "viewport".to_string();

    let viewer = CubeViewer::init(&host, &config, |_, size, _, _| {
        Ok(RecordingRenderer::sized(size.width, size.height))
    });
    assert!(viewer.is_ok());
}

#[test]
fn test_renderer_factory_error_propagates() {
    let host = MockHost::with(ID, MockContainer::new(800, 600));
    let result: cube_viewer::Result<CubeViewer<MockContainer, RecordingRenderer>> =
        CubeViewer::init(&host, &ViewerConfig::default(), |_, _, _, _| {
            Err(Error::NoSurfaceFormat)
        });
    assert!(matches!(result, Err(Error::NoSurfaceFormat)));
}

// ============================================================================
// Resize
// ============================================================================

#[test]
fn test_resize_updates_aspect_and_renderer_once() {
    let container = MockContainer::new(800, 400);
    let mut viewer = init_viewer(&container, &ViewerConfig::default());
    let resizes_after_init = viewer.renderer().resize_count();

    container.resize(1000, 250);
    viewer.on_window_resize();

    assert_eq!(viewer.scene().camera.aspect, 4.0);
    assert_eq!(viewer.renderer().resize_count(), resizes_after_init + 1);
    assert_eq!(viewer.renderer().resizes.borrow().last(), Some(&(1000, 250)));
}

#[test]
fn test_each_resize_event_is_handled() {
    let container = MockContainer::new(800, 400);
    let mut viewer = init_viewer(&container, &ViewerConfig::default());
    let base = viewer.renderer().resize_count();

    let sizes = [(640, 480), (640, 480), (1280, 720), (200, 0)];
    for (w, h) in sizes {
        container.resize(w, h);
        viewer.on_window_resize();
    }

    assert_eq!(viewer.renderer().resize_count(), base + sizes.len());
    assert_eq!(viewer.renderer().size(), (200, 500));
    assert!((viewer.scene().camera.aspect - 0.4).abs() < 1e-6);
}

#[test]
fn test_resize_refreshes_projection_matrix() {
    let container = MockContainer::new(800, 800);
    let mut viewer = init_viewer(&container, &ViewerConfig::default());
    let before = viewer.scene().camera.projection_matrix();

    container.resize(1600, 800);
    viewer.on_window_resize();

    let after = viewer.scene().camera.projection_matrix();
    assert!((after.x_axis.x - before.x_axis.x / 2.0).abs() < 1e-5);
    assert_eq!(after.y_axis.y, before.y_axis.y);
}

#[test]
fn test_resize_to_zero_height_uses_configured_default() {
    let container = MockContainer::new(800, 400);
    let mut config = ViewerConfig::default();
    config.default_height = 200;
    let mut viewer = init_viewer(&container, &config);

    container.resize(800, 0);
    viewer.on_window_resize();

    assert_eq!(viewer.scene().camera.aspect, 4.0);
    assert_eq!(viewer.renderer().size(), (800, 200));
}

// ============================================================================
// Animation
// ============================================================================

#[test]
fn test_rotation_after_n_frames() {
    let container = MockContainer::new(800, 600);
    let mut viewer = init_viewer(&container, &ViewerConfig::default());

    for _ in 0..100 {
        viewer.animate();
    }

    let rotation = viewer.scene().cube.rotation;
    assert!((rotation.x - 1.0).abs() < 1e-4, "x = {}", rotation.x);
    assert!((rotation.y - 1.0).abs() < 1e-4, "y = {}", rotation.y);
    assert_eq!(rotation.z, 0.0);
    assert_eq!(viewer.frame_count(), 100);
}

#[test]
fn test_rotation_increases_every_frame() {
    let container = MockContainer::new(800, 600);
    let mut viewer = init_viewer(&container, &ViewerConfig::default());

    for _ in 0..10 {
        viewer.animate();
    }

    let frames = viewer.renderer().frames.borrow();
    for pair in frames.windows(2) {
        assert!(pair[1].rotation_x > pair[0].rotation_x);
        assert!(pair[1].rotation_y > pair[0].rotation_y);
    }
    assert!((frames[0].rotation_x - 0.01).abs() < 1e-6);
}

#[test]
fn test_rotation_is_not_wrapped() {
    let container = MockContainer::new(800, 600);
    let mut viewer = init_viewer(&container, &ViewerConfig::default());

    for _ in 0..700 {
        viewer.animate();
    }

    let x = viewer.scene().cube.rotation.x;
    assert!(x > std::f32::consts::TAU);
    assert!((x - 7.0).abs() < 1e-3);
}

#[test]
fn test_each_frame_reschedules_and_renders_once() {
    let container = MockContainer::new(800, 600);
    let mut viewer = init_viewer(&container, &ViewerConfig::default());
    let scheduled_by_init = container.frames_requested();

    for _ in 0..5 {
        viewer.animate();
    }

    assert_eq!(container.frames_requested(), scheduled_by_init + 5);
    assert_eq!(viewer.renderer().render_count(), 5);
}

#[test]
fn test_custom_rotation_step() {
    let container = MockContainer::new(800, 600);
    let mut config = ViewerConfig::default();
    config.cube.rotation_step = 0.05;
    let mut viewer = init_viewer(&container, &config);

    for _ in 0..4 {
        viewer.animate();
    }

    assert!((viewer.scene().cube.rotation.x - 0.2).abs() < 1e-5);
}

#[test]
fn test_render_failure_does_not_stop_loop() {
    let container = MockContainer::new(800, 600);
    let host = MockHost::with(ID, container.clone());
    let mut viewer = CubeViewer::init(&host, &ViewerConfig::default(), |_, size, _, _| {
        let mut renderer = RecordingRenderer::sized(size.width, size.height);
        renderer.fail_renders = true;
        Ok(renderer)
    })
    .unwrap();

    viewer.animate();
    viewer.animate();

    assert_eq!(viewer.renderer().render_count(), 2);
    assert_eq!(container.frames_requested(), 3);
    assert!((viewer.scene().cube.rotation.y - 0.02).abs() < 1e-6);
}

#[test]
fn test_render_sees_resized_camera() {
    let container = MockContainer::new(800, 400);
    let mut viewer = init_viewer(&container, &ViewerConfig::default());

    viewer.animate();
    container.resize(300, 0);
    viewer.on_window_resize();
    viewer.animate();

    let frames = viewer.renderer().frames.borrow();
    assert_eq!(frames[0].aspect, 2.0);
    assert!((frames[1].aspect - 0.6).abs() < 1e-6);
}
