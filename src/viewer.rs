use crate::config::ViewerConfig;
use crate::core::{Container, ContainerHost, ContainerSize, RendererOptions, SceneRenderer};
use crate::error::{Error, Result};
use crate::geometry::BoxGeometry;
use crate::scene::Scene;

/// Rotating cube bound to one container
///
/// Owns the scene (camera, lights, cube) and the renderer whose surface lives
/// inside the container. All three entry points run on the host's event loop.
pub struct CubeViewer<C: Container, R: SceneRenderer> {
    container: C,
    renderer: R,
    scene: Scene,
    default_height: u32,
    rotation_step: f32,
    frame_count: u64,
}

impl<C: Container, R: SceneRenderer> CubeViewer<C, R> {
    /// Look up the container, build the scene and renderer, schedule the first frame
    ///
    /// When the container is missing nothing is constructed: the error is
    /// logged and returned, and `create_renderer` is never called.
    pub fn init<H, F>(host: &H, config: &ViewerConfig, create_renderer: F) -> Result<Self>
    where
        H: ContainerHost<Container = C>,
        F: FnOnce(&C, ContainerSize, &BoxGeometry, RendererOptions) -> Result<R>,
    {
        let Some(container) = host.get_element_by_id(&config.container) else {
            log::error!("Container `{}` not found, cube viewer not started", config.container);
            return Err(Error::ContainerNotFound(config.container.clone()));
        };

        let size = ContainerSize::of(&container, config.default_height);
        let scene = Scene::build(config, size);

        let options = RendererOptions {
            antialias: config.antialias,
        };
        let mut renderer = create_renderer(&container, size, &scene.cube.geometry, options)?;
        renderer.set_size(size.width, size.height);

        log::info!(
            "Cube viewer attached to `{}` ({}x{}, aspect {:.3})",
            config.container,
            size.width,
            size.height,
            scene.camera.aspect
        );

        container.request_animation_frame();

        Ok(Self {
            container,
            renderer,
            scene,
            default_height: config.default_height,
            rotation_step: config.cube.rotation_step,
            frame_count: 0,
        })
    }

    /// Refit camera and renderer to the container's current box
    pub fn on_window_resize(&mut self) {
        let size = ContainerSize::of(&self.container, self.default_height);

        self.scene.camera.fit(size);
        self.renderer.set_size(size.width, size.height);

        log::debug!(
            "Resized to {}x{}, aspect {:.3}",
            size.width,
            size.height,
            self.scene.camera.aspect
        );
    }

    /// One animation frame: reschedule, rotate, draw
    pub fn animate(&mut self) {
        self.container.request_animation_frame();

        let cube = &mut self.scene.cube;
        cube.rotation.x += self.rotation_step;
        cube.rotation.y += self.rotation_step;

        if let Err(e) = self.renderer.render(&self.scene) {
            log::error!("Render error: {}", e);
        }
        self.frame_count += 1;
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    /// Animation frames run since `init`
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
