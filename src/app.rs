use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::ViewerConfig;
use crate::core::{MeshRenderer, WindowContainer, WindowHost};
use crate::error::Error;
use crate::frame::{FpsCounter, FrameIterator};
use crate::viewer::CubeViewer;

type NativeViewer = CubeViewer<WindowContainer, MeshRenderer>;

/// Native shell: one window registered as a container, one cube viewer
pub struct App {
    config: ViewerConfig,
    host: WindowHost,
    viewer: Option<NativeViewer>,
    frames: FrameIterator,
    fps: FpsCounter,
}

impl App {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            host: WindowHost::new(),
            viewer: None,
            frames: FrameIterator::new(),
            fps: FpsCounter::default(),
        }
    }

    /// Run the event loop until the window closes
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;
        Ok(())
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Option<Arc<Window>> {
        let settings = &self.config.window;
        let attributes = Window::default_attributes()
            .with_title(settings.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(settings.width, settings.height));

        match event_loop.create_window(attributes) {
            Ok(window) => {
                let window = Arc::new(window);
                self.host.register(settings.id.clone(), window.clone());
                Some(window)
            }
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                None
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.viewer.is_some() {
            return;
        }

        if self.host.is_empty() && self.create_window(event_loop).is_none() {
            event_loop.exit();
            return;
        }

        let viewer = CubeViewer::init(&self.host, &self.config, |container, size, geometry, options| {
            pollster::block_on(MeshRenderer::new(
                container.window().clone(),
                size,
                geometry,
                options,
            ))
        });

        match viewer {
            Ok(viewer) => self.viewer = Some(viewer),
            Err(Error::ContainerNotFound(_)) => event_loop.exit(),
            Err(e) => {
                log::error!("Failed to initialize cube viewer: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(viewer) = &mut self.viewer {
                    viewer.on_window_resize();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(viewer) = &mut self.viewer {
                    viewer.animate();

                    if let Some(frame) = self.frames.next() {
                        if let Some(fps) = self.fps.record(frame.delta) {
                            log::debug!("FPS: {:.1} (frame {})", fps, frame.number);
                        }
                    }
                }
            }
            _ => {}
        }
    }
}
