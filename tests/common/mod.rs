#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use cube_viewer::core::{Container, ContainerHost, SceneRenderer};
use cube_viewer::scene::Scene;
use cube_viewer::Result;

/// Container whose size the test can change after handing out clones
#[derive(Clone)]
pub struct MockContainer {
    size: Rc<Cell<(u32, u32)>>,
    frames_requested: Rc<Cell<usize>>,
}

impl MockContainer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Rc::new(Cell::new((width, height))),
            frames_requested: Rc::new(Cell::new(0)),
        }
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.size.set((width, height));
    }

    pub fn frames_requested(&self) -> usize {
        self.frames_requested.get()
    }
}

impl Container for MockContainer {
    fn client_width(&self) -> u32 {
        self.size.get().0
    }

    fn client_height(&self) -> u32 {
        self.size.get().1
    }

    fn request_animation_frame(&self) {
        self.frames_requested.set(self.frames_requested.get() + 1);
    }
}

#[derive(Default)]
pub struct MockHost {
    elements: HashMap<String, MockContainer>,
}

impl MockHost {
    pub fn with(id: &str, container: MockContainer) -> Self {
        let mut elements = HashMap::new();
        elements.insert(id.to_string(), container);
        Self { elements }
    }
}

impl ContainerHost for MockHost {
    type Container = MockContainer;

    fn get_element_by_id(&self, id: &str) -> Option<MockContainer> {
        self.elements.get(id).cloned()
    }
}

/// What the renderer saw for one `render` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedFrame {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub aspect: f32,
}

/// Renderer that records every call instead of drawing
#[derive(Default)]
pub struct RecordingRenderer {
    size: (u32, u32),
    pub resizes: RefCell<Vec<(u32, u32)>>,
    pub frames: RefCell<Vec<RenderedFrame>>,
    pub fail_renders: bool,
}

impl RecordingRenderer {
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ..Default::default()
        }
    }

    pub fn resize_count(&self) -> usize {
        self.resizes.borrow().len()
    }

    pub fn render_count(&self) -> usize {
        self.frames.borrow().len()
    }
}

impl SceneRenderer for RecordingRenderer {
    fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.resizes.borrow_mut().push((width, height));
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn render(&mut self, scene: &Scene) -> Result<()> {
        self.frames.borrow_mut().push(RenderedFrame {
            rotation_x: scene.cube.rotation.x,
            rotation_y: scene.cube.rotation.y,
            aspect: scene.camera.aspect,
        });
        if self.fail_renders {
            return Err(cube_viewer::Error::Surface(wgpu::SurfaceError::OutOfMemory));
        }
        Ok(())
    }
}
