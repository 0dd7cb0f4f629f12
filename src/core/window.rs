use std::collections::HashMap;
use std::sync::Arc;

use winit::window::Window;

use super::container::{Container, ContainerHost};

/// A winit window acting as the viewer's container
#[derive(Clone)]
pub struct WindowContainer {
    inner: Arc<Window>,
}

impl WindowContainer {
    pub fn new(window: Arc<Window>) -> Self {
        Self { inner: window }
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.inner
    }
}

impl Container for WindowContainer {
    fn client_width(&self) -> u32 {
        self.inner.inner_size().width
    }

    fn client_height(&self) -> u32 {
        self.inner.inner_size().height
    }

    fn request_animation_frame(&self) {
        self.inner.request_redraw();
    }
}

/// Registry of open windows keyed by identifier
#[derive(Default)]
pub struct WindowHost {
    windows: HashMap<String, Arc<Window>>,
}

impl WindowHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>, window: Arc<Window>) {
        self.windows.insert(id.into(), window);
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

impl ContainerHost for WindowHost {
    type Container = WindowContainer;

    fn get_element_by_id(&self, id: &str) -> Option<WindowContainer> {
        self.windows.get(id).cloned().map(WindowContainer::new)
    }
}
