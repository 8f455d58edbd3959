use std::sync::Arc;

/// Drawable surface size in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, or None while the surface has no area
    pub fn aspect(&self) -> Option<f32> {
        if self.width == 0 || self.height == 0 {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }
}

/// Host surface - a drawable area plus its "next frame" signal
pub trait WindowContext {
    /// Current size in physical pixels
    fn dimensions(&self) -> WindowDimensions;

    /// Schedule one more frame cycle
    fn request_redraw(&self);
}

impl WindowContext for winit::window::Window {
    fn dimensions(&self) -> WindowDimensions {
        let size = self.inner_size();
        WindowDimensions::new(size.width, size.height)
    }

    fn request_redraw(&self) {
        winit::window::Window::request_redraw(self);
    }
}

impl<W: WindowContext + ?Sized> WindowContext for Arc<W> {
    fn dimensions(&self) -> WindowDimensions {
        (**self).dimensions()
    }

    fn request_redraw(&self) {
        (**self).request_redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_window_dimensions_new() {
        let dims = WindowDimensions::new(1920, 1080);
        assert_eq!(dims.width, 1920);
        assert_eq!(dims.height, 1080);
    }

    #[test]
    fn test_aspect() {
        let dims = WindowDimensions::new(800, 400);
        assert_eq!(dims.aspect(), Some(2.0));
    }

    #[test]
    fn test_aspect_degenerate() {
        assert_eq!(WindowDimensions::new(0, 600).aspect(), None);
        assert_eq!(WindowDimensions::new(800, 0).aspect(), None);
    }

    struct MockWindow {
        dims: WindowDimensions,
        redraw_called: Cell<usize>,
    }

    impl WindowContext for MockWindow {
        fn dimensions(&self) -> WindowDimensions {
            self.dims
        }

        fn request_redraw(&self) {
            self.redraw_called.set(self.redraw_called.get() + 1);
        }
    }

    #[test]
    fn test_arc_forwards() {
        let window = Arc::new(MockWindow {
            dims: WindowDimensions::new(640, 480),
            redraw_called: Cell::new(0),
        });

        let as_context: &dyn WindowContext = &window;
        assert_eq!(as_context.dimensions(), WindowDimensions::new(640, 480));

        as_context.request_redraw();
        as_context.request_redraw();
        assert_eq!(window.redraw_called.get(), 2);
    }
}
