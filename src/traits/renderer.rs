use crate::frame::FrameInfo;
use crate::scene::Scene;

/// Draws a scene to whatever target the renderer was created for
pub trait SceneRenderer {
    /// Resize the output target in physical pixels
    fn resize(&mut self, width: u32, height: u32);

    /// Upload dirty geometry and draw one frame
    fn render(&mut self, scene: &mut Scene, frame: &FrameInfo) -> anyhow::Result<()>;

    /// Free GPU-side resources; the renderer is not used afterwards
    fn release(&mut self) {}
}
