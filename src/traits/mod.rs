pub mod clock;
pub mod parameters;
pub mod renderer;
pub mod window;

pub use clock::*;
pub use parameters::*;
pub use renderer::*;
pub use window::*;
