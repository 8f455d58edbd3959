pub mod clock;
pub mod gpu_context;
pub mod timer;

pub use clock::{Clock, ManualClock};
pub use gpu_context::{GpuContext, WindowSurface};
pub use timer::Throttled;
