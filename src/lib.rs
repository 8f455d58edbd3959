pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod deform;
pub mod driver;
pub mod frame;
pub mod host;
pub mod math;
pub mod mesh;
pub mod panel;
pub mod params;
pub mod renderer;
pub mod scene;
pub mod traits;
pub mod types;

pub use config::WaveConfig;
pub use deform::wave_height;
pub use driver::{DriverState, FrameDriver, NormalPolicy};
pub use host::SceneHost;
pub use params::{Parameters, SharedParameters};
pub use scene::{Scene, SceneConfig};
