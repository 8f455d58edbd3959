use anyhow::Result;
use log::{debug, info};

use crate::driver::{CycleReport, FrameDriver, NormalPolicy};
use crate::math::Rgb;
use crate::scene::{Scene, SceneConfig};
use crate::traits::{ParameterSource, SceneRenderer, TimeSource, WindowContext};

/// Everything that only exists while mounted
struct Mounted<W, R> {
    surface: W,
    scene: Scene,
    renderer: R,
}

/// Owns the scene, renderer and frame driver for one drawing surface
///
/// `activate` mounts, `deactivate` (or drop) unmounts. The driver is always
/// stopped before mounted resources are released, so a frame signal that
/// arrives late never reaches freed resources.
pub struct SceneHost<W: WindowContext, R: SceneRenderer> {
    config: SceneConfig,
    params: Box<dyn ParameterSource>,
    clock: Box<dyn TimeSource>,
    driver: FrameDriver,
    mounted: Option<Mounted<W, R>>,
}

impl<W: WindowContext, R: SceneRenderer> SceneHost<W, R> {
    pub fn new(
        config: SceneConfig,
        params: impl ParameterSource + 'static,
        clock: impl TimeSource + 'static,
        policy: NormalPolicy,
    ) -> Self {
        Self {
            config,
            params: Box::new(params),
            clock: Box::new(clock),
            driver: FrameDriver::new(policy),
            mounted: None,
        }
    }

    /// Build the scene on `surface`, create its renderer and start the
    /// frame loop.
    ///
    /// Without a surface nothing happens and `Ok(false)` is returned.
    /// An already mounted scene is torn down first.
    pub fn activate<F>(&mut self, surface: Option<W>, create_renderer: F) -> Result<bool>
    where
        F: FnOnce(&W, &Scene) -> Result<R>,
    {
        let Some(surface) = surface else {
            debug!("No drawing surface; skipping scene setup");
            return Ok(false);
        };

        self.deactivate();

        let dims = surface.dimensions();
        let scene = Scene::new(&self.config, dims.aspect().unwrap_or(1.0));
        let renderer = create_renderer(&surface, &scene)?;

        info!(
            "Scene mounted: {}x{} surface, {} vertices, {} triangles",
            dims.width,
            dims.height,
            scene.mesh.vertex_count(),
            scene.mesh.triangle_count()
        );

        self.driver.start();
        surface.request_redraw();
        self.mounted = Some(Mounted {
            surface,
            scene,
            renderer,
        });

        Ok(true)
    }

    /// Stop the frame loop, then release renderer and scene.
    /// Returns false if nothing was mounted.
    pub fn deactivate(&mut self) -> bool {
        self.driver.stop();

        let Some(mut mounted) = self.mounted.take() else {
            return false;
        };
        mounted.renderer.release();
        drop(mounted);

        info!("Scene unmounted after {} frames", self.driver.cycles());
        true
    }

    /// Handle the host's next-frame signal
    pub fn on_frame(&mut self) -> Result<Option<CycleReport>> {
        let Some(mounted) = self.mounted.as_mut() else {
            return Ok(None);
        };
        self.driver.cycle(
            &mut mounted.scene,
            &mut mounted.renderer,
            &mounted.surface,
            self.params.as_ref(),
            self.clock.as_ref(),
        )
    }

    /// Handle a viewport resize. Only camera aspect and renderer output
    /// size change. Zero-sized viewports are ignored.
    pub fn on_resize(&mut self, width: u32, height: u32) -> bool {
        let Some(mounted) = self.mounted.as_mut() else {
            return false;
        };
        if !mounted.scene.camera.set_viewport(width, height) {
            debug!("Ignoring resize to {}x{}", width, height);
            return false;
        }
        mounted.renderer.resize(width, height);
        debug!("Viewport resized to {}x{}", width, height);
        true
    }

    /// Change the surface color, live if mounted
    pub fn set_base_color(&mut self, color: Rgb) {
        self.config.color = color;
        if let Some(mounted) = self.mounted.as_mut() {
            mounted.scene.set_base_color(color);
        }
    }

    pub fn is_active(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn driver(&self) -> &FrameDriver {
        &self.driver
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.mounted.as_ref().map(|m| &m.scene)
    }

    pub fn renderer_mut(&mut self) -> Option<&mut R> {
        self.mounted.as_mut().map(|m| &mut m.renderer)
    }
}

impl<W: WindowContext, R: SceneRenderer> Drop for SceneHost<W, R> {
    fn drop(&mut self) {
        self.deactivate();
    }
}
