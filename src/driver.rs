use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::Throttled;
use crate::frame::{FrameCounter, FrameInfo};
use crate::params::Parameters;
use crate::scene::Scene;
use crate::traits::{ParameterSource, SceneRenderer, TimeSource, WindowContext};

const STATS_LOG_INTERVAL: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Stopped,
}

/// When vertex normals are rederived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NormalPolicy {
    /// Deform and recompute normals on every cycle
    #[default]
    Always,
    /// Skip both while the heights cannot have changed
    OnChange,
}

/// Outcome of one executed cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleReport {
    pub frame: FrameInfo,
    pub params: Parameters,
    /// False when the deform pass was skipped under `NormalPolicy::OnChange`
    pub deformed: bool,
}

/// Per-frame deform, render, reschedule loop
#[derive(Debug)]
pub struct FrameDriver {
    state: DriverState,
    policy: NormalPolicy,
    frames: FrameCounter,
    last_revision: Option<u64>,
    last_deformed_with: Option<Parameters>,
    stats_log: Throttled,
}

impl FrameDriver {
    /// A new driver starts STOPPED
    pub fn new(policy: NormalPolicy) -> Self {
        Self {
            state: DriverState::Stopped,
            policy,
            frames: FrameCounter::new(),
            last_revision: None,
            last_deformed_with: None,
            stats_log: Throttled::new(STATS_LOG_INTERVAL),
        }
    }

    pub fn start(&mut self) {
        if self.state == DriverState::Running {
            return;
        }
        self.state = DriverState::Running;
        self.last_revision = None;
        self.last_deformed_with = None;
        debug!("Frame driver started");
    }

    /// Cycles delivered after this return without doing anything
    pub fn stop(&mut self) {
        if self.state == DriverState::Stopped {
            return;
        }
        self.state = DriverState::Stopped;
        debug!("Frame driver stopped after {} cycles", self.frames.count());
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Cycles executed over the driver's lifetime
    pub fn cycles(&self) -> u64 {
        self.frames.count()
    }

    /// Run one cycle: read time and parameters, deform, render, reschedule.
    ///
    /// Returns `Ok(None)` while STOPPED. A render error stops the driver and
    /// is returned before the next frame is requested.
    pub fn cycle<R, W>(
        &mut self,
        scene: &mut Scene,
        renderer: &mut R,
        surface: &W,
        params: &dyn ParameterSource,
        clock: &dyn TimeSource,
    ) -> Result<Option<CycleReport>>
    where
        R: SceneRenderer + ?Sized,
        W: WindowContext + ?Sized,
    {
        if self.state != DriverState::Running {
            return Ok(None);
        }

        let frame = self.frames.next(clock.now());
        let snapshot = params.snapshot();
        self.note_revision(params.revision(), &snapshot);

        let deformed = self.needs_deform(&snapshot);
        if deformed {
            scene.mesh.deform(frame.time, &snapshot);
            scene.mesh.compute_vertex_normals();
            self.last_deformed_with = Some(snapshot);
        }

        if let Err(e) = renderer.render(scene, &frame) {
            self.stop();
            return Err(e);
        }

        if self.stats_log.try_tick(frame.delta) {
            debug!(
                "frame {} t={:.2}s dt={:.2}ms vertices={}",
                frame.number,
                frame.time,
                frame.delta * 1000.0,
                scene.mesh.vertex_count()
            );
        }

        surface.request_redraw();

        Ok(Some(CycleReport {
            frame,
            params: snapshot,
            deformed,
        }))
    }

    fn needs_deform(&self, snapshot: &Parameters) -> bool {
        match self.policy {
            NormalPolicy::Always => true,
            NormalPolicy::OnChange => {
                !(snapshot.is_static() && self.last_deformed_with.as_ref() == Some(snapshot))
            }
        }
    }

    fn note_revision(&mut self, revision: u64, snapshot: &Parameters) {
        if self.last_revision == Some(revision) {
            return;
        }
        if self.last_revision.is_some() {
            debug!(
                "Parameters changed (rev {}): frequency={} speed={:.1} amount={:.2}",
                revision, snapshot.frequency, snapshot.speed, snapshot.amount
            );
        }
        self.last_revision = Some(revision);
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(NormalPolicy::default())
    }
}
