pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Time source reading for this cycle, in seconds
    pub time: f64,
    /// Seconds since the previous cycle (0 for the first one)
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f64, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Numbers successive frame cycles from time source readings
#[derive(Debug, Clone, Default)]
pub struct FrameCounter {
    next_number: u64,
    last_time: Option<f64>,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames handed out so far
    pub fn count(&self) -> u64 {
        self.next_number
    }

    pub fn next(&mut self, time: f64) -> FrameInfo {
        let delta = self
            .last_time
            .map(|last| (time - last).max(0.0) as f32)
            .unwrap_or(0.0);
        let info = FrameInfo::new(self.next_number, time, delta);

        self.next_number += 1;
        self.last_time = Some(time);

        info
    }
}

/// Frames per second averaged over `FPS_UPDATE_INTERVAL`
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    fps: f32,
    frame_count: u32,
    timer: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame. Returns true when the average was refreshed.
    pub fn update(&mut self, delta: f32) -> bool {
        self.frame_count += 1;
        self.timer += delta;

        if self.timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.timer;
            self.frame_count = 0;
            self.timer = 0.0;
            true
        } else {
            false
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Average frame time in milliseconds, 0 before the first refresh
    pub fn frame_time_ms(&self) -> f32 {
        if self.fps > 0.0 {
            1000.0 / self.fps
        } else {
            0.0
        }
    }
}
