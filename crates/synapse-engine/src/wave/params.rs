/// Per-run animation parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WaveParams {
    /// Head advance per tick, in path samples.
    pub step_size: f32,
    /// Parametric distance between consecutive markers.
    pub gap: f32,
    /// Ticks to stay in `Completing` after the last marker clears the path.
    pub hold_ticks: u32,
    /// Leave the model dimmed when the run finishes.
    pub keep_dimmed: bool,
    /// The owner wants a completion signal and takes over opacity handling.
    pub notify: bool,
    /// Model opacity held while the run is animating.
    pub dim_opacity: f32,
    /// When set, the head advances `step_size * dt * fps` per tick instead of
    /// `step_size`, making speed independent of the display refresh rate.
    pub reference_fps: Option<f32>,
}

impl WaveParams {
    pub const DEFAULT_STEP: f32 = 0.8;
    pub const DEFAULT_GAP: f32 = 0.5;
    pub const DEFAULT_DIM_OPACITY: f32 = 0.1;

    pub fn with_hold(mut self, hold_ticks: u32) -> Self {
        self.hold_ticks = hold_ticks;
        self
    }

    pub fn keep_dimmed(mut self, keep: bool) -> Self {
        self.keep_dimmed = keep;
        self
    }

    pub fn notify(mut self, notify: bool) -> Self {
        self.notify = notify;
        self
    }

    /// Head advance for a tick of `dt` seconds.
    #[inline]
    pub fn advance(&self, dt: f32) -> f32 {
        match self.reference_fps {
            Some(fps) => self.step_size * dt.max(0.0) * fps,
            None => self.step_size,
        }
    }
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            step_size: Self::DEFAULT_STEP,
            gap: Self::DEFAULT_GAP,
            hold_ticks: 0,
            keep_dimmed: false,
            notify: false,
            dim_opacity: Self::DEFAULT_DIM_OPACITY,
            reference_fps: None,
        }
    }
}
