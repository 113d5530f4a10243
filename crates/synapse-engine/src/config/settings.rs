use crate::wave::WaveParams;

/// Animation constants shared by every route.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationSettings {
    /// Densification spacing in model units.
    pub spacing: f32,
    /// Markers per pool.
    pub marker_count: usize,
    /// Parametric distance between consecutive markers.
    pub gap: f32,
    /// Default head advance per tick; routes may override it.
    pub step_size: f32,
    /// Model opacity while a wave is traveling.
    pub dim_opacity: f32,
    /// Ticks each wave lingers after its last marker clears the path.
    pub hold_ticks: u32,
    /// See [`WaveParams::reference_fps`].
    pub reference_fps: Option<f32>,
}

impl AnimationSettings {
    pub const DEFAULT_SPACING: f32 = 0.03;
    pub const DEFAULT_MARKER_COUNT: usize = 10;
    /// Upper bound on markers per pool accepted from route files.
    pub const MAX_MARKER_COUNT: usize = 1024;

    /// Wave parameters for a plain run at `step_size`.
    pub fn wave_params(&self, step_size: f32) -> WaveParams {
        WaveParams {
            step_size,
            gap: self.gap,
            hold_ticks: self.hold_ticks,
            keep_dimmed: false,
            notify: false,
            dim_opacity: self.dim_opacity,
            reference_fps: self.reference_fps,
        }
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            spacing: Self::DEFAULT_SPACING,
            marker_count: Self::DEFAULT_MARKER_COUNT,
            gap: WaveParams::DEFAULT_GAP,
            step_size: WaveParams::DEFAULT_STEP,
            dim_opacity: WaveParams::DEFAULT_DIM_OPACITY,
            hold_ticks: 0,
            reference_fps: None,
        }
    }
}
