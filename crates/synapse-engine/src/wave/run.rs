use crate::coords::ColorRgba;
use crate::path::DensePath;
use crate::scene::{MarkerPool, OpacityTarget, PoolId};

use super::WaveParams;

/// Lifecycle of a run.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WaveState {
    /// Not animating: never started, finished or cancelled.
    Idle,
    /// Markers are moving along the path.
    Running,
    /// Every marker has cleared the path; waiting out the hold ticks.
    Completing,
}

/// Result of a single tick.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WaveStatus {
    Idle,
    Running,
    Holding,
    /// The run finished on this tick. `notify` mirrors [`WaveParams::notify`]:
    /// when set, the owner is responsible for the follow-on and for opacity.
    Finished { notify: bool },
}

/// One execution of the wave animator against a path and a marker pool.
///
/// Marker `i` sits at parameter `head - i * gap`; it is visible only while that
/// parameter lies on the path. The run terminates once
/// `head >= last_index + markers * gap`, i.e. when the trailing marker has left.
#[derive(Debug, Clone)]
pub struct WaveRun {
    pool: PoolId,
    path: DensePath,
    params: WaveParams,
    head: f32,
    state: WaveState,
    hold_left: u32,
    ticks: u32,
}

impl WaveRun {
    /// Resets `markers` (hidden, recolored, fully opaque) and returns a running wave.
    pub fn start(
        pool: PoolId,
        markers: &mut MarkerPool,
        path: DensePath,
        color: ColorRgba,
        params: WaveParams,
    ) -> Self {
        markers.hide_all();
        markers.set_color(color);

        log::debug!(
            "wave start on '{}': {} samples, step {}, gap {}",
            markers.label(),
            path.len(),
            params.step_size,
            params.gap
        );

        Self {
            pool,
            path,
            params,
            head: 0.0,
            state: WaveState::Running,
            hold_left: params.hold_ticks,
            ticks: 0,
        }
    }

    #[inline]
    pub fn pool(&self) -> PoolId {
        self.pool
    }

    #[inline]
    pub fn state(&self) -> WaveState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state != WaveState::Idle
    }

    /// Current head parameter.
    #[inline]
    pub fn head(&self) -> f32 {
        self.head
    }

    /// Ticks processed so far, hold ticks included.
    #[inline]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Head parameter at which the trailing marker has cleared the path.
    pub fn end_param(&self, marker_count: usize) -> f32 {
        self.path.last_index() + marker_count as f32 * self.params.gap
    }

    /// Advances the run by one frame.
    pub fn tick<H>(&mut self, dt: f32, markers: &mut MarkerPool, host: &mut H) -> WaveStatus
    where
        H: OpacityTarget + ?Sized,
    {
        match self.state {
            WaveState::Idle => WaveStatus::Idle,
            WaveState::Running => {
                self.ticks += 1;

                if self.path.is_degenerate() {
                    log::debug!("wave on '{}' has no path to travel; completing", markers.label());
                    return self.finish(markers, host);
                }

                host.set_global_opacity(self.params.dim_opacity);

                self.head += self.params.advance(dt);
                for (i, marker) in markers.markers_mut().iter_mut().enumerate() {
                    let t = self.head - i as f32 * self.params.gap;
                    match self.path.sample(t) {
                        Some(p) => {
                            marker.position = p;
                            marker.visible = true;
                        }
                        None => marker.visible = false,
                    }
                }
                log::trace!(
                    "wave '{}' tick {}: head {:.2}, {} visible",
                    markers.label(),
                    self.ticks,
                    self.head,
                    markers.visible_count()
                );

                if self.head < self.end_param(markers.len()) {
                    return WaveStatus::Running;
                }

                markers.hide_all();
                if self.hold_left == 0 {
                    return self.finish(markers, host);
                }
                self.state = WaveState::Completing;
                WaveStatus::Holding
            }
            WaveState::Completing => {
                self.ticks += 1;
                self.hold_left = self.hold_left.saturating_sub(1);
                if self.hold_left == 0 {
                    self.finish(markers, host)
                } else {
                    WaveStatus::Holding
                }
            }
        }
    }

    /// Stops the run immediately and hides its markers. Opacity is left to the caller.
    pub fn cancel(&mut self, markers: &mut MarkerPool) {
        if self.is_active() {
            log::debug!("wave on '{}' cancelled after {} ticks", markers.label(), self.ticks);
        }
        markers.hide_all();
        self.state = WaveState::Idle;
    }

    fn finish<H>(&mut self, markers: &mut MarkerPool, host: &mut H) -> WaveStatus
    where
        H: OpacityTarget + ?Sized,
    {
        markers.hide_all();
        self.state = WaveState::Idle;

        if !self.params.notify && !self.params.keep_dimmed {
            host.set_global_opacity(1.0);
        }

        log::debug!("wave on '{}' finished after {} ticks", markers.label(), self.ticks);
        WaveStatus::Finished { notify: self.params.notify }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec3;
    use crate::scene::MemoryScene;

    fn straight(len: f32) -> DensePath {
        DensePath::from_control_points(&[Vec3::zero(), Vec3::new(len, 0.0, 0.0)], 1.0)
    }

    fn params(step: f32) -> WaveParams {
        WaveParams { step_size: step, gap: 0.5, ..WaveParams::default() }
    }

    fn run_to_end(run: &mut WaveRun, pool: &mut MarkerPool, host: &mut MemoryScene) -> (u32, WaveStatus) {
        for _ in 0..10_000 {
            let status = run.tick(1.0 / 60.0, pool, host);
            if matches!(status, WaveStatus::Finished { .. }) {
                return (run.ticks(), status);
            }
        }
        panic!("wave never finished");
    }

    // ── termination ───────────────────────────────────────────────────────

    #[test]
    fn terminates_after_ceil_ticks() {
        // L = 10, N = 4, gap = 0.5 → end at 12.0; step 0.5 → 24 ticks.
        let mut pool = MarkerPool::new("t", 4, ColorRgba::SYMPATHETIC);
        let mut host = MemoryScene::new();
        let mut run = WaveRun::start(PoolId(0), &mut pool, straight(10.0), ColorRgba::SYMPATHETIC, params(0.5));
        let (ticks, status) = run_to_end(&mut run, &mut pool, &mut host);
        assert_eq!(ticks, 24);
        assert_eq!(status, WaveStatus::Finished { notify: false });
        assert_eq!(run.state(), WaveState::Idle);
    }

    #[test]
    fn terminates_after_ceil_ticks_non_integral() {
        // end = 10 + 4 * 0.5 = 12.0; step 2.5 → ceil(4.8) = 5 ticks.
        let mut pool = MarkerPool::new("t", 4, ColorRgba::SYMPATHETIC);
        let mut host = MemoryScene::new();
        let mut run = WaveRun::start(PoolId(0), &mut pool, straight(10.0), ColorRgba::SYMPATHETIC, params(2.5));
        assert_eq!(run_to_end(&mut run, &mut pool, &mut host).0, 5);
    }

    #[test]
    fn hold_ticks_extend_the_run() {
        let mut pool = MarkerPool::new("t", 4, ColorRgba::SYMPATHETIC);
        let mut host = MemoryScene::new();
        let p = params(0.5).with_hold(3);
        let mut run = WaveRun::start(PoolId(0), &mut pool, straight(10.0), ColorRgba::SYMPATHETIC, p);
        for _ in 0..24 {
            assert_ne!(run.tick(0.016, &mut pool, &mut host), WaveStatus::Finished { notify: false });
        }
        assert_eq!(run.state(), WaveState::Completing);
        assert_eq!(pool.visible_count(), 0);
        assert_eq!(host.opacity(), WaveParams::DEFAULT_DIM_OPACITY);
        assert_eq!(run.tick(0.016, &mut pool, &mut host), WaveStatus::Holding);
        assert_eq!(run.tick(0.016, &mut pool, &mut host), WaveStatus::Holding);
        assert_eq!(run.tick(0.016, &mut pool, &mut host), WaveStatus::Finished { notify: false });
        assert_eq!(host.opacity(), 1.0);
    }

    // ── marker placement ──────────────────────────────────────────────────

    #[test]
    fn markers_trail_by_gap() {
        let mut pool = MarkerPool::new("t", 3, ColorRgba::SYMPATHETIC);
        let mut host = MemoryScene::new();
        let mut run = WaveRun::start(PoolId(0), &mut pool, straight(10.0), ColorRgba::SYMPATHETIC, params(0.5));
        for _ in 0..4 {
            run.tick(0.016, &mut pool, &mut host);
        }
        // head = 2.0 → markers at 2.0, 1.5, 1.0
        let xs: Vec<f32> = pool.iter().map(|m| m.position.x).collect();
        assert_eq!(xs, vec![2.0, 1.5, 1.0]);
        assert_eq!(pool.visible_count(), 3);
    }

    #[test]
    fn marker_hidden_until_its_parameter_reaches_the_path() {
        let mut pool = MarkerPool::new("t", 4, ColorRgba::SYMPATHETIC);
        let mut host = MemoryScene::new();
        let mut run = WaveRun::start(PoolId(0), &mut pool, straight(10.0), ColorRgba::SYMPATHETIC, params(0.5));
        run.tick(0.016, &mut pool, &mut host);
        // head = 0.5 → params 0.5, 0.0, -0.5, -1.0
        let vis: Vec<bool> = pool.iter().map(|m| m.visible).collect();
        assert_eq!(vis, vec![true, true, false, false]);
    }

    #[test]
    fn model_is_dimmed_while_running_and_restored_after() {
        let mut pool = MarkerPool::new("t", 2, ColorRgba::SYMPATHETIC);
        let mut host = MemoryScene::new();
        let mut run = WaveRun::start(PoolId(0), &mut pool, straight(2.0), ColorRgba::SYMPATHETIC, params(0.5));
        run.tick(0.016, &mut pool, &mut host);
        assert_eq!(host.opacity(), WaveParams::DEFAULT_DIM_OPACITY);
        run_to_end(&mut run, &mut pool, &mut host);
        assert_eq!(host.opacity(), 1.0);
        assert_eq!(pool.visible_count(), 0);
    }

    #[test]
    fn keep_dimmed_and_notify_leave_opacity_alone() {
        for p in [params(0.5).keep_dimmed(true), params(0.5).notify(true)] {
            let mut pool = MarkerPool::new("t", 2, ColorRgba::SYMPATHETIC);
            let mut host = MemoryScene::new();
            let mut run = WaveRun::start(PoolId(0), &mut pool, straight(2.0), ColorRgba::SYMPATHETIC, p);
            let (_, status) = run_to_end(&mut run, &mut pool, &mut host);
            assert_eq!(status, WaveStatus::Finished { notify: p.notify });
            assert_eq!(host.opacity(), WaveParams::DEFAULT_DIM_OPACITY);
        }
    }

    #[test]
    fn start_recolors_and_hides() {
        let mut pool = MarkerPool::new("t", 2, ColorRgba::SYMPATHETIC);
        pool.markers_mut()[0].visible = true;
        let run = WaveRun::start(PoolId(0), &mut pool, straight(2.0), ColorRgba::PARASYMPATHETIC, params(0.5));
        assert_eq!(run.state(), WaveState::Running);
        assert_eq!(pool.visible_count(), 0);
        assert!(pool.iter().all(|m| m.color == ColorRgba::PARASYMPATHETIC));
    }

    // ── degenerate / timing ───────────────────────────────────────────────

    #[test]
    fn degenerate_path_completes_on_first_tick() {
        let mut pool = MarkerPool::new("t", 2, ColorRgba::SYMPATHETIC);
        let mut host = MemoryScene::new();
        let path = DensePath::new(vec![Vec3::zero()]);
        let mut run = WaveRun::start(PoolId(0), &mut pool, path, ColorRgba::SYMPATHETIC, params(0.5).notify(true));
        assert_eq!(run.tick(0.016, &mut pool, &mut host), WaveStatus::Finished { notify: true });
        assert_eq!(pool.visible_count(), 0);
        assert!(host.opacity_log().is_empty());
    }

    #[test]
    fn reference_fps_scales_advance_by_dt() {
        let mut pool = MarkerPool::new("t", 1, ColorRgba::SYMPATHETIC);
        let mut host = MemoryScene::new();
        let p = WaveParams { reference_fps: Some(60.0), ..params(0.5) };
        let mut run = WaveRun::start(PoolId(0), &mut pool, straight(10.0), ColorRgba::SYMPATHETIC, p);
        run.tick(0.5, &mut pool, &mut host);
        assert_eq!(run.head(), 15.0);
        assert_eq!(run.state(), WaveState::Idle);
    }

    #[test]
    fn cancel_hides_markers_and_idles() {
        let mut pool = MarkerPool::new("t", 3, ColorRgba::SYMPATHETIC);
        let mut host = MemoryScene::new();
        let mut run = WaveRun::start(PoolId(0), &mut pool, straight(10.0), ColorRgba::SYMPATHETIC, params(0.5));
        run.tick(0.016, &mut pool, &mut host);
        run.tick(0.016, &mut pool, &mut host);
        assert!(pool.visible_count() > 0);
        run.cancel(&mut pool);
        assert_eq!(pool.visible_count(), 0);
        assert_eq!(run.tick(0.016, &mut pool, &mut host), WaveStatus::Idle);
    }
}
