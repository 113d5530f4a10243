use crate::coords::ColorRgba;
use crate::path::DensePath;
use crate::scene::{MarkerPool, OpacityTarget, PoolId};
use crate::wave::{WaveParams, WaveRun, WaveStatus};

use super::Join;

/// Dense paths and pools of a forked route.
///
/// Branch paths start at the first node after the fork; the common prefix is
/// never part of them. The common stage runs on the left pool.
#[derive(Debug, Clone, PartialEq)]
pub struct ForkedPaths {
    pub common: DensePath,
    pub left: DensePath,
    pub right: DensePath,
    pub left_pool: PoolId,
    pub right_pool: PoolId,
}

/// Progress of a forked run.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ForkStatus {
    Idle,
    Common,
    Branches,
    /// Both branches have completed on this tick.
    Finished,
}

#[derive(Debug, Clone)]
enum Stage {
    Common(WaveRun),
    Branches {
        left: WaveRun,
        right: WaveRun,
        join: Join,
    },
    Done,
}

/// Common prefix to completion, then both branches in parallel.
///
/// Every child wave keeps the model dimmed and reports completion; only the
/// join of both branches restores opacity, so a short branch finishing early
/// never flashes the model back while the other is still traveling.
#[derive(Debug, Clone)]
pub struct ForkedRun {
    paths: ForkedPaths,
    color: ColorRgba,
    params: WaveParams,
    stage: Stage,
}

impl ForkedRun {
    pub fn start(
        paths: ForkedPaths,
        pools: &mut [MarkerPool],
        color: ColorRgba,
        params: WaveParams,
    ) -> Self {
        let params = params.notify(true).keep_dimmed(true);
        let common = WaveRun::start(
            paths.left_pool,
            &mut pools[paths.left_pool.0],
            paths.common.clone(),
            color,
            params,
        );
        Self { paths, color, params, stage: Stage::Common(common) }
    }

    pub fn status(&self) -> ForkStatus {
        match self.stage {
            Stage::Common(_) => ForkStatus::Common,
            Stage::Branches { .. } => ForkStatus::Branches,
            Stage::Done => ForkStatus::Idle,
        }
    }

    pub fn tick<H>(&mut self, dt: f32, pools: &mut [MarkerPool], host: &mut H) -> ForkStatus
    where
        H: OpacityTarget + ?Sized,
    {
        match &mut self.stage {
            Stage::Common(run) => {
                let id = run.pool();
                if let WaveStatus::Finished { .. } = run.tick(dt, &mut pools[id.0], host) {
                    self.stage = self.start_branches(pools);
                }
                ForkStatus::Common
            }
            Stage::Branches { left, right, join } => {
                let mut joined = false;
                for run in [left, right] {
                    if !run.is_active() {
                        continue;
                    }
                    let id = run.pool();
                    if let WaveStatus::Finished { .. } = run.tick(dt, &mut pools[id.0], host) {
                        joined |= join.arrive();
                    }
                }
                if !joined {
                    return ForkStatus::Branches;
                }
                host.set_global_opacity(1.0);
                self.stage = Stage::Done;
                log::debug!("forked run joined both branches");
                ForkStatus::Finished
            }
            Stage::Done => ForkStatus::Idle,
        }
    }

    /// Stops whichever stage is active and hides all pools this run touches.
    pub fn cancel(&mut self, pools: &mut [MarkerPool]) {
        match &mut self.stage {
            Stage::Common(run) => run.cancel(&mut pools[self.paths.left_pool.0]),
            Stage::Branches { left, right, .. } => {
                left.cancel(&mut pools[self.paths.left_pool.0]);
                right.cancel(&mut pools[self.paths.right_pool.0]);
            }
            Stage::Done => {}
        }
        pools[self.paths.left_pool.0].hide_all();
        pools[self.paths.right_pool.0].hide_all();
        self.stage = Stage::Done;
    }

    fn start_branches(&self, pools: &mut [MarkerPool]) -> Stage {
        log::debug!("fork reached; starting both branches");
        let left = WaveRun::start(
            self.paths.left_pool,
            &mut pools[self.paths.left_pool.0],
            self.paths.left.clone(),
            self.color,
            self.params,
        );
        let right = WaveRun::start(
            self.paths.right_pool,
            &mut pools[self.paths.right_pool.0],
            self.paths.right.clone(),
            self.color,
            self.params,
        );
        Stage::Branches { left, right, join: Join::new(2) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec3;
    use crate::scene::MemoryScene;

    fn x_path(len: f32) -> DensePath {
        DensePath::from_control_points(&[Vec3::zero(), Vec3::new(len, 0.0, 0.0)], 1.0)
    }

    fn setup(left: f32, right: f32) -> (ForkedRun, Vec<MarkerPool>) {
        let mut pools = vec![
            MarkerPool::new("pupil/left", 2, ColorRgba::SYMPATHETIC),
            MarkerPool::new("pupil/right", 2, ColorRgba::SYMPATHETIC),
        ];
        let paths = ForkedPaths {
            common: x_path(4.0),
            left: x_path(left),
            right: x_path(right),
            left_pool: PoolId(0),
            right_pool: PoolId(1),
        };
        let params = WaveParams { step_size: 1.0, gap: 0.5, ..WaveParams::default() };
        let run = ForkedRun::start(paths, &mut pools, ColorRgba::SYMPATHETIC, params);
        (run, pools)
    }

    #[test]
    fn joins_after_the_slower_branch() {
        // common: end = 4 + 2 * 0.5 = 5 → 5 ticks
        // left:   end = 2 + 1 = 3 → 3 ticks; right: end = 8 + 1 = 9 → 9 ticks
        let (mut run, mut pools) = setup(2.0, 8.0);
        let mut host = MemoryScene::new();

        for _ in 0..5 {
            assert_eq!(run.tick(0.016, &mut pools, &mut host), ForkStatus::Common);
        }
        assert_eq!(run.status(), ForkStatus::Branches);

        for tick in 1..=9 {
            let status = run.tick(0.016, &mut pools, &mut host);
            if tick < 9 {
                assert_eq!(status, ForkStatus::Branches, "tick {tick}");
                assert_eq!(host.opacity(), WaveParams::DEFAULT_DIM_OPACITY, "tick {tick}");
            } else {
                assert_eq!(status, ForkStatus::Finished);
            }
        }
        assert_eq!(host.opacity(), 1.0);
        assert_eq!(run.status(), ForkStatus::Idle);
        assert!(pools.iter().all(|p| p.visible_count() == 0));
    }

    #[test]
    fn left_pool_is_idle_after_short_branch() {
        let (mut run, mut pools) = setup(2.0, 8.0);
        let mut host = MemoryScene::new();
        for _ in 0..5 + 3 {
            run.tick(0.016, &mut pools, &mut host);
        }
        assert_eq!(pools[0].visible_count(), 0);
        assert!(pools[1].visible_count() > 0);
    }

    #[test]
    fn equal_branches_join_on_the_same_tick() {
        let (mut run, mut pools) = setup(3.0, 3.0);
        let mut host = MemoryScene::new();
        let mut ticks = 0;
        while run.tick(0.016, &mut pools, &mut host) != ForkStatus::Finished {
            ticks += 1;
            assert!(ticks < 100);
        }
        // 5 common ticks + 4 branch ticks, the last one returning Finished.
        assert_eq!(ticks + 1, 9);
    }

    #[test]
    fn cancel_hides_both_pools() {
        let (mut run, mut pools) = setup(3.0, 3.0);
        let mut host = MemoryScene::new();
        for _ in 0..7 {
            run.tick(0.016, &mut pools, &mut host);
        }
        assert!(pools.iter().all(|p| p.visible_count() > 0));
        run.cancel(&mut pools);
        assert!(pools.iter().all(|p| p.visible_count() == 0));
        assert_eq!(run.tick(0.016, &mut pools, &mut host), ForkStatus::Idle);
    }
}
