use crate::config::{AnimationSettings, ModeDef, RouteDef, RouteShape, RouteTable};
use crate::coords::{ColorRgba, Vec3};
use crate::path::{extract_waypoints, DensePath};
use crate::scene::{Marker, MarkerPool, NodeLookup, OpacityTarget, PoolId};
use crate::wave::{WaveRun, WaveStatus};

use super::{Diagnostic, ForkStatus, ForkedPaths, ForkedRun, RouteError};

/// Result of a controller tick.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ControllerStatus {
    /// Nothing is animating.
    Idle,
    Animating,
    /// The named route completed on this tick.
    Finished(String),
}

#[derive(Debug, Clone)]
enum Plan {
    Linear { path: DensePath, pool: PoolId },
    Forked(ForkedPaths),
}

#[derive(Debug, Clone)]
struct ResolvedRoute {
    def: RouteDef,
    step_size: f32,
    plan: Plan,
}

#[derive(Debug, Clone)]
enum Flow {
    Linear(WaveRun),
    Forked(ForkedRun),
}

#[derive(Debug, Clone)]
struct ActiveRoute {
    name: String,
    flow: Flow,
}

/// Owns the marker pools, the selected nerve mode and the single active run.
///
/// Construct one per scene. Routes are resolved against the scene once, at
/// construction; afterwards the host only needs an [`OpacityTarget`] for
/// [`animate_route`](Self::animate_route), [`cancel`](Self::cancel) and
/// [`tick`](Self::tick).
///
/// Starting a route always cancels the previous one first: every pool is
/// hidden and, if a run was in flight, the model opacity is restored. Two runs
/// never write to the same markers.
#[derive(Debug, Clone)]
pub struct AnimationController {
    settings: AnimationSettings,
    modes: Vec<ModeDef>,
    routes: Vec<ResolvedRoute>,
    pools: Vec<MarkerPool>,
    mode: Option<usize>,
    active: Option<ActiveRoute>,
    diagnostics: Vec<Diagnostic>,
}

impl AnimationController {
    /// Resolves every route of `table` against `lookup`, relative to `origin`
    /// (usually the center of the model's bounds), and allocates one marker pool
    /// per linear route and two per forked route.
    pub fn new<L>(table: &RouteTable, lookup: &L, origin: Vec3) -> Self
    where
        L: NodeLookup + ?Sized,
    {
        let settings = table.settings;
        let color = table.modes.first().map_or(ColorRgba::SYMPATHETIC, |m| m.color);
        let mut pools = Vec::new();
        let mut diagnostics = Vec::new();
        let mut alloc = |label: String| {
            pools.push(MarkerPool::new(label, settings.marker_count, color));
            PoolId(pools.len() - 1)
        };

        let mut resolve = |route: &str, names: &[String]| {
            let extraction = extract_waypoints(names, lookup, origin);
            diagnostics.extend(extraction.missing.into_iter().map(|node| Diagnostic::MissingNode {
                route: route.to_string(),
                node,
            }));
            DensePath::from_control_points(&extraction.points, settings.spacing)
        };

        let routes = table
            .routes
            .iter()
            .map(|def| {
                let plan = match &def.shape {
                    RouteShape::Linear { nodes } => Plan::Linear {
                        path: resolve(&def.name, nodes),
                        pool: alloc(def.name.clone()),
                    },
                    RouteShape::Forked { common, left, right } => Plan::Forked(ForkedPaths {
                        common: resolve(&def.name, common),
                        left: resolve(&def.name, left),
                        right: resolve(&def.name, right),
                        left_pool: alloc(format!("{}/left", def.name)),
                        right_pool: alloc(format!("{}/right", def.name)),
                    }),
                };
                ResolvedRoute {
                    def: def.clone(),
                    step_size: def.step_size.unwrap_or(settings.step_size),
                    plan,
                }
            })
            .collect();

        log::debug!("animation controller ready: {} pools", pools.len());

        Self {
            settings,
            modes: table.modes.clone(),
            routes,
            pools,
            mode: None,
            active: None,
            diagnostics,
        }
    }

    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    pub fn route_names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.def.name.as_str())
    }

    /// The dense path a route starts on (the common prefix for forked routes).
    pub fn route_path(&self, name: &str) -> Option<&DensePath> {
        self.routes.iter().find(|r| r.def.name == name).map(|r| match &r.plan {
            Plan::Linear { path, .. } => path,
            Plan::Forked(paths) => &paths.common,
        })
    }

    // ── Nerve mode ────────────────────────────────────────────────────────

    pub fn nerve_mode(&self) -> Option<&str> {
        self.mode.map(|i| self.modes[i].name.as_str())
    }

    /// Selects the nerve mode and recolors every pool with its color.
    pub fn set_nerve_mode(&mut self, name: &str) -> Result<(), RouteError> {
        let Some(index) = self.modes.iter().position(|m| m.name == name) else {
            return self.reject(RouteError::UnknownMode(name.to_string()));
        };
        self.mode = Some(index);
        let color = self.modes[index].color;
        for pool in &mut self.pools {
            pool.set_color(color);
        }
        log::info!("nerve mode: {name}");
        Ok(())
    }

    // ── Runs ──────────────────────────────────────────────────────────────

    /// Starts the named route, replacing any run in progress.
    ///
    /// Rejected requests change nothing: no marker becomes visible and the model
    /// opacity is not touched. The rejection is logged and recorded as a
    /// [`Diagnostic`].
    pub fn animate_route<H>(&mut self, name: &str, host: &mut H) -> Result<(), RouteError>
    where
        H: OpacityTarget + ?Sized,
    {
        let Some(mode) = self.mode else {
            return self.reject(RouteError::NoNerveMode { route: name.to_string() });
        };
        let mode = &self.modes[mode];
        let Some(route) = self.routes.iter().find(|r| r.def.name == name) else {
            return self.reject(RouteError::UnknownRoute(name.to_string()));
        };
        if !route.def.allows_mode(&mode.name) {
            let err = RouteError::ModeNotSupported { route: name.to_string(), mode: mode.name.clone() };
            return self.reject(err);
        }

        let color = mode.color;
        let params = self.settings.wave_params(route.step_size);
        let plan = route.plan.clone();

        self.cancel(host);

        let flow = match plan {
            Plan::Linear { path, pool } => {
                Flow::Linear(WaveRun::start(pool, &mut self.pools[pool.0], path, color, params))
            }
            Plan::Forked(paths) => Flow::Forked(ForkedRun::start(paths, &mut self.pools, color, params)),
        };
        self.active = Some(ActiveRoute { name: name.to_string(), flow });
        log::info!("route '{name}' started");
        Ok(())
    }

    /// Stops the active run, hides every pool and restores the model opacity if
    /// a run was in flight.
    pub fn cancel<H>(&mut self, host: &mut H)
    where
        H: OpacityTarget + ?Sized,
    {
        if let Some(mut active) = self.active.take() {
            match &mut active.flow {
                Flow::Linear(run) => {
                    let id = run.pool();
                    run.cancel(&mut self.pools[id.0]);
                }
                Flow::Forked(run) => run.cancel(&mut self.pools),
            }
            host.set_global_opacity(1.0);
            log::debug!("route '{}' cancelled", active.name);
        }
        for pool in &mut self.pools {
            pool.hide_all();
        }
    }

    /// Advances the active run by one frame of `dt` seconds.
    pub fn tick<H>(&mut self, dt: f32, host: &mut H) -> ControllerStatus
    where
        H: OpacityTarget + ?Sized,
    {
        let Some(active) = self.active.as_mut() else {
            return ControllerStatus::Idle;
        };

        let finished = match &mut active.flow {
            Flow::Linear(run) => {
                let id = run.pool();
                matches!(run.tick(dt, &mut self.pools[id.0], host), WaveStatus::Finished { .. })
            }
            Flow::Forked(run) => run.tick(dt, &mut self.pools, host) == ForkStatus::Finished,
        };

        if !finished {
            return ControllerStatus::Animating;
        }

        let name = self.active.take().map(|a| a.name).unwrap_or_default();
        log::info!("route '{name}' finished");
        ControllerStatus::Finished(name)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_route(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.name.as_str())
    }

    // ── Markers ───────────────────────────────────────────────────────────

    pub fn pools(&self) -> &[MarkerPool] {
        &self.pools
    }

    pub fn pool(&self, label: &str) -> Option<&MarkerPool> {
        self.pools.iter().find(|p| p.label() == label)
    }

    /// Every visible marker across all pools, for the host to draw.
    pub fn visible_markers(&self) -> impl Iterator<Item = &Marker> {
        self.pools.iter().flat_map(|p| p.iter()).filter(|m| m.visible)
    }

    // ── Diagnostics ───────────────────────────────────────────────────────

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Drains recorded diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    fn reject(&mut self, err: RouteError) -> Result<(), RouteError> {
        log::warn!("{err}");
        self.diagnostics.push(Diagnostic::Rejected(err.clone()));
        Err(err)
    }
}
