use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use synapse_engine::config::RouteTable;
use synapse_engine::coords::Vec3;
use synapse_engine::logging::{LoggingConfig, init_logging};
use synapse_engine::route::{AnimationController, ControllerStatus};
use synapse_engine::scene::MemoryScene;
use synapse_engine::time::FrameClock;

const BUNDLED_ROUTES: &str = include_str!("../routes/anatomy.routes");
const FRAME: Duration = Duration::from_millis(16);
const MAX_FRAMES: u64 = 10_000;

/// Command line: `synapse-studio [MODE] [ROUTE] [ROUTE_FILE]`.
struct Args {
    mode: String,
    route: String,
    routes_file: Option<PathBuf>,
}

impl Args {
    fn parse() -> anyhow::Result<Self> {
        let mut it = std::env::args().skip(1);
        let args = Self {
            mode: it.next().unwrap_or_else(|| "sympathetic".into()),
            route: it.next().unwrap_or_else(|| "pupil".into()),
            routes_file: it.next().map(PathBuf::from),
        };
        if let Some(extra) = it.next() {
            bail!("unexpected argument {extra:?}\nusage: synapse-studio [MODE] [ROUTE] [ROUTE_FILE]");
        }
        Ok(args)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    let args = Args::parse()?;
    let mut clock = FrameClock::new();

    let table = match &args.routes_file {
        Some(path) => RouteTable::load_path(path)?,
        None => RouteTable::parse(BUNDLED_ROUTES).context("bundled route file is invalid")?,
    };

    let mut scene = anatomy_scene();
    let origin = scene.bounds().map_or(Vec3::zero(), |b| b.center());
    let mut ctl = AnimationController::new(&table, &scene, origin);

    println!();
    println!("  synapse studio");
    println!("  routes: {}", ctl.route_names().collect::<Vec<_>>().join(", "));
    println!("  mode:   {}", args.mode);
    println!("  route:  {}", args.route);
    println!();

    ctl.set_nerve_mode(&args.mode)
        .with_context(|| format!("cannot select mode '{}'", args.mode))?;
    ctl.animate_route(&args.route, &mut scene)
        .with_context(|| format!("cannot animate route '{}'", args.route))?;

    clock.reset();
    loop {
        std::thread::sleep(FRAME);
        let frame = clock.tick();
        match ctl.tick(frame.dt, &mut scene) {
            ControllerStatus::Finished(route) => {
                log::info!("route '{route}' finished after {} frames", frame.frame_index);
                break;
            }
            ControllerStatus::Idle => break,
            ControllerStatus::Animating => {}
        }

        if frame.frame_index % 10 == 0 {
            let visible: Vec<_> = ctl.visible_markers().map(|m| m.position).collect();
            log::debug!(
                "frame {}: {} markers visible, opacity {:.2}",
                frame.frame_index,
                visible.len(),
                scene.opacity()
            );
            if let Some(lead) = visible.first() {
                log::trace!("lead marker at ({:.3}, {:.3}, {:.3})", lead.x, lead.y, lead.z);
            }
        }

        if frame.frame_index >= MAX_FRAMES {
            ctl.cancel(&mut scene);
            bail!("route '{}' did not finish within {MAX_FRAMES} frames", args.route);
        }
    }

    println!("  opacity writes: {:?}", scene.opacity_log());
    Ok(())
}

/// Node bounds for the anatomy model, in model units with y up.
fn anatomy_scene() -> MemoryScene {
    let node = |x: f32, y: f32, z: f32| Vec3::new(x, y, z);
    MemoryScene::new()
        .with_node("Hypothalamusr_grp1091", node(0.01, 1.62, 0.02), 0.01)
        .with_node("Midbrainl_grp1067", node(-0.01, 1.60, 0.00), 0.01)
        .with_node("Optic_chiasml_grp1061", node(0.00, 1.63, 0.04), 0.01)
        .with_node("Optic_nerve_(II)l_BezierCurve494", node(-0.02, 1.64, 0.06), 0.01)
        .with_node("Optic_nerve_(II)r_BezierCurve494", node(0.02, 1.64, 0.06), 0.01)
        .with_node("Iris-l_grp1077", node(-0.03, 1.65, 0.09), 0.005)
        .with_node("Iris-r_grp1077", node(0.03, 1.65, 0.09), 0.005)
        .with_node("Spinal_dura003_BezierCurve458", node(0.00, 1.30, -0.05), 0.02)
        .with_node("Trachea_Generated_Mesh_From_X3D829", node(0.00, 1.45, 0.02), 0.02)
        .with_node("4th_ribr_Generated_Mesh_From_X3D860", node(0.10, 1.25, 0.05), 0.04)
        .with_node("Heart_Generated_Mesh_From_X3D787", node(0.03, 1.25, 0.04), 0.06)
        .with_node("Oesophagus_Generated_Mesh_From_X3D731", node(0.00, 1.35, 0.00), 0.02)
        .with_node("Stomach001_grp1846", node(0.06, 1.12, 0.03), 0.06)
        .with_node("Small_intestine_grp11973", node(0.00, 0.98, 0.04), 0.10)
        .with_node("Ascending_colon_grp1480", node(-0.09, 0.98, 0.03), 0.04)
        .with_node("Transverse_colon_grp1455", node(0.00, 1.06, 0.05), 0.05)
        .with_node("Descending_colon_grp1280", node(0.09, 0.98, 0.03), 0.04)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> (AnimationController, MemoryScene) {
        let table = RouteTable::parse(BUNDLED_ROUTES).unwrap();
        let scene = anatomy_scene();
        let origin = scene.bounds().unwrap().center();
        (AnimationController::new(&table, &scene, origin), scene)
    }

    #[test]
    fn bundled_routes_resolve_every_node() {
        let (ctl, _) = controller();
        assert!(ctl.diagnostics().is_empty(), "{:?}", ctl.diagnostics());
        assert_eq!(ctl.route_names().collect::<Vec<_>>(), ["heart", "digestive", "pupil", "lung"]);
    }

    #[test]
    fn every_route_finishes_in_both_modes() {
        for mode in ["sympathetic", "parasympathetic"] {
            for route in ["heart", "digestive", "pupil", "lung"] {
                let (mut ctl, mut scene) = controller();
                ctl.set_nerve_mode(mode).unwrap();
                ctl.animate_route(route, &mut scene).unwrap();
                let finished = (0..MAX_FRAMES)
                    .find_map(|_| match ctl.tick(1.0 / 60.0, &mut scene) {
                        ControllerStatus::Finished(name) => Some(name),
                        _ => None,
                    });
                assert_eq!(finished.as_deref(), Some(route));
                assert_eq!(scene.opacity(), 1.0);
                assert_eq!(ctl.visible_markers().count(), 0);
            }
        }
    }
}
