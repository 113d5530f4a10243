use std::path::Path;

use anyhow::Context;
use synapse_routes::{Node, Prop, RouteDocument, Value};

use crate::coords::ColorRgba;

use super::{AnimationSettings, ConfigError};

/// A nerve mode and the marker color it paints with.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeDef {
    pub name: String,
    pub color: ColorRgba,
}

/// Node names making up a route.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteShape {
    /// One ordered run of nodes.
    Linear { nodes: Vec<String> },
    /// A shared prefix that splits into two branches. Branch lists hold only the
    /// nodes after the fork; the prefix is never repeated.
    Forked {
        common: Vec<String>,
        left: Vec<String>,
        right: Vec<String>,
    },
}

/// A named route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDef {
    pub name: String,
    /// Modes allowed to trigger this route; empty means any.
    pub modes: Vec<String>,
    /// Per-route head advance, overriding [`AnimationSettings::step_size`].
    pub step_size: Option<f32>,
    pub shape: RouteShape,
}

impl RouteDef {
    pub fn allows_mode(&self, mode: &str) -> bool {
        self.modes.is_empty() || self.modes.iter().any(|m| m == mode)
    }
}

/// Everything a route file defines, validated.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    pub settings: AnimationSettings,
    pub modes: Vec<ModeDef>,
    pub routes: Vec<RouteDef>,
}

impl Default for RouteTable {
    /// Default settings, the two autonomic modes and no routes.
    fn default() -> Self {
        Self {
            settings: AnimationSettings::default(),
            modes: vec![
                ModeDef { name: "sympathetic".into(), color: ColorRgba::SYMPATHETIC },
                ModeDef { name: "parasympathetic".into(), color: ColorRgba::PARASYMPATHETIC },
            ],
            routes: Vec::new(),
        }
    }
}

impl RouteTable {
    /// Parses and validates a route file source.
    pub fn parse(src: &str) -> Result<Self, ConfigError> {
        let doc = synapse_routes::parse_str(src)?;
        Self::from_document(&doc)
    }

    /// Reads, parses and validates a route file.
    pub fn load_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read route file {}", path.display()))?;
        let table = Self::parse(&src)
            .with_context(|| format!("failed to load route file {}", path.display()))?;
        log::info!(
            "loaded {} routes and {} modes from {}",
            table.routes.len(),
            table.modes.len(),
            path.display()
        );
        Ok(table)
    }

    /// Validates a parsed document.
    ///
    /// Declarations are applied in order on top of [`RouteTable::default`]; a
    /// `Mode` with a built-in name replaces its color.
    pub fn from_document(doc: &RouteDocument) -> Result<Self, ConfigError> {
        let mut table = RouteTable::default();

        for node in &doc.nodes {
            match node.kind.as_str() {
                "Settings" => apply_settings(&mut table.settings, node)?,
                "Mode" => {
                    let mode = parse_mode(node)?;
                    match table.modes.iter_mut().find(|m| m.name == mode.name) {
                        Some(existing) => *existing = mode,
                        None => table.modes.push(mode),
                    }
                }
                "Route" => {
                    let route = parse_route(node)?;
                    if table.route(&route.name).is_some() {
                        return Err(ConfigError::invalid(
                            node.line,
                            format!("duplicate route '{}'", route.name),
                        ));
                    }
                    table.routes.push(route);
                }
                other => {
                    return Err(ConfigError::invalid(
                        node.line,
                        format!("unknown declaration '{other}' (expected Settings, Mode or Route)"),
                    ));
                }
            }
        }

        for route in &table.routes {
            if let Some(unknown) = route.modes.iter().find(|m| table.mode(m).is_none()) {
                return Err(ConfigError::invalid(
                    doc.nodes_of("Route")
                        .find(|n| n.name.as_deref() == Some(route.name.as_str()))
                        .map_or(0, |n| n.line),
                    format!("route '{}' refers to undeclared mode '{unknown}'", route.name),
                ));
            }
        }

        Ok(table)
    }

    pub fn route(&self, name: &str) -> Option<&RouteDef> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub fn mode(&self, name: &str) -> Option<&ModeDef> {
        self.modes.iter().find(|m| m.name == name)
    }
}

// ── Settings ──────────────────────────────────────────────────────────────

fn apply_settings(settings: &mut AnimationSettings, node: &Node) -> Result<(), ConfigError> {
    reject_children(node)?;
    for prop in &node.props {
        match prop.key.as_str() {
            "spacing" => settings.spacing = positive(prop)?,
            "markers" => {
                let n = count(prop)?;
                if !(1..=AnimationSettings::MAX_MARKER_COUNT).contains(&n) {
                    return Err(ConfigError::invalid(
                        prop.line,
                        format!("markers must lie in [1, {}]", AnimationSettings::MAX_MARKER_COUNT),
                    ));
                }
                settings.marker_count = n;
            }
            "gap" => settings.gap = non_negative(prop)?,
            "step" => settings.step_size = positive(prop)?,
            "dim_opacity" => {
                let v = non_negative(prop)?;
                if v > 1.0 {
                    return Err(ConfigError::invalid(prop.line, "dim_opacity must lie in [0, 1]"));
                }
                settings.dim_opacity = v;
            }
            "hold" => {
                settings.hold_ticks = u32::try_from(count(prop)?)
                    .map_err(|_| ConfigError::invalid(prop.line, "hold is out of range"))?;
            }
            "fps" => settings.reference_fps = Some(positive(prop)?),
            other => {
                return Err(ConfigError::invalid(prop.line, format!("unknown setting '{other}'")));
            }
        }
    }
    Ok(())
}

// ── Mode ──────────────────────────────────────────────────────────────────

fn parse_mode(node: &Node) -> Result<ModeDef, ConfigError> {
    let name = declared_name(node)?;
    reject_children(node)?;
    let mut color = None;
    for prop in &node.props {
        match prop.key.as_str() {
            "color" => match prop.single() {
                Some(Value::Color(c)) => color = Some(ColorRgba::from_srgb_u8(*c)),
                _ => return Err(ConfigError::invalid(prop.line, "color expects one #rrggbb value")),
            },
            other => {
                return Err(ConfigError::invalid(
                    prop.line,
                    format!("unknown property '{other}' on mode '{name}'"),
                ));
            }
        }
    }
    let color = color
        .ok_or_else(|| ConfigError::invalid(node.line, format!("mode '{name}' has no color")))?;
    Ok(ModeDef { name, color })
}

// ── Route ─────────────────────────────────────────────────────────────────

fn parse_route(node: &Node) -> Result<RouteDef, ConfigError> {
    let name = declared_name(node)?;
    reject_children(node)?;
    let mut modes = Vec::new();
    let mut step_size = None;
    let (mut nodes, mut common, mut left, mut right) = (None, None, None, None);

    for prop in &node.props {
        match prop.key.as_str() {
            "modes" => modes = names(prop)?,
            "step" => step_size = Some(positive(prop)?),
            "nodes" => nodes = Some(names(prop)?),
            "common" => common = Some(names(prop)?),
            "left" => left = Some(names(prop)?),
            "right" => right = Some(names(prop)?),
            other => {
                return Err(ConfigError::invalid(
                    prop.line,
                    format!("unknown property '{other}' on route '{name}'"),
                ));
            }
        }
    }

    let shape = match (nodes, common, left, right) {
        (Some(nodes), None, None, None) => RouteShape::Linear { nodes },
        (None, Some(common), Some(left), Some(right)) => RouteShape::Forked { common, left, right },
        (Some(_), ..) => {
            return Err(ConfigError::invalid(
                node.line,
                format!("route '{name}' mixes 'nodes' with 'common'/'left'/'right'"),
            ));
        }
        (None, None, None, None) => {
            return Err(ConfigError::invalid(node.line, format!("route '{name}' has no nodes")));
        }
        _ => {
            return Err(ConfigError::invalid(
                node.line,
                format!("forked route '{name}' needs 'common', 'left' and 'right'"),
            ));
        }
    };

    Ok(RouteDef { name, modes, step_size, shape })
}

// ── Value helpers ─────────────────────────────────────────────────────────

fn reject_children(node: &Node) -> Result<(), ConfigError> {
    match node.children.first() {
        Some(child) => Err(ConfigError::invalid(
            child.line,
            format!("unexpected nested declaration '{}' inside {}", child.kind, node.kind),
        )),
        None => Ok(()),
    }
}

fn declared_name(node: &Node) -> Result<String, ConfigError> {
    node.name
        .clone()
        .ok_or_else(|| ConfigError::invalid(node.line, format!("{} needs a name", node.kind)))
}

fn number(prop: &Prop) -> Result<f32, ConfigError> {
    match prop.single() {
        Some(Value::Number(v)) if v.is_finite() => Ok(*v),
        _ => Err(ConfigError::invalid(prop.line, format!("'{}' expects one number", prop.key))),
    }
}

fn positive(prop: &Prop) -> Result<f32, ConfigError> {
    let v = number(prop)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(ConfigError::invalid(prop.line, format!("'{}' must be positive", prop.key)))
    }
}

fn non_negative(prop: &Prop) -> Result<f32, ConfigError> {
    let v = number(prop)?;
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(ConfigError::invalid(prop.line, format!("'{}' must not be negative", prop.key)))
    }
}

fn count(prop: &Prop) -> Result<usize, ConfigError> {
    let v = non_negative(prop)?;
    if v.fract() != 0.0 {
        return Err(ConfigError::invalid(prop.line, format!("'{}' must be a whole number", prop.key)));
    }
    Ok(v as usize)
}

fn names(prop: &Prop) -> Result<Vec<String>, ConfigError> {
    prop.values
        .iter()
        .map(|v| {
            v.as_str().map(str::to_string).ok_or_else(|| {
                ConfigError::invalid(prop.line, format!("'{}' expects names, got {:?}", prop.key, v))
            })
        })
        .collect()
}
