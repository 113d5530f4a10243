use crate::coords::Vec3;
use crate::scene::NodeLookup;

/// Result of resolving node names to control points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Bounding-box centers relative to the model origin, in input order.
    pub points: Vec<Vec3>,
    /// Names the lookup could not resolve, in input order.
    pub missing: Vec<String>,
}

impl Extraction {
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Resolves `names` to control points relative to `origin`.
///
/// Each name maps to the center of its world-space bounds minus `origin`.
/// Names the lookup cannot resolve are skipped with a warning; the remaining
/// points keep their relative order.
pub fn extract_waypoints<L, S>(names: &[S], lookup: &L, origin: Vec3) -> Extraction
where
    L: NodeLookup + ?Sized,
    S: AsRef<str>,
{
    let mut out = Extraction {
        points: Vec::with_capacity(names.len()),
        missing: Vec::new(),
    };

    for name in names {
        let name = name.as_ref();
        match lookup.world_bounds(name) {
            Some(bounds) => out.points.push(bounds.center() - origin),
            None => {
                log::warn!("node not found: {name}");
                out.missing.push(name.to_string());
            }
        }
    }

    out
}
