use std::fmt;

use super::RouteError;

/// A non-fatal notice recorded by the controller for the host to surface.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Diagnostic {
    /// A route references a node the scene does not contain; the point was dropped.
    MissingNode { route: String, node: String },
    /// A request was refused.
    Rejected(RouteError),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingNode { route, node } => {
                write!(f, "route '{route}': node '{node}' not found in scene")
            }
            Diagnostic::Rejected(e) => write!(f, "{e}"),
        }
    }
}
