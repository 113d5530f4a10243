use std::fmt;

/// Why a route request was rejected. None of these are fatal.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RouteError {
    /// A route was requested before any nerve mode was selected.
    NoNerveMode { route: String },
    UnknownRoute(String),
    UnknownMode(String),
    /// The route is restricted to other modes.
    ModeNotSupported { route: String, mode: String },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::NoNerveMode { route } => {
                write!(f, "no nerve mode selected; ignoring route '{route}'")
            }
            RouteError::UnknownRoute(name) => write!(f, "unknown route '{name}'"),
            RouteError::UnknownMode(name) => write!(f, "unknown nerve mode '{name}'"),
            RouteError::ModeNotSupported { route, mode } => {
                write!(f, "route '{route}' does not run in mode '{mode}'")
            }
        }
    }
}

impl std::error::Error for RouteError {}
