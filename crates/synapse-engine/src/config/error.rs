use std::fmt;

use synapse_routes::ParseError;

/// Failure to turn a route file into a [`RouteTable`](super::RouteTable).
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The source is not syntactically valid.
    Parse(ParseError),
    /// A declaration is well-formed but does not make sense.
    Invalid {
        /// 1-based line of the offending declaration or property.
        line: usize,
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(line: usize, msg: impl Into<String>) -> Self {
        Self::Invalid { line, message: msg.into() }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "{e}"),
            ConfigError::Invalid { line, message } => {
                write!(f, "invalid route file at line {line}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<ParseError> for ConfigError {
    fn from(e: ParseError) -> Self {
        ConfigError::Parse(e)
    }
}
