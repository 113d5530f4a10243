//! Route table configuration.
//!
//! Route files are parsed by `synapse-routes`; this module validates the
//! resulting document and turns it into typed definitions:
//! - [`AnimationSettings`] from the `Settings` block
//! - [`ModeDef`] per `Mode` declaration
//! - [`RouteDef`] per `Route` declaration (linear or forked)

mod error;
mod settings;
mod table;

pub use error::ConfigError;
pub use settings::AnimationSettings;
pub use table::{ModeDef, RouteDef, RouteShape, RouteTable};
