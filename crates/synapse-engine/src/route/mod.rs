//! Route orchestration: which waves run, on which pools, in which order.
//!
//! - [`Join`]: counting barrier for parallel branch completions
//! - [`ForkedRun`]: common prefix first, then two branches joined by a [`Join`]
//! - [`AnimationController`]: owns every marker pool and the single active run

mod controller;
mod diagnostic;
mod error;
mod fork;
mod join;

pub use controller::{AnimationController, ControllerStatus};
pub use diagnostic::Diagnostic;
pub use error::RouteError;
pub use fork::{ForkedPaths, ForkedRun, ForkStatus};
pub use join::Join;
