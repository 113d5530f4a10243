//! Synapse engine crate.
//!
//! Geometry, timing and animation core for visualizing nerve signals traveling
//! along anatomical routes of a loaded 3D model. Rendering, asset loading and GUI
//! wiring stay with the host; the engine only needs a way to look up node bounds
//! and to set the model's global opacity (see [`scene`]).

pub mod config;
pub mod coords;
pub mod logging;
pub mod mesh;
pub mod path;
pub mod route;
pub mod scene;
pub mod time;
pub mod wave;
