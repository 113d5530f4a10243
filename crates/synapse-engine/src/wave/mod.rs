//! Wave animation: a pool of markers trailing each other along a dense path.
//!
//! A [`WaveRun`] never owns its markers or the host model. The owner passes the
//! pool and the opacity target into every [`WaveRun::tick`], which keeps the
//! single-writer rule enforceable by whoever holds the pools.

mod params;
mod run;

pub use params::WaveParams;
pub use run::{WaveRun, WaveState, WaveStatus};
