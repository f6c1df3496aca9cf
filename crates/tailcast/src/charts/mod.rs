//! Chart rendering for the forecast viewer.

pub mod histogram;
pub mod trajectories;
