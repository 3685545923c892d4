//! Post-processing of the solver's free-energy output: loading, plotting,
//! smoothing and curvature, and closed-form multi-well models for external
//! fitting routines.

pub mod analyze;
pub mod loader;
pub mod models;
pub mod plot;
