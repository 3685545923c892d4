//! Umbrella-sampling preparation and free-energy post-processing for
//! single-molecule force spectroscopy.
//!
//! [`create_files`] splits a displacement time series into fixed-size
//! umbrella windows, writes the file layout the external `wham` solver
//! expects, and builds its command line. Once the solver has run, the
//! [`landscape`] modules load ([`load_results`]), plot ([`plot_results`]),
//! and smooth/differentiate ([`fit_landscape`]) the reconstructed profile,
//! and [`multi_sigmoid`] / [`multi_tanh`] provide closed-form multi-well
//! models for external curve-fitting routines.

pub mod error;
pub mod landscape;
pub mod prep;

pub use error::Error;
pub use landscape::analyze::{LandscapeFit, fit_landscape, second_derivative, smooth};
pub use landscape::loader::{FreeEnergyProfile, load_results};
pub use landscape::models::{multi_sigmoid, multi_tanh};
pub use landscape::plot::{PlotStyle, plot_results};
pub use prep::command::SolverInvocation;
pub use prep::create_files;
