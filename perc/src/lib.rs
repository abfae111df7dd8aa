#![forbid(unsafe_code)]

//! Percolation threshold estimation on an `n`-by-`n` site grid.
//!
//! [`Percolation`] tracks open sites and answers connectivity queries as the
//! grid fills up, [`PercolationStats`] runs repeated random trials on top of it.

mod error;
mod monte_carlo;
mod percolation;
pub mod stats;

pub use dsu::{DisjointSet, QuickFind, UnionFind};
pub use error::{Error, Result};
pub use monte_carlo::{run_trial, PercolationStats, Sampling, Trial, TrialConfig};
pub use percolation::Percolation;
