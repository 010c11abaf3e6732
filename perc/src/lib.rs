#![forbid(unsafe_code)]

//! Site percolation on an `n`-by-`n` grid and Monte Carlo estimation of the
//! percolation threshold.

mod error;
mod grid;
mod stats;
mod union_find;

pub use error::{Error, Result};
pub use grid::{Percolation, Site};
pub use stats::{estimate_probability, fill, run_trial, PercolationStats};
pub use union_find::UnionFind;
