use std::fmt::Display;

use log::trace;

use crate::{
    error::{ensure_positive, Error, Result},
    union_find::UnionFind,
};

////////////////////////////////////////////////////////////////////////////////

/// A site coordinate, `(row, col)`, both within `1..=n`.
pub type Site = (usize, usize);

/// An `n`-by-`n` grid of sites that are opened one at a time.
///
/// Connectivity to the top and to the bottom row is tracked as two flags
/// attached to each component root and OR-merged on every union. A site
/// reachable only from the bottom is therefore never reported as full, even
/// after the grid percolates.
pub struct Percolation {
    n: usize,
    open: Vec<bool>,
    open_count: usize,
    forest: UnionFind,
    to_top: Vec<bool>,
    to_bottom: Vec<bool>,
    percolates: bool,
}

impl Percolation {
    /// Creates a grid with every site blocked.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `n` is zero.
    pub fn new(n: usize) -> Result<Self> {
        ensure_positive("n", n)?;
        let sites = n * n;
        Ok(Self {
            n,
            open: vec![false; sites],
            open_count: 0,
            forest: UnionFind::new(sites),
            to_top: vec![false; sites],
            to_bottom: vec![false; sites],
            percolates: false,
        })
    }

    /// Returns grid side length.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Opens the site at `(row, col)`. Opening an open site does nothing.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `row` or `col` is not within `1..=n`.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let index = self.index(row, col)?;
        if self.open[index] {
            return Ok(());
        }
        trace!("opening ({row}, {col})");

        self.open[index] = true;
        self.open_count += 1;
        self.to_top[index] = row == 1;
        self.to_bottom[index] = row == self.n;

        let neighbours: Vec<usize> = self
            .neighbours(row, col)
            .map(|(r, c)| self.flat(r, c))
            .filter(|&i| self.open[i])
            .collect();
        for neighbour in neighbours {
            let lhs = self.forest.find(index)?;
            let rhs = self.forest.find(neighbour)?;
            let top = self.to_top[lhs] || self.to_top[rhs];
            let bottom = self.to_bottom[lhs] || self.to_bottom[rhs];
            let root = self.forest.union(lhs, rhs)?;
            self.to_top[root] = top;
            self.to_bottom[root] = bottom;
        }

        let root = self.forest.find(index)?;
        if self.to_top[root] && self.to_bottom[root] {
            self.percolates = true;
        }
        Ok(())
    }

    /// Returns `true` if the site at `(row, col)` is open.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.open[self.index(row, col)?])
    }

    /// Returns `true` if the site at `(row, col)` is connected to the top row
    /// through a chain of open neighbouring sites. Blocked sites are never full.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        let index = self.index(row, col)?;
        Ok(self.to_top[self.forest.root(index)?])
    }

    /// Returns `true` once some full site exists in the bottom row.
    pub fn percolates(&self) -> bool {
        self.percolates
    }

    pub fn open_count(&self) -> usize {
        self.open_count
    }

    /// Returns the fraction of open sites.
    pub fn open_fraction(&self) -> f64 {
        self.open_count as f64 / (self.n * self.n) as f64
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row < 1 || row > self.n || col < 1 || col > self.n {
            return Err(Error::OutOfRange { row, col, n: self.n });
        }
        Ok(self.flat(row, col))
    }

    fn flat(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + (col - 1)
    }

    fn neighbours(&self, row: usize, col: usize) -> impl Iterator<Item = Site> + '_ {
        [(-1, 0), (0, -1), (0, 1), (1, 0)]
            .iter()
            .filter_map(move |(dr, dc)| {
                let r = row as isize + dr;
                let c = col as isize + dc;

                if r >= 1 && r <= self.n as isize && c >= 1 && c <= self.n as isize {
                    return Some((r as usize, c as usize));
                }
                None
            })
    }
}

impl Display for Percolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 1..=self.n {
            for col in 1..=self.n {
                let index = self.flat(row, col);
                if !self.open[index] {
                    write!(f, "#")?;
                } else if self.is_full(row, col).map_err(|_| std::fmt::Error)? {
                    write!(f, "~")?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
