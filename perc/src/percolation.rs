use dsu::{DisjointSet, UnionFind};

use crate::{Error, Result};

////////////////////////////////////////////////////////////////////////////////

/// Label of the virtual site above the first row.
const TOP: usize = 0;

const NEIGHBOURS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// An `n`-by-`n` grid of sites, each either open or closed.
///
/// Sites are addressed by 1-based `(row, col)` and map to the labels
/// `1..=n * n` row by row. Label `0` is a virtual site joined to every open
/// site of the first row, label `n * n + 1` a virtual site joined to every
/// open site of the last row.
///
/// Two union-find structures are kept. `flow` contains both virtual sites and
/// answers [`percolates`](Self::percolates). `full` never sees the bottom
/// virtual site, so an open site in the last row does not become full just
/// because some other column reaches the bottom.
#[derive(Debug, Clone)]
pub struct Percolation<U = UnionFind> {
    size: usize,
    open: Vec<bool>,
    open_count: usize,
    full: U,
    flow: U,
    percolates: bool,
}

impl Percolation {
    /// Creates a grid with all sites closed.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSize`] if `size` is zero or the grid would not fit
    /// into the label space.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_backend(size)
    }
}

impl<U: DisjointSet> Percolation<U> {
    /// Same as [`Percolation::new`] with a different union-find backend.
    pub fn with_backend(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize);
        }
        let sites = size
            .checked_mul(size)
            .filter(|sites| *sites <= isize::MAX as usize - 2)
            .ok_or(Error::InvalidSize)?;

        Ok(Self {
            size,
            open: vec![false; sites + 1],
            open_count: 0,
            full: U::with_len(sites + 1),
            flow: U::with_len(sites + 2),
            percolates: false,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Opens the site if it is not open already.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.label(row, col)?;
        if self.open[site] {
            return Ok(());
        }

        self.open[site] = true;
        self.open_count += 1;

        let bottom = self.bottom();
        if row == 1 {
            self.full.union(site, TOP);
            self.flow.union(site, TOP);
        }
        if row == self.size {
            self.flow.union(site, bottom);
        }

        for (dr, dc) in NEIGHBOURS {
            if let Some(neighbour) = self.neighbour(row, col, dr, dc) {
                if self.open[neighbour] {
                    self.full.union(site, neighbour);
                    self.flow.union(site, neighbour);
                }
            }
        }

        // once set, never cleared: sites are never closed again
        if !self.percolates {
            self.percolates = self.flow.connected(TOP, bottom);
        }
        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.open[self.label(row, col)?])
    }

    /// Returns `true` if the site is open and connected to the first row
    /// through open sites.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let site = self.label(row, col)?;
        Ok(self.open[site] && self.full.connected(site, TOP))
    }

    /// Returns `true` if some open site in the first row is connected to some
    /// open site in the last row.
    pub fn percolates(&self) -> bool {
        self.percolates
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    fn bottom(&self) -> usize {
        self.size * self.size + 1
    }

    fn label(&self, row: usize, col: usize) -> Result<usize> {
        if row == 0 || row > self.size || col == 0 || col > self.size {
            return Err(Error::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok((row - 1) * self.size + col)
    }

    fn neighbour(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<usize> {
        let row = row as isize + dr;
        let col = col as isize + dc;
        let size = self.size as isize;

        if row >= 1 && row <= size && col >= 1 && col <= size {
            return Some((row as usize - 1) * self.size + col as usize);
        }
        None
    }
}
