#![forbid(unsafe_code)]

////////////////////////////////////////////////////////////////////////////////

/// Union-find over a fixed universe of labels `0..len`.
///
/// # Panics
///
/// `find`, `union` and `connected` panic if any label is `>= len`.
pub trait DisjointSet {
    /// Creates a structure where every label is its own component.
    fn with_len(len: usize) -> Self
    where
        Self: Sized;

    /// Returns the size of the universe.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of components.
    fn count(&self) -> usize;

    /// Returns the representative of the component containing `p`.
    fn find(&mut self, p: usize) -> usize;

    /// Merges the components containing `p` and `q`.
    fn union(&mut self, p: usize, q: usize);

    fn connected(&mut self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Weighted quick-union with path halving.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }
}

impl DisjointSet for UnionFind {
    fn with_len(len: usize) -> Self {
        Self::new(len)
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, mut p: usize) -> usize {
        while self.parent[p] != p {
            self.parent[p] = self.parent[self.parent[p]];
            p = self.parent[p];
        }
        p
    }

    fn union(&mut self, p: usize, q: usize) {
        let (root_p, root_q) = (self.find(p), self.find(q));
        if root_p == root_q {
            return;
        }

        // smaller tree goes under the larger one
        let (small, large) = if self.size[root_p] < self.size[root_q] {
            (root_p, root_q)
        } else {
            (root_q, root_p)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.count -= 1;
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Eager variant: `find` is a lookup, `union` relabels a whole component.
#[derive(Debug, Clone)]
pub struct QuickFind {
    id: Vec<usize>,
    count: usize,
}

impl QuickFind {
    pub fn new(len: usize) -> Self {
        Self {
            id: (0..len).collect(),
            count: len,
        }
    }
}

impl DisjointSet for QuickFind {
    fn with_len(len: usize) -> Self {
        Self::new(len)
    }

    fn len(&self) -> usize {
        self.id.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&mut self, p: usize) -> usize {
        self.id[p]
    }

    fn union(&mut self, p: usize, q: usize) {
        let (id_p, id_q) = (self.id[p], self.id[q]);
        if id_p == id_q {
            return;
        }
        for id in self.id.iter_mut().filter(|id| **id == id_p) {
            *id = id_q;
        }
        self.count -= 1;
    }
}
