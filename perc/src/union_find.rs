use crate::error::{Error, Result};

////////////////////////////////////////////////////////////////////////////////

/// Weighted disjoint-set forest over the elements `0..capacity`.
///
/// The smaller tree is always linked under the root of the larger one, and
/// `find` halves the path it walks, so both operations run in amortized
/// near-constant time.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Creates a forest where every element is its own root.
    pub fn new(capacity: usize) -> Self {
        Self {
            parent: (0..capacity).collect(),
            size: vec![1; capacity],
            count: capacity,
        }
    }

    /// Returns the number of elements in the forest.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the root of the tree containing `element`.
    pub fn find(&mut self, mut element: usize) -> Result<usize> {
        self.validate(element)?;
        while self.parent[element] != element {
            let grandparent = self.parent[self.parent[element]];
            self.parent[element] = grandparent;
            element = grandparent;
        }
        Ok(element)
    }

    /// Merges the components of `a` and `b` and returns the surviving root.
    ///
    /// On equal sizes the root of `b` is attached under the root of `a`.
    pub fn union(&mut self, a: usize, b: usize) -> Result<usize> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(root_a);
        }

        let (root, child) = if self.size[root_a] < self.size[root_b] {
            (root_b, root_a)
        } else {
            (root_a, root_b)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.count -= 1;
        Ok(root)
    }

    /// Like [`find`](Self::find), but leaves the forest untouched.
    pub fn root(&self, mut element: usize) -> Result<usize> {
        self.validate(element)?;
        while self.parent[element] != element {
            element = self.parent[element];
        }
        Ok(element)
    }

    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    fn validate(&self, element: usize) -> Result<()> {
        if element >= self.parent.len() {
            return Err(Error::ElementOutOfRange {
                element,
                capacity: self.parent.len(),
            });
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
