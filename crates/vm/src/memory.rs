//! Sparse, zero-default memory.
//!
//! The loaded image lives in a dense vector. Writes just past its end extend
//! the vector; writes further out go to a hash map, so a program touching
//! address 10^12 does not allocate 10^12 cells. Unwritten addresses read 0.

use std::collections::HashMap;

/// Writes landing at most this many cells past the dense end grow the vector.
const DENSE_SLACK: usize = 4_096;

/// VM memory: address → value, logically infinite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
    dense: Vec<i64>,
    sparse: HashMap<usize, i64>,
}

impl Memory {
    /// Memory initialized with a copy of `image` at address 0.
    pub fn from_image(image: &[i64]) -> Self {
        Self {
            dense: image.to_vec(),
            sparse: HashMap::new(),
        }
    }

    /// Read `addr`. Never allocates.
    pub fn get(&self, addr: usize) -> i64 {
        match self.dense.get(addr) {
            Some(&value) => value,
            None => self.sparse.get(&addr).copied().unwrap_or(0),
        }
    }

    /// Write `value` at `addr`.
    pub fn set(&mut self, addr: usize, value: i64) {
        let len = self.dense.len();
        if addr < len {
            self.dense[addr] = value;
        } else if addr - len <= DENSE_SLACK {
            self.dense.resize(addr + 1, 0);
            // Cells now covered by the vector may already hold sparse writes.
            if !self.sparse.is_empty() {
                for a in len..addr {
                    if let Some(v) = self.sparse.remove(&a) {
                        self.dense[a] = v;
                    }
                }
            }
            self.dense[addr] = value;
            self.sparse.remove(&addr);
        } else {
            self.sparse.insert(addr, value);
        }
    }

    /// The contiguous prefix of memory, starting at address 0.
    pub fn dense(&self) -> &[i64] {
        &self.dense
    }

    /// Number of cells holding storage (dense plus sparse).
    pub fn allocated(&self) -> usize {
        self.dense.len() + self.sparse.len()
    }
}
