/// Growable bit mask over accepted-vector indices.
///
/// Bits are stored in little-endian 64-bit blocks. The block vector grows
/// on demand, so masks carry no fixed capacity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitMask {
    blocks: Vec<u64>,
}

impl BitMask {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Mask with bits `0..len` set.
    pub fn all_below(len: usize) -> Self {
        let mut blocks = vec![u64::MAX; len / 64];
        let tail = len % 64;
        if tail != 0 {
            blocks.push((1u64 << tail) - 1);
        }
        Self { blocks }
    }

    pub fn set(&mut self, idx: usize) {
        let block = idx / 64;
        if self.blocks.len() <= block {
            self.blocks.resize(block + 1, 0);
        }
        self.blocks[block] |= 1u64 << (idx % 64);
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.blocks
            .get(idx / 64)
            .is_some_and(|b| b & (1u64 << (idx % 64)) != 0)
    }

    /// Intersect in place. Blocks past the end of `other` are implicitly
    /// zero, so they are dropped here.
    pub fn intersect(&mut self, other: &BitMask) {
        if self.blocks.len() > other.blocks.len() {
            self.blocks.truncate(other.blocks.len());
        }
        for (a, b) in self.blocks.iter_mut().zip(&other.blocks) {
            *a &= b;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|&b| b == 0)
    }
}
