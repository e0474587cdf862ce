//! Seedable picker for the secret phrase

use std::time::{SystemTime, UNIX_EPOCH};

/// Simple LCG (Numerical Recipes constants, 64-bit)
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        // Zero would make the first draws predictable
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }

    /// Seed from the wall clock
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1);
        Self::new(nanos)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // Low bits of an LCG cycle quickly
        self.state >> 33
    }

    /// Value in [0, max). `max` must be non-zero.
    pub fn next_range(&mut self, max: usize) -> usize {
        (self.next_u64() % max as u64) as usize
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.next_range(items.len());
        items.get(index)
    }
}
