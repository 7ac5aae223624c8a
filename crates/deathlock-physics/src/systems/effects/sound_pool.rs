//! Pool of interchangeable sound events, one picked at random per play.

use crate::api::types::SoundEvent;

/// A contiguous block of sound event ids (`base .. base + count`) and the
/// xorshift64 state used to pick from it. Deterministic for a given seed.
#[derive(Debug, Clone)]
pub struct SoundPool {
    base: u32,
    count: u32,
    state: u64,
}

impl SoundPool {
    /// An empty pool (`count == 0`) never produces a sound.
    pub fn new(base: u32, count: u32, seed: u64) -> Self {
        Self {
            base,
            count,
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Pick one sound from the pool.
    pub fn pick(&mut self) -> Option<SoundEvent> {
        if self.count == 0 {
            return None;
        }
        let offset = (self.next_u64() % self.count as u64) as u32;
        Some(SoundEvent(self.base + offset))
    }

    pub fn len(&self) -> u32 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
