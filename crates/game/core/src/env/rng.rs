//! RNG oracle for target selection and hints.
//!
//! Draws are addressed by seed rather than by advancing hidden state, so a
//! session started from the same seed picks the same targets and gives the
//! same hints. [`EntropyRng`] is available for hosts that want a fresh
//! selection every run.

/// RNG oracle for random target selection.
///
/// Deterministic implementations must produce the same value for the same
/// seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform index in `[0, len)`. Returns 0 when `len` is 0.
    ///
    /// Uses a multiply-shift reduction instead of `%` so small ranges are not
    /// skewed towards low indices.
    fn index(&self, seed: u64, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        let len = len.min(u32::MAX as usize) as u64;
        ((self.next_u32(seed) as u64 * len) >> 32) as usize
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. One LCG step followed by the
/// output permutation; the seed is the state.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output: xorshift high bits, then rotate by the top 5 bits.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Non-deterministic oracle backed by the thread-local `rand` generator.
///
/// The seed argument is ignored; every call draws fresh entropy.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntropyRng;

impl RngOracle for EntropyRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        rand::random()
    }
}

/// Compute a deterministic seed for one random draw.
///
/// * `session_seed` - Base seed set when the session starts
/// * `nonce` - Sequence number of the operation (activation, hint request)
/// * `owner` - Manager or tracker id performing the draw
/// * `draw` - Index of the draw within the operation
pub fn compute_seed(session_seed: u64, nonce: u64, owner: u32, draw: u32) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = session_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (owner as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (draw as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_ne!(rng.next_u32(42), rng.next_u32(43));
    }

    #[test]
    fn index_stays_in_range() {
        let rng = PcgRng;
        for draw in 0..512 {
            let seed = compute_seed(7, 1, 3, draw);
            assert!(rng.index(seed, 5) < 5);
        }
        assert_eq!(rng.index(1, 0), 0);
        assert_eq!(rng.index(1, 1), 0);
    }

    #[test]
    fn index_covers_every_slot() {
        let rng = PcgRng;
        let mut seen = [false; 4];
        for draw in 0..256 {
            seen[rng.index(compute_seed(99, 0, 0, draw), 4)] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn entropy_indices_stay_in_range() {
        let rng = EntropyRng;
        let mut seen = [false; 7];
        for _ in 0..1024 {
            let index = rng.index(0, 7);
            assert!(index < 7);
            seen[index] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
        assert_eq!(rng.index(0, 1), 0);
    }
}
