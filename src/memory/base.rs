use rand::Rng;

use crate::ds::RingBuffer;

use super::Exp;

/// A fixed-size memory storage for reinforcement learning experiences
///
/// This structure uses a ring buffer to store experiences, so once it
/// reaches capacity the oldest experience is overwritten by each new
/// recording and memory use stays bounded.
pub struct ReplayMemory {
    memory: RingBuffer<Exp>,
}

impl ReplayMemory {
    pub fn new(capacity: usize) -> Self {
        Self {
            memory: RingBuffer::new(capacity),
        }
    }

    /// Record a new experience, evicting the oldest one once at capacity
    pub fn record(&mut self, exp: Exp) {
        self.memory.push(exp);
    }

    /// Sample one experience uniformly at random from the populated slots
    ///
    /// Repeated calls sample with replacement.
    ///
    /// ### Returns
    /// - `Some(exp)` if the memory holds at least one experience
    /// - `None` otherwise
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<&Exp> {
        if self.memory.is_empty() {
            return None;
        }
        let ix = rng.gen_range(0..self.memory.len());
        Some(&self.memory.view()[ix])
    }

    /// Returns the number of stored experiences
    pub fn len(&self) -> usize {
        self.memory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.memory.capacity()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn create_mock_exp_vec(n: usize) -> Vec<Exp> {
        (0..n)
            .map(|i| Exp {
                state: i,
                action: i + 1,
                reward: 1.0,
                next_state: i + 1,
            })
            .collect()
    }

    #[test]
    fn replay_memory_functional() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut memory = ReplayMemory::new(4);

        assert!(memory.sample(&mut rng).is_none(), "sample none when empty");

        for exp in create_mock_exp_vec(4) {
            memory.record(exp);
        }

        assert_eq!(memory.len(), 4, "length correct");
        for _ in 0..20 {
            let exp = memory.sample(&mut rng).expect("memory is populated");
            assert!(exp.state < 4, "sampled a stored experience");
        }
    }

    #[test]
    fn replay_memory_overwrites_oldest() {
        let mut memory = ReplayMemory::new(4);
        for exp in create_mock_exp_vec(6) {
            memory.record(exp);
        }

        assert_eq!(memory.len(), 4, "size stays at capacity");

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let exp = memory.sample(&mut rng).expect("memory is populated");
            assert!(
                exp.state >= 2,
                "the two oldest experiences were overwritten"
            );
        }
    }
}
