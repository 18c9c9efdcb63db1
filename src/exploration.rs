use rand::Rng;

use crate::table::ValueTable;

/// Exploration policy result
pub enum Choice {
    Explore,
    Exploit,
}

/// Epsilon greedy exploration policy
pub struct EpsilonGreedy {
    epsilon: f32,
}

impl EpsilonGreedy {
    /// Initialize epsilon greedy policy with a fixed exploration probability
    pub fn new(epsilon: f32) -> Self {
        Self { epsilon }
    }

    /// Invoke epsilon greedy policy
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Choice {
        if rng.gen::<f32>() < self.epsilon {
            Choice::Explore
        } else {
            Choice::Exploit
        }
    }

    /// Choose an action for `state`: uniformly at random when exploring,
    /// the highest-valued table entry when exploiting
    ///
    /// **Returns** `(action, was_random)`
    pub fn choose_action<R: Rng>(
        &self,
        table: &ValueTable,
        state: usize,
        rng: &mut R,
    ) -> (usize, bool) {
        match self.choose(rng) {
            Choice::Explore => (rng.gen_range(0..table.action_count()), true),
            Choice::Exploit => (table.row_max(state).1, false),
        }
    }
}
