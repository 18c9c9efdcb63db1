use log::{debug, trace};
use rand::Rng;

use crate::{
    exploration::EpsilonGreedy,
    memory::{Exp, ReplayMemory},
    table::{TableSnapshot, ValueTable},
};

/// Configuration for the [`SarsaAgent`]
///
/// Immutable after construction. Hyperparameters outside their sane ranges
/// (e.g. `epsilon` outside `[0, 1]`) are not rejected; learning quality is
/// the caller's concern.
pub struct SarsaAgentConfig {
    /// Set to `false` to skip the learning phase entirely (pure inference)
    pub learning_enabled: bool,
    /// Learning rate (alpha): how far each update moves toward its target
    pub alpha: f32,
    /// Probability of taking a uniformly random action (epsilon)
    pub epsilon: f32,
    /// Discount factor (gamma) on the expected next-state value
    pub gamma: f32,
    /// Historical transitions relearned on each call to `decide`
    pub replays_per_decision: usize,
    /// Maximum number of stored transitions
    pub replay_capacity: usize,
    /// Learning calls between replay recordings
    pub replay_recording_interval: u32,
}

impl Default for SarsaAgentConfig {
    fn default() -> Self {
        Self {
            learning_enabled: true,
            alpha: 0.1,
            epsilon: 0.05,
            gamma: 0.9,
            replays_per_decision: 10,
            replay_capacity: 5000,
            replay_recording_interval: 25,
        }
    }
}

/// Diagnostics about the most recent decision, useful for charts and reports
#[derive(Debug, Clone)]
pub struct LastActionStats {
    /// The chosen action
    pub action: usize,
    /// Whether the action was chosen by exploration rather than greedily
    pub was_random: bool,
    /// The table row for the decision state, as seen at decision time
    pub values: Vec<f32>,
}

/// Apply one SARSA-with-expectation update to a value table
///
/// The target blends the immediate reward with the discounted expected
/// value of the next state under the epsilon greedy policy.
///
/// The first update of a cell that still holds an exact zero writes the
/// reward directly instead of blending, which speeds early learning.
/// The observed flag gates this, so a cell that later converges back to
/// zero is never re-initialized.
pub fn sarsa_update(table: &mut ValueTable, exp: &Exp, config: &SarsaAgentConfig) {
    let Exp {
        state,
        action,
        reward,
        next_state,
    } = *exp;

    let q_old = table.get(state, action);
    if q_old == 0.0 && !table.is_observed(state, action) {
        table.set(state, action, reward);
        table.mark_observed(state, action);
        return;
    }

    let expected = table.expected_value(next_state, config.epsilon);
    let q_new = q_old + config.alpha * (reward + config.gamma * expected - q_old);
    table.set(state, action, q_new);
    table.mark_observed(state, action);
}

/// A tabular agent that learns with the SARSA update rule under an epsilon
/// greedy behavior policy, with experience replay for sample efficiency
///
/// The caller alternates with the environment: each call to
/// [`decide`](SarsaAgent::decide) learns from the previous step's reward and
/// returns the next action to take. The value table persists across
/// episodes; pass `None` for `last_reward` on the first call of each episode
/// so the agent does not learn across the episode boundary.
///
/// An agent owns its table, replay memory, and RNG, so independent agents
/// can run side by side. `decide` mutates shared state and must be called
/// sequentially by a single logical caller per instance.
pub struct SarsaAgent<R: Rng> {
    table: ValueTable,
    memory: ReplayMemory,
    exploration: EpsilonGreedy,
    config: SarsaAgentConfig,
    rng: R,
    last_state: usize,
    last_action: usize,
    replay_countdown: u32,
    stats: LastActionStats,
}

impl<R: Rng> SarsaAgent<R> {
    /// Initialize a new `SarsaAgent` over a `state_count x action_count`
    /// decision space
    ///
    /// The RNG is the agent's only external resource; seed it for
    /// reproducible decision sequences.
    ///
    /// **Panics** if `state_count` or `action_count` is zero
    pub fn new(state_count: usize, action_count: usize, config: SarsaAgentConfig, rng: R) -> Self {
        debug!("initializing sarsa agent: {state_count} states, {action_count} actions");
        Self {
            table: ValueTable::new(state_count, action_count),
            memory: ReplayMemory::new(config.replay_capacity),
            exploration: EpsilonGreedy::new(config.epsilon),
            replay_countdown: config.replay_recording_interval,
            stats: LastActionStats {
                action: 0,
                was_random: false,
                values: vec![0.0; action_count],
            },
            config,
            rng,
            last_state: 0,
            last_action: 0,
        }
    }

    /// Learn from the last reward and decide on the next action to take
    ///
    /// Pass `None` for `last_reward` on the very first call, when there is
    /// no prior step to learn from; pass the environment's reward for the
    /// previously returned action on every call after that.
    ///
    /// **Panics** if `state` is out of range
    pub fn decide(&mut self, last_reward: Option<f32>, state: usize) -> usize {
        if let Some(reward) = last_reward {
            if self.config.learning_enabled {
                self.learn(Exp {
                    state: self.last_state,
                    action: self.last_action,
                    reward,
                    next_state: state,
                });
            }
        }

        let (action, was_random) = self
            .exploration
            .choose_action(&self.table, state, &mut self.rng);
        self.stats.action = action;
        self.stats.was_random = was_random;
        self.stats.values.copy_from_slice(self.table.row(state));
        self.last_state = state;
        self.last_action = action;
        action
    }

    /// One learning phase: update on the newest transition, replay a batch
    /// of stored transitions, and record into replay memory on the
    /// configured cadence
    fn learn(&mut self, exp: Exp) {
        sarsa_update(&mut self.table, &exp, &self.config);

        if self.memory.len() > self.config.replays_per_decision {
            trace!("replaying {} transitions", self.config.replays_per_decision);
            for _ in 0..self.config.replays_per_decision {
                if let Some(&replay) = self.memory.sample(&mut self.rng) {
                    sarsa_update(&mut self.table, &replay, &self.config);
                }
            }
        }

        self.replay_countdown = self.replay_countdown.saturating_sub(1);
        if self.replay_countdown == 0 {
            self.replay_countdown = self.config.replay_recording_interval;
            self.memory.record(exp);
        }
    }

    /// Diagnostics about the most recent decision
    pub fn last_action_stats(&self) -> &LastActionStats {
        &self.stats
    }

    /// Read access to the learned value table
    pub fn table(&self) -> &ValueTable {
        &self.table
    }

    /// Capture everything the agent has learned
    ///
    /// Only the value table is captured; replay memory, step counters, and
    /// configuration are not part of the persisted state.
    pub fn snapshot(&self) -> TableSnapshot {
        self.table.snapshot()
    }

    /// Restore a previously captured snapshot into the value table
    ///
    /// **Panics** if the snapshot does not match this agent's table size
    pub fn restore(&mut self, snapshot: &TableSnapshot) {
        debug!("restoring table snapshot of {} entries", snapshot.values.len());
        self.table.restore(snapshot);
    }
}
