/// A flat snapshot of everything a [`ValueTable`] has learned
///
/// Both sequences have length `state_count * action_count` in index order
/// `state * action_count + action`. Consumers may persist this to any
/// storage medium alongside the two counts needed to reshape it.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot {
    pub values: Vec<f32>,
    pub observed: Vec<bool>,
}

/// A state-action value table
///
/// Conceptually a `state_count x action_count` grid of estimated action
/// values, stored as one contiguous buffer indexed by
/// `state * action_count + action`. Each cell also carries an observed
/// flag, set the first time the cell receives a learning update.
///
/// The buffers are allocated at construction and never resized.
#[derive(Debug, Clone)]
pub struct ValueTable {
    values: Vec<f32>,
    observed: Vec<bool>,
    state_count: usize,
    action_count: usize,
}

impl ValueTable {
    /// Initialize a zeroed, unobserved table
    ///
    /// **Panics** if `state_count` or `action_count` is zero
    pub fn new(state_count: usize, action_count: usize) -> Self {
        assert!(state_count > 0, "`state_count` must be positive");
        assert!(action_count > 0, "`action_count` must be positive");
        Self {
            values: vec![0.0; state_count * action_count],
            observed: vec![false; state_count * action_count],
            state_count,
            action_count,
        }
    }

    pub fn state_count(&self) -> usize {
        self.state_count
    }

    pub fn action_count(&self) -> usize {
        self.action_count
    }

    fn index(&self, state: usize, action: usize) -> usize {
        assert!(
            state < self.state_count,
            "`state` {} out of range [0, {})",
            state,
            self.state_count,
        );
        assert!(
            action < self.action_count,
            "`action` {} out of range [0, {})",
            action,
            self.action_count,
        );
        state * self.action_count + action
    }

    pub fn get(&self, state: usize, action: usize) -> f32 {
        self.values[self.index(state, action)]
    }

    pub fn set(&mut self, state: usize, action: usize, value: f32) {
        let ix = self.index(state, action);
        self.values[ix] = value;
    }

    /// Whether the cell has ever received a learning update
    pub fn is_observed(&self, state: usize, action: usize) -> bool {
        self.observed[self.index(state, action)]
    }

    pub fn mark_observed(&mut self, state: usize, action: usize) {
        let ix = self.index(state, action);
        self.observed[ix] = true;
    }

    /// Get a slice view of all action values for `state`
    pub fn row(&self, state: usize) -> &[f32] {
        let start = self.index(state, 0);
        &self.values[start..start + self.action_count]
    }

    /// The maximum action value for `state` and the lowest-indexed action
    /// achieving it
    pub fn row_max(&self, state: usize) -> (f32, usize) {
        let row = self.row(state);
        let mut max = row[0];
        let mut argmax = 0;
        for (action, &value) in row.iter().enumerate().skip(1) {
            if value > max {
                max = value;
                argmax = action;
            }
        }
        (max, argmax)
    }

    /// The sum of all action values for `state`
    pub fn row_sum(&self, state: usize) -> f32 {
        self.row(state).iter().sum()
    }

    /// The expected value of `state` under an epsilon greedy policy
    ///
    /// The greedy action is taken with probability `1 - epsilon` and each
    /// action, the greedy one included, is taken uniformly with probability
    /// `epsilon / action_count`, so the closed form is
    /// `max * (1 - epsilon) + sum * (epsilon / action_count)`.
    pub fn expected_value(&self, state: usize, epsilon: f32) -> f32 {
        let (max, _) = self.row_max(state);
        max * (1.0 - epsilon) + self.row_sum(state) * (epsilon / self.action_count as f32)
    }

    /// Copy the values and observed flags into a [`TableSnapshot`]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            values: self.values.clone(),
            observed: self.observed.clone(),
        }
    }

    /// Overwrite the table elementwise from a previously captured snapshot
    ///
    /// **Panics** if either snapshot sequence does not have length
    /// `state_count * action_count`
    pub fn restore(&mut self, snapshot: &TableSnapshot) {
        let len = self.values.len();
        assert_eq!(
            snapshot.values.len(),
            len,
            "snapshot `values` length does not match table size",
        );
        assert_eq!(
            snapshot.observed.len(),
            len,
            "snapshot `observed` length does not match table size",
        );
        self.values.copy_from_slice(&snapshot.values);
        self.observed.copy_from_slice(&snapshot.observed);
    }
}
