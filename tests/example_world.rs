use rand::{rngs::StdRng, SeedableRng};
use tabular_sarsa::algo::{SarsaAgent, SarsaAgentConfig};

/// Reward and next state for each (state, action) pair of a small MDP.
///
/// States 0 and 2 form a +1 loop under action 0, and state 1 pays +100 for
/// action 1, reachable only through the -10 penalty state 3.
const TRANSITIONS: [[(f32, usize); 2]; 4] = [
    [(1.0, 2), (-2.0, 3)],
    [(-7.0, 2), (100.0, 3)],
    [(1.0, 0), (-5.0, 3)],
    [(-10.0, 1), (-10.0, 0)],
];

struct ExampleWorld {
    state: usize,
}

impl ExampleWorld {
    fn new(state: usize) -> Self {
        Self { state }
    }

    fn take_action(&mut self, action: usize) -> f32 {
        let (reward, next) = TRANSITIONS[self.state][action];
        self.state = next;
        reward
    }
}

/// Play one 100-step game and return the total reward collected
fn run_game(agent: &mut SarsaAgent<StdRng>, start: usize) -> f32 {
    let mut world = ExampleWorld::new(start);
    let mut last_reward = None;
    let mut total = 0.0;
    for _ in 0..100 {
        let action = agent.decide(last_reward, world.state);
        let reward = world.take_action(action);
        total += reward;
        last_reward = Some(reward);
    }
    total
}

#[test]
fn agent_learns_the_example_world() {
    let rng = StdRng::seed_from_u64(7);
    let mut agent = SarsaAgent::new(4, 2, SarsaAgentConfig::default(), rng);

    let totals: Vec<f32> = (0..500).map(|game| run_game(&mut agent, game % 4)).collect();

    let last_avg = totals[490..].iter().sum::<f32>() / 10.0;
    assert!(
        last_avg > 50.0,
        "trained agent exploits the reward loop, got {last_avg}"
    );

    let stats = agent.last_action_stats();
    assert!(stats.action < 2, "last action in range");
    assert_eq!(stats.values.len(), 2, "one diagnostic value per action");

    let table = agent.table();
    assert!(
        table.get(1, 1) > table.get(1, 0),
        "the +100 action dominates at state 1"
    );
    assert!(table.get(0, 0) > 0.0, "the +1 loop was learned at state 0");
    assert!(table.get(2, 0) > 0.0, "the +1 loop was learned at state 2");
}

#[test]
fn inference_mode_never_learns() {
    let config = SarsaAgentConfig {
        learning_enabled: false,
        ..Default::default()
    };
    let rng = StdRng::seed_from_u64(7);
    let mut agent = SarsaAgent::new(4, 2, config, rng);

    let before = agent.snapshot();
    for game in 0..10 {
        run_game(&mut agent, game % 4);
    }
    assert_eq!(agent.snapshot(), before, "table untouched in inference mode");
}
