use crate::domain::{Algorithm, RuleTable, Seed, State, World, WORLD_SIZE};
use super::SimulationConfig;

/// Snapshot of the ring after one generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    /// 0 for the seeded ring
    pub index: u32,
    pub states: [State; WORLD_SIZE],
    pub active_sum: u32,
}

impl Generation {
    fn capture(index: u32, world: &World, active_sum: u32) -> Self {
        let cells = world.cells();
        Self {
            index,
            states: std::array::from_fn(|i| cells[i].status),
            active_sum,
        }
    }
}

/// Simulation orchestrates one run of the automaton.
/// This is the application layer that drives the recompute/step protocol.
pub struct Simulation {
    pub table: RuleTable,
    pub world: World,
    pub seed: Seed,
    pub algorithm: Algorithm,
    /// Rows to produce, counting the seeded row
    pub generations: u32,
    pub history: Vec<Generation>,
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_step_time_ms: f32,
}

impl Simulation {
    /// Seed a fresh world and record generation 0
    pub fn new(config: &SimulationConfig) -> Self {
        let mut simulation = Self {
            table: config.table,
            world: World::new(config.seed),
            seed: config.seed,
            algorithm: config.algorithm,
            generations: config.generations,
            history: Vec::with_capacity(config.generations as usize),
            is_running: false,
            update_timer: 0.0,
            updates_per_second: 10.0,
            last_step_time_ms: 0.0,
        };
        simulation.reseed();
        log::info!(
            "rule #{} seed {} for {} generations ({})",
            simulation.table.code(),
            simulation.seed.state().value(),
            simulation.generations,
            simulation.algorithm.name()
        );
        simulation
    }

    fn reseed(&mut self) {
        self.world = World::new(self.seed);
        self.algorithm.recompute_sums(&mut self.world);
        self.history.clear();
        let active_sum = self.world.active_sum();
        self.history.push(Generation::capture(0, &self.world, active_sum));
    }

    /// Index of the most recent generation
    pub fn generation(&self) -> u32 {
        self.history.last().map_or(0, |g| g.index)
    }

    /// True once every requested row has been produced
    pub fn is_finished(&self) -> bool {
        self.history.len() as u32 >= self.generations
    }

    /// Run one step followed by a sum refresh.
    /// Returns `None` once the run is finished.
    pub fn advance(&mut self) -> Option<&Generation> {
        if self.is_finished() {
            return None;
        }

        let start = std::time::Instant::now();
        let active_sum = self.algorithm.step(&mut self.world, &self.table);
        self.algorithm.recompute_sums(&mut self.world);
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;

        let index = self.generation() + 1;
        log::debug!("generation {index}: active sum {active_sum}");
        self.history.push(Generation::capture(index, &self.world, active_sum));
        self.history.last()
    }

    /// Advance until finished and return every row
    pub fn run_to_end(&mut self) -> &[Generation] {
        while self.advance().is_some() {}
        &self.history
    }

    /// Start over from the seeded ring with the same rule
    pub fn restart(mut self) -> Self {
        self.reseed();
        self.is_running = false;
        self
    }

    /// Replace the rule and start over
    pub fn with_rule(mut self, table: RuleTable) -> Self {
        log::info!("switching to rule #{}", table.code());
        self.table = table;
        self.restart()
    }

    /// Replace the rule with a uniformly random one and start over
    pub fn randomize_rule(self) -> Self {
        let table = random_rule();
        self.with_rule(table)
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Advance a single generation regardless of the running flag
    pub fn single_step(mut self) -> Self {
        self.advance();
        self
    }

    /// Adjust playback speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            if self.advance().is_none() {
                self.is_running = false;
            }
            self.update_timer = 0.0;
        }

        self
    }
}

/// Draw a rule table uniformly from every valid rule code
pub fn random_rule() -> RuleTable {
    use rand::Rng;
    let code = rand::rng().random_range(0..=i64::from(crate::domain::MAX_RULE));
    RuleTable::decode(code).unwrap_or_default()
}
