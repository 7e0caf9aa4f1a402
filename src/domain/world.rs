use super::{Cell, RuleTable, State};
use rayon::prelude::*;

/// Number of cells on the ring
pub const WORLD_SIZE: usize = 65;

/// Value placed in the midpoint cell when a world is created.
/// Only the two active states are valid seeds.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Seed {
    #[default]
    Low,
    High,
}

impl Seed {
    /// Status the seeded cell starts with
    pub const fn state(self) -> State {
        match self {
            Seed::Low => State::Low,
            Seed::High => State::High,
        }
    }
}

/// Index of the left neighbour on the ring
pub const fn left(i: usize) -> usize {
    if i == 0 { WORLD_SIZE - 1 } else { i - 1 }
}

/// Index of the right neighbour on the ring
pub const fn right(i: usize) -> usize {
    if i == WORLD_SIZE - 1 { 0 } else { i + 1 }
}

/// World owns the ring of cells and advances it one generation at a time.
///
/// Stepping is split in two phases. [`World::recompute_sums`] refreshes every
/// cell's cached neighbourhood sum from the current statuses, and
/// [`World::step`] replaces every status using those cached sums. Callers
/// must alternate the two: a `step` on stale sums uses outdated neighbours.
/// Because `step` only reads the cache, every cell in a generation sees the
/// same pre-step snapshot.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct World {
    cells: [Cell; WORLD_SIZE],
}

impl World {
    /// Create a world with every cell empty except the midpoint, which holds the seed
    pub fn new(seed: Seed) -> Self {
        let mut cells = [Cell::default(); WORLD_SIZE];
        cells[Self::midpoint()].absorb(seed.state());
        Self { cells }
    }

    /// Index of the seeded cell
    pub const fn midpoint() -> usize {
        WORLD_SIZE / 2
    }

    /// Refresh every cell's local sum from the current statuses
    pub fn recompute_sums(&mut self) {
        for i in 0..WORLD_SIZE {
            self.cells[i].local_sum = self.neighbourhood_sum(i);
        }
    }

    /// Parallel variant of [`World::recompute_sums`]
    pub fn recompute_sums_parallel(&mut self) {
        let statuses: [u8; WORLD_SIZE] = std::array::from_fn(|i| self.cells[i].status.value());
        self.cells
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, cell)| {
                cell.local_sum = statuses[left(i)] + statuses[i] + statuses[right(i)];
            });
    }

    /// Advance every cell using its cached local sum.
    /// Returns the total of the new statuses.
    pub fn step(&mut self, table: &RuleTable) -> u32 {
        let total = self
            .cells
            .iter_mut()
            .map(|cell| {
                let next = table.next(cell.local_sum);
                cell.absorb(next);
                u32::from(next.value())
            })
            .sum();
        log::trace!("serial step under rule #{} -> {total}", table.code());
        total
    }

    /// Parallel variant of [`World::step`]
    pub fn step_parallel(&mut self, table: &RuleTable) -> u32 {
        let total = self
            .cells
            .par_iter_mut()
            .map(|cell| {
                let next = table.next(cell.local_sum);
                cell.absorb(next);
                u32::from(next.value())
            })
            .sum();
        log::trace!("parallel step under rule #{} -> {total}", table.code());
        total
    }

    fn neighbourhood_sum(&self, i: usize) -> u8 {
        self.cells[left(i)].status.value()
            + self.cells[i].status.value()
            + self.cells[right(i)].status.value()
    }

    pub fn cells(&self) -> &[Cell; WORLD_SIZE] {
        &self.cells
    }

    /// Current status of cell `i`
    pub fn status(&self, i: usize) -> State {
        self.cells[i].status
    }

    /// Lifetime count of cell `i`
    pub fn count(&self, i: usize) -> u32 {
        self.cells[i].count
    }

    /// Cached local sum of cell `i`
    pub fn local_sum(&self, i: usize) -> u8 {
        self.cells[i].local_sum
    }

    /// Sum of all current statuses
    pub fn active_sum(&self) -> u32 {
        self.cells.iter().map(|c| u32::from(c.status.value())).sum()
    }

    /// Iterate over current statuses in ring order
    pub fn statuses(&self) -> impl Iterator<Item = State> + '_ {
        self.cells.iter().map(|c| c.status)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(Seed::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn advance(world: &mut World, table: &RuleTable) -> u32 {
        let total = world.step(table);
        world.recompute_sums();
        total
    }

    #[test]
    fn test_ring_wraparound() {
        assert_eq!(left(0), 64);
        assert_eq!(right(64), 0);
        for i in 1..WORLD_SIZE {
            assert_eq!(left(i), i - 1);
        }
        for i in 0..WORLD_SIZE - 1 {
            assert_eq!(right(i), i + 1);
        }
    }

    #[test]
    fn test_single_seed_initialization() {
        let world = World::new(Seed::Low);
        assert_eq!(World::midpoint(), 32);
        for i in 0..WORLD_SIZE {
            if i == 32 {
                assert_eq!(world.status(i), State::Low);
                assert_eq!(world.count(i), 1);
            } else {
                assert_eq!(world.status(i), State::Empty);
                assert_eq!(world.count(i), 0);
            }
        }
        assert_eq!(world.active_sum(), 1);
    }

    #[test]
    fn test_high_seed_counts_two() {
        let world = World::new(Seed::High);
        assert_eq!(world.status(32), State::High);
        assert_eq!(world.count(32), 2);
        assert_eq!(world.statuses().filter(|s| s.is_active()).count(), 1);
    }

    #[test]
    fn test_recompute_sums_around_seed() {
        let mut world = World::new(Seed::High);
        world.recompute_sums();
        assert_eq!(world.local_sum(31), 2);
        assert_eq!(world.local_sum(32), 2);
        assert_eq!(world.local_sum(33), 2);
        assert_eq!(world.local_sum(30), 0);
        assert_eq!(world.local_sum(0), 0);
    }

    #[test]
    fn test_recompute_sums_wraps_at_edges() {
        let mut world = World::new(Seed::Low);
        world.cells[0].status = State::High;
        world.cells[64].status = State::Low;
        world.recompute_sums();
        assert_eq!(world.local_sum(0), 3);
        assert_eq!(world.local_sum(64), 3);
        assert_eq!(world.local_sum(1), 2);
        assert_eq!(world.local_sum(63), 1);
    }

    #[test]
    fn test_recompute_sums_is_idempotent() {
        let mut world = World::new(Seed::High);
        world.recompute_sums();
        let once = world.clone();
        world.recompute_sums();
        assert_eq!(world, once);
    }

    #[test]
    fn test_rule_one_scenario() {
        let table = RuleTable::decode(1).unwrap();
        let mut world = World::new(Seed::Low);
        world.recompute_sums();
        let zero_sums = world.cells().iter().filter(|c| c.local_sum == 0).count() as u32;
        assert_eq!(zero_sums, 62);

        let total = advance(&mut world, &table);
        assert_eq!(total, zero_sums);
        for i in 0..WORLD_SIZE {
            let expected = if (31..=33).contains(&i) { State::Empty } else { State::Low };
            assert_eq!(world.status(i), expected, "cell {i}");
        }
        // the seed keeps its initial count, nothing was added this generation
        assert_eq!(world.count(32), 1);
        assert_eq!(world.count(0), 1);
        assert_eq!(world.count(31), 0);
    }

    #[test]
    fn test_step_does_not_ripple() {
        // rule 3: sum 0 -> 0, sum 1 -> 1, everything else 0
        let table = RuleTable::decode(3).unwrap();
        let mut world = World::new(Seed::Low);
        world.recompute_sums();
        advance(&mut world, &table);
        let active: Vec<usize> = (0..WORLD_SIZE).filter(|&i| world.status(i).is_active()).collect();
        assert_eq!(active, vec![31, 32, 33]);
    }

    #[test]
    fn test_step_leaves_sums_stale() {
        let table = RuleTable::decode(1).unwrap();
        let mut world = World::new(Seed::Low);
        world.recompute_sums();
        world.step(&table);
        assert_eq!(world.local_sum(0), 0);
        world.recompute_sums();
        assert_eq!(world.local_sum(0), 3);
    }

    #[test]
    fn test_determinism() {
        let table = RuleTable::decode(1635).unwrap();
        let run = || {
            let mut world = World::new(Seed::High);
            world.recompute_sums();
            let sums: Vec<u32> = (0..48).map(|_| advance(&mut world, &table)).collect();
            (world, sums)
        };
        assert_eq!(run(), run());
    }

    proptest! {
        #[test]
        fn test_step_invariants(code in 0..=2186i64, high in any::<bool>(), generations in 1..49usize) {
            let table = RuleTable::decode(code).unwrap();
            let seed = if high { Seed::High } else { Seed::Low };
            let mut world = World::new(seed);
            world.recompute_sums();
            for _ in 0..generations {
                let before: Vec<u32> = world.cells().iter().map(|c| c.count).collect();
                let total = advance(&mut world, &table);
                prop_assert_eq!(total, world.active_sum());
                for (cell, old) in world.cells().iter().zip(before) {
                    prop_assert!(cell.count >= old);
                    prop_assert!(cell.status.value() <= 2);
                    prop_assert!(cell.local_sum <= 6);
                }
            }
        }

        #[test]
        fn test_parallel_matches_serial(code in 0..=2186i64, generations in 1..49usize) {
            let table = RuleTable::decode(code).unwrap();
            let mut serial = World::new(Seed::Low);
            let mut parallel = serial.clone();
            serial.recompute_sums();
            parallel.recompute_sums_parallel();
            for _ in 0..generations {
                let a = serial.step(&table);
                let b = parallel.step_parallel(&table);
                prop_assert_eq!(a, b);
                serial.recompute_sums();
                parallel.recompute_sums_parallel();
                prop_assert_eq!(&serial, &parallel);
            }
        }
    }
}
