//! The simulation engine: owns one board and advances it a generation at a time

use super::error::{LifeError, LifeResult};
use super::grid::{Grid, ALIVE, DEAD};
use super::rules::GameOfLifeRules;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// Owns a square board and exposes the operations to build, seed and step it.
///
/// The engine never schedules itself; a driver calls [`LifeEngine::step`] as
/// often as it likes. Every operation either fully applies or leaves the
/// board untouched.
#[derive(Debug)]
pub struct LifeEngine {
    grid: Option<Grid>,
    generation: u64,
    rng: StdRng,
}

impl Default for LifeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LifeEngine {
    /// Create an engine with no board, seeded from OS entropy
    pub fn new() -> Self {
        Self {
            grid: None,
            generation: 0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose random seeding is reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self {
            grid: None,
            generation: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Allocate an all-dead `dimension x dimension` board, replacing any existing one
    pub fn build_empty_board(&mut self, dimension: usize) -> LifeResult<()> {
        let grid = Grid::new(dimension)?;
        debug!(dimension, "built empty board");
        self.grid = Some(grid);
        self.generation = 0;
        Ok(())
    }

    /// Replace the board with a caller-supplied one
    pub fn load_board(&mut self, grid: Grid) {
        debug!(
            dimension = grid.dimension(),
            living = grid.living_count(),
            "loaded board"
        );
        self.grid = Some(grid);
        self.generation = 0;
    }

    /// Bring `alive_count` randomly chosen dead cells to life using the engine's RNG
    pub fn set_initial_state(&mut self, alive_count: usize) -> LifeResult<()> {
        let grid = self.grid.as_mut().ok_or(LifeError::EngineNotInitialized)?;
        seed_cells(grid, &mut self.rng, alive_count)
    }

    /// Bring `alive_count` randomly chosen dead cells to life using `rng`
    pub fn set_initial_state_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        alive_count: usize,
    ) -> LifeResult<()> {
        let grid = self.grid.as_mut().ok_or(LifeError::EngineNotInitialized)?;
        seed_cells(grid, rng, alive_count)
    }

    /// Alive Moore neighbors of `(row, col)` on the current board
    pub fn neighbor_sum(&self, row: usize, col: usize) -> LifeResult<u8> {
        self.board()?.neighbor_sum(row, col)
    }

    /// Advance the board by one generation
    pub fn step(&mut self) -> LifeResult<()> {
        let current = self.grid.as_ref().ok_or(LifeError::EngineNotInitialized)?;
        let next = GameOfLifeRules::evolve(current);

        self.grid = Some(next);
        self.generation += 1;
        trace!(
            generation = self.generation,
            living = self.grid.as_ref().map_or(0, Grid::living_count),
            "stepped"
        );
        Ok(())
    }

    /// Advance the board by `generations` generations
    pub fn step_n(&mut self, generations: u64) -> LifeResult<()> {
        if self.grid.is_none() {
            return Err(LifeError::EngineNotInitialized);
        }
        for _ in 0..generations {
            self.step()?;
        }
        Ok(())
    }

    /// Read-only view of the current board
    pub fn board(&self) -> LifeResult<&Grid> {
        self.grid.as_ref().ok_or(LifeError::EngineNotInitialized)
    }

    /// Independent copy of the board as ordered rows of 0/1
    pub fn snapshot(&self) -> LifeResult<Vec<Vec<u8>>> {
        Ok(self.board()?.rows())
    }

    pub fn living_count(&self) -> LifeResult<usize> {
        Ok(self.board()?.living_count())
    }

    pub fn dimension(&self) -> Option<usize> {
        self.grid.as_ref().map(Grid::dimension)
    }

    /// Generations stepped since the board was built or loaded
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_initialized(&self) -> bool {
        self.grid.is_some()
    }
}

/// Draws `alive_count` distinct indices among the dead cells without replacement,
/// so placement is uniform and never retries on collisions.
fn seed_cells<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, alive_count: usize) -> LifeResult<()> {
    let dead: Vec<usize> = (0..grid.area())
        .filter(|&i| grid.cell_at(i) == DEAD)
        .collect();

    if alive_count > dead.len() {
        return Err(LifeError::InvalidCellCount {
            requested: alive_count,
            available: dead.len(),
        });
    }

    for pick in index::sample(rng, dead.len(), alive_count) {
        grid.set_index(dead[pick], ALIVE);
    }

    debug!(alive_count, living = grid.living_count(), "seeded board");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(rows: Vec<Vec<u8>>) -> LifeEngine {
        let mut engine = LifeEngine::with_seed(7);
        engine.load_board(Grid::from_rows(rows).unwrap());
        engine
    }

    #[test]
    fn test_uninitialized_operations_fail() {
        let mut engine = LifeEngine::new();
        assert!(!engine.is_initialized());
        assert_eq!(engine.step(), Err(LifeError::EngineNotInitialized));
        assert_eq!(
            engine.set_initial_state(1),
            Err(LifeError::EngineNotInitialized)
        );
        assert_eq!(engine.neighbor_sum(0, 0), Err(LifeError::EngineNotInitialized));
        assert_eq!(engine.snapshot(), Err(LifeError::EngineNotInitialized));
        assert_eq!(engine.step_n(3), Err(LifeError::EngineNotInitialized));
    }

    #[test]
    fn test_build_empty_board() {
        let mut engine = LifeEngine::new();
        engine.build_empty_board(4).unwrap();
        assert_eq!(engine.dimension(), Some(4));
        assert_eq!(engine.snapshot().unwrap(), vec![vec![0; 4]; 4]);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_invalid_dimension_keeps_previous_board() {
        let mut engine = LifeEngine::new();
        engine.build_empty_board(3).unwrap();
        assert_eq!(
            engine.build_empty_board(0),
            Err(LifeError::InvalidDimension { dimension: 0 })
        );
        assert_eq!(engine.dimension(), Some(3));
    }

    #[test]
    fn test_rebuild_resets_board_and_generation() {
        let mut engine = LifeEngine::with_seed(1);
        engine.build_empty_board(5).unwrap();
        engine.set_initial_state(10).unwrap();
        engine.step().unwrap();
        engine.build_empty_board(2).unwrap();
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.living_count().unwrap(), 0);
        assert_eq!(engine.dimension(), Some(2));
    }

    #[test]
    fn test_seeding_exactness() {
        for k in [0, 1, 12, 24, 25] {
            let mut engine = LifeEngine::new();
            engine.build_empty_board(5).unwrap();
            engine.set_initial_state(k).unwrap();

            let snapshot = engine.snapshot().unwrap();
            let alive = snapshot.iter().flatten().filter(|&&c| c == 1).count();
            let dead = snapshot.iter().flatten().filter(|&&c| c == 0).count();
            assert_eq!(alive, k);
            assert_eq!(dead, 25 - k);
        }
    }

    #[test]
    fn test_seeding_too_many_cells_leaves_board_unchanged() {
        let mut engine = LifeEngine::with_seed(3);
        engine.build_empty_board(4).unwrap();
        engine.set_initial_state(5).unwrap();
        let before = engine.snapshot().unwrap();

        assert_eq!(
            engine.set_initial_state(17),
            Err(LifeError::InvalidCellCount {
                requested: 17,
                available: 11
            })
        );
        assert_eq!(engine.snapshot().unwrap(), before);
    }

    #[test]
    fn test_seeding_on_empty_board_rejects_more_than_area() {
        let mut engine = LifeEngine::new();
        engine.build_empty_board(3).unwrap();
        assert!(matches!(
            engine.set_initial_state(10),
            Err(LifeError::InvalidCellCount { requested: 10, available: 9 })
        ));
        assert_eq!(engine.living_count().unwrap(), 0);
    }

    #[test]
    fn test_seeded_engines_are_reproducible() {
        let mut a = LifeEngine::with_seed(42);
        let mut b = LifeEngine::with_seed(42);
        for engine in [&mut a, &mut b] {
            engine.build_empty_board(10).unwrap();
            engine.set_initial_state(30).unwrap();
        }
        assert_eq!(a.snapshot().unwrap(), b.snapshot().unwrap());
    }

    #[test]
    fn test_seeding_is_uniform_over_cells() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut hits = [0usize; 16];

        for _ in 0..4000 {
            let mut engine = LifeEngine::new();
            engine.build_empty_board(4).unwrap();
            engine.set_initial_state_with(&mut rng, 1).unwrap();

            let cells = engine.board().unwrap().living_cells();
            assert_eq!(cells.len(), 1);
            let (row, col) = cells[0];
            hits[row * 4 + col] += 1;
        }

        // Expected 250 per cell; anything outside this band means a biased pick
        for (cell, &count) in hits.iter().enumerate() {
            assert!((150..=350).contains(&count), "cell {} hit {} times", cell, count);
        }
    }

    #[test]
    fn test_set_initial_state_with_external_rng() {
        let mut engine = LifeEngine::new();
        engine.build_empty_board(6).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        engine.set_initial_state_with(&mut rng, 20).unwrap();
        assert_eq!(engine.living_count().unwrap(), 20);
    }

    #[test]
    fn test_engine_neighbor_sum() {
        let engine = engine_with(vec![vec![1; 3]; 3]);
        assert_eq!(engine.neighbor_sum(1, 1).unwrap(), 8);
        assert_eq!(engine.neighbor_sum(0, 0).unwrap(), 3);
    }

    #[test]
    fn test_corner_sum_ignores_opposite_edges() {
        let engine = engine_with(vec![
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
            vec![1, 1, 0, 1],
        ]);
        assert_eq!(engine.neighbor_sum(0, 0).unwrap(), 0);
        assert_eq!(engine.neighbor_sum(3, 3).unwrap(), 0);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut engine = LifeEngine::new();
        engine.build_empty_board(5).unwrap();
        engine.load_board({
            let mut grid = Grid::new(5).unwrap();
            grid.set(2, 2, true).unwrap();
            grid
        });
        engine.step().unwrap();
        assert_eq!(engine.living_count().unwrap(), 0);
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_overcrowded_board_keeps_only_corners() {
        let mut engine = engine_with(vec![vec![1; 3]; 3]);
        engine.step().unwrap();
        assert_eq!(
            engine.snapshot().unwrap(),
            vec![vec![1, 0, 1], vec![0, 0, 0], vec![1, 0, 1]]
        );
    }

    #[test]
    fn test_single_cell_board_dies() {
        let mut engine = engine_with(vec![vec![1]]);
        assert_eq!(engine.neighbor_sum(0, 0).unwrap(), 0);
        engine.step().unwrap();
        assert_eq!(engine.snapshot().unwrap(), vec![vec![0]]);
    }

    #[test]
    fn test_block_is_stable() {
        let block = vec![
            vec![0, 0, 0, 0],
            vec![0, 1, 1, 0],
            vec![0, 1, 1, 0],
            vec![0, 0, 0, 0],
        ];
        let mut engine = engine_with(block.clone());
        engine.step_n(10).unwrap();
        assert_eq!(engine.snapshot().unwrap(), block);
        assert_eq!(engine.generation(), 10);
    }

    #[test]
    fn test_blinker_flips_with_period_two() {
        let mut grid = Grid::new(5).unwrap();
        for col in 0..3 {
            grid.set(1, col, true).unwrap();
        }
        let mut engine = LifeEngine::new();
        engine.load_board(grid.clone());

        engine.step().unwrap();
        assert_eq!(
            engine.board().unwrap().living_cells(),
            vec![(0, 1), (1, 1), (2, 1)]
        );

        engine.step().unwrap();
        assert_eq!(engine.board().unwrap(), &grid);
    }

    #[test]
    fn test_step_is_deterministic() {
        let mut seeded = LifeEngine::with_seed(5);
        seeded.build_empty_board(12).unwrap();
        seeded.set_initial_state(50).unwrap();
        let start = seeded.board().unwrap().clone();

        let mut a = LifeEngine::new();
        let mut b = LifeEngine::new();
        a.load_board(start.clone());
        b.load_board(start);
        a.step_n(4).unwrap();
        b.step_n(4).unwrap();
        assert_eq!(a.snapshot().unwrap(), b.snapshot().unwrap());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut engine = engine_with(vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]]);
        let before = engine.snapshot().unwrap();
        engine.step().unwrap();
        assert_eq!(before, vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]]);
        assert_ne!(engine.snapshot().unwrap(), before);
    }
}
