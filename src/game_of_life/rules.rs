//! Game of Life transition rules (B3/S23)

use super::grid::{Grid, ALIVE, DEAD};

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Evolve the board one generation forward.
    ///
    /// Every neighbor sum is read from `current`; results go into a fresh board,
    /// so `current` is never observed half-updated.
    pub fn evolve(current: &Grid) -> Grid {
        let dimension = current.dimension();
        let mut next = current.clone();

        for row in 0..dimension {
            for col in 0..dimension {
                let sum = current.neighbor_sum_unchecked(row, col);
                let alive = Self::should_be_alive(current.is_alive(row, col), sum);
                next.set_index(row * dimension + col, if alive { ALIVE } else { DEAD });
            }
        }

        next
    }

    /// Evolve the board for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }

    /// Whether a cell is alive next generation given its state and neighbor sum
    pub fn should_be_alive(alive: bool, neighbor_sum: u8) -> bool {
        matches!((alive, neighbor_sum), (true, 2) | (true, 3) | (false, 3))
    }

    pub fn is_still_life(grid: &Grid) -> bool {
        Self::evolve(grid) == *grid
    }

    /// Smallest period `p <= max_period` after which the board repeats, if any.
    /// A still life has period 1.
    pub fn oscillation_period(grid: &Grid, max_period: usize) -> Option<usize> {
        let mut state = grid.clone();
        for period in 1..=max_period {
            state = Self::evolve(&state);
            if state == *grid {
                return Some(period);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<u8>>) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_still_life_block() {
        let block = grid(vec![
            vec![0, 0, 0, 0],
            vec![0, 1, 1, 0],
            vec![0, 1, 1, 0],
            vec![0, 0, 0, 0],
        ]);

        let mut evolved = block.clone();
        for _ in 0..5 {
            evolved = GameOfLifeRules::evolve(&evolved);
            assert_eq!(evolved, block);
        }
        assert!(GameOfLifeRules::is_still_life(&block));
        assert_eq!(GameOfLifeRules::oscillation_period(&block, 4), Some(1));
    }

    #[test]
    fn test_oscillator_blinker() {
        let mut horizontal = Grid::new(5).unwrap();
        for col in 0..3 {
            horizontal.set(1, col, true).unwrap();
        }

        let evolved = GameOfLifeRules::evolve(&horizontal);
        assert_eq!(evolved.living_cells(), vec![(0, 1), (1, 1), (2, 1)]);

        let evolved_twice = GameOfLifeRules::evolve(&evolved);
        assert_eq!(evolved_twice, horizontal);
        assert_eq!(GameOfLifeRules::oscillation_period(&horizontal, 4), Some(2));
    }

    #[test]
    fn test_underpopulation() {
        let mut lonely = Grid::new(3).unwrap();
        lonely.set(1, 1, true).unwrap();
        assert!(GameOfLifeRules::evolve(&lonely).is_empty());
    }

    #[test]
    fn test_evolve_is_deterministic() {
        let start = grid(vec![
            vec![0, 1, 0, 0],
            vec![0, 0, 1, 0],
            vec![1, 1, 1, 0],
            vec![0, 0, 0, 0],
        ]);
        let a = GameOfLifeRules::evolve_generations(start.clone(), 3);
        let b = GameOfLifeRules::evolve_generations(start, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_glider_has_no_short_period() {
        let glider = grid(vec![
            vec![0, 1, 0, 0, 0, 0],
            vec![0, 0, 1, 0, 0, 0],
            vec![1, 1, 1, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0],
        ]);
        assert!(!GameOfLifeRules::is_still_life(&glider));
        assert_eq!(GameOfLifeRules::oscillation_period(&glider, 3), None);
    }

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::should_be_alive(true, 2));
        assert!(GameOfLifeRules::should_be_alive(true, 3));
        assert!(GameOfLifeRules::should_be_alive(false, 3));
        assert!(!GameOfLifeRules::should_be_alive(true, 1));
        assert!(!GameOfLifeRules::should_be_alive(true, 4));
        assert!(!GameOfLifeRules::should_be_alive(false, 2));
        assert!(!GameOfLifeRules::should_be_alive(false, 8));
    }
}
