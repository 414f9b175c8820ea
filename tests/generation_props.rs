//! Property tests for puzzle generation.
//!
//! Seeds and grid sizes are generated so the invariants below hold no matter
//! which random placements the generator happens to pick:
//! - the finished grid is always square and fully lettered
//! - every word reported as placed is actually findable
//! - words as long as the grid never cause out-of-bounds writes
//! - short word lists on a roomy grid always place completely

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use sopa::{Puzzle, PuzzleConfig};

fn generate(seed: u64, size: usize, words: &[&str]) -> Puzzle {
    let words: Vec<String> = words.iter().map(|word| word.to_string()).collect();
    let config = PuzzleConfig {
        size,
        ..PuzzleConfig::default()
    };

    Puzzle::generate_with_rng(&config, &words, &mut StdRng::seed_from_u64(seed)).unwrap()
}

proptest! {
    #[test]
    fn grid_is_square_and_fully_lettered(seed in any::<u64>(), size in 4usize..20) {
        let puzzle = generate(seed, size, &["sol", "rio", "mar"]);

        prop_assert_eq!(puzzle.grid().num_rows(), size);
        prop_assert_eq!(puzzle.grid().num_columns(), size);

        for row in puzzle.grid().rows_iter() {
            for &ch in row {
                prop_assert!(ch.is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn placed_words_always_validate(seed in any::<u64>(), size in 6usize..16) {
        let puzzle = generate(seed, size, &["lago", "rio", "monte", "valle"]);

        for word in puzzle.placed() {
            prop_assert!(puzzle.contains(word));
        }

        // Every requested word lands in exactly one of the two lists.
        prop_assert_eq!(puzzle.placed().len() + puzzle.rejected().len(), 4);
    }

    #[test]
    fn short_words_on_a_roomy_grid_all_place(seed in any::<u64>()) {
        let puzzle = generate(seed, 15, &["nube", "sol", "lluvia", "viento", "rayo"]);

        prop_assert!(puzzle.rejected().is_empty());
        prop_assert_eq!(puzzle.placed().len(), 5);
    }

    #[test]
    fn full_length_words_stay_in_bounds(seed in any::<u64>(), size in 5usize..12) {
        // A word as long as the grid only fits along a full row, column or
        // main diagonal, so placement is at its most constrained here. An
        // out-of-bounds write would panic inside the generator.
        let word: String = "ABCDEFGHIJKL".chars().take(size).collect();
        let puzzle = generate(seed, size, &[&word]);

        prop_assert_eq!(puzzle.grid().num_rows(), size);

        if puzzle.rejected().is_empty() {
            prop_assert!(puzzle.contains(&word));
        }
    }
}
