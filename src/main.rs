use sopa::{Puzzle, PuzzleConfig};

fn main() {
    let words = [
        String::from("sol"),
        String::from("luna"),
        String::from("estrella"),
        String::from("planeta"),
        String::from("cometa"),
        String::from("galaxia"),
        String::from("orbita"),
        String::from("nebulosa"),
    ];

    let puzzle = Puzzle::generate(&PuzzleConfig::default(), &words).unwrap();

    println!("{}", puzzle);

    if !puzzle.rejected().is_empty() {
        println!("could not place: {}", puzzle.rejected().join(", "));
    }
}
