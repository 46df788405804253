use lehmer_utils::random::SeededRandom;
use lehmer_utils::shuffle::{shuffle, shuffled_indices};

fn main() {
    println!("=== Park-Miller Shuffle Demo ===\n");

    println!("Shuffling 0-9 with seed 12345:");
    let shuffled = shuffled_indices(12345, 10);
    println!("Result: {:?}\n", shuffled);

    println!("Same seed (12345) again:");
    let shuffled2 = shuffled_indices(12345, 10);
    println!("Result: {:?}", shuffled2);
    println!("Are they equal? {}\n", shuffled == shuffled2);

    println!("Different seed (54321):");
    let shuffled3 = shuffled_indices(54321, 10);
    println!("Result: {:?}", shuffled3);
    println!("Are they different? {}\n", shuffled != shuffled3);

    // One generator feeding several shuffles, checkpointed half way
    let mut rng = SeededRandom::new(999);
    let mut words = vec!["alpha", "bravo", "charlie", "delta", "echo"];
    shuffle(&mut words, rng.fractions());
    println!("Words after first shuffle: {:?}", words);
    let checkpoint = rng.state();
    shuffle(&mut words, rng.fractions());
    println!("Words after second shuffle: {:?}", words);
    println!("Checkpoint taken between them: {}\n", checkpoint);

    let mut sorted = shuffled_indices(999, 100);
    sorted.sort();
    let expected: Vec<usize> = (0..100).collect();
    println!("Is it a valid permutation? {}", sorted == expected);
}
