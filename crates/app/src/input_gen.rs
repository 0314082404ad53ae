//! Sample text generation for demo runs.
//!
//! When no input file is specified we generate text with the skewed symbol
//! distribution of natural language, so the Huffman codes have visibly
//! uneven lengths and the stats block shows real compression.
//!
//! # Design
//!
//! Words are drawn from a small weighted vocabulary (short common words
//! heavily favored), joined by spaces with occasional punctuation and line
//! breaks. The generator is fully deterministic for a given seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Vocabulary with rough frequency weights; common words first.
const VOCABULARY: &[(&str, u32)] = &[
    ("the", 12),
    ("a", 9),
    ("and", 8),
    ("to", 7),
    ("of", 7),
    ("it", 6),
    ("in", 6),
    ("was", 5),
    ("that", 4),
    ("tree", 3),
    ("code", 3),
    ("data", 3),
    ("symbol", 2),
    ("stream", 2),
    ("packed", 2),
    ("frequency", 1),
    ("compression", 1),
    ("quixotic", 1),
    ("jazz", 1),
];

/// Generate `chars` characters of sample text, deterministically for `seed`.
pub fn generate_sample_text(seed: u64, chars: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let total_weight: u32 = VOCABULARY.iter().map(|&(_, w)| w).sum();
    let mut text = String::with_capacity(chars + 16);

    while text.chars().count() < chars {
        if !text.is_empty() {
            // Mostly spaces, sometimes punctuation or a line break
            match rng.gen_range(0..12) {
                0 => text.push_str(". "),
                1 => text.push_str(", "),
                2 => text.push('\n'),
                _ => text.push(' '),
            }
        }

        let mut pick = rng.gen_range(0..total_weight);
        for &(word, weight) in VOCABULARY {
            if pick < weight {
                text.push_str(word);
                break;
            }
            pick -= weight;
        }
    }

    // Trim overshoot from the final word
    text.chars().take(chars).collect()
}
