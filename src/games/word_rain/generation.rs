//! Round-set generation for Word Rain.
//!
//! Builds each round's set of falling words: the announced target plus
//! unique distractors, laid out in evenly spaced columns with a small
//! vertical stagger.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{FallingWord, TapState, VocabWord};
use crate::constants::{WORD_SPAWN_Y_BASE, WORD_SPAWN_Y_JITTER};

/// Pick a uniformly random target word from the vocabulary.
pub fn pick_target(vocabulary: &[VocabWord], rng: &mut impl Rng) -> Option<String> {
    vocabulary.choose(rng).map(|entry| entry.word.clone())
}

/// Build a round set of `count` falling words containing `target_word`
/// exactly once.
///
/// Distractors are drawn without replacement from the vocabulary, so a
/// small vocabulary yields a smaller set rather than duplicates. If the
/// target is missing from the vocabulary it is still forced into the set
/// (with no glyph). The returned words are laid out left to right at
/// `x = (i + 0.5) / n` and staggered slightly above the top edge, with
/// ids assigned sequentially from `id_base`.
pub fn build_round_set(
    vocabulary: &[VocabWord],
    count: usize,
    target_word: &str,
    id_base: u32,
    rng: &mut impl Rng,
) -> Vec<FallingWord> {
    let target_entry = vocabulary
        .iter()
        .find(|entry| entry.word == target_word)
        .cloned()
        .unwrap_or_else(|| VocabWord {
            word: target_word.to_string(),
            glyph: String::new(),
        });

    let mut chosen: Vec<VocabWord> = vec![target_entry];
    let mut pool: Vec<&VocabWord> = vocabulary
        .iter()
        .filter(|entry| entry.word != target_word)
        .collect();
    pool.shuffle(rng);

    for entry in pool {
        if chosen.len() >= count.max(1) {
            break;
        }
        if chosen.iter().any(|picked| picked.word == entry.word) {
            continue;
        }
        chosen.push(entry.clone());
    }

    // Shuffle so the target's column is uniform across rounds.
    chosen.shuffle(rng);

    let n = chosen.len();
    chosen
        .iter()
        .enumerate()
        .map(|(i, entry)| FallingWord {
            id: id_base + i as u32,
            word: entry.word.clone(),
            glyph_hint: entry.glyph.clone(),
            x: (i as f64 + 0.5) / n as f64,
            y: WORD_SPAWN_Y_BASE - rng.gen_range(0.0..WORD_SPAWN_Y_JITTER),
            is_target: entry.word == target_word,
            tap_state: TapState::Untapped,
        })
        .collect()
}
