//! Quiz prompt generation for the practice and sound-quiz pages.
//!
//! Prompts are drawn with a seeded PCG32 so a quiz round is reproducible
//! from its seed — the same sequence on every platform, including WASM,
//! with no platform entropy. Scoring and streak state live in the UI, not
//! here.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::alphabet;
use crate::translate;

/// A single-character quiz prompt: the Morse code to play or display, and
/// the character the player must answer with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizPrompt {
    pub answer: char,
    pub code: String,
}

impl QuizPrompt {
    /// Case-insensitive answer check. Surrounding whitespace is ignored.
    pub fn check(&self, guess: &str) -> bool {
        let mut chars = guess.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_ascii_lowercase() == self.answer,
            _ => false,
        }
    }
}

/// A whole-word quiz prompt, as used by the sound quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPrompt {
    pub answer: String,
    pub code: String,
}

impl WordPrompt {
    /// Case-insensitive answer check. Surrounding whitespace is ignored.
    pub fn check(&self, guess: &str) -> bool {
        guess.trim().eq_ignore_ascii_case(&self.answer)
    }
}

/// Draws random prompts from the alphanumeric part of the alphabet.
#[derive(Debug, Clone)]
pub struct QuizGenerator {
    rng: Pcg32,
}

impl QuizGenerator {
    pub fn new(seed: u64) -> Self {
        QuizGenerator {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Draw the next single-character prompt.
    pub fn next_prompt(&mut self) -> QuizPrompt {
        let entries = alphabet::prompt_entries();
        let (answer, code) = entries[self.rng.gen_range(0..entries.len())];
        QuizPrompt {
            answer,
            code: code.to_string(),
        }
    }

    /// Draw a whole-word prompt from the given word list. The code uses
    /// the marked translation, so characters outside the alphabet show up
    /// as `?` tokens instead of silently shortening the prompt.
    pub fn next_word_prompt(&mut self, words: &[&str]) -> Option<WordPrompt> {
        if words.is_empty() {
            return None;
        }
        let word = words[self.rng.gen_range(0..words.len())];
        Some(WordPrompt {
            answer: word.to_string(),
            code: translate::text_to_morse_marked(word),
        })
    }
}
