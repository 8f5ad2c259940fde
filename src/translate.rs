//! Text ↔ Morse translation.
//!
//! Two policies exist for characters outside the alphabet, and they belong
//! to different call sites: the converter page silently elides them, while
//! the quiz generator marks them with a literal `?` token so the prompt
//! keeps its shape. Decoding drops unmatched tokens — a lossy decode by
//! design, never an error.

use crate::alphabet;

/// Convert text to a Morse symbol string. Unsupported characters are
/// elided; spaces become the `/` word separator; tokens are joined by a
/// single space with no leading or trailing separator.
pub fn text_to_morse(text: &str) -> String {
    join_tokens(text.chars().filter_map(alphabet::code_for))
}

/// Convert text to Morse, marking every unsupported character with a
/// literal `?` token. Used by the quiz generator, which needs prompts to
/// keep one token per input character.
pub fn text_to_morse_marked(text: &str) -> String {
    join_tokens(text.chars().map(|ch| alphabet::code_for(ch).unwrap_or("?")))
}

fn join_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for token in tokens {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Decode a Morse symbol string back to text. Tokens are separated by
/// whitespace, `/` decodes to a space, and tokens with no table entry are
/// silently dropped. Output is lowercase.
pub fn morse_to_text(code: &str) -> String {
    code.split_whitespace()
        .filter_map(alphabet::char_for)
        .collect()
}
