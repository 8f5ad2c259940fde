//! The fixed Morse alphabet — a bidirectional mapping between characters
//! and dot/dash symbol strings.
//!
//! Space is part of the table and maps to the reserved word separator `/`,
//! so the translator never has to special-case it.

/// Character ↔ Morse symbol pairs. Letters first, then digits, then
/// punctuation, then the space ↦ `/` entry. Immutable and injective:
/// every symbol string appears exactly once, so reverse lookup is safe.
pub const MORSE_TABLE: &[(char, &str)] = &[
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('/', "-..-."),
    ('@', ".--.-."),
    (' ', "/"),
];

/// Number of leading alphanumeric entries in [`MORSE_TABLE`].
const PROMPT_COUNT: usize = 36;

/// Look up the Morse symbol string for a character, case-folded to
/// lowercase. Returns `None` for characters outside the alphabet.
pub fn code_for(ch: char) -> Option<&'static str> {
    let ch = ch.to_ascii_lowercase();
    MORSE_TABLE
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, code)| *code)
}

/// Reverse lookup: the character for a Morse symbol string. The word
/// separator `/` decodes to a space. Returns `None` for unknown tokens.
pub fn char_for(code: &str) -> Option<char> {
    MORSE_TABLE
        .iter()
        .find(|(_, m)| *m == code)
        .map(|(c, _)| *c)
}

/// The letter and digit entries, used by the quiz generator to draw
/// prompts. Punctuation and space are never quizzed.
pub fn prompt_entries() -> &'static [(char, &'static str)] {
    &MORSE_TABLE[..PROMPT_COUNT]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(code_for('a'), Some(".-"));
        assert_eq!(code_for('A'), Some(".-"));
        assert_eq!(code_for('9'), Some("----."));
    }

    #[test]
    fn space_maps_to_separator() {
        assert_eq!(code_for(' '), Some("/"));
        assert_eq!(char_for("/"), Some(' '));
    }

    #[test]
    fn unsupported_characters_have_no_code() {
        assert_eq!(code_for('!'), None);
        assert_eq!(code_for('ä'), None);
    }

    #[test]
    fn table_is_injective() {
        for (i, (_, code)) in MORSE_TABLE.iter().enumerate() {
            for (_, other) in &MORSE_TABLE[i + 1..] {
                assert_ne!(code, other, "duplicate symbol string {code}");
            }
        }
    }

    #[test]
    fn round_trip_every_entry() {
        for (ch, code) in MORSE_TABLE {
            assert_eq!(char_for(code), Some(*ch), "entry {ch} did not round-trip");
        }
    }

    #[test]
    fn prompt_entries_are_alphanumeric() {
        assert_eq!(prompt_entries().len(), 36);
        for (ch, _) in prompt_entries() {
            assert!(ch.is_ascii_alphanumeric(), "prompt entry {ch} not alphanumeric");
        }
    }
}
