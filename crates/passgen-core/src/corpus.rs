//! Static word lists and the character substitution table.

/// Adjectives drawn (with replacement) as the first words of a password.
pub const ADJECTIVES: &[&str] = &[
    "quick", "bright", "silent", "brave", "happy", "wild", "gentle", "bold", "clever", "fuzzy",
    "glowing", "icy", "jolly", "kind", "lucky", "mighty", "neat", "odd", "proud", "quiet",
    "rapid", "shiny", "tiny", "vast", "witty", "zany", "young", "ancient", "chilly", "dusty",
    "eager", "fierce", "graceful", "honest", "intense", "jazzy", "keen", "loyal", "modern",
    "nifty", "orange", "playful", "quirky", "rusty", "sharp", "tough", "upbeat", "vivid", "warm",
    "zealous",
];

/// Nouns drawn (with replacement) after the adjectives.
pub const NOUNS: &[&str] = &[
    "fox", "river", "mountain", "storm", "ocean", "tree", "cloud", "wolf", "sun", "moon", "star",
    "stone", "leaf", "wind", "flame", "shadow", "echo", "forest", "valley", "canyon", "breeze",
    "island", "snow", "rain", "meadow", "rock", "beach", "sand", "ice", "lake", "peak", "fog",
    "wave", "hill", "thunder", "lightning", "desert", "glacier", "tide", "grove", "creek",
    "field", "plain", "cliff", "earth", "sky", "comet", "crater", "volcano", "marsh",
];

/// ASCII punctuation used for padding symbols.
pub const PUNCTUATION: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<',
    '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];

/// Look-alike replacements keyed by lowercase letter.
const SUBSTITUTIONS: &[(char, &[char])] = &[
    ('a', &['@', '4']),
    ('e', &['3']),
    ('i', &['1', '!']),
    ('o', &['0']),
    ('s', &['$', '5']),
    ('l', &['1']),
    ('t', &['7']),
];

/// Return the replacement candidates for `c`, matching case-insensitively.
pub fn substitutions_for(c: char) -> Option<&'static [char]> {
    let lower = c.to_ascii_lowercase();
    SUBSTITUTIONS
        .iter()
        .find(|(letter, _)| *letter == lower)
        .map(|(_, candidates)| *candidates)
}
