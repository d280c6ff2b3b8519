//! Password construction from the word corpus.
//!
//! A password is assembled from word fragments (adjectives, nouns and
//! caller-supplied words, each run through look-alike substitution and the
//! case-pattern rule), digit fragments and punctuation fragments. The
//! fragment sequence is optionally shuffled, joined, and finally repaired so
//! that it always holds both an uppercase and a lowercase letter.
//!
//! All randomness comes from the caller's [`Rng`], so a seeded generator
//! reproduces the same password.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::corpus::{substitutions_for, ADJECTIVES, NOUNS, PUNCTUATION};

/// Probability that a substitutable character is replaced.
const SUBSTITUTION_PROBABILITY: f64 = 0.5;

/// Parameters for one password.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Number of adjectives drawn from the corpus
    pub adjectives: usize,
    /// Number of nouns drawn from the corpus
    pub nouns: usize,
    /// Number of random digits appended
    pub digits: usize,
    /// Number of random punctuation symbols appended
    pub punctuation: usize,
    /// Shuffle the fragment order before joining
    pub scramble: bool,
    /// Extra words placed after the corpus words
    #[serde(default)]
    pub custom_words: Vec<String>,
}

impl GenerationRequest {
    /// Create a request with the given fragment counts, no scrambling and no custom words.
    pub fn new(adjectives: usize, nouns: usize, digits: usize, punctuation: usize) -> Self {
        Self {
            adjectives,
            nouns,
            digits,
            punctuation,
            scramble: false,
            custom_words: Vec::new(),
        }
    }

    pub fn with_scramble(mut self, scramble: bool) -> Self {
        self.scramble = scramble;
        self
    }

    pub fn with_custom_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_words = words.into_iter().map(Into::into).collect();
        self
    }
}

/// Replace substitutable characters with a random look-alike, each with probability 0.5.
///
/// Characters without a table entry (digits, symbols, letters outside the
/// table) are kept as-is, including their case, and consume no randomness.
pub fn apply_substitution<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    word.chars()
        .map(|c| match substitutions_for(c) {
            Some(candidates) if rng.gen_bool(SUBSTITUTION_PROBABILITY) => {
                *candidates.choose(rng).unwrap_or(&c)
            }
            _ => c,
        })
        .collect()
}

/// Build a single password.
///
/// # Examples
///
/// ```
/// use passgen_core::generator::{build_password, GenerationRequest};
///
/// let request = GenerationRequest::new(0, 0, 0, 0);
/// let password = build_password(&request, &mut rand::thread_rng());
/// assert_eq!(password, "Aa");
/// ```
pub fn build_password<R: Rng + ?Sized>(request: &GenerationRequest, rng: &mut R) -> String {
    let mut fragments = draw_fragments(request, rng);
    if request.scramble {
        fragments.shuffle(rng);
    }

    let mut password = fragments.concat();
    if !password.chars().any(char::is_uppercase) {
        password.push('A');
    }
    if !password.chars().any(char::is_lowercase) {
        password.push('a');
    }
    password
}

/// Build `count` passwords from the same request.
pub fn build_batch<R: Rng + ?Sized>(
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    (0..count).map(|_| build_password(request, rng)).collect()
}

/// Draw every fragment in assembly order: words, then digits, then punctuation.
fn draw_fragments<R: Rng + ?Sized>(request: &GenerationRequest, rng: &mut R) -> Vec<String> {
    let mut words: Vec<&str> = Vec::with_capacity(
        request.adjectives + request.nouns + request.custom_words.len(),
    );
    words.extend((0..request.adjectives).filter_map(|_| ADJECTIVES.choose(rng).copied()));
    words.extend((0..request.nouns).filter_map(|_| NOUNS.choose(rng).copied()));
    words.extend(
        request
            .custom_words
            .iter()
            .map(String::as_str)
            .filter(|word| !word.is_empty()),
    );

    let mut fragments: Vec<String> =
        Vec::with_capacity(words.len() + request.digits + request.punctuation);

    for (position, word) in words.into_iter().enumerate() {
        let substituted = apply_substitution(word, rng);
        let upper = match position {
            0 => true,
            1 => false,
            _ => rng.gen_bool(0.5),
        };
        fragments.push(with_first_case(&substituted, upper));
    }

    for _ in 0..request.digits {
        let digit: u32 = rng.gen_range(0..10);
        fragments.push(digit.to_string());
    }

    for _ in 0..request.punctuation {
        if let Some(symbol) = PUNCTUATION.choose(rng) {
            fragments.push(symbol.to_string());
        }
    }

    fragments
}

fn with_first_case(word: &str, upper: bool) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if upper => first.to_uppercase().chain(chars).collect(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
