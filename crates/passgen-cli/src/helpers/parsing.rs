//! Parsing helpers for generation fields.

use passgen_core::GenerationRequest;

use crate::config::GenerateSection;
use crate::constants::INVALID_NUMERIC_MESSAGE;
use crate::errors::CliError;

/// Parse a non-negative count, with the generic numeric error on failure.
///
/// Used as a clap value parser, so the error is a plain string.
pub fn parse_count(value: &str) -> Result<usize, String> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| INVALID_NUMERIC_MESSAGE.to_string())
}

/// Split a custom word field on whitespace.
pub fn split_words(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

/// Raw text of the interactive form, before validation.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub adjectives: String,
    pub nouns: String,
    pub digits: String,
    pub punctuation: String,
    pub count: String,
    pub words: String,
    pub scramble: bool,
}

impl FormFields {
    /// Prefill the form from configured defaults.
    pub fn from_defaults(defaults: &GenerateSection) -> Self {
        Self {
            adjectives: defaults.adjectives.to_string(),
            nouns: defaults.nouns.to_string(),
            digits: defaults.digits.to_string(),
            punctuation: defaults.punctuation.to_string(),
            count: defaults.count.to_string(),
            words: defaults.words.join(" "),
            scramble: defaults.scramble,
        }
    }

    /// Validate every numeric field; any failure rejects the whole form.
    pub fn parse(&self) -> Result<(GenerationRequest, usize), CliError> {
        let field = |value: &str| parse_count(value).map_err(|_| CliError::invalid_numeric());

        let request = GenerationRequest::new(
            field(&self.adjectives)?,
            field(&self.nouns)?,
            field(&self.digits)?,
            field(&self.punctuation)?,
        )
        .with_scramble(self.scramble)
        .with_custom_words(split_words(&self.words));
        let count = field(&self.count)?;

        Ok((request, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: [&str; 5], words: &str) -> FormFields {
        FormFields {
            adjectives: values[0].to_string(),
            nouns: values[1].to_string(),
            digits: values[2].to_string(),
            punctuation: values[3].to_string(),
            count: values[4].to_string(),
            words: words.to_string(),
            scramble: true,
        }
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3"), Ok(3));
        assert_eq!(parse_count(" 12 "), Ok(12));
        assert_eq!(parse_count("0"), Ok(0));
        assert!(parse_count("-1").is_err());
        assert!(parse_count("two").is_err());
        assert!(parse_count("").is_err());
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("  orbit\tlantern \n moss "), vec!["orbit", "lantern", "moss"]);
        assert!(split_words("   ").is_empty());
    }

    #[test]
    fn test_form_parse_builds_request() {
        let (request, count) = fields(["1", "2", "3", "4", "5"], "orbit lantern")
            .parse()
            .unwrap();
        assert_eq!(request.adjectives, 1);
        assert_eq!(request.nouns, 2);
        assert_eq!(request.digits, 3);
        assert_eq!(request.punctuation, 4);
        assert!(request.scramble);
        assert_eq!(request.custom_words, vec!["orbit", "lantern"]);
        assert_eq!(count, 5);
    }

    #[test]
    fn test_any_bad_field_rejects_form() {
        for bad in 0..5 {
            let mut values = ["1", "1", "1", "1", "1"];
            values[bad] = "x";
            let err = fields(values, "").parse().unwrap_err();
            assert_eq!(err.to_string(), "Please enter valid numeric values.");
        }
    }

    #[test]
    fn test_defaults_round_trip_through_form() {
        let defaults = GenerateSection::default();
        let (request, count) = FormFields::from_defaults(&defaults).parse().unwrap();
        assert_eq!(request.digits, defaults.digits);
        assert_eq!(count, defaults.count);
        assert!(request.custom_words.is_empty());
    }
}
