// Phrase Picker Port
//
// Several replies exist in equivalent variants; which one is shown is cosmetic.

use rand::seq::SliceRandom;

/// Chooses one phrase out of a set of equivalent variants
pub trait PhrasePicker: Send + Sync {
    /// Returns an empty string when `variants` is empty
    fn pick<'a>(&self, variants: &'a [String]) -> &'a str;
}

/// Uniform random choice (production)
pub struct RandomPhrasePicker;

impl PhrasePicker for RandomPhrasePicker {
    fn pick<'a>(&self, variants: &'a [String]) -> &'a str {
        variants
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or_default()
    }
}

pub mod mocks {
    use super::*;

    /// Always the first variant, for deterministic assertions
    pub struct FirstPhrasePicker;

    impl PhrasePicker for FirstPhrasePicker {
        fn pick<'a>(&self, variants: &'a [String]) -> &'a str {
            variants.first().map(String::as_str).unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_picker_returns_a_variant() {
        let variants = vec!["uno".to_string(), "dos".to_string(), "tres".to_string()];

        for _ in 0..20 {
            let picked = RandomPhrasePicker.pick(&variants);
            assert!(variants.iter().any(|v| v == picked));
        }
    }

    #[test]
    fn test_pickers_handle_empty_sets() {
        assert_eq!(RandomPhrasePicker.pick(&[]), "");
        assert_eq!(mocks::FirstPhrasePicker.pick(&[]), "");
    }
}
