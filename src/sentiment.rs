//! Headline polarity scoring.

use crate::utils::{stats, text};

mod lexicon;

use lexicon::{LEXICON, NEGATION_FACTOR};

pub trait PolarityScorer {
    /// Polarity of `text` in `[-1, 1]`.
    fn polarity(&self, text: &str) -> f64;
}

/// Scores text with the built-in word lexicon.
///
/// Each lexicon word contributes its polarity, scaled by any intensifiers
/// directly in front of it and by `-0.5` after a negation. The result is the
/// mean contribution, clamped to `[-1, 1]`, or `0.0` without any lexicon word.
#[derive(Clone, Copy, Debug, Default)]
pub struct LexiconScorer;

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let mut contributions: Vec<f64> = vec![];

        let mut negated = false;
        let mut intensity = 1.0;
        for word in text::words(text) {
            if LEXICON.is_negation(&word) {
                negated = true;
                continue;
            }

            if let Some(multiplier) = LEXICON.intensity(&word) {
                intensity *= multiplier;
                continue;
            }

            if let Some(polarity) = LEXICON.polarity(&word) {
                let mut score = polarity * intensity;
                if negated {
                    score *= NEGATION_FACTOR;
                }
                contributions.push(score);
            }

            negated = false;
            intensity = 1.0;
        }

        stats::mean(&contributions)
            .map(|v| v.clamp(-1.0, 1.0))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_polarity_words() {
        let scorer = LexiconScorer;

        assert_close(scorer.polarity("great"), 0.8);
        assert_close(scorer.polarity("bad"), -0.7);
        assert_close(scorer.polarity("Stocks That Hit 52-Week Highs On Friday"), 0.0);
        assert_close(scorer.polarity(""), 0.0);
    }

    #[test]
    fn test_polarity_modifiers() {
        let scorer = LexiconScorer;

        assert_close(scorer.polarity("very good"), 0.7 * 1.3);
        assert_close(scorer.polarity("not good"), -0.35);
        assert_close(scorer.polarity("isn't bad"), 0.35);
        assert_close(scorer.polarity("extremely terrible"), -1.0);
        assert_close(scorer.polarity("good results, not great outlook"), (0.7 - 0.4) / 2.0);
    }

    #[test]
    fn test_polarity_deterministic_and_bounded() {
        let scorer = LexiconScorer;
        let headlines = [
            "Shares surge after record profit beats estimates",
            "Company misses estimates, stock plunges amid fraud lawsuit",
            "Absolutely incredibly superb quarter",
            "Analysts mixed on outlook",
        ];

        for headline in headlines {
            let score = scorer.polarity(headline);
            assert!((-1.0..=1.0).contains(&score));
            assert_eq!(score, scorer.polarity(headline));
        }
        assert!(scorer.polarity(headlines[0]) > 0.0);
        assert!(scorer.polarity(headlines[1]) < 0.0);
    }
}
