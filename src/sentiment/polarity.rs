// Polarity scorer trait — swap-ready abstraction for the generic fallback.
//
// The blender only needs `text -> polarity in [-1, 1]`. The default
// implementation is a rule-based English lexicon with intensifiers and
// negation, which covers the code-switched English in the snapshots.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use anyhow::Result;

/// Trait for scoring free text on a continuous polarity scale.
pub trait PolarityScorer: Send + Sync {
    /// Polarity from -1.0 (very negative) to 1.0 (very positive).
    fn polarity(&self, text: &str) -> Result<f64>;
}

static POLARITY: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    [
        ("good", 0.7),
        ("great", 0.8),
        ("excellent", 1.0),
        ("amazing", 0.6),
        ("awesome", 1.0),
        ("best", 1.0),
        ("better", 0.5),
        ("nice", 0.6),
        ("love", 0.5),
        ("happy", 0.8),
        ("wonderful", 1.0),
        ("perfect", 1.0),
        ("beautiful", 0.85),
        ("brilliant", 0.9),
        ("fantastic", 0.4),
        ("success", 0.3),
        ("successful", 0.75),
        ("win", 0.8),
        ("strong", 0.43),
        ("fair", 0.7),
        ("proud", 0.8),
        ("hope", 0.3),
        ("support", 0.2),
        ("agree", 0.2),
        ("thanks", 0.2),
        ("thank", 0.2),
        ("glad", 0.5),
        ("progress", 0.2),
        ("bad", -0.7),
        ("worse", -0.4),
        ("worst", -1.0),
        ("terrible", -1.0),
        ("awful", -1.0),
        ("horrible", -1.0),
        ("poor", -0.4),
        ("hate", -0.8),
        ("sad", -0.5),
        ("angry", -0.5),
        ("wrong", -0.5),
        ("stupid", -0.8),
        ("corrupt", -0.5),
        ("fail", -0.5),
        ("failed", -0.5),
        ("failure", -0.32),
        ("disappointed", -0.75),
        ("disappointing", -0.6),
        ("broken", -0.4),
        ("crisis", -0.3),
        ("problem", -0.2),
        ("weak", -0.38),
        ("unfair", -0.5),
        ("useless", -0.5),
        ("scary", -0.5),
        ("dangerous", -0.6),
    ]
    .into_iter()
    .collect()
});

static INTENSIFIERS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    [
        ("very", 1.3),
        ("really", 1.2),
        ("extremely", 1.5),
        ("so", 1.2),
        ("too", 1.2),
        ("totally", 1.4),
        ("absolutely", 1.5),
        ("quite", 1.1),
    ]
    .into_iter()
    .collect()
});

static NEGATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "not", "no", "never", "nothing", "isn't", "wasn't", "don't", "doesn't", "didn't", "can't",
        "won't", "aren't",
    ]
    .into_iter()
    .collect()
});

static EMOTICONS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    [
        (":)", 0.5),
        (":-)", 0.5),
        (":d", 0.8),
        ("<3", 0.6),
        (":(", -0.75),
        (":-(", -0.75),
        (":'(", -0.8),
    ]
    .into_iter()
    .collect()
});

/// Negation multiplier: "not good" is mildly negative, not the mirror of "good".
const NEGATION_FACTOR: f64 = -0.5;

/// Rule-based English polarity: the mean polarity of every sentiment-bearing
/// word, adjusted by a preceding intensifier or negation.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconPolarityScorer;

impl PolarityScorer for LexiconPolarityScorer {
    fn polarity(&self, text: &str) -> Result<f64> {
        let lower = text.to_lowercase();
        let mut assessments: Vec<f64> = Vec::new();

        for raw in lower.split_whitespace() {
            if let Some(&value) = EMOTICONS.get(raw) {
                assessments.push(value);
            }
        }

        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|w| !w.is_empty())
            .collect();

        for (i, word) in words.iter().enumerate() {
            let Some(&base) = POLARITY.get(*word) else {
                continue;
            };
            let mut value = base;

            if i > 0 {
                if let Some(&boost) = INTENSIFIERS.get(words[i - 1]) {
                    value = (value * boost).clamp(-1.0, 1.0);
                }
            }

            let negated = words[i.saturating_sub(2)..i]
                .iter()
                .any(|w| NEGATIONS.contains(*w));
            if negated {
                value *= NEGATION_FACTOR;
            }

            assessments.push(value);
        }

        if assessments.is_empty() {
            return Ok(0.0);
        }
        let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
        Ok(mean.clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f64 {
        LexiconPolarityScorer.polarity(text).unwrap()
    }

    #[test]
    fn unknown_words_are_zero() {
        assert_eq!(score("pemerintah rakyat"), 0.0);
        assert_eq!(score(""), 0.0);
    }

    #[test]
    fn positive_and_negative_words() {
        assert!(score("this is a great policy") > 0.1);
        assert!(score("what a terrible decision") < -0.1);
    }

    #[test]
    fn intensifier_strengthens() {
        assert!(score("very good") > score("good"));
    }

    #[test]
    fn negation_flips_and_dampens() {
        let s = score("not good");
        assert!(s < 0.0);
        assert!(s > -0.7);
    }

    #[test]
    fn mean_of_assessments() {
        // (0.7 + -0.7) / 2
        assert!(score("good and bad").abs() < 1e-9);
    }

    #[test]
    fn emoticons_count() {
        assert!(score("hari ini :)") > 0.1);
        assert!(score("hari ini :(") < -0.1);
    }

    #[test]
    fn result_is_bounded() {
        let s = score("absolutely excellent perfect best awesome");
        assert!(s <= 1.0 && s >= -1.0);
    }
}
