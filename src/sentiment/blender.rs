// Sentiment blending — lexicon first, polarity fallback second.
//
// This is a priority chain, not an average: a decisive lexicon score wins
// outright and the fallback is only consulted when the lexicon found
// nothing (or the hits cancelled out).

use tracing::debug;

use super::lexicon::score_indonesian;
use super::polarity::{LexiconPolarityScorer, PolarityScorer};
use super::{DocumentSentiment, LabelDistribution, SentimentLabel, TopicSentiment};
use crate::text::cleaner::strip_social_noise;

/// Lexicon scores at or below this magnitude defer to the fallback.
pub const LEXICON_MIN_SCORE: f64 = 0.01;

/// Fallback polarity beyond +/- this threshold is labeled positive/negative.
pub const POLARITY_THRESHOLD: f64 = 0.1;

/// Combines the Indonesian lexicon with a generic [`PolarityScorer`].
pub struct SentimentBlender<P = LexiconPolarityScorer> {
    fallback: P,
}

impl Default for SentimentBlender<LexiconPolarityScorer> {
    fn default() -> Self {
        Self::new(LexiconPolarityScorer)
    }
}

impl<P: PolarityScorer> SentimentBlender<P> {
    pub fn new(fallback: P) -> Self {
        Self { fallback }
    }

    /// Score one raw document.
    pub fn score_document(&self, raw: &str) -> DocumentSentiment {
        let lexicon = score_indonesian(raw);
        if lexicon.score.abs() > LEXICON_MIN_SCORE {
            return lexicon;
        }
        self.fallback_sentiment(&strip_social_noise(raw))
    }

    /// Run the fallback scorer and map its polarity to a label.
    ///
    /// Scorer errors and non-finite output become neutral/0.0.
    pub fn fallback_sentiment(&self, text: &str) -> DocumentSentiment {
        let polarity = match self.fallback.polarity(text) {
            Ok(p) if p.is_finite() => p.clamp(-1.0, 1.0),
            Ok(p) => {
                debug!(polarity = p, "Polarity scorer returned a non-finite value");
                return DocumentSentiment::neutral();
            }
            Err(e) => {
                debug!(error = %e, "Polarity scorer failed; treating document as neutral");
                return DocumentSentiment::neutral();
            }
        };

        let label = if polarity > POLARITY_THRESHOLD {
            SentimentLabel::Positive
        } else if polarity < -POLARITY_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };

        DocumentSentiment {
            label,
            score: polarity,
        }
    }

    /// Majority label, mean score and label counts over a topic's documents.
    pub fn summarize_topic<S: AsRef<str>>(&self, docs: &[S]) -> TopicSentiment {
        if docs.is_empty() {
            return TopicSentiment::empty();
        }

        let mut distribution = LabelDistribution::default();
        let mut total = 0.0;
        for doc in docs {
            let sentiment = self.score_document(doc.as_ref());
            distribution.record(sentiment.label);
            total += sentiment.score;
        }

        TopicSentiment {
            label: distribution.majority(),
            mean_score: total / docs.len() as f64,
            distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedScorer(f64);

    impl PolarityScorer for FixedScorer {
        fn polarity(&self, _text: &str) -> anyhow::Result<f64> {
            Ok(self.0)
        }
    }

    struct FailingScorer;

    impl PolarityScorer for FailingScorer {
        fn polarity(&self, _text: &str) -> anyhow::Result<f64> {
            anyhow::bail!("scorer exploded")
        }
    }

    #[test]
    fn lexicon_takes_priority() {
        let blender = SentimentBlender::new(FixedScorer(-0.9));
        let s = blender.score_document("programnya bagus");
        assert_eq!(s.label, SentimentLabel::Positive);
        assert!((s.score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn fallback_used_when_lexicon_is_silent() {
        let blender = SentimentBlender::new(FixedScorer(-0.4));
        let s = blender.score_document("no lexicon words here");
        assert_eq!(s.label, SentimentLabel::Negative);
        assert!((s.score + 0.4).abs() < 1e-9);
    }

    #[test]
    fn weak_fallback_is_neutral_but_keeps_score() {
        let blender = SentimentBlender::new(FixedScorer(0.05));
        let s = blender.score_document("biasa saja");
        assert_eq!(s.label, SentimentLabel::Neutral);
        assert!((s.score - 0.05).abs() < 1e-9);
    }

    #[test]
    fn fallback_errors_become_neutral() {
        let blender = SentimentBlender::new(FailingScorer);
        assert_eq!(blender.score_document("anything"), DocumentSentiment::neutral());
    }

    #[test]
    fn non_finite_polarity_is_neutral() {
        let blender = SentimentBlender::new(FixedScorer(f64::NAN));
        assert_eq!(blender.score_document("x"), DocumentSentiment::neutral());
    }

    #[test]
    fn empty_topic() {
        let blender = SentimentBlender::default();
        let empty: [&str; 0] = [];
        assert_eq!(blender.summarize_topic(&empty), TopicSentiment::empty());
    }

    #[test]
    fn summarize_counts_and_means() {
        let blender = SentimentBlender::new(FixedScorer(0.0));
        let t = blender.summarize_topic(&["bagus bagus bagus", "jelek"]);
        assert_eq!(t.label, SentimentLabel::Positive);
        assert_eq!(t.distribution.total(), 2);
        assert_eq!(t.distribution.positive, 1);
        assert_eq!(t.distribution.negative, 1);
        // (1.0 + -1.0) / 2
        assert!(t.mean_score.abs() < 1e-9);
    }
}
