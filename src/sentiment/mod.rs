// Sentiment scoring — Indonesian lexicon first, generic polarity as fallback.
//
// The lexicon scorer understands the Indonesian vocabulary that dominates
// the snapshots. When it finds nothing decisive, the blender falls back to
// a PolarityScorer, the swap-ready trait for English-oriented scoring.

pub mod blender;
pub mod lexicon;
pub mod polarity;
pub mod report;

use serde::{Deserialize, Serialize};

/// Sentiment class of a document or a topic.
///
/// Variant order is the tie-break order for majority votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// All labels in tie-break order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment of a single document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentSentiment {
    pub label: SentimentLabel,
    /// Signed strength; positive for positive, negative for negative.
    pub score: f64,
}

impl DocumentSentiment {
    pub fn neutral() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            score: 0.0,
        }
    }
}

/// How many documents of a topic landed in each class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDistribution {
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

impl LabelDistribution {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn get(&self, label: SentimentLabel) -> u32 {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> u32 {
        self.positive + self.negative + self.neutral
    }

    /// The most frequent label. Ties go to the earliest label in
    /// positive, negative, neutral order, so an all-zero distribution
    /// is positive; callers handle the empty case before voting.
    pub fn majority(&self) -> SentimentLabel {
        let mut best = SentimentLabel::Positive;
        for label in SentimentLabel::ALL {
            if self.get(label) > self.get(best) {
                best = label;
            }
        }
        best
    }
}

/// Aggregate sentiment for one topic's representative documents.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicSentiment {
    pub label: SentimentLabel,
    /// Unrounded mean of the per-document scores.
    pub mean_score: f64,
    pub distribution: LabelDistribution,
}

impl TopicSentiment {
    pub fn empty() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            mean_score: 0.0,
            distribution: LabelDistribution::default(),
        }
    }
}
