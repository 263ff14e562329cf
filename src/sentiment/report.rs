// Per-snapshot sentiment report — one summary per clustered topic.

use serde::{Deserialize, Serialize};

use super::blender::SentimentBlender;
use super::polarity::PolarityScorer;
use super::{LabelDistribution, SentimentLabel};
use crate::snapshot::{Snapshot, TopicRow};

/// How many representative documents a summary carries as examples.
pub const SAMPLE_DOCS: usize = 3;

/// Sentiment summary for one topic, in the shape the dashboard consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSentimentSummary {
    #[serde(rename = "topic")]
    pub topic_id: i64,
    pub topic_name: String,
    pub count: u64,
    #[serde(rename = "sentiment")]
    pub majority_label: SentimentLabel,
    /// Mean document score, rounded to three decimals.
    #[serde(rename = "sentiment_score")]
    pub mean_score: f64,
    #[serde(rename = "sentiment_distribution")]
    pub label_distribution: LabelDistribution,
    pub sample_docs: Vec<String>,
}

/// Body of the `/sentiment` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    pub total_topics: usize,
    /// Most discussed topics first.
    pub topics: Vec<TopicSentimentSummary>,
}

/// Round to three decimal places for presentation.
///
/// Rounds the exact binary value, with exact halves going to the even
/// neighbour, so `0.0625` becomes `0.062` while `0.0025` (stored slightly
/// above the half) becomes `0.003`.
pub fn round3(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scaled = value * 1000.0;
    // exact error of the product; it is representable, so one fma recovers it
    let error = value.mul_add(1000.0, -scaled);
    let rounded = if error != 0.0 && (scaled - scaled.trunc()).abs() == 0.5 {
        // the product was rounded onto a half; the true value lies to one side
        if error > 0.0 {
            scaled.ceil()
        } else {
            scaled.floor()
        }
    } else {
        scaled.round_ties_even()
    };
    rounded / 1000.0
}

/// Summarize one topic row.
pub fn summarize_row<P: PolarityScorer>(
    row: &TopicRow,
    blender: &SentimentBlender<P>,
) -> TopicSentimentSummary {
    let sentiment = blender.summarize_topic(&row.representative_docs);
    TopicSentimentSummary {
        topic_id: row.topic_id,
        topic_name: row.name.clone(),
        count: row.count,
        majority_label: sentiment.label,
        mean_score: round3(sentiment.mean_score),
        label_distribution: sentiment.distribution,
        sample_docs: row
            .representative_docs
            .iter()
            .take(SAMPLE_DOCS)
            .cloned()
            .collect(),
    }
}

/// Build the sentiment report for every clustered topic of a snapshot.
pub fn build_sentiment_report<P: PolarityScorer>(
    snapshot: &Snapshot,
    blender: &SentimentBlender<P>,
) -> SentimentReport {
    let mut topics: Vec<TopicSentimentSummary> = snapshot
        .topics()
        .map(|row| summarize_row(row, blender))
        .collect();

    // stable: equal counts keep file order
    topics.sort_by(|a, b| b.count.cmp(&a.count));

    SentimentReport {
        total_topics: topics.len(),
        topics,
    }
}
