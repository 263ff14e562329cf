// Indonesian lexicon scoring.
//
// Counts hits against small curated positive and negative word lists. Two
// entries are phrases ("terima kasih", "luar biasa"); they match when the
// two words appear next to each other after cleaning.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::{DocumentSentiment, SentimentLabel};
use crate::text::cleaner::tokens;

const POSITIVE_WORDS: &[&str] = &[
    "bagus", "baik", "hebat", "sukses", "senang", "mantap", "keren", "maju", "berkembang",
    "meningkat", "optimal", "efektif", "efisien", "terima kasih", "dukung", "mendukung", "setuju",
    "suka", "cinta", "luar biasa", "cemerlang", "gemilang", "jaya", "menang", "prestasi",
];

const NEGATIVE_WORDS: &[&str] = &[
    "buruk", "jelek", "gagal", "sedih", "kecewa", "marah", "benci", "mundur", "menurun", "rusak",
    "korup", "korupsi", "salah", "bodoh", "goblok", "tolol", "bangsat", "asu", "brengsek",
    "hancur", "miskin", "susah", "sulit", "masalah", "kritik", "protes", "demo",
];

static POSITIVE: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| POSITIVE_WORDS.iter().copied().collect());
static NEGATIVE: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NEGATIVE_WORDS.iter().copied().collect());

/// Raw lexicon hit counts for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexiconHits {
    pub positive: usize,
    pub negative: usize,
    pub tokens: usize,
}

/// Count positive and negative lexicon hits in `text`.
pub fn count_hits(text: &str) -> LexiconHits {
    let words = tokens(text);
    let mut hits = LexiconHits {
        tokens: words.len(),
        ..Default::default()
    };

    for (i, word) in words.iter().enumerate() {
        tally(&mut hits, word);
        if let Some(next) = words.get(i + 1) {
            tally(&mut hits, &format!("{word} {next}"));
        }
    }
    hits
}

fn tally(hits: &mut LexiconHits, term: &str) {
    if POSITIVE.contains(term) {
        hits.positive += 1;
    }
    if NEGATIVE.contains(term) {
        hits.negative += 1;
    }
}

/// Score a document against the Indonesian lexicon.
///
/// The score is the net hit count over the token count, so it is signed
/// like the label and zero for neutral.
pub fn score_indonesian(text: &str) -> DocumentSentiment {
    let hits = count_hits(text);
    let denom = hits.tokens.max(1) as f64;

    if hits.positive > hits.negative {
        DocumentSentiment {
            label: SentimentLabel::Positive,
            score: (hits.positive - hits.negative) as f64 / denom,
        }
    } else if hits.negative > hits.positive {
        DocumentSentiment {
            label: SentimentLabel::Negative,
            score: -((hits.negative - hits.positive) as f64) / denom,
        }
    } else {
        DocumentSentiment::neutral()
    }
}
