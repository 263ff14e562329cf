// Word-frequency aggregation for the word cloud.
//
// Every representative document of every clustered topic is cleaned,
// tokenized and filtered; surviving tokens are counted across the whole
// snapshot. Equal counts keep the order in which the words were first seen.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::text::cleaner::clean;
use crate::text::stopwords::is_content;

/// How many words the cloud keeps.
pub const MAX_WORDS: usize = 200;

/// A single (word, frequency) pair as the frontend word cloud expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub text: String,
    pub value: u64,
}

/// Count content words across `docs` and return the top [`MAX_WORDS`].
pub fn build_word_cloud<'a, I>(docs: I) -> Vec<WordFrequency>
where
    I: IntoIterator<Item = &'a str>,
{
    build_word_cloud_limited(docs, MAX_WORDS)
}

/// Like [`build_word_cloud`] with an explicit cap.
pub fn build_word_cloud_limited<'a, I>(docs: I, limit: usize) -> Vec<WordFrequency>
where
    I: IntoIterator<Item = &'a str>,
{
    // token -> index into `entries`, so first-seen order survives
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<WordFrequency> = Vec::new();

    for doc in docs {
        let cleaned = clean(doc);
        for token in cleaned.split_whitespace().filter(|t| is_content(t)) {
            match index.get(token) {
                Some(&i) => entries[i].value += 1,
                None => {
                    index.insert(token.to_string(), entries.len());
                    entries.push(WordFrequency {
                        text: token.to_string(),
                        value: 1,
                    });
                }
            }
        }
    }

    // sort_by is stable: ties stay in discovery order
    entries.sort_by(|a, b| b.value.cmp(&a.value));
    entries.truncate(limit);
    entries
}
