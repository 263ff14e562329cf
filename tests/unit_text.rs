// Unit tests for text cleaning, stopword filtering and the word cloud.
//
// Pure functions only — no network, no filesystem.

use topicscope::text::cleaner::{clean, tokens};
use topicscope::text::stopwords::{is_content, is_stopword};
use topicscope::wordcloud::{build_word_cloud, MAX_WORDS};

// ============================================================
// TextCleaner
// ============================================================

#[test]
fn noise_only_text_cleans_to_empty() {
    for raw in [
        "https://t.co/abc",
        "@someone",
        "#trending",
        "www.example.com @a #b http://x.y/z",
        "🔥🔥🔥 ✨",
    ] {
        assert!(clean(raw).trim().is_empty(), "{raw:?} -> {:?}", clean(raw));
    }
}

#[test]
fn cleaning_is_lowercase_and_single_spaced() {
    assert_eq!(clean("  PEMERINTAH\n\nBaru   Saja "), "pemerintah baru saja");
}

#[test]
fn mention_is_removed_before_punctuation_split() {
    // the handle must not leak through as a bare word
    assert_eq!(clean("kata @pak_menteri hari ini"), "kata hari ini");
}

#[test]
fn link_glued_to_a_word_drops_the_rest_of_the_token() {
    assert_eq!(clean("lihat:https://t.co/a sini"), "lihat sini");
}

#[test]
fn non_latin_letters_survive() {
    assert_eq!(tokens("Ünïcödé words"), vec!["ünïcödé", "words"]);
}

// ============================================================
// StopwordFilter
// ============================================================

#[test]
fn stopword_examples() {
    assert!(is_stopword("dan"));
    assert!(is_stopword("wkwk"));
    assert!(is_stopword("https co"));
    assert!(!is_stopword("pemerintah"));
}

#[test]
fn content_rules() {
    assert!(!is_content("dan"));
    assert!(is_content("pemerintah"));
    assert!(!is_content("rt"));
    assert!(!is_content("abc123"));
    assert!(!is_content("httpx"));
}

// ============================================================
// WordFrequencyAggregator
// ============================================================

#[test]
fn repeated_words_outrank_singletons() {
    let cloud = build_word_cloud([
        "bagus sekali pemerintah",
        "pemerintah bagus",
        "rakyat senang",
    ]);
    assert_eq!(cloud[0].value, 2);
    assert_eq!(cloud[1].value, 2);
    let top: Vec<&str> = cloud[..2].iter().map(|w| w.text.as_str()).collect();
    assert!(top.contains(&"pemerintah"));
    assert!(top.contains(&"bagus"));
    assert!(cloud[2..].iter().all(|w| w.value == 1));
}

#[test]
fn cloud_is_capped_at_two_hundred() {
    // 26 * 26 = 676 distinct alphabetic words
    let letters: Vec<char> = ('a'..='z').collect();
    let doc: String = letters
        .iter()
        .flat_map(|a| letters.iter().map(move |b| format!("kat{a}{b}")))
        .collect::<Vec<_>>()
        .join(" ");

    let cloud = build_word_cloud([doc.as_str()]);
    assert_eq!(cloud.len(), MAX_WORDS);
}

#[test]
fn counts_are_sorted_descending() {
    let cloud = build_word_cloud(["apel apel apel jeruk jeruk mangga", "jeruk jeruk"]);
    let values: Vec<u64> = cloud.iter().map(|w| w.value).collect();
    assert_eq!(values, vec![4, 3, 1]);
    assert_eq!(cloud[0].text, "jeruk");
}
