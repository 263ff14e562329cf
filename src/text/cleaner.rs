// Social-media text cleaning.
//
// Representative documents are raw tweets: links, @mentions, #hashtags,
// emoji and punctuation all get in the way of counting words. Cleaning
// runs the removals in a fixed order so mentions and hashtags are gone
// before punctuation stripping could split them into bare words.

use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+|https\S+").expect("valid URL pattern"));
static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").expect("valid mention pattern"));
static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("valid hashtag pattern"));
/// Supplementary planes (emoji, pictographs) plus the BMP misc-symbol and dingbat blocks.
static SYMBOL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{10000}-\x{10FFFF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}]")
        .expect("valid symbol pattern")
});
static PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid punctuation pattern"));

/// Clean a raw document into lowercase, single-spaced words.
///
/// Never fails: empty or all-noise input comes back as an empty string.
pub fn clean(raw: &str) -> String {
    let text = URL_RE.replace_all(raw, "");
    let text = MENTION_RE.replace_all(&text, "");
    let text = HASHTAG_RE.replace_all(&text, "");
    let text = SYMBOL_RE.replace_all(&text, "");
    let text = PUNCT_RE.replace_all(&text, " ");

    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Light cleaning: only links, mentions and hashtags are dropped.
///
/// Punctuation and emoji survive, which the polarity fallback uses as
/// signal (e.g. "great!" or ":(").
pub fn strip_social_noise(raw: &str) -> String {
    let text = URL_RE.replace_all(raw, "");
    let text = MENTION_RE.replace_all(&text, "");
    let text = HASHTAG_RE.replace_all(&text, "");

    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Clean a document and split it into tokens.
pub fn tokens(raw: &str) -> Vec<String> {
    clean(raw).split_whitespace().map(str::to_string).collect()
}
