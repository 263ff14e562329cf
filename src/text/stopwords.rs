// Stopword filtering for word-cloud tokens.
//
// The lexicon mixes Indonesian function words and informal spellings with
// common English filler and web noise, since the topic snapshots are built
// from code-switched Indonesian social-media posts.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

const STOPWORDS: &[&str] = &[
    // web / URL fragments
    "https", "co", "http", "www", "rt", "url", "link", "https co",
    // conjunctions
    "yang", "dan", "atau", "tapi", "tetapi", "namun", "sedangkan", "bahwa", "jika", "kalau",
    "bila", "apabila", "maka", "lalu", "kemudian", "serta", "agar", "supaya", "biar", "karena",
    "sebab", "oleh", "dengan", "tanpa", "untuk", "bagi", "kepada", "terhadap",
    // prepositions
    "di", "ke", "dari", "pada", "dalam", "atas", "bawah", "antara",
    // pronouns
    "ini", "itu", "ia", "dia", "mereka", "kita", "kami", "anda", "saya", "aku", "kamu", "kalian",
    "beliau", "nya", "ku", "mu",
    // articles and determiners
    "sang", "si", "para", "kaum", "suatu", "sebuah", "seorang",
    // modals and auxiliaries
    "adalah", "ialah", "yaitu", "yakni", "akan", "telah", "sudah", "sedang", "masih", "pernah",
    "belum", "bisa", "dapat", "harus", "boleh", "mau", "ingin", "hendak",
    // quantifiers and negation
    "ada", "tidak", "tak", "bukan", "semua", "seluruh", "setiap", "tiap", "banyak", "sedikit",
    "beberapa", "lain", "lainnya",
    // informal spellings
    "yg", "dgn", "dg", "tdk", "tp", "jg", "juga", "ya", "yah", "gak", "ga", "kak", "aja", "udah",
    "sih", "kok", "deh", "dong", "lho", "nih", "weh", "wes", "was", "lagi", "pula", "kayak",
    "gitu", "gini", "gimana", "gmn", "kenapa", "knp", "emang", "memang",
    // question words
    "apa", "siapa", "kapan", "dimana", "mengapa", "bagaimana", "berapa",
    // particles
    "an", "kan", "pun", "lah", "kah", "tah", "per", "se",
    // generic verbs
    "jadi", "buat", "bikin", "kasih", "beri", "ambil",
    // time and frequency
    "kini", "sekarang", "nanti", "besok", "kemarin", "dulu", "selalu", "sering", "kadang",
    "jarang",
    // intensifiers
    "sangat", "sekali", "amat", "terlalu", "lebih", "paling", "agak", "cukup", "kurang", "hampir",
    "nyaris",
    // social-media slang and profanity
    "wkwk", "wkwkwk", "haha", "hehe", "anjir", "anjay", "wow", "cie", "asu", "bangsat",
    "brengsek",
    // English filler
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "her", "one", "our", "out",
    "day", "get", "has", "him", "his", "how", "man", "new", "now", "old", "see", "way", "who",
    "boy", "did", "its", "let", "put", "say", "she", "too", "use",
    // more informal fillers
    "klo", "kalo", "kl", "sm", "sama", "terus", "trus", "tu", "nah", "noh", "dah", "banget",
    "bgt", "bener", "org", "orang", "ogut", "gua", "gue", "tau", "tahu", "mah", "tuh", "sich",
    "kali", "kek", "macem", "macam", "begitu", "begini",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

// letters by general category; circled letters and letter numbers don't count
static LETTERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}+$").expect("valid letters pattern"));

/// Minimum token length, in characters, for a word to count.
pub const MIN_TOKEN_CHARS: usize = 3;

/// Whether `word` is in the stopword lexicon.
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}

/// Whether a cleaned token is a content word worth counting.
///
/// Rejects stopwords, tokens shorter than three characters, anything with
/// a digit or other non-letter, and leftover link fragments.
pub fn is_content(token: &str) -> bool {
    !is_stopword(token)
        && token.chars().count() >= MIN_TOKEN_CHARS
        && LETTERS_RE.is_match(token)
        && !token.starts_with("http")
}
