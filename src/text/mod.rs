// Text normalization — cleaning noisy social-media posts and deciding which
// tokens carry content.

pub mod cleaner;
pub mod stopwords;
