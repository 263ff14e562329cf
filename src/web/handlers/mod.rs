// One module per endpoint.

pub mod sentiment;
pub mod topics;
pub mod wordcloud;
