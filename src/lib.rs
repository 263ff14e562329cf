// topicscope: word clouds and sentiment summaries over topic-model snapshots.
//
// This is the library root. Each module corresponds to one stage of the
// snapshot -> text -> signal pipeline, plus the HTTP surface in front of it.

pub mod config;
pub mod mlflow;
pub mod output;
pub mod sentiment;
pub mod snapshot;
pub mod text;
pub mod web;
pub mod wordcloud;
