// MLflow tracking server — source of the topic snapshots.
//
// The topic model logs one `topic_info_<run_id>.csv` artifact per training
// run. Requests always read the newest run of the configured experiment.

pub mod client;
