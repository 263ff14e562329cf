// Unit tests for the MLflow REST types and artifact naming.
//
// Serde shapes only — no network access.

use topicscope::mlflow::client::{
    artifact_path, GetExperimentResponse, MlflowClient, SearchRunsRequest, SearchRunsResponse,
};

#[test]
fn artifact_path_appends_run_id() {
    assert_eq!(artifact_path("topic_info_", "abc123"), "topic_info_abc123.csv");
}

#[test]
fn client_uses_configured_prefix() {
    let client = MlflowClient::new("http://mlflow:5000/", "exp", "topics_").unwrap();
    assert_eq!(client.artifact_path("r1"), "topics_r1.csv");
}

#[test]
fn deserialize_experiment() {
    let json = r#"{"experiment": {"experiment_id": "7", "name": "bertopic-pemerintah",
        "artifact_location": "mlflow-artifacts:/7", "lifecycle_stage": "active"}}"#;
    let resp: GetExperimentResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.experiment.experiment_id, "7");
}

#[test]
fn deserialize_search_with_runs() {
    let json = r#"{"runs": [{"info": {"run_id": "f00d", "run_uuid": "f00d",
        "status": "FINISHED", "start_time": 1718000000000}, "data": {}}]}"#;
    let resp: SearchRunsResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.runs.len(), 1);
    assert_eq!(resp.runs[0].info.run_id, "f00d");
}

#[test]
fn deserialize_search_without_runs() {
    // MLflow omits `runs` entirely when nothing matches
    let resp: SearchRunsResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.runs.is_empty());
}

#[test]
fn search_request_orders_newest_first() {
    let body = SearchRunsRequest {
        experiment_ids: vec!["7".to_string()],
        order_by: vec!["attributes.start_time DESC".to_string()],
        max_results: 1,
    };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["experiment_ids"][0], "7");
    assert_eq!(json["order_by"][0], "attributes.start_time DESC");
    assert_eq!(json["max_results"], 1);
}
