// Unit tests for snapshot parsing and the representative-docs decoder.

use topicscope::snapshot::docs::parse_doc_list;
use topicscope::snapshot::Snapshot;

const FIXTURE: &str = include_str!("fixtures/topic_info.csv");

#[test]
fn fixture_rows_parse() {
    let snap = Snapshot::parse(FIXTURE).unwrap();
    assert_eq!(snap.rows.len(), 5);
    assert_eq!(snap.records.len(), 5);

    let ids: Vec<i64> = snap.topics().map(|t| t.topic_id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[test]
fn broken_doc_list_empties_only_that_topic() {
    let snap = Snapshot::parse(FIXTURE).unwrap();
    let broken = snap.rows.iter().find(|r| r.topic_id == 3).unwrap();
    assert!(broken.representative_docs.is_empty());

    let healthy = snap.rows.iter().find(|r| r.topic_id == 1).unwrap();
    assert_eq!(healthy.representative_docs.len(), 4);
}

#[test]
fn double_quoted_docs_decode() {
    let snap = Snapshot::parse(FIXTURE).unwrap();
    let topic0 = snap.rows.iter().find(|r| r.topic_id == 0).unwrap();
    assert_eq!(
        topic0.representative_docs[2],
        "beras murah? kecewa sama harga"
    );
}

#[test]
fn outlier_documents_are_not_analysis_documents() {
    let snap = Snapshot::parse(FIXTURE).unwrap();
    assert!(snap.documents().all(|d| !d.contains("outlierword")));
    assert_eq!(snap.documents().count(), 3 + 4 + 2);
}

#[test]
fn records_pass_through_every_column() {
    let snap = Snapshot::parse(FIXTURE).unwrap();
    let outlier = &snap.records[0];
    assert_eq!(outlier["Topic"], -1);
    assert_eq!(outlier["Count"], 120);
    assert_eq!(outlier["Name"], "-1_yang_dan_di");
    assert_eq!(outlier["Representation"], "['yang', 'dan']");
}

#[test]
fn decoder_is_strict() {
    assert!(parse_doc_list("['ok']").is_ok());
    assert!(parse_doc_list("['ok'] + ['more']").is_err());
    assert!(parse_doc_list("('tuple',)").is_err());
    assert!(parse_doc_list("nan").is_err());
}

#[test]
fn row_wider_than_header_is_an_error() {
    let csv = "Topic,Name,Count,Representative_Docs\n0,a,1,[],extra\n";
    assert!(Snapshot::parse(csv).is_err());
}

#[test]
fn row_missing_its_docs_cell_is_an_empty_topic() {
    let csv = "Topic,Name,Count,Representative_Docs\n0,a,3,\"['harga beras naik']\"\n1,b,2\n";
    let snap = Snapshot::parse(csv).unwrap();
    let docs: Vec<usize> = snap.topics().map(|t| t.representative_docs.len()).collect();
    assert_eq!(docs, vec![1, 0]);
}
