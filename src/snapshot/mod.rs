// Topic snapshot — the `topic_info` CSV artifact of one topic-model run.
//
// One row per topic. Rows are kept twice: as loosely typed JSON records for
// the pass-through `/topic-info` endpoint, and as `TopicRow`s with their
// representative documents decoded for the analysis endpoints.

pub mod docs;
pub mod source;

use anyhow::{bail, Context, Result};
use serde_json::{Map, Number, Value};
use tracing::{debug, warn};

use self::docs::parse_doc_list;

/// Topic id the topic model assigns to unclustered documents.
pub const OUTLIER_TOPIC: i64 = -1;

pub const TOPIC_COLUMN: &str = "Topic";
pub const NAME_COLUMN: &str = "Name";
pub const COUNT_COLUMN: &str = "Count";
pub const DOCS_COLUMN: &str = "Representative_Docs";

/// One topic of the snapshot with its documents decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicRow {
    pub topic_id: i64,
    pub name: String,
    pub count: u64,
    /// Empty when the source field could not be decoded.
    pub representative_docs: Vec<String>,
}

impl TopicRow {
    pub fn is_outlier(&self) -> bool {
        self.topic_id == OUTLIER_TOPIC
    }
}

/// A parsed snapshot artifact.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Every CSV row as a JSON object, keyed by column header.
    pub records: Vec<Map<String, Value>>,
    /// Every CSV row in file order, outlier included.
    pub rows: Vec<TopicRow>,
}

impl Snapshot {
    /// Parse the CSV text of a `topic_info` artifact.
    ///
    /// Fails only on structural problems (missing columns, rows wider than
    /// the header, non-integer `Topic`/`Count`). Short rows read their
    /// missing trailing cells as empty, and an undecodable document list just
    /// empties that topic.
    pub fn parse(csv_text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(csv_text.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .context("Failed to read snapshot CSV header")?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if h.trim().is_empty() {
                    format!("Unnamed: {i}")
                } else {
                    h.to_string()
                }
            })
            .collect();

        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .with_context(|| format!("Snapshot CSV has no '{name}' column"))
        };
        let topic_col = column(TOPIC_COLUMN)?;
        let name_col = column(NAME_COLUMN)?;
        let count_col = column(COUNT_COLUMN)?;
        let docs_col = column(DOCS_COLUMN)?;

        let raw_rows: Vec<csv::StringRecord> = reader
            .records()
            .collect::<std::result::Result<_, _>>()
            .context("Malformed snapshot CSV")?;

        let mut rows = Vec::with_capacity(raw_rows.len());
        for (line, record) in raw_rows.iter().enumerate() {
            let field = move |i: usize| record.get(i).unwrap_or("").trim();
            let row_no = line + 1;
            if record.len() > headers.len() {
                bail!(
                    "Row {row_no}: expected {} fields, found {}",
                    headers.len(),
                    record.len()
                );
            }

            let topic_id: i64 = field(topic_col).parse().with_context(|| {
                format!("Row {row_no}: '{}' is not an integer topic id", field(topic_col))
            })?;
            let count: u64 = field(count_col).parse().with_context(|| {
                format!("Row {row_no}: '{}' is not a valid count", field(count_col))
            })?;

            let representative_docs = match parse_doc_list(field(docs_col)) {
                Ok(docs) => docs,
                Err(e) => {
                    warn!(
                        topic = topic_id,
                        error = %e,
                        "Unreadable representative docs; treating topic as empty"
                    );
                    Vec::new()
                }
            };

            rows.push(TopicRow {
                topic_id,
                name: record.get(name_col).unwrap_or("").to_string(),
                count,
                representative_docs,
            });
        }

        let records = to_records(&headers, &raw_rows);
        debug!(rows = rows.len(), columns = headers.len(), "Parsed topic snapshot");

        Ok(Self { records, rows })
    }

    /// Clustered topics only; the outlier row is skipped.
    pub fn topics(&self) -> impl Iterator<Item = &TopicRow> {
        self.rows.iter().filter(|row| !row.is_outlier())
    }

    /// Every representative document of every clustered topic, in file order.
    pub fn documents(&self) -> impl Iterator<Item = &str> {
        self.topics()
            .flat_map(|row| row.representative_docs.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ColumnKind {
    Integer,
    Float,
    Text,
}

/// Type a column by its non-empty cells: all integers, all numbers, or text.
fn column_kind<'a>(cells: impl Iterator<Item = &'a str>) -> ColumnKind {
    let mut kind = ColumnKind::Integer;
    for cell in cells.map(str::trim).filter(|c| !c.is_empty()) {
        if kind == ColumnKind::Integer && cell.parse::<i64>().is_err() {
            kind = ColumnKind::Float;
        }
        if kind == ColumnKind::Float && cell.parse::<f64>().is_err() {
            return ColumnKind::Text;
        }
    }
    kind
}

fn cell_value(cell: &str, kind: ColumnKind) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    match kind {
        ColumnKind::Integer => trimmed.parse::<i64>().map(Value::from).unwrap_or(Value::Null),
        ColumnKind::Float => trimmed
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ColumnKind::Text => Value::String(cell.to_string()),
    }
}

fn to_records(headers: &[String], rows: &[csv::StringRecord]) -> Vec<Map<String, Value>> {
    let kinds: Vec<ColumnKind> = (0..headers.len())
        .map(|i| column_kind(rows.iter().map(|r| r.get(i).unwrap_or(""))))
        .collect();

    rows.iter()
        .map(|row| {
            headers
                .iter()
                .zip(&kinds)
                .enumerate()
                .map(|(i, (header, kind))| {
                    (header.clone(), cell_value(row.get(i).unwrap_or(""), *kind))
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Topic,Count,Name,Representative_Docs
-1,50,-1_yang_dan,\"['outlier bagus sekali']\"
0,12,0_harga_beras,\"['harga beras naik', \"\"beras mahal, rakyat susah\"\"]\"
1,7,1_pemilu,not a list
";

    #[test]
    fn parses_rows_and_docs() {
        let snap = Snapshot::parse(CSV).unwrap();
        assert_eq!(snap.rows.len(), 3);
        assert!(snap.rows[0].is_outlier());
        assert_eq!(snap.rows[1].name, "0_harga_beras");
        assert_eq!(snap.rows[1].count, 12);
        assert_eq!(
            snap.rows[1].representative_docs,
            vec!["harga beras naik", "beras mahal, rakyat susah"]
        );
        assert!(snap.rows[2].representative_docs.is_empty());
    }

    #[test]
    fn topics_skip_outlier() {
        let snap = Snapshot::parse(CSV).unwrap();
        let ids: Vec<i64> = snap.topics().map(|t| t.topic_id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(snap.documents().count(), 2);
    }

    #[test]
    fn records_are_typed_per_column() {
        let snap = Snapshot::parse(CSV).unwrap();
        let rec = &snap.records[1];
        assert_eq!(rec["Topic"], Value::from(0));
        assert_eq!(rec["Count"], Value::from(12));
        assert_eq!(rec["Name"], Value::from("0_harga_beras"));
    }

    #[test]
    fn unnamed_and_empty_cells() {
        let csv = ",Topic,Name,Count,Representative_Docs,Score\n0,0,a,1,[],0.5\n1,1,b,2,[],\n";
        let snap = Snapshot::parse(csv).unwrap();
        assert_eq!(snap.records[0]["Unnamed: 0"], Value::from(0));
        assert_eq!(snap.records[0]["Score"], Value::from(0.5));
        assert_eq!(snap.records[1]["Score"], Value::Null);
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = Snapshot::parse("Topic,Name\n0,a\n").unwrap_err();
        assert!(err.to_string().contains("Count"));
    }

    #[test]
    fn bad_topic_id_is_an_error() {
        assert!(Snapshot::parse("Topic,Name,Count,Representative_Docs\nx,a,1,[]\n").is_err());
    }

    #[test]
    fn short_rows_read_missing_cells_as_empty() {
        let csv = "Topic,Count,Name,Representative_Docs,Score\n\
                   0,4,0_a,\"['harga naik']\",0.5\n\
                   1,2,1_b\n";
        let snap = Snapshot::parse(csv).unwrap();
        assert_eq!(snap.rows.len(), 2);
        assert_eq!(snap.rows[1].name, "1_b");
        assert!(snap.rows[1].representative_docs.is_empty());
        assert_eq!(snap.records[1]["Representative_Docs"], Value::Null);
        assert_eq!(snap.records[1]["Score"], Value::Null);
        assert_eq!(snap.records[0]["Score"], Value::from(0.5));
    }

    #[test]
    fn wide_rows_are_an_error() {
        let err = Snapshot::parse("Topic,Count,Name,Representative_Docs\n0,1,a,[],extra\n")
            .unwrap_err();
        assert!(err.to_string().contains("expected 4 fields"));
    }

    #[test]
    fn column_kind_inference() {
        assert_eq!(column_kind(["1", "", "-3"].into_iter()), ColumnKind::Integer);
        assert_eq!(column_kind(["1", "2.5"].into_iter()), ColumnKind::Float);
        assert_eq!(column_kind(["1", "abc"].into_iter()), ColumnKind::Text);
    }
}
