//! Integration tests: CSV reports and JSON export of generated series.

use std::collections::HashMap;

use rnd_io::{
    CsvConfig, IoError, ResultFields, SUMMARY_COLUMNS, SeriesSummary, TextEncoding,
    write_results, write_series_json,
};
use rnd_provider::{ConfigKey, ModelSpecification, RandomProvider};

struct Row(HashMap<&'static str, String>);

impl ResultFields for Row {
    fn field(&self, column: &str) -> Option<String> {
        self.0.get(column).cloned()
    }
}

fn row(pairs: &[(&'static str, &str)]) -> Row {
    Row(pairs.iter().map(|(k, v)| (*k, (*v).to_string())).collect())
}

#[test]
fn header_and_rows_in_order() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("report.csv");

    let rows = vec![
        ("b".to_string(), row(&[("x", "1"), ("y", "2")])),
        ("a".to_string(), row(&[("x", "3"), ("y", "4")])),
    ];
    write_results(&path, &rows, &["y", "x"], &CsvConfig::default()).expect("write succeeds");

    let text = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(text, "name,y,x\nb,2,1\na,4,3\n");
}

#[test]
fn latin1_is_the_default_encoding() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("latin1.csv");

    let rows = vec![("Zürich €".to_string(), row(&[("v", "1")]))];
    write_results(&path, &rows, &["v"], &CsvConfig::default()).expect("write succeeds");

    let bytes = std::fs::read(&path).expect("read back");
    assert_eq!(bytes, b"name,v\nZ\xFCrich ?,1\n".to_vec());
}

#[test]
fn utf8_encoding_and_delimiter() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("utf8.csv");

    let rows = vec![("Zürich".to_string(), row(&[("v", "1,5")]))];
    let config = CsvConfig::default()
        .with_delimiter(b';')
        .with_encoding(TextEncoding::Utf8);
    write_results(&path, &rows, &["v"], &config).expect("write succeeds");

    let text = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(text, "name;v\nZürich;1,5\n");
}

#[test]
fn failed_export_leaves_destination_untouched() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("keep.csv");
    std::fs::write(&path, "previous\n").expect("seed file");

    let rows = vec![
        ("ok".to_string(), row(&[("v", "1")])),
        ("bad".to_string(), row(&[])),
    ];
    let err = write_results(&path, &rows, &["v"], &CsvConfig::default()).unwrap_err();
    assert!(matches!(err, IoError::UnknownColumn { ref row, .. } if row == "bad"));

    assert_eq!(std::fs::read_to_string(&path).expect("read back"), "previous\n");
    let leftovers = std::fs::read_dir(dir.path()).expect("list dir").count();
    assert_eq!(leftovers, 1);
}

#[test]
fn missing_directory_is_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("no/such/dir/out.csv");
    let rows: Vec<(String, Row)> = Vec::new();
    let err = write_results(&path, &rows, &[], &CsvConfig::default()).unwrap_err();
    assert!(matches!(err, IoError::Io { .. }));
}

#[test]
fn summary_report_of_generated_batch() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("summary.csv");

    let spec = ModelSpecification::builder()
        .count(4)
        .length(36)
        .seed(3)
        .build()
        .expect("valid spec");
    let series = RandomProvider::new()
        .resolve_all(&ConfigKey::encode(&spec))
        .expect("resolves");
    let rows: Vec<(String, SeriesSummary)> = series
        .iter()
        .map(|s| (s.name.clone(), SeriesSummary::from_series(s)))
        .collect();

    write_results(&path, &rows, &SUMMARY_COLUMNS, &CsvConfig::default()).expect("write succeeds");

    let text = std::fs::read_to_string(&path).expect("read back");
    assert!(text.lines().nth(1).expect("first row").starts_with("\"(0,1,1)(0,1,1)12 - 0\",12,"));

    let mut reader = csv::Reader::from_path(&path).expect("open report");
    let header = reader.headers().expect("header").clone();
    assert_eq!(
        header.iter().collect::<Vec<_>>(),
        ["name", "frequency", "start", "length", "mean", "sd", "min", "max"]
    );
    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("parse rows");
    assert_eq!(records.len(), 4);
    for (record, s) in records.iter().zip(&series) {
        assert_eq!(&record[0], s.name);
        assert_eq!(&record[1], "12");
        assert_eq!(&record[2], "2000-01");
        assert_eq!(&record[3], "36");
        let mean: f64 = record[4].parse().expect("numeric mean");
        assert_eq!(mean, SeriesSummary::from_series(s).mean);
    }
}

#[test]
fn json_export_of_resolved_series() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("series.json");

    let spec = ModelSpecification::builder()
        .count(2)
        .length(8)
        .build()
        .expect("valid spec");
    let series = RandomProvider::new()
        .resolve_all(&ConfigKey::encode(&spec))
        .expect("resolves");
    write_series_json(&path, &series).expect("write succeeds");

    let text = std::fs::read_to_string(&path).expect("read back");
    let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    let items = parsed.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["node_name"], "1");
    assert_eq!(items[0]["frequency"], 12);
    assert_eq!(items[0]["start"]["year"], 2000);
    assert_eq!(items[0]["values"].as_array().map(Vec::len), Some(8));
}
