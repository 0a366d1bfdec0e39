use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use tempfile::TempDir;

use sarif_split::{Error, SplitParams, split_sarif_file};

fn write_input(dir: &Path, doc: &Value) -> std::path::PathBuf {
    let path = dir.join("results.sarif");
    fs::write(&path, serde_json::to_string(doc).unwrap()).unwrap();
    path
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn sample(n: usize) -> Value {
    let runs: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "tool": {"driver": {"name": format!("Tool {i}")}},
                "results": [{"ruleId": format!("R{i}"), "message": {"text": "found"}}]
            })
        })
        .collect();
    json!({
        "$schema": "https://json.schemastore.org/sarif-2.1.0.json",
        "version": "2.1.0",
        "runs": runs,
        "properties": {"generator": "aggregator"}
    })
}

#[test]
fn per_run_split_preserves_runs_and_top_level_keys() {
    let dir = TempDir::new().unwrap();
    let source = sample(5);
    let input = write_input(dir.path(), &source);
    let out = dir.path().join("out");

    let report = split_sarif_file(&input, &out, &SplitParams::per_run()).unwrap();
    assert_eq!(report.files.len(), 5);
    assert_eq!(report.total_runs, 5);

    let mut rejoined = Vec::new();
    for (i, file) in report.files.iter().enumerate() {
        assert_eq!(file.file_name, format!("results-{:02}-Tool-{i}.sarif", i + 1));
        let doc = read_json(&file.path);
        assert_eq!(doc["$schema"], source["$schema"]);
        assert_eq!(doc["version"], "2.1.0");
        assert_eq!(doc["properties"], source["properties"]);

        let runs = doc["runs"].as_array().unwrap();
        assert_eq!(runs.len(), 1);
        let mut run = runs[0].clone();
        assert_eq!(
            run["automationDetails"]["id"],
            format!("codacy/Tool-{i}/{}", i + 1)
        );
        run.as_object_mut().unwrap().remove("automationDetails");
        rejoined.push(run);
    }
    assert_eq!(Value::Array(rejoined), source["runs"]);
}

#[test]
fn chunked_split_produces_ceil_files() {
    let dir = TempDir::new().unwrap();
    let source = sample(45);
    let input = write_input(dir.path(), &source);
    let out = dir.path().join("out");

    let report = split_sarif_file(&input, &out, &SplitParams::chunked(20)).unwrap();
    let sizes: Vec<usize> = report.files.iter().map(|f| f.run_count).collect();
    assert_eq!(sizes, [20, 20, 5]);

    let mut rejoined = Vec::new();
    for (k, file) in report.files.iter().enumerate() {
        assert_eq!(file.path, out.join(format!("results-{}.sarif", k + 1)));
        let doc = read_json(&file.path);
        rejoined.extend(doc["runs"].as_array().unwrap().iter().cloned());
    }
    assert_eq!(Value::Array(rejoined), source["runs"]);
}

#[test]
fn concrete_tool_name_scenario() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        dir.path(),
        &json!({
            "version": "2.1.0",
            "runs": [
                {"tool": {"driver": {"name": "ESLint"}}},
                {"tool": {"driver": {"name": ""}}},
                {"tool": {"driver": {}}}
            ]
        }),
    );
    let out = dir.path().join("out");

    split_sarif_file(&input, &out, &SplitParams::default()).unwrap();

    for (name, id) in [
        ("results-01-ESLint.sarif", "codacy/ESLint/1"),
        ("results-02-unknown.sarif", "codacy/unknown/2"),
        ("results-03-unknown.sarif", "codacy/unknown/3"),
    ] {
        let doc = read_json(&out.join(name));
        assert_eq!(doc["runs"][0]["automationDetails"]["id"], id);
    }
}

#[test]
fn rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), &sample(3));
    let out = dir.path().join("out");

    let first = split_sarif_file(&input, &out, &SplitParams::default()).unwrap();
    let before: Vec<Vec<u8>> = first.files.iter().map(|f| fs::read(&f.path).unwrap()).collect();

    let second = split_sarif_file(&input, &out, &SplitParams::default()).unwrap();
    let after: Vec<Vec<u8>> = second.files.iter().map(|f| fs::read(&f.path).unwrap()).collect();

    assert_eq!(before, after);
}

#[test]
fn input_file_is_never_modified() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), &sample(2));
    let original = fs::read(&input).unwrap();

    split_sarif_file(&input, &dir.path().join("out"), &SplitParams::default()).unwrap();

    assert_eq!(fs::read(&input).unwrap(), original);
}

#[test]
fn missing_runs_is_an_empty_success() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), &json!({"version": "2.1.0"}));
    let out = dir.path().join("out");

    let report = split_sarif_file(&input, &out, &SplitParams::default()).unwrap();
    assert!(report.is_empty());
    assert!(!report.runs_present);
    assert!(!out.exists());
}

#[test]
fn malformed_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.sarif");
    fs::write(&input, r#"{"version": "2.1.0", "runs": [{"tool""#).unwrap();
    let out = dir.path().join("out");

    let err = split_sarif_file(&input, &out, &SplitParams::default()).unwrap_err();
    assert!(matches!(err, Error::MalformedInput { .. }));
    assert!(!out.exists());
}

#[test]
fn write_failure_stops_and_keeps_earlier_files() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), &sample(3));
    let out = dir.path().join("out");
    fs::create_dir_all(out.join("results-02-Tool-1.sarif")).unwrap();

    let err = split_sarif_file(&input, &out, &SplitParams::default()).unwrap_err();
    match err {
        Error::OutputWrite { path, .. } => assert_eq!(path, out.join("results-02-Tool-1.sarif")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(out.join("results-01-Tool-0.sarif").is_file());
    assert!(!out.join("results-03-Tool-2.sarif").exists());
}

#[test]
fn numbers_beyond_64_bits_are_copied_verbatim() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("results.sarif");
    fs::write(
        &input,
        r#"{"version": "2.1.0", "x": 123456789012345678901234567890, "y": 1e400, "runs": [{"tool": {"driver": {"name": "Big"}}, "properties": {"n": 18446744073709551616, "f": 0.1000000000000000055511151231257827}}]}"#,
    )
    .unwrap();
    let out = dir.path().join("out");

    let report = split_sarif_file(&input, &out, &SplitParams::default()).unwrap();
    assert_eq!(report.files.len(), 1);

    let text = fs::read_to_string(&report.files[0].path).unwrap();
    assert!(text.contains(r#""x": 123456789012345678901234567890"#));
    assert!(text.contains(r#""y": 1e400"#));
    assert!(text.contains(r#""n": 18446744073709551616"#));
    assert!(text.contains(r#""f": 0.1000000000000000055511151231257827"#));
}
