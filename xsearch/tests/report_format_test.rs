//! Tests for the padded report format and the field selection flags.
#![allow(clippy::unwrap_used)]

use std::fs;
use tempfile::tempdir;
use xsearch::entry_point::run_with_args_to;

fn run_report(dir: &std::path::Path, extra: &[&str]) -> String {
    let mut args = vec![
        "-d".to_owned(),
        dir.to_string_lossy().to_string(),
        "--quiet".to_owned(),
    ];
    args.extend(extra.iter().map(|s| (*s).to_owned()));

    let mut buffer = Vec::new();
    let code = run_with_args_to(args, &mut buffer).unwrap();
    assert_eq!(code, 0);
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_columns_follow_argument_order() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("a.xml"),
        "<r><x>first</x><y>second</y></r>",
    )
    .unwrap();

    let output = run_report(dir.path(), &["//r", "y/text()", "x/text()"]);
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].starts_with("y/text()"));
    assert!(lines[1].starts_with("second"));
    assert!(lines[1].trim_end().ends_with("first"));
}

#[test]
fn test_tag_flag_reports_element_names() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.xml"), "<r><x>1</x></r>").unwrap();

    let output = run_report(dir.path(), &["-g", "//r", "x"]);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "tag");
    assert_eq!(lines[1], "x");
}

#[test]
fn test_attrib_flag_reports_key_value_pairs() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("a.xml"),
        r#"<r><x status="ok" kind="demo">1</x></r>"#,
    )
    .unwrap();

    let output = run_report(dir.path(), &["-a", "//r", "x"]);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "attrib");
    assert_eq!(lines[1], "status=ok kind=demo");
}

#[test]
fn test_text_and_tail_flags() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("a.xml"),
        "<r><x>inside</x>after</r>",
    )
    .unwrap();

    let output = run_report(dir.path(), &["-x", "-l", "//r", "x"]);
    let lines: Vec<&str> = output.lines().collect();

    // text column first, tail column second
    assert!(lines[0].starts_with("text"));
    assert!(lines[0].trim_end().ends_with("tail"));
    assert!(lines[1].starts_with("inside"));
    assert!(lines[1].trim_end().ends_with("after"));
}

#[test]
fn test_field_labels_prefixed_for_multiple_expressions() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.xml"), "<r><x>1</x><y>2</y></r>").unwrap();

    let output = run_report(dir.path(), &["-g", "//r", "x", "y"]);
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].contains("x tag"));
    assert!(lines[0].contains("y tag"));
}

#[test]
fn test_id_column_comes_first() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("a.xml"),
        "<r><num>007</num><x>v</x></r>",
    )
    .unwrap();

    let output = run_report(dir.path(), &["-i", "num", "//r", "x/text()"]);
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].starts_with("id"));
    assert!(lines[1].starts_with("007"));
}

#[test]
fn test_parent_scope_restricts_report() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("a.xml"),
        "<top><keep><r><x>in</x></r></keep><drop><r><x>out</x></r></drop></top>",
    )
    .unwrap();

    let output = run_report(dir.path(), &["-p", "//keep", "r", "x/text()"]);

    assert!(output.contains("in"));
    assert!(!output.contains("out"));
}

#[test]
fn test_newlines_stay_on_one_physical_line() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("a.xml"),
        "<r><x>line1\nline2</x></r>",
    )
    .unwrap();

    let output = run_report(dir.path(), &["//r", "x/text()"]);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "line1\\nline2");
}

#[test]
fn test_exclude_folder_flag() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("fixtures")).unwrap();
    fs::write(dir.path().join("fixtures/f.xml"), "<r><x>hidden</x></r>").unwrap();
    fs::write(dir.path().join("a.xml"), "<r><x>seen</x></r>").unwrap();

    let output = run_report(
        dir.path(),
        &["--exclude-folder", "fixtures", "//r", "x/text()"],
    );

    assert!(output.contains("seen"));
    assert!(!output.contains("hidden"));
}
