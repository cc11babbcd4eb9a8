// tests/export_options.rs
//
// Tests for ExportOptions path/extension logic and the export strings
// Copy/Export produce.
//
use std::fs;
use std::path::PathBuf;

use baac_scope::config::options::{ExportFormat, ExportOptions};
use baac_scope::csv::to_export_string;
use baac_scope::file;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("baac_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn format_controls_the_extension() {
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Csv;
    assert!(export.out_path().to_string_lossy().ends_with("carcteristiques.csv"));

    // Flip format; same stem, new extension.
    export.format = ExportFormat::Tsv;
    assert!(export.out_path().to_string_lossy().ends_with("carcteristiques.tsv"));
}

#[test]
fn set_path_ignores_a_pasted_extension() {
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Csv;

    // The user pastes a path ending in .txt; the format still decides.
    export.set_path("out/somewhere/accidents.txt");
    let p = export.out_path();
    assert!(p.to_string_lossy().ends_with("accidents.csv"));
    assert_eq!(p.parent().unwrap(), std::path::Path::new("out/somewhere"));
}

#[test]
fn set_stem_keeps_the_directory() {
    let mut export = ExportOptions::default();
    export.set_path("exports/usagers.csv");

    // Category switch swaps the file stem only.
    export.set_stem("lieux");
    let p = export.out_path();
    assert!(p.to_string_lossy().ends_with("lieux.csv"));
    assert_eq!(p.parent().unwrap(), std::path::Path::new("exports"));
}

#[test]
fn export_string_quotes_only_when_needed() {
    let headers = vec!["id".to_string(), "text".to_string()];
    let rows = vec![
        vec!["1".to_string(), "plain".to_string()],
        vec!["2".to_string(), "a;b".to_string()],
        vec!["3".to_string(), "said \"hi\"".to_string()],
    ];

    let out = to_export_string(&headers, &rows, true, ';');
    assert_eq!(out, "id;text\n1;plain\n2;\"a;b\"\n3;\"said \"\"hi\"\"\"\n");

    // Same cells under a tab delimiter: the semicolon is harmless now.
    let tsv = to_export_string(&headers, &rows, true, '\t');
    assert!(tsv.starts_with("id\ttext\n"));
    assert!(tsv.contains("2\ta;b\n"));
}

#[test]
fn header_row_is_optional() {
    let headers = vec!["a".to_string(), "b".to_string()];
    let rows = vec![vec!["1".to_string(), "2".to_string()]];

    assert_eq!(to_export_string(&headers, &rows, true, ','), "a,b\n1,2\n");
    assert_eq!(to_export_string(&headers, &rows, false, ','), "1,2\n");
}

#[test]
fn write_export_single_creates_parents_and_writes() {
    let dir = tmp_dir("write");
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Csv;
    export.include_headers = true;
    export.set_path(dir.join("nested/deeper/usagers.csv").to_str().unwrap());

    let headers = vec!["a".to_string(), "b".to_string()];
    let rows = vec![vec!["1".to_string(), "2".to_string()]];

    let written = file::write_export_single(&export, &headers, &rows).unwrap();
    assert!(written.to_string_lossy().ends_with("usagers.csv"));
    assert_eq!(fs::read_to_string(&written).unwrap(), "a,b\n1,2\n");
}

#[test]
fn export_refuses_a_file_in_the_way_of_a_directory() {
    let dir = tmp_dir("blocked");
    fs::write(dir.join("not_a_dir"), "x").unwrap();

    let mut export = ExportOptions::default();
    export.set_path(dir.join("not_a_dir/out.csv").to_str().unwrap());

    let headers = vec!["a".to_string()];
    let rows = vec![vec!["1".to_string()]];
    assert!(file::write_export_single(&export, &headers, &rows).is_err());
}
