// tests/store_local.rs
//
// Tests for local data discovery: newest file per category, loading
// into a prepared frame, content keys.
//
use std::fs;
use std::path::PathBuf;

use baac_scope::store;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("baac_store_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn latest_local_prefers_the_highest_year() {
    let dir = tmp_dir("latest");
    for name in [
        "usagers-2020.csv",
        "usagers-2022.csv",
        "usagers-2021.csv",
        "vehicules-2023.csv",  // other category
        "usagers-abc.csv",     // year not digits
        "usagers-2022.txt",    // wrong extension
        "readme.md",
    ] {
        fs::write(dir.join(name), "x").unwrap();
    }

    let (path, year) = store::latest_local(&dir, "usagers").expect("should find a file");
    assert_eq!(year, 2022);
    assert!(path.to_string_lossy().ends_with("usagers-2022.csv"));
}

#[test]
fn latest_local_none_when_nothing_matches() {
    let dir = tmp_dir("none");
    fs::write(dir.join("notes.txt"), "x").unwrap();
    assert!(store::latest_local(&dir, "usagers").is_none());
    assert!(store::latest_local(&dir.join("missing"), "usagers").is_none());
}

#[test]
fn load_table_prepares_the_frame_and_keys_the_content() {
    let dir = tmp_dir("load");
    let body = "Num_Acc;lat;long;adr\n1;48,85;2,35;rue A\n2;-;9,9;rue B\n";
    fs::write(dir.join("carcteristiques-2022.csv"), body).unwrap();

    let t = store::load_table(&dir, "carcteristiques")
        .unwrap()
        .expect("table should load");

    assert_eq!(t.category, "carcteristiques");
    assert_eq!(t.year, 2022);
    assert_eq!(t.key, store::content_key(body.as_bytes()));

    // Prepared: long → lon, adr gone, the coordinate-less row dropped.
    assert_eq!(t.frame.headers, vec!["Num_Acc".to_string(), "lat".into(), "lon".into()]);
    assert_eq!(t.frame.nrows(), 1);
    assert_eq!(t.frame.cell(0, 1), "48.85");
}

#[test]
fn load_table_none_before_any_fetch() {
    let dir = tmp_dir("empty");
    assert!(store::load_table(&dir, "usagers").unwrap().is_none());
}

#[test]
fn load_all_returns_what_exists() {
    let dir = tmp_dir("load_all");
    fs::write(dir.join("usagers-2022.csv"), "Num_Acc;grav\n1;3\n").unwrap();

    let tables = store::load_all(&dir, &["usagers", "vehicules"]);
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].category, "usagers");
    assert_eq!(tables[0].frame.nrows(), 1);
}

#[test]
fn content_key_tracks_the_bytes() {
    assert_eq!(store::content_key(b"abc"), store::content_key(b"abc"));
    assert_ne!(store::content_key(b"abc"), store::content_key(b"abd"));
}
