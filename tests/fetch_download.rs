// tests/fetch_download.rs
//
// Tests for the download loop, with the HTTP getter swapped for a
// closure. Nothing here touches the network.
//
use std::fs;
use std::path::PathBuf;

use baac_scope::fetch::{self, FetchStatus};
use baac_scope::progress::Progress;
use baac_scope::specs::catalog::Winner;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("baac_fetch_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn winner(url: &str, year: u32) -> Option<Winner> {
    Some(Winner { url: url.into(), year })
}

#[test]
fn downloads_land_as_category_year_csv() {
    let dir = tmp_dir("names");
    let winners = vec![
        ("usagers".to_string(), winner("https://x.example/u.csv", 2022)),
        ("lieux".to_string(), winner("https://x.example/l.csv", 2021)),
    ];

    let body = b"Num_Acc;grav\n1;3\n";
    let report = fetch::download_all(&winners, &dir, |_url| Ok(body.to_vec()), None);

    assert_eq!(report.downloaded(), 2);
    // Byte-for-byte as received.
    assert_eq!(fs::read(dir.join("usagers-2022.csv")).unwrap(), body);
    assert_eq!(fs::read(dir.join("lieux-2021.csv")).unwrap(), body);
}

#[test]
fn one_bad_link_never_blocks_the_rest() {
    let dir = tmp_dir("independence");
    let winners = vec![
        ("usagers".to_string(), winner("https://x.example/broken.csv", 2022)),
        ("vehicules".to_string(), winner("https://x.example/ok.csv", 2022)),
        ("lieux".to_string(), None),
    ];

    let report = fetch::download_all(
        &winners,
        &dir,
        |url| {
            if url.ends_with("broken.csv") {
                Err("HTTP 500 Internal Server Error".into())
            } else {
                Ok(b"a;b\n".to_vec())
            }
        },
        None,
    );

    assert_eq!(report.downloaded(), 1);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.not_found(), 1);
    assert_eq!(report.summary(), "1 downloaded, 1 failed, 1 without a recent file");

    // The failure comes first in document order, the success still lands.
    assert!(dir.join("vehicules-2022.csv").exists());
    assert!(!dir.join("usagers-2022.csv").exists());

    match &report.outcomes[0].status {
        FetchStatus::Failed { year, url, error } => {
            assert_eq!(*year, 2022);
            assert!(url.ends_with("broken.csv"));
            assert!(error.contains("HTTP 500"));
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[test]
fn refetch_overwrites_in_place() {
    let dir = tmp_dir("overwrite");
    let winners = vec![("usagers".to_string(), winner("https://x.example/u.csv", 2022))];

    fetch::download_all(&winners, &dir, |_| Ok(b"old".to_vec()), None);
    fetch::download_all(&winners, &dir, |_| Ok(b"new contents".to_vec()), None);

    assert_eq!(fs::read(dir.join("usagers-2022.csv")).unwrap(), b"new contents");
}

struct Recorder {
    events: Vec<String>,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.events.push(format!("begin {total}"));
    }
    fn item_done(&mut self, category: &str, detail: &str) {
        self.events.push(format!("done {category} {detail}"));
    }
    fn item_failed(&mut self, category: &str, _detail: &str) {
        self.events.push(format!("failed {category}"));
    }
    fn finish(&mut self) {
        self.events.push("finish".to_string());
    }
}

#[test]
fn progress_sees_every_outcome() {
    let dir = tmp_dir("progress");
    let winners = vec![
        ("usagers".to_string(), winner("https://x.example/u.csv", 2022)),
        ("vehicules".to_string(), winner("https://x.example/bad.csv", 2021)),
        ("carcteristiques".to_string(), None),
    ];

    let mut rec = Recorder { events: Vec::new() };
    fetch::download_all(
        &winners,
        &dir,
        |url| {
            if url.ends_with("bad.csv") {
                Err("timed out".into())
            } else {
                Ok(b"x".to_vec())
            }
        },
        Some(&mut rec),
    );

    assert_eq!(
        rec.events,
        vec![
            "begin 2".to_string(), // the None category is not a download
            "done usagers usagers-2022.csv".to_string(),
            "failed vehicules".to_string(),
            "finish".to_string(),
        ]
    );
}
