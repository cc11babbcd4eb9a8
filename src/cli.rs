// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::consts::CATEGORIES;
use crate::config::options::FetchOptions;
use crate::fetch;
use crate::progress::Progress;
use crate::store;

struct CliArgs {
    fetch: FetchOptions,
    list: bool,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_cli()?;

    if args.list {
        return list_local(&args.fetch);
    }

    logf!("CLI: fetch into {}", args.fetch.out_dir.display());
    let mut progress = CliProgress;
    let report = fetch::run(&args.fetch, Some(&mut progress))?;
    println!("Done: {}", report.summary());
    Ok(())
}

/// `--list`: what's on disk, no network.
fn list_local(options: &FetchOptions) -> Result<(), Box<dyn Error>> {
    for cat in &options.categories {
        match store::latest_local(&options.out_dir, cat) {
            Some((path, year)) => println!("{cat}: {year} ({})", path.display()),
            None => println!("{cat}: not downloaded"),
        }
    }
    Ok(())
}

fn parse_cli() -> Result<CliArgs, Box<dyn Error>> {
    let mut out = CliArgs { fetch: FetchOptions::default(), list: false };

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-l" | "--list" => out.list = true,
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output directory")?;
                out.fetch.out_dir = PathBuf::from(v);
            }
            "-c" | "--categories" => {
                let v = args.next().ok_or("Missing value for --categories")?;
                out.fetch.categories = parse_category_list(&v)?;
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(out)
}

/// Comma-separated subset of the recognized labels; deduped, order as given.
fn parse_category_list(s: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let mut picked: Vec<String> = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if !CATEGORIES.contains(&part) {
            return Err(format!(
                "Unknown category: {} (expected one of: {})",
                part,
                CATEGORIES.join(", ")
            ).into());
        }
        if !picked.iter().any(|p| p == part) {
            picked.push(s!(part));
        }
    }
    if picked.is_empty() {
        return Err("No categories given".into());
    }
    Ok(picked)
}

/// Stdout status lines, one per category.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, _category: &str, detail: &str) {
        println!("Downloaded {detail}");
    }
    fn item_failed(&mut self, category: &str, detail: &str) {
        println!("Download failed for {category}: {detail}");
    }
}
