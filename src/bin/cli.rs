// src/bin/cli.rs
use baac_scope::cli;

fn main() {
    // Pretty panic/error reports; the fetch itself still returns plain errors.
    if let Err(e) = color_eyre::install() {
        eprintln!("Warning: failed to install report handler: {e}");
    }

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
