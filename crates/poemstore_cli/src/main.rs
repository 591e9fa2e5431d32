//! Poem store CLI entry point.
//!
//! # Responsibility
//! - Own the top-level collection lifecycle: open the named store,
//!   construct the collection, fetch, print.
//! - Keep output deterministic for quick local sanity checks.

use std::path::PathBuf;
use std::process::ExitCode;

use log::error;
use poemstore_core::{
    default_log_level, init_logging, open_store, PoemCollection, SqlitePoemRepository, STORE_NAME,
};

fn main() -> ExitCode {
    // Optional first argument selects the data directory holding the store.
    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let log_dir = std::env::temp_dir().join("poemstore-logs");
    match log_dir.to_str() {
        Some(dir) => {
            if let Err(err) = init_logging(default_log_level(), dir) {
                eprintln!("logging disabled: {err}");
            }
        }
        None => eprintln!("logging disabled: log directory is not valid UTF-8"),
    }

    let conn = match open_store(&data_dir) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open store `{STORE_NAME}` in {}: {err}", data_dir.display());
            return ExitCode::FAILURE;
        }
    };

    let repo = match SqlitePoemRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("store `{STORE_NAME}` is not usable: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut poems = PoemCollection::new(repo);
    if let Err(err) = poems.fetch() {
        error!("event=cli_fetch module=cli status=error store={STORE_NAME} error={err}");
        eprintln!("failed to fetch store `{STORE_NAME}`: {err}");
        return ExitCode::FAILURE;
    }

    println!("store={} poems={}", poems.store_name(), poems.len());
    for poem in poems.poems() {
        println!("{} {}", poem.uuid, poem.text);
    }

    ExitCode::SUCCESS
}
