use anyhow::Result;
use std::env;
use std::io;
use std::process;
use tile_filter::TileBag;

fn setup_logging() {
    let mut log_builder = env_logger::builder();
    // stdout carries the results, keep stderr quiet unless asked
    if env::var("RUST_LOG").is_err() {
        log_builder.filter(None, log::LevelFilter::Warn);
    }
    log_builder.format_timestamp(None);
    log_builder.init();
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    tile_filter::run(TileBag::standard(), stdin.lock(), stdout.lock())?;
    Ok(())
}

fn main() {
    setup_logging();
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
        process::exit(1);
    }
}
