use std::path::{Path, PathBuf};

mod api;
mod config;
mod db;
mod error;
mod ingest;
mod models;

use api::ScheduleClient;
use config::Config;
use db::Repository;
use error::Result;
use ingest::Loader;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (only show warnings and errors by default)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let config = Config::load()?;
    let repo = Repository::new(&config.db_path).await?;
    let schedule = config
        .enrich_metadata
        .then(|| ScheduleClient::new(&config.api_base_url));
    let loader = Loader::new(repo, schedule);

    match args[1].as_str() {
        "load" if args.len() >= 3 => {
            let files = collect_json_files(&args[2..])?;
            let mut loaded = 0usize;
            let mut failed = 0usize;

            // Per-file errors are logged and the batch continues; each
            // file's writes committed or rolled back on their own.
            for file in &files {
                match loader.load_file(file).await {
                    Ok(report) => {
                        loaded += 1;
                        tracing::info!(
                            "{}: game {} ({} boxscore lines)",
                            file.display(),
                            report.game_id,
                            report.lines
                        );
                    }
                    Err(e) => {
                        failed += 1;
                        tracing::error!("Failed to load {}: {}", file.display(), e);
                    }
                }
            }
            println!("Loaded {}/{} files ({} failed)", loaded, files.len(), failed);
        }
        "load-schedule" if args.len() >= 3 => {
            let count = loader.load_schedule_file(Path::new(&args[2])).await?;
            println!("Loaded {} scheduled games", count);
        }
        "backfill-metadata" => {
            let report = loader.backfill_metadata().await?;
            println!(
                "Backfilled metadata for {}/{} games",
                report.updated, report.examined
            );
        }
        _ => print_usage(),
    }

    Ok(())
}

fn collect_json_files(paths: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for arg in paths {
        let path = PathBuf::from(arg);
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(&path)?
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
                .collect();
            entries.sort();
            files.extend(entries);
        } else {
            files.push(path);
        }
    }
    Ok(files)
}

fn print_usage() {
    eprintln!("Usage: dugout-loader <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  load <file-or-dir>...   Load combined/boxscore/game JSON snapshots");
    eprintln!("  load-schedule <file>    Load a schedule API response into the games table");
    eprintln!("  backfill-metadata       Fill missing game metadata from the schedule endpoint");
}
