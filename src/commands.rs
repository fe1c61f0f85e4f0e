use std::collections::HashSet;
use std::path::PathBuf;

use artifact_uploader::artifacts::ArtifactConfig;
use artifact_uploader::config::Config;
use artifact_uploader::tracking::TrackingStore;
use tracing::{info, warn};

use crate::cli::{FailedArgs, RunArgs};

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

fn load_config(path: Option<PathBuf>) -> Result<Config, AnyError> {
    let config = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

/// One upload pass. Transfer failures are recorded, not returned.
pub async fn run(args: RunArgs) -> Result<(), AnyError> {
    let config = load_config(args.config)?;
    let tracking_dir = args.tracking_dir.unwrap_or_else(|| config.tracking.dir.clone());

    let tracking = TrackingStore::open(tracking_dir);
    info!(
        handlers = config.artifacts.len(),
        tracking_dir = %tracking.root().display(),
        "Starting upload run"
    );

    let mut artifacts = ArtifactConfig::new(&config, &tracking);
    artifacts.prepare()?;

    let summary = artifacts.run().await;
    if summary.failed > 0 {
        warn!(failed = summary.failed, "Some artifacts were not delivered");
    }

    Ok(())
}

pub fn failed(args: FailedArgs) -> Result<(), AnyError> {
    let tracking_dir = match args.tracking_dir {
        Some(dir) => dir,
        None => load_config(args.config)?.tracking.dir,
    };

    let records = TrackingStore::open(tracking_dir).scoped(args.handler);
    let mut seen = HashSet::new();
    let failed: Vec<String> = records
        .list_failed()
        .into_iter()
        .filter(|path| seen.insert(path.clone()))
        .collect();

    if failed.is_empty() {
        info!(handler = records.handler(), "No failed artifacts recorded");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&failed)?);
    } else {
        for path in &failed {
            println!("{path}");
        }
    }

    Ok(())
}
