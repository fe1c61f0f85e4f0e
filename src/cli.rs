use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "artifact-uploader")]
#[command(about = "Upload build artifacts to HTTP(S) and FTP destinations", long_about = None)]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload every matched artifact that has not been delivered yet
    Run(RunArgs),
    /// Print the artifacts recorded as failed for one handler
    Failed(FailedArgs),
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Configuration file (defaults to $ARTIFACT_UPLOADER_CONFIG or artifacts.yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the tracking files, overrides `tracking.dir`
    #[arg(long)]
    pub tracking_dir: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct FailedArgs {
    /// Handler name as declared in the configuration
    #[arg(long)]
    pub handler: String,

    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub tracking_dir: Option<PathBuf>,

    /// Print the list as a JSON array
    #[arg(long)]
    pub json: bool,
}
