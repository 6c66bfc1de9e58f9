use std::path::PathBuf;

use clap::Parser;
use serde::{
    Deserialize,
    Serialize,
};
use tracing_subscriber::{
    EnvFilter,
    fmt,
};


pub const DEFAULT_OUTPUT: &str = "output.splat";


#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Parser,
)]
#[command(about = "convert spacetime gaussian ply files to splatv", version, long_about = None)]
pub struct SplatvConverterArgs {
    /// ply files to convert
    #[arg(required = true, num_args = 1..)]
    pub input_files: Vec<PathBuf>,

    /// output path, only used when converting a single input [default: output.splat]
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// keep converting the remaining inputs after a failure
    #[arg(long, default_value = "false")]
    pub keep_going: bool,
}

impl Default for SplatvConverterArgs {
    fn default() -> SplatvConverterArgs {
        SplatvConverterArgs {
            input_files: Vec::new(),
            output: None,
            keep_going: false,
        }
    }
}

impl SplatvConverterArgs {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}


/// Installs a fmt subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
