use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::export::LATEX_FILE_NAME;

#[derive(Parser, Debug)]
#[command(name = "cv-forge")]
#[command(about = "Optimize a CV for a job description using AI", long_about = None)]
pub struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    pub config: PathBuf,

    /// Path to your CV (.pdf or .txt); prompted for interactively when omitted
    #[arg(long, value_name = "FILE")]
    pub cv: Option<PathBuf>,

    /// Path to a file containing the job description; pasted interactively when omitted
    #[arg(long, value_name = "FILE")]
    pub job_file: Option<PathBuf>,

    /// Where the exported LaTeX source is written
    #[arg(short, long, value_name = "FILE", default_value = LATEX_FILE_NAME)]
    pub output: PathBuf,

    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,
}
