use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "resume-client",
    version,
    about = "Terminal client for the AI resume analysis service"
)]
pub struct Cli {
    /// RON configuration file (default: ./resume_client.ron if present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the analysis service; overrides config and RESUME_API_URL.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Location to open at startup.
    #[arg(long, value_name = "PATH", default_value = "/")]
    pub open: String,
}
