pub use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "s3sftp-resolve")]
#[command(about = "Resolve and check jailed SFTP paths against a configuration")]
pub struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "s3sftp.toml")]
    pub config: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: crate::Command,
}
