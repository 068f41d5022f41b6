//! s3sftp-resolve - inspect how a configuration jails SFTP sessions
//!
//! Loads the same configuration the server uses and shows, per user, how
//! client paths map to physical bucket paths and what the client sees.

mod cli;
mod start_error;

use std::error::Error;

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use cli::{args::Args, op::Op, Check, Resolve};

command_enum! {
    (Check, Check),
    (Resolve, Resolve),
}

/// Log to stderr so command output on stdout stays clean.
/// The returned guard must be kept alive until exit.
fn init_logging(log_level: tracing::Level) -> WorkerGuard {
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(log_level).into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();
    guard
}

fn main() {
    let args = Args::parse();
    let guard = init_logging(args.log_level);

    let ctx = match cli::op::OpContext::load(&args.config) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("{}", e);
            match e.source() {
                Some(source) => eprintln!("Error: {}: {}", e.message(), source),
                None => eprintln!("Error: {}", e.message()),
            }
            drop(guard);
            std::process::exit(1);
        }
    };

    match args.command.execute(&ctx) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            drop(guard);
            std::process::exit(1);
        }
    }
}
