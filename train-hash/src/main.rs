use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use train_hash::digest::DigestKind;
use train_hash::{AppError, BenchConfig};

/// Count digest collisions in a train schedule and time one lookup.
#[derive(Parser, Debug)]
#[command(name = "train-hash", version, about)]
struct Args {
    /// Schedule file, one `number date type time duration` record per line
    file: Option<PathBuf>,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _ignored: Vec<OsString>,

    /// Digest used to bucket records
    #[arg(long, value_enum, env = "TRAIN_HASH_DIGEST", default_value_t = DigestKind::Positional)]
    digest: DigestKind,

    /// Seed for choosing the lookup key
    #[arg(long, env = "TRAIN_HASH_SEED")]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let Some(path) = args.file else {
        let err = AppError::MissingArgument;
        println!("{err}");
        return ExitCode::from(err.exit_code());
    };

    let config = BenchConfig::new(args.digest, args.seed);
    match train_hash::run(&path, &config) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
