use std::io::Write;
use std::process;

use structopt::StructOpt;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shift_cipher::config::{OutputFormat, RunConfig};
use shift_cipher::report::render;
use shift_cipher::Result;

/// Encode a message with a Caesar shift, then print every possible decoding of it.
#[derive(StructOpt)]
struct Cli {
    /// Message to encode; uppercase A-Z only unless --normalize is given
    #[structopt(short, long, default_value = "CRYPTOGRAPHYISCOOL")]
    message: String,
    /// Shift to encode with; any integer, taken modulo 26
    #[structopt(short, long, default_value = "3", allow_hyphen_values = true)]
    key: i64,
    /// Uppercase the message and strip anything that isn't a letter
    #[structopt(long)]
    normalize: bool,
    /// Print the result as JSON
    #[structopt(long)]
    json: bool,
}

impl From<Cli> for RunConfig {
    fn from(args: Cli) -> Self {
        RunConfig::builder()
            .message(args.message)
            .key(args.key)
            .normalize(args.normalize)
            .format(if args.json { OutputFormat::Json } else { OutputFormat::Text })
            .build()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shift_cipher=warn")),
        )
        .init();

    let config: RunConfig = Cli::from_args().into();
    info!(key = config.key, normalize = config.normalize, "starting run");

    if let Err(e) = run(&config) {
        error!(%e, "run failed");
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(config, &mut out)?;
    out.flush()?;
    Ok(())
}
