//! streammark CLI - streaming Markdown to HTML converter

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

/// Convert Markdown to HTML on standard output
#[derive(Parser, Debug)]
#[command(name = "streammark", version, about)]
struct Args {
    /// Markdown file to convert (standard input when omitted or `-`)
    file: Option<PathBuf>,
}

/// Install a stderr log subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=streammark=trace`. Standard output carries only HTML.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    let stdout = BufWriter::new(io::stdout().lock());
    let result = match args.file.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            debug!(path = %path.display(), "converting file");
            streammark::convert_path(path, stdout)
        }
        _ => {
            debug!("converting standard input");
            streammark::convert(io::stdin().lock(), stdout)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
