mod emitter;
mod error;
mod reader;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "rhead")]
#[command(about = "Print the first lines of one or more files")]
struct Args {
    /// Number of lines to show from each file
    #[arg(
        short = 'n',
        long = "lines",
        default_value_t = 10,
        value_name = "NUM",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    lines: u64,

    /// Files to read, in order
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    match emitter::emit(&args.files, args.lines, &mut out, &mut err) {
        Ok(summary) if summary.all_emitted() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("rhead: {}", e);
            ExitCode::FAILURE
        }
    }
}
