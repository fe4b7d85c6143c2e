//! Write the names of the files directly inside a directory to a text file.
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use dir_tools::{ListArgs, init_logger, parse_toml, write_filenames};

#[derive(Parser, Debug)]
#[command(
    name = "list_filenames",
    about = "Write the names of the files in a directory, one per line"
)]
struct Cli {
    /// Directory to list (not recursive)
    source_dir: Option<PathBuf>,

    /// Output text file [default: image_list.txt]
    #[arg(short, long)]
    output_file: Option<PathBuf>,

    /// TOML config file with a [list] table
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    exit_status(run(cli))
}

/// Failures are logged, never signalled through the exit status
fn exit_status(result: Result<()>) -> ExitCode {
    if let Err(e) = result {
        tracing::error!("Error: {:#}", e);
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<()> {
    let mut args = match &cli.config {
        Some(path) => {
            let cwd = std::env::current_dir()?;
            parse_toml(path, &cwd)
                .with_context(|| format!("Failed to parse config {:?}", path))?
                .list
        }
        None => ListArgs::default(),
    };

    if let Some(source_dir) = cli.source_dir {
        args.source_dir = source_dir;
    }
    if let Some(output_file) = cli.output_file {
        args.output_file = output_file;
    }
    if args.source_dir.as_os_str().is_empty() {
        bail!("no source directory given (pass SOURCE_DIR or set [list] source_dir)");
    }

    tracing::debug!("{:?}", args);
    write_filenames(&args)?;
    Ok(())
}
