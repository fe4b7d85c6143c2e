//! Copy every image found under a directory tree into one flat folder.
//!
//! Settings come from an optional TOML config (`[collect]` table) and are
//! overridden by command-line flags. Without a root directory the tool asks
//! for one on stdin.
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use dir_tools::{CollectArgs, ConflictPolicy, collect_images, init_logger, parse_toml};

#[derive(Parser, Debug)]
#[command(
    name = "collect_images",
    about = "Copy every image under a directory tree into one flat folder"
)]
struct Cli {
    /// Root directory to search (prompted for when omitted)
    root_dir: Option<PathBuf>,

    /// Destination folder [default: images]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// What to do when a destination name is taken: overwrite, skip, fail, rename
    #[arg(long)]
    on_conflict: Option<ConflictPolicy>,

    /// Comma-separated extensions to collect instead of the built-in image set
    #[arg(long, value_delimiter = ',')]
    extensions: Option<Vec<String>>,

    /// Descend into symlinked directories
    #[arg(long)]
    follow_links: bool,

    /// Visit entries in file-name order
    #[arg(long)]
    sort: bool,

    /// Show a spinner while copying
    #[arg(long)]
    progress: bool,

    /// TOML config file with a [collect] table
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut args = match &cli.config {
        Some(path) => {
            let cwd = std::env::current_dir()?;
            parse_toml(path, &cwd)
                .with_context(|| format!("Failed to parse config {:?}", path))?
                .collect
        }
        None => CollectArgs::default(),
    };

    if let Some(root_dir) = cli.root_dir {
        args.root_dir = root_dir;
    }
    if let Some(output_dir) = cli.output_dir {
        args.output_dir = output_dir;
    }
    if let Some(policy) = cli.on_conflict {
        args.on_conflict = policy;
    }
    if let Some(extensions) = cli.extensions {
        args.extensions = extensions;
    }
    args.follow_links |= cli.follow_links;
    args.sort |= cli.sort;
    args.progress |= cli.progress;

    if args.root_dir.as_os_str().is_empty() {
        args.root_dir = prompt_root_dir(io::stdin().lock(), io::stdout())?;
    }

    let report = collect_images(&args).context("Failed to collect images")?;
    if !report.skipped.is_empty() {
        tracing::warn!("Skipped {} existing destinations", report.skipped.len());
    }
    Ok(())
}

/// Ask for the root directory on `output` and read one trimmed line from `input`.
fn prompt_root_dir(mut input: impl BufRead, mut output: impl Write) -> Result<PathBuf> {
    write!(output, "Enter the root directory path: ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read root directory from stdin")?;

    let root = line.trim();
    if root.is_empty() {
        bail!("no root directory given (pass ROOT_DIR, set [collect] root_dir or answer the prompt)");
    }
    Ok(PathBuf::from(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_trims_answer() {
        let mut shown = Vec::new();
        let root = prompt_root_dir("  /x/y \n".as_bytes(), &mut shown).unwrap();

        assert_eq!(root, PathBuf::from("/x/y"));
        assert_eq!(
            String::from_utf8(shown).unwrap(),
            "Enter the root directory path: "
        );
    }

    #[test]
    fn test_prompt_rejects_blank_answer() {
        let err = prompt_root_dir("   \n".as_bytes(), io::sink()).unwrap_err();
        assert!(err.to_string().contains("no root directory given"));

        // closed stdin reads as an empty answer
        assert!(prompt_root_dir("".as_bytes(), io::sink()).is_err());
    }
}
