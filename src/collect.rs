// -- submodules
mod conflict;
mod naming;

pub use conflict::ConflictPolicy;
pub use naming::{IMAGE_EXTENSIONS, destination_name, is_image_file};

// -- external imports
use serde::Deserialize;
use std::fmt;
use std::fs::{File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

use crate::error::{AppError, Result};
use crate::progress_bar::new_spinner;

use conflict::Resolved;

// -- structs

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CollectArgs {
    /// Root of the tree to search
    pub root_dir: PathBuf,

    /// Flat folder receiving the copies (created if missing)
    pub output_dir: PathBuf,

    /// Extensions treated as images, without the leading dot
    pub extensions: Vec<String>,

    /// Behaviour when a destination name is already taken
    pub on_conflict: ConflictPolicy,

    /// Descend into symlinked directories
    pub follow_links: bool,

    /// Visit directory entries sorted by file name
    pub sort: bool,

    /// Show a spinner while copying
    pub progress: bool,
}

impl Default for CollectArgs {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::new(),
            output_dir: PathBuf::from("images"),
            extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            on_conflict: Default::default(),
            follow_links: false,
            sort: false,
            progress: false,
        }
    }
}

/// A single successful copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Outcome of a full collection run
#[derive(Debug, Default)]
pub struct CollectReport {
    /// Copies in the order they were made
    pub copied: Vec<CopiedFile>,

    /// Sources left uncopied by `ConflictPolicy::Skip`
    pub skipped: Vec<PathBuf>,

    /// Absolute path of the output directory
    pub output_dir: PathBuf,
}

impl fmt::Display for CopiedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Copied: {} -> {}",
            self.source.display(),
            self.destination.display()
        )
    }
}

impl CollectReport {
    pub fn copied_count(&self) -> usize {
        self.copied.len()
    }

    /// Final line of a run: `Done! Copied N images to <output dir>`
    pub fn summary(&self) -> String {
        format!(
            "Done! Copied {} images to {}",
            self.copied_count(),
            self.output_dir.display()
        )
    }
}

// -- public API

/// Walk `args.root_dir` and copy every image into `args.output_dir` as
/// `<stem>_<parent>.<ext>`.
///
/// The first traversal or copy error aborts the run. Files copied before
/// the failure stay in the output directory.
///
/// When the output directory lies inside the root it is skipped during the
/// walk, so copies from earlier runs are not collected again as
/// `<stem>_<output-dir-name>.<ext>`.
pub fn collect_images(args: &CollectArgs) -> Result<CollectReport> {
    let start_time = Instant::now();
    let root = &args.root_dir;

    if !root.exists() {
        return Err(AppError::DirectoryNotFound(root.clone()));
    }
    if !root.is_dir() {
        return Err(AppError::NotADirectory(root.clone()));
    }

    let output_dir = &args.output_dir;
    std::fs::create_dir_all(output_dir).map_err(|e| AppError::from_write_io(e, output_dir))?;
    let output_canonical = output_dir
        .canonicalize()
        .map_err(|e| AppError::from_read_io(e, output_dir))?;

    tracing::debug!("[Root]: {:?}", root);
    tracing::debug!("[Output]: {:?}", output_dir);
    tracing::debug!("[Conflict policy]: {}", args.on_conflict);

    let mut walker = WalkDir::new(root).follow_links(args.follow_links);
    if args.sort {
        walker = walker.sort_by_file_name();
    }

    let mut report = CollectReport::default();
    let pb = new_spinner(args.progress, "Copying images");

    // the output folder itself is never walked
    let entries = walker.into_iter().filter_entry(|e| {
        e.depth() == 0
            || !e.file_type().is_dir()
            || e.path()
                .canonicalize()
                .map_or(true, |p| p != output_canonical)
    });

    for entry in entries {
        let entry = entry.map_err(AppError::from_walk)?;
        let path = entry.path();

        // directories, symlinked ones included, are never copied
        if path.is_dir() || !is_image_file(path, &args.extensions) {
            continue;
        }
        let Some(name) = destination_name(path) else {
            continue;
        };

        let destination = match args.on_conflict.resolve(output_dir, &name)? {
            Resolved::Copy(destination) => destination,
            Resolved::Skip => {
                pb.suspend(|| tracing::warn!("Skipped (exists): {}", path.display()));
                report.skipped.push(path.to_path_buf());
                continue;
            }
        };

        copy_with_metadata(path, &destination)?;
        let copied = CopiedFile {
            source: path.to_path_buf(),
            destination,
        };
        pb.inc(1);
        pb.suspend(|| tracing::info!("{}", copied));
        report.copied.push(copied);
    }
    pb.finish_and_clear();

    report.output_dir = std::path::absolute(output_dir)?;
    tracing::info!("{}", report.summary());
    tracing::debug!("Total collection time: {:.3?}", start_time.elapsed());

    Ok(report)
}

// -- helpers

/// Copy `src` to `dst` keeping permissions and access/modification times.
fn copy_with_metadata(src: &Path, dst: &Path) -> Result<()> {
    let metadata = std::fs::metadata(src).map_err(|e| AppError::from_file_read_io(e, src))?;
    std::fs::copy(src, dst).map_err(|e| AppError::from_write_io(e, dst))?;

    let mut times = FileTimes::new();
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }

    // a read-only copy still accepts new times from its owner
    let copy = match File::options().write(true).open(dst) {
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => File::open(dst),
        other => other,
    }
    .map_err(|e| AppError::from_write_io(e, dst))?;
    copy.set_times(times)
        .map_err(|e| AppError::from_write_io(e, dst))?;
    Ok(())
}

// -- tests
