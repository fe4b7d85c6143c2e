use serde::Deserialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListArgs {
    /// Directory whose files are listed (not recursive)
    pub source_dir: PathBuf,

    /// Text file receiving one filename per line
    pub output_file: PathBuf,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::new(),
            output_file: PathBuf::from("image_list.txt"),
        }
    }
}

/// Names of the regular files directly inside `dir`, in OS enumeration order.
///
/// Symlinks pointing at files count as files; subdirectories are skipped.
pub fn list_filenames(dir: &Path) -> Result<Vec<String>> {
    if dir.exists() && !dir.is_dir() {
        return Err(AppError::NotADirectory(dir.to_path_buf()));
    }

    let entries = std::fs::read_dir(dir).map_err(|e| AppError::from_read_io(e, dir))?;

    let mut names = vec![];
    for entry in entries {
        let entry = entry.map_err(|e| AppError::from_read_io(e, dir))?;
        if entry.path().is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

/// Write the filenames of `args.source_dir` to `args.output_file`, one per line.
///
/// The whole listing is gathered before the output file is touched, so a
/// failed read never truncates an existing listing.
///
/// Returns the number of filenames written.
pub fn write_filenames(args: &ListArgs) -> Result<usize> {
    let names = list_filenames(&args.source_dir)?;
    let output = &args.output_file;

    let file = File::create(output).map_err(|e| AppError::from_write_io(e, output))?;
    let mut writer = BufWriter::new(file);
    for name in &names {
        writeln!(writer, "{}", name).map_err(|e| AppError::from_write_io(e, output))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::from_write_io(e, output))?;

    tracing::info!(
        "Successfully wrote {} filenames to '{}'",
        names.len(),
        output.display()
    );
    Ok(names.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_write_filenames_lists_only_regular_files() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("src");
        fs::create_dir(&source).unwrap();
        for name in ["a.png", "b.txt", "c"] {
            fs::write(source.join(name), b"x").unwrap();
        }
        fs::create_dir(source.join("nested")).unwrap();
        fs::write(source.join("nested/deep.png"), b"x").unwrap();

        let args = ListArgs {
            source_dir: source,
            output_file: temp_dir.path().join("list.txt"),
        };
        let count = write_filenames(&args).unwrap();
        assert_eq!(count, 3);

        let lines = read_lines(&args.output_file);
        assert_eq!(lines.len(), 3);
        let got: HashSet<_> = lines.into_iter().collect();
        let expected: HashSet<_> = ["a.png", "b.txt", "c"].into_iter().map(String::from).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_write_filenames_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("empty");
        fs::create_dir_all(source.join("only_a_subdir")).unwrap();

        let args = ListArgs {
            source_dir: source,
            output_file: temp_dir.path().join("list.txt"),
        };
        assert_eq!(write_filenames(&args).unwrap(), 0);
        assert_eq!(fs::read_to_string(&args.output_file).unwrap(), "");
    }

    #[test]
    fn test_write_filenames_overwrites_existing_output() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("src");
        fs::create_dir(&source).unwrap();
        fs::write(source.join("only.jpg"), b"x").unwrap();

        let output_file = temp_dir.path().join("list.txt");
        fs::write(&output_file, "stale\nlines\nhere\n").unwrap();

        let args = ListArgs {
            source_dir: source,
            output_file,
        };
        write_filenames(&args).unwrap();
        assert_eq!(fs::read_to_string(&args.output_file).unwrap(), "only.jpg\n");
    }

    #[test]
    fn test_missing_source_dir_keeps_output_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let output_file = temp_dir.path().join("list.txt");
        fs::write(&output_file, "previous\n").unwrap();

        let args = ListArgs {
            source_dir: temp_dir.path().join("nope"),
            output_file,
        };
        let err = write_filenames(&args).unwrap_err();
        assert!(matches!(err, AppError::DirectoryNotFound(_)));
        assert_eq!(fs::read_to_string(&args.output_file).unwrap(), "previous\n");
    }

    #[test]
    fn test_source_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(
            list_filenames(&file),
            Err(AppError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_unwritable_output_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let args = ListArgs {
            source_dir: temp_dir.path().to_path_buf(),
            output_file: temp_dir.path().join("missing_parent/list.txt"),
        };
        assert!(matches!(
            write_filenames(&args),
            Err(AppError::WriteFailure { .. })
        ));
    }
}
