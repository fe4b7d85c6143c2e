use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use strum::{Display, EnumString, VariantNames};

use crate::error::{AppError, Result};

use super::naming::numbered_name;

/// What to do when the destination file already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display, VariantNames)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ConflictPolicy {
    /// Replace the existing file, last copy wins
    #[default]
    Overwrite,

    /// Keep the existing file and leave the source uncopied
    Skip,

    /// Abort the run with `AppError::DestinationConflict`
    Fail,

    /// Append `_1`, `_2`, ... until the name is free
    Rename,
}

/// Resolution of a single destination path
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Resolved {
    Copy(PathBuf),
    Skip,
}

impl ConflictPolicy {
    pub(crate) fn resolve(self, output_dir: &Path, name: &str) -> Result<Resolved> {
        let target = output_dir.join(name);
        if !target.exists() {
            return Ok(Resolved::Copy(target));
        }

        match self {
            ConflictPolicy::Overwrite => Ok(Resolved::Copy(target)),
            ConflictPolicy::Skip => Ok(Resolved::Skip),
            ConflictPolicy::Fail => Err(AppError::DestinationConflict(target)),
            ConflictPolicy::Rename => {
                let free = (1..)
                    .map(|n| output_dir.join(numbered_name(name, n)))
                    .find(|p| !p.exists())
                    .unwrap_or(target);
                Ok(Resolved::Copy(free))
            }
        }
    }
}

impl<'de> Deserialize<'de> for ConflictPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        ConflictPolicy::from_str(&value).map_err(|_| {
            let variants = ConflictPolicy::VARIANTS;
            serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(&value),
                &format!("one of {}", variants.join(", ")).as_str(),
            )
        })
    }
}
