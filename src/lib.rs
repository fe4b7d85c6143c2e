mod collect;
mod error;
mod lister;
mod logging;
mod progress_bar;
mod toml_utils;

pub use collect::{
    CollectArgs, CollectReport, ConflictPolicy, CopiedFile, IMAGE_EXTENSIONS, collect_images,
    destination_name, is_image_file,
};
pub use error::{AppError, Result};
pub use lister::{ListArgs, list_filenames, write_filenames};
pub use logging::init_logger;
pub use progress_bar::progress_bar_style;
pub use toml_utils::{ToolConfig, parse_toml};
