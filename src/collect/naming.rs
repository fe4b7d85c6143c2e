use std::path::Path;

/// Image extensions collected by default (compared case-insensitively)
pub const IMAGE_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp", "svg"];

pub fn is_image_file<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.extension().is_some_and(|ext| {
        let ext = ext.to_string_lossy();
        extensions
            .iter()
            .any(|known| known.as_ref().trim_start_matches('.').eq_ignore_ascii_case(&ext))
    })
}

/// Flat destination name: `<stem>_<parent>.<ext>`, extension case kept.
///
/// A path without a named parent (e.g. `./photo.jpg`) gets an empty parent
/// segment. Returns `None` for paths without a stem or extension.
pub fn destination_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    let ext = path.extension()?.to_string_lossy();
    let parent = path
        .parent()
        .and_then(Path::file_name)
        .unwrap_or_default()
        .to_string_lossy();
    Some(format!("{}_{}.{}", stem, parent, ext))
}

/// `<base-stem>_<n>.<ext>` for the n-th alternative of `name`
pub(crate) fn numbered_name(name: &str, n: usize) -> String {
    let name_path = Path::new(name);
    let stem = name_path.file_stem().unwrap_or_default().to_string_lossy();
    match name_path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, n, ext.to_string_lossy()),
        None => format!("{}_{}", stem, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_is_image_file_case_insensitive() {
        for name in ["a.jpg", "a.JPG", "a.Jpeg", "a.png", "a.gif", "a.bmp", "a.TIFF", "a.webp", "a.svg"] {
            assert!(is_image_file(Path::new(name), &IMAGE_EXTENSIONS), "{name}");
        }
        for name in ["a.txt", "a.py", "a.tif", "jpg", ".png", "a.png.bak"] {
            assert!(!is_image_file(Path::new(name), &IMAGE_EXTENSIONS), "{name}");
        }
    }

    #[test]
    fn test_is_image_file_custom_set() {
        let exts = vec!["raw".to_string(), ".NEF".to_string()];
        assert!(is_image_file(Path::new("x.nef"), &exts));
        assert!(is_image_file(Path::new("x.RAW"), &exts));
        assert!(!is_image_file(Path::new("x.jpg"), &exts));
    }

    #[test]
    fn test_destination_name() {
        let path = PathBuf::from("root/catsDir/cat1.png");
        assert_eq!(destination_name(&path).as_deref(), Some("cat1_catsDir.png"));

        let path = PathBuf::from("root/dogsDir/dog1.JPG");
        assert_eq!(destination_name(&path).as_deref(), Some("dog1_dogsDir.JPG"));

        let path = PathBuf::from("root/a/archive.tar.png");
        assert_eq!(destination_name(&path).as_deref(), Some("archive.tar_a.png"));
    }

    #[test]
    fn test_destination_name_without_parent_name() {
        assert_eq!(
            destination_name(Path::new("./photo.jpg")).as_deref(),
            Some("photo_.jpg")
        );
        assert_eq!(destination_name(Path::new("README")), None);
    }

    #[test]
    fn test_numbered_name() {
        assert_eq!(numbered_name("photo_a.jpg", 1), "photo_a_1.jpg");
        assert_eq!(numbered_name("photo_a.JPG", 12), "photo_a_12.JPG");
    }
}
