use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Extensions accepted as raster image candidates, matched case-insensitively.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

/// List the image candidates directly inside `dir`, sorted by file name.
///
/// The listing is non-recursive: subdirectories are not descended into.
/// Sorting makes "first occurrence wins" reproducible across platforms whose
/// raw directory order differs.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(Error::DirectoryNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut images = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() && has_allowed_extension(entry.path()) {
            images.push(entry.into_path());
        }
    }
    Ok(images)
}

fn has_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_lists_only_allowed_extensions() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["a.jpg", "b.PNG", "c.jpeg", "d.gif", "e.bmp"] {
            fs::write(tmp.path().join(name), b"stub").unwrap();
        }
        fs::write(tmp.path().join("notes.txt"), b"stub").unwrap();
        fs::write(tmp.path().join("clip.mp4"), b"stub").unwrap();
        fs::write(tmp.path().join("noext"), b"stub").unwrap();

        let images = list_images(tmp.path()).unwrap();
        assert_eq!(images.len(), 5);
    }

    #[test]
    fn test_extension_filter_is_case_insensitive() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("UPPER.JPG"), b"stub").unwrap();
        fs::write(tmp.path().join("Mixed.JpEg"), b"stub").unwrap();

        let images = list_images(tmp.path()).unwrap();
        assert_eq!(images.len(), 2);
    }

    #[test]
    fn test_subdirectories_are_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let sub = tmp.path().join("nested");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("inner.jpg"), b"stub").unwrap();
        fs::write(tmp.path().join("outer.jpg"), b"stub").unwrap();

        let images = list_images(tmp.path()).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].file_name().unwrap(), "outer.jpg");
    }

    #[test]
    fn test_directory_named_like_image_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("folder.jpg")).unwrap();

        let images = list_images(tmp.path()).unwrap();
        assert!(images.is_empty());
    }

    #[test]
    fn test_output_is_sorted_by_file_name() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["zzz.jpg", "aaa.jpg", "mmm.jpg"] {
            fs::write(tmp.path().join(name), b"stub").unwrap();
        }

        let images = list_images(tmp.path()).unwrap();
        let names: Vec<_> = images
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["aaa.jpg", "mmm.jpg", "zzz.jpg"]);
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let err = list_images(Path::new("/nonexistent/photos")).unwrap_err();
        assert!(matches!(err, Error::DirectoryNotFound(_)));
    }

    #[test]
    fn test_file_target_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("image.jpg");
        fs::write(&file, b"stub").unwrap();

        let err = list_images(&file).unwrap_err();
        assert!(matches!(err, Error::NotADirectory(_)));
    }

    #[test]
    fn test_empty_directory_yields_empty_list() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(list_images(tmp.path()).unwrap().is_empty());
    }
}
