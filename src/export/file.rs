//! Local "download" of rasterized sketches.

use super::types::ExportError;
use std::fs;
use std::path::{Path, PathBuf};

/// File name used for downloaded sketches.
pub const DEFAULT_FILENAME: &str = "screenshot.png";

/// Where downloaded sketches are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadConfig {
    /// Directory the PNG is written to.
    pub directory: PathBuf,
    /// Fixed file name; an existing file with this name is replaced.
    pub filename: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            directory: default_download_directory(),
            filename: DEFAULT_FILENAME.to_string(),
        }
    }
}

/// The user's download directory, or the working directory when there is none.
pub fn default_download_directory() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Ensure the download directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating download directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Write PNG bytes to `<directory>/<filename>`.
///
/// # Returns
/// Path to the written file
pub fn save_download(image_data: &[u8], config: &DownloadConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.directory)?;
    let file_path = directory.join(&config.filename);

    log::info!(
        "Saving sketch to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    fs::write(&file_path, image_data)?;

    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_download_writes_bytes_under_fixed_name() {
        let temp = TempDir::new().unwrap();
        let config = DownloadConfig {
            directory: temp.path().join("nested"),
            filename: DEFAULT_FILENAME.to_string(),
        };

        let path = save_download(&[1, 2, 3], &config).unwrap();
        assert!(path.ends_with(DEFAULT_FILENAME));
        assert_eq!(fs::read(&path).unwrap(), vec![1, 2, 3]);

        // Second download replaces the first.
        let again = save_download(&[4, 5], &config).unwrap();
        assert_eq!(again, path);
        assert_eq!(fs::read(&path).unwrap(), vec![4, 5]);
    }

    #[test]
    fn save_download_fails_when_directory_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();

        let config = DownloadConfig {
            directory: blocker.join("sub"),
            filename: DEFAULT_FILENAME.to_string(),
        };
        let err = save_download(&[1], &config).unwrap_err();
        assert!(matches!(err, ExportError::Save(_)));
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Downloads");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_default_config() {
        let config = DownloadConfig::default();
        assert_eq!(config.filename, "screenshot.png");
    }
}
