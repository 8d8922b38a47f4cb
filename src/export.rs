//! PNG export of a board's pixel buffer.

use crate::config::ExportConfig;
use crate::draw::{Surface, SurfaceError};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting a board.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
///
/// # Returns
/// Generated filename with a `.png` extension
pub fn generate_filename(template: &str) -> String {
    let now = Local::now();
    format!("{}.png", now.format(template))
}

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    path.to_path_buf()
}

/// Ensure the output directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Writes the surface to an exact path, creating parent directories.
pub fn save_png(surface: &Surface, path: &Path) -> Result<PathBuf, ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }

    let bytes = surface.to_png_bytes()?;
    fs::write(path, &bytes)?;

    log::info!("Saved board to: {} ({} bytes)", path.display(), bytes.len());
    Ok(path.to_path_buf())
}

/// Writes the surface under `config.output_dir` with a timestamped name.
pub fn export_png(surface: &Surface, config: &ExportConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&expand_tilde(&config.output_dir))?;
    let filename = generate_filename(&config.filename_template);
    save_png(surface, &directory.join(filename))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn generate_filename_appends_extension() {
        let name = generate_filename("board_%Y");
        assert!(name.starts_with("board_"));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn expand_tilde_resolves_home_prefix() {
        let expanded = expand_tilde(Path::new("~/Pictures/Chalkboard"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("Pictures").join("Chalkboard"));
        }
    }

    #[test]
    fn expand_tilde_leaves_other_paths_alone() {
        assert_eq!(expand_tilde(Path::new("/tmp/out")), PathBuf::from("/tmp/out"));
        assert_eq!(expand_tilde(Path::new("rel/~x")), PathBuf::from("rel/~x"));
        assert_eq!(expand_tilde(Path::new("~user/x")), PathBuf::from("~user/x"));
    }

    #[test]
    fn export_writes_into_configured_directory() {
        let temp = TempDir::new().unwrap();
        let config = ExportConfig {
            output_dir: temp.path().join("out"),
            filename_template: "fixed".to_string(),
        };
        let surface = Surface::new(16, 16).unwrap();

        let path = export_png(&surface, &config).unwrap();
        assert_eq!(path.file_name().unwrap(), "fixed.png");
        let data = fs::read(&path).unwrap();
        assert_eq!(&data[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn save_png_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a").join("b").join("board.png");
        let surface = Surface::new(4, 4).unwrap();

        save_png(&surface, &target).unwrap();
        assert!(target.exists());
    }
}
