//! Rendered flame graph output writer.
//!
//! Writes the rendered document to a file, or to standard output when the
//! destination is `-`.

use crate::utils::config::STDIO_SENTINEL;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write rendered content to its destination
///
/// **Public** - main entry point for output
///
/// # Arguments
/// * `content` - Rendered JSON or HTML
/// * `output_path` - Destination file, or `-` for standard output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error opening or writing the destination
/// * `OutputError::InvalidPath` - Path is empty or is a directory
pub fn write_output(content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    if output_path == Path::new(STDIO_SENTINEL) {
        debug!("Writing {} bytes to standard output", content.len());
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(content.as_bytes())?;
        handle.flush()?;
        return Ok(());
    }

    info!("Writing flame graph to: {}", output_path.display());

    validate_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Flame graph written successfully ({} bytes, {:.2} KB)",
        content.len(),
        content.len() as f64 / 1024.0
    );

    Ok(())
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_output_to_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("stacks.json");

        write_output("{\"name\":\"root\"}", &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"name\":\"root\"}");
    }

    #[test]
    fn test_missing_parent_dir_is_write_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("no/such/dir/out.html");

        let result = write_output("x", &path);
        assert!(matches!(result, Err(OutputError::WriteFailed(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_validate_output_path_empty() {
        assert!(validate_output_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = validate_output_path(temp_dir.path());
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }
}
