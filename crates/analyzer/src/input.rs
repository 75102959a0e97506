//! Input — locate the log file and read it fully into memory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AnalyzerError;

/// Resolve the log file argument, failing when it is absent or not an existing file.
pub fn check_file(path: Option<&Path>) -> Result<PathBuf, AnalyzerError> {
    let path = path.ok_or_else(|| AnalyzerError::MissingInput("File path not passed.".into()))?;

    if !path.is_file() {
        return Err(AnalyzerError::MissingInput(format!(
            "{} does not exist",
            path.display()
        )));
    }
    Ok(path.to_path_buf())
}

/// Read every line of `path`, without line terminators.
///
/// The file is opened, read and closed within this call.
pub fn read_lines(path: &Path) -> Result<Vec<String>, AnalyzerError> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("test.log");
        fs::write(&log_file, "").unwrap();

        let result = check_file(Some(log_file.as_path())).unwrap();
        assert_eq!(result, log_file);
        assert!(result.exists());
    }

    #[test]
    fn test_check_absent_argument() {
        assert!(matches!(check_file(None), Err(AnalyzerError::MissingInput(_))));
    }

    #[test]
    fn test_check_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = check_file(Some(dir.path().join("nope.log").as_path()));
        assert!(matches!(result, Err(AnalyzerError::MissingInput(_))));
    }

    #[test]
    fn test_check_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(check_file(Some(dir.path())), Err(AnalyzerError::MissingInput(_))));
    }

    #[test]
    fn test_read_single_line() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("test.log");
        let line = "192.168.1.1 - - [10/Jan/2024:13:55:36 +0000] \"GET /index.html HTTP/1.1\" 200 1024";
        fs::write(&log_file, line).unwrap();

        assert_eq!(read_lines(&log_file).unwrap(), vec![line.to_string()]);
    }

    #[test]
    fn test_read_strips_terminators() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("test.log");
        fs::write(&log_file, "first\r\nsecond\n").unwrap();

        assert_eq!(read_lines(&log_file).unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_read_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("empty.log");
        fs::write(&log_file, "").unwrap();

        assert!(read_lines(&log_file).unwrap().is_empty());
    }
}
