//! Word-list file loading. I/O glue outside the partitioning core: the
//! returned vector is the word source the registry borrows from.

use std::fs;
use std::io;
use std::path::Path;

use crate::FamilyError;

/// Read a word list from `path`, one word per line.
///
/// Surrounding whitespace is trimmed and blank lines are skipped. I/O
/// failures carry the path and a short hint.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<String>, FamilyError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| io_error("reading", path, e))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Wrap an I/O error with the operation, the path, and a suggestion.
fn io_error(operation: &str, path: &Path, err: io::Error) -> FamilyError {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        InvalidData => "Word lists must be UTF-8 text, one word per line.",
        _ => "Check permissions and that the file is readable.",
    };
    FamilyError::Io(io::Error::new(
        err.kind(),
        format!("Error {} '{}': {}. {}", operation, path.display(), err, suggestion),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_trimmed_nonblank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "cat\n  car\n\nbat ").unwrap();
        let words = load(&path).unwrap();
        assert_eq!(words, vec!["cat", "car", "bat"]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load("no-such-wordlist.txt").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("no-such-wordlist.txt"), "got: {msg}");
    }
}
