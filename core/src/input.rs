use crate::error::{Result, SearchError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read one logical record (document or query) per line. Lines are kept
/// verbatim, including blank ones, so line N is document N.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let unavailable = |source| SearchError::InputUnavailable { path: path.to_path_buf(), source };
    let f = File::open(path).map_err(unavailable)?;
    let reader = BufReader::new(f);
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>().map_err(unavailable)?;
    tracing::debug!(path = %path.display(), count = lines.len(), "read input");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_lines_in_order() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("docs.txt");
        fs::write(&p, "cat dog\n\ndog bird\r\n").unwrap();
        let lines = read_lines(&p).unwrap();
        assert_eq!(lines, vec!["cat dog", "", "dog bird"]);
    }

    #[test]
    fn missing_file_is_input_unavailable() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("nope.txt");
        let err = read_lines(&p).unwrap_err();
        match err {
            SearchError::InputUnavailable { path, .. } => assert_eq!(path, p),
            other => panic!("unexpected error: {other}"),
        }
    }
}
