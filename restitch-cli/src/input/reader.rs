//! Delimited fragment input

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Practical fragment length bound. Longer fragments still reconstruct
/// correctly; the quadratic merge cost just starts to bite.
const FRAGMENT_LEN_WARNING: usize = 1200;

/// Read fragments from `path`, or stdin when no path is given
pub fn read_fragments(path: Option<&Path>, delimiter: char) -> Result<Vec<String>> {
    let raw = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    Ok(split_fragments(&raw, delimiter))
}

/// Split raw input into fragments on `delimiter`
///
/// Trailing newlines are stripped first. Empty tokens are dropped with a
/// warning: a zero-length fragment has no boundary to anchor an overlap to.
pub fn split_fragments(raw: &str, delimiter: char) -> Vec<String> {
    let mut fragments = Vec::new();

    for token in raw.trim_end_matches(['\r', '\n']).split(delimiter) {
        if token.is_empty() {
            log::warn!("Skipping empty fragment in input");
            continue;
        }
        if token.len() > FRAGMENT_LEN_WARNING {
            log::warn!(
                "Fragment of {} bytes exceeds the expected bound of {} characters",
                token.len(),
                FRAGMENT_LEN_WARNING
            );
        }
        fragments.push(token.to_string());
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_split_on_default_delimiter() {
        let fragments = split_fragments("greatpeking;pekingduckfordinner;duck", ';');
        assert_eq!(
            fragments,
            vec!["greatpeking", "pekingduckfordinner", "duck"]
        );
    }

    #[test]
    fn test_split_strips_trailing_newline() {
        let fragments = split_fragments("ab;bc\n", ';');
        assert_eq!(fragments, vec!["ab", "bc"]);

        let fragments = split_fragments("ab;bc\r\n", ';');
        assert_eq!(fragments, vec!["ab", "bc"]);
    }

    #[test]
    fn test_split_drops_empty_tokens() {
        let fragments = split_fragments("ab;;bc;", ';');
        assert_eq!(fragments, vec!["ab", "bc"]);
    }

    #[test]
    fn test_split_on_custom_delimiter() {
        let fragments = split_fragments("ab|bc|cd", '|');
        assert_eq!(fragments, vec!["ab", "bc", "cd"]);
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_fragments("", ';').is_empty());
        assert!(split_fragments("\n", ';').is_empty());
    }

    #[test]
    fn test_read_fragments_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "abcd;cdef;efgh\n").unwrap();

        let fragments = read_fragments(Some(file.path()), ';').unwrap();
        assert_eq!(fragments, vec!["abcd", "cdef", "efgh"]);
    }

    #[test]
    fn test_read_fragments_missing_file() {
        let result = read_fragments(Some(Path::new("/nonexistent/fragments.txt")), ';');
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }
}
