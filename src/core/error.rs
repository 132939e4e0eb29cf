//! Materializer error types.

use std::path::PathBuf;

/// Errors from reading, parsing, or writing the games data.
#[derive(Debug, thiserror::Error)]
pub enum MaterializeError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid games data in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MaterializeError {
    /// Path the failing operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            MaterializeError::Read { path, .. }
            | MaterializeError::Parse { path, .. }
            | MaterializeError::Write { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_message_names_path_and_cause() {
        let err = MaterializeError::Read {
            path: PathBuf::from("/x/games.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/x/games.json"));
        assert!(msg.contains("no such file"));
        assert_eq!(err.path(), std::path::Path::new("/x/games.json"));
    }

    #[test]
    fn parse_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{not valid json").unwrap_err();
        let err = MaterializeError::Parse {
            path: PathBuf::from("games.json"),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("line 1"));
    }
}
