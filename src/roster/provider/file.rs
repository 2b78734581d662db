use super::{parse_response, PeopleProvider};
use crate::error::Result;
use crate::model::RawPerson;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a saved provider response (`{"results": [...]}`) from disk.
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PeopleProvider for FileProvider {
    fn fetch(&self) -> Result<Vec<RawPerson>> {
        tracing::debug!(path = %self.path.display(), "reading people from file");
        let body = fs::read_to_string(&self.path)?;
        parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;

    #[test]
    fn reads_saved_response() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("people.json");
        fs::write(&path, r#"{"results":[{"email":"a@x.test"}]}"#).unwrap();

        let raw = FileProvider::new(&path).fetch().unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].email.as_deref(), Some("a@x.test"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileProvider::new(dir.path().join("nope.json"));
        assert!(matches!(provider.fetch(), Err(RosterError::Io(_))));
    }
}
