use std::fs;
use std::path::Path;

use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Writes output files beneath a base directory, creating parents as needed.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_file_under_base_path() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());

        storage.write_file("summary.csv", b"a,b,c\n").unwrap();

        let written = std::fs::read(dir.path().join("summary.csv")).unwrap();
        assert_eq!(written, b"a,b,c\n");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("nested").join("out");
        let storage = LocalStorage::new(base.to_str().unwrap().to_string());

        storage.write_file("summary.csv", b"x").unwrap();

        assert!(base.join("summary.csv").exists());
    }
}
