use crate::core::Storage;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Writes files under a base directory, replacing any previous content.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&full_path, data).await?;
        Ok(full_path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_write_truncates_previous_content() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        tokio_test::block_on(async {
            storage.write_file("primes.txt", b"2\n3\n5\n7\n").await.unwrap();
            let path = storage.write_file("primes.txt", b"2\n").await.unwrap();
            assert_eq!(std::fs::read_to_string(path).unwrap(), "2\n");
        });
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("nested"));

        let path = tokio_test::block_on(storage.write_file("runs/primes.txt", b"2\n")).unwrap();
        assert!(Path::new(&path).exists());
    }
}
