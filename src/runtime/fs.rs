//! File system operations.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn create_file_impl(&self, path: &Path) -> io::Result<Box<dyn io::Write + Send>> {
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_create_file_truncates_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tool.bin");
        std::fs::write(&path, b"a much longer previous content").unwrap();

        let runtime = RealRuntime;
        {
            let mut file = runtime.create_file(&path).unwrap();
            file.write_all(b"new").unwrap();
            file.flush().unwrap();
        }

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn test_create_file_missing_parent_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("tool.bin");

        let runtime = RealRuntime;
        let err = runtime.create_file(&path).err().unwrap();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
