//! Shared helpers for unit tests.

use std::{
    fs::{create_dir_all, remove_dir_all},
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

/// Self-cleaning temporary directory for tests.
pub struct TestDir {
    path: PathBuf,
}

impl TestDir {
    pub fn new(tag: &str) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let path = std::env::temp_dir().join(format!(
            "fontheader_core_{tag}_{}_{ts}",
            std::process::id()
        ));
        create_dir_all(&path).expect("create temp test dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = remove_dir_all(&self.path);
    }
}
