use tempfile::TempDir;

/// Create a temporary directory for a file store
pub fn create_test_store_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}
