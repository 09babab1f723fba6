use std::path::{Path, PathBuf};

use cardia_config::PROJECT_DIR;

/// Walk upwards from `start` until a `.cardia` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(PROJECT_DIR).is_dir() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::find_project_root;

    #[test]
    fn finds_project_root_in_current_directory() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir(temp.path().join(".cardia")).expect(".cardia should create");

        let found = find_project_root(temp.path());
        assert_eq!(found.as_deref(), Some(temp.path()));
    }

    #[test]
    fn finds_project_root_in_parent_directory() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir(temp.path().join(".cardia")).expect(".cardia should create");
        std::fs::create_dir_all(temp.path().join("reports/2024")).expect("nested dirs should create");

        let found = find_project_root(&temp.path().join("reports/2024"));
        assert_eq!(found.as_deref(), Some(temp.path()));
    }

    #[test]
    fn a_plain_file_named_like_the_project_dir_does_not_count() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir_all(temp.path().join("a/b")).expect("nested dirs should create");
        std::fs::write(temp.path().join("a/.cardia"), "").expect("file should write");

        let found = find_project_root(&temp.path().join("a/b"));
        assert!(found.is_none());
    }
}
