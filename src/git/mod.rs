//! Git plumbing for freshly generated projects
//!
//! Handles:
//! - Repository initialization
//! - Library submodules
//! - Author name lookup

mod operations;

pub use operations::{config_user_name, init, is_repo_root, submodule_add};

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn git_available() -> bool {
        which::which("git").is_ok()
    }

    #[test]
    fn test_init_creates_repository() {
        if !git_available() {
            return;
        }
        let temp = TempDir::new().unwrap();

        assert!(!is_repo_root(temp.path()).unwrap());
        init(temp.path()).unwrap();

        assert!(temp.path().join(".git").is_dir());
        assert!(is_repo_root(temp.path()).unwrap());
    }

    #[test]
    fn test_nested_directory_is_not_a_repo_root() {
        if !git_available() {
            return;
        }
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        let nested = temp.path().join("demo");
        std::fs::create_dir(&nested).unwrap();

        assert!(!is_repo_root(&nested).unwrap());
    }
}
