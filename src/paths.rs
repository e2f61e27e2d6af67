use std::path::PathBuf;

/// Returns the root deskhub directory path.
///
/// Resolution order:
/// 1. `DESKHUB_ROOT` environment variable (if set)
/// 2. Current working directory + `.deskhub`
pub fn deskhub_root() -> PathBuf {
    if let Ok(root) = std::env::var("DESKHUB_ROOT") {
        PathBuf::from(root)
    } else {
        PathBuf::from(".deskhub")
    }
}

/// Returns the path to the app config file.
pub fn config_path() -> PathBuf {
    deskhub_root().join("config.yaml")
}

/// Returns the path to the persisted saved-filter collection.
pub fn saved_filters_path() -> PathBuf {
    deskhub_root().join("filters.yaml")
}

/// Returns the path to the session file.
pub fn session_path() -> PathBuf {
    deskhub_root().join("session.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_deskhub_root_default() {
        // Clear DESKHUB_ROOT to test default behavior
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::remove_var("DESKHUB_ROOT") };
        let root = deskhub_root();
        assert_eq!(root, PathBuf::from(".deskhub"));
    }

    #[test]
    #[serial]
    fn test_deskhub_root_with_env_var() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::set_var("DESKHUB_ROOT", "/custom/path/.deskhub") };
        let root = deskhub_root();
        assert_eq!(root, PathBuf::from("/custom/path/.deskhub"));
        unsafe { std::env::remove_var("DESKHUB_ROOT") };
    }

    #[test]
    #[serial]
    fn test_config_path_default() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::remove_var("DESKHUB_ROOT") };
        assert_eq!(config_path(), PathBuf::from(".deskhub/config.yaml"));
    }

    #[test]
    #[serial]
    fn test_saved_filters_path_with_env_var() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::set_var("DESKHUB_ROOT", "/custom/path/.deskhub") };
        assert_eq!(
            saved_filters_path(),
            PathBuf::from("/custom/path/.deskhub/filters.yaml")
        );
        unsafe { std::env::remove_var("DESKHUB_ROOT") };
    }
}
