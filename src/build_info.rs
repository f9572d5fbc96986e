//! Commit hash and build date captured by `build.rs`.
//!
//! Defines `BUILD_COMMIT`, `BUILD_DATE` and `BUILD_VERSION`, the
//! "date (commit)" string shown by `flappy --version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_is_short_hash_or_unknown() {
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_date_not_empty() {
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_version_combines_date_and_commit() {
        assert!(BUILD_VERSION.starts_with(BUILD_DATE));
        assert!(BUILD_VERSION.ends_with(&format!("({})", BUILD_COMMIT)));
    }
}
