//! Directory list assembly from arguments and `PATH`.

use super::ConfigError;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Upper bound on directories scanned in one run.
pub const MAX_DIRECTORIES: usize = 512;

/// Upper bound on the byte length of a single directory path.
pub const MAX_DIRECTORY_LEN: usize = 4096;

/// Build the ordered list of directories to scan.
///
/// Explicit directories come first, in argument order. `PATH` entries are
/// appended when no explicit directories were given or when `include_path`
/// is set. Empty `PATH` segments are dropped and nothing is deduplicated.
///
/// # Errors
///
/// - [`ConfigError::TooManyDirectories`] past [`MAX_DIRECTORIES`] entries.
/// - [`ConfigError::DirectoryTooLong`] for any path over
///   [`MAX_DIRECTORY_LEN`] bytes.
pub fn resolve_directories(
    explicit: &[PathBuf],
    include_path: bool,
    path_env: Option<&OsStr>,
) -> Result<Vec<PathBuf>, ConfigError> {
    let mut directories: Vec<PathBuf> = explicit.to_vec();

    if explicit.is_empty() || include_path {
        if let Some(path_env) = path_env {
            directories.extend(
                std::env::split_paths(path_env).filter(|dir| !dir.as_os_str().is_empty()),
            );
        }
    }

    if directories.len() > MAX_DIRECTORIES {
        return Err(ConfigError::TooManyDirectories {
            count: directories.len(),
            max: MAX_DIRECTORIES,
        });
    }

    if let Some(dir) = directories
        .iter()
        .find(|dir| dir.as_os_str().len() > MAX_DIRECTORY_LEN)
    {
        return Err(ConfigError::DirectoryTooLong {
            path: dir.clone(),
            len: dir.as_os_str().len(),
            max: MAX_DIRECTORY_LEN,
        });
    }

    Ok(directories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn explicit_directories_replace_path_by_default() {
        let explicit = paths(&["/opt/tools", "/srv/bin"]);
        let path_env = OsString::from("/usr/bin:/bin");

        let dirs = resolve_directories(&explicit, false, Some(&path_env)).unwrap();

        assert_eq!(dirs, explicit);
    }

    #[test]
    fn path_is_used_when_no_directories_given() {
        let path_env = OsString::from("/usr/local/bin:/usr/bin:/bin");

        let dirs = resolve_directories(&[], false, Some(&path_env)).unwrap();

        assert_eq!(dirs, paths(&["/usr/local/bin", "/usr/bin", "/bin"]));
    }

    #[test]
    fn include_path_appends_after_explicit_directories() {
        let explicit = paths(&["/opt/tools"]);
        let path_env = OsString::from("/usr/bin:/bin");

        let dirs = resolve_directories(&explicit, true, Some(&path_env)).unwrap();

        assert_eq!(dirs, paths(&["/opt/tools", "/usr/bin", "/bin"]));
    }

    #[test]
    fn empty_path_segments_are_dropped() {
        let path_env = OsString::from(":/usr/bin::/bin:");

        let dirs = resolve_directories(&[], false, Some(&path_env)).unwrap();

        assert_eq!(dirs, paths(&["/usr/bin", "/bin"]));
    }

    #[test]
    fn duplicates_are_kept() {
        let explicit = paths(&["/usr/bin"]);
        let path_env = OsString::from("/usr/bin");

        let dirs = resolve_directories(&explicit, true, Some(&path_env)).unwrap();

        assert_eq!(dirs, paths(&["/usr/bin", "/usr/bin"]));
    }

    #[test]
    fn missing_path_yields_no_directories() {
        let dirs = resolve_directories(&[], false, None).unwrap();
        assert!(dirs.is_empty());
    }

    #[test]
    fn accepts_exactly_the_maximum_count() {
        let explicit: Vec<PathBuf> = (0..MAX_DIRECTORIES)
            .map(|i| PathBuf::from(format!("/d{i}")))
            .collect();

        let dirs = resolve_directories(&explicit, false, None).unwrap();

        assert_eq!(dirs.len(), MAX_DIRECTORIES);
    }

    #[test]
    fn rejects_too_many_directories() {
        let explicit: Vec<PathBuf> = (0..MAX_DIRECTORIES)
            .map(|i| PathBuf::from(format!("/d{i}")))
            .collect();
        let path_env = OsString::from("/usr/bin");

        let result = resolve_directories(&explicit, true, Some(&path_env));

        assert_eq!(
            result,
            Err(ConfigError::TooManyDirectories {
                count: MAX_DIRECTORIES + 1,
                max: MAX_DIRECTORIES,
            })
        );
    }

    #[test]
    fn rejects_overlong_directory() {
        let long = PathBuf::from(format!("/{}", "a".repeat(MAX_DIRECTORY_LEN)));
        let explicit = vec![PathBuf::from("/ok"), long.clone()];

        let result = resolve_directories(&explicit, false, None);

        assert_eq!(
            result,
            Err(ConfigError::DirectoryTooLong {
                path: long,
                len: MAX_DIRECTORY_LEN + 1,
                max: MAX_DIRECTORY_LEN,
            })
        );
    }

    #[test]
    fn accepts_directory_at_length_limit() {
        let at_limit = PathBuf::from(format!("/{}", "a".repeat(MAX_DIRECTORY_LEN - 1)));

        let dirs = resolve_directories(std::slice::from_ref(&at_limit), false, None).unwrap();

        assert_eq!(dirs, vec![at_limit]);
    }
}
