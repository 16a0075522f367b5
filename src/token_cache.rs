use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Sentinel used on platforms without a numeric OS user id.
#[cfg(not(unix))]
const NO_UID: i64 = -1;

/// On-disk cache for session tokens.
///
/// The file name hashes the API username together with the OS user id,
/// so tenants sharing a host never pick up each other's tokens. All IO
/// is best effort: a failed read counts as a cache miss, and failed
/// writes or deletes are logged and otherwise ignored. The file is not
/// locked; processes racing on login may each authenticate once.
#[derive(Debug, Clone)]
pub struct TokenCache {
    path: PathBuf,
}

impl TokenCache {
    /// Resolve the cache file for `username` under `cache_dir`. Returns
    /// `None` when the directory does not exist, which disables caching
    /// for the login in progress.
    pub fn resolve(cache_dir: &Path, username: &str) -> Option<Self> {
        if !cache_dir.is_dir() {
            debug!(dir = %cache_dir.display(), "token cache directory missing, caching disabled");
            return None;
        }
        let digest = md5::compute(format!("{username}|{}", current_uid()));
        Some(Self {
            path: cache_dir.join(format!(".zabbix-rs-token-{digest:x}")),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached token. Any failure counts as a miss.
    pub fn read(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(token) if !token.trim().is_empty() => {
                debug!(path = %self.path.display(), "found cached session token");
                Some(token.trim().to_string())
            }
            Ok(_) => None,
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to read token cache");
                None
            }
        }
    }

    /// Write the token and restrict the file to owner read/write.
    pub fn write(&self, token: &str) {
        if let Err(err) = fs::write(&self.path, token) {
            warn!(path = %self.path.display(), %err, "failed to write token cache");
            return;
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(err) = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)) {
                warn!(path = %self.path.display(), %err, "failed to restrict token cache permissions");
            }
        }
        debug!(path = %self.path.display(), "cached session token");
    }

    /// Delete a stale cache file.
    pub fn invalidate(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "deleted stale token cache"),
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to delete stale token cache")
            }
        }
    }
}

#[cfg(unix)]
fn current_uid() -> i64 {
    // getuid(2) cannot fail.
    i64::from(unsafe { libc::getuid() })
}

#[cfg(not(unix))]
fn current_uid() -> i64 {
    NO_UID
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_requires_existing_directory() {
        assert!(TokenCache::resolve(Path::new("/definitely/not/here"), "Admin").is_none());
    }

    #[test]
    fn test_path_is_stable_per_username() {
        let dir = tempdir().unwrap();
        let first = TokenCache::resolve(dir.path(), "Admin").unwrap();
        let second = TokenCache::resolve(dir.path(), "Admin").unwrap();
        let other = TokenCache::resolve(dir.path(), "guest").unwrap();

        assert_eq!(first.path(), second.path());
        assert_ne!(first.path(), other.path());
        assert!(first
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(".zabbix-rs-token-"));
    }

    #[test]
    fn test_read_write_invalidate_round_trip() {
        let dir = tempdir().unwrap();
        let cache = TokenCache::resolve(dir.path(), "Admin").unwrap();

        assert!(cache.read().is_none());

        cache.write("0424bd59b807674191e7d77572075f33");
        assert_eq!(
            cache.read().as_deref(),
            Some("0424bd59b807674191e7d77572075f33")
        );

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(cache.path()).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }

        cache.invalidate();
        assert!(cache.read().is_none());
        // A second invalidation of a missing file is a no-op.
        cache.invalidate();
    }

    #[test]
    fn test_blank_file_counts_as_miss() {
        let dir = tempdir().unwrap();
        let cache = TokenCache::resolve(dir.path(), "Admin").unwrap();
        fs::write(cache.path(), "  \n").unwrap();
        assert!(cache.read().is_none());
    }
}
